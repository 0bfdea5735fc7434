//! Recording surface.
//!
//! `Scene` keeps every drawing call in order. It is what the SVG backend
//! consumes, and it lets tests inspect exactly what a render pass produced.

use serde::{Deserialize, Serialize};

use super::{FillStyle, LabelOffset, MapSurface, MarkerStyle, Rgb};
use crate::domain::ErrorEllipse;
use crate::error::AppError;
use crate::projection::Projection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    SetProjection(Projection),
    States,
    Countries,
    Coastlines,
    LandOcean {
        land: Rgb,
        ocean: Rgb,
    },
    Scatter {
        points: Vec<(f64, f64)>,
        style: MarkerStyle,
    },
    Annotate {
        text: String,
        at: (f64, f64),
        offset: LabelOffset,
        color: Rgb,
    },
    Ellipse {
        ellipse: ErrorEllipse,
        fill: FillStyle,
    },
    Title(String),
}

impl DrawCommand {
    /// Base-map layers (borders, coastlines, land/ocean).
    pub fn is_base_layer(&self) -> bool {
        matches!(
            self,
            DrawCommand::States | DrawCommand::Countries | DrawCommand::Coastlines | DrawCommand::LandOcean { .. }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The most recently installed projection.
    pub fn projection(&self) -> Option<Projection> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::SetProjection(p) => Some(*p),
            _ => None,
        })
    }

    /// The most recently set title.
    pub fn title(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// All markers drawn in `color`, across scatter calls, in draw order.
    pub fn markers(&self, color: Rgb) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Scatter { points, style } if style.color == color => Some(points.iter().copied()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// `(text, anchor)` of every annotation, in draw order.
    pub fn annotations(&self) -> Vec<(&str, (f64, f64))> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Annotate { text, at, .. } => Some((text.as_str(), *at)),
                _ => None,
            })
            .collect()
    }

    pub fn ellipses(&self) -> Vec<(&ErrorEllipse, &FillStyle)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Ellipse { ellipse, fill } => Some((ellipse, fill)),
                _ => None,
            })
            .collect()
    }
}

impl MapSurface for Scene {
    fn set_projection(&mut self, projection: Projection) -> Result<(), AppError> {
        self.commands.push(DrawCommand::SetProjection(projection));
        Ok(())
    }

    fn draw_states(&mut self) -> Result<(), AppError> {
        self.commands.push(DrawCommand::States);
        Ok(())
    }

    fn draw_countries(&mut self) -> Result<(), AppError> {
        self.commands.push(DrawCommand::Countries);
        Ok(())
    }

    fn draw_coastlines(&mut self) -> Result<(), AppError> {
        self.commands.push(DrawCommand::Coastlines);
        Ok(())
    }

    fn fill_land_ocean(&mut self, land: Rgb, ocean: Rgb) -> Result<(), AppError> {
        self.commands.push(DrawCommand::LandOcean { land, ocean });
        Ok(())
    }

    fn scatter(&mut self, points: &[(f64, f64)], style: MarkerStyle) -> Result<(), AppError> {
        self.commands.push(DrawCommand::Scatter {
            points: points.to_vec(),
            style,
        });
        Ok(())
    }

    fn annotate(&mut self, text: &str, at: (f64, f64), offset: LabelOffset, color: Rgb) -> Result<(), AppError> {
        self.commands.push(DrawCommand::Annotate {
            text: text.to_string(),
            at,
            offset,
            color,
        });
        Ok(())
    }

    fn add_ellipse(&mut self, ellipse: &ErrorEllipse, fill: FillStyle) -> Result<(), AppError> {
        self.commands.push(DrawCommand::Ellipse {
            ellipse: *ellipse,
            fill,
        });
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), AppError> {
        self.commands.push(DrawCommand::Title(title.to_string()));
        Ok(())
    }
}
