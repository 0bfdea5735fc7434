//! Map palette and fixed label offsets.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color, independent of any drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const MAGENTA: Rgb = Rgb(191, 0, 191);
pub const GREEN: Rgb = Rgb(0, 128, 0);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const CORAL: Rgb = Rgb(255, 127, 80);
pub const AQUA: Rgb = Rgb(0, 255, 255);
pub const BORDER: Rgb = Rgb(0, 0, 0);

/// Stations.
pub const STATION_COLOR: Rgb = MAGENTA;
/// Initial guess (iteration 0) once the solver has moved on.
pub const INITIAL_GUESS_COLOR: Rgb = GREEN;
/// Guesses strictly between the initial and the current one.
pub const INTERMEDIATE_COLOR: Rgb = RED;
/// The current (or final) estimate.
pub const CURRENT_COLOR: Rgb = BLUE;
pub const LAND_COLOR: Rgb = CORAL;
pub const OCEAN_COLOR: Rgb = AQUA;
pub const TIME_LABEL_COLOR: Rgb = BLACK;
pub const ELLIPSE_COLOR: Rgb = BLUE;
pub const ELLIPSE_ALPHA: f64 = 0.4;

/// Station name offset from its marker.
pub const STATION_LABEL_OFFSET: LabelOffset = LabelOffset { dx: -20.0, dy: 5.0 };
/// Time label offset from the final estimate.
pub const TIME_LABEL_OFFSET: LabelOffset = LabelOffset { dx: -100.0, dy: -15.0 };

pub const PROGRESS_TITLE: &str = "Map of seismic stations";

pub fn iteration_title(iterate: usize) -> String {
    format!("After {iterate} Iterations")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    Diamond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub color: Rgb,
}

impl MarkerStyle {
    pub fn diamond(color: Rgb) -> Self {
        Self {
            shape: MarkerShape::Diamond,
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub color: Rgb,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f64,
}

/// Screen-space label offset in typographic points, y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelOffset {
    pub dx: f64,
    pub dy: f64,
}
