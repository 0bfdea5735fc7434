//! Map renderer.
//!
//! Rendering goes through an explicit [`MapSurface`]: the caller owns the
//! surface and passes it into each call, so there is no hidden "current
//! figure". Each call is a one-shot pass that starts by installing a fresh
//! projection on the surface.
//!
//! - [`draw_progress_map`]: stations plus, optionally, the solver's iterations
//! - [`draw_final_map`]: tight map around the final estimate with its error ellipse
//! - [`Scene`]: a surface that records draw commands (tests, SVG backend input)

use crate::domain::ErrorEllipse;
use crate::error::AppError;
use crate::projection::Projection;

mod final_map;
mod progress;
pub mod scene;
pub mod style;

pub use final_map::draw_final_map;
pub use progress::draw_progress_map;
pub use scene::{DrawCommand, Scene};
pub use style::{FillStyle, LabelOffset, MarkerShape, MarkerStyle, Rgb};

/// Drawing primitives the renderer needs from a mapping backend.
///
/// Coordinates passed to `scatter`/`annotate` are projected data coordinates
/// (see [`Projection::project`]).
pub trait MapSurface {
    fn set_projection(&mut self, projection: Projection) -> Result<(), AppError>;
    fn draw_states(&mut self) -> Result<(), AppError>;
    fn draw_countries(&mut self) -> Result<(), AppError>;
    fn draw_coastlines(&mut self) -> Result<(), AppError>;
    fn fill_land_ocean(&mut self, land: Rgb, ocean: Rgb) -> Result<(), AppError>;
    fn scatter(&mut self, points: &[(f64, f64)], style: MarkerStyle) -> Result<(), AppError>;
    fn annotate(&mut self, text: &str, at: (f64, f64), offset: LabelOffset, color: Rgb) -> Result<(), AppError>;
    fn add_ellipse(&mut self, ellipse: &ErrorEllipse, fill: FillStyle) -> Result<(), AppError>;
    fn set_title(&mut self, title: &str) -> Result<(), AppError>;
}

/// Administrative borders, coastlines and the land/ocean mask.
fn draw_base_layers<S: MapSurface + ?Sized>(surface: &mut S) -> Result<(), AppError> {
    surface.draw_states()?;
    surface.draw_countries()?;
    surface.draw_coastlines()?;
    surface.fill_land_ocean(style::LAND_COLOR, style::OCEAN_COLOR)
}
