//! Image backends that turn a recorded [`Scene`](crate::render::Scene) into pixels.

pub mod svg;

pub use svg::*;
