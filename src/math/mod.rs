//! Geometry helpers: ellipse outlines.

pub mod ellipse;

pub use ellipse::*;
