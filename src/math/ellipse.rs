//! Ellipse outline generation.

use nalgebra::{Rotation2, Vector2};

use crate::domain::ErrorEllipse;

/// Default number of vertices used to approximate an ellipse.
pub const ELLIPSE_SEGMENTS: usize = 72;

/// Sample the ellipse boundary as a closed-by-convention ring (first vertex
/// not repeated), counter-clockwise.
pub fn ellipse_outline(ellipse: &ErrorEllipse, segments: usize) -> Vec<(f64, f64)> {
    let n = segments.max(8);
    let rotation = Rotation2::new(ellipse.rotation_deg.to_radians());
    let center = Vector2::new(ellipse.center.lon, ellipse.center.lat);

    (0..n)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / n as f64;
            let local = Vector2::new(ellipse.semi_major * theta.cos(), ellipse.semi_minor * theta.sin());
            let p = center + rotation * local;
            (p.x, p.y)
        })
        .collect()
}
