//! Rectangular map projection for a bounded window.
//!
//! The maps use plate carrée: screen data coordinates are longitude and
//! latitude themselves, bounded by the window corners. Clipping helpers keep
//! base-map geometry inside those bounds.

pub mod clip;

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, MapWindow};

pub use clip::{clip_polygon, clip_polyline};

/// Bounds of a projected map, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub llcrnr: (f64, f64),
    pub urcrnr: (f64, f64),
}

impl Projection {
    pub fn for_window(window: &MapWindow) -> Self {
        let ll = window.lower_left();
        let ur = window.upper_right();
        Self {
            llcrnr: (ll.lon, ll.lat),
            urcrnr: (ur.lon, ur.lat),
        }
    }

    /// Geographic -> data coordinates.
    pub fn project(&self, p: GeoPoint) -> (f64, f64) {
        (p.lon, p.lat)
    }

    pub fn project_all<'a, I>(&self, points: I) -> Vec<(f64, f64)>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        points.into_iter().map(|&p| self.project(p)).collect()
    }

    pub fn x_range(&self) -> std::ops::Range<f64> {
        self.llcrnr.0..self.urcrnr.0
    }

    pub fn y_range(&self) -> std::ops::Range<f64> {
        self.llcrnr.1..self.urcrnr.1
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.llcrnr.0 && x <= self.urcrnr.0 && y >= self.llcrnr.1 && y <= self.urcrnr.1
    }

    /// True when the bounds are finite and non-degenerate.
    pub fn is_valid(&self) -> bool {
        let (x0, y0) = self.llcrnr;
        let (x1, y1) = self.urcrnr;
        x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite() && x1 > x0 && y1 > y0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_bounds_are_center_plus_minus_delta() {
        let window = MapWindow::new(GeoPoint::new(10.0, 45.0), 5.0, 2.5);
        let proj = Projection::for_window(&window);
        assert_eq!(proj.llcrnr, (5.0, 42.5));
        assert_eq!(proj.urcrnr, (15.0, 47.5));
        assert!(proj.is_valid());
        assert!(proj.contains(10.0, 45.0));
        assert!(!proj.contains(16.0, 45.0));
    }

    #[test]
    fn zero_delta_is_degenerate() {
        let window = MapWindow::new(GeoPoint::new(0.0, 0.0), 0.0, 1.0);
        assert!(!Projection::for_window(&window).is_valid());
    }

    #[test]
    fn plate_carree_is_identity_in_data_space() {
        let proj = Projection::for_window(&MapWindow::new(GeoPoint::new(0.0, 0.0), 10.0, 10.0));
        assert_eq!(proj.project(GeoPoint::new(-3.25, 7.5)), (-3.25, 7.5));
    }
}
