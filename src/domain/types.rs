//! Shared domain types.
//!
//! Everything here is a plain, serializable value. Renderers borrow these for
//! the duration of one call and never keep them.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Half-width (degrees longitude) of the final-result map.
pub const FINAL_LON_DELTA: f64 = 3.0;
/// Half-height (degrees latitude) of the final-result map.
pub const FINAL_LAT_DELTA: f64 = 2.0;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// A named seismic station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub location: GeoPoint,
}

/// Ordered set of stations to plot. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationSet {
    pub stations: Vec<Station>,
}

impl StationSet {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Build a station set from parallel latitude/longitude/name columns.
    ///
    /// The three columns must have the same length.
    pub fn from_columns<S: AsRef<str>>(lats: &[f64], lons: &[f64], names: &[S]) -> Result<Self, AppError> {
        if lats.len() != lons.len() || lats.len() != names.len() {
            return Err(AppError::input(format!(
                "Station columns differ in length: {} latitudes, {} longitudes, {} names.",
                lats.len(),
                lons.len(),
                names.len()
            )));
        }

        let stations = lats
            .iter()
            .zip(lons)
            .zip(names)
            .map(|((&lat, &lon), name)| Station {
                name: name.as_ref().to_string(),
                location: GeoPoint::new(lon, lat),
            })
            .collect();

        Ok(Self { stations })
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }
}

/// Rectangular geographic window: `center ± delta` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapWindow {
    pub center: GeoPoint,
    pub lon_delta: f64,
    pub lat_delta: f64,
}

impl MapWindow {
    pub fn new(center: GeoPoint, lon_delta: f64, lat_delta: f64) -> Self {
        Self {
            center,
            lon_delta,
            lat_delta,
        }
    }

    /// The fixed, tight window used for the final-result map.
    pub fn final_zoom(center: GeoPoint) -> Self {
        Self::new(center, FINAL_LON_DELTA, FINAL_LAT_DELTA)
    }

    /// Lower-left corner.
    pub fn lower_left(&self) -> GeoPoint {
        GeoPoint::new(self.center.lon - self.lon_delta, self.center.lat - self.lat_delta)
    }

    /// Upper-right corner.
    pub fn upper_right(&self) -> GeoPoint {
        GeoPoint::new(self.center.lon + self.lon_delta, self.center.lat + self.lat_delta)
    }
}

/// Candidate epicenters produced by an external solver.
///
/// Index 0 is the initial guess; later indices are successive iterations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IterationTrace {
    pub guesses: Vec<GeoPoint>,
}

impl IterationTrace {
    pub fn new(guesses: Vec<GeoPoint>) -> Self {
        Self { guesses }
    }

    /// Build a trace from parallel longitude/latitude columns.
    pub fn from_columns(lons: &[f64], lats: &[f64]) -> Result<Self, AppError> {
        if lons.len() != lats.len() {
            return Err(AppError::input(format!(
                "Iteration trace columns differ in length: {} longitudes, {} latitudes.",
                lons.len(),
                lats.len()
            )));
        }
        let guesses = lons
            .iter()
            .zip(lats)
            .map(|(&lon, &lat)| GeoPoint::new(lon, lat))
            .collect();
        Ok(Self { guesses })
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<GeoPoint> {
        self.guesses.get(index).copied()
    }
}

/// Iteration mode of the progress map: which guess is current, and the trace.
#[derive(Debug, Clone, Copy)]
pub struct IterationState<'a> {
    pub iterate: usize,
    pub trace: &'a IterationTrace,
}

impl<'a> IterationState<'a> {
    pub fn new(iterate: usize, trace: &'a IterationTrace) -> Self {
        Self { iterate, trace }
    }
}

/// Uncertainty ellipse of the final estimate.
///
/// Axes are semi-axis lengths in map data units (degrees); rotation is
/// counter-clockwise, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorEllipse {
    pub center: GeoPoint,
    pub semi_major: f64,
    pub semi_minor: f64,
    pub rotation_deg: f64,
}

/// Origin-time estimate and its one-sigma uncertainty, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub time: f64,
    pub uncertainty: f64,
}

impl TimeEstimate {
    pub fn new(time: f64, uncertainty: f64) -> Self {
        Self { time, uncertainty }
    }

    /// Interpret the legacy convention where a zero value means "no estimate".
    ///
    /// Returns `None` when either value is exactly zero. A true zero-time
    /// estimate cannot be expressed this way; use [`TimeEstimate::new`].
    pub fn from_sentinel(time: f64, uncertainty: f64) -> Option<Self> {
        if time != 0.0 && uncertainty != 0.0 {
            Some(Self::new(time, uncertainty))
        } else {
            None
        }
    }

    /// Label text, e.g. `t = 5.00 ± 1.20s`.
    pub fn label(&self) -> String {
        format!("t = {:.2} ± {:.2}s", self.time, self.uncertainty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_columns_must_match() {
        let set = StationSet::from_columns(&[10.0, 11.0], &[20.0, 21.0], &["AAA", "BBB"]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.stations[1].name, "BBB");
        assert_eq!(set.stations[1].location, GeoPoint::new(21.0, 11.0));

        let err = StationSet::from_columns(&[10.0], &[20.0, 21.0], &["AAA"]).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }

    #[test]
    fn empty_station_set_is_valid() {
        let names: [&str; 0] = [];
        let set = StationSet::from_columns(&[], &[], &names).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn trace_columns_must_match() {
        let trace = IterationTrace::from_columns(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
        assert_eq!(trace.get(1), Some(GeoPoint::new(2.0, 4.0)));
        assert!(IterationTrace::from_columns(&[1.0], &[]).is_err());
    }

    #[test]
    fn final_zoom_window_corners() {
        let w = MapWindow::final_zoom(GeoPoint::new(-120.5, 36.0));
        assert_eq!(w.lower_left(), GeoPoint::new(-123.5, 34.0));
        assert_eq!(w.upper_right(), GeoPoint::new(-117.5, 38.0));
    }

    #[test]
    fn sentinel_zero_means_absent() {
        assert_eq!(TimeEstimate::from_sentinel(5.0, 0.0), None);
        assert_eq!(TimeEstimate::from_sentinel(0.0, 1.2), None);
        let t = TimeEstimate::from_sentinel(5.0, 1.2).unwrap();
        assert_eq!(t.label(), "t = 5.00 ± 1.20s");
    }

    #[test]
    fn sentinel_checks_each_value_separately() {
        // inf * 0 is NaN, which must not read as "both present".
        assert_eq!(TimeEstimate::from_sentinel(f64::INFINITY, 0.0), None);
        assert_eq!(TimeEstimate::from_sentinel(0.0, f64::INFINITY), None);
        // The product underflows to zero, but neither value is zero.
        assert_eq!(
            TimeEstimate::from_sentinel(1e-200, 1e-200),
            Some(TimeEstimate::new(1e-200, 1e-200))
        );
    }
}
