//! Domain types passed into a single render call.
//!
//! This module defines:
//!
//! - geographic points and station sets (`GeoPoint`, `Station`, `StationSet`)
//! - map bounds (`MapWindow`)
//! - solver output shown on the maps (`IterationTrace`, `IterationState`,
//!   `ErrorEllipse`, `TimeEstimate`)

pub mod types;

pub use types::*;
