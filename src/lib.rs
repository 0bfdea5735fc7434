//! `seismap` library crate.
//!
//! Draws seismic station maps and epicenter-estimate iterations:
//!
//! - `render` draws onto an explicit `MapSurface` (usually a recorded `Scene`)
//! - `backend` turns a scene into an SVG document with Plotters
//! - `config` resolves the map data directory once, at startup
//! - `basemap` loads the geography layers from that directory

pub mod backend;
pub mod basemap;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod projection;
pub mod render;

pub use backend::{DEFAULT_SIZE, render_svg};
pub use basemap::BaseMap;
pub use config::MapDataConfig;
pub use domain::{ErrorEllipse, GeoPoint, IterationState, IterationTrace, MapWindow, Station, StationSet, TimeEstimate};
pub use error::AppError;
pub use render::{MapSurface, Scene, draw_final_map, draw_progress_map};
