//! Base-map geography: state and country borders, coastlines, land masses.
//!
//! Layers are GeoJSON files in the map data directory:
//!
//! - `states.geojson`
//! - `countries.geojson`
//! - `coastlines.geojson`
//! - `land.geojson`
//!
//! A missing file yields an empty layer so maps still render (markers,
//! labels and the ocean fill do not depend on geography).

pub mod geojson;

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::config::MapDataConfig;
use crate::error::AppError;

pub use geojson::{LayerGeometry, Ring, parse_layer};

pub const STATES_FILE: &str = "states.geojson";
pub const COUNTRIES_FILE: &str = "countries.geojson";
pub const COASTLINES_FILE: &str = "coastlines.geojson";
pub const LAND_FILE: &str = "land.geojson";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseMap {
    pub states: LayerGeometry,
    pub countries: LayerGeometry,
    pub coastlines: LayerGeometry,
    pub land: LayerGeometry,
}

impl BaseMap {
    /// A base map with no geography.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load all layers from the configured data directory.
    pub fn load(config: &MapDataConfig) -> Result<Self, AppError> {
        match &config.data_dir {
            Some(dir) => Self::load_dir(dir),
            None => {
                warn!("no map data directory; drawing without base-map geography");
                Ok(Self::empty())
            }
        }
    }

    pub fn load_dir(dir: &Path) -> Result<Self, AppError> {
        if !dir.is_dir() {
            return Err(AppError::config(format!(
                "Map data directory '{}' does not exist.",
                dir.display()
            )));
        }
        Ok(Self {
            states: load_layer(dir, STATES_FILE)?,
            countries: load_layer(dir, COUNTRIES_FILE)?,
            coastlines: load_layer(dir, COASTLINES_FILE)?,
            land: load_layer(dir, LAND_FILE)?,
        })
    }
}

fn load_layer(dir: &Path, file: &str) -> Result<LayerGeometry, AppError> {
    let path = dir.join(file);
    if !path.is_file() {
        warn!("base-map layer '{}' not found; layer left empty", path.display());
        return Ok(LayerGeometry::default());
    }
    let text = fs::read_to_string(&path)
        .map_err(|e| AppError::config(format!("Failed to read '{}': {e}", path.display())))?;
    let layer = parse_layer(&text).map_err(|e| AppError::config(format!("{}: {e}", path.display())))?;
    debug!(
        "loaded {}: {} lines, {} rings",
        path.display(),
        layer.lines.len(),
        layer.rings.len()
    );
    Ok(layer)
}
