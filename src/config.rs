//! Map data directory configuration.
//!
//! The base-map backend needs a directory holding its geography layers. The
//! location comes from the environment, resolved exactly once at startup by
//! [`init`]; the renderer itself never reads the environment.
//!
//! Resolution order:
//! 1. `SEISMAP_DATA_DIR` (also read from a `.env` file)
//! 2. `$CONDA_PREFIX/Library/share` (where conda installs map data on Windows)
//! 3. none: base layers render empty

use std::path::{Path, PathBuf};

use log::info;
use once_cell::sync::OnceCell;

pub const DATA_DIR_VAR: &str = "SEISMAP_DATA_DIR";
pub const CONDA_PREFIX_VAR: &str = "CONDA_PREFIX";

static CONFIG: OnceCell<MapDataConfig> = OnceCell::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapDataConfig {
    pub data_dir: Option<PathBuf>,
}

impl MapDataConfig {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(dir.into()),
        }
    }

    /// Pick the data directory from the explicit setting or the conda prefix.
    ///
    /// Empty values count as unset.
    pub fn resolve(explicit: Option<&str>, conda_prefix: Option<&str>) -> Self {
        let explicit = explicit.map(str::trim).filter(|s| !s.is_empty());
        let conda_prefix = conda_prefix.map(str::trim).filter(|s| !s.is_empty());

        let data_dir = match (explicit, conda_prefix) {
            (Some(dir), _) => Some(PathBuf::from(dir)),
            (None, Some(prefix)) => Some(Path::new(prefix).join("Library").join("share")),
            (None, None) => None,
        };
        Self { data_dir }
    }

    /// Resolve from the process environment (after loading `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let explicit = std::env::var(DATA_DIR_VAR).ok();
        let conda_prefix = std::env::var(CONDA_PREFIX_VAR).ok();
        Self::resolve(explicit.as_deref(), conda_prefix.as_deref())
    }
}

/// Resolve the map data configuration once per process.
///
/// Later calls return the first result.
pub fn init() -> &'static MapDataConfig {
    CONFIG.get_or_init(|| {
        let config = MapDataConfig::from_env();
        match &config.data_dir {
            Some(dir) => info!("map data directory: {}", dir.display()),
            None => info!("no map data directory configured; base layers will be empty"),
        }
        config
    })
}

/// The configuration installed by [`init`], if it has run.
pub fn get() -> Option<&'static MapDataConfig> {
    CONFIG.get()
}
