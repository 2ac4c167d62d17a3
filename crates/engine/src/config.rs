//! Engine configuration
//!
//! Read from TOML. Every table and field is optional; missing values fall
//! back to the defaults the pipelines were designed around.
//!
//! ```toml
//! [habitability]
//! seed = 42
//! positive_samples = 300
//! negative_samples = 700
//! test_fraction = 0.2
//!
//! [habitability.forest]
//! n_estimators = 100
//!
//! [planet_types.forest.tree]
//! max_depth = 12
//!
//! [transit]
//! noise_level = 0.0005
//! threshold = 0.995
//! min_distance = 50
//! noise_seed = 7
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use habitability::HabitabilityConfig;
use planet_types::PlanetTypeConfig;
use transit::TransitConfig;

use crate::error::EngineError;

/// File names searched by [`EngineConfig::from_default_location`], in order
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["exoplanet.toml", "config/exoplanet.toml"];

/// Configuration for every pipeline the engine runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub habitability: HabitabilityConfig,
    #[serde(default)]
    pub planet_types: PlanetTypeConfig,
    #[serde(default)]
    pub transit: TransitConfig,
}

impl EngineConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, EngineError> {
        toml::from_str(content)
            .map_err(|e| EngineError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if the file was read and parsed
    /// * `Err(EngineError::Config)` if it could not be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the first default location that exists
    ///
    /// Searches [`DEFAULT_CONFIG_PATHS`] relative to the working directory.
    /// Defaults are used when none of them exists; a file that exists but
    /// fails to parse is an error.
    pub fn from_default_location() -> Result<Self, EngineError> {
        Self::from_search_paths(DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from))
    }

    /// Load configuration from the first existing path, or defaults
    pub fn from_search_paths<I>(paths: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for path in paths {
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }
        log::info!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}
