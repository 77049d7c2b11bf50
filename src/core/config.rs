//! Application configuration
//!
//! Loads [`AppConfig`] from JSON. An explicit `--config` path must exist and
//! parse; otherwise `settings.json` in the user's configuration directory is
//! tried and anything wrong with it falls back to defaults with a warning.
//!
//! Every field has a default, so a partial file only overrides what it names:
//!
//! ```json
//! { "scene": { "fov_degrees": 50.0 }, "geometry": { "cell_size": 0.6 } }
//! ```

use crate::interaction::BoardGeometry;
use crate::rendering::SceneConfig;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scene: SceneConfig,
    pub geometry: BoardGeometry,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// `settings.json` in the user's configuration directory
///
/// Falls back to the working directory when no home directory is known.
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "trilltino", "TempleTrap") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents, path)?;
        info!("[CONFIG] Loaded {:?}", path);
        Ok(config)
    }

    /// Explicit path, else the settings file, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = settings_path();
        if !path.exists() {
            info!("[CONFIG] No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        match Self::load_from(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("[CONFIG] {}. Using defaults.", e);
                Ok(Self::default())
            }
        }
    }
}
