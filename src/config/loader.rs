//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calendar
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};

use super::types::{AgreementMetadata, CalendarConfig, HolidayVisibility};

/// Loads and provides access to the calendar configuration.
///
/// # Directory Structure
///
/// The configuration directory holds a single settings file:
/// ```text
/// config/spartrafik/
/// └── settings.yaml   # Agreement metadata and holiday visibility
/// ```
///
/// # Example
///
/// ```no_run
/// use ob_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/spartrafik").unwrap();
/// assert!(loader.holidays().show_swedish_holidays);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/spartrafik")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// settings file is missing (`ConfigNotFound`) or contains invalid YAML
    /// (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let config = Self::load_yaml::<CalendarConfig>(&settings_path)?;

        Ok(Self { config })
    }

    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Returns the full loaded configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        &self.config.agreement
    }

    /// Returns the holiday visibility settings.
    pub fn holidays(&self) -> HolidayVisibility {
        self.config.holidays
    }
}
