use std::{fs, path::Path};

use tracing::{debug, instrument, warn};

use super::{Config, ConfigPaths};
use crate::{Result, ShellfrontError};

impl Config {
    /// Loads the main configuration file, falling back to defaults when it
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads configuration from `path`, falling back to defaults when it
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("no config file found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ShellfrontError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::parse(&content, Some(path))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ShellfrontError::TomlParseError` if the text is not a valid
    /// configuration.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        Self::parse(content, None)
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Config> {
        toml::from_str(content).map_err(|e| {
            warn!(location = ?path, error = %e, "invalid configuration");
            ShellfrontError::toml_parse(e, path)
        })
    }
}
