//! Configuration file loading for the CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use capdeck::{DeckError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for DeckError {
    fn from(err: ConfigError) -> Self {
        DeckError::Config(err.to_string())
    }
}

/// Load configuration from an explicit path, falling back to defaults when
/// none is given.
///
/// # Errors
///
/// Returns an error if the path is provided but the file doesn't exist or
/// cannot be parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, DeckError> {
    let Some(path) = explicit_path else {
        debug!("No configuration file given, using default configuration");
        return Ok(AppConfig::default());
    };
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading configuration");

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
