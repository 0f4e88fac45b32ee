use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found at specified path: {0}")]
    NotFound(String),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Config {
    pub fn from_yaml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load from the resolved config path, or defaults when no file exists
    pub fn load(cli_path: Option<String>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let Some(path) = get_config_path(cli_path)? else {
            return Ok((Config::default(), None));
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Ok((Config::from_yaml(&path, &contents)?, Some(path)))
    }
}

/// Determine the config file path with fallback logic
///
/// `--config` must exist if given. Otherwise `<config_dir>/wordzenith/config.yaml`,
/// then `./config.yaml`. No file at all is not an error.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        return Err(ConfigError::NotFound(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("wordzenith").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
