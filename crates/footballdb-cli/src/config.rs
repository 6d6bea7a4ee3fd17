use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use footballdb_seed::SeedOptions;

/// Picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "footballdb.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
    /// Directory holding the table page.
    pub public_dir: PathBuf,
    pub max_connections: u32,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            public_dir: PathBuf::from("public"),
            max_connections: 5,
        }
    }
}

/// Contents of `footballdb.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Used when neither `--conn` nor `DATABASE_URL` is set.
    pub database_url: Option<String>,
    pub server: ServerSettings,
    pub seed: SeedOptions,
}

/// Load settings from `path`, or from [`DEFAULT_CONFIG_FILE`] when it exists.
///
/// An explicit path that cannot be read is an error; a missing default file
/// yields built-in defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(Settings::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_settings(&content).map_err(|source| ConfigError::Parse { path, source })
}

pub fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

/// `--conn`, then `DATABASE_URL`, then the config file.
pub fn resolve_connection(flag: Option<String>, settings: &Settings) -> Option<String> {
    flag.or_else(|| std::env::var("DATABASE_URL").ok())
        .or_else(|| settings.database_url.clone())
}
