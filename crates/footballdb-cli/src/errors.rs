use thiserror::Error;

use footballdb_generate::GenerationError;
use footballdb_seed::SeedError;
use footballdb_store::StoreError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid options: {0}")]
    Options(#[from] GenerationError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
