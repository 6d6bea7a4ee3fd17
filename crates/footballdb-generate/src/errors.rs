use thiserror::Error;

/// Errors emitted before row generation starts.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}
