use thiserror::Error;

/// Core error type shared across footballdb crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema definition violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by footballdb crates.
pub type Result<T> = std::result::Result<T, Error>;
