use thiserror::Error;

/// Errors raised by store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("unsupported connection string (expected postgres://, postgresql:// or sqlite:): {0}")]
    UnsupportedEngine(String),
    #[error(transparent)]
    Schema(#[from] footballdb_core::Error),
}

impl StoreError {
    /// No pooled connection became free within the acquire timeout. The store
    /// is busy, not failing.
    pub fn is_pool_timeout(&self) -> bool {
        matches!(self, StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
