use thiserror::Error;

use footballdb_generate::GenerationError;
use footballdb_store::StoreError;

/// Errors that abort a seed run. Per-row insert failures are not among them;
/// they end up in the batch report.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Options(#[from] GenerationError),
    #[error("schema setup failed: {0}")]
    Schema(#[from] StoreError),
}
