//! Storage adapters for footballdb.
//!
//! [`Store`] is the only seam the rest of the workspace talks to. Schema
//! setup, inserts and listings are implemented once over sqlx and rendered
//! for PostgreSQL or SQLite from the declarative schema in `footballdb-core`.

use std::sync::Arc;
use std::time::Duration;

use footballdb_core::redact_connection_string;
use tracing::info;

pub mod ddl;
pub mod error;
pub mod postgres;
mod sql;
pub mod sqlite;
pub mod store;

pub use ddl::Dialect;
pub use error::{StoreError, StoreResult};
pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;
pub use store::Store;

/// Pool settings shared by both adapters.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

/// Pick the dialect from the connection string scheme.
pub fn detect_engine(conn: &str) -> StoreResult<Dialect> {
    if conn.starts_with("postgres://") || conn.starts_with("postgresql://") {
        Ok(Dialect::Postgres)
    } else if conn.starts_with("sqlite:") {
        Ok(Dialect::Sqlite)
    } else {
        Err(StoreError::UnsupportedEngine(
            redact_connection_string(conn).redacted,
        ))
    }
}

/// Connect to the store named by `conn`. The schema is not touched; call
/// [`Store::ensure_schema`] before seeding.
pub async fn open_store(conn: &str, options: &StoreOptions) -> StoreResult<Arc<dyn Store>> {
    let dialect = detect_engine(conn)?;
    let store: Arc<dyn Store> = match dialect {
        Dialect::Postgres => Arc::new(PostgresStore::connect(conn, options).await?),
        Dialect::Sqlite => Arc::new(SqliteStore::connect(conn, options).await?),
    };

    info!(
        event = "store_connected",
        engine = dialect.engine(),
        conn = %redact_connection_string(conn).redacted,
        max_connections = options.max_connections
    );
    Ok(store)
}
