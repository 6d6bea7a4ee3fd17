use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::StoreOptions;
use crate::ddl::{Dialect, Statements};
use crate::error::StoreResult;
use crate::sql::sql_store;

/// Store backed by a SQLite pool, file or in-memory.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    statements: Statements,
}

impl SqliteStore {
    /// Wrap a pre-configured pool. Foreign keys must be enabled on its
    /// connections for the cascade rules to apply.
    pub fn new(pool: SqlitePool) -> StoreResult<Self> {
        Ok(Self {
            pool,
            statements: Statements::for_dialect(Dialect::Sqlite)?,
        })
    }

    pub async fn connect(conn: &str, options: &StoreOptions) -> StoreResult<Self> {
        let connect_options = SqliteConnectOptions::from_str(conn)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new().acquire_timeout(options.acquire_timeout);
        pool_options = if is_in_memory(conn) {
            // every connection to :memory: opens its own database
            pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(options.max_connections)
        };

        let pool = pool_options.connect_with(connect_options).await?;
        Self::new(pool)
    }

    /// Private in-memory database, mostly for tests.
    pub async fn in_memory() -> StoreResult<Self> {
        Self::connect("sqlite::memory:", &StoreOptions::default()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(conn: &str) -> bool {
    conn.contains(":memory:") || conn.contains("mode=memory")
}

sql_store!(SqliteStore, sqlx::sqlite::SqliteRow, crate::ddl::Dialect::Sqlite);
