use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::StoreOptions;
use crate::ddl::{Dialect, Statements};
use crate::error::StoreResult;
use crate::sql::sql_store;

/// Store backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
    statements: Statements,
}

impl PostgresStore {
    /// Wrap a pre-configured pool.
    pub fn new(pool: PgPool) -> StoreResult<Self> {
        Ok(Self {
            pool,
            statements: Statements::for_dialect(Dialect::Postgres)?,
        })
    }

    pub async fn connect(conn: &str, options: &StoreOptions) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.acquire_timeout)
            .connect(conn)
            .await?;
        Self::new(pool)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

sql_store!(PostgresStore, sqlx::postgres::PgRow, crate::ddl::Dialect::Postgres);
