//! PostgreSQL connection pool and schema-presence check.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use crate::config::StoreConfig;
use crate::persistence::PersistenceError;

/// Tables that must exist before the server accepts requests.
static REQUIRED_TABLES: [&str; 2] = ["plant", "plant_log"];

/// Holds a connection pool to the PostgreSQL database.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
    call_timeout: Duration,
}

impl Database {
    /// Connect to the database named in `config` and verify its schema.
    pub async fn open(config: &StoreConfig) -> Result<Self, PersistenceError> {
        if config.database_url.trim().is_empty() {
            return Err(PersistenceError::ConfigMissing);
        }

        let options = PgConnectOptions::from_str(&config.database_url)
            .map_err(|e| PersistenceError::ConnectionFailed(e.to_string()))?
            .options([("search_path", config.schema.as_str())]);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| PersistenceError::ConnectionFailed(e.to_string()))?;

        let db = Self {
            pool,
            call_timeout: config.call_timeout,
        };
        if let Err(e) = db.check_schema(&config.schema).await {
            db.pool.close().await;
            return Err(e);
        }
        Ok(db)
    }

    /// Fail with `SchemaMissing` unless every required table is in `schema`.
    async fn check_schema(&self, schema: &str) -> Result<(), PersistenceError> {
        let (found,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(DISTINCT tablename)
            FROM pg_tables
            WHERE schemaname = $1 AND tablename = ANY($2)
            "#,
        )
        .bind(schema)
        .bind(&REQUIRED_TABLES[..])
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PersistenceError::ConnectionFailed(e.to_string()))?;

        if found < REQUIRED_TABLES.len() as i64 {
            return Err(PersistenceError::SchemaMissing(schema.to_string()));
        }
        Ok(())
    }

    /// Run one store call under the configured deadline.
    pub async fn bounded<T, F>(&self, call: F) -> Result<T, PersistenceError>
    where
        F: Future<Output = Result<T, PersistenceError>>,
    {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(PersistenceError::Unavailable(format!(
                "store call exceeded {} ms",
                self.call_timeout.as_millis()
            ))),
        }
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
