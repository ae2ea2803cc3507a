//! Database connection pool using the OnceCell pattern.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::config::{ConfigError, ServerConfig};

static POOL: OnceCell<PgPool> = OnceCell::const_new();

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, DbError> {
    POOL.get_or_try_init(|| async {
        let config = ServerConfig::from_env()?;
        tracing::info!(max_connections = config.max_connections, "opening database pool");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(pool)
    })
    .await
}
