//! Command implementations for the blog CLI

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use blog_server::db::create_pool_with_options;
use blog_server::DatabaseConfig;
use sqlx::PgPool;

/// Resolve database settings from the environment plus an optional URL override
/// and open the pool.
async fn connect(database_url: Option<String>, max_connections: u32) -> Result<PgPool> {
    let mut config = DatabaseConfig::from_env().context("Failed to read database settings")?;
    if let Some(url) = database_url {
        config = config.with_url(url);
    }

    tracing::info!(target_db = %config.describe(), "Connecting to database");
    let options = config
        .connect_options()
        .context("Failed to build database connect options")?;

    create_pool_with_options(options, max_connections)
        .await
        .context("Failed to create database pool")
}
