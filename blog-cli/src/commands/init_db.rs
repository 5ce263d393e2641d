//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use blog_server::db::schema;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL (overrides DATABASE_URL and the DB_* variables)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Create the posts table if it is missing
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = super::connect(args.database_url, 1).await?;

    schema::ensure(&pool)
        .await
        .context("Failed to create posts table")?;

    tracing::info!("Posts table ready");
    Ok(())
}
