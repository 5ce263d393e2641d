//! HTTP server command
//!
//! Builds the post store and templates, then runs the server until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use blog_server::db::{MemoryPostStore, PgPostStore, PostStore, DEFAULT_MAX_CONNECTIONS};
use blog_server::{run_server, AppState, ServerConfig, Templates};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BLOG_BIND", default_value = "127.0.0.1:3001")]
    pub bind: SocketAddr,

    /// Database URL (overrides DATABASE_URL and the DB_* variables)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Directory of static assets served for unrouted paths
    #[arg(long, env = "BLOG_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Keep posts in memory instead of PostgreSQL (lost on exit)
    #[arg(long, conflicts_with_all = ["database_url", "max_connections"])]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn PostStore> = if args.memory {
        tracing::warn!("Using in-memory store; posts are lost on shutdown");
        Arc::new(MemoryPostStore::new())
    } else {
        let pool = super::connect(args.database_url, args.max_connections).await?;
        Arc::new(PgPostStore::new(pool))
    };

    let templates = Templates::new().context("Failed to compile templates")?;
    let state = AppState::new(store, templates);

    let config = ServerConfig {
        bind_addr: args.bind,
        static_dir: args.static_dir,
    };

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
