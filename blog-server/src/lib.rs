//! blog-server: server-rendered blog over a single `posts` table
//!
//! Lists, creates, shows, edits, and deletes posts. Each request maps to one
//! parameterized statement and either an HTML render or a redirect.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod templates;

pub use config::{ConfigError, DatabaseConfig};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use templates::Templates;
