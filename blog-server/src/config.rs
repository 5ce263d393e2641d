//! Database configuration - environment loading
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_URL`: full connection string, wins over everything below
//! - `DB_HOST` / `HOST`: server host (default: localhost)
//! - `DB_NAME` / `NAME`: database name (default: blog)
//! - `DB_USER` / `USER`: role to connect as (default: postgres)
//! - `DB_PASSWORD` / `PASSWORD`: password (default: none)
//! - `DB_PORT` / `PORT`: server port (default: 5432)
//!
//! The prefixed name is tried first; the bare name matches older `.env` files.

use sqlx::postgres::PgConnectOptions;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_DATABASE: &str = "blog";
const DEFAULT_USER: &str = "postgres";
const DEFAULT_PORT: u16 = 5432;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid database port '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Where and how to reach PostgreSQL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection string; when set the other fields are ignored
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            user: DEFAULT_USER.to_string(),
            password: None,
        }
    }
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |prefixed: &str, bare: &str| {
            lookup(prefixed)
                .or_else(|| lookup(bare))
                .filter(|value| !value.is_empty())
        };

        let port = match get("DB_PORT", "PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            url: lookup("DATABASE_URL").filter(|value| !value.is_empty()),
            host: get("DB_HOST", "HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database: get("DB_NAME", "NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            user: get("DB_USER", "USER").unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: get("DB_PASSWORD", "PASSWORD"),
        })
    }

    /// Replace the connection string, e.g. from a command-line flag
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Build sqlx connect options from this config
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return url.parse().map_err(ConfigError::InvalidUrl);
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user);

        Ok(match &self.password {
            Some(password) => options.password(password),
            None => options,
        })
    }

    /// Connection target without credentials, for logging
    pub fn describe(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database),
        }
    }
}
