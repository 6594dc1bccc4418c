//! Database connector - owns the process-wide Postgres pool
//!
//! The pool is not created at startup. The first call to
//! [`DatabaseConnector::handle`] checks the connection string and builds a
//! lazily-connecting pool; every later call gets the same pool back.
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_URL`: Postgres connection string (required at first use)
//! - `REVERB_DB_MAX_CONNECTIONS`: pool size (default: 5)

use once_cell::sync::OnceCell;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::DbError;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection string. `None` is only an error once the
    /// database is actually needed.
    pub url: Option<String>,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").ok();
        let max_connections = std::env::var("REVERB_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Self {
            url,
            max_connections,
        }
    }

    /// Create config with an explicit connection string
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Whether a non-blank connection string is present.
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Owner of the lazily-built pool.
///
/// Construct once and share it (it is held inside `AppState`). Concurrent
/// first calls to `handle` are serialized by the cell, so the pool is built
/// at most once.
#[derive(Debug)]
pub struct DatabaseConnector {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
}

impl DatabaseConnector {
    /// Create a connector. Does not touch the network.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Create a connector from the environment.
    pub fn from_env() -> Self {
        Self::new(DatabaseConfig::from_env())
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Get the shared pool, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if no connection string is set, or
    /// [`DbError::Sqlx`] if the connection string cannot be parsed. A failed
    /// call leaves nothing cached.
    pub fn handle(&self) -> Result<&PgPool, DbError> {
        self.pool.get_or_try_init(|| -> Result<PgPool, DbError> {
            let url = self
                .config
                .url
                .as_deref()
                .filter(|u| !u.trim().is_empty())
                .ok_or_else(|| DbError::Config("DATABASE_URL is not set.".to_string()))?;

            tracing::debug!(
                max_connections = self.config.max_connections,
                "Creating database pool"
            );

            let pool = PgPoolOptions::new()
                .max_connections(self.config.max_connections)
                .connect_lazy(url)?;
            Ok(pool)
        })
    }
}
