//! HTTP server command
//!
//! Runs the reverb HTTP server with the messages, reverse and client routes.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use reverb_server::db::{
    migrations, DatabaseConfig, DatabaseConnector, InMemoryStore, MessageStore, PgMessageStore,
};
use reverb_server::http::{run_server, AppState, ServerConfig, DEFAULT_MAX_BODY_BYTES};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Create the messages table before serving
    #[arg(long, conflicts_with = "ephemeral")]
    pub migrate: bool,

    /// Keep messages in memory instead of Postgres (lost on exit)
    #[arg(long)]
    pub ephemeral: bool,

    /// Largest accepted request body in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn MessageStore> = if args.ephemeral {
        tracing::warn!("Ephemeral mode: messages are kept in memory only");
        Arc::new(InMemoryStore::new())
    } else {
        let mut db_config = DatabaseConfig::from_env();
        db_config.url = args.database_url;
        let connector = Arc::new(DatabaseConnector::new(db_config));

        if !connector.is_configured() {
            // Not fatal: /api/messages reports the error per request
            tracing::warn!("DATABASE_URL not set; message endpoints will fail until it is");
        }

        if args.migrate {
            let pool = connector
                .handle()
                .context("Invalid or missing database URL; cannot migrate")?;
            migrations::run(pool)
                .await
                .context("Failed to run migrations")?;
        }

        Arc::new(PgMessageStore::new(connector))
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        max_body_bytes: args.max_body_bytes,
    };

    tracing::info!("Starting reverb server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(AppState::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}
