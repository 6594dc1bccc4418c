//! Schema setup command

use anyhow::{Context, Result};
use clap::Parser;

use reverb_server::db::{migrations, DatabaseConfig, DatabaseConnector};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the messages table if it does not exist
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let mut db_config = DatabaseConfig::from_env();
    db_config.url = args.database_url;

    let connector = DatabaseConnector::new(db_config);
    let pool = connector.handle().context(
        "Invalid or missing database URL. Set via --database-url, DATABASE_URL env, or .env",
    )?;

    migrations::run(pool)
        .await
        .context("Failed to run migrations")?;

    println!("messages table ready");
    Ok(())
}
