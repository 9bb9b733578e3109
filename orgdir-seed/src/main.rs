//! orgdir-seed - Load a JSON fixture into the organization directory store
//!
//! Offline, single-pass batch job. Runs independently of orgdir-api and
//! exits non-zero when the batch had to be rolled back.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use orgdir_common::config;

#[derive(Parser, Debug)]
#[command(name = "orgdir-seed", about = "Load a JSON fixture into the organization directory store")]
struct Cli {
    /// Path to the JSON fixture file
    #[arg(long, default_value = "seed_data.json")]
    fixture: PathBuf,

    /// Store connection string (falls back to DATABASE_URL, then a local SQLite file)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting orgdir-seed v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let fixture = orgdir_seed::load_fixture(&cli.fixture)
        .with_context(|| format!("Failed to load fixture {}", cli.fixture.display()))?;
    info!(
        "Loaded fixture {}: {} organizations, {} companies",
        cli.fixture.display(),
        fixture.organizations.len(),
        fixture.companies.len()
    );

    let db_url = config::resolve_database_url(cli.database_url.as_deref());
    info!("Store: {}", db_url);

    let pool = orgdir_common::db::init_database(&db_url).await?;

    match orgdir_seed::import_fixture(&pool, &fixture).await {
        Ok(_summary) => {
            orgdir_seed::report_contents(&pool).await?;
            info!("Import complete");
            Ok(())
        }
        Err(e) => {
            error!("Import failed, batch rolled back: {}", e);
            Err(e.into())
        }
    }
}
