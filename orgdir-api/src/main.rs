//! orgdir-api - Read-only HTTP API over the organization directory store
//!
//! Serves paginated organization/company listings, by-id lookups, and two
//! diagnostics (`/` liveness, `/db-check` store probe). The store schema
//! is created at startup if absent; an unreachable store is fatal.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use orgdir_api::{build_router, AppState};
use orgdir_common::config;

#[derive(Parser, Debug)]
#[command(name = "orgdir-api", about = "Read-only organization/company directory API")]
struct Cli {
    /// Store connection string (falls back to DATABASE_URL, then a local SQLite file)
    #[arg(long)]
    database_url: Option<String>,

    /// Listen address (falls back to ORGDIR_BIND, then 127.0.0.1:8080)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting orgdir-api v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let db_url = config::resolve_database_url(cli.database_url.as_deref());
    info!("Store: {}", db_url);

    // Explicit one-time schema initialization; fail fast if the store is
    // unreachable rather than serving requests that can only 500.
    let pool = match orgdir_common::db::init_database(&db_url).await {
        Ok(pool) => {
            info!("✓ Connected to store, schema ready");
            pool
        }
        Err(e) => {
            error!("Failed to initialize store: {}", e);
            return Err(e.into());
        }
    };

    let addr = config::resolve_bind_addr(cli.bind.as_deref())?;
    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("orgdir-api listening on http://{}", addr);
    info!("Store check: http://{}/db-check", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
