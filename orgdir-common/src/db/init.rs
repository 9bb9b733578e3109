//! Database initialization
//!
//! Opens the store and creates the schema on first run. Table creation is
//! idempotent (`CREATE TABLE IF NOT EXISTS`), so calling this at every
//! process startup is safe.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Initialize database connection pool and create tables if needed
///
/// Creates the database file if it does not exist. Foreign keys are
/// enforced on every connection; the companies→organizations reference
/// depends on it.
pub async fn init_database(db_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    create_tables(&pool).await?;
    info!("Database schema ready: {}", db_url);

    Ok(pool)
}

/// Create all tables (idempotent, safe to call multiple times)
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    create_organizations_table(pool).await?;
    create_companies_table(pool).await?;
    Ok(())
}

async fn create_organizations_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS organizations (
            organization_uid TEXT PRIMARY KEY NOT NULL,
            organization_name TEXT,
            tax_id TEXT,
            company_id TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_companies_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            company_uid TEXT PRIMARY KEY NOT NULL,
            company_name TEXT NOT NULL,
            organization_uid TEXT NOT NULL
                REFERENCES organizations(organization_uid)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
