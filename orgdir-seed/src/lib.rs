//! orgdir-seed library - offline loader for the organization directory
//!
//! Reads a JSON fixture with two top-level collections and loads it in a
//! single transaction: organizations first (deduplicated within the run),
//! then companies whose parent organization made it in. A company that
//! references a missing parent is skipped with a warning; any other
//! failure before the final commit rolls back the whole batch.
//!
//! Not safe to run concurrently with itself against one store: parents
//! are only deduplicated within a run, so a second run over the same
//! fixture hits primary-key conflicts.

use std::collections::HashSet;
use std::path::Path;

use orgdir_common::db;
use orgdir_common::Result;
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Top-level fixture document
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub organizations: Vec<OrganizationEntry>,
    pub companies: Vec<CompanyEntry>,
}

/// Parent entry; field names match the organizations table
#[derive(Debug, Deserialize)]
pub struct OrganizationEntry {
    pub organization_uid: String,
    pub organization_name: Option<String>,
    pub tax_id: Option<String>,
    pub company_id: Option<String>,
}

/// Child entry; must name an organization from the same fixture
#[derive(Debug, Deserialize)]
pub struct CompanyEntry {
    pub company_uid: String,
    pub company_name: String,
    pub organization_uid: String,
}

/// Outcome of one import pass
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportSummary {
    pub organizations_inserted: usize,
    pub organizations_deduplicated: usize,
    pub companies_inserted: usize,
    pub companies_skipped: usize,
}

/// Parse the fixture file
pub fn load_fixture(path: &Path) -> Result<Fixture> {
    let contents = std::fs::read_to_string(path)?;
    let fixture = serde_json::from_str(&contents)?;
    Ok(fixture)
}

/// Run one import pass inside a single transaction
///
/// Commits once at the end. On error the transaction is dropped before
/// commit, which rolls the whole batch back; no rows from a failed run
/// are ever visible.
pub async fn import_fixture(pool: &SqlitePool, fixture: &Fixture) -> Result<ImportSummary> {
    let mut tx = pool.begin().await?;
    let mut summary = ImportSummary::default();

    // Parents first. The in-memory uid set is the visibility point for
    // the child pass; nothing is committed yet.
    let mut inserted: HashSet<&str> = HashSet::new();
    for org in &fixture.organizations {
        if !inserted.insert(org.organization_uid.as_str()) {
            warn!(
                "Duplicate organization {} in fixture, keeping first entry",
                org.organization_uid
            );
            summary.organizations_deduplicated += 1;
            continue;
        }

        sqlx::query(
            r#"
            INSERT INTO organizations (organization_uid, organization_name, tax_id, company_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&org.organization_uid)
        .bind(&org.organization_name)
        .bind(&org.tax_id)
        .bind(&org.company_id)
        .execute(&mut *tx)
        .await?;
        summary.organizations_inserted += 1;
    }

    // Children only for parents inserted this run; a missing parent is a
    // soft failure, the pass continues.
    for company in &fixture.companies {
        if !inserted.contains(company.organization_uid.as_str()) {
            warn!(
                "Skipping company {}: organization {} not in fixture",
                company.company_uid, company.organization_uid
            );
            summary.companies_skipped += 1;
            continue;
        }

        sqlx::query(
            r#"
            INSERT INTO companies (company_uid, company_name, organization_uid)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&company.company_uid)
        .bind(&company.company_name)
        .bind(&company.organization_uid)
        .execute(&mut *tx)
        .await?;
        summary.companies_inserted += 1;
    }

    tx.commit().await?;

    info!(
        "Imported {} organizations ({} duplicates dropped) and {} companies ({} skipped)",
        summary.organizations_inserted,
        summary.organizations_deduplicated,
        summary.companies_inserted,
        summary.companies_skipped
    );

    Ok(summary)
}

/// Post-import verification: row counts plus a sample of each table
pub async fn report_contents(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;

    let organizations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM organizations")
        .fetch_one(&mut *conn)
        .await?;
    info!("Organizations in store: {}", organizations);
    for org in db::list_organizations(&mut conn, 0, 3).await? {
        info!(
            "  - {} ({})",
            org.organization_name.as_deref().unwrap_or("<unnamed>"),
            org.organization_uid
        );
    }

    let companies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
        .fetch_one(&mut *conn)
        .await?;
    info!("Companies in store: {}", companies);
    for company in db::list_companies(&mut conn, 0, 3).await? {
        info!(
            "  - {} ({}, organization {})",
            company.company_name, company.company_uid, company.organization_uid
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::io::Write;

    async fn setup_pool() -> SqlitePool {
        // Single connection keeps the in-memory database shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Should open in-memory database");
        db::create_tables(&pool)
            .await
            .expect("Schema creation should succeed");
        pool
    }

    fn fixture_from_json(json: &str) -> Fixture {
        serde_json::from_str(json).expect("Fixture should parse")
    }

    #[test]
    fn test_load_fixture_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "organizations": [
                    {{"organization_uid": "ORG1", "organization_name": "Acme", "tax_id": "T1"}}
                ],
                "companies": [
                    {{"company_uid": "C1", "company_name": "Acme Corp", "organization_uid": "ORG1"}}
                ]
            }}"#
        )
        .unwrap();

        let fixture = load_fixture(file.path()).expect("Should load fixture");
        assert_eq!(fixture.organizations.len(), 1);
        assert_eq!(fixture.companies.len(), 1);
        assert_eq!(fixture.organizations[0].organization_uid, "ORG1");
        assert!(fixture.organizations[0].company_id.is_none());
    }

    #[test]
    fn test_load_fixture_missing_file_is_io_error() {
        let result = load_fixture(Path::new("/no/such/fixture.json"));
        assert!(matches!(result, Err(orgdir_common::Error::Io(_))));
    }

    #[tokio::test]
    async fn test_import_parent_then_child() {
        let pool = setup_pool().await;
        let fixture = fixture_from_json(
            r#"{
                "organizations": [
                    {"organization_uid": "ORG1", "organization_name": "Acme", "tax_id": "T1"}
                ],
                "companies": [
                    {"company_uid": "C1", "company_name": "Acme Corp", "organization_uid": "ORG1"}
                ]
            }"#,
        );

        let summary = import_fixture(&pool, &fixture).await.expect("Import should succeed");
        assert_eq!(summary.organizations_inserted, 1);
        assert_eq!(summary.companies_inserted, 1);
        assert_eq!(summary.companies_skipped, 0);

        let mut conn = pool.acquire().await.unwrap();
        let company = db::get_company(&mut conn, "C1")
            .await
            .unwrap()
            .expect("C1 should be persisted");
        assert_eq!(company.organization_uid, "ORG1");
    }

    #[tokio::test]
    async fn test_duplicate_organizations_deduplicated() {
        let pool = setup_pool().await;
        let fixture = fixture_from_json(
            r#"{
                "organizations": [
                    {"organization_uid": "ORG1", "organization_name": "Acme"},
                    {"organization_uid": "ORG1", "organization_name": "Acme Again"}
                ],
                "companies": []
            }"#,
        );

        let summary = import_fixture(&pool, &fixture).await.expect("Import should succeed");
        assert_eq!(summary.organizations_inserted, 1);
        assert_eq!(summary.organizations_deduplicated, 1);

        // First occurrence wins
        let mut conn = pool.acquire().await.unwrap();
        let org = db::get_organization(&mut conn, "ORG1").await.unwrap().unwrap();
        assert_eq!(org.organization_name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_child_with_missing_parent_is_skipped() {
        let pool = setup_pool().await;
        let fixture = fixture_from_json(
            r#"{
                "organizations": [
                    {"organization_uid": "ORG1", "organization_name": "Acme"}
                ],
                "companies": [
                    {"company_uid": "C1", "company_name": "Acme Corp", "organization_uid": "ORG1"},
                    {"company_uid": "C2", "company_name": "Lost Corp", "organization_uid": "ORG_MISSING"}
                ]
            }"#,
        );

        let summary = import_fixture(&pool, &fixture).await.expect("Soft-fail must not abort");
        assert_eq!(summary.companies_inserted, 1);
        assert_eq!(summary.companies_skipped, 1);

        // Valid rows committed, the orphan absent
        let mut conn = pool.acquire().await.unwrap();
        assert!(db::get_company(&mut conn, "C1").await.unwrap().is_some());
        assert!(db::get_company(&mut conn, "C2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_run_rolls_back_whole_batch() {
        let pool = setup_pool().await;
        // Duplicate company uid: second insert violates the primary key
        // after valid rows were already written inside the transaction.
        let fixture = fixture_from_json(
            r#"{
                "organizations": [
                    {"organization_uid": "ORG1", "organization_name": "Acme"}
                ],
                "companies": [
                    {"company_uid": "C1", "company_name": "Acme Corp", "organization_uid": "ORG1"},
                    {"company_uid": "C1", "company_name": "Acme Clone", "organization_uid": "ORG1"}
                ]
            }"#,
        );

        let result = import_fixture(&pool, &fixture).await;
        assert!(result.is_err(), "Primary-key conflict should abort the run");

        // Zero rows from the failed run are visible
        let orgs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM organizations")
            .fetch_one(&pool)
            .await
            .unwrap();
        let companies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(orgs, 0);
        assert_eq!(companies, 0);
    }

    #[tokio::test]
    async fn test_second_run_conflicts_on_existing_parents() {
        let pool = setup_pool().await;
        let fixture = fixture_from_json(
            r#"{
                "organizations": [
                    {"organization_uid": "ORG1", "organization_name": "Acme"}
                ],
                "companies": []
            }"#,
        );

        import_fixture(&pool, &fixture).await.expect("First run should succeed");

        // Dedup tracking is per-run only; re-running the same fixture
        // hits the primary key and rolls back.
        let second = import_fixture(&pool, &fixture).await;
        assert!(second.is_err());
    }
}
