//! Read queries for the organization directory
//!
//! All functions take an explicit `&mut SqliteConnection` so the caller
//! owns the connection for the duration of one request. A by-id miss is
//! `Ok(None)`, never an error; only store failures surface as `Err`.

use crate::db::models::{Company, Organization};
use crate::Result;
use sqlx::SqliteConnection;

/// List organizations in primary-key order, windowed by offset/limit
pub async fn list_organizations(
    conn: &mut SqliteConnection,
    skip: i64,
    limit: i64,
) -> Result<Vec<Organization>> {
    let rows = sqlx::query_as::<_, Organization>(
        r#"
        SELECT organization_uid, organization_name, tax_id, company_id
        FROM organizations
        ORDER BY organization_uid
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

/// Look up a single organization by its identifier
pub async fn get_organization(
    conn: &mut SqliteConnection,
    uid: &str,
) -> Result<Option<Organization>> {
    let row = sqlx::query_as::<_, Organization>(
        r#"
        SELECT organization_uid, organization_name, tax_id, company_id
        FROM organizations
        WHERE organization_uid = ?
        "#,
    )
    .bind(uid)
    .fetch_optional(conn)
    .await?;

    Ok(row)
}

/// List companies in primary-key order, windowed by offset/limit
pub async fn list_companies(
    conn: &mut SqliteConnection,
    skip: i64,
    limit: i64,
) -> Result<Vec<Company>> {
    let rows = sqlx::query_as::<_, Company>(
        r#"
        SELECT company_uid, company_name, organization_uid
        FROM companies
        ORDER BY company_uid
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

/// Look up a single company by its identifier
pub async fn get_company(conn: &mut SqliteConnection, uid: &str) -> Result<Option<Company>> {
    let row = sqlx::query_as::<_, Company>(
        r#"
        SELECT company_uid, company_name, organization_uid
        FROM companies
        WHERE company_uid = ?
        "#,
    )
    .bind(uid)
    .fetch_optional(conn)
    .await?;

    Ok(row)
}
