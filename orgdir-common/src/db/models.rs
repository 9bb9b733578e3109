//! Database models

use serde::{Deserialize, Serialize};

/// Top-level tenant entity, owns zero or more companies
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organization {
    pub organization_uid: String,
    pub organization_name: Option<String>,
    pub tax_id: Option<String>,
    /// Auxiliary cross-reference, not a foreign key
    pub company_id: Option<String>,
}

/// Entity owned by exactly one organization
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub company_uid: String,
    pub company_name: String,
    pub organization_uid: String,
}
