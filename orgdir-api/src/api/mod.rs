//! HTTP API handlers for orgdir-api

pub mod companies;
pub mod error;
pub mod health;
pub mod organizations;

pub use companies::{get_company, list_companies};
pub use error::ApiError;
pub use health::{db_check, root};
pub use organizations::{get_organization, list_organizations};
