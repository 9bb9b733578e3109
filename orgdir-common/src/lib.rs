//! # orgdir Common Library
//!
//! Shared code for the orgdir services including:
//! - Database schema, models and queries
//! - Error types
//! - Configuration resolution

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
