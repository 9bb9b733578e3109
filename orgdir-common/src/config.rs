//! Configuration resolution for the orgdir services

use crate::{Error, Result};
use std::net::SocketAddr;

/// Default connection string: a SQLite store in the working directory.
///
/// Credentials for a remote store must come from the command line or the
/// `DATABASE_URL` environment variable; nothing is compiled in.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://orgdir.db";

/// Default listen address for the HTTP API.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Resolve the store connection string, priority order:
/// 1. Command-line argument (highest priority)
/// 2. `DATABASE_URL` environment variable
/// 3. Compiled default (local SQLite file)
pub fn resolve_database_url(cli_arg: Option<&str>) -> String {
    if let Some(url) = cli_arg {
        return url.to_string();
    }

    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }

    DEFAULT_DATABASE_URL.to_string()
}

/// Resolve the API listen address, priority order:
/// 1. Command-line argument
/// 2. `ORGDIR_BIND` environment variable
/// 3. Compiled default
pub fn resolve_bind_addr(cli_arg: Option<&str>) -> Result<SocketAddr> {
    let addr = if let Some(addr) = cli_arg {
        addr.to_string()
    } else if let Ok(addr) = std::env::var("ORGDIR_BIND") {
        addr
    } else {
        DEFAULT_BIND_ADDR.to_string()
    };

    addr.parse()
        .map_err(|_| Error::Config(format!("Invalid bind address: {}", addr)))
}
