//! Pagination query parameters
//!
//! Pure offset/limit windowing: `skip` records are passed over, at most
//! `limit` records are returned. No cursor, no total-count metadata.

use serde::Deserialize;

/// Page window when the caller omits `limit`
pub const DEFAULT_LIMIT: i64 = 100;

/// Offset/limit window parsed from the query string
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    /// Records to pass over before the window starts
    #[serde(default)]
    pub skip: i64,

    /// Maximum records in the window
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl PageParams {
    /// Sanitized (skip, limit) pair; negative inputs are clamped to zero
    pub fn clamped(self) -> (i64, i64) {
        (self.skip.max(0), self.limit.max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_applied() {
        let params: PageParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_explicit_values_kept() {
        let params: PageParams = serde_json::from_value(json!({"skip": 5, "limit": 2})).unwrap();
        assert_eq!(params.clamped(), (5, 2));
    }

    #[test]
    fn test_negative_values_clamped() {
        let params: PageParams = serde_json::from_value(json!({"skip": -3, "limit": -1})).unwrap();
        assert_eq!(params.clamped(), (0, 0));
    }
}
