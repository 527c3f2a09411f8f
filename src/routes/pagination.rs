/**
 * Pagination Query Parameters
 *
 * Shared `limit`/`offset` query type for every list endpoint. Out-of-range
 * values are clamped rather than rejected, so a caller asking for 10_000
 * rows gets the cap instead of an error.
 */

use serde::Deserialize;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// `?limit=&offset=` pair with clamped accessors
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    limit: i64,
    #[serde(default)]
    offset: i64,
}

impl Pagination {
    /// Requested page size, clamped to `0..=100`.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(0, MAX_LIMIT)
    }

    /// Requested offset, never negative.
    pub fn offset(&self) -> i64 {
        self.offset.max(0)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_query(query: &str) -> Pagination {
        serde_json::from_str(query).unwrap()
    }

    #[test]
    fn test_defaults() {
        let page = from_query("{}");
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        let page = from_query(r#"{"limit": 10000}"#);
        assert_eq!(page.limit(), 100);
    }

    #[test]
    fn test_negative_values_clamped() {
        let page = from_query(r#"{"limit": -5, "offset": -20}"#);
        assert_eq!(page.limit(), 0);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_in_range_values_pass_through() {
        let page = from_query(r#"{"limit": 25, "offset": 50}"#);
        assert_eq!(page.limit(), 25);
        assert_eq!(page.offset(), 50);
    }
}
