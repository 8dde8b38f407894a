//! Local result cache entries and keys
//!
//! The cache is opportunistic: every caller must behave correctly when it is
//! always empty. Validity is decided at read time.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// How long an entry stays valid after it was written (12 hours)
pub const CACHE_VALIDITY: Duration = Duration::from_secs(12 * 60 * 60);

/// Key of the keyword index loaded from the static file or the backend
pub const KEYWORDS_JSON_KEY: &str = "keywords_json";

/// Key of the keyword index refreshed explicitly from the CMS backend
pub const STRAPI_KEYWORDS_KEY: &str = "strapi_keywords";

/// Cache key for a collection's page listing
pub fn pages_key(collection: &str) -> String {
    format!("strapi_pages_{}", collection)
}

/// Cache key for a single page's resolved details
pub fn page_details_key(page_id: &str) -> String {
    format!("page_details_{}", page_id)
}

/// A stored value with its write time in epoch milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: Value,
    pub timestamp: i64,
}

impl CacheEntry {
    pub fn new(data: Value, timestamp: i64) -> Self {
        Self { data, timestamp }
    }

    /// Age of the entry at `now_millis`; negative ages (clock skew) clamp to zero
    pub fn age_at(&self, now_millis: i64) -> Duration {
        let age = now_millis.saturating_sub(self.timestamp).max(0);
        Duration::from_millis(age as u64)
    }

    /// Whether the entry is still inside the validity window at `now_millis`.
    ///
    /// A zero or negative timestamp is never valid.
    pub fn is_valid_at(&self, now_millis: i64) -> bool {
        self.timestamp > 0 && self.age_at(now_millis) < CACHE_VALIDITY
    }

    /// Parse a stored entry; corrupt text is treated as absent
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}
