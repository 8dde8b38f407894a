//! Local result cache adapters
//!
//! - [`FileResultCache`]: one JSON file per key, survives between runs
//! - [`MemoryResultCache`]: process-local, for `cache.enabled = false` runs and tests
//! - [`SystemClock`]: wall-clock time for validity checks
//!
//! Both caches store `{data, timestamp}` text and share the read rules:
//! unparsable entries are absent, expired entries are absent and removed.

mod clock;
mod file;
mod memory;

pub use clock::SystemClock;
pub use file::FileResultCache;
pub use memory::MemoryResultCache;

use faqsmith_domain::CacheEntry;
use serde_json::Value;
use tracing::{debug, warn};

/// Outcome of reading one stored entry
enum Stored {
    Valid(CacheEntry),
    /// Present but unusable; the caller removes it
    Stale,
}

fn classify(key: &str, raw: &str, now_millis: i64) -> Stored {
    match CacheEntry::parse(raw) {
        Some(entry) if entry.is_valid_at(now_millis) => Stored::Valid(entry),
        Some(_) => {
            debug!("Cache entry \"{}\" expired", key);
            Stored::Stale
        }
        None => {
            warn!("Cache entry \"{}\" is corrupt, discarding", key);
            Stored::Stale
        }
    }
}

fn encode(key: &str, data: Value, now_millis: i64) -> Option<String> {
    match serde_json::to_string(&CacheEntry::new(data, now_millis)) {
        Ok(raw) => Some(raw),
        Err(e) => {
            warn!("Could not encode cache entry \"{}\": {}", key, e);
            None
        }
    }
}
