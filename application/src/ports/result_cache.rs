//! Local result cache port
//!
//! A time-boxed key/value store fronting the page list, page detail and
//! keyword-index fetches. It is opportunistic: every caller must behave
//! correctly if it is always empty. Reads, writes and deletes never fail;
//! a corrupt or unreadable entry is reported as absent.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

/// Time source for cache validity checks
pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds
    fn now_millis(&self) -> i64;
}

/// Key/value store with a 12-hour validity window
pub trait ResultCache: Send + Sync {
    /// Stored value, or `None` if missing, corrupt or expired.
    /// Expired entries are removed by the read that finds them.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value stamped with the current time
    fn set(&self, key: &str, value: Value);

    /// Age of a stored entry, valid or not
    fn age(&self, key: &str) -> Option<Duration>;

    /// Remove an entry
    fn clear(&self, key: &str);
}

/// Typed helpers over [`ResultCache`]
pub trait ResultCacheExt: ResultCache {
    /// Read and deserialize; a value of the wrong shape counts as absent
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                warn!("Ignoring cache entry \"{}\" with unexpected shape: {}", key, e);
                None
            }
        }
    }

    /// Serialize and store; serialization failures are logged and dropped
    fn set_as<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(v) => self.set(key, v),
            Err(e) => warn!("Could not serialize cache entry \"{}\": {}", key, e),
        }
    }
}

impl<C: ResultCache + ?Sized> ResultCacheExt for C {}

/// Cache that never stores anything
pub struct NoCache;

impl ResultCache for NoCache {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }
    fn set(&self, _key: &str, _value: Value) {}
    fn age(&self, _key: &str) -> Option<Duration> {
        None
    }
    fn clear(&self, _key: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
    }

    #[test]
    fn test_no_cache_is_always_empty() {
        let cache = NoCache;
        cache.set("k", serde_json::json!(1));
        assert!(cache.get("k").is_none());
        assert!(cache.age("k").is_none());
    }

    #[test]
    fn test_typed_helpers_on_trait_object() {
        let cache: &dyn ResultCache = &NoCache;
        cache.set_as("k", &Entry { name: "x".into() });
        assert_eq!(cache.get_as::<Entry>("k"), None);
    }
}
