//! In-memory result cache

use super::{Stored, classify, encode};
use faqsmith_application::{Clock, ResultCache};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Process-local cache with the same validity rules as the file cache
pub struct MemoryResultCache {
    entries: Mutex<HashMap<String, String>>,
    clock: Arc<dyn Clock>,
}

impl MemoryResultCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Store raw text under `key`, bypassing encoding
    pub fn insert_raw(&self, key: &str, raw: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), raw.into());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl ResultCache for MemoryResultCache {
    fn get(&self, key: &str) -> Option<Value> {
        let raw = self.raw(key)?;
        match classify(key, &raw, self.clock.now_millis()) {
            Stored::Valid(entry) => Some(entry.data),
            Stored::Stale => {
                self.clear(key);
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value) {
        if let Some(raw) = encode(key, value, self.clock.now_millis()) {
            self.insert_raw(key, raw);
        }
    }

    fn age(&self, key: &str) -> Option<Duration> {
        let entry = faqsmith_domain::CacheEntry::parse(&self.raw(key)?)?;
        Some(entry.age_at(self.clock.now_millis()))
    }

    fn clear(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}
