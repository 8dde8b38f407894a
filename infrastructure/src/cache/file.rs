//! File-backed result cache

use super::{Stored, classify, encode};
use faqsmith_application::{Clock, ResultCache};
use faqsmith_domain::CacheEntry;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Cache storing each key as `<dir>/<key>.json`
///
/// Every I/O failure is logged and treated as a miss; nothing here ever
/// fails the caller.
pub struct FileResultCache {
    dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileResultCache {
    pub fn new(dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            dir: dir.into(),
            clock,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `key`.
    ///
    /// Bytes outside `[A-Za-z0-9_-]` are percent-encoded (`%2E`), so distinct
    /// keys always map to distinct files.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                name.push(char::from(byte));
            } else {
                name.push('%');
                name.push_str(&hex::encode_upper([byte]));
            }
        }
        self.dir.join(format!("{}.json", name))
    }

    fn read(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Could not read cache file {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl ResultCache for FileResultCache {
    fn get(&self, key: &str) -> Option<Value> {
        let raw = self.read(key)?;
        match classify(key, &raw, self.clock.now_millis()) {
            Stored::Valid(entry) => {
                debug!("Cache hit: {}", key);
                Some(entry.data)
            }
            Stored::Stale => {
                self.clear(key);
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value) {
        let Some(raw) = encode(key, value, self.clock.now_millis()) else {
            return;
        };
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!("Could not create cache dir {}: {}", self.dir.display(), e);
            return;
        }
        let path = self.path_for(key);
        if let Err(e) = std::fs::write(&path, raw) {
            warn!("Could not write cache file {}: {}", path.display(), e);
        }
    }

    fn age(&self, key: &str) -> Option<Duration> {
        let entry = CacheEntry::parse(&self.read(key)?)?;
        Some(entry.age_at(self.clock.now_millis()))
    }

    fn clear(&self, key: &str) {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => debug!("Removed cache entry {}", key),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove cache file {}: {}", path.display(), e),
        }
    }
}
