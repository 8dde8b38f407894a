//! Cache configuration from TOML (`[cache]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw cache configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Disable to run every fetch against the backend
    pub enabled: bool,
    /// Cache directory; the platform cache dir when unset
    pub dir: Option<PathBuf>,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

impl FileCacheConfig {
    /// Directory the cache lives in, if one can be determined
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|d| d.join("faqsmith")))
    }
}
