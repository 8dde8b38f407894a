//! Backend configuration from TOML (`[backend]` section)

use serde::{Deserialize, Serialize};

/// Where the backend runs when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the FAQ API
    pub base_url: String,
    /// Location of the static keyword index; `<base_url>/keywords.json` when unset
    pub keywords_file_url: Option<String>,
    /// Request timeout; unset leaves it to the HTTP client
    pub timeout_seconds: Option<u64>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            keywords_file_url: None,
            timeout_seconds: None,
        }
    }
}

impl FileBackendConfig {
    /// Static keyword index url, derived from the base url when not set
    pub fn keywords_file_url(&self) -> String {
        match &self.keywords_file_url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => format!("{}/keywords.json", self.base_url.trim_end_matches('/')),
        }
    }
}
