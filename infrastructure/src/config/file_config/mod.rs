//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod cache;
mod output;
mod workflow;

pub use backend::{DEFAULT_BASE_URL, FileBackendConfig};
pub use cache::FileCacheConfig;
pub use output::FileOutputConfig;
pub use workflow::FileWorkflowConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("workflow.{0} cannot be 0")]
    ZeroLimit(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// FAQ API location and timeouts
    pub backend: FileBackendConfig,
    /// Pacing and limits of a run
    pub workflow: FileWorkflowConfig,
    /// Local result cache
    pub cache: FileCacheConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.backend.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        if self.backend.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        let limits = [
            ("max_questions", self.workflow.max_questions),
            ("min_content_chars", self.workflow.min_content_chars),
            ("fallback_excerpt_chars", self.workflow.fallback_excerpt_chars),
        ];
        for (field, value) in limits {
            if value == 0 {
                issues.push(ConfigValidationError::ZeroLimit(field));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqsmith_domain::{KeywordResolution, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
base_url = "https://faq.example.com"
timeout_seconds = 30

[workflow]
keyword_pause_ms = 500
max_questions = 20
keyword_resolution = "static-index"

[cache]
enabled = false
dir = "/tmp/faqsmith-cache"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url, "https://faq.example.com");
        assert_eq!(config.backend.timeout_seconds, Some(30));
        assert_eq!(config.workflow.keyword_pause_ms, 500);
        assert_eq!(config.workflow.max_questions, 20);
        assert_eq!(
            config.workflow.keyword_resolution,
            KeywordResolution::StaticIndex
        );
        assert!(!config.cache.enabled);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[workflow]
max_questions = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.workflow.max_questions, 10);
        // Defaults should apply
        assert_eq!(config.workflow.min_question_chars, 11);
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert!(config.cache.enabled);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[backend]
base_url = "  "
timeout_seconds = 0

[workflow]
max_questions = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::EmptyBaseUrl,
                ConfigValidationError::InvalidTimeout,
                ConfigValidationError::ZeroLimit("max_questions"),
            ]
        );
        assert_eq!(issues[2].to_string(), "workflow.max_questions cannot be 0");
    }
}
