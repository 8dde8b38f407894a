//! Workflow configuration from TOML (`[workflow]` section)

use faqsmith_application::WorkflowParams;
use faqsmith_application::config::workflow_params::{
    DEFAULT_FALLBACK_EXCERPT_CHARS, DEFAULT_KEYWORD_PAUSE, DEFAULT_MIN_CONTENT_CHARS,
};
use faqsmith_domain::KeywordResolution;
use faqsmith_domain::question::{MAX_QUESTIONS, MIN_QUESTION_CHARS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw workflow configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkflowConfig {
    /// Pause between per-keyword question fetches, in milliseconds
    pub keyword_pause_ms: u64,
    pub max_questions: usize,
    pub min_question_chars: usize,
    pub fallback_excerpt_chars: usize,
    pub min_content_chars: usize,
    /// `"match-endpoint"` or `"static-index"`
    pub keyword_resolution: KeywordResolution,
}

impl Default for FileWorkflowConfig {
    fn default() -> Self {
        Self {
            keyword_pause_ms: DEFAULT_KEYWORD_PAUSE.as_millis() as u64,
            max_questions: MAX_QUESTIONS,
            min_question_chars: MIN_QUESTION_CHARS,
            fallback_excerpt_chars: DEFAULT_FALLBACK_EXCERPT_CHARS,
            min_content_chars: DEFAULT_MIN_CONTENT_CHARS,
            keyword_resolution: KeywordResolution::default(),
        }
    }
}

impl FileWorkflowConfig {
    pub fn to_workflow_params(&self) -> WorkflowParams {
        WorkflowParams {
            keyword_pause: Duration::from_millis(self.keyword_pause_ms),
            max_questions: self.max_questions,
            min_question_chars: self.min_question_chars,
            fallback_excerpt_chars: self.fallback_excerpt_chars,
            min_content_chars: self.min_content_chars,
            keyword_resolution: self.keyword_resolution,
        }
    }
}
