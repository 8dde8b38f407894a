//! Workflow parameters: pacing and limits of a FAQ generation run.
//!
//! [`WorkflowParams`] groups the static parameters the use cases read.
//! They are application-layer concerns, not domain policy; the defaults are
//! the domain constants.

use faqsmith_domain::KeywordResolution;
use faqsmith_domain::question::{MAX_QUESTIONS, MIN_QUESTION_CHARS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pause between consecutive search-question requests
pub const DEFAULT_KEYWORD_PAUSE: Duration = Duration::from_millis(300);

/// Characters of content sent with a fallback-question request
pub const DEFAULT_FALLBACK_EXCERPT_CHARS: usize = 3000;

/// Minimum content length for FAQ generation
pub const DEFAULT_MIN_CONTENT_CHARS: usize = 100;

/// Workflow pacing and limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowParams {
    /// Courtesy pause between per-keyword question fetches.
    pub keyword_pause: Duration,
    /// Maximum aggregated questions.
    pub max_questions: usize,
    /// Questions shorter than this after trimming are dropped.
    pub min_question_chars: usize,
    /// Content excerpt length for the fallback-question request.
    pub fallback_excerpt_chars: usize,
    /// Minimum trimmed content length for generation.
    pub min_content_chars: usize,
    /// Where CMS page keywords come from.
    pub keyword_resolution: KeywordResolution,
}

impl Default for WorkflowParams {
    fn default() -> Self {
        Self {
            keyword_pause: DEFAULT_KEYWORD_PAUSE,
            max_questions: MAX_QUESTIONS,
            min_question_chars: MIN_QUESTION_CHARS,
            fallback_excerpt_chars: DEFAULT_FALLBACK_EXCERPT_CHARS,
            min_content_chars: DEFAULT_MIN_CONTENT_CHARS,
            keyword_resolution: KeywordResolution::default(),
        }
    }
}

impl WorkflowParams {
    // ==================== Builder Methods ====================

    pub fn with_keyword_pause(mut self, pause: Duration) -> Self {
        self.keyword_pause = pause;
        self
    }

    pub fn with_max_questions(mut self, max: usize) -> Self {
        self.max_questions = max;
        self
    }

    pub fn with_keyword_resolution(mut self, resolution: KeywordResolution) -> Self {
        self.keyword_resolution = resolution;
        self
    }

    pub fn with_min_content_chars(mut self, min: usize) -> Self {
        self.min_content_chars = min;
        self
    }
}
