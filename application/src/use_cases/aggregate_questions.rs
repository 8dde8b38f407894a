//! Aggregate Questions use case
//!
//! Collects "People Also Ask" questions for every candidate keyword, one
//! keyword at a time, and falls back to AI-generated questions when search
//! turns up nothing.

use crate::config::WorkflowParams;
use crate::ports::faq_backend::FaqBackend;
use crate::ports::progress::WorkflowProgress;
use faqsmith_domain::core::string::excerpt;
use faqsmith_domain::{KeywordSet, QuestionSet, filter_questions};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of an aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedQuestions {
    pub questions: Vec<String>,
    /// Whether the list came from the fallback generator
    pub from_fallback: bool,
}

/// Use case for aggregating questions
pub struct QuestionAggregator<B: FaqBackend + 'static> {
    backend: Arc<B>,
    params: WorkflowParams,
}

impl<B: FaqBackend + 'static> QuestionAggregator<B> {
    pub fn new(backend: Arc<B>, params: WorkflowParams) -> Self {
        Self { backend, params }
    }

    /// Aggregate questions for `keywords`.
    ///
    /// Never fails: a keyword whose fetch fails contributes nothing, and a
    /// failed fallback leaves the result empty.
    pub async fn aggregate(
        &self,
        keywords: &KeywordSet,
        content: &str,
        progress: &dyn WorkflowProgress,
    ) -> AggregatedQuestions {
        let queries: Vec<&str> = keywords
            .query_keywords()
            .into_iter()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect();
        let total = queries.len();
        let mut set = QuestionSet::new();

        for (i, keyword) in queries.iter().enumerate() {
            if i > 0 && !self.params.keyword_pause.is_zero() {
                tokio::time::sleep(self.params.keyword_pause).await;
            }

            progress.on_keyword_start(i + 1, total, keyword);
            progress.on_status(&format!(
                "[{}/{}] Fetching questions for: \"{}\"...",
                i + 1,
                total,
                keyword
            ));

            match self.backend.fetch_serp_questions(keyword).await {
                Ok(candidates) => {
                    let kept = filter_questions(&candidates);
                    debug!(
                        "\"{}\": {} of {} candidates are questions",
                        keyword,
                        kept.len(),
                        candidates.len()
                    );
                    set.extend(kept);
                }
                Err(e) => {
                    warn!("Failed to fetch questions for \"{}\": {}", keyword, e);
                    progress.on_warning(&format!("Questions for \"{}\" unavailable: {}", keyword, e));
                }
            }
        }

        let questions = set.finish(self.params.min_question_chars, self.params.max_questions);
        if !questions.is_empty() {
            info!("Aggregated {} questions from {} keywords", questions.len(), total);
            return AggregatedQuestions {
                questions,
                from_fallback: false,
            };
        }

        self.fallback(keywords, content, progress).await
    }

    async fn fallback(
        &self,
        keywords: &KeywordSet,
        content: &str,
        progress: &dyn WorkflowProgress,
    ) -> AggregatedQuestions {
        progress.on_status("No Google questions found. Generating questions using AI...");

        let keyword = keywords.lead().trim();
        let content = excerpt(content, self.params.fallback_excerpt_chars);

        match self.backend.generate_fallback_questions(keyword, content).await {
            Ok(questions) => {
                info!("Fallback generated {} questions", questions.len());
                AggregatedQuestions {
                    questions,
                    from_fallback: true,
                }
            }
            Err(e) => {
                warn!("Fallback question generation failed: {}", e);
                progress.on_warning(&format!("AI question generation failed: {}", e));
                AggregatedQuestions::default()
            }
        }
    }
}
