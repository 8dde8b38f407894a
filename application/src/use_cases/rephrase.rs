//! Rephrase use case
//!
//! Requests two alternate phrasings per content FAQ. Strictly best-effort:
//! any failure yields no rephrasings and never aborts the run.

use crate::ports::faq_backend::{FaqBackend, RephraseRequest};
use faqsmith_domain::{FaqEntry, KeywordIndex, RephrasedFaq};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for rephrasing FAQs
pub struct Rephraser<B: FaqBackend + 'static> {
    backend: Arc<B>,
}

impl<B: FaqBackend + 'static> Rephraser<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Rephrasings aligned 1:1 with `faqs`, or an empty list.
    ///
    /// A response with a different number of entries than `faqs` is
    /// discarded, since alignment by index could not be trusted.
    pub async fn rephrase(
        &self,
        faqs: &[FaqEntry],
        content: &str,
        index: Option<&KeywordIndex>,
    ) -> Vec<RephrasedFaq> {
        if faqs.is_empty() {
            return Vec::new();
        }

        let request = RephraseRequest {
            faqs: faqs.to_vec(),
            content: content.to_string(),
            keywords_data: index.cloned(),
        };

        match self.backend.rephrase_faqs(&request).await {
            Ok(Some(rephrased)) if rephrased.len() == faqs.len() => {
                info!("Rephrased {} FAQs", rephrased.len());
                rephrased
            }
            Ok(Some(rephrased)) => {
                warn!(
                    "Rephrase returned {} entries for {} FAQs, ignoring",
                    rephrased.len(),
                    faqs.len()
                );
                Vec::new()
            }
            Ok(None) => {
                warn!("Rephrase response had an unrecognized shape");
                Vec::new()
            }
            Err(e) => {
                warn!("Rephrasing failed: {}", e);
                Vec::new()
            }
        }
    }
}
