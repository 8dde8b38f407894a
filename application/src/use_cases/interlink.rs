//! Interlink use case
//!
//! Embeds links to other known pages into FAQ answers, driven by the
//! keyword index. Also serves the related-links lookup.

use crate::ports::faq_backend::{FaqBackend, InterlinkRequest};
use faqsmith_domain::{FaqEntry, KeywordIndex, RelatedLink};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of an interlink attempt
#[derive(Debug, Clone, PartialEq)]
pub struct InterlinkOutcome {
    pub faqs: Vec<FaqEntry>,
    /// False when the input came back unchanged
    pub applied: bool,
}

impl InterlinkOutcome {
    fn unchanged(faqs: Vec<FaqEntry>) -> Self {
        Self {
            faqs,
            applied: false,
        }
    }
}

/// Use case for interlinking FAQs
pub struct Interlinker<B: FaqBackend + 'static> {
    backend: Arc<B>,
}

impl<B: FaqBackend + 'static> Interlinker<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Interlink `faqs` against `index`.
    ///
    /// A missing or empty index is a silent no-op. Failures and responses
    /// that do not line up with the input leave `faqs` unchanged.
    pub async fn interlink(&self, faqs: Vec<FaqEntry>, index: Option<&KeywordIndex>) -> InterlinkOutcome {
        let Some(index) = index.filter(|i| !i.is_empty()) else {
            debug!("No keyword index, skipping interlinking");
            return InterlinkOutcome::unchanged(faqs);
        };
        if faqs.is_empty() {
            return InterlinkOutcome::unchanged(faqs);
        }

        let request = InterlinkRequest {
            faqs: faqs.clone(),
            keywords: index.clone(),
        };

        match self.backend.interlink_faqs(&request).await {
            Ok(Some(linked)) if linked.len() == faqs.len() => {
                let with_links = linked.iter().filter(|f| f.has_interlink).count();
                info!("Interlinked FAQs ({} of {} contain links)", with_links, linked.len());
                InterlinkOutcome {
                    faqs: linked,
                    applied: true,
                }
            }
            Ok(Some(linked)) => {
                warn!(
                    "Interlinking returned {} entries for {} FAQs, ignoring",
                    linked.len(),
                    faqs.len()
                );
                InterlinkOutcome::unchanged(faqs)
            }
            Ok(None) => {
                warn!("Interlinking returned no data");
                InterlinkOutcome::unchanged(faqs)
            }
            Err(e) => {
                warn!("Interlinking failed: {}", e);
                InterlinkOutcome::unchanged(faqs)
            }
        }
    }

    /// Related pages for a keyword; empty on any failure
    pub async fn related_links(&self, keyword: &str) -> Vec<RelatedLink> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Vec::new();
        }
        match self.backend.related_links(keyword).await {
            Ok(links) => links,
            Err(e) => {
                warn!("Related links for \"{}\" unavailable: {}", keyword, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockBackend, upstream_error};
    use serde_json::json;

    fn index() -> KeywordIndex {
        KeywordIndex::from_value(json!({
            "Features": [{"url": "/features/crm", "keywords": ["crm"]}]
        }))
        .unwrap()
    }

    fn faqs() -> Vec<FaqEntry> {
        vec![FaqEntry::new("What is a CRM?", "A crm stores contacts.")]
    }

    #[tokio::test]
    async fn test_missing_index_is_noop() {
        let backend = Arc::new(MockBackend::default());
        let outcome = Interlinker::new(backend.clone()).interlink(faqs(), None).await;

        assert!(!outcome.applied);
        assert_eq!(outcome.faqs, faqs());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_index_is_noop() {
        let backend = Arc::new(MockBackend::default());
        let empty = KeywordIndex::default();
        let outcome = Interlinker::new(backend.clone()).interlink(faqs(), Some(&empty)).await;

        assert!(!outcome.applied);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_linked_answers_replace_input() {
        let linked = vec![
            FaqEntry::new("What is a CRM?", "A <a href=\"/features/crm\">crm</a> stores contacts.")
                .normalized(),
        ];
        let backend = Arc::new(MockBackend {
            interlinked: Ok(Some(linked.clone())),
            ..Default::default()
        });
        let index = index();

        let outcome = Interlinker::new(backend.clone()).interlink(faqs(), Some(&index)).await;

        assert!(outcome.applied);
        assert!(outcome.faqs[0].has_interlink);
        assert_eq!(backend.interlink_requests.lock().unwrap()[0].keywords, index);
    }

    #[tokio::test]
    async fn test_failure_returns_input_unchanged() {
        let backend = Arc::new(MockBackend {
            interlinked: Err(upstream_error()),
            ..Default::default()
        });
        let index = index();

        let outcome = Interlinker::new(backend).interlink(faqs(), Some(&index)).await;

        assert!(!outcome.applied);
        assert_eq!(outcome.faqs, faqs());
    }

    #[tokio::test]
    async fn test_related_links_swallow_errors() {
        let backend = Arc::new(MockBackend {
            links: Err(upstream_error()),
            ..Default::default()
        });
        assert!(Interlinker::new(backend).related_links("crm").await.is_empty());
    }
}
