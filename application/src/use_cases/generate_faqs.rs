//! Generate FAQs use case
//!
//! Two independent generation calls over the same content: one without
//! question hints (content FAQs) and one seeded with the aggregated search
//! questions (PAA FAQs).

use crate::ports::faq_backend::{BackendError, ContentFaqsRequest, FaqBackend, GenerateFaqsRequest};
use faqsmith_domain::content::require_content;
use faqsmith_domain::{DomainError, FaqEntry, KeywordIndex, WorkflowVariant};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during FAQ generation
#[derive(Error, Debug)]
pub enum FaqGenerationError {
    #[error(transparent)]
    Input(#[from] DomainError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Use case for generating FAQs
pub struct FaqGenerator<B: FaqBackend + 'static> {
    backend: Arc<B>,
    min_content_chars: usize,
}

impl<B: FaqBackend + 'static> FaqGenerator<B> {
    pub fn new(backend: Arc<B>, min_content_chars: usize) -> Self {
        Self {
            backend,
            min_content_chars,
        }
    }

    /// Content-derived FAQs. The endpoint depends on the workflow variant.
    pub async fn generate_content_faqs(
        &self,
        keyword: &str,
        content: &str,
        index: Option<&KeywordIndex>,
        variant: WorkflowVariant,
    ) -> Result<Vec<FaqEntry>, FaqGenerationError> {
        require_content(content, self.min_content_chars)?;

        let faqs = if variant.uses_content_endpoint() {
            self.backend
                .generate_content_faqs(&ContentFaqsRequest {
                    keyword: keyword.to_string(),
                    content: content.to_string(),
                    keywords_data: index.cloned(),
                })
                .await?
        } else {
            self.backend
                .generate_faqs(&GenerateFaqsRequest {
                    keyword: keyword.to_string(),
                    content: content.to_string(),
                    serp_questions: Vec::new(),
                    keywords_data: index.cloned(),
                })
                .await?
        };

        info!("Generated {} content FAQs for \"{}\"", faqs.len(), keyword);
        Ok(faqs)
    }

    /// Search-derived ("People Also Ask") FAQs
    pub async fn generate_paa_faqs(
        &self,
        keyword: &str,
        content: &str,
        questions: &[String],
        index: Option<&KeywordIndex>,
    ) -> Result<Vec<FaqEntry>, FaqGenerationError> {
        require_content(content, self.min_content_chars)?;

        let faqs = self
            .backend
            .generate_faqs(&GenerateFaqsRequest {
                keyword: keyword.to_string(),
                content: content.to_string(),
                serp_questions: questions.to_vec(),
                keywords_data: index.cloned(),
            })
            .await?;

        info!(
            "Generated {} PAA FAQs from {} questions",
            faqs.len(),
            questions.len()
        );
        Ok(faqs)
    }
}
