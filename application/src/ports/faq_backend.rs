//! FAQ backend port
//!
//! Defines the interface to the HTTP services behind the workflow: the CMS
//! proxy, keyword matching, search questions and the AI generation endpoints.
//! All of them are black boxes; this port fixes only their request and
//! decoded response shapes.

use async_trait::async_trait;
use faqsmith_domain::{CmsPage, FaqEntry, KeywordIndex, MatchOutcome, PageDetail, RelatedLink, RephrasedFaq};
use serde::Serialize;
use thiserror::Error;

/// Maximum characters of an error body quoted in [`BackendError::Status`]
pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// Errors that can occur during backend calls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("API Error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Non-2xx status with the body preview trimmed to
    /// [`ERROR_BODY_PREVIEW_CHARS`] characters
    pub fn status(status: u16, body: &str) -> Self {
        BackendError::Status {
            status,
            body: body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::Status { status: 404, .. })
    }
}

/// `POST /api/match-keyword`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchKeywordRequest {
    pub url: String,
    pub slug: Option<String>,
    pub category: String,
}

/// `POST /api/generate-faqs`
///
/// Content-derived generation sends an empty `serp_questions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFaqsRequest {
    pub keyword: String,
    pub content: String,
    pub serp_questions: Vec<String>,
    pub keywords_data: Option<KeywordIndex>,
}

/// `POST /api/generate-content-faqs`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFaqsRequest {
    pub keyword: String,
    pub content: String,
    pub keywords_data: Option<KeywordIndex>,
}

/// `POST /api/rephrase-faqs`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RephraseRequest {
    pub faqs: Vec<FaqEntry>,
    pub content: String,
    pub keywords_data: Option<KeywordIndex>,
}

/// `POST /api/interlink-faqs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterlinkRequest {
    pub faqs: Vec<FaqEntry>,
    pub keywords: KeywordIndex,
}

/// Backend for the FAQ workflow
///
/// Implementations (adapters) live in the infrastructure layer. Response
/// decoding is total: shapes the adapter does not recognize decode to empty
/// or `None` results, and only transport, status and unparsable-body
/// failures surface as [`BackendError`].
#[async_trait]
pub trait FaqBackend: Send + Sync {
    /// `GET /keywords.json`; `None` when the file is not a JSON object
    async fn fetch_static_keyword_index(&self) -> Result<Option<KeywordIndex>, BackendError>;

    /// `GET /strapi/faq` → `{result}`; `None` when `result` is missing
    async fn fetch_cms_keyword_index(&self) -> Result<Option<KeywordIndex>, BackendError>;

    /// `POST /api/fetch-strapi-content {collection}`; `None` when `pages` is missing
    async fn list_pages(&self, collection: &str) -> Result<Option<Vec<CmsPage>>, BackendError>;

    /// `POST /api/fetch-strapi-content {collection, pageId}`
    async fn fetch_page(&self, collection: &str, page_id: &str) -> Result<PageDetail, BackendError>;

    /// `POST /api/match-keyword`; a 404 status decodes to [`MatchOutcome::NotFound`]
    async fn match_keyword(&self, request: &MatchKeywordRequest) -> Result<MatchOutcome, BackendError>;

    /// `POST /api/fetch-serp-questions {keyword}`
    async fn fetch_serp_questions(&self, keyword: &str) -> Result<Vec<String>, BackendError>;

    /// `POST /api/generate-fallback-questions {keyword, content}`
    async fn generate_fallback_questions(
        &self,
        keyword: &str,
        content: &str,
    ) -> Result<Vec<String>, BackendError>;

    /// `POST /api/generate-faqs`
    async fn generate_faqs(&self, request: &GenerateFaqsRequest) -> Result<Vec<FaqEntry>, BackendError>;

    /// `POST /api/generate-content-faqs`
    async fn generate_content_faqs(
        &self,
        request: &ContentFaqsRequest,
    ) -> Result<Vec<FaqEntry>, BackendError>;

    /// `POST /api/rephrase-faqs`; `None` when the body matches no known shape
    async fn rephrase_faqs(
        &self,
        request: &RephraseRequest,
    ) -> Result<Option<Vec<RephrasedFaq>>, BackendError>;

    /// `POST /api/interlink-faqs`; `None` when `interlinked` is missing
    async fn interlink_faqs(
        &self,
        request: &InterlinkRequest,
    ) -> Result<Option<Vec<FaqEntry>>, BackendError>;

    /// `POST /interlink {keyword}`
    async fn related_links(&self, keyword: &str) -> Result<Vec<RelatedLink>, BackendError>;
}
