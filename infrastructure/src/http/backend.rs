//! reqwest implementation of the FAQ backend port

use async_trait::async_trait;
use faqsmith_application::ports::faq_backend::{
    BackendError, ContentFaqsRequest, FaqBackend, GenerateFaqsRequest, InterlinkRequest,
    MatchKeywordRequest, RephraseRequest,
};
use faqsmith_domain::response::{
    decode_faq_list, decode_interlinked, decode_links, decode_pages, decode_questions,
    decode_rephrased,
};
use faqsmith_domain::{
    CmsPage, FaqEntry, KeywordIndex, MatchOutcome, PageDetail, RelatedLink, RephrasedFaq,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, trace};

const USER_AGENT: &str = concat!("faqsmith/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`HttpFaqBackend`]
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// e.g. `http://localhost:5001`
    pub base_url: String,
    /// Full url of the static keyword index
    pub keywords_file_url: String,
    /// `None` keeps the client's default
    pub timeout: Option<Duration>,
}

impl HttpBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            keywords_file_url: format!("{}/keywords.json", base_url),
            base_url,
            timeout: None,
        }
    }

    pub fn with_keywords_file_url(mut self, url: impl Into<String>) -> Self {
        self.keywords_file_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Backend adapter speaking JSON over HTTP
pub struct HttpFaqBackend {
    client: reqwest::Client,
    config: HttpBackendConfig,
}

impl HttpFaqBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, BackendError> {
        let url = self.endpoint(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        read_json(response).await
    }

    async fn get_json(&self, url: &str) -> Result<Value, BackendError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        read_json(response).await
    }
}

/// Read a response body as JSON, turning non-2xx statuses into errors
async fn read_json(response: reqwest::Response) -> Result<Value, BackendError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;
    trace!("{} ({} bytes)", status, text.len());
    parse_body(status.as_u16(), &text)
}

fn parse_body(status: u16, text: &str) -> Result<Value, BackendError> {
    if !(200..300).contains(&status) {
        return Err(BackendError::status(status, text));
    }
    serde_json::from_str(text).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Keyword-match results: a 404 is an answer, not a failure
fn decode_match(result: Result<Value, BackendError>) -> Result<MatchOutcome, BackendError> {
    match result {
        Ok(body) => Ok(MatchOutcome::decode(&body)),
        Err(BackendError::Status { status: 404, body }) => {
            let message = serde_json::from_str::<Value>(&body).ok().and_then(|v| {
                v.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });
            Ok(MatchOutcome::not_found(message.as_deref()))
        }
        Err(e) => Err(e),
    }
}

#[async_trait]
impl FaqBackend for HttpFaqBackend {
    async fn fetch_static_keyword_index(&self) -> Result<Option<KeywordIndex>, BackendError> {
        let body = self.get_json(&self.config.keywords_file_url).await?;
        Ok(KeywordIndex::from_value(body))
    }

    async fn fetch_cms_keyword_index(&self) -> Result<Option<KeywordIndex>, BackendError> {
        let body = self.get_json(&self.endpoint("/strapi/faq")).await?;
        Ok(body
            .get("result")
            .cloned()
            .and_then(KeywordIndex::from_value))
    }

    async fn list_pages(&self, collection: &str) -> Result<Option<Vec<CmsPage>>, BackendError> {
        let body = self
            .post_json("/api/fetch-strapi-content", &json!({ "collection": collection }))
            .await?;
        Ok(decode_pages(&body))
    }

    async fn fetch_page(&self, collection: &str, page_id: &str) -> Result<PageDetail, BackendError> {
        let body = self
            .post_json(
                "/api/fetch-strapi-content",
                &json!({ "collection": collection, "pageId": page_id }),
            )
            .await?;
        serde_json::from_value(body).map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn match_keyword(&self, request: &MatchKeywordRequest) -> Result<MatchOutcome, BackendError> {
        decode_match(self.post_json("/api/match-keyword", request).await)
    }

    async fn fetch_serp_questions(&self, keyword: &str) -> Result<Vec<String>, BackendError> {
        let body = self
            .post_json("/api/fetch-serp-questions", &json!({ "keyword": keyword }))
            .await?;
        Ok(decode_questions(&body))
    }

    async fn generate_fallback_questions(
        &self,
        keyword: &str,
        content: &str,
    ) -> Result<Vec<String>, BackendError> {
        let body = self
            .post_json(
                "/api/generate-fallback-questions",
                &json!({ "keyword": keyword, "content": content }),
            )
            .await?;
        Ok(decode_questions(&body))
    }

    async fn generate_faqs(&self, request: &GenerateFaqsRequest) -> Result<Vec<FaqEntry>, BackendError> {
        let body = self.post_json("/api/generate-faqs", request).await?;
        Ok(decode_faq_list(&body))
    }

    async fn generate_content_faqs(
        &self,
        request: &ContentFaqsRequest,
    ) -> Result<Vec<FaqEntry>, BackendError> {
        let body = self.post_json("/api/generate-content-faqs", request).await?;
        Ok(decode_faq_list(&body))
    }

    async fn rephrase_faqs(
        &self,
        request: &RephraseRequest,
    ) -> Result<Option<Vec<RephrasedFaq>>, BackendError> {
        let body = self.post_json("/api/rephrase-faqs", request).await?;
        Ok(decode_rephrased(&body))
    }

    async fn interlink_faqs(
        &self,
        request: &InterlinkRequest,
    ) -> Result<Option<Vec<FaqEntry>>, BackendError> {
        let body = self.post_json("/api/interlink-faqs", request).await?;
        Ok(decode_interlinked(&body))
    }

    async fn related_links(&self, keyword: &str) -> Result<Vec<RelatedLink>, BackendError> {
        let body = self
            .post_json("/interlink", &json!({ "keyword": keyword }))
            .await?;
        Ok(decode_links(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = HttpBackendConfig::new("http://localhost:5001/");
        assert_eq!(config.base_url, "http://localhost:5001");
        assert_eq!(config.keywords_file_url, "http://localhost:5001/keywords.json");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_endpoint_joins_path() {
        let backend = HttpFaqBackend::new(HttpBackendConfig::new("http://api.test")).unwrap();
        assert_eq!(
            backend.endpoint("/api/match-keyword"),
            "http://api.test/api/match-keyword"
        );
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        let err = parse_body(502, &"bad gateway ".repeat(50)).unwrap_err();
        match &err {
            BackendError::Status { status, body } => {
                assert_eq!(*status, 502);
                assert_eq!(body.chars().count(), 200);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(err.to_string().starts_with("API Error: 502 - bad gateway"));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        assert!(matches!(
            parse_body(200, "<html>"),
            Err(BackendError::Decode(_))
        ));
    }

    #[test]
    fn test_match_404_becomes_not_found() {
        let outcome = decode_match(parse_body(404, r#"{"message": "Page not indexed"}"#)).unwrap();
        assert_eq!(
            outcome,
            MatchOutcome::NotFound {
                message: "Page not indexed".into()
            }
        );
    }

    #[test]
    fn test_match_404_without_body_uses_default_message() {
        let outcome = decode_match(parse_body(404, "")).unwrap();
        assert!(matches!(outcome, MatchOutcome::NotFound { .. }));
    }

    #[test]
    fn test_match_server_error_propagates() {
        assert!(decode_match(parse_body(500, "boom")).is_err());
    }

    #[test]
    fn test_match_success_body_decodes() {
        let outcome = decode_match(parse_body(
            200,
            r#"{"keywords": ["best crm"], "keyword": "best crm"}"#,
        ))
        .unwrap();
        assert!(matches!(outcome, MatchOutcome::Matched { .. }));
    }
}
