//! Hand-written port doubles shared by the use-case tests

use crate::ports::faq_backend::{
    BackendError, ContentFaqsRequest, FaqBackend, GenerateFaqsRequest, InterlinkRequest,
    MatchKeywordRequest, RephraseRequest,
};
use crate::ports::progress::WorkflowProgress;
use crate::ports::result_cache::ResultCache;
use async_trait::async_trait;
use faqsmith_domain::{
    CmsPage, FaqEntry, KeywordIndex, MatchOutcome, PageDetail, RelatedLink, RephrasedFaq,
    WorkflowStage,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub(crate) fn upstream_error() -> BackendError {
    BackendError::status(500, "upstream exploded")
}

/// Scripted backend that records every call in order
pub(crate) struct MockBackend {
    pub static_index: Result<Option<KeywordIndex>, BackendError>,
    pub cms_index: Result<Option<KeywordIndex>, BackendError>,
    pub pages: HashMap<String, Result<Option<Vec<CmsPage>>, BackendError>>,
    pub page_details: HashMap<String, Result<PageDetail, BackendError>>,
    pub match_outcome: Result<MatchOutcome, BackendError>,
    pub serp: HashMap<String, Result<Vec<String>, BackendError>>,
    pub fallback: Result<Vec<String>, BackendError>,
    pub content_faqs: Result<Vec<FaqEntry>, BackendError>,
    pub paa_faqs: Result<Vec<FaqEntry>, BackendError>,
    pub rephrased: Result<Option<Vec<RephrasedFaq>>, BackendError>,
    pub interlinked: Result<Option<Vec<FaqEntry>>, BackendError>,
    pub links: Result<Vec<RelatedLink>, BackendError>,

    pub calls: Mutex<Vec<String>>,
    pub match_requests: Mutex<Vec<MatchKeywordRequest>>,
    pub fallback_requests: Mutex<Vec<(String, String)>>,
    pub generate_requests: Mutex<Vec<GenerateFaqsRequest>>,
    pub content_requests: Mutex<Vec<ContentFaqsRequest>>,
    pub rephrase_requests: Mutex<Vec<RephraseRequest>>,
    pub interlink_requests: Mutex<Vec<InterlinkRequest>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            static_index: Ok(None),
            cms_index: Ok(None),
            pages: HashMap::new(),
            page_details: HashMap::new(),
            match_outcome: Ok(MatchOutcome::NoMatch),
            serp: HashMap::new(),
            fallback: Ok(vec![]),
            content_faqs: Ok(vec![]),
            paa_faqs: Ok(vec![]),
            rephrased: Ok(None),
            interlinked: Ok(None),
            links: Ok(vec![]),
            calls: Mutex::new(vec![]),
            match_requests: Mutex::new(vec![]),
            fallback_requests: Mutex::new(vec![]),
            generate_requests: Mutex::new(vec![]),
            content_requests: Mutex::new(vec![]),
            rephrase_requests: Mutex::new(vec![]),
            interlink_requests: Mutex::new(vec![]),
        }
    }
}

impl MockBackend {
    pub fn with_serp(mut self, keyword: &str, questions: &[&str]) -> Self {
        self.serp.insert(
            keyword.to_string(),
            Ok(questions.iter().map(|q| q.to_string()).collect()),
        );
        self
    }

    pub fn with_serp_error(mut self, keyword: &str) -> Self {
        self.serp.insert(keyword.to_string(), Err(upstream_error()));
        self
    }

    pub fn with_page(mut self, page_id: &str, detail: PageDetail) -> Self {
        self.page_details.insert(page_id.to_string(), Ok(detail));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl FaqBackend for MockBackend {
    async fn fetch_static_keyword_index(&self) -> Result<Option<KeywordIndex>, BackendError> {
        self.record("static_index");
        self.static_index.clone()
    }

    async fn fetch_cms_keyword_index(&self) -> Result<Option<KeywordIndex>, BackendError> {
        self.record("cms_index");
        self.cms_index.clone()
    }

    async fn list_pages(&self, collection: &str) -> Result<Option<Vec<CmsPage>>, BackendError> {
        self.record(format!("list_pages:{}", collection));
        self.pages.get(collection).cloned().unwrap_or(Ok(None))
    }

    async fn fetch_page(&self, collection: &str, page_id: &str) -> Result<PageDetail, BackendError> {
        self.record(format!("fetch_page:{}/{}", collection, page_id));
        self.page_details
            .get(page_id)
            .cloned()
            .unwrap_or_else(|| Err(BackendError::status(404, "no such page")))
    }

    async fn match_keyword(&self, request: &MatchKeywordRequest) -> Result<MatchOutcome, BackendError> {
        self.record("match_keyword");
        self.match_requests.lock().unwrap().push(request.clone());
        self.match_outcome.clone()
    }

    async fn fetch_serp_questions(&self, keyword: &str) -> Result<Vec<String>, BackendError> {
        self.record(format!("serp:{}", keyword));
        self.serp.get(keyword).cloned().unwrap_or(Ok(vec![]))
    }

    async fn generate_fallback_questions(
        &self,
        keyword: &str,
        content: &str,
    ) -> Result<Vec<String>, BackendError> {
        self.record("fallback_questions");
        self.fallback_requests
            .lock()
            .unwrap()
            .push((keyword.to_string(), content.to_string()));
        self.fallback.clone()
    }

    async fn generate_faqs(&self, request: &GenerateFaqsRequest) -> Result<Vec<FaqEntry>, BackendError> {
        self.generate_requests.lock().unwrap().push(request.clone());
        if request.serp_questions.is_empty() {
            self.record("generate_faqs:content");
            self.content_faqs.clone()
        } else {
            self.record("generate_faqs:paa");
            self.paa_faqs.clone()
        }
    }

    async fn generate_content_faqs(
        &self,
        request: &ContentFaqsRequest,
    ) -> Result<Vec<FaqEntry>, BackendError> {
        self.record("generate_content_faqs");
        self.content_requests.lock().unwrap().push(request.clone());
        self.content_faqs.clone()
    }

    async fn rephrase_faqs(
        &self,
        request: &RephraseRequest,
    ) -> Result<Option<Vec<RephrasedFaq>>, BackendError> {
        self.record("rephrase");
        self.rephrase_requests.lock().unwrap().push(request.clone());
        self.rephrased.clone()
    }

    async fn interlink_faqs(
        &self,
        request: &InterlinkRequest,
    ) -> Result<Option<Vec<FaqEntry>>, BackendError> {
        self.record("interlink");
        self.interlink_requests.lock().unwrap().push(request.clone());
        self.interlinked.clone()
    }

    async fn related_links(&self, keyword: &str) -> Result<Vec<RelatedLink>, BackendError> {
        self.record(format!("related_links:{}", keyword));
        self.links.clone()
    }
}

/// In-memory cache without expiry
#[derive(Default)]
pub(crate) struct MapCache {
    pub entries: Mutex<HashMap<String, Value>>,
}

impl MapCache {
    pub fn with(self, key: &str, value: Value) -> Self {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

impl ResultCache for MapCache {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    fn age(&self, key: &str) -> Option<Duration> {
        self.contains(key).then_some(Duration::ZERO)
    }

    fn clear(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// Progress notifier that keeps everything it was told
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub stages: Mutex<Vec<(WorkflowStage, WorkflowStage)>>,
    pub statuses: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn visited(&self) -> Vec<WorkflowStage> {
        self.stages.lock().unwrap().iter().map(|(_, to)| *to).collect()
    }
}

impl WorkflowProgress for RecordingProgress {
    fn on_stage_change(&self, from: WorkflowStage, to: WorkflowStage) {
        self.stages.lock().unwrap().push((from, to));
    }

    fn on_status(&self, message: &str) {
        self.statuses.lock().unwrap().push(message.to_string());
    }

    fn on_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}
