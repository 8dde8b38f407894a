//! Run Workflow use case
//!
//! The workflow controller: owns the [`WorkflowState`] of one page and
//! sequences keyword resolution, question aggregation, FAQ generation,
//! rephrasing and interlinking in response to a single "start" action.
//!
//! Stages run one after another on the caller's task. Content FAQs are
//! generated, rephrased and interlinked before the PAA set so status
//! narration stays deterministic.

use crate::config::WorkflowParams;
use crate::ports::faq_backend::{BackendError, FaqBackend};
use crate::ports::progress::WorkflowProgress;
use crate::ports::result_cache::ResultCache;
use crate::use_cases::aggregate_questions::QuestionAggregator;
use crate::use_cases::generate_faqs::{FaqGenerationError, FaqGenerator};
use crate::use_cases::interlink::Interlinker;
use crate::use_cases::load_keyword_index::{IndexOrigin, KeywordIndexLoader};
use crate::use_cases::rephrase::Rephraser;
use crate::use_cases::resolve_keywords::{KeywordResolver, ResolveKeywordsError};
use faqsmith_domain::content::require_content;
use faqsmith_domain::workflow::InvalidTransition;
use faqsmith_domain::{
    ContentSource, DomainError, FaqEntry, IssueKind, KeywordIndex, WorkflowStage, WorkflowState,
    WorkflowVariant,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that end a workflow run
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Missing selection, keyword or content; nothing was generated
    #[error(transparent)]
    BlockingInput(#[from] DomainError),

    /// The page is not in the keyword index
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PageUnavailable(String),

    /// A required backend call failed
    #[error("{stage} failed: {source}")]
    Upstream {
        stage: &'static str,
        source: BackendError,
    },

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
}

impl WorkflowError {
    /// Whether the run was refused before any generation was attempted
    pub fn is_blocking(&self) -> bool {
        matches!(self, WorkflowError::BlockingInput(_))
    }

    fn issue_kind(&self) -> IssueKind {
        match self {
            WorkflowError::BlockingInput(_) => IssueKind::BlockingInput,
            WorkflowError::NotFound(_) => IssueKind::NotFound,
            _ => IssueKind::Upstream,
        }
    }

    fn from_generation(stage: &'static str, err: FaqGenerationError) -> Self {
        match err {
            FaqGenerationError::Input(e) => WorkflowError::BlockingInput(e),
            FaqGenerationError::Backend(source) => WorkflowError::Upstream { stage, source },
        }
    }
}

impl From<ResolveKeywordsError> for WorkflowError {
    fn from(err: ResolveKeywordsError) -> Self {
        match err {
            ResolveKeywordsError::NotFound { message, .. } => WorkflowError::NotFound(message),
            ResolveKeywordsError::PageUnavailable(message) => {
                WorkflowError::PageUnavailable(message)
            }
            ResolveKeywordsError::MatchFailed(source) => WorkflowError::Upstream {
                stage: "Keyword match",
                source,
            },
            ResolveKeywordsError::PageFetch(source) => WorkflowError::Upstream {
                stage: "Page fetch",
                source,
            },
        }
    }
}

/// Forwards progress and remembers the latest status line
struct StatusRelay<'a> {
    inner: &'a dyn WorkflowProgress,
    last: Mutex<Option<String>>,
}

impl<'a> StatusRelay<'a> {
    fn new(inner: &'a dyn WorkflowProgress) -> Self {
        Self {
            inner,
            last: Mutex::new(None),
        }
    }

    fn take_last(&self) -> Option<String> {
        self.last.lock().ok().and_then(|mut last| last.take())
    }
}

impl WorkflowProgress for StatusRelay<'_> {
    fn on_stage_change(&self, from: WorkflowStage, to: WorkflowStage) {
        self.inner.on_stage_change(from, to);
    }

    fn on_status(&self, message: &str) {
        if let Ok(mut last) = self.last.lock() {
            *last = Some(message.to_string());
        }
        self.inner.on_status(message);
    }

    fn on_keyword_start(&self, index: usize, total: usize, keyword: &str) {
        self.inner.on_keyword_start(index, total, keyword);
    }

    fn on_warning(&self, message: &str) {
        self.inner.on_warning(message);
    }
}

/// Controller for one page's FAQ generation workflow
pub struct WorkflowController<B: FaqBackend + 'static> {
    backend: Arc<B>,
    cache: Arc<dyn ResultCache>,
    params: WorkflowParams,
    variant: WorkflowVariant,
    state: WorkflowState,
    keyword_index: Option<KeywordIndex>,
    /// Whether the current source's content and keywords are loaded
    resolved: bool,
}

impl<B: FaqBackend + 'static> WorkflowController<B> {
    pub fn new(
        backend: Arc<B>,
        cache: Arc<dyn ResultCache>,
        params: WorkflowParams,
        variant: WorkflowVariant,
    ) -> Self {
        Self {
            backend,
            cache,
            params,
            variant,
            state: WorkflowState::default(),
            keyword_index: None,
            resolved: false,
        }
    }

    pub fn with_keyword_index(mut self, index: KeywordIndex) -> Self {
        self.keyword_index = Some(index);
        self
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn into_state(self) -> WorkflowState {
        self.state
    }

    pub fn variant(&self) -> WorkflowVariant {
        self.variant
    }

    pub fn keyword_index(&self) -> Option<&KeywordIndex> {
        self.keyword_index.as_ref()
    }

    /// Load the keyword index if none is set. Failures leave it unset.
    pub async fn load_keyword_index(&mut self) -> Option<IndexOrigin> {
        if self.keyword_index.is_some() {
            return None;
        }
        let loader = KeywordIndexLoader::new(self.backend.clone(), self.cache.clone());
        match loader.load().await {
            Ok(Some(loaded)) => {
                self.keyword_index = Some(loaded.index);
                Some(loaded.origin)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to load keyword index: {}", e);
                None
            }
        }
    }

    /// Select a new source. Discards everything from the previous one.
    pub fn select_source(&mut self, source: ContentSource, progress: &dyn WorkflowProgress) {
        let from = self.state.stage;
        debug!("Selecting source {}", source.identity());
        self.state = WorkflowState::for_source(source);
        self.resolved = false;
        progress.on_stage_change(from, WorkflowStage::SelectingSource);
    }

    /// Resolve the selected source's content and keywords.
    ///
    /// A page missing from the keyword index halts with a not-found issue;
    /// its content is kept for display. Calling it again before the run
    /// starts is a no-op.
    pub async fn resolve(&mut self, progress: &dyn WorkflowProgress) -> Result<(), WorkflowError> {
        let Some(source) = self.state.source.clone() else {
            return Err(self.block(DomainError::MissingSource));
        };
        if self.resolved && self.state.stage == WorkflowStage::ResolvingKeywords {
            debug!("Source {} already resolved", source.identity());
            return Ok(());
        }

        self.enter(WorkflowStage::ResolvingKeywords, progress)?;

        let resolver = KeywordResolver::new(
            self.backend.clone(),
            self.cache.clone(),
            self.params.keyword_resolution,
        );

        match resolver.resolve(&source, self.keyword_index.as_ref()).await {
            Ok(page) => {
                self.state.content = Some(page.content);
                self.state.keywords = page.keywords;
                self.resolved = true;
                self.narrate(&page.status, progress);
                Ok(())
            }
            Err(ResolveKeywordsError::NotFound { message, content }) => {
                self.state.content = Some(*content);
                self.resolved = true;
                Err(self.halt(WorkflowError::NotFound(message), progress))
            }
            Err(e) => Err(self.halt(e.into(), progress)),
        }
    }

    /// Run the workflow over the selected source.
    ///
    /// Missing selection or keywords fail without changing stage. Optional
    /// stages (per-keyword questions, rephrasing, interlinking) never fail
    /// the run.
    pub async fn start(
        &mut self,
        progress: &dyn WorkflowProgress,
    ) -> Result<&WorkflowState, WorkflowError> {
        if self.state.source.is_none() {
            return Err(self.block(DomainError::MissingSource));
        }

        if !self.resolved {
            self.resolve(progress).await?;
        }

        if !self.state.has_keywords() {
            return Err(self.block(DomainError::MissingKeyword));
        }

        let content = self
            .state
            .content
            .as_ref()
            .map(|c| c.text.clone())
            .unwrap_or_default();
        if let Err(e) = require_content(&content, self.params.min_content_chars) {
            return Err(self.halt(e.into(), progress));
        }

        let keywords = self.state.keywords.clone();
        let keyword = keywords.lead().trim().to_string();
        info!(
            "Starting FAQ generation for \"{}\" ({} keywords)",
            keyword,
            keywords.all().len()
        );

        self.state.clear_results();
        self.enter(WorkflowStage::AggregatingQuestions, progress)?;

        let relay = StatusRelay::new(progress);
        let aggregator = QuestionAggregator::new(self.backend.clone(), self.params.clone());
        let aggregated = aggregator.aggregate(&keywords, &content, &relay).await;
        if let Some(last) = relay.take_last() {
            self.state.status = last;
        }
        self.state.questions = aggregated.questions;

        // Content-derived FAQs
        self.enter(WorkflowStage::GeneratingFaqs, progress)?;
        self.narrate("Generating content-based FAQs...", progress);

        let generator = FaqGenerator::new(self.backend.clone(), self.params.min_content_chars);
        let index = self.keyword_index.clone();
        match generator
            .generate_content_faqs(&keyword, &content, index.as_ref(), self.variant)
            .await
        {
            Ok(faqs) => self.state.content_faqs = faqs,
            Err(e) => {
                let err = WorkflowError::from_generation("Content FAQ generation", e);
                return Err(self.halt(err, progress));
            }
        }

        if !self.state.content_faqs.is_empty() {
            self.enter(WorkflowStage::Rephrasing, progress)?;
            self.narrate("Rephrasing content FAQs...", progress);

            let rephrased = Rephraser::new(self.backend.clone())
                .rephrase(&self.state.content_faqs, &content, index.as_ref())
                .await;
            if rephrased.is_empty() {
                progress.on_warning("Rephrasing unavailable, showing original FAQs");
            }
            self.state.rephrased_faqs = rephrased;
        }

        if self.variant.interlinks()
            && !self.state.rephrased_faqs.is_empty()
            && index.as_ref().is_some_and(|i| !i.is_empty())
        {
            self.enter(WorkflowStage::Interlinking, progress)?;
            self.narrate("Interlinking FAQs...", progress);

            let outcome = Interlinker::new(self.backend.clone())
                .interlink(self.rephrased_primary_versions(), index.as_ref())
                .await;
            if outcome.applied {
                self.state.content_faqs = outcome.faqs;
            }
        }

        // Search-derived FAQs
        if !self.state.questions.is_empty() {
            if self.state.stage != WorkflowStage::GeneratingFaqs {
                self.enter(WorkflowStage::GeneratingFaqs, progress)?;
            }
            self.narrate("Generating PAA + Google FAQs from questions...", progress);

            match generator
                .generate_paa_faqs(&keyword, &content, &self.state.questions, index.as_ref())
                .await
            {
                Ok(faqs) => self.state.paa_faqs = faqs,
                Err(e) => {
                    let err = WorkflowError::from_generation("PAA FAQ generation", e);
                    return Err(self.halt(err, progress));
                }
            }
        } else {
            debug!("No questions, skipping PAA generation");
        }

        self.enter(WorkflowStage::Done, progress)?;
        let summary = format!(
            "FAQ Generation Complete! ({} content FAQs, {} PAA FAQs)",
            self.state.content_faqs.len(),
            self.state.paa_faqs.len()
        );
        self.narrate(&summary, progress);
        info!("{}", summary);

        Ok(&self.state)
    }

    /// First rephrasing of each content FAQ, or the FAQ itself when that
    /// entry has none
    fn rephrased_primary_versions(&self) -> Vec<FaqEntry> {
        self.state
            .content_with_rephrasings()
            .into_iter()
            .map(|(faq, rephrased)| {
                rephrased
                    .and_then(|r| r.version_1())
                    .cloned()
                    .map(FaqEntry::from)
                    .unwrap_or_else(|| faq.clone())
            })
            .collect()
    }

    fn enter(
        &mut self,
        next: WorkflowStage,
        progress: &dyn WorkflowProgress,
    ) -> Result<(), WorkflowError> {
        let from = self.state.stage;
        self.state.advance(next)?;
        progress.on_stage_change(from, next);
        Ok(())
    }

    fn narrate(&mut self, message: &str, progress: &dyn WorkflowProgress) {
        self.state.status = message.to_string();
        progress.on_status(message);
    }

    /// Record a blocking input error; the stage does not change
    fn block(&mut self, err: DomainError) -> WorkflowError {
        warn!("{}", err);
        self.state.set_error(IssueKind::BlockingInput, err.to_string());
        WorkflowError::BlockingInput(err)
    }

    /// Record the error and move to the halted stage
    fn halt(&mut self, err: WorkflowError, progress: &dyn WorkflowProgress) -> WorkflowError {
        error!("Workflow halted: {}", err);
        self.state.set_error(err.issue_kind(), err.to_string());
        let from = self.state.stage;
        if self.state.advance(WorkflowStage::ErrorHalted).is_ok() {
            progress.on_stage_change(from, WorkflowStage::ErrorHalted);
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{
        MapCache, MockBackend, RecordingProgress, upstream_error,
    };
    use faqsmith_domain::{FaqVersion, MatchOutcome, PageDetail, RephrasedFaq};
    use serde_json::json;
    use std::time::Duration;

    fn params() -> WorkflowParams {
        WorkflowParams::default().with_keyword_pause(Duration::ZERO)
    }

    fn crm_page() -> PageDetail {
        PageDetail {
            content: Some("CRM tools compared in depth. ".repeat(10)),
            slug: Some("best-crm-tools".into()),
            ..Default::default()
        }
    }

    fn crm_match() -> MatchOutcome {
        MatchOutcome::decode(&json!({
            "keywords": ["best crm", "top crm software"],
            "keyword": "best crm"
        }))
    }

    fn version(q: &str) -> FaqVersion {
        FaqVersion {
            question: q.into(),
            answer: format!("{} answer", q),
        }
    }

    fn content_faqs() -> Vec<FaqEntry> {
        vec![
            FaqEntry::new("What is a CRM?", "<p>A customer database.</p>"),
            FaqEntry::new("Why use a CRM?", "<p>To track deals.</p>"),
        ]
    }

    fn rephrasings() -> Vec<RephrasedFaq> {
        vec![
            RephrasedFaq::new(version("CRM, defined"), version("CRM explained")),
            RephrasedFaq::new(version("CRM benefits"), version("Reasons for a CRM")),
        ]
    }

    /// Backend for the CMS page `seo-pages/42`
    fn crm_backend() -> MockBackend {
        MockBackend {
            match_outcome: Ok(crm_match()),
            content_faqs: Ok(content_faqs()),
            paa_faqs: Ok(vec![FaqEntry::new("Which CRM is best?", "<p>It depends.</p>")]),
            rephrased: Ok(Some(rephrasings())),
            ..Default::default()
        }
        .with_page("42", crm_page())
        .with_serp(
            "best crm",
            &["What is the best CRM?", "Best CRM for startups", "How much does a CRM cost?"],
        )
        .with_serp(
            "top crm software",
            &["What is the best CRM?", "Top CRM software list", "Which CRM software is top rated?"],
        )
    }

    fn controller(
        backend: MockBackend,
        variant: WorkflowVariant,
    ) -> (WorkflowController<MockBackend>, Arc<MockBackend>) {
        let backend = Arc::new(backend);
        let controller = WorkflowController::new(
            backend.clone(),
            Arc::new(MapCache::default()),
            params(),
            variant,
        );
        (controller, backend)
    }

    #[tokio::test]
    async fn test_start_without_source_is_blocking_and_silent() {
        let (mut controller, backend) = controller(crm_backend(), WorkflowVariant::ExistingPage);

        let err = controller.start(&NoProgress).await.unwrap_err();

        assert!(err.is_blocking());
        assert!(backend.calls().is_empty());
        assert_eq!(controller.state().stage, WorkflowStage::Idle);
        let issue = controller.state().error.clone().unwrap();
        assert_eq!(issue.kind, IssueKind::BlockingInput);
        assert_eq!(issue.message, DomainError::MissingSource.to_string());
    }

    #[tokio::test]
    async fn test_end_to_end_existing_page() {
        let (mut controller, backend) = controller(crm_backend(), WorkflowVariant::ExistingPage);
        let progress = RecordingProgress::default();
        controller.select_source(ContentSource::cms("seo-pages", "42"), &progress);

        let state = controller.start(&progress).await.unwrap().clone();

        assert_eq!(state.keywords.primary(), "best crm");
        assert_eq!(state.keywords.all(), ["best crm", "top crm software"]);
        assert_eq!(
            state.questions,
            vec![
                "What is the best CRM?",
                "How much does a CRM cost?",
                "Which CRM software is top rated?"
            ]
        );
        assert!(state.questions.len() <= 4);
        assert_eq!(state.content_faqs, content_faqs());
        assert_eq!(state.rephrased_faqs.len(), state.content_faqs.len());
        assert_eq!(state.paa_faqs.len(), 1);
        assert_eq!(state.stage, WorkflowStage::Done);
        assert!(state.error.is_none());

        assert_eq!(
            backend.calls(),
            vec![
                "fetch_page:seo-pages/42",
                "match_keyword",
                "serp:best crm",
                "serp:top crm software",
                "generate_faqs:content",
                "rephrase",
                "generate_faqs:paa",
            ]
        );
        assert_eq!(backend.match_requests.lock().unwrap()[0].category, "SEO Landing Pages");

        let generate = backend.generate_requests.lock().unwrap().clone();
        assert_eq!(generate.len(), 2);
        assert_eq!(generate[0].keyword, "best crm");
        assert_eq!(generate[1].serp_questions, state.questions);

        let rephrase = backend.rephrase_requests.lock().unwrap().clone();
        assert_eq!(rephrase.len(), 1);
        assert_eq!(rephrase[0].faqs, content_faqs());
    }

    #[tokio::test]
    async fn test_status_narration_order() {
        let (mut controller, _) = controller(crm_backend(), WorkflowVariant::ExistingPage);
        let progress = RecordingProgress::default();
        controller.select_source(ContentSource::cms("seo-pages", "42"), &progress);

        controller.start(&progress).await.unwrap();

        let statuses = progress.statuses();
        let tail: Vec<&str> = statuses.iter().skip(1).map(String::as_str).collect();
        assert_eq!(
            tail,
            vec![
                "[1/2] Fetching questions for: \"best crm\"...",
                "[2/2] Fetching questions for: \"top crm software\"...",
                "Generating content-based FAQs...",
                "Rephrasing content FAQs...",
                "Generating PAA + Google FAQs from questions...",
                "FAQ Generation Complete! (2 content FAQs, 1 PAA FAQs)",
            ]
        );
        assert_eq!(
            controller.state().status,
            "FAQ Generation Complete! (2 content FAQs, 1 PAA FAQs)"
        );
        assert_eq!(
            progress.visited(),
            vec![
                WorkflowStage::SelectingSource,
                WorkflowStage::ResolvingKeywords,
                WorkflowStage::AggregatingQuestions,
                WorkflowStage::GeneratingFaqs,
                WorkflowStage::Rephrasing,
                WorkflowStage::GeneratingFaqs,
                WorkflowStage::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_rephrase_failure_still_completes() {
        let backend = MockBackend {
            rephrased: Err(upstream_error()),
            ..crm_backend()
        };
        let (mut controller, _) = controller(backend, WorkflowVariant::ExistingPage);
        controller.select_source(ContentSource::cms("seo-pages", "42"), &NoProgress);

        let state = controller.start(&NoProgress).await.unwrap();

        assert!(state.rephrased_faqs.is_empty());
        assert_eq!(state.stage, WorkflowStage::Done);
        assert!(state.status.starts_with("FAQ Generation Complete!"));
    }

    #[tokio::test]
    async fn test_missing_keyword_keeps_stage() {
        let backend = MockBackend {
            match_outcome: Ok(MatchOutcome::NoMatch),
            ..crm_backend()
        };
        let (mut controller, backend) = controller(backend, WorkflowVariant::ExistingPage);
        controller.select_source(ContentSource::cms("seo-pages", "42"), &NoProgress);
        controller.resolve(&NoProgress).await.unwrap();
        let before = controller.state().stage;

        let err = controller.start(&NoProgress).await.unwrap_err();

        assert!(matches!(err, WorkflowError::BlockingInput(DomainError::MissingKeyword)));
        assert_eq!(controller.state().stage, before);
        assert_eq!(backend.count("serp"), 0);
        assert_eq!(backend.count("generate"), 0);
    }

    #[tokio::test]
    async fn test_not_found_halts_but_keeps_content() {
        let backend = MockBackend {
            match_outcome: Ok(MatchOutcome::not_found(None)),
            ..crm_backend()
        };
        let (mut controller, backend) = controller(backend, WorkflowVariant::ExistingPage);
        controller.select_source(ContentSource::cms("seo-pages", "42"), &NoProgress);

        let err = controller.start(&NoProgress).await.unwrap_err();

        assert!(matches!(err, WorkflowError::NotFound(_)));
        let state = controller.state();
        assert_eq!(state.stage, WorkflowStage::ErrorHalted);
        assert_eq!(state.error.as_ref().unwrap().kind, IssueKind::NotFound);
        assert!(state.content.is_some());
        assert_eq!(backend.count("serp"), 0);
    }

    #[tokio::test]
    async fn test_short_content_halts_before_questions() {
        let backend = MockBackend::default();
        let (mut controller, backend) = controller(backend, WorkflowVariant::NewPage);
        controller.select_source(
            ContentSource::pasted("Too short to use.").with_keyword("crm"),
            &NoProgress,
        );

        let err = controller.start(&NoProgress).await.unwrap_err();

        assert!(matches!(
            err,
            WorkflowError::BlockingInput(DomainError::InsufficientContent { .. })
        ));
        assert_eq!(controller.state().stage, WorkflowStage::ErrorHalted);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_content_generation_failure_halts() {
        let backend = MockBackend {
            content_faqs: Err(upstream_error()),
            ..crm_backend()
        };
        let (mut controller, backend) = controller(backend, WorkflowVariant::ExistingPage);
        controller.select_source(ContentSource::cms("seo-pages", "42"), &NoProgress);

        let err = controller.start(&NoProgress).await.unwrap_err();

        assert!(matches!(err, WorkflowError::Upstream { .. }));
        let state = controller.state();
        assert_eq!(state.stage, WorkflowStage::ErrorHalted);
        assert_eq!(
            state.error.as_ref().unwrap().message,
            "Content FAQ generation failed: API Error: 500 - upstream exploded"
        );
        assert_eq!(backend.count("rephrase"), 0);
        assert_eq!(backend.count("generate_faqs:paa"), 0);
    }

    #[tokio::test]
    async fn test_paa_failure_keeps_content_results() {
        let backend = MockBackend {
            paa_faqs: Err(upstream_error()),
            ..crm_backend()
        };
        let (mut controller, _) = controller(backend, WorkflowVariant::ExistingPage);
        controller.select_source(ContentSource::cms("seo-pages", "42"), &NoProgress);

        assert!(controller.start(&NoProgress).await.is_err());

        let state = controller.state();
        assert_eq!(state.stage, WorkflowStage::ErrorHalted);
        assert_eq!(state.content_faqs.len(), 2);
        assert_eq!(state.rephrased_faqs.len(), 2);
    }

    #[tokio::test]
    async fn test_no_questions_skips_paa() {
        let backend = MockBackend {
            match_outcome: Ok(crm_match()),
            content_faqs: Ok(content_faqs()),
            ..Default::default()
        }
        .with_page("42", crm_page());
        let (mut controller, backend) = controller(backend, WorkflowVariant::ExistingPage);
        controller.select_source(ContentSource::cms("seo-pages", "42"), &NoProgress);

        let state = controller.start(&NoProgress).await.unwrap();

        assert!(state.questions.is_empty());
        assert!(state.paa_faqs.is_empty());
        assert_eq!(backend.count("fallback_questions"), 1);
        assert_eq!(backend.count("generate_faqs:paa"), 0);
    }

    #[tokio::test]
    async fn test_new_page_interlinks_first_rephrasings() {
        let linked = vec![
            FaqEntry::new("CRM, defined", "A <a href=\"/crm\">CRM</a>.").normalized(),
            FaqEntry::new("CRM benefits", "Deals.").normalized(),
        ];
        let backend = MockBackend {
            content_faqs: Ok(content_faqs()),
            rephrased: Ok(Some(rephrasings())),
            interlinked: Ok(Some(linked.clone())),
            ..Default::default()
        };
        let index = KeywordIndex::from_value(json!({
            "Features": [{"url": "/crm", "keywords": ["crm"]}]
        }))
        .unwrap();
        let (controller, backend) = controller(backend, WorkflowVariant::NewPage);
        let mut controller = controller.with_keyword_index(index);
        controller.select_source(
            ContentSource::pasted("A CRM keeps track of every customer conversation. ".repeat(4))
                .with_keyword("crm"),
            &NoProgress,
        );

        let state = controller.start(&NoProgress).await.unwrap();

        assert_eq!(state.content_faqs, linked);
        let sent = backend.interlink_requests.lock().unwrap()[0].faqs.clone();
        assert_eq!(sent[0].question, "CRM, defined");
        assert_eq!(sent[1].question, "CRM benefits");
        assert_eq!(backend.count("generate_content_faqs"), 1);
    }

    #[tokio::test]
    async fn test_new_page_without_index_skips_interlinking() {
        let backend = MockBackend {
            content_faqs: Ok(content_faqs()),
            rephrased: Ok(Some(rephrasings())),
            ..Default::default()
        };
        let (mut controller, backend) = controller(backend, WorkflowVariant::NewPage);
        controller.select_source(
            ContentSource::pasted("x".repeat(150)).with_keyword("crm"),
            &NoProgress,
        );

        let state = controller.start(&NoProgress).await.unwrap();

        assert_eq!(state.stage, WorkflowStage::Done);
        assert_eq!(backend.count("interlink"), 0);
    }

    #[tokio::test]
    async fn test_select_source_resets_results() {
        let (mut controller, _) = controller(crm_backend(), WorkflowVariant::ExistingPage);
        controller.select_source(ContentSource::cms("seo-pages", "42"), &NoProgress);
        controller.start(&NoProgress).await.unwrap();

        controller.select_source(ContentSource::cms("seo-pages", "43"), &NoProgress);

        let state = controller.state();
        assert_eq!(state.stage, WorkflowStage::SelectingSource);
        assert!(state.content_faqs.is_empty());
        assert!(state.questions.is_empty());
        assert!(!state.has_keywords());
    }

    #[tokio::test]
    async fn test_rerun_reuses_resolution() {
        let (mut controller, backend) = controller(crm_backend(), WorkflowVariant::ExistingPage);
        controller.select_source(ContentSource::cms("seo-pages", "42"), &NoProgress);
        controller.start(&NoProgress).await.unwrap();

        let state = controller.start(&NoProgress).await.unwrap();

        assert_eq!(state.stage, WorkflowStage::Done);
        assert_eq!(backend.count("fetch_page"), 1);
        assert_eq!(backend.count("generate_faqs:content"), 2);
    }

    #[tokio::test]
    async fn test_repeated_resolve_is_noop() {
        let (mut controller, backend) = controller(crm_backend(), WorkflowVariant::ExistingPage);
        let progress = RecordingProgress::default();
        controller.select_source(ContentSource::cms("seo-pages", "42"), &progress);

        controller.resolve(&progress).await.unwrap();
        controller.resolve(&progress).await.unwrap();

        let state = controller.state();
        assert_eq!(state.stage, WorkflowStage::ResolvingKeywords);
        assert!(state.error.is_none());
        assert_eq!(state.keywords.primary(), "best crm");
        assert_eq!(backend.count("fetch_page"), 1);
        assert_eq!(backend.count("match_keyword"), 1);
        assert_eq!(
            progress.visited(),
            vec![WorkflowStage::SelectingSource, WorkflowStage::ResolvingKeywords]
        );

        let state = controller.start(&progress).await.unwrap();
        assert_eq!(state.stage, WorkflowStage::Done);
        assert_eq!(backend.count("fetch_page"), 1);
    }
}
