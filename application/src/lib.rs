//! Application layer for faqsmith
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::WorkflowParams;
pub use ports::{
    faq_backend::{
        BackendError, ContentFaqsRequest, FaqBackend, GenerateFaqsRequest, InterlinkRequest,
        MatchKeywordRequest, RephraseRequest,
    },
    progress::{NoProgress, WorkflowProgress},
    result_cache::{Clock, NoCache, ResultCache, ResultCacheExt},
};
pub use use_cases::aggregate_questions::{AggregatedQuestions, QuestionAggregator};
pub use use_cases::browse_pages::{BrowsePagesError, PageBrowser, PageListing};
pub use use_cases::generate_faqs::{FaqGenerationError, FaqGenerator};
pub use use_cases::interlink::{InterlinkOutcome, Interlinker};
pub use use_cases::load_keyword_index::{IndexOrigin, KeywordIndexLoader, LoadedIndex};
pub use use_cases::rephrase::Rephraser;
pub use use_cases::resolve_keywords::{KeywordResolver, ResolveKeywordsError, ResolvedPage};
pub use use_cases::run_workflow::{WorkflowController, WorkflowError};
