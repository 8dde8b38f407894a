//! Domain layer for faqsmith
//!
//! This crate contains the core rules and value objects of the FAQ
//! generation workflow. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Sources and keywords
//!
//! A [`ContentSource`] (CMS page or pasted text) resolves to body text and a
//! [`KeywordSet`]: the primary keyword plus every candidate keyword, in
//! relevance order.
//!
//! ## Questions and FAQs
//!
//! Search questions for each keyword are filtered to genuine questions,
//! de-duplicated and capped ([`QuestionSet`]). Two FAQ sets are produced from
//! the same content: content-derived and search-derived ("People Also Ask").
//!
//! ## Workflow
//!
//! [`WorkflowStage`] is the authoritative transition table and
//! [`WorkflowState`] the single record a run mutates.

pub mod cache;
pub mod config;
pub mod content;
pub mod core;
pub mod faq;
pub mod keyword;
pub mod question;
pub mod response;
pub mod workflow;

// Re-export commonly used types
pub use cache::{CACHE_VALIDITY, CacheEntry};
pub use config::{KeywordResolution, OutputFormat};
pub use content::{CmsPage, ContentSource, PageDetail, ResolvedContent};
pub use core::error::DomainError;
pub use faq::{FaqEntry, FaqVersion, RelatedLink, RephrasedFaq, RephrasedVersions};
pub use keyword::{KeywordIndex, KeywordSet, MatchOutcome};
pub use question::{QuestionSet, filter_questions, is_question};
pub use workflow::{IssueKind, WorkflowIssue, WorkflowStage, WorkflowState, WorkflowVariant};
