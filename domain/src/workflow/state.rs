//! Workflow state record

use super::stage::{InvalidTransition, WorkflowStage};
use crate::content::{ContentSource, ResolvedContent};
use crate::faq::{FaqEntry, RephrasedFaq};
use crate::keyword::KeywordSet;
use serde::{Deserialize, Serialize};

/// Which page workflow is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowVariant {
    /// An existing CMS page: content FAQs via the shared generation endpoint,
    /// no interlinking
    #[default]
    ExistingPage,
    /// New, pasted content: content FAQs via the dedicated endpoint, then
    /// interlinking when a keyword index is available
    NewPage,
}

impl WorkflowVariant {
    pub fn interlinks(&self) -> bool {
        matches!(self, WorkflowVariant::NewPage)
    }

    /// Whether content FAQs come from the dedicated content endpoint
    pub fn uses_content_endpoint(&self) -> bool {
        matches!(self, WorkflowVariant::NewPage)
    }
}

/// Category of the single user-visible error a run may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Missing selection, keyword or content; generation was not attempted
    BlockingInput,
    /// The page is not in the keyword index; dismissable
    NotFound,
    /// A required backend call failed
    Upstream,
}

/// The user-visible error of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowIssue {
    pub kind: IssueKind,
    pub message: String,
}

/// The single mutable record owned by the workflow controller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub stage: WorkflowStage,
    /// Latest status narration
    pub status: String,
    pub error: Option<WorkflowIssue>,
    pub source: Option<ContentSource>,
    pub content: Option<ResolvedContent>,
    pub keywords: KeywordSet,
    pub questions: Vec<String>,
    pub content_faqs: Vec<FaqEntry>,
    pub paa_faqs: Vec<FaqEntry>,
    pub rephrased_faqs: Vec<RephrasedFaq>,
}

impl WorkflowState {
    /// Fresh state for a newly selected source; everything else is discarded
    pub fn for_source(source: ContentSource) -> Self {
        Self {
            stage: WorkflowStage::SelectingSource,
            source: Some(source),
            ..Default::default()
        }
    }

    /// Clear the error and the four result sequences ahead of a run
    pub fn clear_results(&mut self) {
        self.error = None;
        self.questions.clear();
        self.content_faqs.clear();
        self.paa_faqs.clear();
        self.rephrased_faqs.clear();
    }

    /// Move to `next` if the transition table allows it
    pub fn advance(&mut self, next: WorkflowStage) -> Result<(), InvalidTransition> {
        self.stage = self.stage.transition(next)?;
        Ok(())
    }

    /// Record the run's error; replaces any earlier one
    pub fn set_error(&mut self, kind: IssueKind, message: impl Into<String>) {
        self.error = Some(WorkflowIssue {
            kind,
            message: message.into(),
        });
    }

    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// Pair each content FAQ with its rephrasing, when rephrasing is present
    pub fn content_with_rephrasings(&self) -> Vec<(&FaqEntry, Option<&RephrasedFaq>)> {
        self.content_faqs
            .iter()
            .enumerate()
            .map(|(i, faq)| (faq, self.rephrased_faqs.get(i)))
            .collect()
    }
}
