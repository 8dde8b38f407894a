//! Workflow stages and transition table

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stage of a FAQ generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    #[default]
    Idle,
    SelectingSource,
    ResolvingKeywords,
    AggregatingQuestions,
    GeneratingFaqs,
    Rephrasing,
    Interlinking,
    Done,
    ErrorHalted,
}

/// Attempted a transition the table does not allow
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid workflow transition: {from} -> {to}")]
pub struct InvalidTransition {
    pub from: WorkflowStage,
    pub to: WorkflowStage,
}

impl WorkflowStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Idle => "idle",
            WorkflowStage::SelectingSource => "selecting_source",
            WorkflowStage::ResolvingKeywords => "resolving_keywords",
            WorkflowStage::AggregatingQuestions => "aggregating_questions",
            WorkflowStage::GeneratingFaqs => "generating_faqs",
            WorkflowStage::Rephrasing => "rephrasing",
            WorkflowStage::Interlinking => "interlinking",
            WorkflowStage::Done => "done",
            WorkflowStage::ErrorHalted => "error_halted",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkflowStage::Idle => "Idle",
            WorkflowStage::SelectingSource => "Selecting Source",
            WorkflowStage::ResolvingKeywords => "Resolving Keywords",
            WorkflowStage::AggregatingQuestions => "Aggregating Questions",
            WorkflowStage::GeneratingFaqs => "Generating FAQs",
            WorkflowStage::Rephrasing => "Rephrasing",
            WorkflowStage::Interlinking => "Interlinking",
            WorkflowStage::Done => "Done",
            WorkflowStage::ErrorHalted => "Halted",
        }
    }

    /// Whether a run has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowStage::Done | WorkflowStage::ErrorHalted)
    }

    /// Transition table.
    ///
    /// Selecting a new source is allowed from every stage (hard reset).
    /// `GeneratingFaqs` is re-entered after `Rephrasing`/`Interlinking` for
    /// the search-derived set, which is generated after the content path.
    pub fn can_transition_to(&self, next: WorkflowStage) -> bool {
        use WorkflowStage::*;

        if next == SelectingSource {
            return true;
        }
        // Any started run may halt
        if next == ErrorHalted {
            return *self != Idle;
        }

        matches!(
            (self, next),
            (SelectingSource, ResolvingKeywords)
                | (ResolvingKeywords, AggregatingQuestions)
                | (AggregatingQuestions, GeneratingFaqs)
                | (GeneratingFaqs, Rephrasing)
                | (GeneratingFaqs, Done)
                | (Rephrasing, Interlinking)
                | (Rephrasing, GeneratingFaqs)
                | (Rephrasing, Done)
                | (Interlinking, GeneratingFaqs)
                | (Interlinking, Done)
                // A finished run over the same source may be restarted
                | (Done, ResolvingKeywords)
                | (ErrorHalted, ResolvingKeywords)
                | (Done, AggregatingQuestions)
                | (ErrorHalted, AggregatingQuestions)
        )
    }

    /// Checked transition
    pub fn transition(self, next: WorkflowStage) -> Result<WorkflowStage, InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
