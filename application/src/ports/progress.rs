//! Progress notification port
//!
//! Defines the interface for reporting progress during a FAQ generation run.
//! The core never renders anything itself; a presentation layer subscribes
//! by implementing this trait.

use faqsmith_domain::WorkflowStage;

/// Callback for progress updates during a workflow run
pub trait WorkflowProgress: Send + Sync {
    /// Called on every stage transition
    fn on_stage_change(&self, from: WorkflowStage, to: WorkflowStage);

    /// Called with each status narration line
    fn on_status(&self, message: &str);

    /// Called before the question fetch for one keyword (1-based index)
    fn on_keyword_start(&self, _index: usize, _total: usize, _keyword: &str) {}

    /// Called when an optional step failed and was skipped
    fn on_warning(&self, _message: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl WorkflowProgress for NoProgress {
    fn on_stage_change(&self, _from: WorkflowStage, _to: WorkflowStage) {}
    fn on_status(&self, _message: &str) {}
}
