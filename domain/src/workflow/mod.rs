//! Workflow state machine
//!
//! - [`stage::WorkflowStage`]: the stages and their transition table
//! - [`state::WorkflowState`]: the single record the controller owns

pub mod stage;
pub mod state;

pub use stage::{InvalidTransition, WorkflowStage};
pub use state::{IssueKind, WorkflowIssue, WorkflowState, WorkflowVariant};
