//! Output formatter trait

use faqsmith_domain::WorkflowState;

/// Trait for formatting workflow results
pub trait OutputFormatter {
    /// Format every section, rephrasings included
    fn format(&self, state: &WorkflowState) -> String;

    /// Format as JSON
    fn format_json(&self, state: &WorkflowState) -> String;

    /// Copy-ready `Q:`/`A:` blocks only
    fn format_plain(&self, state: &WorkflowState) -> String;
}
