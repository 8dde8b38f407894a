//! Domain error types

use thiserror::Error;

/// Blocking input errors.
///
/// Raised before generation is attempted; the workflow does not advance
/// and no network call is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please select a collection and page first.")]
    MissingSource,

    #[error("No keywords found. Please select a page with keywords in keywords.json.")]
    MissingKeyword,

    #[error("Content not available. Please select a page first. ({length} of {required} characters)")]
    InsufficientContent { length: usize, required: usize },
}

impl DomainError {
    /// Check if this error is about the content body rather than the selection
    pub fn is_content_error(&self) -> bool {
        matches!(self, DomainError::InsufficientContent { .. })
    }
}
