//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod aggregate_questions;
pub mod browse_pages;
pub mod generate_faqs;
pub mod interlink;
pub mod load_keyword_index;
pub mod rephrase;
pub mod resolve_keywords;
pub mod run_workflow;

#[cfg(test)]
pub(crate) mod test_support;
