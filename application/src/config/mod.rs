//! Application-level configuration.
//!
//! - [`WorkflowParams`]: limits and pacing of the FAQ generation workflow

pub mod workflow_params;

pub use workflow_params::WorkflowParams;
