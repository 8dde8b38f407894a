//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod keyword_resolution;
mod output_format;

pub use keyword_resolution::KeywordResolution;
pub use output_format::OutputFormat;
