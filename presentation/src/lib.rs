//! Presentation layer for faqsmith
//!
//! This crate contains CLI definitions, output formatters and progress
//! reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{
    CacheCommand, Cli, Command, ExistingArgs, KeywordsCommand, NewArgs, OutputFormat,
};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::html::html_to_text;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
