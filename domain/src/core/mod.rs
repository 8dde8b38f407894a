//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: blocking input errors raised before any network call
//! - [`string`]: character-safe excerpt helpers

pub mod error;
pub mod string;
