//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod faq_backend;
pub mod progress;
pub mod result_cache;
