//! Infrastructure layer for faqsmith
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use cache::{FileResultCache, MemoryResultCache, SystemClock};
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileCacheConfig, FileConfig,
    FileOutputConfig, FileWorkflowConfig,
};
pub use http::{HttpBackendConfig, HttpFaqBackend};
