//! HTTP adapter for the FAQ backend
//!
//! - [`HttpFaqBackend`]: [`FaqBackend`](faqsmith_application::FaqBackend) over reqwest

mod backend;

pub use backend::{HttpBackendConfig, HttpFaqBackend};
