//! Configuration file loading for faqsmith
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./faqsmith.toml` or `./.faqsmith.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/faqsmith/config.toml`
//! 4. Fallback: `~/.config/faqsmith/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileBackendConfig, FileCacheConfig, FileConfig,
    FileOutputConfig, FileWorkflowConfig,
};
pub use loader::ConfigLoader;
