//! `[output]` section: result format and terminal styling

use faqsmith_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw `[output]` settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Result format; `full` when unset
    pub format: Option<OutputFormat>,
    /// Colored terminal output
    pub color: bool,
    /// Progress spinner / status lines on stderr
    pub progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            progress: true,
        }
    }
}

impl FileOutputConfig {
    /// Whether to color output. A non-empty `NO_COLOR` always wins.
    pub fn color_enabled(&self) -> bool {
        self.color && !std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }
}
