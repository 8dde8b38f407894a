//! Presentation-level configuration
//!
//! Configuration for output formatting and progress display.

use faqsmith_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format; `None` falls back to `full`
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Resolve the effective format, a CLI flag taking precedence
    pub fn resolve_format(&self, cli_override: Option<OutputFormat>) -> OutputFormat {
        cli_override.or(self.format).unwrap_or_default()
    }

    /// Apply the color setting to all terminal output
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
