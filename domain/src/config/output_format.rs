//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for workflow results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full formatted output with questions, both FAQ sets and rephrasings
    #[default]
    Full,
    /// Copy-ready `Q: ... / A: ...` blocks
    Plain,
    /// JSON output
    Json,
}
