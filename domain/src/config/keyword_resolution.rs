//! Keyword resolution strategy

use serde::{Deserialize, Serialize};

/// Where a page's target keywords come from.
///
/// The two sources are never merged: a configuration picks exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordResolution {
    /// Ask the backend `/api/match-keyword` endpoint for every CMS page
    #[default]
    MatchEndpoint,
    /// Look the page up in the locally loaded keyword index
    StaticIndex,
}

impl KeywordResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordResolution::MatchEndpoint => "match-endpoint",
            KeywordResolution::StaticIndex => "static-index",
        }
    }
}

impl std::fmt::Display for KeywordResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
