//! Keyword-match endpoint response decoding

use super::set::KeywordSet;
use crate::core::string::is_blank;
use serde_json::Value;

/// Message shown when the backend reports the page is not in the index
/// without explaining why
pub const NOT_FOUND_MESSAGE: &str = "No keywords found for this page in keywords.json. \
Please add this page to keywords.json or fetch keywords from Strapi.";

/// Outcome of matching a page against the keyword index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Keywords attached; `category` is where the backend found them
    Matched {
        keywords: KeywordSet,
        category: Option<String>,
    },
    /// The page is not in the index at all (blocking for generation)
    NotFound { message: String },
    /// The page loaded but nothing attached (soft state)
    NoMatch,
}

impl MatchOutcome {
    /// Decode a `/api/match-keyword` response body.
    ///
    /// Precedence: a non-empty keyword list wins, then an explicit not-found
    /// signal (`status: 404` or `notFound: true`), otherwise a soft no-match.
    pub fn decode(body: &Value) -> Self {
        let keywords = body
            .get("keywords")
            .and_then(Value::as_array)
            .map(|raw| KeywordSet::from_raw(body.get("keyword").and_then(Value::as_str), raw))
            .unwrap_or_default();

        if !keywords.is_empty() {
            return MatchOutcome::Matched {
                keywords,
                category: body
                    .get("category")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            };
        }

        let status_404 = body.get("status").and_then(Value::as_u64) == Some(404);
        let flagged = body.get("notFound").and_then(Value::as_bool) == Some(true);
        if status_404 || flagged {
            return MatchOutcome::not_found(body.get("message").and_then(Value::as_str));
        }

        MatchOutcome::NoMatch
    }

    /// Not-found outcome with the backend's message, or the default one
    pub fn not_found(message: Option<&str>) -> Self {
        MatchOutcome::NotFound {
            message: message
                .filter(|m| !is_blank(m))
                .unwrap_or(NOT_FOUND_MESSAGE)
                .to_string(),
        }
    }
}
