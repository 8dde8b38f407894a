//! Keyword set value object

use crate::core::string::is_blank;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Field that wraps a keyword string when the backend sends objects
const WRAPPED_KEYWORD_FIELD: &str = "list_of_keywords";

/// Primary keyword plus the full candidate set (Value Object)
///
/// `all` keeps insertion order, which is relevance order, and holds no
/// duplicates or blank entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    primary: String,
    all: Vec<String>,
}

impl KeywordSet {
    /// Build a keyword set, dropping blanks and duplicates from `all`.
    ///
    /// A blank `primary` falls back to the first entry of `all`.
    pub fn new(primary: impl Into<String>, all: impl IntoIterator<Item = String>) -> Self {
        let all = dedup_non_blank(all);
        let primary = primary.into();
        let primary = if is_blank(&primary) {
            all.first().cloned().unwrap_or_default()
        } else {
            primary
        };
        Self { primary, all }
    }

    /// A set holding one typed keyword
    pub fn single(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        if is_blank(&keyword) {
            return Self::default();
        }
        Self {
            all: vec![keyword.clone()],
            primary: keyword,
        }
    }

    /// Build from raw JSON entries as returned by the backend
    pub fn from_raw(primary: Option<&str>, raw: &[Value]) -> Self {
        Self::new(primary.unwrap_or_default(), normalize_keywords(raw))
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn all(&self) -> &[String] {
        &self.all
    }

    pub fn is_empty(&self) -> bool {
        is_blank(&self.primary) && self.all.is_empty()
    }

    /// Keywords to query, in order: `all`, or just the primary when `all` is empty
    pub fn query_keywords(&self) -> Vec<&str> {
        if self.all.is_empty() {
            if is_blank(&self.primary) {
                Vec::new()
            } else {
                vec![self.primary.as_str()]
            }
        } else {
            self.all.iter().map(String::as_str).collect()
        }
    }

    /// The keyword handed to generation endpoints
    pub fn lead(&self) -> &str {
        if !is_blank(&self.primary) {
            &self.primary
        } else {
            self.all.first().map(String::as_str).unwrap_or_default()
        }
    }
}

/// Project raw keyword entries to strings.
///
/// Strings pass through; objects contribute their wrapped keyword field;
/// anything else is dropped, as are blank and duplicate entries.
pub fn normalize_keywords(raw: &[Value]) -> Vec<String> {
    let projected = raw.iter().filter_map(|entry| match entry {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get(WRAPPED_KEYWORD_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    });
    dedup_non_blank(projected)
}

fn dedup_non_blank(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|k| !is_blank(k))
        .filter(|k| seen.insert(k.clone()))
        .collect()
}
