//! Keyword index: category → list of `{url, keyword(s)}` records
//!
//! The index is handed back to the backend verbatim (`keywordsData`), so it is
//! kept as raw JSON and only interpreted on lookup.

use super::set::{KeywordSet, normalize_keywords};
use crate::core::string::is_blank;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category-keyed keyword index (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordIndex(Map<String, Value>);

impl KeywordIndex {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Interpret an arbitrary JSON value as an index; non-objects yield `None`
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// An index with no categories, or whose every category list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
            || self
                .0
                .values()
                .all(|v| v.as_array().is_some_and(|a| a.is_empty()))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Find the keywords attached to a page.
    ///
    /// `page` may be a full url or a slug. A blank `category` searches every
    /// category. Returns `None` when no record matches or the matching record
    /// carries no usable keywords.
    pub fn lookup(&self, category: &str, page: &str) -> Option<KeywordSet> {
        let wanted = PageKey::new(page)?;
        let lists: Vec<&Value> = if is_blank(category) {
            self.0.values().collect()
        } else {
            self.0.get(category).into_iter().collect()
        };

        lists
            .into_iter()
            .filter_map(Value::as_array)
            .flatten()
            .filter_map(Value::as_object)
            .find(|record| record_matches(record, &wanted))
            .map(record_keywords)
            .filter(|set| !set.is_empty())
    }
}

/// Normalized page identifier for comparison
struct PageKey {
    full: String,
    tail: String,
}

impl PageKey {
    fn new(raw: &str) -> Option<Self> {
        let full = raw.trim().trim_end_matches('/').to_lowercase();
        if full.is_empty() {
            return None;
        }
        let tail = full.rsplit('/').next().unwrap_or_default().to_string();
        Some(Self { full, tail })
    }

    fn matches(&self, other: &PageKey) -> bool {
        self.full == other.full || (!self.tail.is_empty() && self.tail == other.tail)
    }
}

fn record_matches(record: &Map<String, Value>, wanted: &PageKey) -> bool {
    ["url", "slug", "page_url"]
        .iter()
        .filter_map(|field| record.get(*field).and_then(Value::as_str))
        .filter_map(PageKey::new)
        .any(|key| key.matches(wanted))
}

fn record_keywords(record: &Map<String, Value>) -> KeywordSet {
    let primary = record
        .get("keyword")
        .or_else(|| record.get("main_keyword"))
        .and_then(Value::as_str);

    let raw: Vec<Value> = match record
        .get("keywords")
        .or_else(|| record.get("list_of_keywords"))
    {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(s)) => s
            .split(',')
            .map(|k| Value::String(k.trim().to_string()))
            .collect(),
        _ => Vec::new(),
    };

    let mut all = normalize_keywords(&raw);
    if all.is_empty()
        && let Some(p) = primary
    {
        all.push(p.to_string());
    }
    KeywordSet::new(primary.unwrap_or_default(), all)
}
