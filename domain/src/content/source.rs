//! Content source value objects

use crate::core::error::DomainError;
use crate::core::string::{is_blank, trimmed_len};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Require at least `min_chars` characters of non-blank content.
pub fn require_content(text: &str, min_chars: usize) -> Result<(), DomainError> {
    let length = trimmed_len(text);
    if length == 0 || length < min_chars {
        return Err(DomainError::InsufficientContent {
            length,
            required: min_chars,
        });
    }
    Ok(())
}

/// Identifies where body text comes from.
///
/// Replaced wholesale on every new selection; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentSource {
    /// A page stored in a CMS collection
    Cms {
        collection_id: String,
        page_id: String,
    },
    /// Text pasted by the operator, with whatever keyword hints they typed
    Pasted {
        raw_text: String,
        #[serde(default)]
        keyword: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        category: Option<String>,
    },
}

impl ContentSource {
    pub fn cms(collection_id: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self::Cms {
            collection_id: collection_id.into(),
            page_id: page_id.into(),
        }
    }

    pub fn pasted(raw_text: impl Into<String>) -> Self {
        Self::Pasted {
            raw_text: raw_text.into(),
            keyword: None,
            url: None,
            category: None,
        }
    }

    /// Attach a typed keyword to a pasted source. No-op for CMS sources.
    pub fn with_keyword(mut self, typed: impl Into<String>) -> Self {
        if let Self::Pasted { keyword, .. } = &mut self {
            *keyword = Some(typed.into());
        }
        self
    }

    /// Attach an index lookup hint (page url + category) to a pasted source.
    pub fn with_index_hint(mut self, page_url: impl Into<String>, name: impl Into<String>) -> Self {
        if let Self::Pasted { url, category, .. } = &mut self {
            *url = Some(page_url.into());
            *category = Some(name.into());
        }
        self
    }

    /// Short label for log lines and console headers
    pub fn identity(&self) -> String {
        match self {
            Self::Cms {
                collection_id,
                page_id,
            } => format!("{}/{}", collection_id, page_id),
            Self::Pasted { raw_text, .. } => {
                format!("pasted:{}chars", raw_text.chars().count())
            }
        }
    }
}

/// Body text resolved from a [`ContentSource`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedContent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ResolvedContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            slug: None,
        }
    }

    /// The identifier used to look the page up in a keyword index:
    /// the canonical url when present, otherwise the slug.
    pub fn lookup_key(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|u| !is_blank(u))
            .or(self.slug.as_deref().filter(|s| !is_blank(s)))
    }
}

/// A page entry listed from a CMS collection.
///
/// Only the fields the workflow needs are typed; everything else the CMS
/// returns is preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsPage {
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Collection the page was listed from (set when a group expands to several)
    #[serde(rename = "_sourceCollection", default, skip_serializing_if = "Option::is_none")]
    pub source_collection: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl CmsPage {
    /// Page id rendered as a string, whether the CMS sent a number or a string
    pub fn id_string(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Best human-readable label for listings
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.slug.as_deref())
            .or(self.url.as_deref())
            .unwrap_or("(untitled)")
    }
}

/// Body of a single CMS page as returned by the content endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDetail {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PageDetail {
    /// Convert into resolved content, or the backend's own explanation of
    /// why no content came back.
    pub fn into_resolved(self) -> Result<ResolvedContent, String> {
        match self.content {
            Some(text) if !text.is_empty() => Ok(ResolvedContent {
                text,
                url: self.url,
                slug: self.slug,
            }),
            _ => Err(self
                .error
                .or(self.message)
                .unwrap_or_else(|| "Failed to load page details".to_string())),
        }
    }
}
