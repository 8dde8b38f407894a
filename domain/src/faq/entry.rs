//! FAQ entry value objects

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;

static ANCHOR_WITH_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<a\s+href=").expect("valid anchor pattern"));

/// Whether an answer's HTML carries at least one hyperlink
pub fn has_interlink(html: &str) -> bool {
    ANCHOR_WITH_HREF.is_match(html)
}

/// A single question/answer pair.
///
/// `answer` is HTML-bearing. Fields the backend adds beyond the ones the
/// workflow reads are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rephrased: Option<RephrasedVersions>,
    #[serde(default)]
    pub has_interlink: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            ..Default::default()
        }
    }

    /// Recompute derived flags from the answer body
    pub fn normalized(mut self) -> Self {
        self.has_interlink = has_interlink(&self.answer);
        self
    }

    /// Copy-ready `Q: ... / A: ...` text
    pub fn copy_text(&self) -> String {
        format!("Q: {}\nA: {}", self.question, self.answer)
    }
}

impl From<FaqVersion> for FaqEntry {
    fn from(version: FaqVersion) -> Self {
        FaqEntry::new(version.question, version.answer).normalized()
    }
}

/// One alternate phrasing of an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqVersion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// The two alternate phrasings produced per entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephrasedVersions {
    pub version_1: FaqVersion,
    pub version_2: FaqVersion,
}

/// Rephrasing result aligned with one content FAQ.
///
/// `rephrased` is `None` when the backend returned an element without
/// usable versions; the slot is kept so indices stay aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephrasedFaq {
    #[serde(default)]
    pub rephrased: Option<RephrasedVersions>,
}

impl RephrasedFaq {
    pub fn new(version_1: FaqVersion, version_2: FaqVersion) -> Self {
        Self {
            rephrased: Some(RephrasedVersions {
                version_1,
                version_2,
            }),
        }
    }

    pub fn version_1(&self) -> Option<&FaqVersion> {
        self.rephrased.as_ref().map(|r| &r.version_1)
    }

    pub fn version_2(&self) -> Option<&FaqVersion> {
        self.rephrased.as_ref().map(|r| &r.version_2)
    }
}
