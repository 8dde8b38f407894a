//! Backend response-shape decoding
//!
//! Endpoints answer in more than one shape. Each decoder here is a tagged
//! union tried in a fixed precedence order (bare array first, then named
//! fields), and every decoder is total: an unrecognized body decodes to an
//! empty or absent result instead of an error.

use crate::content::CmsPage;
use crate::faq::{FaqEntry, FaqVersion, RelatedLink, RephrasedFaq, RephrasedVersions};
use serde::Deserialize;
use serde_json::Value;

/// FAQ list body: `[...]`, `{faqs: [...]}` or `{result: [...]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FaqListBody {
    Bare(Vec<Value>),
    Faqs { faqs: Vec<Value> },
    Result { result: Vec<Value> },
}

/// Rephrase body: `[...]`, `{rephrased: [...]}` or `{result: [...]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RephraseBody {
    Bare(Vec<Value>),
    Rephrased { rephrased: Vec<Value> },
    Result { result: Vec<Value> },
}

/// Decode a FAQ generation response into normalized entries.
///
/// Elements that are not objects with a question are skipped.
pub fn decode_faq_list(body: &Value) -> Vec<FaqEntry> {
    let items = match FaqListBody::deserialize(body) {
        Ok(FaqListBody::Bare(items))
        | Ok(FaqListBody::Faqs { faqs: items })
        | Ok(FaqListBody::Result { result: items }) => items,
        Err(_) => return Vec::new(),
    };
    decode_entries(items)
}

/// Decode a rephrase response.
///
/// Returns `None` when the body matches none of the known shapes, so callers
/// can tell "unrecognized" apart from "recognized but empty".
pub fn decode_rephrased(body: &Value) -> Option<Vec<RephrasedFaq>> {
    let items = match RephraseBody::deserialize(body).ok()? {
        RephraseBody::Bare(items)
        | RephraseBody::Rephrased { rephrased: items }
        | RephraseBody::Result { result: items } => items,
    };
    Some(items.iter().map(decode_rephrased_item).collect())
}

/// Decode `{interlinked: [...]}`; `None` when the field is absent
pub fn decode_interlinked(body: &Value) -> Option<Vec<FaqEntry>> {
    let items = body.get("interlinked")?.as_array()?;
    Some(decode_entries(items.clone()))
}

/// Decode `{questions: [...]}`, keeping only string entries
pub fn decode_questions(body: &Value) -> Vec<String> {
    body.get("questions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Decode `{links: [{url, title}]}`
pub fn decode_links(body: &Value) -> Vec<RelatedLink> {
    body.get("links")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| RelatedLink::deserialize(item).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Decode `{pages: [...]}`; `None` when the field is absent
pub fn decode_pages(body: &Value) -> Option<Vec<CmsPage>> {
    let items = body.get("pages")?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| CmsPage::deserialize(item).ok())
            .collect(),
    )
}

fn decode_entries(items: Vec<Value>) -> Vec<FaqEntry> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<FaqEntry>(item).ok())
        .map(FaqEntry::normalized)
        .collect()
}

/// One rephrase element: `{rephrased: {version_1, version_2}}` or the
/// versions object itself. Anything else keeps its slot as `None`.
fn decode_rephrased_item(item: &Value) -> RephrasedFaq {
    let versions = item.get("rephrased").unwrap_or(item);
    let version = |name: &str| {
        versions
            .get(name)
            .and_then(|v| FaqVersion::deserialize(v).ok())
    };
    match (version("version_1"), version("version_2")) {
        (Some(version_1), Some(version_2)) => RephrasedFaq {
            rephrased: Some(RephrasedVersions {
                version_1,
                version_2,
            }),
        },
        _ => RephrasedFaq::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair() -> Value {
        json!({
            "rephrased": {
                "version_1": { "question": "Q1", "answer": "A1" },
                "version_2": { "question": "Q2", "answer": "A2" }
            }
        })
    }

    #[test]
    fn test_faq_list_shapes() {
        let entry = json!({ "question": "What is a CRM?", "answer": "<p>A tool.</p>" });
        assert_eq!(decode_faq_list(&json!([entry.clone()])).len(), 1);
        assert_eq!(decode_faq_list(&json!({ "faqs": [entry.clone()] })).len(), 1);
        assert_eq!(decode_faq_list(&json!({ "result": [entry] })).len(), 1);
    }

    #[test]
    fn test_faq_list_faqs_field_wins_over_result() {
        let body = json!({
            "faqs": [{ "question": "from faqs" }],
            "result": [{ "question": "from result" }]
        });
        assert_eq!(decode_faq_list(&body)[0].question, "from faqs");
    }

    #[test]
    fn test_faq_list_unrecognized_is_empty() {
        assert!(decode_faq_list(&json!({ "faqs": "nope" })).is_empty());
        assert!(decode_faq_list(&json!("text")).is_empty());
        assert!(decode_faq_list(&json!(null)).is_empty());
    }

    #[test]
    fn test_faq_list_skips_malformed_items_and_flags_links() {
        let body = json!({ "faqs": [
            { "question": "Q?", "answer": "<a href=\"/x\">x</a>" },
            "not an object",
            { "answer": "no question" }
        ]});
        let entries = decode_faq_list(&body);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].has_interlink);
    }

    #[test]
    fn test_rephrase_three_shapes() {
        assert_eq!(decode_rephrased(&json!([pair()])).unwrap().len(), 1);
        assert_eq!(decode_rephrased(&json!({ "rephrased": [pair()] })).unwrap().len(), 1);
        let from_result = decode_rephrased(&json!({ "result": [pair()] })).unwrap();
        assert_eq!(from_result[0].version_2().unwrap().question, "Q2");
    }

    #[test]
    fn test_rephrase_unrecognized_is_none() {
        assert!(decode_rephrased(&json!({ "error": "boom" })).is_none());
        assert!(decode_rephrased(&json!({ "rephrased": {} })).is_none());
    }

    #[test]
    fn test_rephrase_keeps_slot_for_malformed_item() {
        let decoded = decode_rephrased(&json!([pair(), { "rephrased": null }])).unwrap();
        assert_eq!(decoded.len(), 2);
        assert!(decoded[1].rephrased.is_none());
    }

    #[test]
    fn test_rephrase_accepts_bare_versions_object() {
        let bare = json!([{
            "version_1": { "question": "Q1", "answer": "A1" },
            "version_2": { "question": "Q2", "answer": "A2" }
        }]);
        assert!(decode_rephrased(&bare).unwrap()[0].rephrased.is_some());
    }

    #[test]
    fn test_interlinked() {
        let body = json!({ "interlinked": [{ "question": "Q", "answer": "<a href=\"/p\">p</a>" }] });
        let entries = decode_interlinked(&body).unwrap();
        assert!(entries[0].has_interlink);
        assert!(decode_interlinked(&json!({})).is_none());
    }

    #[test]
    fn test_questions_keep_strings_only() {
        let body = json!({ "questions": ["What is a CRM?", 3, null, "How much?"] });
        assert_eq!(decode_questions(&body), vec!["What is a CRM?", "How much?"]);
        assert!(decode_questions(&json!({})).is_empty());
    }

    #[test]
    fn test_links_and_pages() {
        let links = decode_links(&json!({ "links": [{ "url": "/a", "title": "A" }, { "title": "no url" }] }));
        assert_eq!(links.len(), 1);

        let pages = decode_pages(&json!({ "pages": [{ "id": 1, "title": "One" }] })).unwrap();
        assert_eq!(pages[0].id_string(), "1");
        assert!(decode_pages(&json!({ "error": "x" })).is_none());
    }
}
