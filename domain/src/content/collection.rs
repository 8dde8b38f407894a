//! CMS collections and the keyword-index categories they map to

/// Static collection → keyword-index category table
const COLLECTION_CATEGORIES: &[(&str, &str)] = &[
    ("seo-pages", "SEO Landing Pages"),
    ("solution-pages", "Solution Pages"),
    ("alternative-pages", "Alternative Pages"),
    ("alternative-pages-v2s", "Alternative Pages v2"),
    ("cluster-pages", "Cluster Pages"),
    ("faq", "FAQ"),
    ("topical-authority-pages", "Topical Authority Pages"),
    ("topical-authority-categories", "Topical Authority Categories"),
    ("template-pages", "Templates pages"),
    ("google-sheets-template-pages", "Google Sheets Template Pages"),
    ("google-sheets-templates", "Google Sheets Templates"),
    ("looker-studio-template-pages", "Looker Studio Template Pages"),
    ("looker-studio-templates", "Looker Studio Templates"),
    ("integration-pages", "Integration Pages"),
    ("integration-to-google-sheets-pages", "Integration Google Sheets"),
    ("integration-to-looker-studio-pages", "Integration Looker Studio"),
    ("connector-pages", "Connector Pages"),
    ("addons", "Addons"),
    ("feature-pages", "Feature Pages"),
    ("reporting-tool-pages", "Reporting Tool Pages v1"),
    ("reporting-tool-pages-v2", "Reporting Tool Pages v2"),
    ("competitor-comparison-pages", "Competitor Comparison Pages"),
    ("documents-pages", "Documents Pages"),
    ("other-pages", "Other Pages"),
];

/// URL-pattern groups that list several collections at once
const COLLECTION_GROUPS: &[(&str, &[&str])] = &[
    ("url-pattern-blog", &["topical-authority-pages"]),
    (
        "url-pattern-integrations",
        &[
            "integration-pages",
            "integration-to-google-sheets-pages",
            "integration-to-looker-studio-pages",
        ],
    ),
    (
        "url-pattern-templates",
        &[
            "template-pages",
            "google-sheets-template-pages",
            "looker-studio-template-pages",
        ],
    ),
    (
        "url-pattern-other",
        &[
            "seo-pages",
            "solution-pages",
            "cluster-pages",
            "connector-pages",
            "competitor-comparison-pages",
            "alternative-pages-v2s",
            "case-studies",
            "reporting-tool-pages-v2",
            "addon-pages",
            "documents-pages",
            "other-pages",
        ],
    ),
];

/// Map a CMS collection to its keyword-index category.
///
/// Unknown collections map to the empty string, which the keyword-match
/// endpoint treats as "search every category".
pub fn category_for_collection(collection: &str) -> &'static str {
    COLLECTION_CATEGORIES
        .iter()
        .find(|(id, _)| *id == collection)
        .map(|(_, category)| *category)
        .unwrap_or("")
}

/// Whether the identifier names a URL-pattern group rather than a collection
pub fn is_collection_group(collection: &str) -> bool {
    COLLECTION_GROUPS.iter().any(|(group, _)| *group == collection)
}

/// Expand a selected collection into the concrete collections to list.
///
/// Group identifiers expand to their members; anything else lists itself.
pub fn expand_collection(collection: &str) -> Vec<String> {
    COLLECTION_GROUPS
        .iter()
        .find(|(group, _)| *group == collection)
        .map(|(_, members)| members.iter().map(|m| m.to_string()).collect())
        .unwrap_or_else(|| vec![collection.to_string()])
}
