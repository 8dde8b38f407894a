//! Related-link value object

use serde::{Deserialize, Serialize};

/// A link suggested for the related-links sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub url: String,
    #[serde(default)]
    pub title: String,
}
