//! Load Keyword Index use case
//!
//! Finds the category → page → keywords index used for static keyword
//! lookup and interlinking. Sources are tried in order: the local cache,
//! the static `keywords.json` file, then the CMS backend.

use crate::ports::faq_backend::{BackendError, FaqBackend};
use crate::ports::result_cache::{ResultCache, ResultCacheExt};
use faqsmith_domain::KeywordIndex;
use faqsmith_domain::cache::{KEYWORDS_JSON_KEY, STRAPI_KEYWORDS_KEY};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a loaded index came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrigin {
    Cache,
    StaticFile,
    Backend,
}

impl IndexOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexOrigin::Cache => "cache",
            IndexOrigin::StaticFile => "keywords.json",
            IndexOrigin::Backend => "CMS",
        }
    }
}

/// A keyword index together with its origin
#[derive(Debug, Clone)]
pub struct LoadedIndex {
    pub index: KeywordIndex,
    pub origin: IndexOrigin,
}

/// Use case for loading the keyword index
pub struct KeywordIndexLoader<B: FaqBackend + 'static> {
    backend: Arc<B>,
    cache: Arc<dyn ResultCache>,
}

impl<B: FaqBackend + 'static> KeywordIndexLoader<B> {
    pub fn new(backend: Arc<B>, cache: Arc<dyn ResultCache>) -> Self {
        Self { backend, cache }
    }

    /// Load the index from the first source that has a non-empty one.
    ///
    /// The static file is optional: its failures are logged and the CMS
    /// backend is asked instead. `Ok(None)` means no source has an index.
    pub async fn load(&self) -> Result<Option<LoadedIndex>, BackendError> {
        if let Some(index) = self.cache.get_as::<KeywordIndex>(KEYWORDS_JSON_KEY)
            && !index.is_empty()
        {
            debug!("Keyword index loaded from cache");
            return Ok(Some(LoadedIndex {
                index,
                origin: IndexOrigin::Cache,
            }));
        }

        match self.backend.fetch_static_keyword_index().await {
            Ok(Some(index)) if !index.is_empty() => {
                info!(
                    "Keyword index loaded from keywords.json ({} categories)",
                    index.categories().count()
                );
                self.cache.set_as(KEYWORDS_JSON_KEY, &index);
                return Ok(Some(LoadedIndex {
                    index,
                    origin: IndexOrigin::StaticFile,
                }));
            }
            Ok(_) => debug!("keywords.json is missing or empty, asking the CMS"),
            Err(e) => warn!("Could not load keywords.json: {}", e),
        }

        match self.backend.fetch_cms_keyword_index().await? {
            Some(index) if !index.is_empty() => {
                info!("Keyword index loaded from the CMS");
                self.cache.set_as(KEYWORDS_JSON_KEY, &index);
                Ok(Some(LoadedIndex {
                    index,
                    origin: IndexOrigin::Backend,
                }))
            }
            _ => {
                warn!("No keyword index available");
                Ok(None)
            }
        }
    }

    /// Fetch the index from the CMS backend regardless of what is cached,
    /// replacing both cached copies.
    pub async fn refresh_from_backend(&self) -> Result<Option<KeywordIndex>, BackendError> {
        let index = self.backend.fetch_cms_keyword_index().await?;
        if let Some(index) = &index {
            self.cache.set_as(STRAPI_KEYWORDS_KEY, index);
            self.cache.set_as(KEYWORDS_JSON_KEY, index);
            info!("Keyword index refreshed from the CMS");
        }
        Ok(index)
    }
}
