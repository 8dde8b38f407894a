//! Browse Pages use case
//!
//! Lists the pages of a CMS collection, or of every collection behind a
//! URL-pattern group, fronted by the local result cache.

use crate::ports::faq_backend::{BackendError, FaqBackend};
use crate::ports::result_cache::{ResultCache, ResultCacheExt};
use faqsmith_domain::CmsPage;
use faqsmith_domain::cache::pages_key;
use faqsmith_domain::content::{expand_collection, is_collection_group};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while listing pages
#[derive(Error, Debug)]
pub enum BrowsePagesError {
    #[error("Collection id is empty")]
    EmptyCollection,

    #[error("Failed to list pages: {0}")]
    Backend(#[from] BackendError),
}

/// Pages of one collection (or group)
#[derive(Debug, Clone)]
pub struct PageListing {
    pub collection: String,
    pub pages: Vec<CmsPage>,
    pub from_cache: bool,
}

/// Use case for listing CMS pages
pub struct PageBrowser<B: FaqBackend + 'static> {
    backend: Arc<B>,
    cache: Arc<dyn ResultCache>,
}

impl<B: FaqBackend + 'static> PageBrowser<B> {
    pub fn new(backend: Arc<B>, cache: Arc<dyn ResultCache>) -> Self {
        Self { backend, cache }
    }

    /// List pages, expanding URL-pattern groups.
    ///
    /// A failing collection inside a group is logged and skipped; the call
    /// only fails when every collection failed.
    pub async fn list_pages(&self, collection: &str) -> Result<PageListing, BrowsePagesError> {
        let collection = collection.trim();
        if collection.is_empty() {
            return Err(BrowsePagesError::EmptyCollection);
        }

        let key = pages_key(collection);
        if let Some(pages) = self.cache.get_as::<Vec<CmsPage>>(&key) {
            debug!("Using cached page list for {}", collection);
            return Ok(PageListing {
                collection: collection.to_string(),
                pages,
                from_cache: true,
            });
        }

        let members = expand_collection(collection);
        let grouped = is_collection_group(collection);

        let mut pages = Vec::new();
        let mut succeeded = 0usize;
        let mut last_error = None;

        for member in &members {
            match self.backend.list_pages(member).await {
                Ok(listed) => {
                    succeeded += 1;
                    let listed = listed.unwrap_or_else(|| {
                        warn!("Collection {} returned no page list", member);
                        Vec::new()
                    });
                    debug!("Collection {}: {} pages", member, listed.len());
                    pages.extend(listed.into_iter().map(|mut page| {
                        if grouped || page.source_collection.is_none() {
                            page.source_collection = Some(member.clone());
                        }
                        page
                    }));
                }
                Err(e) => {
                    warn!("Failed to list collection {}: {}", member, e);
                    last_error = Some(e);
                }
            }
        }

        if succeeded == 0
            && let Some(e) = last_error
        {
            return Err(e.into());
        }

        info!("Listed {} pages for {}", pages.len(), collection);
        self.cache.set_as(&key, &pages);

        Ok(PageListing {
            collection: collection.to_string(),
            pages,
            from_cache: false,
        })
    }
}
