//! Resolve Keywords use case
//!
//! Turns a selected [`ContentSource`] into body text and the keyword set
//! the rest of the workflow runs on.
//!
//! CMS pages are matched either through the backend keyword-match endpoint
//! or through the loaded keyword index, depending on
//! [`KeywordResolution`]. Pasted text uses the keyword the operator typed,
//! then the index when a page url and category were given.

use crate::ports::faq_backend::{BackendError, FaqBackend, MatchKeywordRequest};
use crate::ports::result_cache::{ResultCache, ResultCacheExt};
use faqsmith_domain::cache::{page_details_key, pages_key};
use faqsmith_domain::content::{category_for_collection, expand_collection, is_collection_group};
use faqsmith_domain::keyword::NOT_FOUND_MESSAGE;
use faqsmith_domain::{
    CmsPage, ContentSource, KeywordIndex, KeywordResolution, KeywordSet, MatchOutcome,
    ResolvedContent,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while resolving a source
#[derive(Error, Debug)]
pub enum ResolveKeywordsError {
    /// The page is not in the keyword index; its content is still usable
    #[error("{message}")]
    NotFound {
        message: String,
        content: Box<ResolvedContent>,
    },

    #[error("{0}")]
    PageUnavailable(String),

    #[error("Keyword match failed: {0}")]
    MatchFailed(BackendError),

    #[error("Failed to load page details: {0}")]
    PageFetch(BackendError),
}

/// A resolved source
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
    pub content: ResolvedContent,
    /// Empty when the page loaded but nothing attached
    pub keywords: KeywordSet,
    /// Human-readable outcome of the resolution
    pub status: String,
    pub from_cache: bool,
}

/// What gets cached for a CMS page after a successful match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedPageDetail {
    content: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    main_keyword: String,
    #[serde(default)]
    all_keywords: Vec<String>,
    #[serde(default)]
    status: String,
}

/// Use case for resolving keywords
pub struct KeywordResolver<B: FaqBackend + 'static> {
    backend: Arc<B>,
    cache: Arc<dyn ResultCache>,
    mode: KeywordResolution,
}

impl<B: FaqBackend + 'static> KeywordResolver<B> {
    pub fn new(backend: Arc<B>, cache: Arc<dyn ResultCache>, mode: KeywordResolution) -> Self {
        Self {
            backend,
            cache,
            mode,
        }
    }

    pub async fn resolve(
        &self,
        source: &ContentSource,
        index: Option<&KeywordIndex>,
    ) -> Result<ResolvedPage, ResolveKeywordsError> {
        match source {
            ContentSource::Cms {
                collection_id,
                page_id,
            } => self.resolve_cms(collection_id, page_id, index).await,
            ContentSource::Pasted {
                raw_text,
                keyword,
                url,
                category,
            } => Ok(resolve_pasted(
                raw_text,
                keyword.as_deref(),
                url.as_deref(),
                category.as_deref(),
                index,
            )),
        }
    }

    async fn resolve_cms(
        &self,
        collection: &str,
        page_id: &str,
        index: Option<&KeywordIndex>,
    ) -> Result<ResolvedPage, ResolveKeywordsError> {
        let key = page_details_key(page_id);
        if let Some(cached) = self.cache.get_as::<CachedPageDetail>(&key)
            && !cached.all_keywords.is_empty()
        {
            debug!("Using cached page details for {}", page_id);
            return Ok(ResolvedPage {
                keywords: KeywordSet::new(cached.main_keyword, cached.all_keywords),
                content: ResolvedContent {
                    text: cached.content,
                    url: cached.url,
                    slug: cached.slug,
                },
                status: cached.status,
                from_cache: true,
            });
        }

        let (collection, content) = self.fetch_page(collection, page_id).await?;
        let category = category_for_collection(&collection);
        debug!("Page {} in {} maps to category {:?}", page_id, collection, category);

        let outcome = match self.mode {
            KeywordResolution::MatchEndpoint => self.match_endpoint(&content, category).await?,
            KeywordResolution::StaticIndex => match_index(&content, category, index),
        };

        match outcome {
            MatchOutcome::Matched { keywords, category } => {
                let status = format!(
                    "Matched {} keyword(s) in {}",
                    keywords.all().len(),
                    category.as_deref().unwrap_or("the keyword index")
                );
                info!("{} for page {}", status, page_id);
                self.cache.set_as(
                    &key,
                    &CachedPageDetail {
                        content: content.text.clone(),
                        url: content.url.clone(),
                        slug: content.slug.clone(),
                        main_keyword: keywords.primary().to_string(),
                        all_keywords: keywords.all().to_vec(),
                        status: status.clone(),
                    },
                );
                Ok(ResolvedPage {
                    content,
                    keywords,
                    status,
                    from_cache: false,
                })
            }
            MatchOutcome::NotFound { message } => {
                warn!("Page {} not found in keyword index", page_id);
                Err(ResolveKeywordsError::NotFound {
                    message,
                    content: Box::new(content),
                })
            }
            MatchOutcome::NoMatch => Ok(ResolvedPage {
                content,
                keywords: KeywordSet::default(),
                status: "Page loaded, no keywords matched".to_string(),
                from_cache: false,
            }),
        }
    }

    /// Fetch the page body, resolving a URL-pattern group to the concrete
    /// collection the page lives in.
    async fn fetch_page(
        &self,
        collection: &str,
        page_id: &str,
    ) -> Result<(String, ResolvedContent), ResolveKeywordsError> {
        let candidates = if is_collection_group(collection) {
            match self.listed_collection(collection, page_id) {
                Some(concrete) => vec![concrete],
                None => expand_collection(collection),
            }
        } else {
            vec![collection.to_string()]
        };

        let mut last_error = None;
        for candidate in candidates {
            match self.backend.fetch_page(&candidate, page_id).await {
                Ok(detail) => match detail.into_resolved() {
                    Ok(content) => return Ok((candidate, content)),
                    Err(message) => {
                        debug!("No content for {} in {}: {}", page_id, candidate, message);
                        last_error = Some(ResolveKeywordsError::PageUnavailable(message));
                    }
                },
                Err(e) => {
                    debug!("Fetching {} from {} failed: {}", page_id, candidate, e);
                    last_error = Some(ResolveKeywordsError::PageFetch(e));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ResolveKeywordsError::PageUnavailable("Failed to load page details".to_string())
        }))
    }

    /// Source collection recorded on the cached listing of a group
    fn listed_collection(&self, group: &str, page_id: &str) -> Option<String> {
        self.cache
            .get_as::<Vec<CmsPage>>(&pages_key(group))?
            .into_iter()
            .find(|page| page.id_string() == page_id)
            .and_then(|page| page.source_collection)
    }

    async fn match_endpoint(
        &self,
        content: &ResolvedContent,
        category: &str,
    ) -> Result<MatchOutcome, ResolveKeywordsError> {
        let Some(url) = content.lookup_key() else {
            debug!("Page has neither url nor slug, skipping keyword match");
            return Ok(MatchOutcome::NoMatch);
        };

        let request = MatchKeywordRequest {
            url: url.to_string(),
            slug: content.slug.clone(),
            category: category.to_string(),
        };

        self.backend
            .match_keyword(&request)
            .await
            .map_err(ResolveKeywordsError::MatchFailed)
    }
}

fn match_index(
    content: &ResolvedContent,
    category: &str,
    index: Option<&KeywordIndex>,
) -> MatchOutcome {
    let Some(index) = index.filter(|i| !i.is_empty()) else {
        warn!("No keyword index loaded, page has no keywords");
        return MatchOutcome::NoMatch;
    };
    let Some(page) = content.lookup_key() else {
        return MatchOutcome::NoMatch;
    };

    match index.lookup(category, page) {
        Some(keywords) => MatchOutcome::Matched {
            keywords,
            category: Some(category.to_string()).filter(|c| !c.is_empty()),
        },
        None => MatchOutcome::not_found(Some(NOT_FOUND_MESSAGE)),
    }
}

fn resolve_pasted(
    raw_text: &str,
    typed: Option<&str>,
    url: Option<&str>,
    category: Option<&str>,
    index: Option<&KeywordIndex>,
) -> ResolvedPage {
    let content = ResolvedContent {
        text: raw_text.to_string(),
        url: url.map(str::to_string),
        slug: None,
    };

    if let Some(keyword) = typed.map(str::trim).filter(|k| !k.is_empty()) {
        return ResolvedPage {
            content,
            keywords: KeywordSet::single(keyword),
            status: format!("Using keyword \"{}\"", keyword),
            from_cache: false,
        };
    }

    if let (Some(index), Some(url)) = (index, url)
        && let Some(keywords) = index.lookup(category.unwrap_or_default(), url)
    {
        return ResolvedPage {
            content,
            status: format!("Found {} keyword(s) in the keyword index", keywords.all().len()),
            keywords,
            from_cache: false,
        };
    }

    ResolvedPage {
        content,
        keywords: KeywordSet::default(),
        status: "No keyword entered".to_string(),
        from_cache: false,
    }
}
