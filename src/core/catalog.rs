//! The data pipeline: type listing, filter resolution, detail fetching.
//!
//! [`Catalog`] ties a [`CatalogSource`] to an injected [`DetailCache`]. Its
//! operations never fail the whole pipeline: a failed category list or a failed
//! listing degrades to an empty result, and a failed detail fetch inside a batch
//! just drops that entity. Only [`Catalog::detail`] reports errors, because the
//! detail view has to show them.

use crate::core::cache::DetailCache;
use crate::core::config::DexConfig;
use crate::core::error::Result;
use crate::core::model::{CategoryName, EntityDetail, EntityReference};
use crate::core::source::CatalogSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Category + search text driving a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub category: Option<CategoryName>,
    pub search: String,
}

impl FilterQuery {
    pub fn new(category: Option<&str>, search: &str) -> Self {
        Self {
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            search: search.trim().to_string(),
        }
    }

    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("all")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSettings {
    pub default_list_limit: usize,
    pub max_concurrent_requests: usize,
}

impl From<&DexConfig> for CatalogSettings {
    fn from(config: &DexConfig) -> Self {
        Self {
            default_list_limit: config.default_list_limit,
            max_concurrent_requests: config.max_concurrent_requests,
        }
    }
}

pub struct Catalog<S: CatalogSource> {
    source: S,
    cache: DetailCache,
    settings: CatalogSettings,
}

impl<S: CatalogSource> Catalog<S> {
    pub fn new(source: S, cache: DetailCache, settings: CatalogSettings) -> Self {
        Self {
            source,
            cache,
            settings,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    /// All category names, or an empty list when they cannot be fetched
    pub fn category_names(&self) -> Vec<CategoryName> {
        match self.source.type_names() {
            Ok(names) => {
                log::debug!("Fetched {} categories", names.len());
                names
            }
            Err(e) => {
                log::warn!("Failed to fetch category list: {e}");
                Vec::new()
            }
        }
    }

    /// Candidate references for a query, in source order
    pub fn resolve(&self, query: &FilterQuery) -> Vec<EntityReference> {
        let listing = match &query.category {
            Some(category) => self.source.type_members(category),
            None => self.source.default_listing(self.settings.default_list_limit),
        };

        let references = match listing {
            Ok(references) => references,
            Err(e) => {
                log::warn!(
                    "Failed to fetch listing for category {}: {e}",
                    query.category_label()
                );
                return Vec::new();
            }
        };

        let total = references.len();
        let matching: Vec<EntityReference> = references
            .into_iter()
            .filter(|reference| reference.matches(&query.search))
            .collect();

        log::debug!(
            "Resolved {} of {} references (category: {}, search: {:?})",
            matching.len(),
            total,
            query.category_label(),
            query.search
        );
        matching
    }

    /// Detail record for one name, served from the cache when possible
    pub fn detail(&self, name: &str) -> Result<Arc<EntityDetail>> {
        self.cache
            .get_or_fetch(name, |name| self.source.detail(name))
    }

    /// Fetch details for every reference, dropping failures.
    ///
    /// At most `max_concurrent_requests` requests are in flight. The output keeps
    /// the relative order of the input.
    pub fn fetch_details(&self, references: &[EntityReference]) -> Vec<Arc<EntityDetail>> {
        if references.is_empty() {
            return Vec::new();
        }

        let workers = self
            .settings
            .max_concurrent_requests
            .clamp(1, references.len());
        let cursor = AtomicUsize::new(0);

        log::debug!(
            "Fetching {} details with {} workers",
            references.len(),
            workers
        );

        let mut fetched: Vec<(usize, Arc<EntityDetail>)> = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(|| {
                        let mut found = Vec::new();
                        loop {
                            let index = cursor.fetch_add(1, Ordering::SeqCst);
                            let Some(reference) = references.get(index) else {
                                break;
                            };
                            match self.detail(&reference.name) {
                                Ok(detail) => found.push((index, detail)),
                                Err(e) => {
                                    log::warn!("Error fetching details for {}: {e}", reference.name)
                                }
                            }
                        }
                        found
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        log::error!("Detail fetch worker panicked");
                        Vec::new()
                    })
                })
                .collect()
        });

        fetched.sort_by_key(|(index, _)| *index);

        let dropped = references.len() - fetched.len();
        if dropped > 0 {
            log::info!("Dropped {dropped} entries whose details could not be fetched");
        }

        fetched.into_iter().map(|(_, detail)| detail).collect()
    }

    /// Resolve a query and fetch the details of every match
    pub fn list(&self, query: &FilterQuery) -> Vec<Arc<EntityDetail>> {
        let references = self.resolve(query);
        self.fetch_details(&references)
    }
}
