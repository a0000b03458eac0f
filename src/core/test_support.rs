//! In-memory catalog source for unit tests.

use crate::core::cache::{CachePolicy, DetailCache};
use crate::core::catalog::{Catalog, CatalogSettings};
use crate::core::error::{DexNavigatorError, Result};
use crate::core::model::{CategoryName, EntityDetail, EntityReference, Stat, TypeTag};
use crate::core::source::CatalogSource;
use reqwest::Url;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct FakeSource {
    types: Vec<CategoryName>,
    type_list_fails: bool,
    categories: HashMap<String, Vec<String>>,
    listing: Vec<String>,
    details: HashMap<String, EntityDetail>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    detail_calls: Mutex<HashMap<String, usize>>,
    listing_limits: Mutex<Vec<usize>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

pub fn sample_detail(name: &str) -> EntityDetail {
    EntityDetail {
        name: name.to_string(),
        sprite: Url::parse(&format!(
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{name}.png"
        ))
        .ok(),
        types: vec![TypeTag {
            slot: 1,
            name: "normal".to_string(),
        }],
        stats: vec![
            Stat {
                name: "hp".to_string(),
                base_value: 45,
            },
            Stat {
                name: "speed".to_string(),
                base_value: 60,
            },
        ],
        abilities: vec!["run-away".to_string()],
        moves: vec!["tackle".to_string()],
    }
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn failing_type_list(mut self) -> Self {
        self.type_list_fails = true;
        self
    }

    pub fn with_category(mut self, category: &str, members: &[&str]) -> Self {
        self.categories.insert(
            category.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    pub fn with_listing(mut self, names: &[&str]) -> Self {
        self.listing = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_details(mut self, names: &[&str]) -> Self {
        for name in names {
            self.details.insert(name.to_string(), sample_detail(name));
        }
        self
    }

    pub fn failing_detail(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn detail_calls(&self, name: &str) -> usize {
        self.detail_calls
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    pub fn listing_limits(&self) -> Vec<usize> {
        self.listing_limits.lock().unwrap().clone()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn not_found(path: &str) -> DexNavigatorError {
        DexNavigatorError::unexpected_status(format!("http://fake{path}"), 404)
    }

    fn pause(&self) {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
    }
}

impl CatalogSource for FakeSource {
    fn type_names(&self) -> Result<Vec<CategoryName>> {
        if self.type_list_fails {
            return Err(DexNavigatorError::unexpected_status("http://fake/type", 500));
        }
        Ok(self.types.clone())
    }

    fn type_members(&self, category: &str) -> Result<Vec<EntityReference>> {
        self.pause();
        self.categories
            .get(category)
            .map(|members| members.iter().map(EntityReference::new).collect())
            .ok_or_else(|| Self::not_found(&format!("/type/{category}")))
    }

    fn default_listing(&self, limit: usize) -> Result<Vec<EntityReference>> {
        self.pause();
        self.listing_limits.lock().unwrap().push(limit);
        Ok(self
            .listing
            .iter()
            .take(limit)
            .map(EntityReference::new)
            .collect())
    }

    fn detail(&self, name: &str) -> Result<EntityDetail> {
        *self
            .detail_calls
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default() += 1;

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        self.pause();
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(name) {
            return Err(Self::not_found(&format!("/pokemon/{name}")));
        }
        self.details
            .get(name)
            .cloned()
            .ok_or_else(|| Self::not_found(&format!("/pokemon/{name}")))
    }
}

pub fn cache(capacity: usize) -> DetailCache {
    DetailCache::new(CachePolicy::new(
        NonZeroUsize::new(capacity).unwrap(),
        None,
    ))
}

pub fn catalog_with(source: FakeSource) -> Catalog<FakeSource> {
    Catalog::new(
        source,
        cache(64),
        CatalogSettings {
            default_list_limit: 151,
            max_concurrent_requests: 8,
        },
    )
}
