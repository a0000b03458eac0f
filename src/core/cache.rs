//! Detail cache keyed by entity name.
//!
//! Detail records are immutable for the life of a session, so a hit can be
//! served without touching the network. The cache is an explicit object with a
//! capacity bound (LRU eviction) and an optional time-to-live, injected into the
//! catalog rather than living in a global.
//!
//! # Public API
//! - [`CachePolicy`]: capacity + optional TTL
//! - [`DetailCache`]: thread-safe store with a per-key fetch guard
//!
//! # Concurrency
//! - Entries sit behind one mutex; every operation is a short critical section.
//! - [`DetailCache::get_or_fetch`] takes a per-name lock around the
//!   check-fetch-store sequence, so concurrent lookups of the same name issue
//!   a single request and the others observe its result.

use crate::core::error::Result;
use crate::core::model::EntityDetail;
use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub capacity: NonZeroUsize,
    pub ttl: Option<Duration>,
}

impl CachePolicy {
    pub fn new(capacity: NonZeroUsize, ttl: Option<Duration>) -> Self {
        Self { capacity, ttl }
    }

    fn is_expired(&self, stored_at: Instant) -> bool {
        self.ttl.is_some_and(|ttl| stored_at.elapsed() >= ttl)
    }
}

struct CacheEntry {
    detail: Arc<EntityDetail>,
    stored_at: Instant,
}

pub struct DetailCache {
    policy: CachePolicy,
    entries: Mutex<LruCache<String, CacheEntry>>,
    key_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DetailCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: Mutex::new(LruCache::new(policy.capacity)),
            key_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached record for `name`, if present and not expired
    pub fn get(&self, name: &str) -> Option<Arc<EntityDetail>> {
        let mut entries = lock(&self.entries);

        let expired = match entries.get(name) {
            Some(entry) if !self.policy.is_expired(entry.stored_at) => {
                return Some(Arc::clone(&entry.detail));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            log::debug!("Cache entry for {name} expired");
            entries.pop(name);
        }
        None
    }

    /// Store a record, replacing any previous one for the same name
    pub fn put(&self, name: &str, detail: impl Into<Arc<EntityDetail>>) -> Arc<EntityDetail> {
        let detail = detail.into();
        let entry = CacheEntry {
            detail: Arc::clone(&detail),
            stored_at: Instant::now(),
        };

        if let Some((evicted, _)) = lock(&self.entries).push(name.to_string(), entry) {
            if evicted != name {
                log::debug!("Evicted {evicted} from detail cache");
            }
        }
        detail
    }

    /// Serve `name` from the cache, or fetch it once and store the result.
    ///
    /// Failed fetches are returned to the caller and not cached.
    pub fn get_or_fetch<F>(&self, name: &str, fetch: F) -> Result<Arc<EntityDetail>>
    where
        F: FnOnce(&str) -> Result<EntityDetail>,
    {
        if let Some(hit) = self.get(name) {
            log::debug!("Cache hit for {name}");
            return Ok(hit);
        }

        let key_lock = Arc::clone(lock(&self.key_locks).entry(name.to_string()).or_default());

        let result = {
            let _guard = lock(&key_lock);
            match self.get(name) {
                Some(hit) => {
                    log::debug!("Cache hit for {name} after waiting on in-flight fetch");
                    Ok(hit)
                }
                None => fetch(name).map(|detail| {
                    log::debug!("Cache miss for {name}, fetched and cached");
                    self.put(name, detail)
                }),
            }
        };

        self.release_key_lock(name, &key_lock);
        result
    }

    fn release_key_lock(&self, name: &str, key_lock: &Arc<Mutex<()>>) {
        let mut key_locks = lock(&self.key_locks);
        // One reference in the map, one held by the caller
        if Arc::strong_count(key_lock) == 2 {
            key_locks.remove(name);
        }
    }
}
