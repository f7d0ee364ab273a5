use lru::LruCache;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::graph::{Identity, ProfileMetrics};

/// Which external lookup a cache entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Profile,
    Followers,
    Following,
}

/// Cache key: one entry per (lookup kind, account).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    pub kind: LookupKind,
    pub identity: Identity,
}

impl LookupKey {
    pub fn new(kind: LookupKind, identity: &str) -> Self {
        Self {
            kind,
            identity: identity.to_string(),
        }
    }
}

/// Cached lookup result. Failures are stored as their default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupValue {
    Profile(ProfileMetrics),
    Relations(Vec<Identity>),
}

/// Thread-safe memoization cache for GitHub lookups
///
/// Lives for one crawl. Created unbounded so an entry, once stored, is never
/// evicted before the run ends.
pub struct LookupCache {
    cache: Mutex<LruCache<LookupKey, LookupValue>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl LookupCache {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(LruCache::unbounded()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Get a cached value
    pub fn get(&self, key: &LookupKey) -> Option<LookupValue> {
        self.cache.lock().unwrap().get(key).cloned()
    }

    /// Store a value in the cache
    pub fn put(&self, key: LookupKey, value: LookupValue) {
        self.cache.lock().unwrap().put(key, value);
    }

    /// Return the cached value for `key`, or run `compute` once and store its result.
    ///
    /// The lock is not held across `compute`, so two concurrent callers missing
    /// on the same key may both compute; the crawler is single-writer and never
    /// does that.
    pub async fn get_or_compute<F, Fut>(&self, key: LookupKey, compute: F) -> LookupValue
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = LookupValue>,
    {
        if let Some(cached) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::debug!("Cache hit for {:?} {}", key.kind, key.identity);
            return cached;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute().await;
        self.put(key, value.clone());
        value
    }

    /// Get the current number of cached entries
    pub fn len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().unwrap().is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new()
    }
}
