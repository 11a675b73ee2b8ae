use crate::modules::marketplace::ProductResult;
use crate::modules::search::domain::SearchKey;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

/// Cached entry with TTL support
#[derive(Debug, Clone)]
struct CacheEntry {
    results: Vec<ProductResult>,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(results: Vec<ProductResult>, ttl: Duration) -> Self {
        Self {
            results,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// TTL cache for merged search result sets, keyed by the composite
/// `SearchKey` shared with the failure tracker.
///
/// Expiry is checked lazily on read; there is no background sweep. Entries
/// are overwritten on re-set and never mutated in place.
#[derive(Debug)]
pub struct SearchCache {
    cache: DashMap<SearchKey, CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    max_entries: usize,
}

impl SearchCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            max_entries,
        }
    }

    /// Get cached results if present and not expired. Expired entries are
    /// removed on the spot and count as misses.
    pub fn get(&self, key: &SearchKey) -> Option<Vec<ProductResult>> {
        if let Some(entry) = self.cache.get(key) {
            if !entry.is_expired() {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for {}", key.describe());
                return Some(entry.results.clone());
            }
            drop(entry);
            self.cache.remove(key);
            debug!("Removed expired cache entry for {}", key.describe());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for {}", key.describe());
        None
    }

    /// Insert or overwrite the entry for a key with the given TTL.
    pub fn set(&self, key: SearchKey, results: Vec<ProductResult>, ttl: Duration) {
        if self.cache.len() >= self.max_entries && !self.cache.contains_key(&key) {
            self.evict_oldest_entries();
        }

        debug!(
            "Caching {} results for {} with TTL {:?}",
            results.len(),
            key.describe(),
            ttl
        );
        self.cache.insert(key, CacheEntry::new(results, ttl));
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.cache.len(),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    pub fn clear(&self) {
        self.cache.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }

    /// Evict oldest entries down to 90% of capacity when the cache is full
    fn evict_oldest_entries(&self) {
        let current_size = self.cache.len();
        if current_size < self.max_entries {
            return;
        }

        let mut entries: Vec<(SearchKey, Instant)> = self
            .cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().created_at))
            .collect();
        entries.sort_by_key(|(_, created_at)| *created_at);

        let target_size = (self.max_entries * 9) / 10;
        let entries_to_evict = current_size.saturating_sub(target_size).max(1);

        for (key, _) in entries.into_iter().take(entries_to_evict) {
            self.cache.remove(&key);
        }
        self.evictions
            .fetch_add(entries_to_evict as u64, Ordering::Relaxed);

        debug!(
            "Evicted {} old cache entries (was {}, now {})",
            entries_to_evict,
            current_size,
            self.cache.len()
        );
    }
}
