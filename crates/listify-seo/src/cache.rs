//! Bounded, expiring cache of search-result counts keyed by exact keyword.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum live entries. `0` disables caching.
    pub capacity: usize,
    /// Entries at least this old are treated as absent.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// LRU cache with per-entry expiry for popularity counts.
///
/// Safe to share across tasks. The lock is held only for map updates, never
/// across a network call.
#[derive(Debug)]
pub struct PopularityCache {
    config: CacheConfig,
    state: Mutex<LruState>,
}

impl PopularityCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            state: Mutex::new(LruState::default()),
        }
    }

    /// A cache that stores nothing. Every lookup misses.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(CacheConfig {
            capacity: 0,
            ttl: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Returns the cached count for `keyword` if present and not expired.
    pub async fn get(&self, keyword: &str) -> Option<u64> {
        if self.config.capacity == 0 {
            return None;
        }
        let mut state = self.state.lock().await;
        state.get(keyword, Instant::now(), self.config.ttl)
    }

    pub async fn insert(&self, keyword: &str, total_results: u64) {
        if self.config.capacity == 0 {
            return;
        }
        let mut state = self.state.lock().await;
        state.insert(
            keyword,
            total_results,
            Instant::now(),
            self.config.capacity,
            self.config.ttl,
        );
    }

    /// Number of stored entries, including any not yet purged after expiry.
    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for PopularityCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[derive(Debug)]
struct Entry {
    total_results: u64,
    inserted_at: Instant,
    last_used: u64,
}

/// Clock-free core so expiry and eviction can be tested with fixed instants.
#[derive(Debug, Default)]
struct LruState {
    entries: HashMap<String, Entry>,
    /// `last_used` tick -> key, oldest first.
    recency: BTreeMap<u64, String>,
    tick: u64,
}

impl LruState {
    fn get(&mut self, key: &str, now: Instant, ttl: Duration) -> Option<u64> {
        let entry = self.entries.get(key)?;
        if now.saturating_duration_since(entry.inserted_at) >= ttl {
            self.remove(key);
            return None;
        }
        let previous = entry.last_used;
        let total_results = entry.total_results;
        let tick = self.next_tick();
        self.recency.remove(&previous);
        self.recency.insert(tick, key.to_owned());
        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_used = tick;
        }
        Some(total_results)
    }

    fn insert(
        &mut self,
        key: &str,
        total_results: u64,
        now: Instant,
        capacity: usize,
        ttl: Duration,
    ) {
        if capacity == 0 {
            return;
        }
        self.remove(key);

        if self.entries.len() >= capacity {
            self.purge_expired(now, ttl);
        }
        while self.entries.len() >= capacity {
            let Some((_, oldest)) = self.recency.pop_first() else {
                break;
            };
            self.entries.remove(&oldest);
        }

        let tick = self.next_tick();
        self.recency.insert(tick, key.to_owned());
        self.entries.insert(
            key.to_owned(),
            Entry {
                total_results,
                inserted_at: now,
                last_used: tick,
            },
        );
    }

    fn remove(&mut self, key: &str) {
        if let Some(entry) = self.entries.remove(key) {
            self.recency.remove(&entry.last_used);
        }
    }

    fn purge_expired(&mut self, now: Instant, ttl: Duration) {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, e)| now.saturating_duration_since(e.inserted_at) >= ttl)
            .map(|(k, _)| k.clone())
            .collect();
        for key in expired {
            self.remove(&key);
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    #[test]
    fn hit_within_ttl() {
        let mut state = LruState::default();
        let t0 = Instant::now();
        state.insert("mug", 42, t0, 4, TTL);
        assert_eq!(state.get("mug", t0 + Duration::from_secs(299), TTL), Some(42));
    }

    #[test]
    fn entry_expires_at_ttl() {
        let mut state = LruState::default();
        let t0 = Instant::now();
        state.insert("mug", 42, t0, 4, TTL);
        assert_eq!(state.get("mug", t0 + TTL, TTL), None);
        assert!(state.entries.is_empty(), "expired entry should be dropped");
        assert!(state.recency.is_empty());
    }

    #[test]
    fn reading_does_not_extend_ttl() {
        let mut state = LruState::default();
        let t0 = Instant::now();
        state.insert("mug", 42, t0, 4, TTL);
        assert_eq!(state.get("mug", t0 + Duration::from_secs(200), TTL), Some(42));
        assert_eq!(state.get("mug", t0 + Duration::from_secs(301), TTL), None);
    }

    #[test]
    fn evicts_least_recently_used_at_capacity() {
        let mut state = LruState::default();
        let t0 = Instant::now();
        state.insert("a", 1, t0, 2, TTL);
        state.insert("b", 2, t0, 2, TTL);
        // Touch "a" so "b" becomes the eviction candidate.
        assert_eq!(state.get("a", t0, TTL), Some(1));
        state.insert("c", 3, t0, 2, TTL);

        assert_eq!(state.get("a", t0, TTL), Some(1));
        assert_eq!(state.get("b", t0, TTL), None);
        assert_eq!(state.get("c", t0, TTL), Some(3));
        assert_eq!(state.entries.len(), 2);
    }

    #[test]
    fn expired_entries_are_purged_before_evicting_live_ones() {
        let mut state = LruState::default();
        let t0 = Instant::now();
        state.insert("old", 1, t0, 2, TTL);
        let later = t0 + Duration::from_secs(200);
        state.insert("fresh", 2, later, 2, TTL);
        // Touch "old" so plain LRU would pick "fresh" as the victim.
        assert_eq!(state.get("old", t0 + Duration::from_secs(250), TTL), Some(1));
        let now = t0 + Duration::from_secs(310);
        state.insert("new", 3, now, 2, TTL);

        assert_eq!(state.get("fresh", now, TTL), Some(2));
        assert_eq!(state.get("new", now, TTL), Some(3));
        assert_eq!(state.entries.len(), 2);
    }

    #[test]
    fn reinserting_refreshes_value_and_timestamp() {
        let mut state = LruState::default();
        let t0 = Instant::now();
        state.insert("mug", 1, t0, 4, TTL);
        let t1 = t0 + Duration::from_secs(250);
        state.insert("mug", 2, t1, 4, TTL);

        assert_eq!(state.get("mug", t0 + Duration::from_secs(400), TTL), Some(2));
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.recency.len(), 1);
    }

    #[test]
    fn keys_are_exact_strings() {
        let mut state = LruState::default();
        let t0 = Instant::now();
        state.insert("Mug", 1, t0, 4, TTL);
        assert_eq!(state.get("mug", t0, TTL), None);
        assert_eq!(state.get("Mug ", t0, TTL), None);
    }

    #[tokio::test]
    async fn disabled_cache_never_stores() {
        let cache = PopularityCache::disabled();
        cache.insert("mug", 42).await;
        assert_eq!(cache.get("mug").await, None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn default_cache_round_trips_within_ttl() {
        let cache = PopularityCache::default();
        assert_eq!(cache.config(), CacheConfig::default());
        cache.insert("mug", 42).await;
        assert_eq!(cache.get("mug").await, Some(42));
        assert_eq!(cache.len().await, 1);
    }
}
