//! Memoization table for minimax.
//!
//! Keyed by `(board, side to move, remaining depth)`. The evaluator and the
//! simulator depend on nothing else, so a key fully determines its subtree
//! and entries never need invalidating. They live as long as the cache
//! object and are reused across top-level searches.

use std::sync::{Arc, Mutex, MutexGuard};

use rustc_hash::FxHashMap;

use crate::core::{Board, Side};

use super::minimax::SearchResult;

/// Cache key for one search node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub board: Board,
    pub side: Side,
    pub depth: i32,
}

impl SearchKey {
    #[must_use]
    pub fn new(board: Board, side: Side, depth: i32) -> Self {
        Self { board, side, depth }
    }
}

/// Unbounded search cache.
#[derive(Clone, Debug, Default)]
pub struct SearchCache {
    entries: FxHashMap<SearchKey, SearchResult>,
    hits: u64,
    misses: u64,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a node, counting the hit or miss.
    pub fn get(&mut self, key: &SearchKey) -> Option<SearchResult> {
        match self.entries.get(key) {
            Some(result) => {
                self.hits += 1;
                Some(*result)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look up a node without touching the counters.
    #[must_use]
    pub fn peek(&self, key: &SearchKey) -> Option<&SearchResult> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: SearchKey, result: SearchResult) {
        self.entries.insert(key, result);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// A `SearchCache` shared between strategies, possibly on different threads.
///
/// A search holds the lock for its whole duration, so every
/// lookup-or-insert it performs is atomic with respect to other searches.
#[derive(Clone, Debug, Default)]
pub struct SharedSearchCache {
    inner: Arc<Mutex<SearchCache>>,
}

impl SharedSearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the cache.
    ///
    /// A poisoned lock is recovered: a panicking search can only have left
    /// complete entries behind.
    pub fn lock(&self) -> MutexGuard<'_, SearchCache> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of cached nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether two handles point at the same cache.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<SearchCache> for SharedSearchCache {
    fn from(cache: SearchCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: i32, best_move: Option<usize>) -> SearchResult {
        SearchResult { score, best_move }
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = SearchCache::new();
        let key = SearchKey::new(Board::standard(), Side::A, 3);

        assert!(cache.get(&key).is_none());
        cache.insert(key, result(-2, Some(4)));

        assert_eq!(cache.get(&key), Some(result(-2, Some(4))));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_key_distinguishes_side_and_depth() {
        let mut cache = SearchCache::new();
        let board = Board::standard();
        cache.insert(SearchKey::new(board, Side::A, 3), result(1, Some(0)));

        assert!(cache.peek(&SearchKey::new(board, Side::B, 3)).is_none());
        assert!(cache.peek(&SearchKey::new(board, Side::A, 2)).is_none());
        assert!(cache.peek(&SearchKey::new(board, Side::A, 3)).is_some());
    }

    #[test]
    fn test_clear() {
        let mut cache = SearchCache::new();
        let key = SearchKey::new(Board::standard(), Side::A, 1);
        cache.insert(key, result(0, None));
        let _ = cache.get(&key);

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn test_shared_handles_see_same_entries() {
        let shared = SharedSearchCache::new();
        let other = shared.clone();
        let key = SearchKey::new(Board::standard(), Side::A, 2);

        shared.lock().insert(key, result(5, Some(2)));

        assert!(shared.ptr_eq(&other));
        assert_eq!(other.len(), 1);
        assert_eq!(other.lock().peek(&key), Some(&result(5, Some(2))));
    }

    #[test]
    fn test_shared_cache_across_threads() {
        let shared = SharedSearchCache::new();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = shared.clone();
                std::thread::spawn(move || {
                    let key = SearchKey::new(Board::new(i), Side::A, 1);
                    cache.lock().insert(key, result(i as i32, None));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 4);
    }
}
