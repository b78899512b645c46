//! Memo table of solved candidate shapes
//!
//! Keys are canonical sets: shifted so their minimum is zero and folded onto
//! one orientation of their mirror pair. Entries are written once per shape
//! and never evicted.

use super::Score;
use crate::core::IntervalSet;
use rustc_hash::FxHashMap;

/// Best score for a shape, with the guess that achieves it in the key's frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub score: Score,
    pub guess: i32,
}

/// Lookup counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the table
    #[must_use]
    pub fn hit_rate(self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            return 0.0;
        }
        self.hits as f64 / lookups as f64
    }
}

#[derive(Debug, Default)]
pub struct StrategyCache {
    entries: FxHashMap<IntervalSet, CacheEntry>,
    stats: CacheStats,
}

impl StrategyCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a canonical shape, counting the hit or miss
    pub fn get(&mut self, key: &IntervalSet) -> Option<CacheEntry> {
        let entry = self.entries.get(key).copied();
        if entry.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        entry
    }

    /// Record the result for a shape seen for the first time
    pub fn insert(&mut self, key: IntervalSet, entry: CacheEntry) {
        debug_assert_eq!(key.lowest(), Some(0), "cache keys are zero-based");
        let previous = self.entries.insert(key, entry);
        debug_assert!(previous.is_none(), "shape solved twice");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_hit() {
        let mut cache = StrategyCache::new();
        let key = IntervalSet::range(0, 4);
        let entry = CacheEntry {
            score: Score::new(2, 8),
            guess: 3,
        };

        assert_eq!(cache.get(&key), None);
        cache.insert(key.clone(), entry);
        assert_eq!(cache.get(&key), Some(entry));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = StrategyCache::new();
        assert!(cache.is_empty());
        assert!(cache.stats().hit_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn hit_rate() {
        let stats = CacheStats { hits: 3, misses: 1 };
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }
}
