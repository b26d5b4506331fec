//! Hash index implementation for minirel.
//!
//! `HashIndex` is a thin wrapper over `hashbrown::HashMap`. Hash joins build one
//! over their build side, keyed by the join columns.

use crate::stats::AccessStats;
use crate::traits::Index;
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashMap;

/// A hash-based index for O(1) point queries.
#[derive(Clone, Debug)]
pub struct HashIndex<K, V> {
    /// The underlying map.
    map: HashMap<K, V>,
    /// Statistics for this index.
    stats: AccessStats,
}

impl<K: Eq + Hash, V> HashIndex<K, V> {
    /// Creates a new hash index.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            stats: AccessStats::new(),
        }
    }

    /// Creates a hash index with room for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            stats: AccessStats::new(),
        }
    }
}

impl<K: Eq + Hash, V> Default for HashIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> Index<K, V> for HashIndex<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.stats.record(1);
        self.map.get(key)
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.map.iter().collect()
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn stats(&self) -> &AccessStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_index_put_get() {
        let mut index = HashIndex::new();

        assert_eq!(index.put(1, 100), None);
        assert_eq!(index.put(2, 200), None);

        assert_eq!(index.get(&1), Some(&100));
        assert_eq!(index.get(&2), Some(&200));
        assert_eq!(index.get(&3), None);
    }

    #[test]
    fn test_hash_index_replace() {
        let mut index = HashIndex::with_capacity(4);

        index.put(1, 100);
        assert_eq!(index.put(1, 101), Some(100));

        assert_eq!(index.get(&1), Some(&101));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_hash_index_contains_key() {
        let mut index = HashIndex::new();
        index.put("Fox", 1);

        assert!(index.contains_key(&"Fox"));
        assert!(!index.contains_key(&"Paramount"));
        assert_eq!(index.entries().len(), 1);
    }
}
