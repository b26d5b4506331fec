//! Balanced tree index.
//!
//! `TreeIndex` wraps the standard ordered map. It is the "tree" backend: sorted
//! iteration, first/last key and inclusive range sub-maps.

use crate::stats::AccessStats;
use crate::traits::{Index, OrderedIndex};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// An ordered index backed by a balanced search tree.
#[derive(Clone, Debug)]
pub struct TreeIndex<K, V> {
    map: BTreeMap<K, V>,
    stats: AccessStats,
}

impl<K: Ord, V> TreeIndex<K, V> {
    /// Creates an empty tree index.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
            stats: AccessStats::new(),
        }
    }
}

impl<K: Ord, V> Default for TreeIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Index<K, V> for TreeIndex<K, V> {
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

    fn stats(&self) -> &AccessStats {
        &self.stats
    }

    fn as_ordered(&self) -> Option<&dyn OrderedIndex<K, V>> {
        Some(self)
    }
}

impl<K: Ord, V> OrderedIndex<K, V> for TreeIndex<K, V> {
    fn first_key(&self) -> Option<&K> {
        self.map.keys().next()
    }

    fn last_key(&self) -> Option<&K> {
        self.map.keys().next_back()
    }

    fn range(&self, low: &K, high: &K) -> Vec<(&K, &V)> {
        // BTreeMap::range panics on inverted bounds
        if low > high {
            return Vec::new();
        }
        self.stats.record(1);
        self.map.range(low..=high).collect()
    }
}
