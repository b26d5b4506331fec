//! Index trait definitions for minirel.
//!
//! This module defines the `Index` capability every backend implements, the
//! `OrderedIndex` extension for sorted backends, and `IndexKind`, which names a
//! backend and builds a boxed instance of it.

use crate::btree::BPlusTree;
use crate::linhash::LinHashMap;
use crate::stats::AccessStats;
use crate::tree::TreeIndex;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

/// A key/value map used as a table index.
///
/// Every backend has map semantics: at most one value per key, and `put` on an
/// existing key replaces the stored value.
pub trait Index<K, V> {
    /// Stores `value` under `key`, returning the value previously stored there.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value stored under `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns every stored pair. Ordered backends return them in ascending key order.
    fn entries(&self) -> Vec<(&K, &V)>;

    /// Returns the number of stored pairs.
    fn len(&self) -> usize;

    /// Returns true if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the index contains the given key.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the lookup statistics for this index.
    fn stats(&self) -> &AccessStats;

    /// Returns this index as an ordered index, if the backend is sorted.
    fn as_ordered(&self) -> Option<&dyn OrderedIndex<K, V>> {
        None
    }
}

/// Trait for indexes that keep their keys sorted.
pub trait OrderedIndex<K, V>: Index<K, V> {
    /// Returns the smallest key.
    fn first_key(&self) -> Option<&K>;

    /// Returns the largest key.
    fn last_key(&self) -> Option<&K>;

    /// Returns every pair with `low <= key <= high`, in ascending key order.
    fn range(&self, low: &K, high: &K) -> Vec<(&K, &V)>;
}

/// The index backends a table can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IndexKind {
    /// Linear hashing (`LinHashMap`).
    #[default]
    LinearHash,
    /// Balanced search tree (`TreeIndex`).
    Tree,
    /// Sorted range index (`BPlusTree`).
    Range,
}

/// Sizing parameters used when building an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOptions {
    /// Initial number of home buckets for linear hashing.
    pub initial_buckets: usize,
    /// Maximum number of keys per B+Tree node.
    pub btree_order: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            initial_buckets: 4,
            btree_order: crate::btree::DEFAULT_ORDER,
        }
    }
}

impl IndexKind {
    /// Builds an empty index of this kind.
    pub fn build<K, V>(self, options: IndexOptions) -> Box<dyn Index<K, V> + Send + Sync>
    where
        K: Hash + Ord + Clone + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        match self {
            IndexKind::LinearHash => Box::new(LinHashMap::with_buckets(options.initial_buckets)),
            IndexKind::Tree => Box::new(TreeIndex::new()),
            IndexKind::Range => Box::new(BPlusTree::new(options.btree_order)),
        }
    }

    /// Returns true if the backend keeps its keys sorted.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, IndexKind::LinearHash)
    }

    /// Returns the configuration name of this backend.
    pub fn name(&self) -> &'static str {
        match self {
            IndexKind::LinearHash => "linear_hash",
            IndexKind::Tree => "tree",
            IndexKind::Range => "range",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
