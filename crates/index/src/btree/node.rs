//! B+Tree nodes.

use alloc::vec::Vec;

/// Position of a node in the tree's arena.
pub type NodeId = usize;

/// A leaf holds sorted keys with their values and a link to its right sibling.
/// An internal node holds separator keys and one more child than it has keys.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub keys: Vec<K>,
    /// Leaf values, parallel to `keys`. Empty in internal nodes.
    pub values: Vec<V>,
    /// Children of an internal node. Empty in leaves.
    pub children: Vec<NodeId>,
    /// Right sibling of a leaf.
    pub next: Option<NodeId>,
    pub is_leaf: bool,
    pub parent: Option<NodeId>,
}

impl<K: Ord, V> Node<K, V> {
    fn empty(is_leaf: bool) -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            children: Vec::new(),
            next: None,
            is_leaf,
            parent: None,
        }
    }

    pub fn leaf() -> Self {
        Self::empty(true)
    }

    pub fn internal() -> Self {
        Self::empty(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Index of the first key not less than `key`.
    pub fn lower_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Index of `key` in a leaf.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.keys.binary_search(key).ok()
    }

    /// Child of an internal node whose subtree covers `key`. Keys equal to a
    /// separator live to its right.
    pub fn child_for(&self, key: &K) -> NodeId {
        debug_assert!(!self.is_leaf);
        let slot = self.keys.partition_point(|k| k <= key);
        self.children[slot.min(self.children.len() - 1)]
    }
}
