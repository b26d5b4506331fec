//! Leaf-level iteration.

use super::node::{Node, NodeId};

/// Ascending iterator over the pairs of a B+Tree.
pub struct Iter<'a, K, V> {
    arena: &'a [Node<K, V>],
    leaf: Option<NodeId>,
    slot: usize,
}

impl<'a, K: Ord, V> Iter<'a, K, V> {
    /// Starts at `slot` of `leaf`.
    pub(crate) fn new_at(
        arena: &'a [Node<K, V>],
        leaf: Option<NodeId>,
        slot: usize,
    ) -> Self {
        Self {
            arena,
            leaf,
            slot,
        }
    }
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let mut id = self.leaf?;
        while self.slot >= arena[id].len() {
            match arena[id].next {
                Some(next) => id = next,
                None => {
                    self.leaf = None;
                    return None;
                }
            }
            self.slot = 0;
        }
        self.leaf = Some(id);
        let node = &arena[id];
        let key = &node.keys[self.slot];
        self.slot += 1;
        Some((key, &node.values[self.slot - 1]))
    }
}
