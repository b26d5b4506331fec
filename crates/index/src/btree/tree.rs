//! Arena-backed B+Tree.
//!
//! Nodes live in a `Vec` and refer to each other by position. Values are kept in
//! the leaves only; leaves are chained left to right for range scans.

use super::iter::Iter;
use super::node::{Node, NodeId};
use crate::stats::AccessStats;
use crate::traits::{Index, OrderedIndex};
use alloc::vec::Vec;
use tracing::trace;

/// Default order (branching factor) for the B+Tree.
pub const DEFAULT_ORDER: usize = 32;

/// Smallest order that still splits into two non-empty halves.
const MIN_ORDER: usize = 3;

/// A B+Tree mapping each key to a single value, with linked leaves for range scans.
#[derive(Clone, Debug)]
pub struct BPlusTree<K, V> {
    arena: Vec<Node<K, V>>,
    root: NodeId,
    /// A node splits once it holds this many keys.
    order: usize,
    count: usize,
    stats: AccessStats,
}

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Creates an empty tree whose nodes split on reaching `order` keys.
    pub fn new(order: usize) -> Self {
        Self {
            arena: alloc::vec![Node::leaf()],
            root: 0,
            order: order.max(MIN_ORDER),
            count: 0,
            stats: AccessStats::new(),
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the number of levels, 1 for a single leaf.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut id = self.root;
        while !self.arena[id].is_leaf {
            id = self.arena[id].children[0];
            height += 1;
        }
        height
    }

    /// Iterates over every pair in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new_at(&self.arena, Some(self.edge_leaf(false)), 0)
    }

    fn push(&mut self, node: Node<K, V>) -> NodeId {
        self.arena.push(node);
        self.arena.len() - 1
    }

    /// Walks from the root to the leaf covering `key`. Also returns the number
    /// of nodes visited.
    fn descend(&self, key: &K) -> (NodeId, usize) {
        let mut id = self.root;
        let mut visited = 1;
        while !self.arena[id].is_leaf {
            id = self.arena[id].child_for(key);
            visited += 1;
        }
        (id, visited)
    }

    /// Moves the upper half of an overfull node into a new right sibling.
    ///
    /// A leaf copies its first upper key into the parent as separator; an
    /// internal node moves its middle key up instead of keeping it.
    fn split(&mut self, id: NodeId) {
        let node = &mut self.arena[id];
        let mid = node.len() / 2;
        let mut right = if node.is_leaf { Node::leaf() } else { Node::internal() };
        right.parent = node.parent;

        let separator = if node.is_leaf {
            right.keys = node.keys.split_off(mid);
            right.values = node.values.split_off(mid);
            right.next = node.next;
            right.keys[0].clone()
        } else {
            right.keys = node.keys.split_off(mid + 1);
            right.children = node.children.split_off(mid + 1);
            match node.keys.pop() {
                Some(k) => k,
                None => return,
            }
        };

        let right_id = self.push(right);
        if self.arena[id].is_leaf {
            self.arena[id].next = Some(right_id);
        } else {
            let moved = self.arena[right_id].children.clone();
            for child in moved {
                self.arena[child].parent = Some(right_id);
            }
        }

        trace!(
            node = id,
            sibling = right_id,
            leaf = self.arena[id].is_leaf,
            "split B+Tree node"
        );
        self.attach(id, separator, right_id);
    }

    /// Hangs `right` next to `left` under their parent, growing a new root when
    /// `left` was the root.
    fn attach(&mut self, left: NodeId, separator: K, right: NodeId) {
        let Some(parent) = self.arena[left].parent else {
            let mut root = Node::internal();
            root.keys.push(separator);
            root.children.push(left);
            root.children.push(right);
            let root_id = self.push(root);
            self.arena[left].parent = Some(root_id);
            self.arena[right].parent = Some(root_id);
            self.root = root_id;
            return;
        };

        let slot = self.arena[parent]
            .children
            .iter()
            .position(|&c| c == left)
            .unwrap_or_else(|| self.arena[parent].lower_bound(&separator));
        self.arena[parent].keys.insert(slot, separator);
        self.arena[parent].children.insert(slot + 1, right);
        self.arena[right].parent = Some(parent);

        if self.arena[parent].len() >= self.order {
            self.split(parent);
        }
    }

    /// Returns the leftmost leaf, or the rightmost one when `rightmost` is set.
    fn edge_leaf(&self, rightmost: bool) -> NodeId {
        let mut id = self.root;
        while !self.arena[id].is_leaf {
            let children = &self.arena[id].children;
            id = if rightmost {
                children[children.len() - 1]
            } else {
                children[0]
            };
        }
        id
    }
}

impl<K: Ord + Clone, V> Index<K, V> for BPlusTree<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        let (id, _) = self.descend(&key);
        let leaf = &mut self.arena[id];
        let slot = leaf.lower_bound(&key);
        if leaf.keys.get(slot) == Some(&key) {
            return Some(core::mem::replace(&mut leaf.values[slot], value));
        }
        leaf.keys.insert(slot, key);
        leaf.values.insert(slot, value);
        self.count += 1;

        if self.arena[id].len() >= self.order {
            self.split(id);
        }
        None
    }

    fn get(&self, key: &K) -> Option<&V> {
        let (id, visited) = self.descend(key);
        self.stats.record(visited);
        let leaf = &self.arena[id];
        leaf.position(key).map(|slot| &leaf.values[slot])
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    fn len(&self) -> usize {
        self.count
    }

    fn stats(&self) -> &AccessStats {
        &self.stats
    }

    fn as_ordered(&self) -> Option<&dyn OrderedIndex<K, V>> {
        Some(self)
    }
}

impl<K: Ord + Clone, V> OrderedIndex<K, V> for BPlusTree<K, V> {
    fn first_key(&self) -> Option<&K> {
        self.arena[self.edge_leaf(false)].keys.first()
    }

    fn last_key(&self) -> Option<&K> {
        self.arena[self.edge_leaf(true)].keys.last()
    }

    fn range(&self, low: &K, high: &K) -> Vec<(&K, &V)> {
        if low > high {
            return Vec::new();
        }
        let (id, visited) = self.descend(low);
        self.stats.record(visited);
        let start = self.arena[id].lower_bound(low);
        Iter::new_at(&self.arena, Some(id), start)
            .take_while(|(k, _)| *k <= high)
            .collect()
    }
}
