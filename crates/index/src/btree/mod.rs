//! B+Tree range index for minirel.
//!
//! This module provides an arena-based B+Tree whose leaves are linked, so ordered
//! scans and range queries walk the leaf level without revisiting internal nodes.

mod iter;
mod node;
mod tree;

pub use iter::Iter;
pub use node::{Node, NodeId};
pub use tree::{BPlusTree, DEFAULT_ORDER};
