//! minirel Index - index structures for the minirel relational engine.
//!
//! This crate provides the `Index` capability and its backends:
//!
//! - `LinHashMap`: linear hashing, growing one bucket per split
//! - `TreeIndex`: balanced tree with ordered iteration and range sub-maps
//! - `BPlusTree`: arena-based B+Tree with linked leaves for range scans
//! - `HashIndex`: plain hash map, used as the transient side of hash joins
//!
//! # Example
//!
//! ```rust
//! use minirel_index::{BPlusTree, Index, LinHashMap, OrderedIndex};
//!
//! let mut hash = LinHashMap::with_buckets(2);
//! for k in 0..20 {
//!     hash.put(k, k * 10);
//! }
//! assert_eq!(hash.get(&7), Some(&70));
//! assert_eq!(hash.entries().len(), 20);
//!
//! let mut range = BPlusTree::new(4);
//! for k in [30, 10, 20, 40] {
//!     range.put(k, ());
//! }
//! let keys: Vec<i32> = range.range(&15, &35).into_iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![20, 30]);
//! ```

#![no_std]

extern crate alloc;

pub mod btree;
pub mod hash;
pub mod linhash;
pub mod stats;
pub mod traits;
pub mod tree;

pub use btree::BPlusTree;
pub use hash::HashIndex;
pub use linhash::{LinHashMap, SLOTS};
pub use stats::AccessStats;
pub use traits::{Index, IndexKind, IndexOptions, OrderedIndex};
pub use tree::TreeIndex;
