//! Linear hashing.
//!
//! `LinHashMap` grows one home bucket at a time: whenever an insert finds its home
//! bucket full, the bucket under the split pointer is split and its entries are
//! redistributed between itself and the newly appended home bucket. A full round of
//! `mod1` splits doubles the number of home buckets without ever rehashing the whole
//! table at once.
//!
//! Buckets live in an arena and are addressed by `BucketId`. Overflow chains link
//! buckets forward through `next` and backward through `parent`; the backward link
//! is only used to unlink overflow buckets that a reorganization left empty.

use crate::stats::AccessStats;
use crate::traits::Index;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use hashbrown::hash_map::DefaultHashBuilder;
use tracing::trace;

/// Number of key/value slots in a bucket.
pub const SLOTS: usize = 4;

/// Bucket identifier in the arena.
pub type BucketId = usize;

/// A fixed capacity bucket holding parallel key and value arrays.
#[derive(Clone, Debug)]
struct Bucket<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
    /// Next bucket in the overflow chain.
    next: Option<BucketId>,
    /// Predecessor in the overflow chain, None for home buckets.
    parent: Option<BucketId>,
}

impl<K, V> Bucket<K, V> {
    fn new(parent: Option<BucketId>) -> Self {
        Self {
            keys: Vec::with_capacity(SLOTS),
            values: Vec::with_capacity(SLOTS),
            next: None,
            parent,
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.keys.len() >= SLOTS
    }

    #[inline]
    fn push(&mut self, key: K, value: V) {
        debug_assert!(!self.is_full());
        self.keys.push(key);
        self.values.push(value);
    }
}

/// A hash map based on linear hashing.
#[derive(Clone, Debug)]
pub struct LinHashMap<K, V, S = DefaultHashBuilder> {
    /// Arena of home and overflow buckets.
    arena: Vec<Bucket<K, V>>,
    /// Home bucket of each address, `mod1 + split` of them.
    home: Vec<BucketId>,
    /// Arena slots of unlinked overflow buckets, reused before growing the arena.
    free: Vec<BucketId>,
    mod1: usize,
    mod2: usize,
    /// Next home bucket to split in the current round.
    split: usize,
    /// Number of stored pairs.
    count: usize,
    hash_builder: S,
    stats: AccessStats,
}

impl<K: Hash + Eq, V> LinHashMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map with a single home bucket.
    pub fn new() -> Self {
        Self::with_buckets(1)
    }

    /// Creates an empty map with `buckets` home buckets (at least one).
    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_buckets_and_hasher(buckets, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V> Default for LinHashMap<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LinHashMap<K, V, S> {
    /// Creates an empty map with `buckets` home buckets using the given hasher.
    pub fn with_buckets_and_hasher(buckets: usize, hash_builder: S) -> Self {
        let mod1 = buckets.max(1);
        let mut arena = Vec::with_capacity(mod1);
        let mut home = Vec::with_capacity(mod1);
        for id in 0..mod1 {
            arena.push(Bucket::new(None));
            home.push(id);
        }
        Self {
            arena,
            home,
            free: Vec::new(),
            mod1,
            mod2: 2 * mod1,
            split: 0,
            count: 0,
            hash_builder,
            stats: AccessStats::new(),
        }
    }

    /// Returns the slot capacity of the home buckets, `SLOTS * (mod1 + split)`.
    ///
    /// This is a capacity, not an entry count; see [`Index::len`].
    pub fn size(&self) -> usize {
        SLOTS * (self.mod1 + self.split)
    }

    /// Returns the modulus of the current round.
    pub fn mod1(&self) -> usize {
        self.mod1
    }

    /// Returns the modulus used for buckets already split this round.
    pub fn mod2(&self) -> usize {
        self.mod2
    }

    /// Returns the split pointer.
    pub fn split_pointer(&self) -> usize {
        self.split
    }

    /// Returns the number of home buckets.
    pub fn home_buckets(&self) -> usize {
        self.home.len()
    }

    /// Returns the number of buckets in each home bucket's chain, home bucket included.
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.home.iter().map(|&id| self.chain(id).count()).collect()
    }

    /// Returns the number of overflow buckets currently linked into chains.
    pub fn overflow_buckets(&self) -> usize {
        self.chain_lengths().iter().map(|n| n - 1).sum()
    }

    /// Iterates over the bucket ids of the chain starting at `id`.
    fn chain(&self, id: BucketId) -> impl Iterator<Item = BucketId> + '_ {
        core::iter::successors(Some(id), move |&b| self.arena[b].next)
    }

    /// Computes the home address of a key.
    fn address(&self, key: &K) -> usize {
        let hash = self.hash_builder.hash_one(key);
        let addr = (hash % self.mod1 as u64) as usize;
        if self.split > addr {
            (hash % self.mod2 as u64) as usize
        } else {
            addr
        }
    }

    /// Finds the bucket and slot holding `key`, with the number of buckets scanned.
    fn locate(&self, key: &K) -> (Option<(BucketId, usize)>, usize) {
        let mut scanned = 0;
        for id in self.chain(self.home[self.address(key)]) {
            scanned += 1;
            if let Some(slot) = self.arena[id].keys.iter().position(|k| k == key) {
                return (Some((id, slot)), scanned);
            }
        }
        (None, scanned)
    }

    fn alloc_bucket(&mut self, parent: Option<BucketId>) -> BucketId {
        match self.free.pop() {
            Some(id) => {
                self.arena[id] = Bucket::new(parent);
                id
            }
            None => {
                self.arena.push(Bucket::new(parent));
                self.arena.len() - 1
            }
        }
    }

    /// Inserts into the chain of home address `addr`, extending the chain with an
    /// overflow bucket when every bucket in it is full. Never splits.
    fn insert_no_split(&mut self, addr: usize, key: K, value: V) {
        let mut id = self.home[addr];
        loop {
            if !self.arena[id].is_full() {
                self.arena[id].push(key, value);
                return;
            }
            id = match self.arena[id].next {
                Some(next) => next,
                None => {
                    let overflow = self.alloc_bucket(Some(id));
                    self.arena[id].next = Some(overflow);
                    overflow
                }
            };
        }
    }

    /// Appends a home bucket, advances the split pointer and reorganizes the
    /// bucket that was under it.
    fn split(&mut self) {
        let new_home = self.alloc_bucket(None);
        self.home.push(new_home);
        self.split += 1;
        let target = self.split - 1;
        trace!(
            bucket = target,
            new_bucket = self.home.len() - 1,
            mod1 = self.mod1,
            "splitting home bucket"
        );
        self.reorganize(target);
    }

    /// Moves every entry of chain `addr` whose address changed under the new split
    /// pointer, then unlinks overflow buckets left empty.
    fn reorganize(&mut self, addr: usize) {
        let mut moved = Vec::new();
        let chain: Vec<BucketId> = self.chain(self.home[addr]).collect();

        for &id in &chain {
            let keys = mem::take(&mut self.arena[id].keys);
            let values = mem::take(&mut self.arena[id].values);
            for (key, value) in keys.into_iter().zip(values) {
                if self.address(&key) == addr {
                    self.arena[id].push(key, value);
                } else {
                    moved.push((key, value));
                }
            }
        }

        // Home bucket stays even when empty
        for &id in &chain[1..] {
            if self.arena[id].keys.is_empty() {
                self.unlink(id);
            }
        }

        for (key, value) in moved {
            let target = self.address(&key);
            self.insert_no_split(target, key, value);
        }
    }

    /// Removes overflow bucket `id` from its chain and returns it to the free list.
    fn unlink(&mut self, id: BucketId) {
        let next = self.arena[id].next;
        let parent = self.arena[id].parent;
        if let Some(parent) = parent {
            self.arena[parent].next = next;
        }
        if let Some(next) = next {
            self.arena[next].parent = parent;
        }
        self.arena[id].next = None;
        self.arena[id].parent = None;
        self.free.push(id);
    }

    /// Ends the round once every bucket of it has been split.
    fn finish_round(&mut self) {
        if self.split > self.mod1 - 1 {
            self.split = 0;
            self.mod1 = self.mod2;
            self.mod2 = 2 * self.mod1;
            trace!(mod1 = self.mod1, mod2 = self.mod2, "linear hashing round complete");
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Index<K, V> for LinHashMap<K, V, S> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let (Some((id, slot)), _) = self.locate(&key) {
            return Some(mem::replace(&mut self.arena[id].values[slot], value));
        }

        self.count += 1;
        let home = self.home[self.address(&key)];
        if !self.arena[home].is_full() {
            self.arena[home].push(key, value);
            return None;
        }

        self.split();
        let addr = self.address(&key);
        self.insert_no_split(addr, key, value);
        self.finish_round();
        None
    }

    fn get(&self, key: &K) -> Option<&V> {
        let (found, scanned) = self.locate(key);
        self.stats.record(scanned);
        found.map(|(id, slot)| &self.arena[id].values[slot])
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.count);
        for &home in &self.home {
            for id in self.chain(home) {
                let bucket = &self.arena[id];
                out.extend(bucket.keys.iter().zip(bucket.values.iter()));
            }
        }
        out
    }

    fn len(&self) -> usize {
        self.count
    }

    fn stats(&self) -> &AccessStats {
        &self.stats
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for LinHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "LinHashMap (mod1 = {}, mod2 = {}, split = {})",
            self.mod1, self.mod2, self.split
        )?;
        for (addr, &home) in self.home.iter().enumerate() {
            write!(f, "{:>4}:", addr)?;
            let mut id = Some(home);
            while let Some(b) = id {
                let bucket = &self.arena[b];
                f.write_str(" [")?;
                for (i, (k, v)) in bucket.keys.iter().zip(&bucket.values).enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", k, v)?;
                }
                f.write_str("]")?;
                id = bucket.next;
                if id.is_some() {
                    f.write_str(" ->")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
