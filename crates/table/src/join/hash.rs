use super::build_probe_join;
use crate::table::Table;
use minirel_core::{KeyType, Tuple};
use minirel_index::HashIndex;
use tracing::debug;

impl Table {
    /// Hash join: builds a transient hash index over one side keyed by its join
    /// columns and probes it with the other side.
    ///
    /// `other` is the build side, unless `attributes1` is exactly this table's key
    /// while `attributes2` is not other's key, in which case this table is. The
    /// result holds the probe side's columns followed by the build side's non-join
    /// columns, keyed by the probe side's key. A probe tuple without a match is
    /// kept, padded with absent values.
    pub fn hash_join(&self, attributes1: &str, attributes2: &str, other: &Table) -> Option<Table> {
        let result = build_probe_join(
            self,
            attributes1,
            attributes2,
            other,
            Box::new(HashIndex::<KeyType, Vec<Tuple>>::new()),
        )?;
        debug!(
            table = %self.name(),
            other = %other.name(),
            attributes1,
            attributes2,
            rows = result.len(),
            "hash join"
        );
        Some(result)
    }
}
