use super::build_probe_join;
use crate::table::Table;
use minirel_index::IndexKind;
use tracing::debug;

impl Table {
    /// Index join over the catalog's configured backend, linear hashing when
    /// tables are configured unindexed.
    ///
    /// Same roles, columns and padding as [`Table::hash_join`].
    pub fn index_join(&self, attributes1: &str, attributes2: &str, other: &Table) -> Option<Table> {
        let kind = self.catalog().config().index.kind().unwrap_or_default();
        self.index_join_with(attributes1, attributes2, other, kind)
    }

    /// Index join building the build side into the given backend.
    pub fn index_join_with(
        &self,
        attributes1: &str,
        attributes2: &str,
        other: &Table,
        kind: IndexKind,
    ) -> Option<Table> {
        let index = kind.build(self.catalog().config().index_options());
        let result = build_probe_join(self, attributes1, attributes2, other, index)?;
        debug!(
            table = %self.name(),
            other = %other.name(),
            attributes1,
            attributes2,
            backend = %kind,
            rows = result.len(),
            "index join"
        );
        Some(result)
    }
}
