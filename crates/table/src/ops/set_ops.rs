use crate::table::Table;
use hashbrown::HashSet;
use minirel_core::Tuple;
use tracing::{debug, warn};

impl Table {
    /// Returns true if both tables have the same arity and the same domain at
    /// every position. Logs the first disagreement.
    pub fn compatible(&self, other: &Table) -> bool {
        if self.schema().arity() != other.schema().arity() {
            warn!(
                table = %self.name(),
                other = %other.name(),
                "tables have different arity"
            );
            return false;
        }
        let mismatch = self
            .domains()
            .iter()
            .zip(other.domains())
            .position(|(a, b)| a != b);
        if let Some(column) = mismatch {
            warn!(
                table = %self.name(),
                other = %other.name(),
                column,
                "tables disagree on domain"
            );
            return false;
        }
        true
    }

    /// Unions this table with `other`, dropping exact duplicate tuples.
    /// Returns None if the tables are not compatible.
    pub fn union(&self, other: &Table) -> Option<Table> {
        if !self.compatible(other) {
            return None;
        }

        let mut seen: HashSet<&Tuple> = HashSet::with_capacity(self.len() + other.len());
        let tuples: Vec<Tuple> = self
            .tuples()
            .iter()
            .chain(other.tuples())
            .filter(|t| seen.insert(*t))
            .cloned()
            .collect();

        let result = self.derive(self.schema().clone(), tuples);
        debug!(table = %self.name(), other = %other.name(), rows = result.len(), "union");
        Some(result)
    }

    /// Returns the tuples of this table that do not appear in `other`.
    /// Returns None if the tables are not compatible.
    pub fn minus(&self, other: &Table) -> Option<Table> {
        if !self.compatible(other) {
            return None;
        }

        let exclude: HashSet<&Tuple> = other.tuples().iter().collect();
        let tuples: Vec<Tuple> = self
            .tuples()
            .iter()
            .filter(|t| !exclude.contains(*t))
            .cloned()
            .collect();

        let result = self.derive(self.schema().clone(), tuples);
        debug!(table = %self.name(), other = %other.name(), rows = result.len(), "minus");
        Some(result)
    }
}
