use super::resolve_columns;
use crate::table::Table;
use minirel_core::schema::attribute_list;
use minirel_core::Schema;
use tracing::debug;

impl Table {
    /// Nested-loop equi-join: every pair of tuples whose `attributes1` values (in
    /// this table) equal their `attributes2` values (in `other`).
    ///
    /// Result columns are this table's followed by other's, both kept even when a
    /// name repeats. The key is this table's key. Returns None if the lists differ
    /// in length or name an unknown attribute.
    pub fn join(&self, attributes1: &str, attributes2: &str, other: &Table) -> Option<Table> {
        let attrs1 = attribute_list(attributes1);
        let attrs2 = attribute_list(attributes2);
        let (cols1, cols2) = resolve_columns(self, &attrs1, other, &attrs2)?;

        let mut tuples = Vec::new();
        for t in self.tuples() {
            for u in other.tuples() {
                if t.matches_on(&cols1, u, &cols2) {
                    tuples.push(t.concat(u));
                }
            }
        }

        let attributes = [self.attributes(), other.attributes()].concat();
        let domains = [self.domains(), other.domains()].concat();
        let schema = Schema::from_parts(attributes, domains, self.key().to_vec());

        let result = self.derive(schema, tuples);
        debug!(
            table = %self.name(),
            other = %other.name(),
            attributes1,
            attributes2,
            rows = result.len(),
            "nested-loop join"
        );
        Some(result)
    }
}
