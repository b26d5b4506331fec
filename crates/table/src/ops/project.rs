use crate::table::Table;
use minirel_core::schema::attribute_list;
use minirel_core::Schema;
use tracing::{debug, warn};

impl Table {
    /// Projects the tuples onto the given space separated attributes, in that order.
    ///
    /// The primary key is kept when every key attribute is projected; otherwise the
    /// projected attributes become the key. Returns None if any attribute is unknown.
    pub fn project(&self, attributes: &str) -> Option<Table> {
        let attrs = attribute_list(attributes);
        if attrs.is_empty() {
            warn!(table = %self.name(), "project onto an empty attribute list");
            return None;
        }
        let cols = match self.schema().cols(attrs.as_slice()) {
            Ok(cols) => cols,
            Err(unknown) => {
                warn!(table = %self.name(), attribute = %unknown, "project onto unknown attribute");
                return None;
            }
        };

        let key = if self.key().iter().all(|k| attrs.contains(k)) {
            self.key().to_vec()
        } else {
            attrs.clone()
        };
        let domains = self.schema().domains_at(&cols);
        let tuples = self.tuples().iter().map(|t| t.project(&cols)).collect();

        let result = self.derive(Schema::from_parts(attrs, domains, key), tuples);
        debug!(table = %self.name(), attributes, rows = result.len(), "project");
        Some(result)
    }
}
