use crate::table::Table;
use minirel_core::{KeyType, Tuple};
use minirel_index::IndexKind;
use tracing::debug;

impl Table {
    /// Selects the tuples satisfying the predicate.
    ///
    /// ```rust
    /// use minirel_table::Catalog;
    /// use minirel_core::{tuple, Value};
    ///
    /// let catalog = Catalog::with_defaults();
    /// let mut movie = catalog
    ///     .create_table("movie", "title year", "String Integer", "title year")
    ///     .unwrap();
    /// movie.insert(tuple!["Star_Wars", 1977]).unwrap();
    /// movie.insert(tuple!["Rocky", 1985]).unwrap();
    ///
    /// let year = movie.col("year").unwrap();
    /// let old = movie.select(|t| t[year] < Value::Int32(1980));
    /// assert_eq!(old.len(), 1);
    /// ```
    pub fn select<P>(&self, predicate: P) -> Table
    where
        P: Fn(&Tuple) -> bool,
    {
        let tuples: Vec<Tuple> = self.tuples().iter().filter(|&t| predicate(t)).cloned().collect();
        let result = self.derive(self.schema().clone(), tuples);
        debug!(table = %self.name(), rows = result.len(), "select");
        result
    }

    /// Selects the tuples whose key equals `key`.
    ///
    /// The lookup depends on the index backend:
    ///
    /// - linear hashing: a direct lookup; a miss yields a single tuple of absent
    ///   values.
    /// - tree: a scan comparing the printed form of each column value, as a
    ///   single-value key, with the printed form of `key`. A single-value key thus
    ///   finds rows by any one column of a composite key.
    /// - range: a direct lookup; a miss yields no tuples.
    /// - no index: a scan comparing each tuple's full primary key.
    pub fn select_key(&self, key: &KeyType) -> Table {
        let tuples = match (self.index_kind(), self.index()) {
            (Some(IndexKind::LinearHash), Some(index)) => match index.get(key) {
                Some(t) => vec![t.clone()],
                None => vec![Tuple::absent(self.schema().arity())],
            },
            (Some(IndexKind::Tree), Some(_)) => {
                let wanted = key.to_string();
                self.tuples()
                    .iter()
                    .filter(|t| {
                        t.values()
                            .iter()
                            .any(|v| KeyType::single(v.clone()).to_string() == wanted)
                    })
                    .cloned()
                    .collect()
            }
            (Some(IndexKind::Range), Some(index)) => index.get(key).cloned().into_iter().collect(),
            _ => self
                .tuples()
                .iter()
                .filter(|t| t.key(self.key_cols()) == *key)
                .cloned()
                .collect(),
        };

        let result = self.derive(self.schema().clone(), tuples);
        debug!(table = %self.name(), %key, rows = result.len(), "select by key");
        result
    }

    /// Selects the tuples whose keys fall in the window opened by `low` and closed
    /// by `high`, both inclusive.
    ///
    /// Index entries are scanned in the index's own order; the window opens at the
    /// entry whose key equals `low` and closes after the entry whose key equals
    /// `high`. Ordered backends therefore return every key in `[low, high]` when both
    /// bounds are present. Without an index the tuples are scanned in key order.
    pub fn select_range(&self, low: &KeyType, high: &KeyType) -> Table {
        let entries: Vec<(KeyType, &Tuple)> = match self.index() {
            Some(index) => index.entries().into_iter().map(|(k, t)| (k.clone(), t)).collect(),
            None => {
                let mut keyed: Vec<(KeyType, &Tuple)> = self
                    .tuples()
                    .iter()
                    .map(|t| (t.key(self.key_cols()), t))
                    .collect();
                keyed.sort_by(|a, b| a.0.cmp(&b.0));
                keyed
            }
        };

        let mut tuples = Vec::new();
        let mut open = false;
        for (key, tuple) in entries {
            if key == *low {
                open = true;
            }
            if open {
                tuples.push(tuple.clone());
            }
            if key == *high {
                open = false;
            }
        }

        let result = self.derive(self.schema().clone(), tuples);
        debug!(table = %self.name(), %low, %high, rows = result.len(), "select range");
        result
    }
}
