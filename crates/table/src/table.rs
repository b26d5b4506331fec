//! Relational tables.
//!
//! A `Table` is a schema, the list of tuples inserted into it and an optional
//! primary-key index. Operators live in `ops` and `join`; each one leaves its
//! inputs untouched and returns a fresh table named by the shared catalog.

use crate::catalog::Catalog;
use crate::config::Validation;
use minirel_core::{DataType, Error, KeyType, Schema, Tuple};
use minirel_index::{Index, IndexKind};
use std::fmt;
use std::sync::Arc;

/// Primary-key index stored by a table.
pub type TableIndex = Box<dyn Index<KeyType, Tuple> + Send + Sync>;

/// Width of a printed column.
const COLUMN_WIDTH: usize = 15;

/// A typed, in-memory relation.
pub struct Table {
    name: String,
    schema: Schema,
    tuples: Vec<Tuple>,
    index: Option<TableIndex>,
    index_kind: Option<IndexKind>,
    /// Positions of the primary key attributes.
    key_cols: Vec<usize>,
    catalog: Arc<Catalog>,
}

impl Table {
    /// Creates an empty table indexed as the catalog is configured.
    pub fn new(catalog: &Arc<Catalog>, name: impl Into<String>, schema: Schema) -> Self {
        let kind = catalog.config().index.kind();
        Self::with_index_kind(catalog, name, schema, kind)
    }

    /// Creates an empty table with an explicit index backend, or none.
    pub fn with_index_kind(
        catalog: &Arc<Catalog>,
        name: impl Into<String>,
        schema: Schema,
        index_kind: Option<IndexKind>,
    ) -> Self {
        let options = catalog.config().index_options();
        let key_cols = schema.key_cols();
        Self {
            name: name.into(),
            schema,
            tuples: Vec::new(),
            index: index_kind.map(|kind| kind.build(options)),
            index_kind,
            key_cols,
            catalog: Arc::clone(catalog),
        }
    }

    /// Builds an operator result: a new name from the catalog, this table's index
    /// backend, and an index rebuilt over `tuples`.
    pub(crate) fn derive(&self, schema: Schema, tuples: Vec<Tuple>) -> Table {
        let name = self.catalog.next_name(&self.name);
        let mut result = Table::with_index_kind(&self.catalog, name, schema, self.index_kind);
        for tuple in tuples {
            result.append(tuple);
        }
        result
    }

    /// Inserts a tuple, indexing it under its primary key.
    ///
    /// In strict validation mode the tuple must match the schema's arity and each
    /// value must belong to its column's domain (absent values belong to every
    /// domain). A rejected tuple leaves the table unchanged.
    pub fn insert(&mut self, tuple: Tuple) -> minirel_core::Result<()> {
        if self.catalog.config().validation == Validation::Strict {
            self.type_check(&tuple)?;
        }
        self.append(tuple);
        Ok(())
    }

    pub(crate) fn append(&mut self, tuple: Tuple) {
        if let Some(index) = self.index.as_mut() {
            index.put(tuple.key(&self.key_cols), tuple.clone());
        }
        self.tuples.push(tuple);
    }

    fn type_check(&self, tuple: &Tuple) -> minirel_core::Result<()> {
        if tuple.len() != self.schema.arity() {
            return Err(Error::arity_mismatch(self.schema.arity(), tuple.len()));
        }
        let columns = self.schema.attributes().iter().zip(self.schema.domains());
        for (value, (column, &domain)) in tuple.values().iter().zip(columns) {
            if !value.conforms_to(domain) {
                return Err(Error::type_mismatch(
                    column.as_str(),
                    domain,
                    value.data_type(),
                ));
            }
        }
        Ok(())
    }

    /// Returns the column position of the attribute, None if it is not in the schema.
    pub fn col(&self, attribute: &str) -> Option<usize> {
        self.schema.col(attribute)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[inline]
    pub fn attributes(&self) -> &[String] {
        self.schema.attributes()
    }

    #[inline]
    pub fn domains(&self) -> &[DataType] {
        self.schema.domains()
    }

    /// Returns the primary key attribute names.
    #[inline]
    pub fn key(&self) -> &[String] {
        self.schema.key()
    }

    pub(crate) fn key_cols(&self) -> &[usize] {
        &self.key_cols
    }

    /// Returns the number of tuples.
    #[inline]
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Returns the tuple at position `i`, in insertion order.
    pub fn tuple(&self, i: usize) -> Option<&Tuple> {
        self.tuples.get(i)
    }

    #[inline]
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    /// Returns the backend of the primary-key index, None for an unindexed table.
    pub fn index_kind(&self) -> Option<IndexKind> {
        self.index_kind
    }

    /// Returns the primary-key index.
    pub fn index(&self) -> Option<&(dyn Index<KeyType, Tuple> + Send + Sync)> {
        self.index.as_deref()
    }

    /// Returns the catalog this table belongs to.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Renders the index entries, one `key -> tuple` line each.
    pub fn index_dump(&self) -> String {
        let mut out = format!("\n Index for {}\n-------------------\n", self.name);
        if let Some(index) = &self.index {
            for (key, tuple) in index.entries() {
                out.push_str(&format!("{} -> {}\n", key, tuple));
            }
        }
        out.push_str("-------------------\n");
        out
    }

    fn write_rule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|-{}-|", "-".repeat(COLUMN_WIDTH * self.schema.arity()))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n Table {}", self.name)?;
        self.write_rule(f)?;
        f.write_str("| ")?;
        for attribute in self.schema.attributes() {
            write!(f, "{:>width$}", attribute, width = COLUMN_WIDTH)?;
        }
        writeln!(f, " |")?;
        self.write_rule(f)?;
        for tuple in &self.tuples {
            f.write_str("| ")?;
            for value in tuple.values() {
                write!(f, "{:>width$}", value.to_string(), width = COLUMN_WIDTH)?;
            }
            writeln!(f, " |")?;
        }
        self.write_rule(f)
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .field("tuples", &self.tuples.len())
            .field("index_kind", &self.index_kind)
            .finish()
    }
}
