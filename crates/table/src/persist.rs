//! Table snapshots.
//!
//! A saved table is a JSON document holding its name, schema, tuples and index
//! backend, written to `<dir>/<name>.dbf`. Loading rebuilds the index from the
//! tuples; the index itself is never written.

use crate::catalog::Catalog;
use crate::error::{TableError, TableResult};
use crate::table::Table;
use minirel_core::{Schema, Tuple};
use minirel_index::IndexKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// File extension of saved tables.
const EXTENSION: &str = "dbf";

/// Serialized form of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub name: String,
    pub schema: Schema,
    pub tuples: Vec<Tuple>,
    pub index: Option<IndexKind>,
}

impl TableSnapshot {
    /// Captures a table's contents.
    pub fn of(table: &Table) -> Self {
        Self {
            name: table.name().to_string(),
            schema: table.schema().clone(),
            tuples: table.tuples().to_vec(),
            index: table.index_kind(),
        }
    }

    /// Rebuilds the table described by this snapshot.
    pub fn restore(self, catalog: &Arc<Catalog>) -> Table {
        let mut table = Table::with_index_kind(catalog, self.name, self.schema, self.index);
        for tuple in self.tuples {
            table.append(tuple);
        }
        table
    }
}

/// Returns the path a table named `name` is saved to under `dir`.
pub fn snapshot_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, EXTENSION))
}

impl Table {
    /// Writes this table to `<dir>/<name>.dbf`, creating `dir` if needed.
    pub fn save_to(&self, dir: &Path) -> TableResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| TableError::io(dir, e))?;
        let path = snapshot_path(dir, self.name());
        let json = serde_json::to_vec(&TableSnapshot::of(self))?;
        fs::write(&path, json).map_err(|e| TableError::io(&path, e))?;
        info!(table = %self.name(), path = %path.display(), rows = self.len(), "saved table");
        Ok(path)
    }

    /// Reads the table named `name` from `dir`.
    ///
    /// A missing file is reported as [`TableError::TableNotFound`].
    pub fn load_from(catalog: &Arc<Catalog>, dir: &Path, name: &str) -> TableResult<Table> {
        let path = snapshot_path(dir, name);
        let json = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TableError::TableNotFound(name.to_string()),
            _ => TableError::io(&path, e),
        })?;
        let snapshot: TableSnapshot = serde_json::from_slice(&json)?;
        let table = snapshot.restore(catalog);
        info!(table = %table.name(), path = %path.display(), rows = table.len(), "loaded table");
        Ok(table)
    }
}
