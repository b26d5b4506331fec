//! Configuration for the minirel table engine.

use crate::error::{TableError, TableResult};
use minirel_index::{IndexKind, IndexOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Engine-wide settings shared by every table created through a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Index backend built for each table's primary key.
    pub index: IndexSetting,
    /// Initial number of home buckets for linear hashing.
    pub initial_buckets: usize,
    /// Maximum number of keys per B+Tree node.
    pub btree_order: usize,
    /// How tuples are checked on insert.
    pub validation: Validation,
    /// Directory holding saved tables.
    pub store_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            index: IndexSetting::LinearHash,
            initial_buckets: 4,
            btree_order: 32,
            validation: Validation::Permissive,
            store_dir: PathBuf::from("store"),
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> TableResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TableError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Returns the sizing parameters passed to index constructors.
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            initial_buckets: self.initial_buckets,
            btree_order: self.btree_order,
        }
    }

    /// Returns a copy of this configuration using the given index backend.
    pub fn with_index(mut self, index: IndexSetting) -> Self {
        self.index = index;
        self
    }

    /// Returns a copy of this configuration using the given validation mode.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Returns a copy of this configuration saving tables under `dir`.
    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = dir.into();
        self
    }
}

/// Which index, if any, a table maintains over its primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexSetting {
    /// Linear hashing.
    #[default]
    LinearHash,
    /// Balanced tree.
    Tree,
    /// B+Tree range index.
    Range,
    /// No index; key lookups scan the tuples.
    None,
}

impl IndexSetting {
    /// Returns the backend this setting builds, None when indexing is disabled.
    pub fn kind(&self) -> Option<IndexKind> {
        match self {
            IndexSetting::LinearHash => Some(IndexKind::LinearHash),
            IndexSetting::Tree => Some(IndexKind::Tree),
            IndexSetting::Range => Some(IndexKind::Range),
            IndexSetting::None => None,
        }
    }
}

impl From<IndexKind> for IndexSetting {
    fn from(kind: IndexKind) -> Self {
        match kind {
            IndexKind::LinearHash => IndexSetting::LinearHash,
            IndexKind::Tree => IndexSetting::Tree,
            IndexKind::Range => IndexSetting::Range,
        }
    }
}

/// Tuple validation performed by `Table::insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Accept every tuple as given.
    #[default]
    Permissive,
    /// Check arity and that each value belongs to its column's domain.
    Strict,
}
