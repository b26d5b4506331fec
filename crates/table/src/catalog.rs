//! Table catalog.
//!
//! A `Catalog` holds the engine configuration and names derived tables. Every
//! table keeps an `Arc` to the catalog it was created from, and operator results
//! inherit it, so one counter names every table derived from the same base.

use crate::config::EngineConfig;
use crate::error::TableResult;
use crate::table::Table;
use minirel_core::Schema;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Configuration and naming shared by a family of tables.
#[derive(Debug, Default)]
pub struct Catalog {
    config: EngineConfig,
    counter: AtomicU64,
}

impl Catalog {
    /// Creates a catalog with the given configuration.
    pub fn new(config: EngineConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            counter: AtomicU64::new(0),
        })
    }

    /// Creates a catalog with the default configuration.
    pub fn with_defaults() -> Arc<Self> {
        Self::new(EngineConfig::default())
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a fresh name for a table derived from `prefix`.
    pub fn next_name(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", prefix, n)
    }

    /// Declares an empty table.
    ///
    /// ```rust
    /// use minirel_table::Catalog;
    ///
    /// let catalog = Catalog::with_defaults();
    /// let studio = catalog
    ///     .create_table("studio", "name address presNo", "String String Integer", "name")
    ///     .unwrap();
    /// assert_eq!(studio.col("presNo"), Some(2));
    /// ```
    pub fn create_table(
        self: &Arc<Self>,
        name: &str,
        attributes: &str,
        domains: &str,
        key: &str,
    ) -> TableResult<Table> {
        let schema = Schema::parse(attributes, domains, key)?;
        tracing::debug!(table = name, attributes, "create table");
        Ok(Table::new(self, name, schema))
    }

    /// Saves a table under the configured store directory.
    pub fn save(&self, table: &Table) -> TableResult<PathBuf> {
        table.save_to(&self.config.store_dir)
    }

    /// Loads a table previously saved under the configured store directory.
    pub fn load(self: &Arc<Self>, name: &str) -> TableResult<Table> {
        Table::load_from(self, &self.config.store_dir, name)
    }
}
