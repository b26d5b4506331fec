//! minirel Table - typed in-memory tables and relational algebra for minirel.
//!
//! This crate provides:
//!
//! - `Table`: a schema, its tuples and an optional primary-key index
//! - relational operators: project, select, union, minus
//! - joins: nested-loop, hash, index (any backend) and natural
//! - `Catalog`: shared configuration and derived-table naming
//! - JSON snapshots for saving and loading tables
//!
//! Operators never modify their inputs; each returns a fresh table. Relational
//! mistakes such as an unknown attribute or incompatible tables give `None` and
//! log a warning.
//!
//! # Example
//!
//! ```rust
//! use minirel_core::tuple;
//! use minirel_table::Catalog;
//!
//! let catalog = Catalog::with_defaults();
//! let mut movie = catalog
//!     .create_table("movie", "title year studioName", "String Integer String", "title year")
//!     .unwrap();
//! movie.insert(tuple!["Star_Wars", 1977, "Fox"]).unwrap();
//! movie.insert(tuple!["Rocky", 1985, "Universal"]).unwrap();
//!
//! let mut studio = catalog
//!     .create_table("studio", "name presNo", "String Integer", "name")
//!     .unwrap();
//! studio.insert(tuple!["Fox", 7777]).unwrap();
//!
//! let titles = movie.project("title").unwrap();
//! assert_eq!(titles.len(), 2);
//!
//! let joined = movie.hash_join("studioName", "name", &studio).unwrap();
//! assert_eq!(joined.attributes(), &["title", "year", "studioName", "presNo"]);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
mod join;
mod ops;
pub mod persist;
pub mod table;

pub use catalog::Catalog;
pub use config::{EngineConfig, IndexSetting, Validation};
pub use error::{TableError, TableResult};
pub use persist::TableSnapshot;
pub use table::{Table, TableIndex};
