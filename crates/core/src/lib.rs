//! minirel Core - values, tuples, keys and schemas for the minirel relational engine.
//!
//! This crate provides the foundational types shared by the index and table crates:
//!
//! - `DataType`: column domains, parsed from textual type tags
//! - `Value`: a single typed (or absent) value
//! - `Tuple`: an ordered row of values aligned with a schema
//! - `KeyType`: an ordered, hashable composite key used by every index
//! - `Schema`: attribute names, domains and primary key of a relation
//! - `Error`: errors raised while declaring schemas and validating tuples
//!
//! # Example
//!
//! ```rust
//! use minirel_core::{tuple, KeyType, Schema, Value};
//!
//! let schema = Schema::parse(
//!     "title year length",
//!     "String Integer Integer",
//!     "title year",
//! )
//! .unwrap();
//!
//! let t = tuple!["Star_Wars", 1977, 124];
//! let key = t.key(&schema.key_cols());
//!
//! assert_eq!(key, KeyType::new(vec![Value::from("Star_Wars"), Value::Int32(1977)]));
//! ```

#![no_std]

extern crate alloc;

#[doc(hidden)]
pub extern crate alloc as __alloc;

mod error;
mod key;
pub mod schema;
mod tuple;
mod types;
mod value;

pub use error::{Error, Result};
pub use key::KeyType;
pub use schema::Schema;
pub use tuple::Tuple;
pub use types::DataType;
pub use value::Value;
