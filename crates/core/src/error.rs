//! Errors raised while declaring schemas and validating tuples.

use crate::types::DataType;
use alloc::string::String;
use core::fmt;

/// Result type alias for minirel core operations.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A value does not belong to its column's domain. `got` is None for values
    /// without a type.
    TypeMismatch {
        column: String,
        expected: DataType,
        got: Option<DataType>,
    },
    /// A tuple's length differs from the schema's arity.
    ArityMismatch { expected: usize, got: usize },
    /// A schema declaration is malformed.
    InvalidSchema { message: String },
    /// A type tag names no known domain.
    UnknownType { tag: String },
}

impl Error {
    pub fn type_mismatch(
        column: impl Into<String>,
        expected: DataType,
        got: Option<DataType>,
    ) -> Self {
        Error::TypeMismatch {
            column: column.into(),
            expected,
            got,
        }
    }

    pub fn arity_mismatch(expected: usize, got: usize) -> Self {
        Error::ArityMismatch { expected, got }
    }

    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    pub fn unknown_type(tag: impl Into<String>) -> Self {
        Error::UnknownType { tag: tag.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch {
                column,
                expected,
                got: Some(got),
            } => write!(
                f,
                "Type mismatch on column {}: expected {}, got {}",
                column, expected, got
            ),
            Error::TypeMismatch {
                column, expected, ..
            } => write!(f, "Type mismatch on column {}: expected {}", column, expected),
            Error::ArityMismatch { expected, got } => {
                write!(f, "Arity mismatch: expected {} values, got {}", expected, got)
            }
            Error::InvalidSchema { message } => write!(f, "Invalid schema: {}", message),
            Error::UnknownType { tag } => write!(f, "Unknown type tag: {}", tag),
        }
    }
}
