//! Composite index keys.

use crate::value::Value;
use alloc::vec::Vec;
use core::fmt;

/// An ordered, hashable key over one or more attribute values.
///
/// Equality is element-wise, ordering is lexicographic over the wrapped values and
/// the hash is derived from the wrapped values, so equal keys always hash alike.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyType {
    values: Vec<Value>,
}

impl KeyType {
    /// Creates a composite key.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Creates a single-attribute key.
    pub fn single(value: impl Into<Value>) -> Self {
        Self {
            values: alloc::vec![value.into()],
        }
    }

    /// Returns the wrapped values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the number of attributes in this key.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the key wraps no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the key wraps more than one value.
    #[inline]
    pub fn is_composite(&self) -> bool {
        self.values.len() > 1
    }
}

impl From<Vec<Value>> for KeyType {
    fn from(values: Vec<Value>) -> Self {
        KeyType::new(values)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyType (")?;
        for v in &self.values {
            write!(f, " {}", v)?;
        }
        f.write_str(" )")
    }
}
