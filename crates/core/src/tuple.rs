//! Tuple structure for minirel.
//!
//! A `Tuple` is a fixed-length sequence of values, positionally aligned with a
//! table's attribute list. Operators never mutate a stored tuple; they derive new
//! ones with [`Tuple::project`], [`Tuple::concat`] and [`Tuple::without`].

use crate::key::KeyType;
use crate::value::Value;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

/// A tuple of values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple {
    values: Vec<Value>,
}

impl Tuple {
    /// Creates a new tuple from its values.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Creates a tuple of `arity` absent values.
    pub fn absent(arity: usize) -> Self {
        Self {
            values: alloc::vec![Value::Null; arity],
        }
    }

    /// Returns a reference to the values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the tuple, returning its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Gets a value at the given column index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the number of values in this tuple.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this tuple has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if every value is absent.
    pub fn is_absent(&self) -> bool {
        self.values.iter().all(Value::is_null)
    }

    /// Builds a new tuple holding the values at `cols`, in that order.
    /// Out-of-range positions yield absent values.
    pub fn project(&self, cols: &[usize]) -> Tuple {
        Tuple::new(
            cols.iter()
                .map(|&c| self.values.get(c).cloned().unwrap_or(Value::Null))
                .collect(),
        )
    }

    /// Extracts the key formed by the values at `cols`.
    pub fn key(&self, cols: &[usize]) -> KeyType {
        KeyType::new(self.project(cols).into_values())
    }

    /// Builds a new tuple with every position in `cols` removed.
    pub fn without(&self, cols: &[usize]) -> Tuple {
        Tuple::new(
            self.values
                .iter()
                .enumerate()
                .filter(|(i, _)| !cols.contains(i))
                .map(|(_, v)| v.clone())
                .collect(),
        )
    }

    /// Builds the concatenation of this tuple followed by `other`.
    pub fn concat(&self, other: &Tuple) -> Tuple {
        let mut values = Vec::with_capacity(self.len() + other.len());
        values.extend(self.values.iter().cloned());
        values.extend(other.values.iter().cloned());
        Tuple::new(values)
    }

    /// Returns true if the values at `left_cols` of `self` equal the values at
    /// `right_cols` of `other`, pairwise.
    pub fn matches_on(&self, left_cols: &[usize], other: &Tuple, right_cols: &[usize]) -> bool {
        left_cols.len() == right_cols.len()
            && left_cols
                .iter()
                .zip(right_cols)
                .all(|(&l, &r)| match (self.get(l), other.get(r)) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                })
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(values: Vec<Value>) -> Self {
        Tuple::new(values)
    }
}

impl Index<usize> for Tuple {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", v)?;
        }
        f.write_str(")")
    }
}

/// Builds a [`Tuple`] from a list of expressions convertible into [`Value`].
///
/// ```rust
/// use minirel_core::{tuple, Value};
///
/// let t = tuple!["Star_Wars", 1977, 124];
/// assert_eq!(t[1], Value::Int32(1977));
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::Tuple::default()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Tuple::new($crate::__alloc::vec![$($crate::Value::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    fn film() -> Tuple {
        Tuple::new(vec![
            Value::from("Star_Wars"),
            Value::Int32(1977),
            Value::Int32(124),
            Value::from("sciFi"),
            Value::from("Fox"),
            Value::Int32(12345),
        ])
    }

    #[test]
    fn test_tuple_get_value() {
        let t = film();
        assert_eq!(t.get(0), Some(&Value::from("Star_Wars")));
        assert_eq!(t[1], Value::Int32(1977));
        assert_eq!(t.get(6), None);
        assert_eq!(t.len(), 6);
    }

    #[test]
    fn test_tuple_project_reorders() {
        let t = film();
        let p = t.project(&[1, 0]);
        assert_eq!(p.values(), &[Value::Int32(1977), Value::from("Star_Wars")]);
    }

    #[test]
    fn test_tuple_without() {
        let t = film();
        let w = t.without(&[0, 4]);
        assert_eq!(w.len(), 4);
        assert_eq!(w[0], Value::Int32(1977));
        assert_eq!(w[3], Value::Int32(12345));
    }

    #[test]
    fn test_tuple_concat() {
        let a = Tuple::new(vec![Value::Int32(1)]);
        let b = Tuple::new(vec![Value::from("x"), Value::Null]);
        let c = a.concat(&b);
        assert_eq!(c.len(), 3);
        assert_eq!(c[1], Value::from("x"));
    }

    #[test]
    fn test_tuple_key() {
        let t = film();
        let key = t.key(&[0, 1]);
        assert_eq!(key.values(), &[Value::from("Star_Wars"), Value::Int32(1977)]);
    }

    #[test]
    fn test_tuple_absent() {
        let t = Tuple::absent(3);
        assert_eq!(t.len(), 3);
        assert!(t.is_absent());
        assert!(!film().is_absent());
    }

    #[test]
    fn test_tuple_matches_on() {
        let movie = film();
        let studio = Tuple::new(vec![Value::from("Fox"), Value::from("Los_Angeles")]);
        assert!(movie.matches_on(&[4], &studio, &[0]));
        assert!(!movie.matches_on(&[3], &studio, &[0]));
        assert!(!movie.matches_on(&[4], &studio, &[0, 1]));
    }

    #[test]
    fn test_tuple_macro_and_display() {
        let t = tuple!["Rocky", 1985];
        assert_eq!(t, Tuple::new(vec![Value::from("Rocky"), Value::Int32(1985)]));
        assert_eq!(format!("{}", t), "(Rocky, 1985)");
    }
}
