//! Typed attribute values.
//!
//! `Value` is the content of one tuple position. Values of every domain share a
//! single total order and a hash consistent with it, so any value can take part
//! in an index key.

use crate::types::DataType;
use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A value that can be stored in a tuple position.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean value
    Boolean(bool),
    /// 16-bit signed integer
    Int16(i16),
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// 32-bit floating point
    Float32(#[cfg_attr(feature = "serde", serde(with = "float_bits::f32"))] f32),
    /// 64-bit floating point
    Float64(#[cfg_attr(feature = "serde", serde(with = "float_bits::f64"))] f64),
    /// Single character
    Char(char),
    /// UTF-8 string
    String(String),
}

impl Value {
    /// Returns the domain of this value, None for an absent value.
    pub fn data_type(&self) -> Option<DataType> {
        Some(match self {
            Value::Null => return None,
            Value::Boolean(_) => DataType::Boolean,
            Value::Int16(_) => DataType::Int16,
            Value::Int32(_) => DataType::Int32,
            Value::Int64(_) => DataType::Int64,
            Value::Float32(_) => DataType::Float32,
            Value::Float64(_) => DataType::Float64,
            Value::Char(_) => DataType::Char,
            Value::String(_) => DataType::String,
        })
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value may be stored in a column of the given domain.
    /// Null belongs to every domain.
    #[inline]
    pub fn conforms_to(&self, dt: DataType) -> bool {
        self.data_type().map_or(true, |own| own == dt)
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(b) = *self {
            Some(b)
        } else {
            None
        }
    }

    /// Any integer, widened.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int16(n) => Some(n.into()),
            Value::Int32(n) => Some(n.into()),
            Value::Int64(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        if let Value::Int32(n) = *self {
            Some(n)
        } else {
            None
        }
    }

    /// Any float, widened.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float32(x) => Some(x.into()),
            Value::Float64(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Rank used to order values of different domains: absent first, then in
    /// declaration order.
    fn rank(&self) -> u8 {
        self.data_type().map_or(0, |dt| dt as u8 + 1)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Floats use a total order (NaN greater than everything, equal to itself) so that
/// values can serve as index keys.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Int16(a), Value::Int16(b)) => a.cmp(b),
            (Value::Int32(a), Value::Int32(b)) => a.cmp(b),
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Float32(a), Value::Float32(b)) => total_cmp(f64::from(*a), f64::from(*b)),
            (Value::Float64(a), Value::Float64(b)) => total_cmp(*a, *b),
            (Value::Char(a), Value::Char(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn total_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (nan_a, nan_b) => nan_a.cmp(&nan_b),
    }
}

/// Bits of a float with every zero and every NaN collapsed to one pattern, so
/// that equal floats hash alike.
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Int16(n) => n.hash(state),
            Value::Int32(n) => n.hash(state),
            Value::Int64(n) => n.hash(state),
            Value::Float32(x) => canonical_bits(f64::from(*x)).hash(state),
            Value::Float64(x) => canonical_bits(*x).hash(state),
            Value::Char(c) => c.hash(state),
            Value::String(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => fmt::Display::fmt(b, f),
            Value::Int16(n) => fmt::Display::fmt(n, f),
            Value::Int32(n) => fmt::Display::fmt(n, f),
            Value::Int64(n) => fmt::Display::fmt(n, f),
            Value::Float32(x) => fmt::Display::fmt(x, f),
            Value::Float64(x) => fmt::Display::fmt(x, f),
            Value::Char(c) => fmt::Display::fmt(c, f),
            Value::String(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Boolean,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    char => Char,
    String => String,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// None becomes an absent value.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Floats travel as their IEEE-754 bit patterns so NaN and the infinities
/// survive formats without a representation for them.
#[cfg(feature = "serde")]
mod float_bits {
    macro_rules! bits {
        ($float:ident, $bits:ident) => {
            pub mod $float {
                use serde::{Deserialize, Deserializer, Serialize, Serializer};

                pub fn serialize<S: Serializer>(v: &$float, s: S) -> Result<S::Ok, S::Error> {
                    v.to_bits().serialize(s)
                }

                pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<$float, D::Error> {
                    $bits::deserialize(d).map($float::from_bits)
                }
            }
        };
    }

    bits!(f32, u32);
    bits!(f64, u64);
}
