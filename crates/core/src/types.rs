//! Data type definitions for minirel.
//!
//! A `DataType` is the domain of one table column. Schemas are declared with
//! textual type tags which are parsed into `DataType` once, at construction.

use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Supported column domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// Boolean type (true/false)
    Boolean,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 32-bit floating point number
    Float32,
    /// 64-bit floating point number
    Float64,
    /// A single Unicode scalar value
    Char,
    /// UTF-8 string
    String,
}

impl DataType {
    /// Parses a type tag.
    ///
    /// Tags are case-insensitive. Both the classic boxed-type names
    /// (`Integer`, `Long`, `Short`, `Double`, `Float`, `Character`, `String`,
    /// `Boolean`) and generic names (`int`, `real`, `text`, ...) are accepted.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let dt = match tag.to_ascii_lowercase().as_str() {
            "boolean" | "bool" => DataType::Boolean,
            "short" | "int16" | "smallint" => DataType::Int16,
            "integer" | "int" | "int32" => DataType::Int32,
            "long" | "int64" | "bigint" => DataType::Int64,
            "float" | "float32" => DataType::Float32,
            "double" | "real" | "float64" => DataType::Float64,
            "character" | "char" => DataType::Char,
            "string" | "text" | "varchar" => DataType::String,
            _ => return Err(Error::unknown_type(tag)),
        };
        Ok(dt)
    }

    /// Parses a whitespace separated list of type tags.
    pub fn parse_list(tags: &str) -> Result<alloc::vec::Vec<Self>> {
        tags.split_whitespace().map(Self::from_tag).collect()
    }

    /// Returns the canonical tag for this type.
    pub fn tag(&self) -> &'static str {
        match self {
            DataType::Boolean => "Boolean",
            DataType::Int16 => "Short",
            DataType::Int32 => "Integer",
            DataType::Int64 => "Long",
            DataType::Float32 => "Float",
            DataType::Float64 => "Double",
            DataType::Char => "Character",
            DataType::String => "String",
        }
    }

    /// Returns whether this type is an integer type.
    pub fn is_integer(&self) -> bool {
        matches!(self, DataType::Int16 | DataType::Int32 | DataType::Int64)
    }

    /// Returns whether this type is a floating point type.
    pub fn is_real(&self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_from_tag_classic_names() {
        assert_eq!(DataType::from_tag("Integer").unwrap(), DataType::Int32);
        assert_eq!(DataType::from_tag("Long").unwrap(), DataType::Int64);
        assert_eq!(DataType::from_tag("Short").unwrap(), DataType::Int16);
        assert_eq!(DataType::from_tag("Double").unwrap(), DataType::Float64);
        assert_eq!(DataType::from_tag("Float").unwrap(), DataType::Float32);
        assert_eq!(DataType::from_tag("Character").unwrap(), DataType::Char);
        assert_eq!(DataType::from_tag("String").unwrap(), DataType::String);
        assert_eq!(DataType::from_tag("Boolean").unwrap(), DataType::Boolean);
    }

    #[test]
    fn test_from_tag_generic_names() {
        assert_eq!(DataType::from_tag("int").unwrap(), DataType::Int32);
        assert_eq!(DataType::from_tag("REAL").unwrap(), DataType::Float64);
        assert_eq!(DataType::from_tag("text").unwrap(), DataType::String);
    }

    #[test]
    fn test_from_tag_unknown() {
        assert!(DataType::from_tag("Decimal").is_err());
        assert!("".parse::<DataType>().is_err());
    }

    #[test]
    fn test_parse_list() {
        let types = DataType::parse_list("String Integer  Integer String").unwrap();
        assert_eq!(
            types,
            vec![DataType::String, DataType::Int32, DataType::Int32, DataType::String]
        );
    }

    #[test]
    fn test_tag_roundtrip() {
        for dt in [
            DataType::Boolean,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
            DataType::Float32,
            DataType::Float64,
            DataType::Char,
            DataType::String,
        ] {
            assert_eq!(DataType::from_tag(dt.tag()).unwrap(), dt);
        }
    }

    #[test]
    fn test_type_families() {
        assert!(DataType::Int16.is_integer());
        assert!(!DataType::Float64.is_integer());
        assert!(DataType::Float32.is_real());
        assert!(!DataType::String.is_real());
    }
}
