//! Relation schemas.
//!
//! A schema names a relation's attributes, gives each one a domain and marks the
//! subset that forms the primary key. Base schemas are declared textually with
//! [`Schema::parse`]; operators derive result schemas with [`Schema::from_parts`].

use crate::error::{Error, Result};
use crate::types::DataType;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Attribute names, their domains and the primary key of a relation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    attributes: Vec<String>,
    domains: Vec<DataType>,
    key: Vec<String>,
}

impl Schema {
    /// Parses a schema declaration.
    ///
    /// `attributes`, `domains` and `key` are whitespace separated lists, e.g.
    /// `Schema::parse("title year studioName", "String Integer String", "title year")`.
    pub fn parse(attributes: &str, domains: &str, key: &str) -> Result<Self> {
        let attributes: Vec<String> = attributes.split_whitespace().map(String::from).collect();
        let domains = DataType::parse_list(domains)?;
        let key: Vec<String> = key.split_whitespace().map(String::from).collect();
        Self::new(attributes, domains, key)
    }

    /// Creates a validated schema.
    pub fn new(attributes: Vec<String>, domains: Vec<DataType>, key: Vec<String>) -> Result<Self> {
        if attributes.is_empty() {
            return Err(Error::invalid_schema("relation must have at least one attribute"));
        }
        if attributes.len() != domains.len() {
            return Err(Error::invalid_schema(format!(
                "{} attributes but {} domains",
                attributes.len(),
                domains.len()
            )));
        }
        for (i, a) in attributes.iter().enumerate() {
            if attributes[..i].contains(a) {
                return Err(Error::invalid_schema(format!("duplicate attribute {}", a)));
            }
        }
        if key.is_empty() {
            return Err(Error::invalid_schema("primary key must not be empty"));
        }
        for k in &key {
            if !attributes.contains(k) {
                return Err(Error::invalid_schema(format!(
                    "key attribute {} is not an attribute",
                    k
                )));
            }
        }
        Ok(Self::from_parts(attributes, domains, key))
    }

    /// Creates a schema without validation.
    ///
    /// Used for operator results, whose attribute lists may repeat names (an equi-join
    /// keeps both sides' columns).
    pub fn from_parts(attributes: Vec<String>, domains: Vec<DataType>, key: Vec<String>) -> Self {
        Self {
            attributes,
            domains,
            key,
        }
    }

    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    #[inline]
    pub fn domains(&self) -> &[DataType] {
        &self.domains
    }

    #[inline]
    pub fn key(&self) -> &[String] {
        &self.key
    }

    /// Returns the number of attributes.
    #[inline]
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    /// Returns the position of the first attribute with the given name.
    pub fn col(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a == name)
    }

    /// Resolves every name to its position, or returns the first unknown name.
    pub fn cols<S: AsRef<str>>(&self, names: &[S]) -> core::result::Result<Vec<usize>, String> {
        names
            .iter()
            .map(|n| self.col(n.as_ref()).ok_or_else(|| n.as_ref().to_string()))
            .collect()
    }

    /// Returns the positions of the primary key attributes.
    pub fn key_cols(&self) -> Vec<usize> {
        self.key.iter().filter_map(|k| self.col(k)).collect()
    }

    /// Returns the domains at the given positions.
    pub fn domains_at(&self, cols: &[usize]) -> Vec<DataType> {
        cols.iter().filter_map(|&c| self.domains.get(c).copied()).collect()
    }

    /// Two schemas are union-compatible when they have the same arity and the
    /// same domain at each position. Attribute names are not compared.
    pub fn compatible(&self, other: &Schema) -> bool {
        self.domains == other.domains
    }

    /// Returns true if every name in `names` is an attribute of this schema.
    pub fn contains_all<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|n| self.col(n.as_ref()).is_some())
    }

    /// Returns true if `names` is exactly the primary key, in order.
    pub fn is_key<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.len() == self.key.len() && names.iter().zip(&self.key).all(|(n, k)| n.as_ref() == k)
    }
}

/// Splits a whitespace separated attribute list.
pub fn attribute_list(names: &str) -> Vec<String> {
    names.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn movie() -> Schema {
        Schema::parse(
            "title year length genre studioName producerNo",
            "String Integer Integer String String Integer",
            "title year",
        )
        .unwrap()
    }

    #[test]
    fn test_parse_schema() {
        let s = movie();
        assert_eq!(s.arity(), 6);
        assert_eq!(s.domains()[1], DataType::Int32);
        assert_eq!(s.key(), &["title".to_string(), "year".to_string()]);
        assert_eq!(s.key_cols(), vec![0, 1]);
    }

    #[test]
    fn test_col_lookup() {
        let s = movie();
        assert_eq!(s.col("studioName"), Some(4));
        assert_eq!(s.col("rating"), None);
        assert_eq!(s.cols(&["year", "title"]), Ok(vec![1, 0]));
        assert_eq!(s.cols(&["year", "rating"]), Err("rating".to_string()));
    }

    #[test]
    fn test_parse_rejects_domain_count() {
        let err = Schema::parse("a b", "Integer", "a").unwrap_err();
        assert!(matches!(err, Error::InvalidSchema { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert!(Schema::parse("a b", "Integer String", "c").is_err());
        assert!(Schema::parse("a b", "Integer String", "").is_err());
    }

    #[test]
    fn test_parse_rejects_duplicates_and_tags() {
        assert!(Schema::parse("a a", "Integer String", "a").is_err());
        assert!(matches!(
            Schema::parse("a", "Decimal", "a"),
            Err(Error::UnknownType { .. })
        ));
    }

    #[test]
    fn test_compatible() {
        let a = Schema::parse("name address", "String String", "name").unwrap();
        let b = Schema::parse("n addr", "String String", "n").unwrap();
        let c = Schema::parse("name year", "String Integer", "name").unwrap();
        assert!(a.compatible(&b));
        assert!(!a.compatible(&c));
    }

    #[test]
    fn test_is_key() {
        let s = movie();
        assert!(s.is_key(&["title", "year"]));
        assert!(!s.is_key(&["year", "title"]));
        assert!(!s.is_key(&["title"]));
    }

    #[test]
    fn test_attribute_list() {
        assert_eq!(attribute_list("  title   year "), vec!["title", "year"]);
    }
}
