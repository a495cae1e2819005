//! Document metadata.
//!
//! Metadata is a JSON-like map attached to each document. Structured filters
//! are evaluated against it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata attached to a document.
///
/// # Example
///
/// ```
/// use docindex_core::Metadata;
///
/// let metadata = Metadata::new()
///     .with_field("source", "handbook.pdf")
///     .with_field("page", 12);
///
/// assert_eq!(metadata.get_str("source"), Some("handbook.pdf"));
/// assert_eq!(metadata.get_i64("page"), Some(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: Map<String, Value>,
}

impl Metadata {
    /// Creates empty metadata.
    #[inline]
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Wraps an existing JSON object.
    #[inline]
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Adds a field. Chainable.
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Sets a field value.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[inline]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    #[inline]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(Value::as_i64)
    }

    #[inline]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over the metadata fields.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Returns the underlying JSON object.
    #[inline]
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_with_field() {
        let m = Metadata::new()
            .with_field("lang", "en")
            .with_field("score", 0.5);

        assert_eq!(m.len(), 2);
        assert_eq!(m.get_str("lang"), Some("en"));
        assert_eq!(m.get_f64("score"), Some(0.5));
        assert_eq!(m.get_i64("lang"), None);
    }

    #[test]
    fn test_metadata_set_overwrites() {
        let mut m = Metadata::new().with_field("v", 1);
        m.set("v", 2);
        assert_eq!(m.get_i64("v"), Some(2));
        assert!(m.contains_key("v"));
    }

    #[test]
    fn test_metadata_serializes_as_object() {
        let m = Metadata::new().with_field("k", "v");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"k":"v"}"#);

        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
