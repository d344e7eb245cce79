//! Field name to value mappings

use super::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An insertion-ordered mapping from field name to [`Value`]
///
/// Used both for record keys and record payloads. Two mappings are equal
/// when they hold the same fields with equal values, whatever the order in
/// which the fields were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    fields: IndexMap<String, Value>,
}

impl Attributes {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the previous value if any
    ///
    /// Overwriting a field keeps its original position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Builder-style variant of [`Attributes::insert`]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over field names in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Copy every field of `other` into `self`, `other` winning on conflicts
    pub fn extend_from(&mut self, other: &Attributes) {
        for (field, value) in &other.fields {
            self.fields.insert(field.clone(), value.clone());
        }
    }

    /// Calculate approximate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        self.fields
            .iter()
            .map(|(k, v)| k.len() + v.memory_usage())
            .sum()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (field, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", field, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_order() {
        let a = Attributes::new().with("id", 1).with("name", "a");
        let b = Attributes::new().with("name", "a").with("id", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut attrs = Attributes::from([("a", 1), ("b", 2)]);
        assert_eq!(attrs.insert("a", 3), Some(Value::Integer(1)));

        let fields: Vec<&str> = attrs.fields().collect();
        assert_eq!(fields, vec!["a", "b"]);
        assert_eq!(attrs.get("a"), Some(&Value::Integer(3)));
    }

    #[test]
    fn test_extend_from_last_write_wins() {
        let mut base = Attributes::from([("id", 1), ("age", 30)]);
        base.extend_from(&Attributes::from([("age", 31), ("rank", 2)]));

        assert_eq!(base, Attributes::from([("id", 1), ("age", 31), ("rank", 2)]));
    }

    #[test]
    fn test_contains_field() {
        let attrs = Attributes::new().with("id", 1).with("deleted_at", Value::Null);
        assert!(attrs.contains_field("id"));
        assert!(attrs.contains_field("deleted_at"));
        assert!(!attrs.contains_field("name"));
    }

    #[test]
    fn test_display() {
        let attrs = Attributes::new().with("id", 1).with("name", "a");
        assert_eq!(attrs.to_string(), r#"{id: 1, name: "a"}"#);
        assert_eq!(Attributes::new().to_string(), "{}");
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let attrs: Attributes = serde_json::from_str(r#"{"z": 1, "a": "x"}"#).unwrap();
        let fields: Vec<&str> = attrs.fields().collect();
        assert_eq!(fields, vec!["z", "a"]);
        assert_eq!(serde_json::to_string(&attrs).unwrap(), r#"{"z":1,"a":"x"}"#);
    }

    #[test]
    fn test_json_rejects_non_scalar_fields() {
        assert!(serde_json::from_str::<Attributes>(r#"{"a": [1, 2]}"#).is_err());
        assert!(serde_json::from_str::<Attributes>(r#"{"a": {"b": 1}}"#).is_err());
        assert!(serde_json::from_str::<Attributes>(r#"{"a": 18446744073709551615}"#).is_err());
    }

    #[test]
    fn test_json_round_trip_with_bytes() {
        let attrs = Attributes::new()
            .with("id", 1)
            .with("blob", Value::bytes(&b"\x00\xff"[..]));

        let text = serde_json::to_string(&attrs).unwrap();
        let back: Attributes = serde_json::from_str(&text).unwrap();
        assert_eq!(back, attrs);
    }
}
