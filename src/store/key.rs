//! Canonical lookup identity for record keys

use super::attributes::Attributes;
use super::value::Value;
use std::fmt;

/// The hashed form of a record key
///
/// A key mapping is turned into a sequence of `(field, value)` pairs sorted
/// by field name, so that mappings with the same content always produce the
/// same `HashKey`, whatever their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashKey(Box<[(String, Value)]>);

impl HashKey {
    /// Derive the hash key of a key mapping
    pub fn derive(key: &Attributes) -> Self {
        let mut pairs: Vec<(String, Value)> = key
            .iter()
            .map(|(field, value)| (field.to_string(), value.clone()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        HashKey(pairs.into_boxed_slice())
    }

    /// The sorted `(field, value)` pairs
    pub fn pairs(&self) -> &[(String, Value)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rebuild the key mapping, fields in sorted order
    pub fn to_attributes(&self) -> Attributes {
        self.0.iter().cloned().collect()
    }

    /// Calculate approximate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        self.0
            .iter()
            .map(|(field, value)| field.len() + value.memory_usage())
            .sum()
    }
}

impl From<&Attributes> for HashKey {
    fn from(key: &Attributes) -> Self {
        HashKey::derive(key)
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (field, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", field, value)?;
        }
        write!(f, ")")
    }
}
