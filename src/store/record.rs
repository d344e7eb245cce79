//! Record structure handed to the store

use super::attributes::Attributes;
use super::key::HashKey;

/// A record as produced by the mapping layer
///
/// `key` holds the identifying fields, `attributes` the full payload (which
/// normally repeats the key fields).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifying fields
    pub key: Attributes,

    /// Full record payload
    pub attributes: Attributes,
}

impl Record {
    /// Create a record from explicit key and payload mappings
    pub fn new(key: Attributes, attributes: Attributes) -> Self {
        Record { key, attributes }
    }

    /// Create a record whose key is the listed fields of `attributes`
    ///
    /// Key fields missing from `attributes` are left out of the key.
    pub fn keyed_by<'a>(
        key_fields: impl IntoIterator<Item = &'a str>,
        attributes: Attributes,
    ) -> Self {
        let key = key_fields
            .into_iter()
            .filter_map(|field| attributes.get(field).map(|v| (field, v.clone())))
            .collect();
        Record { key, attributes }
    }

    /// Derive the lookup identity of this record
    pub fn hash_key(&self) -> HashKey {
        HashKey::derive(&self.key)
    }
}
