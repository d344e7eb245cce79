//! In-memory persistence strategy

use super::{PersistenceStrategy, RecordIter, Result};
use crate::config::StoreConfig;
use crate::query::QueryConditions;
use crate::store::{Attributes, HashKey, Record};
use indexmap::IndexMap;
use siphasher::sip::SipHasher13;
use std::hash::BuildHasherDefault;
use std::iter::FusedIterator;
use tracing::{debug, info, trace};

/// Type alias for our ordered map with SipHasher
type RecordMap = IndexMap<HashKey, Attributes, BuildHasherDefault<SipHasher13>>;

/// Record store kept entirely in memory
///
/// Records are kept in insertion order; overwriting a record keeps its
/// original position. Nothing is ever evicted and nothing survives the
/// process.
#[derive(Debug, Clone)]
pub struct InMemoryPersistence {
    store: RecordMap,
}

impl InMemoryPersistence {
    /// Create a new store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(StoreConfig::default().initial_capacity)
    }

    /// Create a new store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        InMemoryPersistence {
            store: IndexMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            ),
        }
    }

    /// Create a store from configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        info!(
            "Creating in-memory record store (capacity {})",
            config.initial_capacity
        );
        Self::with_capacity(config.initial_capacity)
    }

    /// Unboxed form of [`PersistenceStrategy::query`]
    pub fn scan(&self, conditions: QueryConditions) -> Query<'_> {
        trace!("Scanning {} records for {}", self.store.len(), conditions.attributes);
        Query {
            records: self.store.values(),
            conditions,
        }
    }

    /// Check if a record is stored under `key`
    pub fn contains_key(&self, key: &Attributes) -> bool {
        self.store.contains_key(&HashKey::derive(key))
    }

    /// Get the number of stored records
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Calculate approximate memory usage of stored data in bytes
    pub fn memory_usage(&self) -> usize {
        self.store
            .iter()
            .map(|(key, attributes)| key.memory_usage() + attributes.memory_usage())
            .sum()
    }

    /// Get statistics about the store
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            records: self.store.len(),
            used_memory_bytes: self.memory_usage(),
        }
    }
}

impl Default for InMemoryPersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistenceStrategy for InMemoryPersistence {
    fn save(&mut self, record: Record) {
        let key = record.hash_key();
        debug!("Saving record {}", key);

        if self.store.insert(key, record.attributes).is_some() {
            debug!("Overwrote existing record");
        }
    }

    fn find(&self, key: &Attributes) -> Result<&Attributes> {
        match self.store.get(&HashKey::derive(key)) {
            Some(attributes) => Ok(attributes),
            None => {
                debug!("Record with key {} not found", key);
                Self::raise_record_not_found(key)
            }
        }
    }

    fn find_by(&self, attributes: &Attributes) -> Option<&Attributes> {
        self.scan(QueryConditions::new(attributes.clone())).next()
    }

    fn query<'a>(&'a self, conditions: QueryConditions) -> RecordIter<'a> {
        Box::new(self.scan(conditions))
    }

    fn key_exists(&self, key: &Attributes, conditions: QueryConditions) -> bool {
        let conditions = conditions & QueryConditions::new(key.clone());
        self.scan(conditions).next().is_some()
    }

    fn exists(&self, conditions: QueryConditions) -> bool {
        self.scan(conditions).next().is_some()
    }
}

/// Lazy iterator over the records matching a set of conditions
///
/// Each call to `next` resumes the linear scan where the previous one
/// stopped.
#[derive(Debug)]
pub struct Query<'a> {
    records: indexmap::map::Values<'a, HashKey, Attributes>,
    conditions: QueryConditions,
}

impl<'a> Query<'a> {
    /// The conditions this query filters on
    pub fn conditions(&self) -> &QueryConditions {
        &self.conditions
    }
}

impl<'a> Iterator for Query<'a> {
    type Item = &'a Attributes;

    fn next(&mut self) -> Option<Self::Item> {
        let conditions = &self.conditions;
        self.records.find(|record| conditions.matches(record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}

impl FusedIterator for Query<'_> {}

/// Statistics about the record store
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StoreStats {
    pub records: usize,
    pub used_memory_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Value;

    fn user(id: i64, name: &str) -> Record {
        Record::keyed_by(["id"], Attributes::new().with("id", id).with("name", name))
    }

    #[test]
    fn test_save_and_find() {
        let mut store = InMemoryPersistence::new();
        store.save(user(1, "a"));

        let found = store.find(&Attributes::from([("id", 1)])).unwrap();
        assert_eq!(found.get("name"), Some(&Value::string("a")));
    }

    #[test]
    fn test_find_missing() {
        let store = InMemoryPersistence::new();
        let err = store.find(&Attributes::from([("id", 2)])).unwrap_err();
        assert_eq!(err.key(), &Attributes::from([("id", 2)]));
    }

    #[test]
    fn test_overwrite_keeps_single_entry_and_position() {
        let mut store = InMemoryPersistence::new();
        store.save(user(1, "a"));
        store.save(user(2, "b"));
        store.save(user(1, "c"));

        assert_eq!(store.len(), 2);
        let names: Vec<&Value> = store
            .scan(QueryConditions::all())
            .filter_map(|r| r.get("name"))
            .collect();
        assert_eq!(names, vec![&Value::string("c"), &Value::string("b")]);
    }

    #[test]
    fn test_composite_key_order_irrelevant() {
        let mut store = InMemoryPersistence::new();
        let attrs = Attributes::new().with("org", "x").with("id", 1).with("v", 1);
        store.save(Record::new(Attributes::new().with("org", "x").with("id", 1), attrs));

        let swapped = Attributes::new().with("id", 1).with("org", "x");
        assert!(store.contains_key(&swapped));

        store.save(Record::new(swapped.clone(), Attributes::new().with("v", 2)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find(&swapped).unwrap().get("v"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_query_is_lazy() {
        let mut store = InMemoryPersistence::new();
        for i in 0..5 {
            store.save(user(i, "same"));
        }

        let mut query = store.scan(QueryConditions::all().and_eq("name", "same"));
        assert_eq!(query.next().and_then(|r| r.get("id")), Some(&Value::Integer(0)));
        assert_eq!(query.next().and_then(|r| r.get("id")), Some(&Value::Integer(1)));
        assert_eq!(query.count(), 3);
    }

    #[test]
    fn test_scan_keeps_its_conditions() {
        let store = InMemoryPersistence::new();
        let conditions = QueryConditions::all().and_eq("name", "a");

        let query = store.scan(conditions.clone());
        assert_eq!(query.conditions(), &conditions);
    }

    #[test]
    fn test_query_exhausted_stays_exhausted() {
        let mut store = InMemoryPersistence::new();
        store.save(user(1, "a"));

        let mut query = store.query(QueryConditions::all());
        assert!(query.next().is_some());
        assert!(query.next().is_none());
        assert!(query.next().is_none());
    }

    #[test]
    fn test_stats() {
        let mut store = InMemoryPersistence::with_capacity(4);
        assert!(store.is_empty());
        assert_eq!(store.stats().records, 0);
        assert_eq!(store.stats().used_memory_bytes, 0);

        store.save(user(1, "a"));
        let stats = store.stats();
        assert_eq!(stats.records, 1);
        assert!(stats.used_memory_bytes > 0);
    }

    #[test]
    fn test_from_config() {
        let config = StoreConfig { initial_capacity: 8 };
        let store = InMemoryPersistence::from_config(&config);
        assert!(store.is_empty());
    }
}
