//! Persistence strategies
//!
//! [`PersistenceStrategy`] is the contract the mapping layer programs
//! against. Each backend lives in its own file; only the in-memory one exists
//! for now.

mod error;
mod memory;

pub use error::{RecordNotFound, Result};
pub use memory::{InMemoryPersistence, Query, StoreStats};

use crate::query::QueryConditions;
use crate::store::{Attributes, Record};

/// Lazy, single-pass sequence of matching records
///
/// Borrowing the store, so no mutation can happen while it is alive. Call
/// `query` again for a second pass.
pub type RecordIter<'a> = Box<dyn Iterator<Item = &'a Attributes> + 'a>;

/// Storage contract for records addressed by a composite key
pub trait PersistenceStrategy {
    /// Insert or overwrite the record's attributes under its key
    fn save(&mut self, record: Record);

    /// Look up a record by key
    ///
    /// Key field order is irrelevant. Fails with [`RecordNotFound`] when
    /// nothing is stored under the key.
    fn find(&self, key: &Attributes) -> Result<&Attributes>;

    /// First stored record whose attributes contain `attributes`
    fn find_by(&self, attributes: &Attributes) -> Option<&Attributes>;

    /// All stored records matching `conditions`, produced on demand
    fn query<'a>(&'a self, conditions: QueryConditions) -> RecordIter<'a>;

    /// Whether some record matches both the key fields and `conditions`
    fn key_exists(&self, key: &Attributes, conditions: QueryConditions) -> bool;

    /// Whether some record matches `conditions`
    fn exists(&self, conditions: QueryConditions) -> bool;

    /// Always fails with [`RecordNotFound`] for `key`
    fn raise_record_not_found<T>(key: &Attributes) -> Result<T>
    where
        Self: Sized,
    {
        Err(RecordNotFound::new(key.clone()))
    }
}
