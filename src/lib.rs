//! recordstore - A minimal in-memory record store
//!
//! Records are saved under a composite key and can be looked up by that key
//! or queried by partial attribute match:
//! - `store` holds the data model (values, attribute mappings, records)
//! - `query` holds the match conditions and the matching predicate
//! - `persistence` holds the storage contract and its in-memory backend

pub mod config;
pub mod persistence;
pub mod query;
pub mod store;

/// Re-export commonly used types
pub use config::StoreConfig;
pub use persistence::{InMemoryPersistence, PersistenceStrategy, RecordNotFound};
pub use query::QueryConditions;
pub use store::{Attributes, HashKey, Record, Value};
