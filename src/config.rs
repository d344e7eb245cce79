//! Store configuration

use serde::{Deserialize, Serialize};

/// Default number of records a new store has room for
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Record store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of records to pre-allocate room for
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}
