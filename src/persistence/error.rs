//! Persistence errors

use crate::store::Attributes;
use thiserror::Error;

/// Raised when no record is stored under the requested key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Record with key {key} not found")]
pub struct RecordNotFound {
    key: Attributes,
}

impl RecordNotFound {
    pub fn new(key: Attributes) -> Self {
        RecordNotFound { key }
    }

    /// The key that was looked up
    pub fn key(&self) -> &Attributes {
        &self.key
    }
}

/// Result type of fallible persistence operations
pub type Result<T> = std::result::Result<T, RecordNotFound>;
