//! Query conditions and record matching
//!
//! Independent of any storage backend: a backend only needs
//! [`QueryConditions::matches`] to filter its records.

mod conditions;
mod matcher;

pub use conditions::QueryConditions;
pub use matcher::dict_contains;
