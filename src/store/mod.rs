//! Record data model
//!
//! Values, attribute mappings, records and the canonical key form used to
//! address them. This module knows nothing about queries or storage.

mod attributes;
mod key;
mod record;
mod value;

pub use attributes::Attributes;
pub use key::HashKey;
pub use record::Record;
pub use value::{Value, ValueConversionError, BYTES_TAG};
