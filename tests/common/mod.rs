#![allow(dead_code)]

use recordstore::{Attributes, Record};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Record keyed by its `id` field
pub fn record_with_id(attributes: Attributes) -> Record {
    Record::keyed_by(["id"], attributes)
}
