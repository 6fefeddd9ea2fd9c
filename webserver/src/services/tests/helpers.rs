//! Test helpers for webserver service tests

use crate::services::MemoryStore;

use super::fixtures::create_test_dataset;

/// Store over the built-in seed data
pub fn create_seed_store() -> MemoryStore {
    MemoryStore::new()
}

/// Store over the small fixture dataset
pub fn create_fixture_store() -> MemoryStore {
    MemoryStore::with_dataset(create_test_dataset())
}

/// Collect record ids for order-sensitive assertions
pub fn ids<'a, T, I>(records: I, id: fn(&T) -> &str) -> Vec<String>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().map(|record| id(record).to_string()).collect()
}
