//! Process-lifetime in-memory cache.
//!
//! Uses `DashMap` for lock-free concurrent reads — the hot path is a lookup per
//! inbound request. Entries are never evicted: the working set is bounded by
//! the number of distinct pincode pairs ever resolved, and that unbounded
//! growth is an accepted limitation of the service.

use dashmap::DashMap;

pub struct MemoryCache<V: Clone> {
    entries: DashMap<String, V>,
}

impl<V: Clone> MemoryCache<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: String, value: V) {
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
