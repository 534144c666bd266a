pub mod file;

pub use file::FileStore;

use std::collections::HashMap;

/// Key-value persistence boundary for the blocking engine.
///
/// The engine only relies on single-key read/write atomicity. Writes are
/// fire-and-forget: implementations log failures rather than surfacing them,
/// matching the local-cache semantics of the storage this replaces.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// In-memory store for tests and short-lived embeddings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_and_get() {
        let mut store = MemoryStore::new();
        assert!(store.get("missing").is_none());

        store.set("key", "value");
        assert_eq!(store.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn test_memory_store_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("key", "first");
        store.set("key", "second");
        assert_eq!(store.get("key").as_deref(), Some("second"));
    }

    #[test]
    fn test_memory_store_delete() {
        let mut store = MemoryStore::new();
        store.set("key", "value");
        store.delete("key");
        assert!(store.get("key").is_none());

        // Deleting an absent key is a no-op
        store.delete("key");
        assert!(store.get("key").is_none());
    }
}
