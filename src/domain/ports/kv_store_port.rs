//! Port for the persisted key-value store backing the image cache.

use async_trait::async_trait;

use crate::domain::errors::StoreError;

/// Process-wide string key-value storage.
///
/// Writes overwrite; there is no transactional grouping of keys.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Reads a value.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::RwLock;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Store whose reads and writes can be switched to fail.
    #[derive(Default)]
    pub struct FlakyStore {
        values: RwLock<HashMap<String, String>>,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
    }

    impl FlakyStore {
        /// Creates a store that works until told otherwise.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a store where every operation fails.
        pub fn unavailable() -> Self {
            let store = Self::new();
            store.set_fail_reads(true);
            store.set_fail_writes(true);
            store
        }

        /// Sets read failure behavior.
        pub fn set_fail_reads(&self, value: bool) {
            self.fail_reads.store(value, Ordering::SeqCst);
        }

        /// Sets write failure behavior.
        pub fn set_fail_writes(&self, value: bool) {
            self.fail_writes.store(value, Ordering::SeqCst);
        }

        /// Reads a value directly, bypassing failure injection.
        pub fn raw(&self, key: &str) -> Option<String> {
            self.values.read().get(key).cloned()
        }

        /// Writes a value directly, bypassing failure injection.
        pub fn insert_raw(&self, key: &str, value: &str) {
            self.values
                .write()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[async_trait]
    impl KeyValueStorePort for FlakyStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StoreError::read(key, "mock read failure"));
            }
            Ok(self.raw(key))
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StoreError::write(key, "mock write failure"));
            }
            self.insert_raw(key, value);
            Ok(())
        }
    }
}
