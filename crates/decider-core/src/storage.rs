//! Key-value byte storage trait.
//!
//! This is the seam between the in-memory store and durable bytes. The store
//! writes two independently keyed blobs through it, one per collection;
//! implementations decide where the bytes live (a file per key, a test map).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;

/// Durable key-value byte storage.
///
/// Keys are stable strings chosen by the store at initialization. A key that
/// has never been written reads as `Ok(None)` — the expected first-launch
/// case, not an error.
pub trait KeyValueStorage: Send {
    /// Reads the blob stored under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the blob stored under `key`.
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// In-memory storage backed by a shared map.
///
/// Cloning yields a handle to the same backing map, so a fresh store built on
/// a clone observes everything a previous store persisted. Useful for tests
/// and for embedders that keep no filesystem state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let blobs = self.blobs.lock().expect("storage mutex poisoned");
        Ok(blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut blobs = self.blobs.lock().expect("storage mutex poisoned");
        blobs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
