//! File-backed key-value storage.
//!
//! Each key is stored as its own file, `{key}.json`, under a base directory.
//! One file per collection keeps a corrupted blob from taking the other
//! collection down with it.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use decider_core::error::{DeciderError, Result};
use decider_core::storage::KeyValueStorage;

use crate::paths::DeciderPaths;

/// Key-value storage that writes one file per key under a base directory.
///
/// The base directory is created lazily on first write; reading from a
/// directory that does not exist yet behaves like reading absent keys.
pub struct FileKeyValueStorage {
    base_dir: PathBuf,
}

impl FileKeyValueStorage {
    /// Creates storage rooted at the default Decider data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_base_dir(DeciderPaths::data_dir()?))
    }

    /// Creates storage rooted at a custom directory (tests, embedders).
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.blob_path(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(DeciderError::io(format!(
                "Failed to read {:?}: {}",
                path, err
            ))),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.base_dir).map_err(|err| {
            DeciderError::io(format!(
                "Failed to create data directory {:?}: {}",
                self.base_dir, err
            ))
        })?;

        let path = self.blob_path(key);
        fs::write(&path, bytes)
            .map_err(|err| DeciderError::io(format!("Failed to write {:?}: {}", path, err)))?;
        tracing::debug!(key, len = bytes.len(), "persisted blob to {:?}", path);
        Ok(())
    }
}
