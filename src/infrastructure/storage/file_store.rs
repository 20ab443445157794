//! Directory-backed key-value store that persists across sessions.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::{debug, trace};

use crate::domain::errors::StoreError;
use crate::domain::ports::KeyValueStorePort;

const ENTRY_EXTENSION: &str = "kv";

/// Stores each value in its own file named after a hash of the key.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Opens a store in the given directory, creating it if needed.
    ///
    /// # Errors
    /// Returns error if the directory cannot be created.
    pub async fn new(dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir).await.map_err(|e| {
            StoreError::Unavailable(format!("failed to create {}: {e}", dir.display()))
        })?;
        debug!(path = %dir.display(), "Opened image store");
        Ok(Self { dir })
    }

    /// Opens a store in the default location (~/.cache/wanderlens/images/).
    ///
    /// # Errors
    /// Returns error if the directory cannot be created.
    pub async fn default_location() -> Result<Self, StoreError> {
        Self::new(default_store_dir()).await
    }

    /// Returns the backing directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir
            .join(format!("{}.{ENTRY_EXTENSION}", hex::encode(&digest[..16])))
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path).await {
            Ok(value) => {
                trace!(key, path = %path.display(), "Store hit");
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                trace!(key, "Store miss");
                Ok(None)
            }
            Err(e) => Err(StoreError::read(key, e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let dir = self.dir.clone();
        let path = self.entry_path(key);
        let value = value.to_string();

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut temp_file = tempfile::NamedTempFile::new_in(&dir)?;
            temp_file.write_all(value.as_bytes())?;
            temp_file.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::write(key, format!("write task panicked: {e}")))?
        .map_err(|e| StoreError::write(key, e.to_string()))?;

        trace!(key, "Store write");
        Ok(())
    }
}

/// Returns the default store directory path.
fn default_store_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "wanderlens", "wanderlens").map_or_else(
        || {
            std::env::temp_dir()
                .join("wanderlens")
                .join("cache")
                .join("images")
        },
        |dirs| dirs.cache_dir().join("images"),
    )
}
