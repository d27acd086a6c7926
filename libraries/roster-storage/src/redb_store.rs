//! redb-backed key-value store
//!
//! All keys live in a single `kv` table of string keys and string values.
//! redb commits are atomic, so a crash mid-write leaves the previous value
//! in place.

use crate::error::{Result, StorageError};
use async_trait::async_trait;
use redb::{Database, ReadableTable, TableDefinition};
use roster_core::KeyValueStore;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Key-value store persisted to an embedded redb database
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
    path: PathBuf,
}

impl RedbStore {
    /// Open or create the database at `path`, creating parent directories.
    ///
    /// Fails if `path` holds something that is not a redb database, or if
    /// another handle already has it open.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::create(&path).map_err(StorageError::database)?;

        // Create the table up front so reads never see it missing
        let write_txn = db.begin_write().map_err(StorageError::database)?;
        {
            let _table = write_txn
                .open_table(TABLE)
                .map_err(StorageError::database)?;
        }
        write_txn.commit().map_err(StorageError::database)?;

        debug!(path = %path.display(), "Store opened");
        Ok(Self {
            db: Arc::new(db),
            path,
        })
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a single key
    pub fn read(&self, key: &str) -> Result<Option<String>> {
        let read_txn = self.db.begin_read().map_err(StorageError::database)?;
        let table = read_txn
            .open_table(TABLE)
            .map_err(StorageError::database)?;

        let value = table.get(key).map_err(StorageError::database)?;
        Ok(value.map(|guard| guard.value().to_string()))
    }

    /// Write a single key
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        let write_txn = self.db.begin_write().map_err(StorageError::database)?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(StorageError::database)?;
            table.insert(key, value).map_err(StorageError::database)?;
        }
        write_txn.commit().map_err(StorageError::database)?;

        debug!(key, "Key written");
        Ok(())
    }

    /// Delete a single key. Deleting a missing key is a no-op.
    pub fn delete(&self, key: &str) -> Result<()> {
        let write_txn = self.db.begin_write().map_err(StorageError::database)?;
        let existed = {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(StorageError::database)?;
            let removed = table.remove(key).map_err(StorageError::database)?;
            removed.is_some()
        };
        write_txn.commit().map_err(StorageError::database)?;

        debug!(key, existed, "Key deleted");
        Ok(())
    }

    /// Run a blocking database operation off the async runtime
    async fn blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&RedbStore) -> Result<T> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(StorageError::database)?
    }
}

impl fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedbStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl KeyValueStore for RedbStore {
    async fn get(&self, key: &str) -> roster_core::Result<Option<String>> {
        let key = key.to_string();
        Ok(self.blocking(move |store| store.read(&key)).await?)
    }

    async fn set(&self, key: &str, value: &str) -> roster_core::Result<()> {
        let key = key.to_string();
        let value = value.to_string();
        Ok(self
            .blocking(move |store| store.write(&key, &value))
            .await?)
    }

    async fn remove(&self, key: &str) -> roster_core::Result<()> {
        let key = key.to_string();
        Ok(self.blocking(move |store| store.delete(&key)).await?)
    }
}
