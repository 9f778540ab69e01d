use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageResult;
use crate::Collection;

/// File-backed store: one JSON array per collection under `data_dir`.
///
/// All operations are whole-collection reads and writes; the expected data
/// volume is small and there is a single logical writer, so no finer-grained
/// access is needed. Writes go through a temp file and rename so a crash
/// mid-write never leaves a half-written collection behind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Path of the file backing a collection
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection.key()))
    }

    /// Whether the collection has been written (or seeded) at least once
    pub fn is_initialized(&self, collection: Collection) -> bool {
        self.path(collection).exists()
    }

    /// Load every document in a collection. An absent file reads as empty.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> StorageResult<Vec<T>> {
        let path = self.path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        let documents = serde_json::from_str(&contents)?;
        Ok(documents)
    }

    /// Replace a collection's contents with `documents`.
    pub fn save<T: Serialize>(&self, collection: Collection, documents: &[T]) -> StorageResult<()> {
        let encoded = serde_json::to_string_pretty(documents)?;
        let path = self.path(collection);

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(collection = %collection, count = documents.len(), "Saved collection");
        Ok(())
    }

    /// Load a collection, seeding it first if it has never been written.
    ///
    /// `seed` runs only on first access; afterwards the persisted file is the
    /// source of truth and the seed is never consulted again.
    pub fn load_or_seed<T>(
        &self,
        collection: Collection,
        seed: impl FnOnce() -> Vec<T>,
    ) -> StorageResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        if !self.is_initialized(collection) {
            let documents = seed();
            self.save(collection, &documents)?;
            tracing::info!(collection = %collection, count = documents.len(), "Seeded collection");
            return Ok(documents);
        }

        self.load(collection)
    }

    /// Remove a collection's backing file. Idempotent.
    pub fn clear(&self, collection: Collection) -> StorageResult<()> {
        let path = self.path(collection);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::info!(collection = %collection, "Cleared collection");
        }
        Ok(())
    }

    /// Remove every collection (reset to the never-initialized state)
    pub fn clear_all(&self) -> StorageResult<()> {
        for collection in Collection::ALL {
            self.clear(collection)?;
        }
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
