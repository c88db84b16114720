use std::{
    collections::HashMap,
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
};

use fs2::FileExt;

use crate::constants::STORE_FILE_NAME;
use crate::error::StoreError;

/// File-backed key-value store for the wallet secrets. The backing file is
/// held under an exclusive lock for the lifetime of the value.
#[derive(Debug)]
pub struct Store {
    entries: HashMap<String, String>,
    path: PathBuf,
    _lock: File,
}

impl Store {
    pub fn load(base_dir: &Path) -> Result<Self, StoreError> {
        let (path, lock) = Self::open_locked(base_dir)?;

        let data = fs::read_to_string(&path).map_err(|e| StoreError::File(e.to_string()))?;
        if data.trim().is_empty() {
            return Err(StoreError::EmptyFile);
        }
        let entries = serde_json::from_str(&data).map_err(|e| StoreError::Serde(e.to_string()))?;

        Ok(Self {
            entries,
            path,
            _lock: lock,
        })
    }

    pub fn create_new(base_dir: &Path) -> Result<Self, StoreError> {
        let (path, lock) = Self::open_locked(base_dir)?;

        let store = Self {
            entries: HashMap::default(),
            path,
            _lock: lock,
        };
        store.save()?;

        Ok(store)
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StoreError::Serde(e.to_string()))?;
        fs::write(&self.path, data).map_err(|e| StoreError::File(e.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    fn open_locked(base_dir: &Path) -> Result<(PathBuf, File), StoreError> {
        fs::create_dir_all(base_dir).map_err(|e| StoreError::File(e.to_string()))?;
        let path = base_dir.join(STORE_FILE_NAME);
        let lock = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| StoreError::File(e.to_string()))?;
        lock.lock_exclusive()
            .map_err(|e| StoreError::File(e.to_string()))?;

        Ok((path, lock))
    }
}
