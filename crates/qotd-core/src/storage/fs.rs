//! File-backed key/value store

use super::KvStore;
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores each key as a file named after it inside a root directory.
///
/// The directory is created on first write, so pointing this at a path that
/// does not exist yet is fine.
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store reads and writes
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        // Keys become file names, so anything that could escape the root
        // directory is rejected.
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains('/')
            || key.contains('\\')
        {
            return Err(Error::Storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(key))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.key_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Storage(format!(
                "failed to read {}: {err}",
                path.display()
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.root).map_err(|err| {
            Error::Storage(format!("failed to create {}: {err}", self.root.display()))
        })?;
        fs::write(&path, value).map_err(|err| {
            Error::Storage(format!("failed to write {}: {err}", path.display()))
        })
    }
}
