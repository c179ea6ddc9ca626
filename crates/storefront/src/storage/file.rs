//! JSON-file storage backend.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bistro_cart_core::CartStorage;
use thiserror::Error;

/// Errors from the file-backed store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the storage file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The storage file is not a JSON object of strings.
    #[error("Malformed storage file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value slots kept in a single JSON object file.
///
/// A missing file is an empty store. Writes go to a sibling temporary file
/// that is then renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

type Slots = BTreeMap<String, String>;

impl FileStorage {
    /// Create a store backed by `path`. The file is not touched until the
    /// first read or write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<Slots, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Slots::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&contents).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Slots to start a write from. An unreadable file is replaced rather
    /// than blocking every future write.
    fn slots_for_write(&self) -> Result<Slots, StorageError> {
        match self.read_slots() {
            Ok(slots) => Ok(slots),
            Err(StorageError::Json { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "Replacing malformed storage file");
                Ok(Slots::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write_slots(&self, slots: &Slots) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(slots).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CartStorage for FileStorage {
    type Error = StorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.read_slots()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut slots = self.slots_for_write()?;
        slots.insert(key.to_owned(), value.to_owned());
        self.write_slots(&slots)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), Self::Error> {
        let mut slots = self.slots_for_write()?;
        if slots.remove(key).is_none() {
            return Ok(());
        }
        self.write_slots(&slots)
    }
}
