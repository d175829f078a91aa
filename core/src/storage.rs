//! Single-slot persistent storage.
//!
//! The entire item list lives under one fixed key with last-writer-wins
//! semantics: reads return the whole value, writes overwrite it
//! wholesale. [`FileSlot`] is the production backend (one JSON file in
//! the data directory); [`MemorySlot`] backs tests.

use std::fmt;
use std::path::{Path, PathBuf};

/// The fixed key the item list is stored under.
///
/// For the file backend this becomes the file name `todos.json`.
pub const STORAGE_KEY: &str = "todos";

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum StorageError {
    /// Filesystem I/O error while reading or writing the slot.
    IoError(std::io::Error),
    /// The current item list could not be serialized.
    SerializeError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "storage I/O error: {}", e),
            StorageError::SerializeError(msg) => write!(f, "serialize error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::IoError(e)
    }
}

// ---------------------------------------------------------------------------
// StorageSlot
// ---------------------------------------------------------------------------

/// A single named slot of persistent storage.
///
/// Implementations hold exactly one value. Absence is `Ok(None)`, never
/// an error; a slot that has never been written reads as absent.
pub trait StorageSlot {
    /// Read the whole stored value, or `None` if the slot is empty.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the whole stored value.
    fn write(&mut self, value: &str) -> Result<(), StorageError>;
}

// ---------------------------------------------------------------------------
// FileSlot
// ---------------------------------------------------------------------------

/// File-backed slot: `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot for [`STORAGE_KEY`] under the given data directory.
    ///
    /// The directory is created on first write, not here, so that a
    /// read-only invocation against a fresh directory stays read-only.
    pub fn new(data_dir: &Path) -> Self {
        FileSlot {
            path: data_dir.join(format!("{}.json", STORAGE_KEY)),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e)),
        }
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, value)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemorySlot
// ---------------------------------------------------------------------------

/// In-memory slot for tests and ephemeral use.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        MemorySlot { value: None }
    }

    /// Create a slot pre-seeded with a stored value.
    pub fn with_value(value: &str) -> Self {
        MemorySlot {
            value: Some(value.to_string()),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}
