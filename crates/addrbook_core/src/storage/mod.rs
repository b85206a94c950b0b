//! JSON file persistence for contacts, notes and settings.
//!
//! # Responsibility
//! - Serialize snapshots of live collections to human-inspectable JSON.
//! - Rebuild fresh collections from disk, recovering typed fields.
//!
//! # Invariants
//! - A missing file loads as an empty collection, never as an error.
//! - Corrupt content is reported once and replaced by an empty collection.
//! - Stores keep no reference to live entities.

use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub mod contacts;
pub mod notes;
pub mod settings;

pub use contacts::ContactsStore;
pub use notes::NotesStore;
pub use settings::SettingsStore;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// JSON was well-formed but an entry could not be rebuilt.
    InvalidEntry {
        path: PathBuf,
        entry: String,
        reason: String,
    },
}

impl StorageError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::InvalidEntry { path, .. } => path,
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot access `{}`: {source}", path.display()),
            Self::Decode { path, source } => {
                write!(f, "cannot decode `{}`: {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "cannot encode `{}`: {source}", path.display())
            }
            Self::InvalidEntry {
                path,
                entry,
                reason,
            } => write!(
                f,
                "invalid entry `{entry}` in `{}`: {reason}",
                path.display()
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::InvalidEntry { .. } => None,
        }
    }
}

/// Load result that always carries a usable value.
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    /// Set when the file existed but could not be read or rebuilt.
    pub issue: Option<StorageError>,
}

impl<T: Default> Loaded<T> {
    /// Substitutes `T::default()` on failure and logs the error.
    pub(crate) fn recover(result: StorageResult<T>, store: &'static str) -> Self {
        match result {
            Ok(value) => Self { value, issue: None },
            Err(err) => {
                error!(
                    "event=storage_load module=storage status=error store={store} path={} reason={err}",
                    err.path().display()
                );
                Self {
                    value: T::default(),
                    issue: Some(err),
                }
            }
        }
    }
}

/// Reads and decodes one JSON file. `Ok(None)` when the file does not exist.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(raw.as_str())
        .map(Some)
        .map_err(|source| StorageError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Encodes `value` as pretty JSON and overwrites `path`.
///
/// Parent directories are created when missing. The write is not atomic.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> StorageResult<()> {
    let encoded = serde_json::to_string_pretty(value).map_err(|source| StorageError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, encoded).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
