//! Address book file format and typed-field reconstruction.
//!
//! On disk the book is one JSON object keyed by record ID:
//!
//! ```json
//! {
//!   "6f1c...": { "name": "john", "phones": ["1234567890"], "birthday": "01.01.1990" }
//! }
//! ```
//!
//! Loading rebuilds `Name` first, then `phones` as `Phone` values, then every
//! other key through the field constructor table, falling back to `Text`.
//! Typed attributes are re-keyed to their field kind; `Text` keeps its key.

use crate::model::address_book::AddressBook;
use crate::model::field::{revive_field, Field, FieldValue, Name, Phone};
use crate::model::record::Record;
use crate::storage::{read_json, write_json, Loaded, StorageError, StorageResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_CONTACTS_FILE: &str = "addressbook.json";

/// Untyped persisted shape of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().value().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|phone| phone.value().to_string())
                .collect(),
            attributes: record
                .attributes()
                .map(|(key, value)| (key.to_string(), value.value().to_string()))
                .collect(),
        }
    }
}

/// Converts a snapshot of `book` into its persisted map.
pub fn encode_book(book: &AddressBook) -> BTreeMap<String, StoredRecord> {
    book.records()
        .map(|record| (record.id().to_string(), StoredRecord::from(record)))
        .collect()
}

/// Rebuilds a fresh book from its persisted map.
///
/// # Errors
/// - Returns `InvalidEntry` for a malformed ID or a value rejected by its
///   field type. One bad entry fails the whole load.
pub fn decode_book(
    stored: BTreeMap<String, StoredRecord>,
    path: &Path,
) -> StorageResult<AddressBook> {
    let mut book = AddressBook::new();
    for (key, entry) in stored {
        let invalid = |reason: String| StorageError::InvalidEntry {
            path: path.to_path_buf(),
            entry: key.clone(),
            reason,
        };

        let id = Uuid::parse_str(key.as_str()).map_err(|err| invalid(err.to_string()))?;
        let name = Name::new(entry.name).map_err(|err| invalid(err.to_string()))?;
        let mut record = Record::with_id(id, name);
        for phone in entry.phones {
            record.add_phone(Phone::new(phone).map_err(|err| invalid(err.to_string()))?);
        }
        for (attribute, value) in entry.attributes {
            let field = revive_field(attribute.as_str(), value.as_str())
                .map_err(|err| invalid(format!("{attribute}: {err}")))?;
            let key = match &field {
                FieldValue::Text(_) => attribute,
                typed => typed.kind().to_string(),
            };
            record.insert_attribute(key, field);
        }
        book.add_record(record)
            .map_err(|err| invalid(err.to_string()))?;
    }
    Ok(book)
}

/// File-backed address book persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsStore {
    path: PathBuf,
}

impl ContactsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        write_json(&self.path, &encode_book(book))?;
        info!(
            "event=contacts_save module=storage status=ok records={}",
            book.len()
        );
        Ok(())
    }

    /// Loads the book. A missing file yields an empty book.
    pub fn load(&self) -> StorageResult<AddressBook> {
        match read_json::<BTreeMap<String, StoredRecord>>(&self.path)? {
            Some(stored) => decode_book(stored, &self.path),
            None => Ok(AddressBook::new()),
        }
    }

    /// Loads the book, substituting an empty one when the file is unusable.
    pub fn load_or_empty(&self) -> Loaded<AddressBook> {
        let loaded = Loaded::recover(self.load(), "contacts");
        info!(
            "event=contacts_load module=storage status={} records={}",
            if loaded.issue.is_some() { "error" } else { "ok" },
            loaded.value.len()
        );
        loaded
    }
}
