//! Notes file format: a JSON array of `{ id, title, text, tags? }`.

use crate::model::note::Note;
use crate::storage::{read_json, write_json, Loaded, StorageResult};
use log::info;
use std::path::{Path, PathBuf};

pub const DEFAULT_NOTES_FILE: &str = "notes.json";

/// File-backed notes persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesStore {
    path: PathBuf,
}

impl NotesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, notes: &[Note]) -> StorageResult<()> {
        write_json(&self.path, notes)?;
        info!(
            "event=notes_save module=storage status=ok notes={}",
            notes.len()
        );
        Ok(())
    }

    /// Loads notes in stored order. A missing file yields no notes.
    pub fn load(&self) -> StorageResult<Vec<Note>> {
        Ok(read_json::<Vec<Note>>(&self.path)?.unwrap_or_default())
    }

    pub fn load_or_empty(&self) -> Loaded<Vec<Note>> {
        Loaded::recover(self.load(), "notes")
    }
}
