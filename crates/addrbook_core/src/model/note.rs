//! Free-text notes and the notes collection.
//!
//! # Responsibility
//! - Split user input into note text and `#tag` tokens.
//! - Keep notes in insertion order and persist after every mutation.
//!
//! # Invariants
//! - Stored note text never contains `#tag` tokens.
//! - Tags keep their `#` prefix and first-appearance order, without duplicates.
//! - When a store is bound, every successful add/edit/delete is written
//!   before the call returns.

use crate::storage::notes::NotesStore;
use crate::storage::StorageError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[\w-]+").expect("valid tag regex"));
static TAG_WITH_LEADING_WS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*#[\w-]+").expect("valid tag strip regex"));

/// Stable identifier of one note.
pub type NoteId = Uuid;

/// Note text with tags separated out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteBody {
    pub text: String,
    pub tags: Vec<String>,
}

impl NoteBody {
    /// Parses raw input: `#word` tokens become tags and are removed from text.
    pub fn parse(input: &str) -> Self {
        let text = TAG_WITH_LEADING_WS_RE
            .replace_all(input, "")
            .trim()
            .to_string();
        let mut tags: Vec<String> = Vec::new();
        for found in TAG_RE.find_iter(input) {
            let tag = found.as_str();
            if !tags.iter().any(|existing| existing == tag) {
                tags.push(tag.to_string());
            }
        }
        Self { text, tags }
    }

    /// Parses whitespace-split words as one space-joined input.
    pub fn from_words(words: &[String]) -> Self {
        Self::parse(words.join(" ").as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(title: impl Into<String>, body: NoteBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            text: body.text,
            tags: body.tags,
        }
    }
}

/// Notes collection failure.
#[derive(Debug)]
pub enum NotesError {
    /// No note matches the given ID text.
    NoteNotFound(String),
    /// Mutation applied in memory but the write failed.
    Storage(StorageError),
}

impl Display for NotesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<StorageError> for NotesError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Ordered notes, optionally bound to a file store.
#[derive(Debug, Default)]
pub struct NotesBook {
    notes: Vec<Note>,
    store: Option<NotesStore>,
}

impl NotesBook {
    /// In-memory book with no persistence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Book that writes through `store` after every mutation.
    pub fn with_store(notes: Vec<Note>, store: NotesStore) -> Self {
        Self {
            notes,
            store: Some(store),
        }
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes, store: None }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Finds a note by the textual form of its ID.
    pub fn find(&self, id: &str) -> Option<&Note> {
        self.position(id).map(|index| &self.notes[index])
    }

    pub fn add_note(&mut self, title: &str, body: NoteBody) -> Result<&Note, NotesError> {
        let note = Note::new(title, body);
        debug!("event=note_add module=notes status=ok id={}", note.id);
        self.notes.push(note);
        self.persist()?;
        let index = self.notes.len() - 1;
        Ok(&self.notes[index])
    }

    /// Replaces title, text and tags of one note.
    pub fn edit_note(&mut self, id: &str, title: &str, body: NoteBody) -> Result<&Note, NotesError> {
        let index = self
            .position(id)
            .ok_or_else(|| NotesError::NoteNotFound(id.to_string()))?;
        {
            let note = &mut self.notes[index];
            note.title = title.to_string();
            note.text = body.text;
            note.tags = body.tags;
        }
        debug!("event=note_edit module=notes status=ok id={id}");
        self.persist()?;
        Ok(&self.notes[index])
    }

    pub fn delete_note(&mut self, id: &str) -> Result<Note, NotesError> {
        let index = self
            .position(id)
            .ok_or_else(|| NotesError::NoteNotFound(id.to_string()))?;
        let removed = self.notes.remove(index);
        debug!("event=note_delete module=notes status=ok id={id}");
        self.persist()?;
        Ok(removed)
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id = Uuid::parse_str(id.trim()).ok()?;
        self.notes.iter().position(|note| note.id == id)
    }

    fn persist(&self) -> Result<(), StorageError> {
        match &self.store {
            Some(store) => store.save(&self.notes),
            None => Ok(()),
        }
    }
}
