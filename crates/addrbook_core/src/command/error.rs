//! Command failure values and their user-facing categories.

use crate::model::address_book::AddressBookError;
use crate::model::field::FieldError;
use crate::model::note::NotesError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collection a listing command found empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Contacts,
    Notes,
}

/// Category shown as the heading of an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    IncorrectArguments,
    NotFound,
    Empty,
    Storage,
    Internal,
}

/// Why a command aborted. No state was changed unless the variant says so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong argument count.
    Arity {
        command: &'static str,
        usage: &'static str,
    },
    /// A field rejected its value.
    Invalid(FieldError),
    /// An argument was well-formed text but not an accepted value.
    InvalidArgument {
        command: &'static str,
        value: String,
    },
    ContactNotFound(String),
    NoteNotFound(String),
    Empty(Collection),
    /// The mutation is kept in memory; only the write failed.
    Storage(String),
    /// Factory received a collection it cannot operate on.
    TargetMismatch {
        command: &'static str,
    },
    /// Broken collection invariant.
    Internal(String),
}

impl CommandError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Arity { .. } | Self::Invalid(_) | Self::InvalidArgument { .. } => {
                ErrorCategory::IncorrectArguments
            }
            Self::ContactNotFound(_) | Self::NoteNotFound(_) => ErrorCategory::NotFound,
            Self::Empty(_) => ErrorCategory::Empty,
            Self::Storage(_) => ErrorCategory::Storage,
            Self::TargetMismatch { .. } | Self::Internal(_) => ErrorCategory::Internal,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity { command, usage } => write!(f, "usage for `{command}`: {usage}"),
            Self::Invalid(err) => write!(f, "{err}"),
            Self::InvalidArgument { command, value } => {
                write!(f, "`{value}` is not accepted by `{command}`")
            }
            Self::ContactNotFound(name) => write!(f, "contact not found: {name}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Empty(Collection::Contacts) => write!(f, "no contacts available"),
            Self::Empty(Collection::Notes) => write!(f, "no notes to display"),
            Self::Storage(detail) => write!(f, "storage failure: {detail}"),
            Self::TargetMismatch { command } => {
                write!(f, "command `{command}` cannot run against this collection")
            }
            Self::Internal(detail) => write!(f, "internal error: {detail}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for CommandError {
    fn from(value: FieldError) -> Self {
        Self::Invalid(value)
    }
}

impl From<NotesError> for CommandError {
    fn from(value: NotesError) -> Self {
        match value {
            NotesError::NoteNotFound(id) => Self::NoteNotFound(id),
            NotesError::Storage(err) => Self::Storage(err.to_string()),
        }
    }
}

impl From<AddressBookError> for CommandError {
    fn from(value: AddressBookError) -> Self {
        Self::Internal(value.to_string())
    }
}
