//! Structured command outcomes.
//!
//! Commands never print. They describe what happened as `Notice` values and
//! request side effects as `Effect` values; the presentation layer decides how
//! a notice looks in the active language.

use crate::command::error::CommandError;
use crate::command::registry::Description;
use crate::model::field::Field;
use crate::model::note::Note;
use crate::model::record::Record;
use crate::settings::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Read-only snapshot of one contact for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl From<&Record> for ContactView {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().value().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|phone| phone.value().to_string())
                .collect(),
            birthday: record.birthday().map(|field| field.value().to_string()),
            email: record.email().map(|field| field.value().to_string()),
            address: record.address().map(|field| field.value().to_string()),
        }
    }
}

/// Read-only snapshot of one note for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub id: String,
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
}

impl From<&Note> for NoteView {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.to_string(),
            title: note.title.clone(),
            text: note.text.clone(),
            tags: note.tags.clone(),
        }
    }
}

/// Every user-facing message the core can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Greeting,
    ContactAdded {
        name: String,
        phone: String,
    },
    /// `phone` is the matching or current first phone, if any.
    ContactExists {
        name: String,
        phone: Option<String>,
    },
    ContactUpdated {
        name: String,
        old_phone: Option<String>,
        new_phone: String,
    },
    /// `change` was given the phone the contact already has first.
    PhoneUnchanged {
        name: String,
        phone: String,
    },
    ContactDeleted {
        name: String,
    },
    PhoneAdded {
        name: String,
        phone: String,
    },
    PhoneExists {
        name: String,
        phone: String,
    },
    PhoneRemoved {
        name: String,
        phone: String,
    },
    PhoneMissing {
        name: String,
        phone: String,
    },
    PhoneInfo {
        name: String,
        phones: Vec<String>,
    },
    BirthdaySet {
        name: String,
        birthday: String,
    },
    BirthdayInfo {
        name: String,
        birthday: String,
    },
    NoBirthday {
        name: String,
    },
    UpcomingBirthday {
        name: String,
        date: String,
    },
    NoUpcomingBirthdays {
        days: u32,
    },
    EmailSet {
        name: String,
        email: String,
    },
    AddressSet {
        name: String,
        address: String,
    },
    Contact(ContactView),
    NoteAdded {
        id: String,
        title: String,
    },
    NoteUpdated {
        title: String,
        text: String,
    },
    NoteDeleted {
        title: String,
    },
    Note(NoteView),
    HelpEntry {
        command: String,
        usage: &'static str,
        description: Description,
    },
    LanguageSet(Language),
    Farewell,
    UnknownCommand {
        command: String,
    },
    Failure(CommandError),
    StorageProblem {
        detail: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: Message,
}

impl Notice {
    pub fn info(message: Message) -> Self {
        Self {
            severity: Severity::Info,
            message,
        }
    }

    pub fn warning(message: Message) -> Self {
        Self {
            severity: Severity::Warning,
            message,
        }
    }

    pub fn error(message: Message) -> Self {
        Self {
            severity: Severity::Error,
            message,
        }
    }
}

/// Side effect a command asks its caller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    SetLanguage(Language),
    ShowHelp,
    Exit,
}

/// Successful command outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub notices: Vec<Notice>,
    pub effects: Vec<Effect>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(message: Message) -> Self {
        Self::new().with(Notice::info(message))
    }

    pub fn warning(message: Message) -> Self {
        Self::new().with(Notice::warning(message))
    }

    pub fn with(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
