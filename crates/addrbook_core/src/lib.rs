//! Core domain logic for the addrbook contact and notes manager.
//! This crate is the single source of truth for validation and command rules.

pub mod command;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod model;
pub mod session;
pub mod settings;
pub mod storage;

pub use command::{
    builtin_registry, Command, CommandEntry, CommandError, CommandRegistry, Effect,
    ErrorCategory, Message, Notice, Report, Severity, Target,
};
pub use config::SessionConfig;
pub use dispatch::{Dispatched, Dispatcher, LoopControl};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::address_book::{AddressBook, AddressBookError, UpcomingBirthday};
pub use model::field::{
    Address, Birthday, Email, Field, FieldError, FieldValue, Name, Phone, PhonePolicy, Text,
};
pub use model::note::{Note, NoteBody, NoteId, NotesBook, NotesError};
pub use model::record::{Record, RecordId};
pub use session::{parse_input, Session};
pub use settings::{Language, Settings};
pub use storage::{ContactsStore, Loaded, NotesStore, SettingsStore, StorageError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
