//! Polymorphic command handlers.
//!
//! # Responsibility
//! - Define the `Command` contract and the collection a handler binds to.
//! - Provide the built-in command set and its registration table.
//!
//! # Invariants
//! - Every command checks its argument count before touching state.
//! - Commands report through `Report`/`CommandError` values and never print.
//! - Persistence is triggered by the caller after `execute` returns, except
//!   for notes, which the notes book writes through on every mutation.

use crate::model::address_book::AddressBook;
use crate::model::note::NotesBook;

pub mod contacts;
pub mod error;
pub mod field_command;
pub mod notes;
pub mod registry;
pub mod report;
pub mod system;

pub use error::{Collection, CommandError, ErrorCategory};
pub use field_command::{FieldArity, FieldCommand, FieldCommandRunner};
pub use registry::{
    builtin_registry, CommandEntry, CommandFactory, CommandRegistry, Description, RegistryError,
};
pub use report::{ContactView, Effect, Message, NoteView, Notice, Report, Severity};

pub type CommandResult = Result<Report, CommandError>;

/// Handler capability: run once against the bound collection.
pub trait Command {
    fn execute(&mut self, args: &[String]) -> CommandResult;
}

/// Collection a handler is constructed against.
#[derive(Debug)]
pub enum Target<'a> {
    Contacts(&'a mut AddressBook),
    Notes(&'a mut NotesBook),
}

impl<'a> Target<'a> {
    /// Notes book for names containing `note`, address book otherwise.
    pub fn select(
        command: &str,
        address_book: &'a mut AddressBook,
        notes_book: &'a mut NotesBook,
    ) -> Self {
        if command.contains("note") {
            Self::Notes(notes_book)
        } else {
            Self::Contacts(address_book)
        }
    }

    pub fn into_contacts(self, command: &'static str) -> Result<&'a mut AddressBook, CommandError> {
        match self {
            Self::Contacts(book) => Ok(book),
            Self::Notes(_) => Err(CommandError::TargetMismatch { command }),
        }
    }

    pub fn into_notes(self, command: &'static str) -> Result<&'a mut NotesBook, CommandError> {
        match self {
            Self::Notes(book) => Ok(book),
            Self::Contacts(_) => Err(CommandError::TargetMismatch { command }),
        }
    }
}

pub(crate) fn exact_args<'s>(
    args: &'s [String],
    count: usize,
    command: &'static str,
    usage: &'static str,
) -> Result<&'s [String], CommandError> {
    if args.len() != count {
        return Err(CommandError::Arity { command, usage });
    }
    Ok(args)
}

pub(crate) fn at_least_args<'s>(
    args: &'s [String],
    count: usize,
    command: &'static str,
    usage: &'static str,
) -> Result<&'s [String], CommandError> {
    if args.len() < count {
        return Err(CommandError::Arity { command, usage });
    }
    Ok(args)
}

macro_rules! entry {
    ($ty:ty) => {
        CommandEntry {
            factory: <$ty>::build,
            usage: <$ty>::USAGE,
            description: <$ty>::DESCRIPTION,
        }
    };
}

/// Registers every built-in command and alias.
pub fn register_builtin(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    use contacts::{
        AddAddress, AddBirthday, AddContact, AddEmail, AddPhone, Birthdays, ChangeContact,
        DeleteContact, RemovePhone, ShowAll, ShowBirthday, ShowPhone,
    };
    use notes::{AddNote, DeleteNote, DisplayNotes, EditNote};
    use system::{Exit, Hello, Help, SetLanguage};

    registry.register("hello", entry!(Hello))?;
    registry.register("help", entry!(Help))?;
    registry.register("set-language", entry!(SetLanguage))?;
    registry.register_aliases(&["exit", "close", "quit"], entry!(Exit))?;

    registry.register("add", entry!(AddContact))?;
    registry.register("change", entry!(ChangeContact))?;
    registry.register("delete", entry!(DeleteContact))?;
    registry.register("show-phone", entry!(ShowPhone))?;
    registry.register("all", entry!(ShowAll))?;
    registry.register("add-phone", entry!(AddPhone))?;
    registry.register("remove-phone", entry!(RemovePhone))?;
    registry.register("add-birthday", entry!(AddBirthday))?;
    registry.register("show-birthday", entry!(ShowBirthday))?;
    registry.register("birthdays", entry!(Birthdays))?;
    registry.register("add-email", entry!(AddEmail))?;
    registry.register("add-address", entry!(AddAddress))?;

    registry.register("add-note", entry!(AddNote))?;
    registry.register("edit-note", entry!(EditNote))?;
    registry.register("delete-note", entry!(DeleteNote))?;
    registry.register("display-notes", entry!(DisplayNotes))?;
    Ok(())
}
