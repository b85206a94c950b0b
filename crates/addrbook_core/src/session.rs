//! Interactive session state and loop control.
//!
//! # Responsibility
//! - Own the address book, notes book and settings for one run.
//! - Turn raw input lines into dispatches and apply returned effects.
//! - Persist the address book after every command and once on stop.
//!
//! # Invariants
//! - After `Stop` the session refuses further commands and never saves again.
//! - Termination state lives here, not in a global flag.

use crate::command::{Effect, Message, Notice};
use crate::config::SessionConfig;
use crate::dispatch::{Dispatched, Dispatcher, LoopControl};
use crate::model::address_book::AddressBook;
use crate::model::note::NotesBook;
use crate::settings::{Language, Settings};
use crate::storage::{ContactsStore, NotesStore, SettingsStore, StorageError};
use log::info;

/// Splits one input line into a lowercased command name and arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let lowered = line.to_lowercase();
    let mut parts = lowered.split_whitespace().map(str::to_string);
    let command = parts.next()?;
    Some((command, parts.collect()))
}

pub struct Session<'r> {
    dispatcher: Dispatcher<'r>,
    address_book: AddressBook,
    notes_book: NotesBook,
    settings: Settings,
    contacts_store: ContactsStore,
    settings_store: SettingsStore,
    stopped: bool,
}

impl Session<'static> {
    /// Loads all files named by `config`.
    ///
    /// Unreadable files are replaced by empty data; each problem is returned
    /// as an error notice for the caller to show.
    pub fn open(config: &SessionConfig) -> (Self, Vec<Notice>) {
        let contacts_store = ContactsStore::new(&config.contacts_path);
        let notes_store = NotesStore::new(&config.notes_path);
        let settings_store = SettingsStore::new(&config.settings_path);

        let contacts = contacts_store.load_or_empty();
        let notes = notes_store.load_or_empty();
        let settings = settings_store.load_or_default();

        let notices = [contacts.issue, notes.issue, settings.issue]
            .into_iter()
            .flatten()
            .map(|err| storage_notice(&err))
            .collect();

        let session = Self::with_parts(
            Dispatcher::builtin(),
            contacts.value,
            NotesBook::with_store(notes.value, notes_store),
            settings.value,
            contacts_store,
            settings_store,
        );
        info!(
            "event=session_open module=session status=ok records={} notes={} language={}",
            session.address_book.len(),
            session.notes_book.len(),
            session.settings.language
        );
        (session, notices)
    }
}

impl<'r> Session<'r> {
    pub fn with_parts(
        dispatcher: Dispatcher<'r>,
        address_book: AddressBook,
        notes_book: NotesBook,
        settings: Settings,
        contacts_store: ContactsStore,
        settings_store: SettingsStore,
    ) -> Self {
        Self {
            dispatcher,
            address_book,
            notes_book,
            settings,
            contacts_store,
            settings_store,
            stopped: false,
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn notes_book(&self) -> &NotesBook {
        &self.notes_book
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Parses and runs one input line. Blank lines do nothing.
    pub fn handle_line(&mut self, line: &str) -> Dispatched {
        match parse_input(line) {
            Some((command, args)) => self.execute(&command, &args),
            None => Dispatched {
                control: self.control(),
                notices: Vec::new(),
                effects: Vec::new(),
            },
        }
    }

    /// Runs one command, applies its effects and persists the address book.
    pub fn execute(&mut self, command: &str, args: &[String]) -> Dispatched {
        if self.stopped {
            return Dispatched {
                control: LoopControl::Stop,
                notices: Vec::new(),
                effects: Vec::new(),
            };
        }

        let mut dispatched =
            self.dispatcher
                .dispatch(command, &mut self.address_book, &mut self.notes_book, args);

        for effect in &dispatched.effects {
            if let Effect::SetLanguage(language) = effect {
                self.settings.language = *language;
                if let Err(err) = self.settings_store.save(&self.settings) {
                    dispatched.notices.push(storage_notice(&err));
                }
            }
        }

        if dispatched.control == LoopControl::Stop {
            self.stopped = true;
            info!("event=session_stop module=session status=ok");
        }
        if let Err(err) = self.contacts_store.save(&self.address_book) {
            dispatched.notices.push(storage_notice(&err));
        }
        dispatched
    }

    /// Persists the address book when input ended without an exit command.
    pub fn shutdown(&mut self) -> Vec<Notice> {
        if self.stopped {
            return Vec::new();
        }
        self.stopped = true;
        info!("event=session_stop module=session status=ok reason=end_of_input");
        match self.contacts_store.save(&self.address_book) {
            Ok(()) => Vec::new(),
            Err(err) => vec![storage_notice(&err)],
        }
    }

    fn control(&self) -> LoopControl {
        if self.stopped {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }
}

fn storage_notice(err: &StorageError) -> Notice {
    Notice::error(Message::StorageProblem {
        detail: err.to_string(),
    })
}
