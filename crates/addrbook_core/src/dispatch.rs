//! Command dispatch boundary.
//!
//! # Responsibility
//! - Resolve a command name through the registry and pick its collection.
//! - Convert every command failure into an error notice.
//!
//! # Invariants
//! - No command failure escapes `dispatch`; this is the single recovery point.
//! - Names containing `note` run against the notes book, all others against
//!   the address book.
//! - Only the `Exit` effect stops the loop.

use crate::command::{
    builtin_registry, CommandRegistry, Effect, Message, Notice, Report, Target,
};
use crate::model::address_book::AddressBook;
use crate::model::note::NotesBook;
use log::{debug, warn};

/// Whether the command loop should read another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Result of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub control: LoopControl,
    pub notices: Vec<Notice>,
    /// Effects left for the session to apply (`SetLanguage`).
    pub effects: Vec<Effect>,
}

impl Dispatched {
    fn single(notice: Notice) -> Self {
        Self {
            control: LoopControl::Continue,
            notices: vec![notice],
            effects: Vec::new(),
        }
    }
}

pub struct Dispatcher<'r> {
    registry: &'r CommandRegistry,
}

impl Dispatcher<'static> {
    /// Dispatcher over the process-wide built-in registry.
    pub fn builtin() -> Self {
        Self::new(builtin_registry())
    }
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r CommandRegistry {
        self.registry
    }

    pub fn dispatch(
        &self,
        command: &str,
        address_book: &mut AddressBook,
        notes_book: &mut NotesBook,
        args: &[String],
    ) -> Dispatched {
        let Some(entry) = self.registry.lookup(command) else {
            warn!("event=command_dispatch module=dispatch status=error reason=unknown_command");
            return Dispatched::single(Notice::error(Message::UnknownCommand {
                command: command.to_string(),
            }));
        };

        let target = Target::select(command, address_book, notes_book);
        let outcome = (entry.factory)(target).and_then(|mut handler| handler.execute(args));

        match outcome {
            Ok(report) => {
                debug!(
                    "event=command_dispatch module=dispatch status=ok command={command} notices={}",
                    report.notices.len()
                );
                self.finish(report)
            }
            Err(err) => {
                warn!(
                    "event=command_dispatch module=dispatch status=error command={command} category={:?}",
                    err.category()
                );
                Dispatched::single(Notice::error(Message::Failure(err)))
            }
        }
    }

    fn finish(&self, report: Report) -> Dispatched {
        let mut control = LoopControl::Continue;
        let mut notices = report.notices;
        let mut effects = Vec::new();
        for effect in report.effects {
            match effect {
                Effect::ShowHelp => notices.extend(self.help_entries()),
                Effect::Exit => control = LoopControl::Stop,
                other => effects.push(other),
            }
        }
        Dispatched {
            control,
            notices,
            effects,
        }
    }

    fn help_entries(&self) -> Vec<Notice> {
        self.registry
            .iter()
            .map(|(name, entry)| {
                Notice::info(Message::HelpEntry {
                    command: name.to_string(),
                    usage: entry.usage,
                    description: entry.description,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandError, Severity};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn unknown_command_is_reported_and_loop_continues() {
        let dispatcher = Dispatcher::builtin();
        let mut book = AddressBook::new();
        let mut notes = NotesBook::new();

        let result = dispatcher.dispatch("fly", &mut book, &mut notes, &[]);

        assert_eq!(result.control, LoopControl::Continue);
        assert_eq!(
            result.notices,
            vec![Notice::error(Message::UnknownCommand {
                command: "fly".to_string()
            })]
        );
    }

    #[test]
    fn arity_failure_becomes_error_notice() {
        let dispatcher = Dispatcher::builtin();
        let mut book = AddressBook::new();
        let mut notes = NotesBook::new();

        let result = dispatcher.dispatch("add", &mut book, &mut notes, &args(&["john"]));

        assert_eq!(result.notices.len(), 1);
        assert_eq!(result.notices[0].severity, Severity::Error);
        assert!(matches!(
            result.notices[0].message,
            Message::Failure(CommandError::Arity { command: "add", .. })
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn help_lists_every_registered_name() {
        let dispatcher = Dispatcher::builtin();
        let mut book = AddressBook::new();
        let mut notes = NotesBook::new();

        let result = dispatcher.dispatch("help", &mut book, &mut notes, &[]);

        assert_eq!(result.notices.len(), dispatcher.registry().len());
        assert!(result.effects.is_empty());
    }

    #[test]
    fn set_language_effect_is_passed_through() {
        let dispatcher = Dispatcher::builtin();
        let mut book = AddressBook::new();
        let mut notes = NotesBook::new();

        let result = dispatcher.dispatch("set-language", &mut book, &mut notes, &args(&["uk"]));

        assert_eq!(
            result.effects,
            vec![Effect::SetLanguage(crate::settings::Language::Uk)]
        );
        assert_eq!(result.control, LoopControl::Continue);
    }
}
