//! Command name registry.
//!
//! # Responsibility
//! - Bind command names (and aliases) to handler factories.
//! - Expose the built-in command table as a process-wide read-only static.
//!
//! # Invariants
//! - Names are non-empty and contain no whitespace.
//! - A name is bound at most once; aliases are separate names sharing one
//!   factory.
//! - The built-in registry is fully populated before first use and never
//!   mutated afterwards.

use crate::command::{self, Command, CommandError, Target};
use crate::settings::Language;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Builds a handler bound to the collection the dispatcher selected.
pub type CommandFactory =
    for<'a> fn(Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError>;

/// Localized one-line description shown by `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description {
    pub en: &'static str,
    pub uk: &'static str,
}

impl Description {
    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Uk => self.uk,
        }
    }
}

/// Everything the registry knows about one command name.
#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub factory: CommandFactory,
    pub usage: &'static str,
    pub description: Description,
}

impl Debug for CommandEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("usage", &self.usage)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidName(String),
    DuplicateName(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "command name is invalid: `{name}`"),
            Self::DuplicateName(name) => write!(f, "command name already registered: `{name}`"),
        }
    }
}

impl Error for RegistryError {}

static BUILTIN_REGISTRY: Lazy<CommandRegistry> = Lazy::new(|| {
    let mut registry = CommandRegistry::new();
    command::register_builtin(&mut registry).expect("built-in command table is consistent");
    registry
});

/// Returns the process-wide registry of built-in commands.
pub fn builtin_registry() -> &'static CommandRegistry {
    &BUILTIN_REGISTRY
}

/// Name-ordered mapping from command name to entry.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    entries: BTreeMap<String, CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, entry: CommandEntry) -> Result<(), RegistryError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.entries.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        self.entries.insert(name.to_string(), entry);
        Ok(())
    }

    /// Binds every name in `names` to the same entry.
    pub fn register_aliases(
        &mut self,
        names: &[&str],
        entry: CommandEntry,
    ) -> Result<(), RegistryError> {
        for name in names {
            self.register(name, entry)?;
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommandEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
