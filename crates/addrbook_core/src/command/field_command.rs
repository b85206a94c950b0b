//! Template for "find a record by name, build one field, apply it" commands.
//!
//! Implementors only describe the field: how many arguments it takes, how to
//! build it and how to apply it. `FieldCommandRunner` supplies the shared
//! steps and is the `Command` the registry hands out.

use crate::command::{
    at_least_args, exact_args, Command, CommandError, CommandResult, Description, Target,
};
use crate::model::address_book::AddressBook;
use crate::model::record::Record;
use std::marker::PhantomData;

/// Number of arguments a field takes after the contact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArity {
    Exact(usize),
    AtLeast(usize),
}

pub trait FieldCommand: Sized + 'static {
    type Field;

    const NAME: &'static str;
    const USAGE: &'static str;
    const DESCRIPTION: Description;
    const FIELD_ARITY: FieldArity;

    /// Builds the field from the arguments following the contact name.
    fn build_field(args: &[String]) -> Result<Self::Field, CommandError>;

    /// Applies a validated field to the resolved record.
    fn apply_field(record: &mut Record, field: Self::Field) -> CommandResult;

    /// Registry factory.
    fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_contacts(Self::NAME)?;
        Ok(Box::new(FieldCommandRunner::<Self>::new(book)))
    }
}

/// `Command` adapter running one `FieldCommand` against an address book.
pub struct FieldCommandRunner<'a, C: FieldCommand> {
    book: &'a mut AddressBook,
    _command: PhantomData<fn() -> C>,
}

impl<'a, C: FieldCommand> FieldCommandRunner<'a, C> {
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self {
            book,
            _command: PhantomData,
        }
    }
}

impl<C: FieldCommand> Command for FieldCommandRunner<'_, C> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = match C::FIELD_ARITY {
            FieldArity::Exact(count) => exact_args(args, count + 1, C::NAME, C::USAGE)?,
            FieldArity::AtLeast(count) => at_least_args(args, count + 1, C::NAME, C::USAGE)?,
        };
        let (name, field_args) = (&args[0], &args[1..]);
        let record = self
            .book
            .find_by_name_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
        let field = C::build_field(field_args)?;
        C::apply_field(record, field)
    }
}
