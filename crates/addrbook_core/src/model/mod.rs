//! Domain model for contacts and notes.
//!
//! # Responsibility
//! - Define validated field types and the aggregates built from them.
//! - Keep contacts and notes in two independent, exclusively owned
//!   collections.
//!
//! # Invariants
//! - Every record and note is identified by a stable UUID.
//! - No entity is shared between the address book and the notes book.

pub mod address_book;
pub mod field;
pub mod note;
pub mod record;
