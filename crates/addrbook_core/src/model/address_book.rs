//! Identifier-keyed contact collection.
//!
//! # Responsibility
//! - Own every `Record` exclusively, keyed by `RecordId`.
//! - Provide name lookups and birthday projections for commands.
//!
//! # Invariants
//! - Record IDs are unique and never reassigned.
//! - Name lookup is a linear scan that returns the first match; duplicate
//!   names are allowed by the model.

use crate::model::field::{Field, BIRTHDAY_FORMAT};
use crate::model::record::{Record, RecordId};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Address book mutation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    DuplicateId(RecordId),
    RecordNotFound(RecordId),
}

impl Display for AddressBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "record id already present: {id}"),
            Self::RecordNotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for AddressBookError {}

/// One upcoming birthday and the day to congratulate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub record_id: RecordId,
    pub name: String,
    /// Next occurrence, moved to Monday when it falls on a weekend.
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// `DD.MM.YYYY` rendering of `congratulation_date`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<RecordId, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts one record under its own ID.
    ///
    /// # Errors
    /// - Returns `DuplicateId` when the ID is already present.
    pub fn add_record(&mut self, record: Record) -> Result<RecordId, AddressBookError> {
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(AddressBookError::DuplicateId(id));
        }
        self.records.insert(id, record);
        Ok(id)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.records.get_mut(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records
            .values()
            .find(|record| record.name().value() == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .values_mut()
            .find(|record| record.name().value() == name)
    }

    /// Removes one record by ID and returns it.
    pub fn delete(&mut self, id: RecordId) -> Result<Record, AddressBookError> {
        self.records
            .remove(&id)
            .ok_or(AddressBookError::RecordNotFound(id))
    }

    /// Iterates records in ID order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records in display order: name, then ID.
    pub fn records_by_name(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self.records.values().collect();
        records.sort_by(|left, right| {
            left.name()
                .value()
                .cmp(right.name().value())
                .then_with(|| left.id().cmp(&right.id()))
        });
        records
    }

    /// Birthdays whose next occurrence is within `days` days from `today`.
    ///
    /// Results are sorted by congratulation date, then name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(next) = next_occurrence(birthday.date(), today) else {
                continue;
            };
            let distance = (next - today).num_days();
            if distance < 0 || distance > i64::from(days) {
                continue;
            }
            upcoming.push(UpcomingBirthday {
                record_id: record.id(),
                name: record.name().value().to_string(),
                congratulation_date: shift_off_weekend(next),
            });
        }
        upcoming.sort_by(|left, right| {
            left.congratulation_date
                .cmp(&right.congratulation_date)
                .then_with(|| left.name.cmp(&right.name))
        });
        upcoming
    }
}

fn anniversary_in(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    // 29 February is observed on 28 February in non-leap years.
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birth.month(), birth.day() - 1))
}

fn next_occurrence(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birth, today.year())?;
    if this_year < today {
        anniversary_in(birth, today.year() + 1)
    } else {
        Some(this_year)
    }
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)).unwrap_or(date),
        Weekday::Sun => date.checked_add_days(Days::new(1)).unwrap_or(date),
        _ => date,
    }
}
