//! Contact record aggregate.
//!
//! # Invariants
//! - A record always carries a valid `Name`; the name never changes.
//! - `id` is generated once and stays stable for the record lifetime.
//! - Phone uniqueness is a command-level concern, not enforced here.
//! - Attribute keys match the `Field::KIND` of the value stored under them.

use crate::model::field::{Address, Birthday, Email, Field, FieldValue, Name, Phone};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Stable identifier of one contact record.
pub type RecordId = Uuid;

/// One contact: name, phones and named single-valued attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: Name,
    phones: Vec<Phone>,
    attributes: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Creates a record with a freshly generated ID.
    pub fn new(name: Name) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a record with a caller-provided ID.
    ///
    /// Used by storage loads where identity already exists on disk.
    pub fn with_id(id: RecordId, name: Name) -> Self {
        Self {
            id,
            name,
            phones: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    pub fn has_phone(&self, value: &str) -> bool {
        self.phones.iter().any(|phone| phone.value() == value)
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Removes every phone equal to `value`. Returns whether one was removed.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|phone| phone.value() != value);
        self.phones.len() != before
    }

    /// Replaces the first phone in place, returning the previous one.
    ///
    /// A record without phones gets `phone` appended and `None` returned.
    pub fn replace_first_phone(&mut self, phone: Phone) -> Option<Phone> {
        match self.phones.first_mut() {
            Some(first) => Some(std::mem::replace(first, phone)),
            None => {
                self.phones.push(phone);
                None
            }
        }
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        match self.attributes.get(Birthday::KIND) {
            Some(FieldValue::Birthday(birthday)) => Some(birthday),
            _ => None,
        }
    }

    /// Sets or replaces the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.attributes
            .insert(Birthday::KIND.to_string(), FieldValue::Birthday(birthday));
    }

    pub fn email(&self) -> Option<&Email> {
        match self.attributes.get(Email::KIND) {
            Some(FieldValue::Email(email)) => Some(email),
            _ => None,
        }
    }

    pub fn set_email(&mut self, email: Email) {
        self.attributes
            .insert(Email::KIND.to_string(), FieldValue::Email(email));
    }

    pub fn address(&self) -> Option<&Address> {
        match self.attributes.get(Address::KIND) {
            Some(FieldValue::Address(address)) => Some(address),
            _ => None,
        }
    }

    pub fn set_address(&mut self, address: Address) {
        self.attributes
            .insert(Address::KIND.to_string(), FieldValue::Address(address));
    }

    /// Returns one attribute by persisted name.
    pub fn attribute(&self, key: &str) -> Option<&FieldValue> {
        self.attributes.get(key)
    }

    /// Iterates attributes in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Stores an attribute revived from persisted data under `key`.
    pub(crate) fn insert_attribute(&mut self, key: impl Into<String>, value: FieldValue) {
        self.attributes.insert(key.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    #[test]
    fn new_record_has_no_optional_fields() {
        let record = record("john");
        assert!(!record.id().is_nil());
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
        assert!(record.email().is_none());
        assert_eq!(record.attributes().count(), 0);
    }

    #[test]
    fn replace_first_phone_keeps_position() {
        let mut record = record("john");
        record.add_phone(Phone::new("1111111111").unwrap());
        record.add_phone(Phone::new("2222222222").unwrap());

        let old = record.replace_first_phone(Phone::new("3333333333").unwrap());

        assert_eq!(old.unwrap().value(), "1111111111");
        let values: Vec<&str> = record.phones().iter().map(|p| p.value()).collect();
        assert_eq!(values, vec!["3333333333", "2222222222"]);
    }

    #[test]
    fn replace_first_phone_appends_when_empty() {
        let mut record = record("john");
        assert!(record
            .replace_first_phone(Phone::new("1111111111").unwrap())
            .is_none());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn remove_phone_reports_missing_value() {
        let mut record = record("john");
        record.add_phone(Phone::new("1111111111").unwrap());
        assert!(!record.remove_phone("2222222222"));
        assert!(record.remove_phone("1111111111"));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn set_birthday_replaces_previous_value() {
        let mut record = record("john");
        record.set_birthday(Birthday::new("01.01.1990").unwrap());
        record.set_birthday(Birthday::new("02.02.1992").unwrap());
        assert_eq!(record.birthday().unwrap().value(), "02.02.1992");
        assert_eq!(record.attributes().count(), 1);
    }
}
