//! Validated scalar fields attached to contact records.
//!
//! # Responsibility
//! - Enforce format rules for names, phones, birthdays and other attributes
//!   at construction time.
//! - Map persisted attribute names back to concrete field constructors.
//!
//! # Invariants
//! - A field value never changes after construction.
//! - A value that fails validation never becomes a field.
//! - The constructor table is closed: unknown attribute names revive as `Text`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `DD.MM.YYYY`, the only accepted birthday layout.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));
static INTERNATIONAL_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{9,14}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("valid email regex")
});

/// Field construction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    EmptyName,
    InvalidPhone { value: String, policy: PhonePolicy },
    InvalidBirthday(String),
    InvalidEmail(String),
    EmptyAddress,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidPhone { value, policy } => {
                write!(f, "invalid phone `{value}`: {}", policy.rule())
            }
            Self::InvalidBirthday(value) => {
                write!(f, "invalid date `{value}`: use DD.MM.YYYY")
            }
            Self::InvalidEmail(value) => write!(f, "invalid email `{value}`"),
            Self::EmptyAddress => write!(f, "address cannot be empty"),
        }
    }
}

impl Error for FieldError {}

/// Common surface of every validated field.
pub trait Field {
    /// Attribute name used when the field is persisted.
    const KIND: &'static str;

    fn value(&self) -> &str;
}

macro_rules! impl_field {
    ($ty:ident, $kind:literal) => {
        impl Field for $ty {
            const KIND: &'static str = $kind;

            fn value(&self) -> &str {
                self.value.as_str()
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.value.as_str())
            }
        }
    };
}

/// Contact display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(FieldError::EmptyName);
        }
        Ok(Self { value })
    }
}

impl_field!(Name, "name");

/// Versioned phone validation rule.
///
/// Only one policy is active at a time so persisted data and fixtures agree
/// on exactly one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonePolicy {
    /// Exactly 10 ASCII digits.
    TenDigits,
    /// Optional `+`, then 10-15 digits not starting with `0`.
    International,
}

impl PhonePolicy {
    /// Policy applied by `Phone::new` and by storage loads.
    pub const ACTIVE: PhonePolicy = PhonePolicy::TenDigits;

    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::TenDigits => value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()),
            Self::International => INTERNATIONAL_PHONE_RE.is_match(value),
        }
    }

    /// Human-readable rule used in validation messages.
    pub fn rule(self) -> &'static str {
        match self {
            Self::TenDigits => "phone number must be exactly 10 digits",
            Self::International => "phone number must be 10-15 digits and may start with +",
        }
    }
}

/// Phone number, validated against a [`PhonePolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    value: String,
}

impl Phone {
    /// Validates against [`PhonePolicy::ACTIVE`].
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        Self::with_policy(value, PhonePolicy::ACTIVE)
    }

    pub fn with_policy(value: impl Into<String>, policy: PhonePolicy) -> Result<Self, FieldError> {
        let value = value.into();
        if !policy.accepts(value.as_str()) {
            return Err(FieldError::InvalidPhone { value, policy });
        }
        Ok(Self { value })
    }
}

impl_field!(Phone, "phone");

/// Birthday kept as the original `DD.MM.YYYY` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        // chrono alone also takes one-digit fields, signed years and leading spaces.
        if !BIRTHDAY_SHAPE_RE.is_match(value.as_str()) {
            return Err(FieldError::InvalidBirthday(value));
        }
        let date = NaiveDate::parse_from_str(value.as_str(), BIRTHDAY_FORMAT)
            .map_err(|_| FieldError::InvalidBirthday(value.clone()))?;
        Ok(Self { value, date })
    }

    /// Calendar date parsed from the stored text.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl_field!(Birthday, "birthday");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    value: String,
}

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !EMAIL_RE.is_match(value.as_str()) {
            return Err(FieldError::InvalidEmail(value));
        }
        Ok(Self { value })
    }
}

impl_field!(Email, "email");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    value: String,
}

impl Address {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(FieldError::EmptyAddress);
        }
        Ok(Self { value })
    }
}

impl_field!(Address, "address");

/// Unvalidated base field.
///
/// Holds persisted attributes whose name has no registered field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl_field!(Text, "field");

/// Single-valued record attribute with its concrete field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Birthday(Birthday),
    Email(Email),
    Address(Address),
    Text(Text),
}

impl FieldValue {
    pub fn value(&self) -> &str {
        match self {
            Self::Birthday(field) => field.value(),
            Self::Email(field) => field.value(),
            Self::Address(field) => field.value(),
            Self::Text(field) => field.value(),
        }
    }

    /// Field type name, `field` for untyped attributes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Birthday(_) => Birthday::KIND,
            Self::Email(_) => Email::KIND,
            Self::Address(_) => Address::KIND,
            Self::Text(_) => Text::KIND,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

/// Builds a typed attribute from its persisted string form.
pub type FieldConstructor = fn(&str) -> Result<FieldValue, FieldError>;

static FIELD_CONSTRUCTORS: Lazy<BTreeMap<&'static str, FieldConstructor>> = Lazy::new(|| {
    let mut table: BTreeMap<&'static str, FieldConstructor> = BTreeMap::new();
    table.insert(Birthday::KIND, revive_birthday);
    table.insert(Email::KIND, revive_email);
    table.insert(Address::KIND, revive_address);
    table
});

fn revive_birthday(value: &str) -> Result<FieldValue, FieldError> {
    Birthday::new(value).map(FieldValue::Birthday)
}

fn revive_email(value: &str) -> Result<FieldValue, FieldError> {
    Email::new(value).map(FieldValue::Email)
}

fn revive_address(value: &str) -> Result<FieldValue, FieldError> {
    Address::new(value).map(FieldValue::Address)
}

/// Returns the registered constructor for one attribute name.
///
/// Matching ignores ASCII case, so `Birthday` and `birthday` resolve alike.
pub fn field_constructor(attribute: &str) -> Option<FieldConstructor> {
    FIELD_CONSTRUCTORS
        .get(attribute.to_ascii_lowercase().as_str())
        .copied()
}

/// Attribute names with a registered field type, sorted.
pub fn registered_field_kinds() -> Vec<&'static str> {
    FIELD_CONSTRUCTORS.keys().copied().collect()
}

/// Rebuilds a typed attribute, falling back to [`Text`] for unknown names.
///
/// # Errors
/// - Returns the field's validation error when a registered type rejects
///   the stored value.
pub fn revive_field(attribute: &str, value: &str) -> Result<FieldValue, FieldError> {
    match field_constructor(attribute) {
        Some(construct) => construct(value),
        None => Ok(FieldValue::Text(Text::new(value))),
    }
}
