//! Address book commands.

use crate::command::{
    exact_args, Collection, Command, CommandError, CommandResult, ContactView, Description,
    FieldArity, FieldCommand, Message, Notice, Report, Target,
};
use crate::model::address_book::AddressBook;
use crate::model::field::{Address, Birthday, Email, Field, Name, Phone};
use crate::model::record::Record;
use log::{debug, info};

/// Upcoming-birthday window used when `birthdays` gets no argument.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// `add <name> <phone>`: creates a contact, never overwrites one.
pub struct AddContact<'a> {
    book: &'a mut AddressBook,
}

impl AddContact<'_> {
    pub const NAME: &'static str = "add";
    pub const USAGE: &'static str = "add <name> <phone>";
    pub const DESCRIPTION: Description = Description {
        en: "Adds a new contact to the address book.",
        uk: "Додає новий контакт у адресну книгу.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_contacts(Self::NAME)?;
        Ok(Box::new(AddContact { book }))
    }
}

impl Command for AddContact<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = exact_args(args, 2, Self::NAME, Self::USAGE)?;
        let (name, phone) = (&args[0], &args[1]);
        let name = Name::new(name.as_str())?;

        if let Some(existing) = self.book.find_by_name(name.value()) {
            let shown = if existing.has_phone(phone) {
                Some(phone.clone())
            } else {
                existing.first_phone().map(|first| first.value().to_string())
            };
            return Ok(Report::warning(Message::ContactExists {
                name: name.value().to_string(),
                phone: shown,
            }));
        }

        let phone = Phone::new(phone.as_str())?;
        let mut record = Record::new(name.clone());
        record.add_phone(phone.clone());
        let id = self.book.add_record(record)?;
        info!("event=contact_add module=command status=ok id={id}");

        Ok(Report::info(Message::ContactAdded {
            name: name.value().to_string(),
            phone: phone.value().to_string(),
        }))
    }
}

/// `change <name> <phone>`: replaces the first phone.
pub struct ChangeContact<'a> {
    book: &'a mut AddressBook,
}

impl ChangeContact<'_> {
    pub const NAME: &'static str = "change";
    pub const USAGE: &'static str = "change <name> <phone>";
    pub const DESCRIPTION: Description = Description {
        en: "Changes the phone number of an existing contact.",
        uk: "Змінює номер телефону існуючого контакту.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_contacts(Self::NAME)?;
        Ok(Box::new(ChangeContact { book }))
    }
}

impl Command for ChangeContact<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = exact_args(args, 2, Self::NAME, Self::USAGE)?;
        let (name, new_phone) = (&args[0], &args[1]);
        let name = Name::new(name.as_str())?;
        let record = self
            .book
            .find_by_name_mut(name.value())
            .ok_or_else(|| CommandError::ContactNotFound(name.value().to_string()))?;

        if record
            .first_phone()
            .is_some_and(|phone| phone.value() == new_phone.as_str())
        {
            return Ok(Report::warning(Message::PhoneUnchanged {
                name: name.value().to_string(),
                phone: new_phone.clone(),
            }));
        }

        let phone = Phone::new(new_phone.as_str())?;
        let old_phone = record
            .replace_first_phone(phone)
            .map(|old| old.value().to_string());
        info!(
            "event=contact_phone_change module=command status=ok id={}",
            record.id()
        );
        debug!(
            "event=contact_phone_change module=command old={} new={new_phone}",
            old_phone.as_deref().unwrap_or("-")
        );

        Ok(Report::info(Message::ContactUpdated {
            name: name.value().to_string(),
            old_phone,
            new_phone: new_phone.clone(),
        }))
    }
}

/// `delete <name>`: removes the first contact with that name.
pub struct DeleteContact<'a> {
    book: &'a mut AddressBook,
}

impl DeleteContact<'_> {
    pub const NAME: &'static str = "delete";
    pub const USAGE: &'static str = "delete <name>";
    pub const DESCRIPTION: Description = Description {
        en: "Deletes a contact from the address book.",
        uk: "Видаляє контакт з адресної книги.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_contacts(Self::NAME)?;
        Ok(Box::new(DeleteContact { book }))
    }
}

impl Command for DeleteContact<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = exact_args(args, 1, Self::NAME, Self::USAGE)?;
        let name = &args[0];
        let id = self
            .book
            .find_by_name(name)
            .map(Record::id)
            .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
        let removed = self.book.delete(id)?;
        info!("event=contact_delete module=command status=ok id={id}");
        Ok(Report::info(Message::ContactDeleted {
            name: removed.name().value().to_string(),
        }))
    }
}

/// `show-phone <name>`
pub struct ShowPhone<'a> {
    book: &'a AddressBook,
}

impl ShowPhone<'_> {
    pub const NAME: &'static str = "show-phone";
    pub const USAGE: &'static str = "show-phone <name>";
    pub const DESCRIPTION: Description = Description {
        en: "Shows the phone numbers of a contact.",
        uk: "Показує номери телефону контакту.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_contacts(Self::NAME)?;
        Ok(Box::new(ShowPhone { book }))
    }
}

impl Command for ShowPhone<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = exact_args(args, 1, Self::NAME, Self::USAGE)?;
        let name = &args[0];
        let record = self
            .book
            .find_by_name(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
        Ok(Report::info(Message::PhoneInfo {
            name: name.clone(),
            phones: record
                .phones()
                .iter()
                .map(|phone| phone.value().to_string())
                .collect(),
        }))
    }
}

/// `all`: lists every contact. An empty book is an error outcome.
pub struct ShowAll<'a> {
    book: &'a AddressBook,
}

impl ShowAll<'_> {
    pub const NAME: &'static str = "all";
    pub const USAGE: &'static str = "all";
    pub const DESCRIPTION: Description = Description {
        en: "Shows all contacts in the address book.",
        uk: "Показує всі контакти.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_contacts(Self::NAME)?;
        Ok(Box::new(ShowAll { book }))
    }
}

impl Command for ShowAll<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        exact_args(args, 0, Self::NAME, Self::USAGE)?;
        if self.book.is_empty() {
            return Err(CommandError::Empty(Collection::Contacts));
        }
        let mut report = Report::new();
        for record in self.book.records_by_name() {
            report.push(Notice::info(Message::Contact(ContactView::from(record))));
        }
        Ok(report)
    }
}

/// `show-birthday <name>`
pub struct ShowBirthday<'a> {
    book: &'a AddressBook,
}

impl ShowBirthday<'_> {
    pub const NAME: &'static str = "show-birthday";
    pub const USAGE: &'static str = "show-birthday <name>";
    pub const DESCRIPTION: Description = Description {
        en: "Shows the birthday of a contact.",
        uk: "Показує день народження контакту.",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_contacts(Self::NAME)?;
        Ok(Box::new(ShowBirthday { book }))
    }
}

impl Command for ShowBirthday<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let args = exact_args(args, 1, Self::NAME, Self::USAGE)?;
        let name = &args[0];
        let record = self
            .book
            .find_by_name(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
        Ok(match record.birthday() {
            Some(birthday) => Report::info(Message::BirthdayInfo {
                name: name.clone(),
                birthday: birthday.value().to_string(),
            }),
            None => Report::warning(Message::NoBirthday { name: name.clone() }),
        })
    }
}

/// `birthdays [days]`: birthdays to celebrate within the window.
pub struct Birthdays<'a> {
    book: &'a AddressBook,
}

impl Birthdays<'_> {
    pub const NAME: &'static str = "birthdays";
    pub const USAGE: &'static str = "birthdays [days]";
    pub const DESCRIPTION: Description = Description {
        en: "Shows birthdays to celebrate in the coming days (7 by default).",
        uk: "Показує дні народження найближчими днями (типово 7).",
    };

    pub fn build<'a>(target: Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError> {
        let book = target.into_contacts(Self::NAME)?;
        Ok(Box::new(Birthdays { book }))
    }
}

impl Command for Birthdays<'_> {
    fn execute(&mut self, args: &[String]) -> CommandResult {
        let days = match args {
            [] => DEFAULT_BIRTHDAY_WINDOW_DAYS,
            [days] => days
                .parse::<u32>()
                .map_err(|_| CommandError::InvalidArgument {
                    command: Self::NAME,
                    value: days.clone(),
                })?,
            _ => {
                return Err(CommandError::Arity {
                    command: Self::NAME,
                    usage: Self::USAGE,
                })
            }
        };

        let today = chrono::Local::now().date_naive();
        let upcoming = self.book.upcoming_birthdays(today, days);
        if upcoming.is_empty() {
            return Ok(Report::warning(Message::NoUpcomingBirthdays { days }));
        }
        let mut report = Report::new();
        for entry in &upcoming {
            report.push(Notice::info(Message::UpcomingBirthday {
                name: entry.name.clone(),
                date: entry.formatted_date(),
            }));
        }
        Ok(report)
    }
}

/// `add-phone <name> <phone>`: appends a phone unless already present.
pub struct AddPhone;

impl FieldCommand for AddPhone {
    type Field = Phone;

    const NAME: &'static str = "add-phone";
    const USAGE: &'static str = "add-phone <name> <phone>";
    const DESCRIPTION: Description = Description {
        en: "Adds a new phone number to an existing contact.",
        uk: "Додає новий номер телефону до наявного контакту.",
    };
    const FIELD_ARITY: FieldArity = FieldArity::Exact(1);

    fn build_field(args: &[String]) -> Result<Phone, CommandError> {
        Ok(Phone::new(args[0].as_str())?)
    }

    fn apply_field(record: &mut Record, phone: Phone) -> CommandResult {
        let name = record.name().value().to_string();
        if record.has_phone(phone.value()) {
            return Ok(Report::warning(Message::PhoneExists {
                name,
                phone: phone.value().to_string(),
            }));
        }
        let value = phone.value().to_string();
        record.add_phone(phone);
        Ok(Report::info(Message::PhoneAdded { name, phone: value }))
    }
}

/// `remove-phone <name> <phone>`
pub struct RemovePhone;

impl FieldCommand for RemovePhone {
    type Field = Phone;

    const NAME: &'static str = "remove-phone";
    const USAGE: &'static str = "remove-phone <name> <phone>";
    const DESCRIPTION: Description = Description {
        en: "Removes a phone number from a contact.",
        uk: "Видаляє номер телефону з контакту.",
    };
    const FIELD_ARITY: FieldArity = FieldArity::Exact(1);

    fn build_field(args: &[String]) -> Result<Phone, CommandError> {
        Ok(Phone::new(args[0].as_str())?)
    }

    fn apply_field(record: &mut Record, phone: Phone) -> CommandResult {
        let name = record.name().value().to_string();
        let value = phone.value().to_string();
        if record.remove_phone(phone.value()) {
            Ok(Report::info(Message::PhoneRemoved { name, phone: value }))
        } else {
            Ok(Report::warning(Message::PhoneMissing { name, phone: value }))
        }
    }
}

/// `add-birthday <name> <DD.MM.YYYY>`: sets or replaces the birthday.
pub struct AddBirthday;

impl FieldCommand for AddBirthday {
    type Field = Birthday;

    const NAME: &'static str = "add-birthday";
    const USAGE: &'static str = "add-birthday <name> <DD.MM.YYYY>";
    const DESCRIPTION: Description = Description {
        en: "Adds a birthday to an existing contact.",
        uk: "Додає день народження до наявного контакту.",
    };
    const FIELD_ARITY: FieldArity = FieldArity::Exact(1);

    fn build_field(args: &[String]) -> Result<Birthday, CommandError> {
        Ok(Birthday::new(args[0].as_str())?)
    }

    fn apply_field(record: &mut Record, birthday: Birthday) -> CommandResult {
        let message = Message::BirthdaySet {
            name: record.name().value().to_string(),
            birthday: birthday.value().to_string(),
        };
        record.set_birthday(birthday);
        Ok(Report::info(message))
    }
}

/// `add-email <name> <email>`: sets or replaces the email.
pub struct AddEmail;

impl FieldCommand for AddEmail {
    type Field = Email;

    const NAME: &'static str = "add-email";
    const USAGE: &'static str = "add-email <name> <email>";
    const DESCRIPTION: Description = Description {
        en: "Sets the email of an existing contact.",
        uk: "Встановлює електронну пошту наявного контакту.",
    };
    const FIELD_ARITY: FieldArity = FieldArity::Exact(1);

    fn build_field(args: &[String]) -> Result<Email, CommandError> {
        Ok(Email::new(args[0].as_str())?)
    }

    fn apply_field(record: &mut Record, email: Email) -> CommandResult {
        let message = Message::EmailSet {
            name: record.name().value().to_string(),
            email: email.value().to_string(),
        };
        record.set_email(email);
        Ok(Report::info(message))
    }
}

/// `add-address <name> <words...>`: sets or replaces the address.
pub struct AddAddress;

impl FieldCommand for AddAddress {
    type Field = Address;

    const NAME: &'static str = "add-address";
    const USAGE: &'static str = "add-address <name> <address...>";
    const DESCRIPTION: Description = Description {
        en: "Sets the address of an existing contact.",
        uk: "Встановлює адресу наявного контакту.",
    };
    const FIELD_ARITY: FieldArity = FieldArity::AtLeast(1);

    fn build_field(args: &[String]) -> Result<Address, CommandError> {
        Ok(Address::new(args.join(" "))?)
    }

    fn apply_field(record: &mut Record, address: Address) -> CommandResult {
        let message = Message::AddressSet {
            name: record.name().value().to_string(),
            address: address.value().to_string(),
        };
        record.set_address(address);
        Ok(Report::info(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn run<'a>(
        build: fn(Target<'a>) -> Result<Box<dyn Command + 'a>, CommandError>,
        book: &'a mut AddressBook,
        values: &[&str],
    ) -> CommandResult {
        build(Target::Contacts(book))?.execute(&args(values))
    }

    #[test]
    fn add_validates_phone_before_creating_record() {
        let mut book = AddressBook::new();
        let err = run(AddContact::build, &mut book, &["john", "12345"]).unwrap_err();
        assert!(matches!(err, CommandError::Invalid(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn add_existing_contact_reports_current_phone() {
        let mut book = AddressBook::new();
        run(AddContact::build, &mut book, &["john", "1234567890"]).unwrap();

        let report = run(AddContact::build, &mut book, &["john", "5555555555"]).unwrap();

        assert_eq!(
            report.notices,
            vec![Notice::warning(Message::ContactExists {
                name: "john".to_string(),
                phone: Some("1234567890".to_string()),
            })]
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn change_same_phone_warns_without_mutation() {
        let mut book = AddressBook::new();
        run(AddContact::build, &mut book, &["john", "1234567890"]).unwrap();

        let report = run(ChangeContact::build, &mut book, &["john", "1234567890"]).unwrap();

        assert_eq!(
            report.notices,
            vec![Notice::warning(Message::PhoneUnchanged {
                name: "john".to_string(),
                phone: "1234567890".to_string(),
            })]
        );
        assert_eq!(book.find_by_name("john").unwrap().phones().len(), 1);
    }

    #[test]
    fn field_command_resolves_contact_before_validating_field() {
        let mut book = AddressBook::new();
        let err = run(AddBirthday::build, &mut book, &["ghost", "not-a-date"]).unwrap_err();
        assert_eq!(err, CommandError::ContactNotFound("ghost".to_string()));
    }

    #[test]
    fn add_address_joins_words() {
        let mut book = AddressBook::new();
        run(AddContact::build, &mut book, &["john", "1234567890"]).unwrap();
        run(AddAddress::build, &mut book, &["john", "kyiv", "main", "st"]).unwrap();
        assert_eq!(
            book.find_by_name("john").unwrap().address().unwrap().value(),
            "kyiv main st"
        );
    }

    #[test]
    fn birthdays_rejects_non_numeric_window() {
        let mut book = AddressBook::new();
        let err = run(Birthdays::build, &mut book, &["soon"]).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidArgument {
                command: "birthdays",
                value: "soon".to_string(),
            }
        );
    }

    #[test]
    fn contact_commands_refuse_notes_target() {
        let mut notes = crate::model::note::NotesBook::new();
        let err = ShowAll::build(Target::Notes(&mut notes)).err().unwrap();
        assert_eq!(err, CommandError::TargetMismatch { command: "all" });
    }
}
