//! Localized terminal rendering of core notices.
//!
//! # Responsibility
//! - Turn every `Message` into text in the active language.
//! - Color output by severity.
//!
//! # Invariants
//! - Rendering never touches core state.
//! - Error text always starts with its category heading.

use addrbook_core::command::{Collection, ContactView, NoteView};
use addrbook_core::{
    CommandError, ErrorCategory, FieldError, Language, Message, Notice, PhonePolicy, Severity,
};
use crossterm::style::Stylize;

/// Renders `message` in `language` without styling.
pub fn render(message: &Message, language: Language) -> String {
    match language {
        Language::En => render_en(message),
        Language::Uk => render_uk(message),
    }
}

/// Prints one notice: info to stdout in green, warnings and errors to stderr.
pub fn print_notice(notice: &Notice, language: Language) {
    let text = render(&notice.message, language);
    match notice.severity {
        Severity::Info => println!("{}", text.green()),
        Severity::Warning => eprintln!("{}", text.yellow()),
        Severity::Error => eprintln!("{}", text.red()),
    }
}

pub fn print_notices(notices: &[Notice], language: Language) {
    for notice in notices {
        print_notice(notice, language);
    }
}

fn render_en(message: &Message) -> String {
    match message {
        Message::Greeting => "How can I help you?".to_string(),
        Message::ContactAdded { name, phone } => {
            format!("Contact {name} with phone {phone} added.")
        }
        Message::ContactExists { name, phone } => match phone {
            Some(phone) => format!("Contact {name} already exists with phone {phone}."),
            None => format!("Contact {name} already exists."),
        },
        Message::ContactUpdated {
            name,
            old_phone,
            new_phone,
        } => match old_phone {
            Some(old) => format!("Phone of {name} changed from {old} to {new_phone}."),
            None => format!("Phone {new_phone} added to {name}."),
        },
        Message::PhoneUnchanged { name, phone } => {
            format!("Contact {name} already uses phone {phone}; nothing changed.")
        }
        Message::ContactDeleted { name } => format!("Contact {name} deleted."),
        Message::PhoneAdded { name, phone } => format!("Phone {phone} added to {name}."),
        Message::PhoneExists { name, phone } => {
            format!("Contact {name} already has phone {phone}.")
        }
        Message::PhoneRemoved { name, phone } => format!("Phone {phone} removed from {name}."),
        Message::PhoneMissing { name, phone } => format!("Contact {name} has no phone {phone}."),
        Message::PhoneInfo { name, phones } => {
            format!("Phones of {name}: {}", join_or(phones, "none"))
        }
        Message::BirthdaySet { name, birthday } => {
            format!("Birthday {birthday} set for {name}.")
        }
        Message::BirthdayInfo { name, birthday } => format!("Birthday of {name}: {birthday}"),
        Message::NoBirthday { name } => format!("Contact {name} has no birthday set."),
        Message::UpcomingBirthday { name, date } => format!("{name}: congratulate on {date}"),
        Message::NoUpcomingBirthdays { days } => {
            format!("No birthdays in the next {days} days.")
        }
        Message::EmailSet { name, email } => format!("Email {email} set for {name}."),
        Message::AddressSet { name, address } => format!("Address `{address}` set for {name}."),
        Message::Contact(view) => contact_line(view, &CONTACT_LABELS_EN),
        Message::NoteAdded { id, title } => format!("Note `{title}` added with id {id}."),
        Message::NoteUpdated { title, text } => format!("Note updated: {title}: {text}"),
        Message::NoteDeleted { title } => format!("Note `{title}` deleted."),
        Message::Note(view) => note_line(view, "tags"),
        Message::HelpEntry {
            usage, description, ..
        } => format!("{usage:<40} {}", description.text(Language::En)),
        Message::LanguageSet(language) => format!("Language set to {language}."),
        Message::Farewell => "Good bye!".to_string(),
        Message::UnknownCommand { command } => {
            format!("Unknown command `{command}`. Type `help` to list commands.")
        }
        Message::Failure(err) => format!(
            "{}: {}",
            category_en(err.category()),
            error_detail_en(err)
        ),
        Message::StorageProblem { detail } => format!("Storage problem: {detail}"),
    }
}

fn render_uk(message: &Message) -> String {
    match message {
        Message::Greeting => "Чим можу допомогти?".to_string(),
        Message::ContactAdded { name, phone } => {
            format!("Контакт {name} з телефоном {phone} додано.")
        }
        Message::ContactExists { name, phone } => match phone {
            Some(phone) => format!("Контакт {name} вже існує з телефоном {phone}."),
            None => format!("Контакт {name} вже існує."),
        },
        Message::ContactUpdated {
            name,
            old_phone,
            new_phone,
        } => match old_phone {
            Some(old) => format!("Телефон {name} змінено з {old} на {new_phone}."),
            None => format!("Телефон {new_phone} додано до {name}."),
        },
        Message::PhoneUnchanged { name, phone } => {
            format!("Контакт {name} вже має телефон {phone}; нічого не змінено.")
        }
        Message::ContactDeleted { name } => format!("Контакт {name} видалено."),
        Message::PhoneAdded { name, phone } => format!("Телефон {phone} додано до {name}."),
        Message::PhoneExists { name, phone } => {
            format!("Контакт {name} вже має телефон {phone}.")
        }
        Message::PhoneRemoved { name, phone } => format!("Телефон {phone} видалено з {name}."),
        Message::PhoneMissing { name, phone } => {
            format!("Контакт {name} не має телефону {phone}.")
        }
        Message::PhoneInfo { name, phones } => {
            format!("Телефони {name}: {}", join_or(phones, "немає"))
        }
        Message::BirthdaySet { name, birthday } => {
            format!("День народження {birthday} встановлено для {name}.")
        }
        Message::BirthdayInfo { name, birthday } => {
            format!("День народження {name}: {birthday}")
        }
        Message::NoBirthday { name } => format!("Для {name} не вказано день народження."),
        Message::UpcomingBirthday { name, date } => format!("{name}: привітати {date}"),
        Message::NoUpcomingBirthdays { days } => {
            format!("Немає днів народження протягом {days} днів.")
        }
        Message::EmailSet { name, email } => format!("Пошту {email} встановлено для {name}."),
        Message::AddressSet { name, address } => {
            format!("Адресу `{address}` встановлено для {name}.")
        }
        Message::Contact(view) => contact_line(view, &CONTACT_LABELS_UK),
        Message::NoteAdded { id, title } => format!("Нотатку `{title}` додано з id {id}."),
        Message::NoteUpdated { title, text } => format!("Нотатку оновлено: {title}: {text}"),
        Message::NoteDeleted { title } => format!("Нотатку `{title}` видалено."),
        Message::Note(view) => note_line(view, "теги"),
        Message::HelpEntry {
            usage, description, ..
        } => format!("{usage:<40} {}", description.text(Language::Uk)),
        Message::LanguageSet(language) => format!("Мову змінено на {language}."),
        Message::Farewell => "До побачення!".to_string(),
        Message::UnknownCommand { command } => {
            format!("Невідома команда `{command}`. Введіть `help`, щоб побачити список.")
        }
        Message::Failure(err) => format!(
            "{}: {}",
            category_uk(err.category()),
            error_detail_uk(err)
        ),
        Message::StorageProblem { detail } => format!("Проблема зі сховищем: {detail}"),
    }
}

struct ContactLabels {
    phones: &'static str,
    birthday: &'static str,
    email: &'static str,
    address: &'static str,
}

const CONTACT_LABELS_EN: ContactLabels = ContactLabels {
    phones: "phones",
    birthday: "birthday",
    email: "email",
    address: "address",
};

const CONTACT_LABELS_UK: ContactLabels = ContactLabels {
    phones: "телефони",
    birthday: "день народження",
    email: "пошта",
    address: "адреса",
};

fn contact_line(view: &ContactView, labels: &ContactLabels) -> String {
    let mut line = format!("{}, {}: {}", view.name, labels.phones, view.phones.join("; "));
    let optional = [
        (labels.birthday, &view.birthday),
        (labels.email, &view.email),
        (labels.address, &view.address),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            line.push_str(&format!(", {label}: {value}"));
        }
    }
    line
}

fn note_line(view: &NoteView, tags_label: &str) -> String {
    let mut line = format!("[{}] {}: {}", view.id, view.title, view.text);
    if !view.tags.is_empty() {
        line.push_str(&format!(" ({tags_label}: {})", view.tags.join(" ")));
    }
    line
}

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}

fn category_en(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::IncorrectArguments => "Incorrect arguments",
        ErrorCategory::NotFound => "Not found",
        ErrorCategory::Empty => "Nothing to show",
        ErrorCategory::Storage => "Storage error",
        ErrorCategory::Internal => "Internal error",
    }
}

fn category_uk(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::IncorrectArguments => "Неправильні аргументи",
        ErrorCategory::NotFound => "Не знайдено",
        ErrorCategory::Empty => "Нічого показати",
        ErrorCategory::Storage => "Помилка сховища",
        ErrorCategory::Internal => "Внутрішня помилка",
    }
}

fn error_detail_en(err: &CommandError) -> String {
    match err {
        CommandError::Arity { usage, .. } => format!("usage: {usage}"),
        other => other.to_string(),
    }
}

fn error_detail_uk(err: &CommandError) -> String {
    match err {
        CommandError::Arity { usage, .. } => format!("використання: {usage}"),
        CommandError::Invalid(field) => field_error_uk(field),
        CommandError::InvalidArgument { command, value } => {
            format!("`{value}` не підходить для `{command}`")
        }
        CommandError::ContactNotFound(name) => format!("контакт {name} не знайдено"),
        CommandError::NoteNotFound(id) => format!("нотатку {id} не знайдено"),
        CommandError::Empty(Collection::Contacts) => "контактів немає".to_string(),
        CommandError::Empty(Collection::Notes) => "нотаток немає".to_string(),
        CommandError::Storage(detail) => format!("не вдалося зберегти: {detail}"),
        CommandError::TargetMismatch { command } => {
            format!("команда `{command}` не працює з цією колекцією")
        }
        CommandError::Internal(detail) => detail.clone(),
    }
}

fn field_error_uk(err: &FieldError) -> String {
    match err {
        FieldError::EmptyName => "ім'я не може бути порожнім".to_string(),
        FieldError::InvalidPhone { value, policy } => {
            let rule = match policy {
                PhonePolicy::TenDigits => "рівно 10 цифр",
                PhonePolicy::International => "10-15 цифр, можна з +",
            };
            format!("некоректний телефон `{value}` ({rule})")
        }
        FieldError::InvalidBirthday(value) => {
            format!("некоректна дата `{value}`: формат DD.MM.YYYY")
        }
        FieldError::InvalidEmail(value) => format!("некоректна пошта `{value}`"),
        FieldError::EmptyAddress => "адреса не може бути порожньою".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_update_shows_old_and_new_phone() {
        let message = Message::ContactUpdated {
            name: "john".to_string(),
            old_phone: Some("1234567890".to_string()),
            new_phone: "0000000000".to_string(),
        };
        assert_eq!(
            render(&message, Language::En),
            "Phone of john changed from 1234567890 to 0000000000."
        );
    }

    #[test]
    fn unchanged_phone_is_not_reported_as_new_contact() {
        let message = Message::PhoneUnchanged {
            name: "john".to_string(),
            phone: "1234567890".to_string(),
        };
        assert_eq!(
            render(&message, Language::En),
            "Contact john already uses phone 1234567890; nothing changed."
        );
    }

    #[test]
    fn failures_start_with_category_heading() {
        let message = Message::Failure(CommandError::Empty(Collection::Contacts));
        assert_eq!(
            render(&message, Language::En),
            "Nothing to show: no contacts available"
        );
        assert_eq!(
            render(&message, Language::Uk),
            "Нічого показати: контактів немає"
        );
    }

    #[test]
    fn field_errors_are_localized() {
        let message = Message::Failure(CommandError::Invalid(FieldError::InvalidPhone {
            value: "123".to_string(),
            policy: PhonePolicy::TenDigits,
        }));
        let rendered = render(&message, Language::Uk);
        assert!(rendered.starts_with("Неправильні аргументи: некоректний телефон `123`"));
    }

    #[test]
    fn contact_line_skips_missing_fields() {
        let view = ContactView {
            name: "john".to_string(),
            phones: vec!["1234567890".to_string(), "5555555555".to_string()],
            birthday: Some("01.01.1990".to_string()),
            email: None,
            address: None,
        };
        assert_eq!(
            render(&Message::Contact(view), Language::En),
            "john, phones: 1234567890; 5555555555, birthday: 01.01.1990"
        );
    }

    #[test]
    fn note_line_lists_tags() {
        let view = NoteView {
            id: "abc".to_string(),
            title: "groceries".to_string(),
            text: "buy milk".to_string(),
            tags: vec!["#errand".to_string()],
        };
        assert_eq!(
            render(&Message::Note(view), Language::En),
            "[abc] groceries: buy milk (tags: #errand)"
        );
    }
}
