use addrbook_core::{
    AddressBook, CommandError, Dispatcher, ErrorCategory, Field, LoopControl, Message, Notice,
    NotesBook, Severity,
};

struct Fixture {
    dispatcher: Dispatcher<'static>,
    book: AddressBook,
    notes: NotesBook,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dispatcher: Dispatcher::builtin(),
            book: AddressBook::new(),
            notes: NotesBook::new(),
        }
    }

    fn run(&mut self, line: &str) -> addrbook_core::Dispatched {
        let (command, args) = addrbook_core::parse_input(line).unwrap();
        self.dispatcher
            .dispatch(&command, &mut self.book, &mut self.notes, &args)
    }

    fn phones_of(&self, name: &str) -> Vec<String> {
        self.book
            .find_by_name(name)
            .unwrap()
            .phones()
            .iter()
            .map(|phone| phone.value().to_string())
            .collect()
    }
}

#[test]
fn hello_greets() {
    let mut fx = Fixture::new();
    let result = fx.run("hello");
    assert_eq!(result.notices, vec![Notice::info(Message::Greeting)]);
}

#[test]
fn all_on_empty_book_reports_no_contacts() {
    let mut fx = Fixture::new();
    let result = fx.run("all");

    assert_eq!(result.control, LoopControl::Continue);
    assert_eq!(result.notices.len(), 1);
    match &result.notices[0].message {
        Message::Failure(err) => {
            assert_eq!(err.category(), ErrorCategory::Empty);
            assert_eq!(err.to_string(), "no contacts available");
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn adding_same_contact_twice_warns_and_keeps_one_record() {
    let mut fx = Fixture::new();
    let first = fx.run("add John 1234567890");
    assert_eq!(
        first.notices,
        vec![Notice::info(Message::ContactAdded {
            name: "john".to_string(),
            phone: "1234567890".to_string(),
        })]
    );

    let second = fx.run("add John 1234567890");

    assert_eq!(
        second.notices,
        vec![Notice::warning(Message::ContactExists {
            name: "john".to_string(),
            phone: Some("1234567890".to_string()),
        })]
    );
    assert_eq!(fx.book.len(), 1);
}

#[test]
fn change_replaces_first_phone_and_reports_old_and_new() {
    let mut fx = Fixture::new();
    fx.run("add john 1234567890");

    let result = fx.run("change john 0000000000");

    assert_eq!(
        result.notices,
        vec![Notice::info(Message::ContactUpdated {
            name: "john".to_string(),
            old_phone: Some("1234567890".to_string()),
            new_phone: "0000000000".to_string(),
        })]
    );
    assert_eq!(fx.phones_of("john"), vec!["0000000000"]);
}

#[test]
fn change_unknown_contact_is_not_found() {
    let mut fx = Fixture::new();
    let result = fx.run("change ghost 0000000000");
    assert_eq!(
        result.notices,
        vec![Notice::error(Message::Failure(CommandError::ContactNotFound(
            "ghost".to_string()
        )))]
    );
}

#[test]
fn add_phone_twice_is_idempotent() {
    let mut fx = Fixture::new();
    fx.run("add john 1234567890");
    fx.run("add-phone john 5555555555");
    let before = fx.phones_of("john");

    let result = fx.run("add-phone john 5555555555");

    assert_eq!(result.notices[0].severity, Severity::Warning);
    assert_eq!(
        result.notices[0].message,
        Message::PhoneExists {
            name: "john".to_string(),
            phone: "5555555555".to_string(),
        }
    );
    assert_eq!(fx.phones_of("john"), before);
    assert_eq!(before, vec!["1234567890", "5555555555"]);
}

#[test]
fn add_birthday_replaces_unconditionally() {
    let mut fx = Fixture::new();
    fx.run("add john 1234567890");
    fx.run("add-birthday john 01.01.1990");
    fx.run("add-birthday john 02.02.1992");

    let result = fx.run("show-birthday john");

    assert_eq!(
        result.notices,
        vec![Notice::info(Message::BirthdayInfo {
            name: "john".to_string(),
            birthday: "02.02.1992".to_string(),
        })]
    );
}

#[test]
fn invalid_birthday_is_rejected_without_state_change() {
    let mut fx = Fixture::new();
    fx.run("add john 1234567890");

    let result = fx.run("add-birthday john 31.02.2020");

    assert_eq!(result.notices[0].severity, Severity::Error);
    assert!(fx.book.find_by_name("john").unwrap().birthday().is_none());
}

#[test]
fn show_phone_lists_all_numbers() {
    let mut fx = Fixture::new();
    fx.run("add john 1234567890");
    fx.run("add-phone john 5555555555");

    let result = fx.run("show-phone john");

    assert_eq!(
        result.notices,
        vec![Notice::info(Message::PhoneInfo {
            name: "john".to_string(),
            phones: vec!["1234567890".to_string(), "5555555555".to_string()],
        })]
    );
}

#[test]
fn all_lists_contacts_by_name() {
    let mut fx = Fixture::new();
    fx.run("add zoe 1111111111");
    fx.run("add adam 2222222222");

    let result = fx.run("all");

    let names: Vec<String> = result
        .notices
        .iter()
        .map(|notice| match &notice.message {
            Message::Contact(view) => view.name.clone(),
            other => panic!("unexpected message: {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["adam", "zoe"]);
}

#[test]
fn delete_and_remove_phone_mutate_records() {
    let mut fx = Fixture::new();
    fx.run("add john 1234567890");
    fx.run("add-phone john 5555555555");

    let removed = fx.run("remove-phone john 1234567890");
    assert_eq!(removed.notices[0].severity, Severity::Info);
    assert_eq!(fx.phones_of("john"), vec!["5555555555"]);

    let missing = fx.run("remove-phone john 1234567890");
    assert_eq!(missing.notices[0].severity, Severity::Warning);

    fx.run("delete john");
    assert!(fx.book.is_empty());
}

#[test]
fn wrong_arity_never_mutates() {
    let mut fx = Fixture::new();
    for line in ["add john", "add john 1234567890 extra", "change john", "add-phone john", "all now"] {
        let result = fx.run(line);
        assert!(matches!(
            result.notices[0].message,
            Message::Failure(CommandError::Arity { .. })
        ));
    }
    assert!(fx.book.is_empty());
}

#[test]
fn add_note_strips_tags_from_text() {
    let mut fx = Fixture::new();

    let result = fx.run("add-note Groceries buy milk #errand");

    assert_eq!(result.notices[0].severity, Severity::Info);
    let note = &fx.notes.notes()[0];
    assert_eq!(note.title, "groceries");
    assert_eq!(note.text, "buy milk");
    assert_eq!(note.tags, vec!["#errand"]);
    assert!(fx.book.is_empty());
}

#[test]
fn add_note_requires_title_and_body() {
    let mut fx = Fixture::new();
    let result = fx.run("add-note groceries");
    assert!(matches!(
        result.notices[0].message,
        Message::Failure(CommandError::Arity {
            command: "add-note",
            ..
        })
    ));
    assert!(fx.notes.is_empty());
}

#[test]
fn note_crud_and_display() {
    let mut fx = Fixture::new();
    assert!(matches!(
        fx.run("display-notes").notices[0].message,
        Message::Failure(CommandError::Empty(_))
    ));

    fx.run("add-note groceries buy milk");
    let id = fx.notes.notes()[0].id.to_string();

    fx.run(&format!("edit-note {id} shopping buy bread #home"));
    let note = &fx.notes.notes()[0];
    assert_eq!(note.title, "shopping");
    assert_eq!(note.text, "buy bread");
    assert_eq!(note.tags, vec!["#home"]);

    let shown = fx.run("display-notes");
    assert_eq!(shown.notices.len(), 1);

    fx.run(&format!("delete-note {id}"));
    assert!(fx.notes.is_empty());

    let missing = fx.run(&format!("delete-note {id}"));
    assert_eq!(
        missing.notices,
        vec![Notice::error(Message::Failure(CommandError::NoteNotFound(id)))]
    );
}

#[test]
fn exit_aliases_stop_the_loop() {
    for alias in ["exit", "close", "quit"] {
        let mut fx = Fixture::new();
        let result = fx.run(alias);
        assert_eq!(result.control, LoopControl::Stop);
        assert_eq!(result.notices, vec![Notice::info(Message::Farewell)]);
    }
}

#[test]
fn set_language_rejects_unknown_codes() {
    let mut fx = Fixture::new();
    let result = fx.run("set-language de");
    assert!(result.effects.is_empty());
    assert!(matches!(
        result.notices[0].message,
        Message::Failure(CommandError::InvalidArgument { .. })
    ));
}
