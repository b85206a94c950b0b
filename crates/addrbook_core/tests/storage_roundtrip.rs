use addrbook_core::{
    Address, AddressBook, Birthday, ContactsStore, Email, Field, FieldValue, Language, Name,
    NoteBody, NotesBook, NotesStore, Phone, Record, Settings, SettingsStore, StorageError,
};
use std::fs;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new(Name::new("john").unwrap());
    john.add_phone(Phone::new("1234567890").unwrap());
    john.add_phone(Phone::new("5555555555").unwrap());
    john.set_birthday(Birthday::new("01.01.1990").unwrap());
    john.set_email(Email::new("john@example.com").unwrap());
    john.set_address(Address::new("kyiv main st").unwrap());
    book.add_record(john).unwrap();

    let mut jane = Record::new(Name::new("jane").unwrap());
    jane.add_phone(Phone::new("0000000000").unwrap());
    book.add_record(jane).unwrap();

    book.add_record(Record::new(Name::new("nobody").unwrap()))
        .unwrap();
    book
}

#[test]
fn contacts_round_trip_preserves_the_book() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContactsStore::new(dir.path().join("addressbook.json"));
    let book = sample_book();

    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, book);
}

#[test]
fn loaded_birthday_is_a_typed_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContactsStore::new(dir.path().join("addressbook.json"));
    store.save(&sample_book()).unwrap();

    let loaded = store.load().unwrap();
    let john = loaded.find_by_name("john").unwrap();

    assert!(matches!(john.attribute("birthday"), Some(FieldValue::Birthday(_))));
    assert_eq!(john.birthday().unwrap().date().to_string(), "1990-01-01");
}

#[test]
fn unknown_attribute_is_kept_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(
        &path,
        r#"{
  "7d3b1c9e-52a1-4d4e-9f63-2b8b7a0d9a11": {
    "name": "john",
    "phones": ["1234567890"],
    "nickname": "jj"
  }
}"#,
    )
    .unwrap();

    let loaded = ContactsStore::new(&path).load().unwrap();
    let john = loaded.find_by_name("john").unwrap();

    match john.attribute("nickname") {
        Some(FieldValue::Text(text)) => assert_eq!(text.value(), "jj"),
        other => panic!("unexpected attribute: {other:?}"),
    }
}

#[test]
fn missing_file_loads_empty_without_issue() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContactsStore::new(dir.path().join("absent.json"));

    let loaded = store.load_or_empty();

    assert!(loaded.value.is_empty());
    assert!(loaded.issue.is_none());
}

#[test]
fn corrupt_file_loads_empty_and_reports_issue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(&path, "{ not json").unwrap();

    let loaded = ContactsStore::new(&path).load_or_empty();

    assert!(loaded.value.is_empty());
    assert!(matches!(loaded.issue, Some(StorageError::Decode { .. })));
}

#[test]
fn invalid_stored_birthday_fails_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(
        &path,
        r#"{
  "7d3b1c9e-52a1-4d4e-9f63-2b8b7a0d9a11": { "name": "john", "phones": [] },
  "8e4c2dae-63b2-4e5f-8a74-3c9c8b1eab22": { "name": "jane", "birthday": "31.02.2020" }
}"#,
    )
    .unwrap();

    let loaded = ContactsStore::new(&path).load_or_empty();

    assert!(loaded.value.is_empty());
    assert!(matches!(
        loaded.issue,
        Some(StorageError::InvalidEntry { ref entry, .. })
            if entry == "8e4c2dae-63b2-4e5f-8a74-3c9c8b1eab22"
    ));
}

#[test]
fn notes_persist_after_each_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    let mut notes = NotesBook::with_store(Vec::new(), NotesStore::new(&path));

    let id = notes
        .add_note("groceries", NoteBody::parse("buy milk #errand"))
        .unwrap()
        .id
        .to_string();
    let on_disk = NotesStore::new(&path).load().unwrap();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].tags, vec!["#errand"]);

    notes
        .edit_note(&id, "shopping", NoteBody::parse("buy bread"))
        .unwrap();
    let on_disk = NotesStore::new(&path).load().unwrap();
    assert_eq!(on_disk[0].title, "shopping");
    assert!(on_disk[0].tags.is_empty());

    notes.delete_note(&id).unwrap();
    assert!(NotesStore::new(&path).load().unwrap().is_empty());
}

#[test]
fn settings_round_trip_and_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json"));
    assert_eq!(store.load().unwrap(), Settings::default());

    store
        .save(&Settings {
            language: Language::Uk,
        })
        .unwrap();

    assert_eq!(store.load().unwrap().language, Language::Uk);
    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"uk\""));
}

#[test]
fn contacts_file_is_keyed_by_record_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContactsStore::new(dir.path().join("addressbook.json"));
    let book = sample_book();
    store.save(&book).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let john = book.find_by_name("john").unwrap();
    let entry = &value[john.id().to_string()];

    assert_eq!(entry["name"], "john");
    assert_eq!(entry["phones"], serde_json::json!(["1234567890", "5555555555"]));
    assert_eq!(entry["birthday"], "01.01.1990");
    assert_eq!(entry["address"], "kyiv main st");
}

#[test]
fn notes_file_omits_empty_tags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    let mut notes = NotesBook::with_store(Vec::new(), NotesStore::new(&path));
    notes.add_note("plain", NoteBody::parse("no tags here")).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value[0]["title"], "plain");
    assert!(value[0].get("tags").is_none());
}

#[test]
fn typed_attribute_keys_are_normalized_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(
        &path,
        r#"{
  "7d3b1c9e-52a1-4d4e-9f63-2b8b7a0d9a11": {
    "name": "john",
    "phones": [],
    "Birthday": "01.01.1990",
    "Nickname": "jj"
  }
}"#,
    )
    .unwrap();
    let store = ContactsStore::new(&path);

    let loaded = store.load().unwrap();
    let john = loaded.find_by_name("john").unwrap();

    assert_eq!(john.birthday().unwrap().value(), "01.01.1990");
    assert!(john.attribute("Birthday").is_none());
    assert!(matches!(john.attribute("Nickname"), Some(FieldValue::Text(_))));

    store.save(&loaded).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &value["7d3b1c9e-52a1-4d4e-9f63-2b8b7a0d9a11"];
    assert_eq!(entry["birthday"], "01.01.1990");
    assert!(entry.get("Birthday").is_none());
}
