use addrbook_core::{
    ContactsStore, Language, LoopControl, Message, Session, SessionConfig, SettingsStore,
};
use std::fs;

fn open(dir: &std::path::Path) -> Session<'static> {
    let (session, notices) = Session::open(&SessionConfig::in_dir(dir));
    assert!(notices.is_empty(), "unexpected startup notices: {notices:?}");
    session
}

#[test]
fn contacts_are_saved_after_every_command() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig::in_dir(dir.path());
    let mut session = open(dir.path());

    session.handle_line("add john 1234567890");

    let saved = ContactsStore::new(&config.contacts_path).load().unwrap();
    assert_eq!(saved.len(), 1);
    assert!(saved.find_by_name("john").is_some());
}

#[test]
fn exit_stops_the_session_and_refuses_further_commands() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig::in_dir(dir.path());
    let mut session = open(dir.path());
    session.handle_line("add john 1234567890");

    let result = session.handle_line("exit");
    assert_eq!(result.control, LoopControl::Stop);
    assert!(session.is_stopped());
    assert!(result
        .notices
        .iter()
        .any(|notice| notice.message == Message::Farewell));

    fs::remove_file(&config.contacts_path).unwrap();
    let after = session.handle_line("add jane 0000000000");
    assert_eq!(after.control, LoopControl::Stop);
    assert!(after.notices.is_empty());
    assert!(session.shutdown().is_empty());
    assert!(!config.contacts_path.exists());
}

#[test]
fn shutdown_saves_when_input_ends_without_exit() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig::in_dir(dir.path());
    let mut session = open(dir.path());
    session.handle_line("add john 1234567890");
    fs::remove_file(&config.contacts_path).unwrap();

    assert!(session.shutdown().is_empty());

    assert!(config.contacts_path.exists());
    assert!(session.is_stopped());
}

#[test]
fn blank_lines_do_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());

    let result = session.handle_line("   ");

    assert_eq!(result.control, LoopControl::Continue);
    assert!(result.notices.is_empty());
}

#[test]
fn set_language_persists_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig::in_dir(dir.path());
    {
        let mut session = open(dir.path());
        assert_eq!(session.language(), Language::En);
        session.handle_line("set-language uk");
        assert_eq!(session.language(), Language::Uk);
    }

    let settings = SettingsStore::new(&config.settings_path).load().unwrap();
    assert_eq!(settings.language, Language::Uk);
    assert_eq!(open(dir.path()).language(), Language::Uk);
}

#[test]
fn reopened_session_sees_contacts_and_notes() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = open(dir.path());
        session.handle_line("add john 1234567890");
        session.handle_line("add-birthday john 01.01.1990");
        session.handle_line("add-note groceries buy milk #errand");
        session.handle_line("quit");
    }

    let session = open(dir.path());
    let john = session.address_book().find_by_name("john").unwrap();
    assert_eq!(john.birthday().unwrap().to_string(), "01.01.1990");
    assert_eq!(session.notes_book().len(), 1);
    assert_eq!(session.notes_book().notes()[0].tags, vec!["#errand"]);
}

#[test]
fn corrupt_contacts_file_is_reported_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig::in_dir(dir.path());
    fs::write(&config.contacts_path, "[1, 2").unwrap();

    let (session, notices) = Session::open(&config);

    assert!(session.address_book().is_empty());
    assert_eq!(notices.len(), 1);
    assert!(matches!(notices[0].message, Message::StorageProblem { .. }));
}
