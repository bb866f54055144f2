//! Error construction and display tests.

use dramatis::foundation::{CharacterId, Error, ErrorKind};

#[test]
fn helper_constructors_set_the_kind() {
    assert!(matches!(
        Error::character_not_found(CharacterId::new(5)).kind,
        ErrorKind::CharacterNotFound(_)
    ));
    assert!(matches!(
        Error::duplicate_character(CharacterId::new(5)).kind,
        ErrorKind::DuplicateCharacter(_)
    ));
    assert!(matches!(
        Error::unknown_command(":nope").kind,
        ErrorKind::UnknownCommand(_)
    ));
    assert!(matches!(Error::no_backing_file().kind, ErrorKind::NoBackingFile));
}

#[test]
fn display_carries_the_detail() {
    let err = Error::invalid_argument(":remove", "\"x\" is not an id");
    let msg = format!("{err}");
    assert!(msg.contains(":remove"));
    assert!(msg.contains("not an id"));
}

#[test]
fn io_errors_convert() {
    let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
