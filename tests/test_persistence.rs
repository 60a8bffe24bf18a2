//! Integration tests for saving and loading address books.

mod fixtures;

use contact_book::{AddressBook, BookError, Config, StorageError, StorageFormat};
use fixtures::*;
use std::fs;

fn assert_same_book(left: &AddressBook, right: &AddressBook) {
    assert_eq!(names(left), names(right));
    for record in left {
        assert_eq!(right.get_record(record.name()).unwrap(), record);
    }
}

#[test]
fn test_save_then_load_binary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.bin");
    let book = sample_book();

    book.save(&path).unwrap();
    let mut loaded = AddressBook::new();
    loaded.load(&path).unwrap();

    assert_same_book(&book, &loaded);
}

#[test]
fn test_save_then_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let book = sample_book();

    book.save(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"Bob Marley\""));
    assert!(text.contains("\"29-02-2000\""));

    let mut loaded = AddressBook::new();
    loaded.load(&path).unwrap();
    assert_same_book(&book, &loaded);
}

#[test]
fn test_load_replaces_existing_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.bin");
    sample_book().save(&path).unwrap();

    let mut book = AddressBook::new();
    book.add_record(sample_record("Stranger", None, None));
    book.load(&path).unwrap();

    assert!(!book.contains("Stranger"));
    assert_eq!(book.len(), 5);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.bin");
    sample_book().save(&path).unwrap();

    let mut small = AddressBook::new();
    small.add_record(sample_record("Only", Some("1234567890"), None));
    small.save(&path).unwrap();

    let loaded = AddressBook::open(&path).unwrap();
    assert_same_book(&small, &loaded);
}

#[test]
fn test_load_missing_file_fails_and_keeps_book() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = sample_book();

    let result = book.load(dir.path().join("missing.bin"));
    assert!(matches!(
        result,
        Err(BookError::Storage(StorageError::Io { .. }))
    ));
    assert_same_book(&book, &sample_book());
}

#[test]
fn test_load_garbage_fails_and_keeps_book() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.bin");
    fs::write(&path, b"definitely not a contact book").unwrap();

    let mut book = sample_book();
    assert!(matches!(
        book.load(&path),
        Err(BookError::Storage(StorageError::BadMagic))
    ));
    assert_eq!(book.len(), 5);
}

#[test]
fn test_load_with_wrong_format_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.bin");
    sample_book().save_as(&path, StorageFormat::Json).unwrap();

    let mut book = AddressBook::new();
    assert!(book.load(&path).is_err());
    book.load_as(&path, StorageFormat::Json).unwrap();
    assert_eq!(book.len(), 5);
}

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let book = AddressBook::open(dir.path().join("new.bin")).unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_open_corrupt_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        AddressBook::open(&path),
        Err(BookError::Storage(StorageError::Json(_)))
    ));
}

#[test]
fn test_save_to_missing_directory_keeps_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("book.bin");
    assert!(matches!(
        sample_book().save(&path),
        Err(BookError::Storage(StorageError::Io { .. }))
    ));
    assert!(!path.exists());
}

#[test]
fn test_round_trip_keeps_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.bin");
    let mut book = sample_book();
    {
        let bob = book.get_record_mut("Bob Marley").unwrap();
        bob.remove_phone("5550001111").unwrap();
        bob.set_birthday(Some("06-02-1945")).unwrap();
    }
    book.remove_record("Dave").unwrap();
    book.save(&path).unwrap();

    let loaded = AddressBook::open(&path).unwrap();
    assert_same_book(&book, &loaded);
    let bob = loaded.get_record("Bob Marley").unwrap();
    assert_eq!(bob.phones().len(), 1);
    assert_eq!(bob.birthday().unwrap().to_raw(), "06-02-1945");
}

#[test]
fn test_open_and_save_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        book_path: dir.path().join("contacts.data"),
        storage_format: StorageFormat::Json,
        ..Config::default()
    };

    let mut book = AddressBook::open_with(&config).unwrap();
    assert!(book.is_empty());

    book.add_record(sample_record("Alice", Some("1234567890"), None));
    book.save_with(&config).unwrap();

    let text = fs::read_to_string(&config.book_path).unwrap();
    assert!(text.contains("\"Alice\""));

    let reopened = AddressBook::open_with(&config).unwrap();
    assert_same_book(&book, &reopened);
}
