//! Test fixtures and sample data for integration tests.

use chrono::{Datelike, Duration, NaiveDate};
use contact_book::{AddressBook, Record};

/// Create a record, panicking on invalid input.
pub fn sample_record(name: &str, phone: Option<&str>, birthday: Option<&str>) -> Record {
    Record::new(name, phone, birthday).expect("fixture record is valid")
}

/// A record with several phones.
pub fn sample_record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = sample_record(name, None, None);
    for phone in phones {
        record
            .add_phone(Some(*phone))
            .expect("fixture phone is valid");
    }
    record
}

/// A small book with a mix of phones and birthdays.
pub fn sample_book() -> AddressBook {
    AddressBook::from_records(vec![
        sample_record("Alice", Some("1234567890"), Some("15-03-2030")),
        sample_record_with_phones("Bob Marley", &["5550001111", "5550002222"]),
        sample_record("Carol", None, Some("29-02-2000")),
        sample_record("alicia keys", Some("0987654321"), None),
        sample_record("Dave", None, None),
    ])
}

/// Format a date the way birthdays are entered.
#[allow(dead_code)]
pub fn birthday_string(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

/// A birthday string `offset` days from `today`, with the year set in the past.
#[allow(dead_code)]
pub fn birthday_in(today: NaiveDate, offset: i64) -> String {
    let date = today + Duration::days(offset);
    let past = date.with_year(1990).unwrap_or(date);
    birthday_string(past)
}

/// Names of `records`, in order.
#[allow(dead_code)]
pub fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<&'a str> {
    records.into_iter().map(Record::name).collect()
}
