//! Birthday field kind and next-occurrence arithmetic.
//!
//! A birthday stores the date exactly as entered. The next anniversary is
//! derived from the current date every time it is asked for, so a stored
//! birthday never goes stale.

use super::errors::ValidationError;
use super::field::{sealed, FieldKind, ValidatedField};
use crate::clock;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Input and storage format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// Two-digit day, two-digit month, four-digit year.
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("valid birthday regex"));

/// Field kind for birthdays in `DD-MM-YYYY` form.
#[derive(Debug)]
pub enum BirthdayField {}

impl sealed::Sealed for BirthdayField {}

impl FieldKind for BirthdayField {
    type Value = NaiveDate;

    const NAME: &'static str = "Birthday";

    fn validate(raw: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    fn to_raw(value: &NaiveDate) -> String {
        value.format(BIRTHDAY_FORMAT).to_string()
    }
}

/// A validated birthday.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15-03-1990").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(
///     birthday.next_occurrence_from(today),
///     NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
/// );
/// ```
pub type Birthday = ValidatedField<BirthdayField>;

impl ValidatedField<BirthdayField> {
    /// The date as entered.
    pub fn date(&self) -> NaiveDate {
        *self.value()
    }

    /// The soonest anniversary on or after `today`.
    pub fn next_occurrence_from(&self, today: NaiveDate) -> NaiveDate {
        let this_year = anniversary_in(self.date(), today.year());
        if this_year < today {
            anniversary_in(self.date(), today.year() + 1)
        } else {
            this_year
        }
    }

    /// The soonest anniversary on or after the current local date.
    pub fn next_occurrence(&self) -> NaiveDate {
        self.next_occurrence_from(clock::today())
    }

    /// Days from `today` to the next anniversary. Zero when it is today.
    pub fn days_until_from(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence_from(today) - today).num_days()
    }

    /// Days from the current local date to the next anniversary.
    pub fn days_until(&self) -> i64 {
        self.days_until_from(clock::today())
    }
}

/// The anniversary of `date` in `year`. Feb 29 falls on Feb 28 in common years.
fn anniversary_in(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}
