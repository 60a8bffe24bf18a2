//! Record model representing one contact in the address book.

use crate::clock;
use crate::domain::{Birthday, Name, Phone, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phone numbers and an optional birthday.
///
/// The name is the record's key in an [`AddressBook`](crate::AddressBook)
/// and cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    /// Phone numbers in insertion order. Duplicates are allowed.
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with an optional first phone and birthday.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is blank or the phone or
    /// birthday are malformed.
    pub fn new(
        name: &str,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        };
        record.add_phone(phone)?;
        record.set_birthday(birthday)?;
        Ok(record)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Replace the birthday. `None` clears it.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> Result<(), ValidationError> {
        self.birthday = Birthday::from_optional(birthday)?;
        Ok(())
    }

    /// Append a phone number. Does nothing when `phone` is `None`.
    pub fn add_phone(&mut self, phone: Option<&str>) -> Result<(), ValidationError> {
        if let Some(phone) = Phone::from_optional(phone)? {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns `Ok(false)` and leaves the record untouched when no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> Result<bool, ValidationError> {
        let target = Phone::new(phone)?;
        match self.phones.iter().position(|p| *p == target) {
            Some(index) => {
                self.phones.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`.
    ///
    /// Both numbers are validated before anything changes. Returns `Ok(false)`
    /// when no phone matches.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<bool, ValidationError> {
        let old_phone = Phone::new(old_phone)?;
        let new_phone = Phone::new(new_phone)?;
        match self.phones.iter_mut().find(|p| **p == old_phone) {
            Some(slot) => {
                *slot = new_phone;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether the record holds `phone` (compared after trimming).
    pub fn has_phone(&self, phone: &str) -> bool {
        let phone = phone.trim();
        self.phones.iter().any(|p| p.as_str() == phone)
    }

    /// Days until the next birthday, or `None` if no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(clock::today())
    }

    /// Days from `today` until the next birthday.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until_from(today))
    }

    /// Case-insensitive substring match against the name, then the phones.
    ///
    /// `query` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, query: &str) -> bool {
        self.name().to_lowercase().contains(query)
            || self
                .phones
                .iter()
                .any(|p| p.as_str().to_lowercase().contains(query))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        if self.phones.is_empty() {
            write!(f, "no phones")?;
        } else {
            let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
            write!(f, "{}", phones.join(", "))?;
        }
        if let Some(ref birthday) = self.birthday {
            write!(f, "; birthday {}", birthday)?;
        }
        Ok(())
    }
}
