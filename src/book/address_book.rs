//! The address book: records keyed by name, kept in insertion order.

use super::pages::Pages;
use crate::clock;
use crate::config::Config;
use crate::error::{BookError, BookResult, StorageError};
use crate::models::Record;
use crate::storage::{self, file, StorageFormat};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// A collection of contact records keyed by name.
///
/// Records iterate in the order their names were first inserted. Inserting a
/// record whose name is already present replaces the old record in place.
/// Lookups trim surrounding whitespace from the name, as record names are
/// stored trimmed.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    /// Name to position in `records`.
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from records. Later records replace earlier ones with the same name.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Insert a record under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.index.get(record.name()) {
            Some(&position) => {
                debug!(name = record.name(), "Replacing record");
                Some(std::mem::replace(&mut self.records[position], record))
            }
            None => {
                debug!(name = record.name(), "Adding record");
                self.index.insert(record.name().to_string(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by exact name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::KeyNotFound` if no record has this name.
    pub fn get_record(&self, name: &str) -> BookResult<&Record> {
        self.position(name).map(|position| &self.records[position])
    }

    /// Look up a record by exact name for editing its phones or birthday.
    pub fn get_record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        let position = self.position(name)?;
        Ok(&mut self.records[position])
    }

    /// Remove and return the record with this name.
    pub fn remove_record(&mut self, name: &str) -> BookResult<Record> {
        let position = self.position(name)?;
        self.index.remove(name.trim());
        let record = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        debug!(name, "Removed record");
        Ok(record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name.trim())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &Record> {
        self.records.iter()
    }

    /// Iterate over the records in pages of at most `page_size`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` when `page_size` is zero.
    pub fn iterator(&self, page_size: usize) -> BookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidPageSize);
        }
        Ok(Pages::new(&self.records, page_size))
    }

    /// Iterate in pages of the configured `page_size`.
    pub fn pages_with(&self, config: &Config) -> BookResult<Pages<'_>> {
        self.iterator(config.page_size)
    }

    /// Records whose name contains `query` (ignoring case), or failing that,
    /// one of whose phone numbers contains it. Results keep insertion order.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches_lowercase(&query))
            .collect()
    }

    /// Records with a birthday in the next `within_days` days, soonest first.
    pub fn upcoming_birthdays(&self, within_days: i64) -> Vec<(&Record, i64)> {
        self.upcoming_birthdays_from(clock::today(), within_days)
    }

    /// Upcoming birthdays within the configured `birthday_window_days`.
    pub fn upcoming_birthdays_with(&self, config: &Config) -> Vec<(&Record, i64)> {
        self.upcoming_birthdays(config.birthday_window_days)
    }

    /// Like [`upcoming_birthdays`](Self::upcoming_birthdays), counted from `today`.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .iter()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }

    /// Save the book to `path`, choosing the format from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> BookResult<()> {
        let path = path.as_ref();
        self.save_as(path, StorageFormat::from_path(path))
    }

    /// Save the book to `path` in `format`, replacing any existing file.
    pub fn save_as(&self, path: impl AsRef<Path>, format: StorageFormat) -> BookResult<()> {
        let path = path.as_ref();
        let bytes = storage::encode(&self.records, format)?;
        file::write_replace(path, &bytes)?;
        info!(
            path = %path.display(),
            %format,
            records = self.records.len(),
            "Saved address book"
        );
        Ok(())
    }

    /// Save the book to the configured `book_path` in the configured format.
    pub fn save_with(&self, config: &Config) -> BookResult<()> {
        self.save_as(&config.book_path, config.storage_format)
    }

    /// Replace the book's contents with the book stored at `path`, choosing
    /// the format from the file extension.
    pub fn load(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        let path = path.as_ref();
        self.load_as(path, StorageFormat::from_path(path))
    }

    /// Replace the book's contents with the book stored at `path` in `format`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Storage` if the file is missing, unreadable or not a
    /// valid address book. The current contents are kept on failure.
    pub fn load_as(&mut self, path: impl AsRef<Path>, format: StorageFormat) -> BookResult<()> {
        let path = path.as_ref();
        let bytes = file::read_all(path)?;
        let records = storage::decode(&bytes, format).map_err(|e| {
            warn!(path = %path.display(), %format, error = %e, "Failed to decode address book");
            e
        })?;
        *self = Self::from_records(records);
        info!(
            path = %path.display(),
            %format,
            records = self.records.len(),
            "Loaded address book"
        );
        Ok(())
    }

    /// Load the book at `path`, or start an empty one if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> BookResult<Self> {
        let path = path.as_ref();
        Self::open_as(path, StorageFormat::from_path(path))
    }

    /// Like [`open`](Self::open) with an explicit format.
    pub fn open_as(path: impl AsRef<Path>, format: StorageFormat) -> BookResult<Self> {
        let path = path.as_ref();
        let mut book = Self::new();
        match book.load_as(path, format) {
            Ok(()) => Ok(book),
            Err(BookError::Storage(StorageError::Io { ref source, .. }))
                if source.kind() == ErrorKind::NotFound =>
            {
                info!(path = %path.display(), "No address book file yet, starting empty");
                Ok(book)
            }
            Err(e) => Err(e),
        }
    }

    /// Open the book at the configured `book_path` in the configured format.
    ///
    /// A missing file yields an empty book, as with [`open`](Self::open).
    pub fn open_with(config: &Config) -> BookResult<Self> {
        Self::open_as(&config.book_path, config.storage_format)
    }

    fn position(&self, name: &str) -> BookResult<usize> {
        self.index
            .get(name.trim())
            .copied()
            .ok_or_else(|| BookError::KeyNotFound(name.to_string()))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.add_record(record);
        }
    }
}
