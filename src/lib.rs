//! Contact Book - a personal address book data store.
//!
//! This library models named contact records with validated phone numbers and
//! an optional birthday, keeps them in an insertion-ordered address book and
//! saves or loads the whole book to a single file.
//!
//! # Architecture
//!
//! - **domain**: Validated field wrapper and its kinds (name, phone, birthday)
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` collection, search and pagination
//! - **storage**: Versioned binary/JSON encoding and file I/O
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration from environment variables
//! - **logging**: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//! book.add_record(Record::new("Alice", Some("1234567890"), Some("15-03-2030")).unwrap());
//!
//! assert_eq!(book.search("alice").len(), 1);
//! assert!(book.search("999").is_empty());
//! ```

pub mod book;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidatedField, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError};
pub use models::Record;
pub use storage::StorageFormat;
