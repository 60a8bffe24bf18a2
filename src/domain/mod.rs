//! Domain value objects and types.
//!
//! This module contains the validated field wrapper and its kinds: contact
//! names, phone numbers and birthdays. Values are validated at construction
//! time, so an invalid field can never be represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayField, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::{FieldKind, ValidatedField};
pub use name::{Name, NameField};
pub use phone::{Phone, PhoneField, PHONE_DIGITS};
