//! Phone field kind.

use super::errors::ValidationError;
use super::field::{sealed, FieldKind, ValidatedField};

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// Field kind for phone numbers.
///
/// # Validation Rules
///
/// - Surrounding whitespace is trimmed
/// - The trimmed value must be exactly 10 ASCII digits
#[derive(Debug)]
pub enum PhoneField {}

impl sealed::Sealed for PhoneField {}

impl FieldKind for PhoneField {
    type Value = String;

    const NAME: &'static str = "Phone";

    fn validate(raw: &str) -> Result<String, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.len() != PHONE_DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(trimmed.to_string())
    }

    fn to_raw(value: &String) -> String {
        value.clone()
    }
}

/// A validated 10-digit phone number.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new(" 0501234567 ").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
pub type Phone = ValidatedField<PhoneField>;

impl ValidatedField<PhoneField> {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
