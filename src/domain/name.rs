//! Name field kind.

use super::errors::ValidationError;
use super::field::{sealed, FieldKind, ValidatedField};

/// Field kind for contact names. A name must not be blank and is stored trimmed.
#[derive(Debug)]
pub enum NameField {}

impl sealed::Sealed for NameField {}

impl FieldKind for NameField {
    type Value = String;

    const NAME: &'static str = "Name";

    fn validate(raw: &str) -> Result<String, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(trimmed.to_string())
    }

    fn to_raw(value: &String) -> String {
        value.clone()
    }
}

/// A contact name, the key of a record in the address book.
pub type Name = ValidatedField<NameField>;

impl ValidatedField<NameField> {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("  Alice Smith ").unwrap();
        assert_eq!(name.as_str(), "Alice Smith");
    }

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(Name::new("").unwrap_err(), ValidationError::EmptyName);
        assert_eq!(Name::new("   ").unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("Bob").unwrap();
        assert_eq!(format!("{}", name), "Bob");
    }
}
