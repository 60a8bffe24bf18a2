//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating a contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace only.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real date in `DD-MM-YYYY` form.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must contain exactly 10 digits: {:?}", phone)
            }
            Self::InvalidBirthday(birthday) => {
                write!(f, "Birthday must be in the format DD-MM-YYYY: {:?}", birthday)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
        assert!(ValidationError::InvalidPhone("123".to_string())
            .to_string()
            .contains("\"123\""));
        assert!(ValidationError::InvalidBirthday("1-1-2000".to_string())
            .to_string()
            .contains("DD-MM-YYYY"));
    }
}
