//! Generic validated field.
//!
//! A [`ValidatedField`] holds a value that has passed the validator of its
//! field kind. The kinds form a closed set ([`NameField`], [`PhoneField`],
//! [`BirthdayField`]); each supplies a validation function and a canonical
//! string form used for display and persistence.
//!
//! [`NameField`]: super::name::NameField
//! [`PhoneField`]: super::phone::PhoneField
//! [`BirthdayField`]: super::birthday::BirthdayField

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A kind of contact field: how raw input is validated and written back out.
///
/// This trait is sealed; the field kinds are defined by this crate.
pub trait FieldKind: sealed::Sealed {
    /// Normalized value stored by the field.
    type Value: Clone + fmt::Debug + PartialEq + Eq + Hash;

    /// Name used in `Debug` output.
    const NAME: &'static str;

    /// Validate and normalize raw input.
    fn validate(raw: &str) -> Result<Self::Value, ValidationError>;

    /// Canonical string form. `validate(&to_raw(v))` yields `v` again.
    fn to_raw(value: &Self::Value) -> String;
}

/// A field value validated by its kind `K`.
pub struct ValidatedField<K: FieldKind> {
    value: K::Value,
    kind: PhantomData<K>,
}

impl<K: FieldKind> ValidatedField<K> {
    /// Validate `raw` and wrap the normalized value.
    ///
    /// # Errors
    ///
    /// Returns the kind-specific [`ValidationError`] if `raw` is rejected.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let value = K::validate(raw)?;
        Ok(Self {
            value,
            kind: PhantomData,
        })
    }

    /// Validate an optional raw value. `None` is "not supplied" and stays `None`.
    pub fn from_optional(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        raw.map(Self::new).transpose()
    }

    /// Get the normalized value.
    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Convert into the normalized value.
    pub fn into_inner(self) -> K::Value {
        self.value
    }

    /// Canonical string form of the value.
    pub fn to_raw(&self) -> String {
        K::to_raw(&self.value)
    }
}

impl<K: FieldKind> Clone for ValidatedField<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: FieldKind> fmt::Debug for ValidatedField<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&self.value).finish()
    }
}

impl<K: FieldKind> PartialEq for ValidatedField<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: FieldKind> Eq for ValidatedField<K> {}

impl<K: FieldKind> Hash for ValidatedField<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// Serde support - serialize as the canonical string
impl<K: FieldKind> Serialize for ValidatedField<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, K: FieldKind> Deserialize<'de> for ValidatedField<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

impl<K: FieldKind> fmt::Display for ValidatedField<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Birthday, Phone};

    #[test]
    fn test_from_optional_none_is_none() {
        assert_eq!(Birthday::from_optional(None).unwrap(), None);
        assert_eq!(Phone::from_optional(None).unwrap(), None);
    }

    #[test]
    fn test_from_optional_some_validates() {
        assert!(Phone::from_optional(Some("12345")).is_err());
        let phone = Phone::from_optional(Some("1234567890")).unwrap().unwrap();
        assert_eq!(phone.value(), "1234567890");
    }

    #[test]
    fn test_debug_uses_kind_name() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(format!("{:?}", phone), "Phone(\"1234567890\")");
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = Phone::new(" 1234567890").unwrap();
        let b = Phone::new("1234567890 ").unwrap();
        assert_eq!(a, b);
    }
}
