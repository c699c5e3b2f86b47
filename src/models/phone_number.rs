// src/models/phone_number.rs
//! Phone Number Identifier Format.
//!
//! The standard expects an E.164 number such as `+12065550100`; this type
//! only requires the value to be present.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, SubjectIdentifierError};
use crate::models::format::{Format, FIELD_FORMAT, FIELD_PHONE_NUMBER};
use crate::models::subject_identifier::Identifier;

/// A subject identified by a telephone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumberIdentifier {
    phone_number: String,
}

impl PhoneNumberIdentifier {
    /// Creates a new phone number identifier.
    ///
    /// # Errors
    /// Returns [`SubjectIdentifierError::EmptyPhoneNumber`] if `phone_number` is empty.
    pub fn new(phone_number: impl Into<String>) -> Result<Self> {
        let id = Self {
            phone_number: phone_number.into(),
        };
        id.validate()?;
        Ok(id)
    }

    /// Returns the phone number.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

impl Identifier for PhoneNumberIdentifier {
    fn format(&self) -> Format {
        Format::PhoneNumber
    }

    fn validate(&self) -> Result<()> {
        if self.phone_number.is_empty() {
            return Err(SubjectIdentifierError::EmptyPhoneNumber);
        }
        Ok(())
    }
}

impl Serialize for PhoneNumberIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(FIELD_FORMAT, &self.format())?;
        map.serialize_entry(FIELD_PHONE_NUMBER, &self.phone_number)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_phone_number_identifier() {
        let id = PhoneNumberIdentifier::new("+12065550100").unwrap();
        assert_eq!(id.format(), Format::PhoneNumber);
        assert_eq!(id.phone_number(), "+12065550100");
    }

    #[test]
    fn test_empty_phone_number() {
        assert!(matches!(
            PhoneNumberIdentifier::new(""),
            Err(SubjectIdentifierError::EmptyPhoneNumber)
        ));
    }

    #[test]
    fn test_serialize() {
        let id = PhoneNumberIdentifier::new("+12065550100").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#"{"format":"phone_number","phone_number":"+12065550100"}"#
        );
    }
}
