// src/models/email.rs
//! Email Identifier Format.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, SubjectIdentifierError};
use crate::models::format::{Format, FIELD_EMAIL, FIELD_FORMAT};
use crate::models::subject_identifier::Identifier;

/// A subject identified by an email address.
///
/// The address is stored as given. No syntax check or case folding is done,
/// so `User@example.com` and `user@example.com` are distinct identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailIdentifier {
    email: String,
}

impl EmailIdentifier {
    /// Creates a new email identifier.
    ///
    /// # Errors
    /// Returns [`SubjectIdentifierError::EmptyEmail`] if `email` is empty.
    pub fn new(email: impl Into<String>) -> Result<Self> {
        let id = Self { email: email.into() };
        id.validate()?;
        Ok(id)
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Identifier for EmailIdentifier {
    fn format(&self) -> Format {
        Format::Email
    }

    fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(SubjectIdentifierError::EmptyEmail);
        }
        Ok(())
    }
}

impl Serialize for EmailIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(FIELD_FORMAT, &self.format())?;
        map.serialize_entry(FIELD_EMAIL, &self.email)?;
        map.end()
    }
}
