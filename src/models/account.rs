// src/models/account.rs
//! Account Identifier Format.
//!
//! Identifies a subject by an `acct:` URI as described in RFC 7565.
//! Only the presence of the URI is checked; its syntax is not.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, SubjectIdentifierError};
use crate::models::format::{Format, FIELD_FORMAT, FIELD_URI};
use crate::models::subject_identifier::Identifier;

/// A subject identified by an account URI.
///
/// # JSON
/// ```json
/// {"format":"account","uri":"acct:example.user@service.example.com"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountIdentifier {
    /// The `acct:` URI of the subject
    uri: String,
}

impl AccountIdentifier {
    /// Creates a new account identifier.
    ///
    /// # Errors
    /// Returns [`SubjectIdentifierError::EmptyUri`] if `uri` is empty.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let id = Self { uri: uri.into() };
        id.validate()?;
        Ok(id)
    }

    /// Returns the account URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl Identifier for AccountIdentifier {
    fn format(&self) -> Format {
        Format::Account
    }

    fn validate(&self) -> Result<()> {
        if self.uri.is_empty() {
            return Err(SubjectIdentifierError::EmptyUri);
        }
        Ok(())
    }
}

impl Serialize for AccountIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(FIELD_FORMAT, &self.format())?;
        map.serialize_entry(FIELD_URI, &self.uri)?;
        map.end()
    }
}
