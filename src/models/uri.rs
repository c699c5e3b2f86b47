// src/models/uri.rs
//! Uniform Resource Identifier (URI) Format.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, SubjectIdentifierError};
use crate::models::format::{Format, FIELD_FORMAT, FIELD_URI};
use crate::models::subject_identifier::Identifier;

/// A subject identified by a URI, such as a profile page.
///
/// Shares the `uri` field name with [`AccountIdentifier`](super::account::AccountIdentifier);
/// the two are told apart only by `format`, so an account and a URI
/// identifier with the same value are not duplicates of each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriIdentifier {
    uri: String,
}

impl UriIdentifier {
    /// Creates a new URI identifier.
    ///
    /// # Errors
    /// Returns [`SubjectIdentifierError::EmptyUri`] if `uri` is empty.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let id = Self { uri: uri.into() };
        id.validate()?;
        Ok(id)
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl Identifier for UriIdentifier {
    fn format(&self) -> Format {
        Format::Uri
    }

    fn validate(&self) -> Result<()> {
        if self.uri.is_empty() {
            return Err(SubjectIdentifierError::EmptyUri);
        }
        Ok(())
    }
}

impl Serialize for UriIdentifier {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uri_identifier() {
        let id = UriIdentifier::new("https://user.example.com/").unwrap();
        assert_eq!(id.format(), Format::Uri);
        assert_eq!(id.uri(), "https://user.example.com/");
        assert!(matches!(UriIdentifier::new(""), Err(SubjectIdentifierError::EmptyUri)));
    }

    #[test]
    fn test_serialize() {
        let id = UriIdentifier::new("https://user.example.com/").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#"{"format":"uri","uri":"https://user.example.com/"}"#
        );
    }
}
