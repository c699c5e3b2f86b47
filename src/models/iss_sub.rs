// src/models/iss_sub.rs
//! Issuer and Subject Identifier Format.
//!
//! Identifies a subject by the pair of an issuer and a subject value scoped
//! to that issuer, the same pairing a JWT carries in its `iss` and `sub`
//! claims. The Rust API names the fields `issuer` and `subject`; on the wire
//! they are `iss` and `sub`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, SubjectIdentifierError};
use crate::models::format::{Format, FIELD_FORMAT, FIELD_ISSUER, FIELD_SUBJECT};
use crate::models::subject_identifier::Identifier;

/// A subject identified by an issuer and a subject scoped to it.
///
/// # Fields
/// - `issuer`: identifier of the issuing party
///   Example: "https://issuer.example.com/"
/// - `subject`: identifier of the subject, unique within the issuer
///   Example: "145234573"
///
/// # JSON
/// ```json
/// {"format":"iss_sub","iss":"https://issuer.example.com/","sub":"145234573"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssuerSubjectIdentifier {
    issuer: String,
    subject: String,
}

impl IssuerSubjectIdentifier {
    /// Creates a new issuer and subject identifier.
    ///
    /// # Arguments
    /// * `issuer` - Issuer value, serialized as `iss`
    /// * `subject` - Subject value, serialized as `sub`
    ///
    /// # Errors
    /// The issuer is checked first:
    /// - [`SubjectIdentifierError::EmptyIssuer`] if `issuer` is empty
    /// - [`SubjectIdentifierError::EmptySubject`] if `subject` is empty
    pub fn new(issuer: impl Into<String>, subject: impl Into<String>) -> Result<Self> {
        let id = Self {
            issuer: issuer.into(),
            subject: subject.into(),
        };
        id.validate()?;
        Ok(id)
    }

    /// Returns the issuer value.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Returns the subject value.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl Identifier for IssuerSubjectIdentifier {
    fn format(&self) -> Format {
        Format::IssuerSubject
    }

    fn validate(&self) -> Result<()> {
        if self.issuer.is_empty() {
            return Err(SubjectIdentifierError::EmptyIssuer);
        }
        if self.subject.is_empty() {
            return Err(SubjectIdentifierError::EmptySubject);
        }
        Ok(())
    }
}

impl Serialize for IssuerSubjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(FIELD_FORMAT, &self.format())?;
        map.serialize_entry(FIELD_ISSUER, &self.issuer)?;
        map.serialize_entry(FIELD_SUBJECT, &self.subject)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_issuer_subject_identifier() {
        let id = IssuerSubjectIdentifier::new("https://issuer.example.com/", "145234573").unwrap();
        assert_eq!(id.format(), Format::IssuerSubject);
        assert_eq!(id.issuer(), "https://issuer.example.com/");
        assert_eq!(id.subject(), "145234573");
    }

    #[test]
    fn test_empty_fields() {
        assert!(matches!(
            IssuerSubjectIdentifier::new("", "145234573"),
            Err(SubjectIdentifierError::EmptyIssuer)
        ));
        assert!(matches!(
            IssuerSubjectIdentifier::new("https://issuer.example.com/", ""),
            Err(SubjectIdentifierError::EmptySubject)
        ));
    }

    #[test]
    fn test_issuer_checked_before_subject() {
        assert!(matches!(
            IssuerSubjectIdentifier::new("", ""),
            Err(SubjectIdentifierError::EmptyIssuer)
        ));
    }

    #[test]
    fn test_serialize_uses_short_field_names() {
        let id = IssuerSubjectIdentifier::new("https://issuer.example.com/", "145234573").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#"{"format":"iss_sub","iss":"https://issuer.example.com/","sub":"145234573"}"#
        );
    }

    #[test]
    fn test_same_values_swapped_are_distinct() {
        let a = IssuerSubjectIdentifier::new("x", "y").unwrap();
        let b = IssuerSubjectIdentifier::new("y", "x").unwrap();
        assert_ne!(a, b);
    }
}
