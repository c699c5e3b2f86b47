// src/models/did.rs
//! Decentralized Identifier (DID) Format.
//!
//! Identifies a subject by a DID URL following the
//! [DID Core Specification](https://www.w3.org/TR/did-core/). The identifier
//! only carries the URL; resolving it to a DID Document is out of scope.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, SubjectIdentifierError};
use crate::models::format::{Format, FIELD_FORMAT, FIELD_URL};
use crate::models::subject_identifier::Identifier;

/// A subject identified by a DID URL.
///
/// # DID Format
/// The `url` field is expected to follow DID syntax:
/// ```text
/// did:<method>:<method-specific-id>
/// ```
/// It may also carry a path, query or fragment. The value is not parsed;
/// only its presence is checked.
///
/// # JSON
/// ```json
/// {"format":"did","url":"did:example:123456"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DidIdentifier {
    /// The complete DID URL
    /// Example: "did:example:123456"
    url: String,
}

impl DidIdentifier {
    /// Creates a new DID identifier.
    ///
    /// # Arguments
    /// * `url` - The DID URL of the subject
    ///
    /// # Returns
    /// - `Ok(DidIdentifier)` when `url` is non-empty
    /// - `Err(SubjectIdentifierError::EmptyUrl)` otherwise
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let id = Self { url: url.into() };
        id.validate()?;
        Ok(id)
    }

    /// Returns the DID URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Identifier for DidIdentifier {
    fn format(&self) -> Format {
        Format::Did
    }

    fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(SubjectIdentifierError::EmptyUrl);
        }
        Ok(())
    }
}

impl Serialize for DidIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(FIELD_FORMAT, &self.format())?;
        map.serialize_entry(FIELD_URL, &self.url)?;
        map.end()
    }
}
