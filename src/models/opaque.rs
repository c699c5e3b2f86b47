// src/models/opaque.rs
//! Opaque Identifier Format.
//!
//! A string with no semantics beyond being unique to the subject within the
//! context of the transmitter.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, SubjectIdentifierError};
use crate::models::format::{Format, FIELD_FORMAT, FIELD_ID};
use crate::models::subject_identifier::Identifier;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpaqueIdentifier {
    id: String,
}

impl OpaqueIdentifier {
    /// Creates a new opaque identifier. Fails with
    /// [`SubjectIdentifierError::EmptyId`] if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let opaque = Self { id: id.into() };
        opaque.validate()?;
        Ok(opaque)
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Identifier for OpaqueIdentifier {
    fn format(&self) -> Format {
        Format::Opaque
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(SubjectIdentifierError::EmptyId);
        }
        Ok(())
    }
}

impl Serialize for OpaqueIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(FIELD_FORMAT, &self.format())?;
        map.serialize_entry(FIELD_ID, &self.id)?;
        map.end()
    }
}
