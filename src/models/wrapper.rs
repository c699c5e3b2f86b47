// src/models/wrapper.rs
//! Polymorphic slot for a single subject identifier.
//!
//! A [`Wrapper`] lets a subject identifier of any format sit in one place,
//! such as a field of a larger JSON document, without the reader knowing
//! the format up front. It encodes as whatever it holds and decodes through
//! the tagged dispatcher.
//!
//! Decoding is all-or-nothing: on success the held identifier is replaced
//! as a whole; on failure the previous one is kept.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Result, SubjectIdentifierError};
use crate::models::subject_identifier::SubjectIdentifier;
use crate::services::decoder::{self, Decoder};
use crate::utils::serialization::to_json_vec;

/// Owns at most one subject identifier.
///
/// An empty wrapper encodes as JSON `null`, and `null` decodes back into an
/// empty wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wrapper {
    value: Option<SubjectIdentifier>,
}

impl Wrapper {
    /// Creates a wrapper holding `value`.
    pub fn new(value: impl Into<SubjectIdentifier>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// Creates a wrapper waiting for its first decode.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the held identifier, if any.
    pub fn value(&self) -> Option<&SubjectIdentifier> {
        self.value.as_ref()
    }

    pub fn into_inner(self) -> Option<SubjectIdentifier> {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Replaces the held identifier with one decoded from `bytes`.
    ///
    /// JSON `null` empties the wrapper, matching its `Deserialize` impl.
    ///
    /// # Errors
    /// Any decode error. The wrapper is left as it was.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<()> {
        self.decode_with(&Decoder::default(), bytes)
    }

    /// Like [`decode`](Self::decode), using the given decoder's settings.
    pub fn decode_with(&mut self, decoder: &Decoder, bytes: &[u8]) -> Result<()> {
        let value = match serde_json::from_slice::<Value>(bytes)? {
            Value::Null => None,
            Value::Object(object) => Some(decoder.decode_object(&object)?),
            _ => return Err(SubjectIdentifierError::NotAnObject),
        };
        self.value = value;
        Ok(())
    }

    /// Replaces the held identifier with one decoded from a parsed object.
    pub fn decode_object(&mut self, object: &Map<String, Value>) -> Result<()> {
        self.value = Some(decoder::decode_object(object)?);
        Ok(())
    }

    /// Encodes the held identifier after validating it.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match &self.value {
            Some(value) => to_json_vec(value),
            None => Ok(serde_json::to_vec(&Value::Null)?),
        }
    }
}

impl From<SubjectIdentifier> for Wrapper {
    fn from(value: SubjectIdentifier) -> Self {
        Self { value: Some(value) }
    }
}

impl Serialize for Wrapper {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Wrapper {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Map<String, Value>>::deserialize(deserializer)? {
            Some(object) => decoder::decode_object(&object)
                .map(Wrapper::from)
                .map_err(de::Error::custom),
            None => Ok(Wrapper::empty()),
        }
    }
}
