// src/services/decoder.rs
//! Tagged dispatcher for subject identifiers.
//!
//! Turns a JSON object into the concrete identifier named by its `format`
//! field. Two entry points are provided:
//! - [`Decoder::decode`] for raw JSON bytes
//! - [`Decoder::decode_object`] for an object that is already parsed
//!
//! # Decoding rules
//! - `format` missing, empty or not a string: [`SubjectIdentifierError::NoFormat`]
//! - `format` outside the known set: [`SubjectIdentifierError::UnknownFormat`]
//! - a missing or non-string payload field is read as `""`, so the
//!   format's own constructor reports the matching empty-field error
//! - `aliases` members are decoded recursively; a member in aliases format
//!   is rejected before any of its content is looked at
//!
//! The decoder never logs above `debug`: a rejected document is an ordinary
//! result for the caller to handle.

use log::{debug, trace};
use serde_json::{Map, Value};

use crate::error::{Result, SubjectIdentifierError};
use crate::models::account::AccountIdentifier;
use crate::models::aliases::AliasesIdentifier;
use crate::models::did::DidIdentifier;
use crate::models::email::EmailIdentifier;
use crate::models::format::{
    Format, FIELD_EMAIL, FIELD_FORMAT, FIELD_ID, FIELD_IDENTIFIERS, FIELD_ISSUER,
    FIELD_PHONE_NUMBER, FIELD_SUBJECT, FIELD_URI, FIELD_URL,
};
use crate::models::iss_sub::IssuerSubjectIdentifier;
use crate::models::opaque::OpaqueIdentifier;
use crate::models::phone_number::PhoneNumberIdentifier;
use crate::models::subject_identifier::SubjectIdentifier;
use crate::models::uri::UriIdentifier;
use crate::utils::settings::DecoderSettings;

/// Decodes subject identifiers under a fixed set of [`DecoderSettings`].
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    settings: DecoderSettings,
}

impl Decoder {
    /// Creates a decoder with the given settings.
    pub fn new(settings: DecoderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DecoderSettings {
        &self.settings
    }

    /// Decodes an identifier from JSON bytes.
    ///
    /// # Errors
    /// - [`SubjectIdentifierError::Json`] if `bytes` is not a JSON object
    /// - any error of [`decode_object`](Self::decode_object)
    pub fn decode(&self, bytes: &[u8]) -> Result<SubjectIdentifier> {
        let object: Map<String, Value> = serde_json::from_slice(bytes).map_err(|err| {
            debug!("rejected subject identifier: {}", err);
            err
        })?;
        self.decode_object(&object)
    }

    /// Decodes an identifier from a parsed JSON value, which must be an object.
    pub fn decode_value(&self, value: &Value) -> Result<SubjectIdentifier> {
        let object = value
            .as_object()
            .ok_or(SubjectIdentifierError::NotAnObject)?;
        self.decode_object(object)
    }

    /// Decodes an identifier from a parsed JSON object.
    ///
    /// # Returns
    /// - `Ok(SubjectIdentifier)` holding the variant named by `format`
    /// - `Err` with the first rule the object breaks
    pub fn decode_object(&self, object: &Map<String, Value>) -> Result<SubjectIdentifier> {
        read_format(object)
            .and_then(|format| self.decode_as(format, object))
            .map_err(|err| {
                debug!("rejected subject identifier: {}", err);
                err
            })
    }

    fn decode_as(&self, format: Format, object: &Map<String, Value>) -> Result<SubjectIdentifier> {
        debug!("decoding subject identifier in {} format", format);
        let id: SubjectIdentifier = match format {
            Format::Account => AccountIdentifier::new(string_field(object, FIELD_URI))?.into(),
            Format::Email => EmailIdentifier::new(string_field(object, FIELD_EMAIL))?.into(),
            Format::IssuerSubject => IssuerSubjectIdentifier::new(
                string_field(object, FIELD_ISSUER),
                string_field(object, FIELD_SUBJECT),
            )?
            .into(),
            Format::Opaque => OpaqueIdentifier::new(string_field(object, FIELD_ID))?.into(),
            Format::PhoneNumber => {
                PhoneNumberIdentifier::new(string_field(object, FIELD_PHONE_NUMBER))?.into()
            }
            Format::Did => DidIdentifier::new(string_field(object, FIELD_URL))?.into(),
            Format::Uri => UriIdentifier::new(string_field(object, FIELD_URI))?.into(),
            Format::Aliases => self.decode_aliases(object)?.into(),
        };
        Ok(id)
    }

    fn decode_aliases(&self, object: &Map<String, Value>) -> Result<AliasesIdentifier> {
        let members = match object.get(FIELD_IDENTIFIERS) {
            Some(Value::Array(members)) if !members.is_empty() => members,
            _ => return Err(SubjectIdentifierError::EmptyIdentifiers),
        };

        if let Some(max) = self.settings.max_identifiers {
            if members.len() > max {
                return Err(SubjectIdentifierError::TooManyIdentifiers {
                    count: members.len(),
                    max,
                });
            }
        }

        let mut identifiers = Vec::with_capacity(members.len());
        for (index, member) in members.iter().enumerate() {
            let member = member
                .as_object()
                .ok_or(SubjectIdentifierError::NotAnObject)?;
            let format = read_format(member)?;
            // Checked here as well as in `add_identifier` so a nested set is
            // never decoded, which keeps recursion one level deep.
            if format == Format::Aliases {
                return Err(SubjectIdentifierError::NestedAliases);
            }
            trace!("decoding aliases member {} in {} format", index, format);
            identifiers.push(self.decode_as(format, member)?);
        }

        AliasesIdentifier::new(identifiers)
    }
}

/// Decodes an identifier from JSON bytes with default settings.
pub fn decode(bytes: &[u8]) -> Result<SubjectIdentifier> {
    Decoder::default().decode(bytes)
}

/// Decodes an identifier from a parsed JSON object with default settings.
pub fn decode_object(object: &Map<String, Value>) -> Result<SubjectIdentifier> {
    Decoder::default().decode_object(object)
}

fn read_format(object: &Map<String, Value>) -> Result<Format> {
    match object.get(FIELD_FORMAT).and_then(Value::as_str) {
        Some(tag) if !tag.is_empty() => tag.parse(),
        _ => Err(SubjectIdentifierError::NoFormat),
    }
}

fn string_field<'a>(object: &'a Map<String, Value>, name: &str) -> &'a str {
    object.get(name).and_then(Value::as_str).unwrap_or_default()
}
