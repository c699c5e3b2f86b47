// src/models/subject_identifier.rs
//! The subject identifier sum type.
//!
//! [`SubjectIdentifier`] is the closed union of every identifier format. It
//! is what the decoder returns, what an aliases identifier holds, and what a
//! [`Wrapper`](super::wrapper::Wrapper) carries. Code that does not care
//! which format it holds works through the [`Identifier`] trait.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::account::AccountIdentifier;
use crate::models::aliases::AliasesIdentifier;
use crate::models::did::DidIdentifier;
use crate::models::email::EmailIdentifier;
use crate::models::format::Format;
use crate::models::iss_sub::IssuerSubjectIdentifier;
use crate::models::opaque::OpaqueIdentifier;
use crate::models::phone_number::PhoneNumberIdentifier;
use crate::models::uri::UriIdentifier;
use crate::services::decoder;

/// Capabilities shared by every identifier format.
pub trait Identifier {
    /// Returns the format actually held by the instance.
    fn format(&self) -> Format;

    /// Checks the values held and returns the first problem found.
    fn validate(&self) -> Result<()>;
}

/// Any subject identifier, tagged by its format.
///
/// Equality is structural: two identifiers are equal when they have the
/// same format and the same field values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubjectIdentifier {
    Account(AccountIdentifier),
    Email(EmailIdentifier),
    IssuerSubject(IssuerSubjectIdentifier),
    Opaque(OpaqueIdentifier),
    PhoneNumber(PhoneNumberIdentifier),
    Did(DidIdentifier),
    Uri(UriIdentifier),
    Aliases(AliasesIdentifier),
}

impl SubjectIdentifier {
    /// Decodes an identifier from JSON bytes.
    ///
    /// Shorthand for [`decoder::decode`] with default settings.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        decoder::decode(bytes)
    }

    /// Returns the aliases identifier if this is one.
    pub fn as_aliases(&self) -> Option<&AliasesIdentifier> {
        match self {
            SubjectIdentifier::Aliases(aliases) => Some(aliases),
            _ => None,
        }
    }

    fn as_identifier(&self) -> &dyn Identifier {
        match self {
            SubjectIdentifier::Account(id) => id,
            SubjectIdentifier::Email(id) => id,
            SubjectIdentifier::IssuerSubject(id) => id,
            SubjectIdentifier::Opaque(id) => id,
            SubjectIdentifier::PhoneNumber(id) => id,
            SubjectIdentifier::Did(id) => id,
            SubjectIdentifier::Uri(id) => id,
            SubjectIdentifier::Aliases(id) => id,
        }
    }
}

impl Identifier for SubjectIdentifier {
    fn format(&self) -> Format {
        self.as_identifier().format()
    }

    fn validate(&self) -> Result<()> {
        self.as_identifier().validate()
    }
}

impl From<AccountIdentifier> for SubjectIdentifier {
    fn from(id: AccountIdentifier) -> Self {
        SubjectIdentifier::Account(id)
    }
}

impl From<EmailIdentifier> for SubjectIdentifier {
    fn from(id: EmailIdentifier) -> Self {
        SubjectIdentifier::Email(id)
    }
}

impl From<IssuerSubjectIdentifier> for SubjectIdentifier {
    fn from(id: IssuerSubjectIdentifier) -> Self {
        SubjectIdentifier::IssuerSubject(id)
    }
}

impl From<OpaqueIdentifier> for SubjectIdentifier {
    fn from(id: OpaqueIdentifier) -> Self {
        SubjectIdentifier::Opaque(id)
    }
}

impl From<PhoneNumberIdentifier> for SubjectIdentifier {
    fn from(id: PhoneNumberIdentifier) -> Self {
        SubjectIdentifier::PhoneNumber(id)
    }
}

impl From<DidIdentifier> for SubjectIdentifier {
    fn from(id: DidIdentifier) -> Self {
        SubjectIdentifier::Did(id)
    }
}

impl From<UriIdentifier> for SubjectIdentifier {
    fn from(id: UriIdentifier) -> Self {
        SubjectIdentifier::Uri(id)
    }
}

impl From<AliasesIdentifier> for SubjectIdentifier {
    fn from(id: AliasesIdentifier) -> Self {
        SubjectIdentifier::Aliases(id)
    }
}

impl Serialize for SubjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SubjectIdentifier::Account(id) => id.serialize(serializer),
            SubjectIdentifier::Email(id) => id.serialize(serializer),
            SubjectIdentifier::IssuerSubject(id) => id.serialize(serializer),
            SubjectIdentifier::Opaque(id) => id.serialize(serializer),
            SubjectIdentifier::PhoneNumber(id) => id.serialize(serializer),
            SubjectIdentifier::Did(id) => id.serialize(serializer),
            SubjectIdentifier::Uri(id) => id.serialize(serializer),
            SubjectIdentifier::Aliases(id) => id.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SubjectIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        decoder::decode_object(&object).map_err(de::Error::custom)
    }
}
