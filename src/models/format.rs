// src/models/format.rs
//! Format tags and JSON field names.
//!
//! The `format` member of every subject identifier selects one of a fixed
//! set of shapes. This module holds that closed set together with the
//! field names each shape uses on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SubjectIdentifierError;

/// Name of the discriminator field present in every identifier.
pub const FIELD_FORMAT: &str = "format";
/// Used by the account and URI formats.
pub const FIELD_URI: &str = "uri";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_ISSUER: &str = "iss";
pub const FIELD_SUBJECT: &str = "sub";
pub const FIELD_ID: &str = "id";
pub const FIELD_PHONE_NUMBER: &str = "phone_number";
/// Used by the DID format.
pub const FIELD_URL: &str = "url";
/// Member list of the aliases format.
pub const FIELD_IDENTIFIERS: &str = "identifiers";

/// Identifier format as carried by the `format` field.
///
/// # Wire names
/// | Variant | Tag |
/// |---|---|
/// | `Account` | `account` |
/// | `Email` | `email` |
/// | `IssuerSubject` | `iss_sub` |
/// | `Opaque` | `opaque` |
/// | `PhoneNumber` | `phone_number` |
/// | `Did` | `did` |
/// | `Uri` | `uri` |
/// | `Aliases` | `aliases` |
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    #[serde(rename = "account")]
    Account,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "iss_sub")]
    IssuerSubject,
    #[serde(rename = "opaque")]
    Opaque,
    #[serde(rename = "phone_number")]
    PhoneNumber,
    #[serde(rename = "did")]
    Did,
    #[serde(rename = "uri")]
    Uri,
    #[serde(rename = "aliases")]
    Aliases,
}

impl Format {
    /// Every format, in the order they are listed by the standard.
    pub const ALL: [Format; 8] = [
        Format::Account,
        Format::Email,
        Format::IssuerSubject,
        Format::Opaque,
        Format::PhoneNumber,
        Format::Did,
        Format::Uri,
        Format::Aliases,
    ];

    /// Returns the wire name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Account => "account",
            Format::Email => "email",
            Format::IssuerSubject => "iss_sub",
            Format::Opaque => "opaque",
            Format::PhoneNumber => "phone_number",
            Format::Did => "did",
            Format::Uri => "uri",
            Format::Aliases => "aliases",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = SubjectIdentifierError;

    /// Parses a wire name. Matching is exact; `"Email"` is not `"email"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(SubjectIdentifierError::NoFormat),
            "account" => Ok(Format::Account),
            "email" => Ok(Format::Email),
            "iss_sub" => Ok(Format::IssuerSubject),
            "opaque" => Ok(Format::Opaque),
            "phone_number" => Ok(Format::PhoneNumber),
            "did" => Ok(Format::Did),
            "uri" => Ok(Format::Uri),
            "aliases" => Ok(Format::Aliases),
            other => Err(SubjectIdentifierError::UnknownFormat(other.to_string())),
        }
    }
}
