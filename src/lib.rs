// src/lib.rs

//! # Subject Identifiers for Security Event Tokens
//!
//! Typed models for the subject identifier formats used in Security Event
//! Tokens, with their canonical JSON encoding.
//! See: <https://datatracker.ietf.org/doc/html/draft-ietf-secevent-subject-identifiers>
//!
//! ## Architecture Overview
//! 1. **Models**: one type per format, the [`SubjectIdentifier`] union over
//!    all of them, and the [`Wrapper`] slot
//! 2. **Services**: the [`Decoder`] that dispatches on the `format` field
//! 3. **Utils**: validated encoding helpers and [`DecoderSettings`]
//!
//! ## Example
//! ```
//! use subject_identifiers::{decode, Format, Identifier};
//!
//! let id = decode(br#"{"format":"email","email":"user@example.com"}"#).unwrap();
//! assert_eq!(id.format(), Format::Email);
//! ```

// Module declarations (organized by functional domain)
pub mod error;     // Error taxonomy
pub mod models;    // Identifier formats
pub mod services;  // Decoding
pub mod utils;     // Helper functions

pub use crate::error::{Result, SubjectIdentifierError};
pub use crate::models::account::AccountIdentifier;
pub use crate::models::aliases::AliasesIdentifier;
pub use crate::models::did::DidIdentifier;
pub use crate::models::email::EmailIdentifier;
pub use crate::models::format::Format;
pub use crate::models::iss_sub::IssuerSubjectIdentifier;
pub use crate::models::opaque::OpaqueIdentifier;
pub use crate::models::phone_number::PhoneNumberIdentifier;
pub use crate::models::subject_identifier::{Identifier, SubjectIdentifier};
pub use crate::models::uri::UriIdentifier;
pub use crate::models::wrapper::Wrapper;
pub use crate::services::decoder::{decode, decode_object, Decoder};
pub use crate::utils::serialization::{from_json_str, to_json_string, to_json_vec};
pub use crate::utils::settings::DecoderSettings;
