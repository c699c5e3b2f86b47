// src/error.rs
//! Error taxonomy for subject identifiers.
//!
//! Every failure in this crate is an ordinary return value of type
//! [`SubjectIdentifierError`]. Errors fall into three groups:
//! - empty-field errors raised by constructors and `validate()`
//! - composite-structure errors raised by the aliases format
//! - decode errors raised by the tagged dispatcher

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SubjectIdentifierError>;

/// Errors produced while building, validating, encoding or decoding
/// subject identifiers.
#[derive(Debug, Error)]
pub enum SubjectIdentifierError {
    /// `uri` is empty (account and URI formats).
    #[error("empty uri")]
    EmptyUri,

    /// `email` is empty.
    #[error("empty email")]
    EmptyEmail,

    /// `iss` is empty.
    #[error("empty iss")]
    EmptyIssuer,

    /// `sub` is empty.
    #[error("empty sub")]
    EmptySubject,

    /// `id` is empty.
    #[error("empty id")]
    EmptyId,

    /// `phone_number` is empty.
    #[error("empty phone number")]
    EmptyPhoneNumber,

    /// `url` is empty (DID format).
    #[error("empty url")]
    EmptyUrl,

    /// An aliases identifier holds no members.
    #[error("empty identifiers")]
    EmptyIdentifiers,

    /// An aliases identifier was asked to hold another aliases identifier.
    #[error("aliases identifier cannot be nested")]
    NestedAliases,

    /// An aliases identifier already holds an identifier with the same content.
    #[error("duplicated identifier")]
    DuplicatedIdentifier,

    /// An aliases document carries more members than the decoder accepts.
    #[error("too many identifiers: {count} exceeds limit of {max}")]
    TooManyIdentifiers { count: usize, max: usize },

    /// The `format` field is missing, empty or not a string.
    #[error("no format")]
    NoFormat,

    /// The `format` field names a format outside the known set.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// A member of `identifiers` is not a JSON object.
    #[error("identifier is not an object")]
    NotAnObject,

    /// Input bytes are not a well-formed JSON object.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Decoder settings could not be loaded.
    #[error("settings error: {0}")]
    Settings(#[from] config::ConfigError),
}

impl SubjectIdentifierError {
    /// Returns `true` for the per-field emptiness errors.
    pub fn is_empty_field(&self) -> bool {
        matches!(
            self,
            Self::EmptyUri
                | Self::EmptyEmail
                | Self::EmptyIssuer
                | Self::EmptySubject
                | Self::EmptyId
                | Self::EmptyPhoneNumber
                | Self::EmptyUrl
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(SubjectIdentifierError::EmptyIssuer.to_string(), "empty iss");
        assert_eq!(
            SubjectIdentifierError::UnknownFormat("unknown".to_string()).to_string(),
            "unknown format: unknown"
        );
        assert_eq!(
            SubjectIdentifierError::TooManyIdentifiers { count: 9, max: 8 }.to_string(),
            "too many identifiers: 9 exceeds limit of 8"
        );
    }

    #[test]
    fn test_is_empty_field() {
        assert!(SubjectIdentifierError::EmptyPhoneNumber.is_empty_field());
        assert!(!SubjectIdentifierError::EmptyIdentifiers.is_empty_field());
        assert!(!SubjectIdentifierError::NoFormat.is_empty_field());
    }

    #[test]
    fn test_json_error_is_transparent() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = parse_err.to_string();
        let err: SubjectIdentifierError = parse_err.into();
        assert!(matches!(err, SubjectIdentifierError::Json(_)));
        assert_eq!(err.to_string(), expected);
    }
}
