// src/utils/settings.rs
//! Decoder settings.
//!
//! Settings are layered: built-in defaults, then an optional `.env` file,
//! then process environment variables prefixed with `SUBJECT_ID_`.
//!
//! ## Environment Variables
//! - `SUBJECT_ID_MAX_IDENTIFIERS`: (Optional) largest member count accepted
//!   when decoding an aliases identifier (default: unlimited)

use config::{Config, ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

use crate::error::Result;

/// Prefix of the environment variables read by [`DecoderSettings::from_env`].
pub const ENV_PREFIX: &str = "SUBJECT_ID";

/// Limits applied while decoding.
///
/// The default applies no limit, so anything that can be built and
/// serialized also decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoderSettings {
    /// Largest number of members an aliases document may carry, if bounded
    pub max_identifiers: Option<usize>,
}

impl DecoderSettings {
    pub fn with_max_identifiers(max_identifiers: usize) -> Self {
        Self {
            max_identifiers: Some(max_identifiers),
        }
    }

    /// Loads settings from the environment.
    ///
    /// # Errors
    /// Returns [`SubjectIdentifierError::Settings`](crate::error::SubjectIdentifierError::Settings) if:
    /// - a variable cannot be parsed into its field type
    /// - `max_identifiers` is zero
    pub fn from_env() -> Result<Self> {
        // A missing .env file is not an error
        dotenv().ok();

        let settings: Self = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.max_identifiers == Some(0) {
            return Err(ConfigError::Message(
                "max_identifiers must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubjectIdentifierError;

    #[test]
    fn test_default() {
        assert_eq!(DecoderSettings::default().max_identifiers, None);
        assert_eq!(DecoderSettings::with_max_identifiers(3).max_identifiers, Some(3));
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(DecoderSettings::with_max_identifiers(0).validate().is_err());
        assert!(DecoderSettings::with_max_identifiers(1).validate().is_ok());
        assert!(DecoderSettings::default().validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let settings: DecoderSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, DecoderSettings::default());
    }

    // The only test that touches SUBJECT_ID_* variables, so it cannot race
    // with another test over the process environment.
    #[test]
    fn test_from_env() {
        std::env::set_var("SUBJECT_ID_MAX_IDENTIFIERS", "8");
        let loaded = DecoderSettings::from_env();
        std::env::set_var("SUBJECT_ID_MAX_IDENTIFIERS", "0");
        let zero = DecoderSettings::from_env();
        std::env::remove_var("SUBJECT_ID_MAX_IDENTIFIERS");

        assert_eq!(loaded.unwrap().max_identifiers, Some(8));
        assert!(matches!(zero, Err(SubjectIdentifierError::Settings(_))));
        assert_eq!(DecoderSettings::from_env().unwrap(), DecoderSettings::default());
    }
}
