// src/utils/serialization.rs
//! Serialization utilities for subject identifiers.
//!
//! `serde_json::to_vec` on an identifier already produces the canonical
//! shape, but an invalid aliases set then surfaces as an opaque
//! `serde_json::Error`. The helpers here validate first so the caller gets
//! the typed error instead.

use serde::Serialize;

use crate::error::Result;
use crate::models::subject_identifier::{Identifier, SubjectIdentifier};
use crate::services::decoder;

/// Serializes an identifier to canonical JSON bytes.
///
/// # Arguments
/// * `id` - Any identifier format, or the [`SubjectIdentifier`] union
///
/// # Returns
/// - `Ok(Vec<u8>)` with the JSON representation on success
/// - `Err` with the error reported by `validate()` if the identifier is invalid
pub fn to_json_vec<T>(id: &T) -> Result<Vec<u8>>
where
    T: Identifier + Serialize + ?Sized,
{
    id.validate()?;
    Ok(serde_json::to_vec(id)?)
}

/// Serializes an identifier to a canonical JSON string.
pub fn to_json_string<T>(id: &T) -> Result<String>
where
    T: Identifier + Serialize + ?Sized,
{
    id.validate()?;
    Ok(serde_json::to_string(id)?)
}

/// Deserializes an identifier from a JSON string with default settings.
pub fn from_json_str(data: &str) -> Result<SubjectIdentifier> {
    decoder::decode(data.as_bytes())
}
