// src/models/aliases.rs
//! Aliases Identifier Format.
//!
//! A composite identifier listing several identifiers that all refer to the
//! same subject. The member list keeps insertion order and upholds two rules
//! on every insertion:
//! - no member is itself an aliases identifier
//! - no two members are equal by value (same format and same fields)
//!
//! An empty list is allowed while a set is being assembled, but such a set
//! does not validate and cannot be serialized.

use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};
use std::slice;

use crate::error::{Result, SubjectIdentifierError};
use crate::models::format::{Format, FIELD_FORMAT, FIELD_IDENTIFIERS};
use crate::models::subject_identifier::{Identifier, SubjectIdentifier};

/// An ordered, duplicate-free list of non-aliases identifiers.
///
/// # JSON
/// ```json
/// {"format":"aliases","identifiers":[
///   {"format":"email","email":"user@example.com"},
///   {"format":"opaque","id":"11112222333344445555"}
/// ]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AliasesIdentifier {
    identifiers: Vec<SubjectIdentifier>,
}

impl AliasesIdentifier {
    /// Creates an aliases identifier from the given members.
    ///
    /// Members are added one by one with [`add_identifier`](Self::add_identifier),
    /// in iteration order. The first rejected member fails the whole call.
    /// Passing no members yields an empty set, which is not yet valid.
    ///
    /// # Errors
    /// - [`SubjectIdentifierError::NestedAliases`] if a member is an aliases identifier
    /// - [`SubjectIdentifierError::DuplicatedIdentifier`] if a member repeats an earlier one
    pub fn new<I>(identifiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = SubjectIdentifier>,
    {
        let mut aliases = Self::default();
        for identifier in identifiers {
            aliases.add_identifier(identifier)?;
        }
        Ok(aliases)
    }

    /// Returns the members in insertion order.
    pub fn identifiers(&self) -> &[SubjectIdentifier] {
        &self.identifiers
    }

    /// Consumes the set and returns its members in insertion order.
    pub fn into_identifiers(self) -> Vec<SubjectIdentifier> {
        self.identifiers
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, SubjectIdentifier> {
        self.identifiers.iter()
    }

    /// Returns whether a member with the same format and field values as
    /// `identifier` is already present.
    pub fn contains_identifier(&self, identifier: &SubjectIdentifier) -> bool {
        self.identifiers.iter().any(|member| member == identifier)
    }

    /// Appends `identifier` to the end of the member list.
    ///
    /// The list is left untouched when the identifier is rejected.
    ///
    /// # Errors
    /// - [`SubjectIdentifierError::NestedAliases`] if `identifier` is in aliases format,
    ///   whether or not it is itself valid
    /// - [`SubjectIdentifierError::DuplicatedIdentifier`] if an equal member exists
    pub fn add_identifier(&mut self, identifier: impl Into<SubjectIdentifier>) -> Result<()> {
        let identifier = identifier.into();
        if identifier.format() == Format::Aliases {
            return Err(SubjectIdentifierError::NestedAliases);
        }
        if self.contains_identifier(&identifier) {
            return Err(SubjectIdentifierError::DuplicatedIdentifier);
        }
        self.identifiers.push(identifier);
        Ok(())
    }
}

impl Identifier for AliasesIdentifier {
    fn format(&self) -> Format {
        Format::Aliases
    }

    /// Fails with [`SubjectIdentifierError::EmptyIdentifiers`] when there are
    /// no members. Members were validated when they were built.
    fn validate(&self) -> Result<()> {
        if self.identifiers.is_empty() {
            return Err(SubjectIdentifierError::EmptyIdentifiers);
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AliasesIdentifier {
    type Item = &'a SubjectIdentifier;
    type IntoIter = slice::Iter<'a, SubjectIdentifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for AliasesIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.validate().map_err(S::Error::custom)?;

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(FIELD_FORMAT, &self.format())?;
        map.serialize_entry(FIELD_IDENTIFIERS, &self.identifiers)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::account::AccountIdentifier;
    use crate::models::email::EmailIdentifier;
    use crate::models::opaque::OpaqueIdentifier;

    fn account() -> SubjectIdentifier {
        AccountIdentifier::new("acct:example.user@service.example.com")
            .unwrap()
            .into()
    }

    fn email() -> SubjectIdentifier {
        EmailIdentifier::new("user@example.com").unwrap().into()
    }

    fn opaque() -> SubjectIdentifier {
        OpaqueIdentifier::new("11112222333344445555").unwrap().into()
    }

    #[test]
    fn test_new_without_identifiers() {
        let aliases = AliasesIdentifier::new(Vec::new()).unwrap();
        assert_eq!(aliases.format(), Format::Aliases);
        assert!(aliases.is_empty());
    }

    #[test]
    fn test_new_with_identifiers_keeps_order() {
        let aliases = AliasesIdentifier::new(vec![account(), email(), opaque()]).unwrap();
        assert_eq!(aliases.identifiers(), &[account(), email(), opaque()]);
        assert_eq!(aliases.len(), 3);
    }

    #[test]
    fn test_new_rejects_nested_aliases() {
        let nested = SubjectIdentifier::Aliases(AliasesIdentifier::default());
        let result = AliasesIdentifier::new(vec![account(), email(), opaque(), nested]);
        assert!(matches!(result, Err(SubjectIdentifierError::NestedAliases)));
    }

    #[test]
    fn test_new_rejects_duplicated_identifier() {
        let opaque2: SubjectIdentifier = OpaqueIdentifier::new("11112222333344445555").unwrap().into();
        let result = AliasesIdentifier::new(vec![account(), email(), opaque(), opaque2]);
        assert!(matches!(result, Err(SubjectIdentifierError::DuplicatedIdentifier)));
    }

    #[test]
    fn test_validate() {
        let mut aliases = AliasesIdentifier::default();
        assert!(matches!(
            aliases.validate(),
            Err(SubjectIdentifierError::EmptyIdentifiers)
        ));

        aliases.add_identifier(email()).unwrap();
        assert!(aliases.validate().is_ok());
    }

    #[test]
    fn test_contains_identifier() {
        let aliases = AliasesIdentifier::new(vec![opaque()]).unwrap();
        assert!(!aliases.contains_identifier(&email()));

        let opaque2 = OpaqueIdentifier::new("11112222333344445555").unwrap().into();
        assert!(aliases.contains_identifier(&opaque2));
    }

    #[test]
    fn test_contains_identifier_compares_format() {
        let account: SubjectIdentifier = AccountIdentifier::new("https://user.example.com/")
            .unwrap()
            .into();
        let aliases = AliasesIdentifier::new(vec![account]).unwrap();
        let uri: SubjectIdentifier = crate::models::uri::UriIdentifier::new("https://user.example.com/")
            .unwrap()
            .into();
        assert!(!aliases.contains_identifier(&uri));
    }

    #[test]
    fn test_add_identifier() {
        let mut aliases = AliasesIdentifier::new(vec![opaque()]).unwrap();
        aliases
            .add_identifier(EmailIdentifier::new("user@example.com").unwrap())
            .unwrap();
        assert_eq!(aliases.identifiers(), &[opaque(), email()]);
    }

    #[test]
    fn test_add_duplicate_leaves_members_unchanged() {
        let mut aliases = AliasesIdentifier::new(vec![opaque()]).unwrap();
        let err = aliases
            .add_identifier(OpaqueIdentifier::new("11112222333344445555").unwrap())
            .unwrap_err();
        assert!(matches!(err, SubjectIdentifierError::DuplicatedIdentifier));
        assert_eq!(aliases.identifiers(), &[opaque()]);
    }

    #[test]
    fn test_add_nested_aliases_even_when_valid() {
        let inner = AliasesIdentifier::new(vec![email()]).unwrap();
        assert!(inner.validate().is_ok());

        let mut aliases = AliasesIdentifier::new(vec![opaque()]).unwrap();
        let err = aliases.add_identifier(inner).unwrap_err();
        assert!(matches!(err, SubjectIdentifierError::NestedAliases));
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    fn test_same_value_different_format_is_not_duplicate() {
        let account: SubjectIdentifier = AccountIdentifier::new("https://user.example.com/").unwrap().into();
        let uri: SubjectIdentifier = crate::models::uri::UriIdentifier::new("https://user.example.com/")
            .unwrap()
            .into();
        let aliases = AliasesIdentifier::new(vec![account, uri]).unwrap();
        assert_eq!(aliases.len(), 2);
    }

    #[test]
    fn test_serialize() {
        let aliases = AliasesIdentifier::new(vec![account(), email(), opaque()]).unwrap();
        let json = serde_json::to_string(&aliases).unwrap();
        assert_eq!(
            json,
            r#"{"format":"aliases","identifiers":[{"format":"account","uri":"acct:example.user@service.example.com"},{"format":"email","email":"user@example.com"},{"format":"opaque","id":"11112222333344445555"}]}"#
        );
    }

    #[test]
    fn test_serialize_empty_fails() {
        let err = serde_json::to_string(&AliasesIdentifier::default()).unwrap_err();
        assert_eq!(err.to_string(), "empty identifiers");
    }

    #[test]
    fn test_iterate_members() {
        let aliases = AliasesIdentifier::new(vec![email(), opaque()]).unwrap();
        let formats: Vec<Format> = (&aliases).into_iter().map(|id| id.format()).collect();
        assert_eq!(formats, vec![Format::Email, Format::Opaque]);
    }
}
