//! Typed identifiers for stored documents.
//!
//! Identifiers are always assigned by the document store at insertion time;
//! this module only gives them a type and a text form. The application never
//! mints one itself.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper around a store-assigned identifier, held as text.
///
/// Keeping the text form (rather than the store's native id type) means the
/// value can cross the HTTP boundary without any further conversion.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Serialize as just a string
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Id<T> {
    /// Wraps an identifier already rendered as text.
    ///
    /// # Example
    /// ```
    /// use summit::id::RegistrationId;
    ///
    /// let id = RegistrationId::from_string("abc123".to_string());
    /// assert_eq!(id.as_str(), "abc123");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the string value of the ID.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the ID and returns the inner string value.
    pub fn into_string(self) -> String {
        self.value
    }

    /// Parses the text form back into the store's native identifier, if it is one.
    pub fn to_object_id(&self) -> Option<ObjectId> {
        ObjectId::parse_str(&self.value).ok()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<ObjectId> for Id<T> {
    fn from(value: ObjectId) -> Self {
        Self::from_string(value.to_hex())
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationMarker;

/// Identifier of any stored document, collection unknown.
pub type DocumentId = Id<DocumentMarker>;

/// Identifier of a stored registration.
pub type RegistrationId = Id<RegistrationMarker>;

impl From<DocumentId> for RegistrationId {
    fn from(value: DocumentId) -> Self {
        Self::from_string(value.into_string())
    }
}
