//! Data structures exchanged over the HTTP API of the summit backend.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::id::RegistrationId;

/// A plain acknowledgement message, returned by the root and hello routes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A scheduled talk in the conference program.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub speaker: String,
    pub time: String,
    pub track: String,
    pub description: String,
}

/// A validated attendee registration.
///
/// Built by [`crate::validate::registration`]; it is only serialized, never
/// read back from request bodies, so a raw submission cannot bypass the
/// validator.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub session_interests: BTreeSet<String>,
}

impl Registration {
    /// Converts the registration into the document form handed to the store.
    pub fn to_document(&self) -> Result<bson::Document, bson::ser::Error> {
        bson::to_document(self)
    }
}

/// Response body of a successful registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterResponse {
    pub ok: bool,
    pub id: RegistrationId,
}

/// Response body of a registration listing.
///
/// Items are documents already converted to plain JSON; no store-native
/// identifier or timestamp types are left in them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegistrationsResponse {
    pub ok: bool,
    pub items: Vec<serde_json::Value>,
}

/// Error body for failed requests, `detail` is either a message or a list of field errors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[serde(rename = "Connected")]
    Connected,
    #[serde(rename = "Not Connected")]
    NotConnected,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

/// The snapshot returned by the diagnostics route.
///
/// The `database_url` and `database_name` fields only say whether the value
/// is configured, never the value itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: ConnectionStatus,
    pub collections: Vec<String>,
    pub started_at: String,
    pub uptime: UptimeInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_status_wire_names() {
        assert_eq!(
            serde_json::to_value(ConnectionStatus::NotConnected).unwrap(),
            "Not Connected"
        );
        assert_eq!(
            serde_json::to_value(ConnectionStatus::Connected).unwrap(),
            "Connected"
        );
    }

    #[test]
    fn test_registration_document_shape() {
        let registration = Registration {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            organization: None,
            session_interests: ["fire-safety".to_string()].into_iter().collect(),
        };

        let doc = registration.to_document().unwrap();
        assert_eq!(doc.get_str("name").unwrap(), "Ada");
        assert!(doc.is_null("organization"));
        assert_eq!(doc.get_array("session_interests").unwrap().len(), 1);
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_validated_registration_to_document() {
        let registration = crate::validate::registration(&serde_json::json!({
            "name": " Sara ",
            "email": "sara@example.com",
            "organization": "",
        }))
        .unwrap();

        let doc = registration.to_document().unwrap();
        assert_eq!(doc.get_str("name").unwrap(), "Sara");
        assert!(doc.is_null("organization"));
        assert!(doc.get_array("session_interests").unwrap().is_empty());
    }
}
