//! Schema validation for registration submissions.
//!
//! Validation works on the raw JSON value rather than through a derived
//! `Deserialize`, so that every offending field can be reported at once.

use std::collections::BTreeSet;

use email_address::EmailAddress;
use serde_json::{Map, Value};

use crate::data::Registration;
use crate::errors::{FieldError, FieldErrorKind, ValidationError};

/// Validates a raw registration submission.
///
/// `name` and `email` are required, `organization` and `session_interests`
/// default to absent and empty. Unknown fields are ignored.
///
/// # Example
/// ```
/// use summit::serde_json::json;
///
/// let registration = summit::validate::registration(&json!({
///     "name": "Maya",
///     "email": "maya@example.com",
/// }))
/// .unwrap();
/// assert_eq!(registration.organization, None);
/// assert!(registration.session_interests.is_empty());
/// ```
pub fn registration(raw: &Value) -> Result<Registration, ValidationError> {
    let Some(fields) = raw.as_object() else {
        return Err(ValidationError::new(vec![FieldError::wrong_type(
            "body", "object",
        )]));
    };

    let mut errors = Vec::new();

    let name = required_text(fields, "name", &mut errors);
    let email = required_text(fields, "email", &mut errors).and_then(|email| {
        if EmailAddress::is_valid(&email) {
            Some(email)
        } else {
            errors.push(FieldError::new(
                "email",
                FieldErrorKind::InvalidEmail,
                "value is not a valid email address",
            ));
            None
        }
    });
    let organization = optional_text(fields, "organization", &mut errors);
    let session_interests = session_interests(fields, &mut errors);

    match (name, email) {
        (Some(name), Some(email)) if errors.is_empty() => Ok(Registration {
            name,
            email,
            organization,
            session_interests,
        }),
        _ => Err(ValidationError::new(errors)),
    }
}

fn required_text(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::missing(field));
            None
        }
        Some(Value::String(text)) if text.trim().is_empty() => {
            errors.push(FieldError::missing(field));
            None
        }
        Some(Value::String(text)) => Some(text.trim().to_string()),
        Some(_) => {
            errors.push(FieldError::wrong_type(field, "string"));
            None
        }
    }
}

fn optional_text(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Some(_) => {
            errors.push(FieldError::wrong_type(field, "string"));
            None
        }
    }
}

fn session_interests(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) -> BTreeSet<String> {
    const FIELD: &str = "session_interests";

    let items = match fields.get(FIELD) {
        None | Some(Value::Null) => return BTreeSet::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(FieldError::wrong_type(FIELD, "array of strings"));
            return BTreeSet::new();
        }
    };

    let mut interests = BTreeSet::new();
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(id) if !id.trim().is_empty() => {
                interests.insert(id.trim().to_string());
            }
            Value::String(_) => {}
            _ => errors.push(FieldError::wrong_type(&format!("{FIELD}[{index}]"), "string")),
        }
    }
    interests
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_submission() {
        let registration = registration(&json!({
            "name": "  Luis Ortega ",
            "email": "luis@example.org",
            "organization": "City Fire Dept",
            "session_interests": ["fire-safety", "ergonomics-101", "fire-safety"],
        }))
        .unwrap();

        assert_eq!(registration.name, "Luis Ortega");
        assert_eq!(registration.organization.as_deref(), Some("City Fire Dept"));
        assert_eq!(
            registration.session_interests.into_iter().collect::<Vec<_>>(),
            vec!["ergonomics-101".to_string(), "fire-safety".to_string()]
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let registration = registration(&json!({
            "name": "Sara",
            "email": "sara@example.com",
            "organization": null,
        }))
        .unwrap();

        assert_eq!(registration.organization, None);
        assert!(registration.session_interests.is_empty());
    }

    #[test]
    fn test_blank_organization_is_absent() {
        let registration = registration(&json!({
            "name": "Sara",
            "email": "sara@example.com",
            "organization": "   ",
        }))
        .unwrap();

        assert_eq!(registration.organization, None);
    }

    #[test]
    fn test_missing_name_and_email_are_both_reported() {
        let err = registration(&json!({ "organization": "Acme" })).unwrap_err();

        assert_eq!(err.errors.len(), 2);
        assert!(err.errors.iter().all(|e| e.kind == FieldErrorKind::Missing));
        assert!(err.has_field("name"));
        assert!(err.has_field("email"));
    }

    #[test]
    fn test_blank_name_counts_as_missing() {
        let err = registration(&json!({ "name": " ", "email": "a@example.com" })).unwrap_err();
        assert_eq!(err.errors, vec![FieldError::missing("name")]);
    }

    #[test]
    fn test_wrong_types_are_reported() {
        let err = registration(&json!({
            "name": 42,
            "email": "ok@example.com",
            "organization": ["nope"],
            "session_interests": "fire-safety",
        }))
        .unwrap_err();

        assert_eq!(err.errors.len(), 3);
        assert!(err.errors.iter().all(|e| e.kind == FieldErrorKind::WrongType));
        assert!(err.has_field("name"));
        assert!(err.has_field("organization"));
        assert!(err.has_field("session_interests"));
    }

    #[test]
    fn test_non_string_interest_names_its_index() {
        let err = registration(&json!({
            "name": "Maya",
            "email": "maya@example.com",
            "session_interests": ["fire-safety", 7],
        }))
        .unwrap_err();

        assert_eq!(err.errors, vec![FieldError::wrong_type("session_interests[1]", "string")]);
    }

    #[test]
    fn test_malformed_email() {
        let err = registration(&json!({ "name": "Maya", "email": "not-an-email" })).unwrap_err();

        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "email");
        assert_eq!(err.errors[0].kind, FieldErrorKind::InvalidEmail);
    }

    #[test]
    fn test_body_must_be_an_object() {
        let err = registration(&json!(["Maya", "maya@example.com"])).unwrap_err();
        assert_eq!(err.errors, vec![FieldError::wrong_type("body", "object")]);
    }
}
