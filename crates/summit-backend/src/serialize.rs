//! Conversion of stored documents into plain JSON for API responses.
//!
//! Store-native types never reach a response body: identifiers become their
//! hex text and datetimes become RFC 3339 text. Every BSON type is handled
//! explicitly; only the exotic ones fall back to relaxed extended JSON.

use mongodb::bson::{Bson, Document};
use summit::serde_json::{Map, Number, Value, json};

/// Converts a whole document into a JSON object.
pub fn document(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_value(value)))
            .collect::<Map<String, Value>>(),
    )
}

/// Converts a single BSON value into JSON.
pub fn bson_value(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(datetime) => match datetime.try_to_rfc3339_string() {
            Ok(text) => Value::String(text),
            // Outside the RFC 3339 range, keep the instant as epoch millis
            Err(_) => Value::from(datetime.timestamp_millis()),
        },
        Bson::Timestamp(ts) => json!({ "t": ts.time, "i": ts.increment }),
        Bson::Document(inner) => document(inner),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_value).collect()),
        Bson::String(text) => Value::String(text),
        Bson::Boolean(flag) => Value::Bool(flag),
        Bson::Int32(n) => Value::from(n),
        Bson::Int64(n) => Value::from(n),
        Bson::Double(n) => Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null),
        Bson::Null | Bson::Undefined => Value::Null,
        other => other.into_relaxed_extjson(),
    }
}
