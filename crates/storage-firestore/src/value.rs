//! Codec between domain models and Firestore's typed value format.
//!
//! Firestore documents carry every field as a single-key object naming the
//! type (`{"stringValue": "x"}`, `{"integerValue": "42"}`, ...). This
//! module converts between that representation and plain JSON, with serde
//! doing the model (de)serialization on the plain-JSON side.
//!
//! Notes on the mapping:
//! - `integerValue` is a decimal string on the wire and becomes a JSON
//!   integer here.
//! - `timestampValue` is validated as RFC 3339 and decodes to its string
//!   form, which chrono's serde support parses into `DateTime<Utc>`.
//!   Timestamps are never encoded in this direction: creation/update
//!   times are written with `setToServerValue: REQUEST_TIME` transforms
//!   instead.

use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::errors::StorageError;

/// Encode a plain JSON value into a Firestore typed value.
pub fn encode_value(value: &Value) -> Result<Value, String> {
    match value {
        Value::Null => Ok(json!({ "nullValue": null })),
        Value::Bool(flag) => Ok(json!({ "booleanValue": flag })),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Ok(json!({ "integerValue": int.to_string() }))
            } else if let Some(float) = number.as_f64() {
                Ok(json!({ "doubleValue": float }))
            } else {
                Err(format!("number out of range: {number}"))
            }
        }
        Value::String(text) => Ok(json!({ "stringValue": text })),
        Value::Array(items) => {
            let values = items
                .iter()
                .map(encode_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(json!({ "arrayValue": { "values": values } }))
        }
        Value::Object(entries) => {
            let mut fields = Map::new();
            for (key, entry) in entries {
                fields.insert(key.clone(), encode_value(entry)?);
            }
            Ok(json!({ "mapValue": { "fields": fields } }))
        }
    }
}

/// Decode a Firestore typed value into plain JSON.
pub fn decode_value(value: &Value) -> Result<Value, String> {
    let entries = value
        .as_object()
        .ok_or_else(|| format!("expected a typed value object, got {value}"))?;

    if entries.contains_key("nullValue") {
        return Ok(Value::Null);
    }
    if let Some(flag) = entries.get("booleanValue") {
        return Ok(flag.clone());
    }
    if let Some(int) = entries.get("integerValue") {
        let text = int
            .as_str()
            .ok_or_else(|| format!("integerValue is not a string: {int}"))?;
        let parsed: i64 = text
            .parse()
            .map_err(|_| format!("integerValue is not an i64: {text}"))?;
        return Ok(Value::from(parsed));
    }
    if let Some(float) = entries.get("doubleValue") {
        let parsed = float
            .as_f64()
            .ok_or_else(|| format!("doubleValue is not a number: {float}"))?;
        let number = serde_json::Number::from_f64(parsed)
            .ok_or_else(|| format!("doubleValue is not finite: {parsed}"))?;
        return Ok(Value::Number(number));
    }
    if let Some(text) = entries.get("stringValue") {
        return Ok(text.clone());
    }
    if let Some(stamp) = entries.get("timestampValue") {
        let text = stamp
            .as_str()
            .ok_or_else(|| format!("timestampValue is not a string: {stamp}"))?;
        DateTime::parse_from_rfc3339(text)
            .map_err(|err| format!("timestampValue is not RFC 3339: {err}"))?;
        // Validated here, left as a string for the model's serde parse.
        return Ok(stamp.clone());
    }
    if let Some(array) = entries.get("arrayValue") {
        let items = match array.get("values").and_then(Value::as_array) {
            Some(values) => values
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        return Ok(Value::Array(items));
    }
    if let Some(map) = entries.get("mapValue") {
        let mut decoded = Map::new();
        if let Some(fields) = map.get("fields").and_then(Value::as_object) {
            for (key, entry) in fields {
                decoded.insert(key.clone(), decode_value(entry)?);
            }
        }
        return Ok(Value::Object(decoded));
    }

    Err(format!("unsupported value type: {value}"))
}

/// Serialize a model and encode it as a Firestore `fields` map.
pub fn encode_fields<T: Serialize>(model: &T) -> Result<Value, StorageError> {
    let plain = serde_json::to_value(model).map_err(|err| StorageError::Encode(err.to_string()))?;
    let entries = plain
        .as_object()
        .ok_or_else(|| StorageError::Encode("model did not serialize to an object".to_string()))?;

    let mut fields = Map::new();
    for (key, entry) in entries {
        let encoded = encode_value(entry).map_err(StorageError::Encode)?;
        fields.insert(key.clone(), encoded);
    }
    Ok(Value::Object(fields))
}

/// Serialize a model and encode it as a single Firestore value
/// (a `mapValue`). Used for array-transform elements.
pub fn encode_model<T: Serialize>(model: &T) -> Result<Value, StorageError> {
    let plain = serde_json::to_value(model).map_err(|err| StorageError::Encode(err.to_string()))?;
    encode_value(&plain).map_err(StorageError::Encode)
}

/// Decode a full Firestore document into a domain model.
///
/// The document id is not a field on the wire; it is the tail segment of
/// the resource `name` and gets injected as an `id` field before
/// deserialization. Models without an id (the user profile) ignore it.
pub fn decode_document<T: DeserializeOwned>(document: &Value) -> Result<T, StorageError> {
    let name = document
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let id = name.rsplit('/').next().unwrap_or_default();

    let decode_err = |reason: String| StorageError::Decode {
        path: name.to_string(),
        reason,
    };

    let mut plain = Map::new();
    if let Some(fields) = document.get("fields").and_then(Value::as_object) {
        for (key, entry) in fields {
            plain.insert(key.clone(), decode_value(entry).map_err(&decode_err)?);
        }
    }
    plain.insert("id".to_string(), Value::from(id));

    serde_json::from_value(Value::Object(plain)).map_err(|err| decode_err(err.to_string()))
}
