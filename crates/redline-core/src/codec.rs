//! JSON codec for document payloads.
//!
//! Documents cross the crate boundary as rich-text delta JSON:
//!
//! ```text
//! {"ops": [{"insert": "Hello "}, {"insert": "world", "attributes": {"bold": true}},
//!          {"insert": {"image": "a.png"}}]}
//! ```
//!
//! Decoding also accepts a bare op list (`[...]`) and either shape wrapped in a JSON string, which
//! is how services commonly return a serialized document inside a larger JSON response.

use serde_json::Value;

use crate::document::{AttributedDocument, Run};
use crate::error::CodecError;

/// Decode a document payload.
pub fn decode_document(payload: &str) -> Result<AttributedDocument, CodecError> {
    let value: Value = serde_json::from_str(payload)?;
    decode_value(value, true)
}

/// Decode an already-parsed JSON value.
pub fn decode_document_value(value: Value) -> Result<AttributedDocument, CodecError> {
    decode_value(value, true)
}

fn decode_value(value: Value, unwrap_string: bool) -> Result<AttributedDocument, CodecError> {
    let ops = match value {
        Value::String(inner) if unwrap_string => {
            let inner: Value = serde_json::from_str(&inner)?;
            return decode_value(inner, false);
        }
        Value::Array(ops) => ops,
        Value::Object(mut object) => match object.remove("ops") {
            Some(Value::Array(ops)) => ops,
            _ => return Err(CodecError::NotADocument("expected an `ops` list".to_string())),
        },
        other => {
            return Err(CodecError::NotADocument(format!(
                "expected an object or a list, got {}",
                json_kind(&other)
            )));
        }
    };

    let mut doc = AttributedDocument::new();
    for (idx, op) in ops.into_iter().enumerate() {
        if op.get("insert").is_none() {
            return Err(CodecError::NotADocument(format!(
                "op {idx} is not an insert"
            )));
        }
        let run: Run = serde_json::from_value(op)?;
        doc.push(run);
    }
    Ok(doc)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Decode a payload, falling back to [`AttributedDocument::empty_document`] when it is absent or
/// unusable. Never fails.
pub fn decode_or_empty(payload: Option<&str>) -> AttributedDocument {
    let Some(payload) = payload.filter(|p| !p.trim().is_empty()) else {
        tracing::debug!("no document payload; using empty document");
        return AttributedDocument::empty_document();
    };

    match decode_document(payload) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::warn!(error = %err, "failed to decode document payload; using empty document");
            AttributedDocument::empty_document()
        }
    }
}

/// Encode a document as `{"ops": [...]}` JSON.
pub fn encode_document(doc: &AttributedDocument) -> Result<String, CodecError> {
    Ok(serde_json::to_string(doc)?)
}
