//! Purpose: Define a stable, structured schema for stderr error reports.
//! Exports: `error_json`.
//! Role: Shared contract helper for CLI diagnostics.
//! Invariants: Error reports never alter stdout payloads.
//! Invariants: JSON schema is stable once published; fields are additive-only.
use serde_json::{Map, Value, json};

use crate::api::Error;

pub fn error_json(error: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(error.kind().as_str()));
    inner.insert("message".to_string(), json!(error.to_string()));
    if let Some(field) = error.field() {
        inner.insert("field".to_string(), json!(field));
    }
    if let Some(record) = error.record() {
        inner.insert("record".to_string(), json!(record));
    }
    if let Some(hint) = error.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

#[cfg(test)]
mod tests {
    use super::error_json;
    use crate::api::{Error, ErrorKind};

    #[test]
    fn error_json_has_required_fields() {
        let err = Error::new(ErrorKind::Schema)
            .with_message("`_meta.count` is 4 but `items` holds 3 records")
            .with_hint("Fix the declared count or the items array.");

        let value = error_json(&err);
        let obj = value
            .get("error")
            .and_then(|v| v.as_object())
            .expect("error object");

        assert_eq!(obj.get("kind").and_then(|v| v.as_str()), Some("schema"));
        assert!(
            obj.get("message")
                .and_then(|v| v.as_str())
                .expect("message")
                .contains("_meta.count")
        );
        assert!(obj.get("hint").and_then(|v| v.as_str()).is_some());
    }
}
