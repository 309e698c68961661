use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::{ErrmapError, ErrorMap, Result};

/// Message input accepted by [`ErrorMap::set`].
///
/// Instead of inspecting an opaque value at runtime, callers hand over one
/// of a closed set of variants: plain text, an underlying error, a nested
/// map, or nothing at all. Most code never names this type directly and
/// relies on the `From` conversions instead.
#[derive(Debug, Clone)]
pub enum ErrorMessage {
    /// A plain text message.
    Text(String),
    /// An underlying error value, stored as-is.
    Source(Arc<dyn StdError + Send + Sync>),
    /// A nested error map.
    Nested(ErrorMap),
    /// No message; [`ErrorMap::set`] treats this as a no-op.
    Absent,
}

impl ErrorMessage {
    /// Wrap an arbitrary error value.
    pub fn source<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ErrorMessage::Source(Arc::new(err))
    }

    /// Convert a JSON value into a message.
    ///
    /// Non-empty strings become text messages; nulls and empty strings are
    /// treated as absent. Every other JSON type is rejected with
    /// [`ErrmapError::UnsupportedMessage`].
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(ErrorMessage::Absent),
            JsonValue::String(s) if s.is_empty() => Ok(ErrorMessage::Absent),
            JsonValue::String(s) => Ok(ErrorMessage::Text(s.clone())),
            other => Err(ErrmapError::UnsupportedMessage(
                json_type_name(other).to_string(),
            )),
        }
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl From<&str> for ErrorMessage {
    fn from(s: &str) -> Self {
        ErrorMessage::Text(s.to_string())
    }
}

impl From<String> for ErrorMessage {
    fn from(s: String) -> Self {
        ErrorMessage::Text(s)
    }
}

impl From<Option<String>> for ErrorMessage {
    fn from(s: Option<String>) -> Self {
        match s {
            Some(s) => ErrorMessage::Text(s),
            None => ErrorMessage::Absent,
        }
    }
}

impl From<Option<&str>> for ErrorMessage {
    fn from(s: Option<&str>) -> Self {
        match s {
            Some(s) => ErrorMessage::Text(s.to_string()),
            None => ErrorMessage::Absent,
        }
    }
}

impl From<ErrorMap> for ErrorMessage {
    fn from(map: ErrorMap) -> Self {
        ErrorMessage::Nested(map)
    }
}

impl From<Arc<dyn StdError + Send + Sync>> for ErrorMessage {
    fn from(err: Arc<dyn StdError + Send + Sync>) -> Self {
        ErrorMessage::Source(err)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for ErrorMessage {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        ErrorMessage::Source(Arc::from(err))
    }
}

/// A single stored entry in an [`ErrorMap`].
#[derive(Debug, Clone)]
pub enum FieldError {
    /// An entry created from a text message.
    Message(String),
    /// An entry holding an underlying error value.
    Source(Arc<dyn StdError + Send + Sync>),
    /// An entry holding a nested error map.
    Nested(ErrorMap),
}

impl FieldError {
    /// The display message for this entry.
    ///
    /// Nested maps render their own full text form here; the collapsed
    /// `[N nested errors]` placeholder only applies to the parent map's
    /// text form.
    pub fn message(&self) -> String {
        match self {
            FieldError::Message(s) => s.clone(),
            FieldError::Source(err) => err.to_string(),
            FieldError::Nested(map) => map.to_string(),
        }
    }

    /// The nested map, if this entry holds one.
    pub fn nested(&self) -> Option<&ErrorMap> {
        match self {
            FieldError::Nested(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl PartialEq for FieldError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldError::Nested(a), FieldError::Nested(b)) => a == b,
            (FieldError::Nested(_), _) | (_, FieldError::Nested(_)) => false,
            _ => self.message() == other.message(),
        }
    }
}

impl Eq for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_string() {
        let msg = ErrorMessage::from_json(&json!("too short")).unwrap();
        assert!(matches!(msg, ErrorMessage::Text(s) if s == "too short"));
    }

    #[test]
    fn test_from_json_absent_cases() {
        assert!(matches!(
            ErrorMessage::from_json(&json!(null)).unwrap(),
            ErrorMessage::Absent
        ));
        assert!(matches!(
            ErrorMessage::from_json(&json!("")).unwrap(),
            ErrorMessage::Absent
        ));
    }

    #[test]
    fn test_from_json_unsupported_types() {
        for (value, name) in [
            (json!(123), "number"),
            (json!(true), "boolean"),
            (json!([1, 2]), "array"),
            (json!({"a": 1}), "object"),
        ] {
            match ErrorMessage::from_json(&value) {
                Err(ErrmapError::UnsupportedMessage(found)) => assert_eq!(found, name),
                other => panic!("expected UnsupportedMessage, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_from_conversions() {
        assert!(matches!(
            ErrorMessage::from("oops"),
            ErrorMessage::Text(s) if s == "oops"
        ));
        assert!(matches!(
            ErrorMessage::from(Option::<String>::None),
            ErrorMessage::Absent
        ));
        assert!(matches!(
            ErrorMessage::from(Some("oops")),
            ErrorMessage::Text(s) if s == "oops"
        ));
        assert!(matches!(
            ErrorMessage::from(ErrorMap::new()),
            ErrorMessage::Nested(_)
        ));
    }

    #[test]
    fn test_field_error_equality_by_message() {
        let from_text = FieldError::Message("broken".to_string());
        let from_source = FieldError::Source(Arc::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "broken",
        )));
        assert_eq!(from_text, from_source);

        let different = FieldError::Message("fine".to_string());
        assert_ne!(from_text, different);
    }
}
