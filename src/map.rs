use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

use serde_json::Value as JsonValue;

use crate::message::{ErrorMessage, FieldError};
use crate::Result;

/// A collection of errors keyed by field name.
///
/// `ErrorMap` collects multiple validation errors, where each key is a
/// field name and the value is the associated error. It implements
/// [`std::error::Error`], [`std::fmt::Display`] and [`serde::Serialize`],
/// so a populated map can cross API boundaries as an ordinary error value
/// and later be recovered with [`crate::extract`].
///
/// Backing storage is lazy: a freshly constructed map holds no storage at
/// all, and the first call to [`ErrorMap::set`] allocates it. Every read
/// operation treats the uninitialized and initialized-but-empty states the
/// same, except for the text form, which renders `"<nil>"` for the former
/// and an empty string for the latter.
///
/// The map is not internally synchronized. Mutation requires `&mut self`,
/// so shared concurrent use needs external locking.
#[derive(Debug, Clone, Default)]
pub struct ErrorMap {
    entries: Option<HashMap<String, FieldError>>,
}

impl ErrorMap {
    /// Create a new map with no backing storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a message with a field, lazily initializing storage.
    ///
    /// Absent and empty-text messages never create an entry, but the call
    /// still initializes storage so a later set finds it ready. A non-empty
    /// message overwrites any prior entry for the field.
    pub fn set(&mut self, field: impl Into<String>, msg: impl Into<ErrorMessage>) {
        let entries = self.entries.get_or_insert_with(HashMap::new);
        let value = match msg.into() {
            ErrorMessage::Absent => return,
            ErrorMessage::Text(s) if s.is_empty() => return,
            ErrorMessage::Text(s) => FieldError::Message(s),
            ErrorMessage::Source(err) => FieldError::Source(err),
            ErrorMessage::Nested(map) => FieldError::Nested(map),
        };
        entries.insert(field.into(), value);
    }

    /// Associate an arbitrary error value with a field.
    pub fn set_source<E>(&mut self, field: impl Into<String>, err: E)
    where
        E: StdError + Send + Sync + 'static,
    {
        self.set(field, ErrorMessage::source(err));
    }

    /// Associate a JSON-sourced message with a field.
    ///
    /// Strings behave like [`ErrorMap::set`] with text and nulls are no-ops.
    /// Any other JSON type is rejected with
    /// [`crate::ErrmapError::UnsupportedMessage`], leaving the entry for
    /// `field` unchanged (storage still initializes).
    pub fn set_json(&mut self, field: impl Into<String>, value: &JsonValue) -> Result<()> {
        self.entries.get_or_insert_with(HashMap::new);
        let msg = ErrorMessage::from_json(value)?;
        self.set(field, msg);
        Ok(())
    }

    /// Remove the error for the given field, if present.
    pub fn delete(&mut self, field: &str) {
        if let Some(entries) = self.entries.as_mut() {
            entries.remove(field);
        }
    }

    /// Remove all errors, leaving the map initialized and empty.
    pub fn clear(&mut self) {
        self.entries = Some(HashMap::new());
    }

    /// Check whether an error exists for the given field.
    pub fn has(&self, field: &str) -> bool {
        self.entries
            .as_ref()
            .map_or(false, |entries| entries.contains_key(field))
    }

    /// The display message for a field, or an empty string when absent.
    pub fn get(&self, field: &str) -> String {
        self.entries
            .as_ref()
            .and_then(|entries| entries.get(field))
            .map(FieldError::message)
            .unwrap_or_default()
    }

    /// All field names with errors, in ascending lexicographic order.
    pub fn fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = self
            .entries
            .as_ref()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        fields.sort();
        fields
    }

    /// The number of fields with errors.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    /// Check whether the map holds no errors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over field names and their stored errors, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.entries
            .iter()
            .flatten()
            .map(|(field, err)| (field.as_str(), err))
    }

    /// Expose the map as a generic error value, or `None` when empty.
    pub fn as_error(&self) -> Option<ErrorMap> {
        if self.is_empty() {
            None
        } else {
            Some(self.clone())
        }
    }

    /// Convert into a `Result`, erring when any field has an error.
    pub fn into_result(self) -> std::result::Result<(), ErrorMap> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ErrorMap {
    /// Render the text form: `"field: message"` entries joined with `"; "`.
    ///
    /// Entry order is unspecified and may differ between calls. Nested maps
    /// collapse to a `[N nested errors]` placeholder rather than recursing;
    /// this is part of the format contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = match self.entries.as_ref() {
            None => return f.write_str("<nil>"),
            Some(entries) => entries,
        };

        let mut first = true;
        for (field, err) in entries {
            if !first {
                f.write_str("; ")?;
            }
            first = false;

            match err {
                FieldError::Nested(nested) => {
                    write!(f, "{}: [{} nested errors]", field, nested.len())?
                }
                other => write!(f, "{}: {}", field, other)?,
            }
        }
        Ok(())
    }
}

impl StdError for ErrorMap {}

impl PartialEq for ErrorMap {
    /// Entry-set equality: same fields with equal errors. The uninitialized
    /// and initialized-but-empty states compare equal.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(field, err)| {
            other
                .entries
                .as_ref()
                .and_then(|entries| entries.get(field))
                .map_or(false, |other_err| other_err == err)
        })
    }
}

impl Eq for ErrorMap {}
