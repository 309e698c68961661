use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::map::ErrorMap;
use crate::Result;

impl Serialize for ErrorMap {
    /// Serialize as a JSON object mapping field names to display messages,
    /// for example `{"email":"invalid format","password":"too short"}`.
    ///
    /// Empty and uninitialized maps serialize to `{}`. Messages are
    /// flattened to text, so this projection is one-way; there is no
    /// matching `Deserialize` impl.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, err) in self.iter() {
            map.serialize_entry(field, &err.message())?;
        }
        map.end()
    }
}

impl ErrorMap {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_json_object_round_trips_through_generic_reader() {
        let mut errs = ErrorMap::new();
        errs.set("a", "x");
        errs.set("b", "y");

        let json = errs.to_json().unwrap();
        let parsed: HashMap<String, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["a"], "x");
        assert_eq!(parsed["b"], "y");
    }

    #[test]
    fn test_json_empty_and_uninitialized() {
        let uninitialized = ErrorMap::new();
        assert_eq!(uninitialized.to_json().unwrap(), "{}");

        let mut cleared = ErrorMap::new();
        cleared.clear();
        assert_eq!(cleared.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_json_escapes_special_characters() {
        let mut errs = ErrorMap::new();
        errs.set("note", "value with \"quotes\" and \\ backslash");

        let json = errs.to_json().unwrap();
        let parsed: HashMap<String, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["note"], "value with \"quotes\" and \\ backslash");
    }

    #[test]
    fn test_json_flattens_nested_map_to_message() {
        let mut inner = ErrorMap::new();
        inner.set("street", "required");

        let mut errs = ErrorMap::new();
        errs.set("address", inner);

        let json = errs.to_json().unwrap();
        let parsed: HashMap<String, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["address"], "street: required");
    }
}
