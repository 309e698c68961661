use std::collections::HashMap;

use tracing::debug;

/// Parse the joined text form back into a field-to-message mapping.
///
/// The input is expected in the shape produced by [`crate::ErrorMap`]'s
/// text form: `"field1: message1; field2: message2"`. Only the first
/// `": "` in each segment is treated as the delimiter, so messages that
/// themselves contain `": "` survive intact.
///
/// Parsing is best effort: segments without a delimiter and segments with
/// an empty key or value are dropped rather than reported. The result maps
/// field names to message text, so entries a map rendered lossily (nested
/// maps collapsed to a count) cannot be reconstructed.
pub fn parse_errors(s: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();
    if s.is_empty() {
        return result;
    }

    for part in s.split("; ") {
        if part.is_empty() {
            continue;
        }
        match part.split_once(": ") {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                result.insert(key.to_string(), value.to_string());
            }
            _ => debug!("dropping malformed error segment: {part}"),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_errors("").is_empty());
    }

    #[test]
    fn test_parse_basic() {
        let parsed = parse_errors("email: invalid format; password: too short");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["email"], "invalid format");
        assert_eq!(parsed["password"], "too short");
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        let parsed = parse_errors("field1: msg1; ; field2: msg2");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["field1"], "msg1");
        assert_eq!(parsed["field2"], "msg2");
    }

    #[test]
    fn test_parse_drops_malformed_segments() {
        let parsed = parse_errors("field1: msg1; invalidpart; field2: msg2");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["field1"], "msg1");
        assert_eq!(parsed["field2"], "msg2");
    }

    #[test]
    fn test_parse_only_first_delimiter_splits() {
        let parsed = parse_errors("field: message: with colons");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["field"], "message: with colons");
    }

    #[test]
    fn test_parse_later_duplicates_overwrite() {
        let parsed = parse_errors("field: first; field: second");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["field"], "second");
    }

    #[test]
    fn test_parse_tolerates_trailing_separator() {
        let parsed = parse_errors("field1: msg1; field2: msg2; ");

        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_drops_empty_key_or_value() {
        let parsed = parse_errors(": orphan message; field: ");

        assert!(parsed.is_empty());
    }
}
