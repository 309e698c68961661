use std::error::Error as StdError;

use crate::map::ErrorMap;

/// Find the first [`ErrorMap`] in `err`'s source chain.
///
/// The chain consists of `err` itself, followed by the errors produced by
/// repeatedly calling [`StdError::source`]. A clone of the first value
/// whose concrete type is [`ErrorMap`] is returned; `None` once the chain
/// is exhausted.
///
/// This lets code that received an opaque error across an API boundary
/// recover the structured field-to-message mapping without knowing the
/// producer's wrapper types:
///
/// ```rust
/// use errmap::{extract, ErrorMap};
///
/// let mut errs = ErrorMap::new();
/// errs.set("email", "invalid format");
/// let err = errs.as_error().unwrap();
///
/// let found = extract(&err).unwrap();
/// assert_eq!(found.get("email"), "invalid format");
/// ```
pub fn extract(err: &(dyn StdError + 'static)) -> Option<ErrorMap> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(map) = err.downcast_ref::<ErrorMap>() {
            return Some(map.clone());
        }
        current = err.source();
    }
    None
}

/// Variant of [`extract`] that writes into an existing map.
///
/// On success `target` is overwritten with the extracted map and `true` is
/// returned; on failure `target` is left untouched.
pub fn extract_into(err: &(dyn StdError + 'static), target: &mut ErrorMap) -> bool {
    match extract(err) {
        Some(map) => {
            *target = map;
            true
        }
        None => false,
    }
}
