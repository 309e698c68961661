//! # Errmap Crate
//!
//! This crate provides [`ErrorMap`], a lightweight container for managing
//! validation errors in a structured, field-keyed format. It collects
//! multiple named failures into a single composite error value that can be
//! propagated, formatted, serialized, and later recovered from an error
//! chain.
//!
//! ## Key Features
//!
//! - **Structured storage**: field name to error, with lazy initialization
//! - **Composite error**: a populated map is itself a [`std::error::Error`]
//! - **Text form**: `"field: message"` entries joined with `"; "`, plus a
//!   best-effort [`parse_errors`] inverse
//! - **JSON projection**: one-way [`serde::Serialize`] to an object of
//!   field names and messages
//! - **Chain extraction**: [`extract`] recovers an [`ErrorMap`] from
//!   anywhere in an error's source chain
//!
//! ## Usage
//!
//! ```rust
//! use errmap::ErrorMap;
//!
//! let mut errs = ErrorMap::new();
//! errs.set("password", "expected at least 8 characters");
//! errs.set("name", "name cannot be empty");
//!
//! if errs.has("password") {
//!     println!("password error: {}", errs.get("password"));
//! }
//!
//! // A non-empty map converts to a generic error value.
//! if let Some(err) = errs.as_error() {
//!     println!("validation failed: {}", err);
//! }
//! ```
//!
//! Recovering the structured map after it crossed an API boundary:
//!
//! ```rust
//! use errmap::{extract_into, ErrorMap};
//!
//! fn validate(name: &str) -> Result<(), ErrorMap> {
//!     let mut errs = ErrorMap::new();
//!     if name.is_empty() {
//!         errs.set("name", "name cannot be empty");
//!     }
//!     errs.into_result()
//! }
//!
//! let err = validate("").unwrap_err();
//! let mut errs = ErrorMap::new();
//! if extract_into(&err, &mut errs) {
//!     for field in errs.fields() {
//!         println!("{}: {}", field, errs.get(&field));
//!     }
//! }
//! ```
//!
//! ## Ordering
//!
//! The text form and the JSON projection emit entries in unspecified order;
//! only [`ErrorMap::fields`] sorts. Callers comparing rendered output must
//! compare through [`parse_errors`] or a generic JSON reader.
//!
//! ## Thread Safety
//!
//! The map has no internal synchronization. Mutation requires exclusive
//! access; callers sharing a map across threads must serialize access
//! externally.

pub mod error;
pub mod extract;
pub mod map;
pub mod message;
pub mod parse;
pub mod serialize;

pub use error::{ErrmapError, Result};
pub use extract::{extract, extract_into};
pub use map::ErrorMap;
pub use message::{ErrorMessage, FieldError};
pub use parse::parse_errors;
