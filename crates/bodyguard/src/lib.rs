//! Structural assertions for JSON documents in tests.
//!
//! An expected shape mixes plain literals with predicates. The document is
//! decoded with `serde_json` and walked against the shape; the first mismatch
//! is reported with its location (`$`, `.key`, `[index]`).
//!
//! # Example
//!
//! ```
//! use bodyguard::{array, assert_json, check, number_greater, object, string, timestamp, uuid};
//!
//! let body = r#"{
//!     "id": "550e8400-e29b-41d4-a716-446655440000",
//!     "username": "jdoe",
//!     "age": 30,
//!     "created_at": "2023-10-27T10:00:00Z",
//!     "tags": ["golang", "testing", "api"]
//! }"#;
//!
//! assert_json(
//!     object! {
//!         "id" => uuid(),
//!         "username" => "jdoe",
//!         "age" => number_greater(18.0),
//!         "created_at" => timestamp(),
//!         "tags" => array!["golang", string(), "api"],
//!     },
//!     body,
//! );
//!
//! let err = check(object! { "age" => number_greater(40.0) }, body).unwrap_err();
//! assert_eq!(err.to_string(), "at $.age: expected number greater than 40, got 30");
//! ```

mod engine;
mod error;
mod expected;
mod options;
mod path;
pub mod predicate;
mod value;

pub use engine::match_value;
pub use error::{ErrorKind, MatchError, MatchResult};
pub use expected::{Expected, Literal};
pub use options::{AssertOptions, DEFAULT_MAX_DEPTH};
pub use path::Path;
pub use predicate::*;
pub use value::Value;

use tracing::debug;

/// Decode `body` and check it against `expected`.
pub fn check(expected: impl Into<Expected>, body: impl AsRef<[u8]>) -> MatchResult {
    check_with(&AssertOptions::default(), expected, body)
}

/// Like [`check`], with explicit options.
pub fn check_with(
    options: &AssertOptions,
    expected: impl Into<Expected>,
    body: impl AsRef<[u8]>,
) -> MatchResult {
    let actual = Value::from_slice(body.as_ref()).map_err(|e| {
        debug!(error = %e, "body is not valid JSON");
        MatchError::Decode(e)
    })?;
    check_value_with(options, expected, &actual)
}

/// Check an already decoded value.
pub fn check_value(expected: impl Into<Expected>, actual: &Value) -> MatchResult {
    check_value_with(&AssertOptions::default(), expected, actual)
}

fn check_value_with(
    options: &AssertOptions,
    expected: impl Into<Expected>,
    actual: &Value,
) -> MatchResult {
    let root = Path::root(options.max_depth);
    match_value(&expected.into(), &root, actual).inspect_err(|e| {
        debug!(path = e.path().unwrap_or_default(), error = %e, "json assertion failed");
    })
}

/// Panic with the mismatch message if `body` does not match `expected`.
///
/// Intended for `#[test]` functions: the panic fails only the current test.
#[track_caller]
pub fn assert_json(expected: impl Into<Expected>, body: impl AsRef<[u8]>) {
    if let Err(e) = check(expected, body) {
        panic!("{e}");
    }
}
