//! Core matching trait and helpers shared by all predicates.
//!
//! This module provides:
//! - `Matcher` - the single capability every predicate implements
//! - `FnMatcher` - adapter turning a closure into a matcher
//! - Helpers for the "value must be a string/number first" preamble

use crate::error::{MatchError, MatchResult};
use crate::path::Path;
use crate::value::Value;
use std::fmt;

/// A reusable check on one decoded value at one location.
///
/// Implementations must be pure: the same `(path, value)` always yields the
/// same outcome, and nothing is mutated.
pub trait Matcher: fmt::Debug + Send + Sync {
    /// Check `value`, reporting failures at `path`.
    fn check(&self, path: &Path, value: &Value) -> MatchResult;

    /// Short rendering used when a failure message names the matcher itself.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Closure-backed matcher, for one-off rules in tests.
pub struct FnMatcher<F> {
    check: F,
}

impl<F> fmt::Debug for FnMatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnMatcher")
    }
}

impl<F> Matcher for FnMatcher<F>
where
    F: Fn(&Path, &Value) -> MatchResult + Send + Sync,
{
    fn check(&self, path: &Path, value: &Value) -> MatchResult {
        (self.check)(path, value)
    }
}

impl<F> From<FnMatcher<F>> for crate::Expected
where
    F: Fn(&Path, &Value) -> MatchResult + Send + Sync + 'static,
{
    fn from(matcher: FnMatcher<F>) -> Self {
        crate::Expected::matcher(matcher)
    }
}

/// Build a matcher from a closure.
pub fn matcher_fn<F>(check: F) -> FnMatcher<F>
where
    F: Fn(&Path, &Value) -> MatchResult + Send + Sync,
{
    FnMatcher { check }
}

/// Require a string, failing with `expected <what>, got <kind>` otherwise.
pub(crate) fn require_str<'a>(
    path: &Path,
    value: &'a Value,
    what: &'static str,
) -> Result<&'a str, MatchError> {
    value
        .as_str()
        .ok_or_else(|| MatchError::type_mismatch(path, what, value.kind()))
}

/// Require a number, failing with `expected number, got <kind>` otherwise.
pub(crate) fn require_number(path: &Path, value: &Value) -> Result<f64, MatchError> {
    value
        .as_f64()
        .ok_or_else(|| MatchError::type_mismatch(path, "number", value.kind()))
}

/// Implement `From<matcher>` for `Expected` so matchers can sit in shapes.
macro_rules! impl_into_expected {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $crate::Expected {
                fn from(matcher: $ty) -> Self {
                    $crate::Expected::matcher(matcher)
                }
            }
        )*
    };
}

pub(crate) use impl_into_expected;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_matcher() {
        let even = matcher_fn(|path, value| match value.as_f64() {
            Some(n) if n % 2.0 == 0.0 => Ok(()),
            _ => Err(MatchError::mismatch(path, format!("expected even number, got {value}"))),
        });
        let root = Path::root(8);

        assert!(even.check(&root, &Value::Number(4.0)).is_ok());
        let err = even.check(&root, &Value::Number(3.0)).unwrap_err();
        assert_eq!(err.to_string(), "at $: expected even number, got 3");
    }

    #[test]
    fn test_require_helpers() {
        let root = Path::root(8);
        assert_eq!(
            require_str(&root, &Value::String("x".to_string()), "string").unwrap(),
            "x"
        );
        let err = require_str(&root, &Value::Bool(true), "time string").unwrap_err();
        assert_eq!(err.to_string(), "at $: expected time string, got bool");

        assert_eq!(require_number(&root, &Value::Number(2.0)).unwrap(), 2.0);
        let err = require_number(&root, &Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "at $: expected number, got null");
    }
}
