//! Predicate library for expected shapes.
//!
//! Predicates are small immutable values implementing [`Matcher`]. They are
//! built through the factory functions below and can be reused across any
//! number of checks, including from parallel tests.
//!
//! # Module Structure
//!
//! - `matcher` - The `Matcher` trait, closure adapter and shared helpers
//! - `type_matcher` - Kind checks (null, boolean, string, number, integer)
//! - `string_matcher` - String formats (UUID, email, regex, length, URL, one-of, custom)
//! - `time_matcher` - RFC 3339 / date parsing with optional bounds
//! - `number_matcher` - Numeric ranges and deltas
//! - `object_matcher` - Partial and strict object shapes
//! - `array_matcher` - Ordered and unordered array shapes

mod array_matcher;
mod matcher;
mod number_matcher;
mod object_matcher;
mod string_matcher;
mod time_matcher;
mod type_matcher;

pub use array_matcher::{ArrayMatcher, ArrayOrder};
pub use matcher::{matcher_fn, FnMatcher, Matcher};
pub use number_matcher::NumberMatcher;
pub use object_matcher::ObjectMatcher;
pub use string_matcher::{FormatCheck, StringMatcher};
pub use time_matcher::{TimeBound, TimeFormat, TimeMatcher};
pub use type_matcher::TypeMatcher;

use crate::expected::Expected;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::Arc;

// ===== Kinds =====

/// Value must be `null`.
pub fn null() -> TypeMatcher {
    TypeMatcher::Null
}

/// Value must be `true` or `false`.
pub fn boolean() -> TypeMatcher {
    TypeMatcher::Bool
}

/// Value must be a string.
pub fn string() -> TypeMatcher {
    TypeMatcher::String
}

/// Value must be a number.
pub fn number() -> TypeMatcher {
    TypeMatcher::Number
}

/// Value must be a number with no fractional part.
pub fn integer() -> TypeMatcher {
    TypeMatcher::Integer
}

// ===== String formats =====

/// Canonical 8-4-4-4-12 hex UUID, any case.
pub fn uuid() -> StringMatcher {
    StringMatcher::Uuid
}

/// Simple `local@domain.tld` address. Intentionally permissive.
pub fn email() -> StringMatcher {
    StringMatcher::Email
}

/// String matching `pattern`.
///
/// An invalid pattern does not fail here; it fails every check that uses it.
pub fn regexp(pattern: impl Into<String>) -> StringMatcher {
    StringMatcher::matches(pattern)
}

/// String whose byte length is within `[min, max]`.
pub fn string_length(min: usize, max: usize) -> StringMatcher {
    StringMatcher::Length { min, max }
}

/// `http://` or `https://` URL.
pub fn url() -> StringMatcher {
    StringMatcher::Url
}

/// String equal to one of `options`.
pub fn one_of<I, S>(options: I) -> StringMatcher
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    StringMatcher::OneOf(options.into_iter().map(Into::into).collect())
}

/// String accepted by a custom validator; its error text becomes the failure message.
pub fn string_with_format<F, E>(check: F) -> StringMatcher
where
    F: Fn(&str) -> Result<(), E> + Send + Sync + 'static,
    E: fmt::Display,
{
    StringMatcher::Format(Arc::new(move |s: &str| check(s).map_err(|e| e.to_string())))
}

// ===== Time =====

/// RFC 3339 date-time.
pub fn timestamp() -> TimeMatcher {
    TimeMatcher::rfc3339(TimeBound::Any)
}

/// `YYYY-MM-DD` calendar date.
pub fn date() -> TimeMatcher {
    TimeMatcher::new(TimeFormat::Date, TimeBound::Any)
}

/// RFC 3339 time at most `delta` away from `expected` (inclusive).
pub fn time_within_duration(expected: DateTime<Utc>, delta: Duration) -> TimeMatcher {
    TimeMatcher::rfc3339(TimeBound::WithinDuration { expected, delta })
}

/// RFC 3339 time within `[start, end]`.
pub fn time_within_range(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeMatcher {
    TimeMatcher::rfc3339(TimeBound::WithinRange { start, end })
}

/// RFC 3339 time strictly before `bound`.
pub fn time_before(bound: DateTime<Utc>) -> TimeMatcher {
    TimeMatcher::rfc3339(TimeBound::Before(bound))
}

/// RFC 3339 time strictly after `bound`.
pub fn time_after(bound: DateTime<Utc>) -> TimeMatcher {
    TimeMatcher::rfc3339(TimeBound::After(bound))
}

// ===== Numbers =====

pub fn number_within_delta(expected: f64, delta: f64) -> NumberMatcher {
    NumberMatcher::WithinDelta { expected, delta }
}

pub fn number_within_range(min: f64, max: f64) -> NumberMatcher {
    NumberMatcher::WithinRange { min, max }
}

pub fn number_greater(min: f64) -> NumberMatcher {
    NumberMatcher::Greater(min)
}

pub fn number_smaller(max: f64) -> NumberMatcher {
    NumberMatcher::Smaller(max)
}

/// Same as `number_greater(0.0)`.
pub fn positive() -> NumberMatcher {
    number_greater(0.0)
}

/// Same as `number_smaller(0.0)`.
pub fn negative() -> NumberMatcher {
    number_smaller(0.0)
}

// ===== Containers =====

/// Object containing at least the given keys. See also [`crate::object!`].
pub fn object<I, K>(fields: I) -> ObjectMatcher
where
    I: IntoIterator<Item = (K, Expected)>,
    K: Into<String>,
{
    ObjectMatcher::new(fields, false)
}

/// Object with exactly the given keys. See also [`crate::strict_object!`].
pub fn strict_object<I, K>(fields: I) -> ObjectMatcher
where
    I: IntoIterator<Item = (K, Expected)>,
    K: Into<String>,
{
    ObjectMatcher::new(fields, true)
}

/// Array matching `elements` position by position. See also [`crate::array!`].
pub fn array(elements: impl IntoIterator<Item = Expected>) -> ArrayMatcher {
    ArrayMatcher::new(elements, ArrayOrder::Ordered)
}

/// Array matching `elements` in any order. See also [`crate::unordered_array!`].
pub fn unordered_array(elements: impl IntoIterator<Item = Expected>) -> ArrayMatcher {
    ArrayMatcher::new(elements, ArrayOrder::Unordered)
}
