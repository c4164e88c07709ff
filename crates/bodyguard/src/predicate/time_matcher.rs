//! Temporal predicates over string-encoded times.
//!
//! Values are parsed first (RFC 3339 or `YYYY-MM-DD`), then optionally
//! compared against a bound. All comparisons happen in UTC.

use super::matcher::{impl_into_expected, require_str, Matcher};
use crate::error::{MatchError, MatchResult};
use crate::path::Path;
use crate::value::Value;
use chrono::{DateTime, Duration, NaiveDate, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = "YYYY-MM-DD".len();
/// Byte offset of the date/time separator in an RFC 3339 date-time.
const RFC3339_SEPARATOR: usize = DATE_LEN;

/// How the string is parsed into a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    Rfc3339,
    /// Calendar date, taken as midnight UTC
    Date,
}

impl TimeFormat {
    fn parse(self, path: &Path, s: &str) -> Result<DateTime<Utc>, MatchError> {
        match self {
            TimeFormat::Rfc3339 => {
                // chrono also accepts a space separator, RFC 3339 does not
                if !matches!(s.as_bytes().get(RFC3339_SEPARATOR), Some(b'T' | b't')) {
                    return Err(MatchError::mismatch(
                        path,
                        format!("expected RFC 3339 date-time, got {s:?}"),
                    ));
                }
                DateTime::parse_from_rfc3339(s)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|e| MatchError::mismatch(path, e.to_string()))
            }
            TimeFormat::Date => {
                let date = (s.len() == DATE_LEN)
                    .then(|| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
                    .flatten()
                    .and_then(|d| d.and_hms_opt(0, 0, 0));
                date.map(|d| d.and_utc()).ok_or_else(|| {
                    MatchError::mismatch(path, format!("expected YYYY-MM-DD, got {s:?}"))
                })
            }
        }
    }
}

/// Constraint applied to the parsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
    Any,
    /// `|t - expected| <= delta`
    WithinDuration {
        expected: DateTime<Utc>,
        delta: Duration,
    },
    /// `start <= t <= end`
    WithinRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    Before(DateTime<Utc>),
    After(DateTime<Utc>),
}

impl TimeBound {
    fn check(&self, path: &Path, t: DateTime<Utc>) -> MatchResult {
        let got = || t.to_rfc3339();
        let failure = match self {
            TimeBound::Any => None,
            TimeBound::WithinDuration { expected, delta } => {
                let diff = t - *expected;
                let diff = if diff < Duration::zero() { -diff } else { diff };
                (diff > *delta).then(|| {
                    format!(
                        "expected time within {} of {}, got {}",
                        format_delta(*delta),
                        expected.to_rfc3339(),
                        got()
                    )
                })
            }
            TimeBound::WithinRange { start, end } => (t < *start || t > *end).then(|| {
                format!(
                    "expected time between {} and {}, got {}",
                    start.to_rfc3339(),
                    end.to_rfc3339(),
                    got()
                )
            }),
            TimeBound::Before(bound) => (t >= *bound)
                .then(|| format!("expected time before {}, got {}", bound.to_rfc3339(), got())),
            TimeBound::After(bound) => (t <= *bound)
                .then(|| format!("expected time after {}, got {}", bound.to_rfc3339(), got())),
        };
        match failure {
            Some(message) => Err(MatchError::mismatch(path, message)),
            None => Ok(()),
        }
    }
}

/// Whole seconds as `5s`, anything finer as `1500ms`.
fn format_delta(delta: Duration) -> String {
    match delta.num_milliseconds() {
        ms if ms % 1000 == 0 => format!("{}s", ms / 1000),
        ms => format!("{ms}ms"),
    }
}

/// A parsed-time predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeMatcher {
    pub format: TimeFormat,
    pub bound: TimeBound,
}

impl TimeMatcher {
    pub fn new(format: TimeFormat, bound: TimeBound) -> Self {
        Self { format, bound }
    }

    /// RFC 3339 time checked against `bound`.
    pub fn rfc3339(bound: TimeBound) -> Self {
        Self::new(TimeFormat::Rfc3339, bound)
    }
}

impl Matcher for TimeMatcher {
    fn check(&self, path: &Path, value: &Value) -> MatchResult {
        let s = require_str(path, value, "time string")?;
        let t = self.format.parse(path, s)?;
        self.bound.check(path, t)
    }
}

impl_into_expected!(TimeMatcher);
