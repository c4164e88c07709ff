//! Numeric range predicates.

use super::matcher::{impl_into_expected, require_number, Matcher};
use crate::error::{MatchError, MatchResult};
use crate::path::Path;
use crate::value::Value;

/// Compiled numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberMatcher {
    /// `|n - expected| <= delta`
    WithinDelta { expected: f64, delta: f64 },
    /// `min <= n <= max`
    WithinRange { min: f64, max: f64 },
    /// `n > min`
    Greater(f64),
    /// `n < max`
    Smaller(f64),
}

impl Matcher for NumberMatcher {
    fn check(&self, path: &Path, value: &Value) -> MatchResult {
        let n = require_number(path, value)?;
        let failure = match *self {
            NumberMatcher::WithinDelta { expected, delta } => ((n - expected).abs() > delta)
                .then(|| format!("expected number within {delta} of {expected}, got {n}")),
            NumberMatcher::WithinRange { min, max } => (n < min || n > max)
                .then(|| format!("expected number within range {min} to {max}, got {n}")),
            NumberMatcher::Greater(min) => {
                (n <= min).then(|| format!("expected number greater than {min}, got {n}"))
            }
            NumberMatcher::Smaller(max) => {
                (n >= max).then(|| format!("expected number smaller than {max}, got {n}"))
            }
        };
        match failure {
            Some(message) => Err(MatchError::mismatch(path, message)),
            None => Ok(()),
        }
    }
}

impl_into_expected!(NumberMatcher);
