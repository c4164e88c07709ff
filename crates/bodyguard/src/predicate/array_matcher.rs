//! Array shapes: positional and unordered.

use super::matcher::{impl_into_expected, Matcher};
use crate::engine::match_value;
use crate::error::{MatchError, MatchResult};
use crate::expected::Expected;
use crate::path::Path;
use crate::value::Value;
use std::fmt;
use tracing::trace;

/// How expected elements are paired with actual elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayOrder {
    /// Element `i` is matched against actual element `i`
    Ordered,
    /// Each expected element consumes the first unconsumed actual element it
    /// matches. There is no backtracking, so an early broad matcher can take
    /// an element a later, narrower one needed.
    Unordered,
}

/// Array matcher. Lengths must always be equal.
#[derive(Debug, Clone)]
pub struct ArrayMatcher {
    pub elements: Vec<Expected>,
    pub order: ArrayOrder,
}

impl ArrayMatcher {
    pub fn new(elements: impl IntoIterator<Item = Expected>, order: ArrayOrder) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            order,
        }
    }

    fn check_ordered(&self, path: &Path, actual: &[Value]) -> MatchResult {
        for (i, (expected, value)) in self.elements.iter().zip(actual).enumerate() {
            match_value(expected, &path.index(i), value)?;
        }
        Ok(())
    }

    fn check_unordered(&self, path: &Path, actual: &[Value]) -> MatchResult {
        let probe = path.index(0).probe();
        let mut used = vec![false; actual.len()];

        for (i, expected) in self.elements.iter().enumerate() {
            let found = actual.iter().enumerate().find(|(j, value)| {
                !used[*j] && match_value(expected, &probe, value).is_ok()
            });

            match found {
                Some((j, _)) => {
                    trace!(path = %path, expected = i, actual = j, "unordered element matched");
                    used[j] = true;
                }
                None => {
                    return Err(MatchError::ElementNotFound {
                        path: path.to_string(),
                        element: expected.to_string(),
                        index: i,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Matcher for ArrayMatcher {
    fn check(&self, path: &Path, value: &Value) -> MatchResult {
        let Value::Array(actual) = value else {
            return Err(MatchError::type_mismatch(path, "array", value.kind()));
        };

        if actual.len() != self.elements.len() {
            return Err(MatchError::LengthMismatch {
                path: path.to_string(),
                expected: self.elements.len(),
                actual: actual.len(),
            });
        }

        match self.order {
            ArrayOrder::Ordered => self.check_ordered(path, actual),
            ArrayOrder::Unordered => self.check_unordered(path, actual),
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, expected) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            expected.write_nested(f)?;
        }
        f.write_str("]")
    }
}

impl_into_expected!(ArrayMatcher);
