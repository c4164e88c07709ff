//! Dispatch between literal comparison and predicate invocation.
//!
//! Containers recurse back into [`match_value`], so this is the single place
//! where the nesting guard is enforced.

use crate::error::{MatchError, MatchResult};
use crate::expected::{Expected, Literal};
use crate::path::Path;
use crate::value::Value;

/// Compare one expected node against one actual value at `path`.
pub fn match_value(expected: &Expected, path: &Path, actual: &Value) -> MatchResult {
    if path.is_too_deep() {
        return Err(MatchError::DepthExceeded {
            path: path.to_string(),
            limit: path.limit(),
        });
    }

    match expected {
        Expected::Matcher(matcher) => matcher.check(path, actual),
        Expected::Literal(literal) => {
            if literal_equals(literal, actual) {
                return Ok(());
            }
            Err(MatchError::LiteralMismatch {
                path: path.to_string(),
                expected: literal.to_string(),
                expected_kind: literal.kind(),
                actual: actual.to_string(),
                actual_kind: actual.kind(),
            })
        }
    }
}

/// Deep equality between a literal and a decoded value.
///
/// Integer literals equal a decoded number only when converting the integer
/// to `f64` yields exactly that number. There is no tolerance.
fn literal_equals(literal: &Literal, actual: &Value) -> bool {
    match (literal, actual) {
        (Literal::Null, Value::Null) => true,
        (Literal::Bool(a), Value::Bool(b)) => a == b,
        (Literal::String(a), Value::String(b)) => a == b,
        (Literal::Float(a), Value::Number(b)) => a == b,
        (Literal::Integer(n), Value::Number(f)) => (*n as f64) == *f,
        (Literal::Array(expected), Value::Array(actual)) => {
            expected.len() == actual.len()
                && expected
                    .iter()
                    .zip(actual)
                    .all(|(e, a)| literal_equals(e, a))
        }
        (Literal::Object(expected), Value::Object(actual)) => {
            expected.len() == actual.len()
                && expected.iter().all(|(key, e)| {
                    actual.get(key).is_some_and(|a| literal_equals(e, a))
                })
        }
        _ => false,
    }
}
