//! Kind checks: null, boolean, string, number, integer.

use super::matcher::{impl_into_expected, require_number, Matcher};
use crate::error::{MatchError, MatchResult};
use crate::path::Path;
use crate::value::Value;

/// Matches on the runtime kind of a value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMatcher {
    Null,
    Bool,
    String,
    Number,
    /// A number with no fractional part
    Integer,
}

impl Matcher for TypeMatcher {
    fn check(&self, path: &Path, value: &Value) -> MatchResult {
        match (self, value) {
            (TypeMatcher::Null, Value::Null) => Ok(()),
            (TypeMatcher::Null, other) => Err(MatchError::mismatch(
                path,
                format!("expected null, got {other}"),
            )),
            (TypeMatcher::Bool, Value::Bool(_)) => Ok(()),
            (TypeMatcher::Bool, other) => {
                Err(MatchError::type_mismatch(path, "boolean", other.kind()))
            }
            (TypeMatcher::String, Value::String(_)) => Ok(()),
            (TypeMatcher::String, other) => {
                Err(MatchError::type_mismatch(path, "string", other.kind()))
            }
            (TypeMatcher::Number, other) => require_number(path, other).map(|_| ()),
            (TypeMatcher::Integer, other) => {
                let n = require_number(path, other)?;
                if n.fract() != 0.0 {
                    return Err(MatchError::mismatch(
                        path,
                        format!("expected integer, got {n}"),
                    ));
                }
                Ok(())
            }
        }
    }
}

impl_into_expected!(TypeMatcher);
