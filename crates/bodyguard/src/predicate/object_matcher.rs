//! Object shapes.
//!
//! Unlike literal object equality, these matchers recurse through the engine,
//! so every field can be a literal or a predicate:
//! - partial: only the listed keys are checked, extra keys are ignored
//! - strict: the key sets must be identical

use super::matcher::{impl_into_expected, Matcher};
use crate::engine::match_value;
use crate::error::{MatchError, MatchResult};
use crate::expected::Expected;
use crate::path::Path;
use crate::value::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Object matcher. Fields are checked in key order.
#[derive(Debug, Clone)]
pub struct ObjectMatcher {
    pub fields: BTreeMap<String, Expected>,
    /// Reject keys that are not listed in `fields`
    pub strict: bool,
}

impl ObjectMatcher {
    pub fn new<I, K>(fields: I, strict: bool) -> Self
    where
        I: IntoIterator<Item = (K, Expected)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            strict,
        }
    }
}

impl Matcher for ObjectMatcher {
    fn check(&self, path: &Path, value: &Value) -> MatchResult {
        let Value::Object(actual) = value else {
            return Err(MatchError::type_mismatch(path, "object", value.kind()));
        };

        if self.strict {
            if let Some(key) = actual.keys().find(|k| !self.fields.contains_key(*k)) {
                return Err(MatchError::UnexpectedKey {
                    path: path.to_string(),
                    key: key.clone(),
                });
            }
        }

        for (key, expected) in &self.fields {
            let Some(actual_value) = actual.get(key) else {
                return Err(MatchError::MissingKey {
                    path: path.to_string(),
                    key: key.clone(),
                });
            };
            match_value(expected, &path.key(key), actual_value)?;
        }

        Ok(())
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, expected)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key:?}:")?;
            expected.write_nested(f)?;
        }
        f.write_str("}")
    }
}

impl_into_expected!(ObjectMatcher);
