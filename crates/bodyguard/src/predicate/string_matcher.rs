//! String format predicates.
//!
//! Every variant first requires the value to be a string, then applies its
//! format check to the raw string.

use super::matcher::{impl_into_expected, require_str, Matcher};
use crate::error::{MatchError, MatchResult};
use crate::path::Path;
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID pattern is valid")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").expect("email pattern is valid")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("URL pattern is valid")
});

/// Caller-supplied string validator.
pub type FormatCheck = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Compiled string format matcher.
#[derive(Clone)]
pub enum StringMatcher {
    Uuid,
    Email,
    Url,
    /// Regex match; a pattern that failed to compile is reported on first use
    Matches {
        pattern: String,
        regex: Result<Arc<Regex>, regex::Error>,
    },
    /// Byte length within `[min, max]`
    Length { min: usize, max: usize },
    OneOf(Vec<String>),
    Format(FormatCheck),
}

impl StringMatcher {
    /// Compile a regex matcher. Never fails; see [`StringMatcher::Matches`].
    pub fn matches(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let regex = Regex::new(&pattern).map(Arc::new);
        StringMatcher::Matches { pattern, regex }
    }

    /// Apply the format check to an already-extracted string.
    fn check_str(&self, path: &Path, s: &str) -> MatchResult {
        match self {
            StringMatcher::Uuid => {
                if !UUID_REGEX.is_match(s) {
                    return Err(MatchError::mismatch(path, format!("expected UUID, got {s:?}")));
                }
            }
            StringMatcher::Email => {
                if !EMAIL_REGEX.is_match(s) {
                    return Err(MatchError::mismatch(path, format!("expected email, got {s:?}")));
                }
            }
            StringMatcher::Url => {
                if !URL_REGEX.is_match(s) {
                    return Err(MatchError::mismatch(
                        path,
                        format!("expected valid URL, got {s:?}"),
                    ));
                }
            }
            StringMatcher::Matches { pattern, regex } => {
                let regex = regex.as_ref().map_err(|e| {
                    MatchError::invalid_config(
                        path,
                        format!("invalid regexp pattern {pattern:?}: {e}"),
                    )
                })?;
                if !regex.is_match(s) {
                    return Err(MatchError::mismatch(
                        path,
                        format!("expected to match {pattern:?}, got {s:?}"),
                    ));
                }
            }
            StringMatcher::Length { min, max } => {
                let length = s.len();
                if length < *min || length > *max {
                    return Err(MatchError::mismatch(
                        path,
                        format!("expected string length between {min} and {max}, got {length}"),
                    ));
                }
            }
            StringMatcher::OneOf(options) => {
                if !options.iter().any(|opt| opt == s) {
                    return Err(MatchError::mismatch(
                        path,
                        format!("expected one of {options:?}, got {s:?}"),
                    ));
                }
            }
            StringMatcher::Format(check) => {
                check(s).map_err(|message| MatchError::mismatch(path, message))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for StringMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringMatcher::Uuid => f.write_str("Uuid"),
            StringMatcher::Email => f.write_str("Email"),
            StringMatcher::Url => f.write_str("Url"),
            StringMatcher::Matches { pattern, .. } => {
                f.debug_tuple("Matches").field(pattern).finish()
            }
            StringMatcher::Length { min, max } => f
                .debug_struct("Length")
                .field("min", min)
                .field("max", max)
                .finish(),
            StringMatcher::OneOf(options) => f.debug_tuple("OneOf").field(options).finish(),
            StringMatcher::Format(_) => f.write_str("Format"),
        }
    }
}

impl Matcher for StringMatcher {
    fn check(&self, path: &Path, value: &Value) -> MatchResult {
        let s = require_str(path, value, "string")?;
        self.check_str(path, s)
    }
}

impl_into_expected!(StringMatcher);

#[cfg(test)]
mod tests {
    use super::*;

    fn check(matcher: &StringMatcher, value: Value) -> MatchResult {
        matcher.check(&Path::root(8), &value)
    }

    fn string(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn test_requires_string() {
        for matcher in [StringMatcher::Uuid, StringMatcher::Email, StringMatcher::Url] {
            let err = check(&matcher, Value::Number(1.0)).unwrap_err();
            assert_eq!(err.to_string(), "at $: expected string, got number");
        }
    }

    #[test]
    fn test_uuid() {
        let m = StringMatcher::Uuid;
        assert!(check(&m, string("550e8400-e29b-41d4-a716-446655440000")).is_ok());
        assert!(check(&m, string("550E8400-E29B-41D4-A716-446655440000")).is_ok());
        let err = check(&m, string("not-a-uuid")).unwrap_err();
        assert_eq!(err.to_string(), r#"at $: expected UUID, got "not-a-uuid""#);
        assert!(check(&m, string("550e8400e29b41d4a716446655440000")).is_err());
    }

    #[test]
    fn test_email() {
        let m = StringMatcher::Email;
        assert!(check(&m, string("test@example.com")).is_ok());
        assert!(check(&m, string("first.last+tag@mail.example.org")).is_ok());
        let err = check(&m, string("invalid-email")).unwrap_err();
        assert_eq!(err.to_string(), r#"at $: expected email, got "invalid-email""#);
        // Permissive, not RFC 5322: uppercase local parts and long TLDs are rejected
        assert!(check(&m, string("Test@example.com")).is_err());
        assert!(check(&m, string("test@example.museum")).is_err());
    }

    #[test]
    fn test_regex() {
        let m = StringMatcher::matches(r"^[a-z]{3}-[0-9]{3}$");
        assert!(check(&m, string("abc-123")).is_ok());
        let err = check(&m, string("abcd-123")).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"at $: expected to match "^[a-z]{3}-[0-9]{3}$", got "abcd-123""#
        );
    }

    #[test]
    fn test_invalid_regex_is_reported_lazily() {
        let m = StringMatcher::matches("([a-z");
        let err = check(&m, string("abc")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
        assert!(err
            .to_string()
            .starts_with(r#"at $: invalid regexp pattern "([a-z": "#));
    }

    #[test]
    fn test_length() {
        let m = StringMatcher::Length { min: 3, max: 10 };
        assert!(check(&m, string("hello")).is_ok());
        assert!(check(&m, string("abc")).is_ok());
        assert!(check(&m, string("abcdefghij")).is_ok());
        let err = check(&m, string("hi")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "at $: expected string length between 3 and 10, got 2"
        );
        assert!(check(&m, string("abcdefghijk")).is_err());
    }

    #[test]
    fn test_url() {
        let m = StringMatcher::Url;
        assert!(check(&m, string("https://example.com")).is_ok());
        assert!(check(&m, string("http://example.com/path?q=1")).is_ok());
        let err = check(&m, string("not-a-url")).unwrap_err();
        assert_eq!(err.to_string(), r#"at $: expected valid URL, got "not-a-url""#);
        assert!(check(&m, string("ftp://example.com")).is_err());
        assert!(check(&m, string("https://.example.com")).is_err());
    }

    #[test]
    fn test_one_of() {
        let m = StringMatcher::OneOf(vec![
            "apple".to_string(),
            "banana".to_string(),
            "cherry".to_string(),
        ]);
        assert!(check(&m, string("apple")).is_ok());
        let err = check(&m, string("pear")).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"at $: expected one of ["apple", "banana", "cherry"], got "pear""#
        );
    }

    #[test]
    fn test_custom_format() {
        let m = StringMatcher::Format(Arc::new(|s: &str| {
            if s == "FOO" {
                Ok(())
            } else {
                Err("expected FOO".to_string())
            }
        }));
        assert!(check(&m, string("FOO")).is_ok());
        let err = check(&m, string("BAR")).unwrap_err();
        assert_eq!(err.to_string(), "at $: expected FOO");
    }
}
