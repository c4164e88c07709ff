//! Assertion failures.

use crate::path::Path;

/// Outcome of a single match.
pub type MatchResult = Result<(), MatchError>;

/// Broad classification of a [`MatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The body was not valid JSON.
    Decode,
    /// The actual value has the wrong runtime kind.
    Type,
    /// Container shape disagrees (length, keys, unmatched elements).
    Structure,
    /// Compatible kinds but different values.
    Value,
    /// A predicate was built with bad parameters.
    Config,
    /// The walk exceeded the nesting limit.
    Depth,
}

/// The first mismatch found while checking a document.
///
/// The `Display` form is a single line starting with the location,
/// e.g. `at $.address.zip: expected string, got number`.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("invalid json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("at {path}: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("at {path}: expected {expected} ({expected_kind}), got {actual} ({actual_kind})")]
    LiteralMismatch {
        path: String,
        expected: String,
        expected_kind: &'static str,
        actual: String,
        actual_kind: &'static str,
    },

    #[error("at {path}: missing key {key:?}")]
    MissingKey { path: String, key: String },

    #[error("at {path}: unexpected key {key:?}")]
    UnexpectedKey { path: String, key: String },

    #[error("at {path}: expected array length {expected}, got {actual}")]
    LengthMismatch {
        path: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "at {path}: expected element {element} (index {index}) not found in remaining actual elements"
    )]
    ElementNotFound {
        path: String,
        element: String,
        index: usize,
    },

    #[error("at {path}: {message}")]
    Mismatch { path: String, message: String },

    #[error("at {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("at {path}: nesting exceeds maximum depth of {limit}")]
    DepthExceeded { path: String, limit: usize },
}

impl MatchError {
    /// Value mismatch with a free-form description.
    pub fn mismatch(path: &Path, message: impl Into<String>) -> Self {
        MatchError::Mismatch {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub fn type_mismatch(path: &Path, expected: &'static str, actual: &'static str) -> Self {
        MatchError::TypeMismatch {
            path: path.to_string(),
            expected,
            actual,
        }
    }

    pub fn invalid_config(path: &Path, message: impl Into<String>) -> Self {
        MatchError::InvalidConfig {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::Decode(_) => ErrorKind::Decode,
            MatchError::TypeMismatch { .. } => ErrorKind::Type,
            MatchError::MissingKey { .. }
            | MatchError::UnexpectedKey { .. }
            | MatchError::LengthMismatch { .. }
            | MatchError::ElementNotFound { .. } => ErrorKind::Structure,
            MatchError::LiteralMismatch { .. } | MatchError::Mismatch { .. } => ErrorKind::Value,
            MatchError::InvalidConfig { .. } => ErrorKind::Config,
            MatchError::DepthExceeded { .. } => ErrorKind::Depth,
        }
    }

    /// Location of the failure, if it happened inside the document.
    pub fn path(&self) -> Option<&str> {
        match self {
            MatchError::Decode(_) => None,
            MatchError::TypeMismatch { path, .. }
            | MatchError::LiteralMismatch { path, .. }
            | MatchError::MissingKey { path, .. }
            | MatchError::UnexpectedKey { path, .. }
            | MatchError::LengthMismatch { path, .. }
            | MatchError::ElementNotFound { path, .. }
            | MatchError::Mismatch { path, .. }
            | MatchError::InvalidConfig { path, .. }
            | MatchError::DepthExceeded { path, .. } => Some(path),
        }
    }
}
