//! Location tracking for mismatch reports.
//!
//! A `Path` renders as `$`, `$.key`, `$[index]` composed left to right and
//! also carries how deep the walk currently is, so the engine can refuse to
//! recurse past a configured limit.

use std::fmt;

const ROOT: &str = "$";
const PROBE: &str = "probe";

/// Immutable position inside a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    rendered: String,
    depth: usize,
    limit: usize,
}

impl Path {
    /// The document root, with the given nesting limit.
    pub fn root(limit: usize) -> Self {
        Self {
            rendered: ROOT.to_string(),
            depth: 0,
            limit,
        }
    }

    /// Descend into an object member.
    pub fn key(&self, key: &str) -> Self {
        self.child(format!("{}.{key}", self.rendered))
    }

    /// Descend into an array element.
    pub fn index(&self, index: usize) -> Self {
        self.child(format!("{}[{index}]", self.rendered))
    }

    /// A throwaway location for trial matches whose failures are never reported.
    ///
    /// Depth and limit are preserved so probing stays bounded.
    pub fn probe(&self) -> Self {
        Self {
            rendered: PROBE.to_string(),
            depth: self.depth,
            limit: self.limit,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_too_deep(&self) -> bool {
        self.depth > self.limit
    }

    fn child(&self, rendered: String) -> Self {
        Self {
            rendered,
            depth: self.depth + 1,
            limit: self.limit,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}
