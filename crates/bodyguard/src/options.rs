//! Options for top-level checks.

/// Default nesting limit, matching serde_json's own parse recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for [`crate::check_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertOptions {
    /// Deepest path the engine will descend into before failing.
    pub max_depth: usize,
}

impl Default for AssertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AssertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
