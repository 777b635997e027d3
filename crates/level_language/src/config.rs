//! Parser limits.

/// Configuration for a single parse.
///
/// Controls how deep scripts may nest and how many diagnostics are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of statements and expressions. Deeper input is
    /// rejected with a `NestingTooDeep` diagnostic instead of exhausting the
    /// call stack.
    pub max_depth: usize,

    /// Maximum number of diagnostics retained. Later ones are dropped.
    pub max_diagnostics: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_diagnostics: 100,
        }
    }
}

impl ParserConfig {
    /// Builder method to set the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder method to set the diagnostic cap.
    #[must_use]
    pub fn with_max_diagnostics(mut self, count: usize) -> Self {
        self.max_diagnostics = count;
        self
    }
}
