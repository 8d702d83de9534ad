// ABOUTME: Error types for the fallible utility operations.
// ABOUTME: Provides SolverError with InvalidPattern and Selector variants.

use std::fmt;
use thiserror::Error;

/// Errors surfaced by the few operations that can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The regular expression did not compile.
    #[error("invalid regular expression: {0}")]
    InvalidPattern(String),

    /// The CSS selector used to scope class enumeration did not parse.
    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
}

impl SolverError {
    /// Creates an InvalidPattern error from an underlying regex error.
    pub fn pattern(err: impl fmt::Display) -> Self {
        SolverError::InvalidPattern(err.to_string())
    }

    /// Creates a Selector error for the given selector text.
    pub fn selector(selector: impl Into<String>, reason: impl fmt::Display) -> Self {
        SolverError::Selector {
            selector: selector.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if this is an InvalidPattern error.
    pub fn is_pattern(&self) -> bool {
        matches!(self, SolverError::InvalidPattern(_))
    }

    /// Returns true if this is a Selector error.
    pub fn is_selector(&self) -> bool {
        matches!(self, SolverError::Selector { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SolverError::pattern("unclosed character class");
        assert_eq!(
            err.to_string(),
            "invalid regular expression: unclosed character class"
        );
        assert!(err.is_pattern());

        let err = SolverError::selector("div[", "unexpected end");
        assert_eq!(err.to_string(), "invalid selector \"div[\": unexpected end");
        assert!(err.is_selector());
    }
}
