// ABOUTME: Validation of user-supplied regular expressions.
// ABOUTME: Compiles a pattern and reports failure as a value instead of panicking.

use regex::Regex;
use tracing::debug;

use crate::error::SolverError;

/// Compiles `pattern`, keeping the compiler's message on failure.
pub fn compile(pattern: &str) -> Result<Regex, SolverError> {
    Regex::new(pattern).map_err(SolverError::pattern)
}

/// Returns a usable regex if `pattern` is valid, `None` if not.
pub fn valid(pattern: &str) -> Option<Regex> {
    match compile(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            debug!(pattern, error = %err, "rejected pattern");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pattern_matches() {
        let re = valid("^[a-z]+$").expect("pattern should compile");
        assert!(re.is_match("abc"));
        assert!(!re.is_match("ABC"));
    }

    #[test]
    fn test_invalid_pattern_is_none() {
        assert!(valid("[invalid").is_none());
        assert!(valid("(unclosed").is_none());
    }

    #[test]
    fn test_compile_keeps_message() {
        let err = compile("[invalid").unwrap_err();
        assert!(err.is_pattern());
        assert!(err.to_string().starts_with("invalid regular expression"));
    }

    #[test]
    fn test_empty_pattern_is_valid() {
        assert!(valid("").is_some_and(|re| re.is_match("anything")));
    }
}
