// Error taxonomy for the transform core
// The core does no I/O, so every failure here is a pure computation failure

use thiserror::Error;

/// Failures reported by the text transformer
#[derive(Debug, Error)]
pub enum TransformError {
    /// A closing brace arrived while no brace span was open.
    /// Positions refer to the text seen by the sentence splitter.
    #[error("unbalanced closing brace at line {line}, column {column} (char offset {offset})")]
    UnbalancedBrace {
        /// 0-based character offset of the offending `}`
        offset: usize,
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
    },

    /// The sentence break pattern could not be compiled
    #[error("failed to compile sentence break pattern: {0}")]
    Pattern(#[from] regex_automata::meta::BuildError),
}

impl TransformError {
    /// Short name of the failure kind, used in diagnostics and run stats
    pub fn kind(&self) -> &'static str {
        match self {
            TransformError::UnbalancedBrace { .. } => "unbalanced_brace",
            TransformError::Pattern(_) => "pattern",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbalanced_brace_message() {
        let err = TransformError::UnbalancedBrace { offset: 3, line: 1, column: 4 };
        assert_eq!(
            err.to_string(),
            "unbalanced closing brace at line 1, column 4 (char offset 3)"
        );
        assert_eq!(err.kind(), "unbalanced_brace");
    }

    #[test]
    fn test_pattern_error_kind() {
        let build_err = regex_automata::meta::Regex::new("(").unwrap_err();
        let err = TransformError::from(build_err);
        assert_eq!(err.kind(), "pattern");
        assert!(err.to_string().starts_with("failed to compile sentence break pattern"));
    }
}
