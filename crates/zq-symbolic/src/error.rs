//! Error types for expression translation.

use thiserror::Error;

/// Errors that can occur while moving expressions between dialects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExprError {
    /// A native expression kind has no counterpart in the neutral tree.
    #[error("Expression {value} of kind {kind} cannot be converted to a neutral expression")]
    UnsupportedExpressionKind {
        /// Rendered native expression.
        value: String,
        /// Native kind name.
        kind: String,
    },

    /// The target dialect has no native form for a neutral function.
    #[error("Operator '{name}' is not supported by the {dialect} dialect")]
    UnsupportedOperator {
        /// Neutral function name.
        name: String,
        /// Target dialect name.
        dialect: String,
    },

    /// A function call has the wrong number of arguments.
    #[error("Function '{name}' expects {expected} arguments, got {got}")]
    ArityMismatch {
        /// Neutral function name.
        name: String,
        /// Accepted argument count.
        expected: String,
        /// Number of arguments supplied.
        got: usize,
    },
}

/// Result type for expression operations.
pub type ExprResult<T> = Result<T, ExprError>;
