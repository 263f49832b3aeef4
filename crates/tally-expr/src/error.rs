//! Failure conditions of the symbolic layer.

use thiserror::Error;

use tally_arith::ArithmeticError;

/// Errors raised while manipulating expression chains.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExpressionError {
    /// An engine operation failed while collapsing numeric terms.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Collapse was asked to merge a pair the collapsibility gate
    /// rejects.
    #[error("collapse called on non-collapsable elements")]
    NonCollapsible,
}
