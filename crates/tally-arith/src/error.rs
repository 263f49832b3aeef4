//! Failure conditions of the arithmetic engine.

use thiserror::Error;

/// Errors raised synchronously by engine operations.
///
/// A failed call aborts only itself. Every value is immutable, so
/// previously constructed numbers remain valid and reusable after a
/// failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division, or a logarithm that divides, by a zero-magnitude
    /// denominator, whatever its sign.
    #[error("division by zero")]
    DivisionByZero,

    /// A log/superlog combination with no real solution.
    #[error("undefined: {0}")]
    Undefined(String),

    /// The correct answer exists only in the complex domain, which the
    /// engine does not model.
    #[error("complex number required, unimplemented")]
    ComplexRequired,
}
