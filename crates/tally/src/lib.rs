//! # Tally
//!
//! Arbitrary-precision integer arithmetic over a unary (tally)
//! representation, extended through the hyperoperation ladder, with a
//! symbolic expression layer on top.
//!
//! The engine builds every operation out of the one below it:
//! increment, addition, multiplication, exponentiation, tetration,
//! and unwinds the same ladders for the inverses. The expression layer
//! chains operations over numbers and named variables, substitutes
//! variables, and algebraically collapses adjacent compatible terms.
//!
//! Deliberately O(N)-per-operation: the unary representation is the
//! point of the exercise, not a bug.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let two = Number::from_i64(2);
//! let three = Number::from_i64(3);
//! assert!(two.add(&three).compare(&Number::from_i64(5)).is_equal());
//!
//! // X + X simplifies to X * 2
//! let x = Variable::new("X");
//! let chain = Expression::new(x.clone())
//!     .chain(Operation::new(Operator::Add, Expression::new(x.clone())));
//! let simplified = chain.simplify().unwrap();
//! let expected = Expression::new(x)
//!     .chain(Operation::new(Operator::Mul, Expression::new(Number::from_i64(2))));
//! assert!(simplified.compare(&expected).is_equal());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tally_arith as arith;
pub use tally_expr as expr;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tally_arith::{
        ArithmeticError, Comparison, Constants, Division, Logarithm, Magnitude, Number, Power,
        Sign, Special, SuperLogarithm, Value,
    };
    pub use tally_expr::{
        Applied, Expression, ExpressionError, Operand, Operation, Operator, Variable,
    };
}
