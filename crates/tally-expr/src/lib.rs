//! # tally-expr
//!
//! Symbolic expression chains over tally numbers.
//!
//! An [`Expression`] is a value (a number, a named [`Variable`], or a
//! nested expression) followed by an optional [`Operation`]: an
//! [`Operator`] paired with the rest of the chain. Chains represent
//! left-associated runs such as `X + 1 * 2`.
//!
//! Variables are rewritten to concrete values with
//! [`Expression::subst`]; [`Expression::simplify`] repeatedly
//! collapses adjacent compatible terms through the arithmetic engine
//! until nothing further collapses. Both work on a private deep copy
//! and return the new chain; the receiver is never mutated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod expression;
pub mod operator;
pub mod simplify;
pub mod variable;

pub use error::ExpressionError;
pub use expression::{Expression, Operand, Operation};
pub use operator::{Applied, Operator};
pub use variable::Variable;
