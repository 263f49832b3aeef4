//! # tally-arith
//!
//! Signed integer arithmetic over a unary (tally) representation.
//!
//! A [`Number`] is a [`Magnitude`] (an ordered tally of unit tokens)
//! paired with a [`Sign`]. The hyperoperation ladder (increment,
//! addition, multiplication, exponentiation, tetration) and its
//! inverses (decrement, subtraction, division, logarithm,
//! super-logarithm) are layered each on the one below, Peano style.
//!
//! ## Design notes
//!
//! - Values are immutable; every operation returns a new `Number`.
//! - The representation is intentionally unary: a value of N occupies
//!   O(N) space, and the iteration depth of `div`, `log`, `superlog`
//!   and `tetr` scales with operand magnitude. That cost profile is
//!   the system under study, not an accident, and the engine never
//!   falls back to positional digits.
//! - Negative zero is a legal, observable value: the sign of a
//!   zero-magnitude result is still computed from the operands.
//! - Degenerate logarithm cases whose solution set is a whole family
//!   ("any even value") return a [`Special`] sentinel instead of a
//!   number.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod consts;
pub mod error;
pub mod magnitude;
pub mod number;
pub mod sign;
pub mod special;
pub mod value;

#[cfg(test)]
mod proptests;

pub use compare::Comparison;
pub use consts::Constants;
pub use error::ArithmeticError;
pub use magnitude::Magnitude;
pub use number::{Division, Logarithm, Number, Power, SuperLogarithm};
pub use sign::Sign;
pub use special::Special;
pub use value::Value;
