//! Operator tags and their dispatch into the arithmetic engine.

use std::fmt;

use tally_arith::{ArithmeticError, Number, Power, Value};

/// The ten operator tags: the hyperoperation ladder and its inverses.
///
/// Each tag is bound to the corresponding [`Number`] method through
/// [`Operator::apply`]; the binding is a match expression, not a
/// runtime table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Successor.
    Inc,
    /// Addition.
    Add,
    /// Multiplication.
    Mul,
    /// Exponentiation.
    Pow,
    /// Tetration.
    Tetr,
    /// Predecessor.
    Dec,
    /// Subtraction.
    Sub,
    /// Division, yielding quotient and remainder.
    Div,
    /// Integer logarithm.
    Log,
    /// Super-logarithm, the inverse of tetration by height.
    SuperLog,
}

/// What applying an operator produced.
///
/// The ladder operators yield a single value; the inverses, and
/// pow/tetr with a negative right operand, yield a value plus a
/// remainder.
#[derive(Clone, Debug, PartialEq)]
pub enum Applied {
    /// A single result.
    Single(Value),
    /// A principal result with leftover units.
    WithRemainder {
        /// The principal result.
        value: Value,
        /// The leftover.
        remainder: Number,
    },
}

impl Operator {
    /// The display glyph used by the standard rendering.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Inc => "++",
            Operator::Add => "+",
            Operator::Mul => "*",
            Operator::Pow => "^",
            Operator::Tetr => "^^",
            Operator::Dec => "--",
            Operator::Sub => "-",
            Operator::Div => "/",
            Operator::Log => "log",
            Operator::SuperLog => "slog",
        }
    }

    /// The next rung up the hyperoperation ladder, where one exists.
    ///
    /// Applying an operator to two equal operands equals the next
    /// operator applied to one operand and two; this drives the
    /// variable-collapse rules.
    #[must_use]
    pub fn promoted(self) -> Option<Operator> {
        match self {
            Operator::Add => Some(Operator::Mul),
            Operator::Mul => Some(Operator::Pow),
            Operator::Pow => Some(Operator::Tetr),
            _ => None,
        }
    }

    /// Dispatches to the bound engine operation.
    ///
    /// The unary operators (`Inc`, `Dec`) ignore `operand`.
    ///
    /// # Errors
    ///
    /// Engine failures propagate unchanged.
    pub fn apply(self, number: &Number, operand: &Number) -> Result<Applied, ArithmeticError> {
        match self {
            Operator::Inc => Ok(Applied::Single(Value::Number(number.inc()))),
            Operator::Dec => Ok(Applied::Single(Value::Number(number.dec()))),
            Operator::Add => Ok(Applied::Single(Value::Number(number.add(operand)))),
            Operator::Sub => Ok(Applied::Single(Value::Number(number.sub(operand)))),
            Operator::Mul => Ok(Applied::Single(Value::Number(number.mul(operand)))),
            Operator::Pow => Ok(power_applied(number.pow(operand)?)),
            Operator::Tetr => Ok(power_applied(number.tetr(operand)?)),
            Operator::Div => {
                let division = number.div(operand)?;
                Ok(Applied::WithRemainder {
                    value: Value::Number(division.quotient),
                    remainder: division.remainder,
                })
            }
            Operator::Log => {
                let log = number.log(operand)?;
                Ok(Applied::WithRemainder { value: log.exponent, remainder: log.remainder })
            }
            Operator::SuperLog => {
                let superlog = number.superlog(operand)?;
                Ok(Applied::WithRemainder {
                    value: superlog.height,
                    remainder: superlog.remainder,
                })
            }
        }
    }
}

fn power_applied(power: Power) -> Applied {
    match power {
        Power::Whole(n) => Applied::Single(Value::Number(n)),
        Power::Reciprocal(division) => Applied::WithRemainder {
            value: Value::Number(division.quotient),
            remainder: division.remainder,
        },
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
