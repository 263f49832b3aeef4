//! Expression chains: values linked by operations.

use std::fmt;

use tally_arith::{Comparison, Number};

use crate::operator::Operator;
use crate::variable::Variable;

/// The value slot of an expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// A concrete number.
    Number(Number),
    /// A named placeholder.
    Variable(Variable),
    /// A nested sub-chain, walked separately from the outer chain.
    Expression(Box<Expression>),
}

impl Operand {
    /// Structural comparison; mismatched kinds are `NotEqual`.
    #[must_use]
    pub fn compare(&self, other: &Operand) -> Comparison {
        match (self, other) {
            (Operand::Number(a), Operand::Number(b)) => match a.compare(b) {
                Comparison::Equal => Comparison::Equal,
                _ => Comparison::NotEqual,
            },
            (Operand::Variable(a), Operand::Variable(b)) => a.compare(b),
            (Operand::Expression(a), Operand::Expression(b)) => a.compare(b),
            _ => Comparison::NotEqual,
        }
    }
}

impl From<Number> for Operand {
    fn from(number: Number) -> Self {
        Operand::Number(number)
    }
}

impl From<Variable> for Operand {
    fn from(variable: Variable) -> Self {
        Operand::Variable(variable)
    }
}

impl From<Expression> for Operand {
    fn from(expression: Expression) -> Self {
        Operand::Expression(Box::new(expression))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Variable(v) => write!(f, "{v}"),
            Operand::Expression(e) => write!(f, "({e})"),
        }
    }
}

/// An operator applied to the rest of the chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    /// Which operation to apply.
    pub operator: Operator,
    /// The right-hand side: the continuation of the chain.
    pub expression: Expression,
}

impl Operation {
    /// Pairs an operator with its right-hand expression.
    #[must_use]
    pub fn new(operator: Operator, expression: Expression) -> Self {
        Self { operator, expression }
    }

    /// Operators must match by tag and right-hand chains must compare
    /// equal.
    #[must_use]
    pub fn compare(&self, other: &Operation) -> Comparison {
        if self.operator != other.operator {
            return Comparison::NotEqual;
        }
        match self.expression.compare(&other.expression) {
            Comparison::Equal => Comparison::Equal,
            _ => Comparison::NotEqual,
        }
    }
}

/// A singly linked chain: a value joined to the rest of the chain by
/// an operation.
///
/// Each node exclusively owns its operation, which exclusively owns
/// the next node. The chain is a tree-shaped value, never a shared
/// graph, so there are no aliasing concerns anywhere in the layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    /// This node's value.
    pub value: Operand,
    /// The rest of the chain, if any.
    pub operation: Option<Box<Operation>>,
}

impl Expression {
    /// A single-node chain holding `value`.
    #[must_use]
    pub fn new(value: impl Into<Operand>) -> Self {
        Self { value: value.into(), operation: None }
    }

    /// A chain with an explicit continuation.
    #[must_use]
    pub fn with_operation(value: impl Into<Operand>, operation: Operation) -> Self {
        Self { value: value.into(), operation: Some(Box::new(operation)) }
    }

    /// The last node of the chain; walks the whole chain.
    #[must_use]
    pub fn tail(&self) -> &Expression {
        let mut node = self;
        while let Some(op) = &node.operation {
            node = &op.expression;
        }
        node
    }

    /// A copy of this chain with `operation` appended at the tail.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn chain(&self, operation: Operation) -> Expression {
        match &self.operation {
            None => Expression {
                value: self.value.clone(),
                operation: Some(Box::new(operation)),
            },
            Some(op) => Expression {
                value: self.value.clone(),
                operation: Some(Box::new(Operation::new(
                    op.operator,
                    op.expression.chain(operation),
                ))),
            },
        }
    }

    /// A copy of this chain with every variable matching `variable`
    /// replaced by `replacement`, recursing into nested values and
    /// down the chain.
    ///
    /// Numbers and other-named variables pass through untouched, as
    /// does the receiver itself.
    #[must_use]
    pub fn subst(&self, variable: &Variable, replacement: &Operand) -> Expression {
        let value = match &self.value {
            Operand::Variable(v) if v.compare(variable).is_equal() => replacement.clone(),
            Operand::Expression(inner) => {
                Operand::Expression(Box::new(inner.subst(variable, replacement)))
            }
            other => other.clone(),
        };
        let operation = self.operation.as_ref().map(|op| {
            Box::new(Operation::new(op.operator, op.expression.subst(variable, replacement)))
        });
        Expression { value, operation }
    }

    /// Structural equality, node for node down the chain.
    ///
    /// Operand kinds, values, operators and chain lengths must all
    /// match; a missing operation on one side makes the chains
    /// `NotEqual`.
    #[must_use]
    pub fn compare(&self, other: &Expression) -> Comparison {
        if !self.value.compare(&other.value).is_equal() {
            return Comparison::NotEqual;
        }
        match (&self.operation, &other.operation) {
            (None, None) => Comparison::Equal,
            (Some(a), Some(b)) => a.compare(b),
            _ => Comparison::NotEqual,
        }
    }
}

impl From<Number> for Expression {
    fn from(number: Number) -> Self {
        Expression::new(number)
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Expression::new(variable)
    }
}

impl fmt::Display for Expression {
    /// The standard rendering: infix glyphs, parenthesizing the right
    /// operand whenever it chains further. Cosmetic only, not a
    /// parseable format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if let Some(op) = &self.operation {
            write!(f, " {} ", op.operator)?;
            if op.expression.operation.is_some() {
                write!(f, "({})", op.expression)?;
            } else {
                write!(f, "{}", op.expression)?;
            }
        }
        Ok(())
    }
}
