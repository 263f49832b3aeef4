//! The chain simplifier.
//!
//! Simplification flattens the outer chain into a head operand plus
//! (operator, operand) segments, then repeatedly collapses the first
//! collapsible adjacent pair, restarting the scan from the head after
//! every collapse. Each collapse either shortens the chain or rewrites
//! a variable/variable pair into a variable/number pair that cannot
//! collapse again, so the loop terminates.

use smallvec::SmallVec;

use tally_arith::{Number, Value};

use crate::error::ExpressionError;
use crate::expression::{Expression, Operand, Operation};
use crate::operator::{Applied, Operator};

/// One link of the flattened chain: the operator joining the previous
/// operand to this one.
#[derive(Clone, Debug)]
struct Segment {
    operator: Operator,
    operand: Operand,
}

/// The flattened outer chain.
struct Chain {
    head: Operand,
    rest: SmallVec<[Segment; 4]>,
}

impl Chain {
    fn from_expression(expression: &Expression) -> Chain {
        let head = expression.value.clone();
        let mut rest = SmallVec::new();
        let mut node = expression;
        while let Some(op) = &node.operation {
            rest.push(Segment {
                operator: op.operator,
                operand: op.expression.value.clone(),
            });
            node = &op.expression;
        }
        Chain { head, rest }
    }

    fn operand(&self, index: usize) -> &Operand {
        if index == 0 {
            &self.head
        } else {
            &self.rest[index - 1].operand
        }
    }

    fn set_operand(&mut self, index: usize, operand: Operand) {
        if index == 0 {
            self.head = operand;
        } else {
            self.rest[index - 1].operand = operand;
        }
    }

    fn into_expression(self) -> Expression {
        let mut continuation: Option<Box<Operation>> = None;
        for segment in self.rest.into_iter().rev() {
            continuation = Some(Box::new(Operation::new(
                segment.operator,
                Expression { value: segment.operand, operation: continuation },
            )));
        }
        Expression { value: self.head, operation: continuation }
    }
}

/// What a collapsed pair turned into.
enum Collapsed {
    /// The pair merged into a single operand.
    Single(Operand),
    /// The pair became `variable op two`, the ladder promotion.
    Promoted { operator: Operator, two: Number },
}

/// The collapsibility gate.
///
/// Number pairs collapse under the size-preserving operators, with
/// pow/tetr restricted to non-negative right operands (a negative one
/// yields a quotient/remainder pair, not a number). Same-named
/// variable pairs collapse under the promotable operators plus the
/// sub/div identities. Everything else, nested expressions included,
/// stays put.
fn can_collapse(left: &Operand, operator: Operator, right: &Operand) -> bool {
    match (left, right) {
        (Operand::Number(_), Operand::Number(b)) => match operator {
            Operator::Add | Operator::Mul | Operator::Sub => true,
            Operator::Pow | Operator::Tetr => {
                !(b.sign().is_negative() && !b.magnitude().is_zero())
            }
            _ => false,
        },
        (Operand::Variable(a), Operand::Variable(b)) => {
            a.compare(b).is_equal()
                && matches!(
                    operator,
                    Operator::Add | Operator::Mul | Operator::Pow | Operator::Sub | Operator::Div
                )
        }
        _ => false,
    }
}

fn collapse(
    left: &Operand,
    operator: Operator,
    right: &Operand,
) -> Result<Collapsed, ExpressionError> {
    match (left, right) {
        (Operand::Number(a), Operand::Number(b)) => match operator.apply(a, b)? {
            Applied::Single(Value::Number(n)) => Ok(Collapsed::Single(Operand::Number(n))),
            _ => Err(ExpressionError::NonCollapsible),
        },
        (Operand::Variable(_), Operand::Variable(_)) => {
            if let Some(promoted) = operator.promoted() {
                // X op X is the next operator up applied to X and two
                return Ok(Collapsed::Promoted {
                    operator: promoted,
                    two: Number::one().inc(),
                });
            }
            match operator {
                Operator::Sub => Ok(Collapsed::Single(Operand::Number(Number::new()))),
                Operator::Div => Ok(Collapsed::Single(Operand::Number(Number::one()))),
                _ => Err(ExpressionError::NonCollapsible),
            }
        }
        _ => Err(ExpressionError::NonCollapsible),
    }
}

impl Expression {
    /// A copy of this chain with every collapsible adjacent pair
    /// merged, scanning from the head and restarting after each
    /// collapse. The receiver is left untouched; nested expression
    /// values are preserved verbatim.
    ///
    /// # Errors
    ///
    /// Arithmetic failures inside a collapse (a tetration tower that
    /// leaves the number line) propagate unchanged.
    pub fn simplify(&self) -> Result<Expression, ExpressionError> {
        let mut chain = Chain::from_expression(self);
        'rescan: loop {
            for index in 0..chain.rest.len() {
                let operator = chain.rest[index].operator;
                if can_collapse(chain.operand(index), operator, chain.operand(index + 1)) {
                    match collapse(chain.operand(index), operator, chain.operand(index + 1))? {
                        Collapsed::Single(operand) => {
                            chain.set_operand(index, operand);
                            chain.rest.remove(index);
                        }
                        Collapsed::Promoted { operator, two } => {
                            chain.rest[index].operator = operator;
                            chain.rest[index].operand = Operand::Number(two);
                        }
                    }
                    continue 'rescan;
                }
            }
            break;
        }
        Ok(chain.into_expression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::Variable;
    use tally_arith::Comparison;

    fn n(v: i64) -> Number {
        Number::from_i64(v)
    }

    fn x() -> Variable {
        Variable::new("X")
    }

    fn op(operator: Operator, value: impl Into<Operand>) -> Operation {
        Operation::new(operator, Expression::new(value))
    }

    #[test]
    fn a_lone_value_is_already_simple() {
        let expression = Expression::new(n(1));
        let simplified = expression.simplify().unwrap();
        assert!(simplified.value.compare(&Operand::Number(n(1))).is_equal());
        assert!(simplified.operation.is_none());
    }

    #[test]
    fn number_pairs_fold_through_the_engine() {
        let chain = Expression::new(n(3)).chain(op(Operator::Add, n(4)));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&Expression::new(n(7))).is_equal());

        let chain = Expression::new(n(3))
            .chain(op(Operator::Add, n(4)))
            .chain(op(Operator::Sub, n(2)))
            .chain(op(Operator::Mul, n(3)));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&Expression::new(n(15))).is_equal());
    }

    #[test]
    fn subtraction_can_leave_a_negative() {
        let chain = Expression::new(n(1)).chain(op(Operator::Sub, n(2)));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&Expression::new(n(-1))).is_equal());
    }

    #[test]
    fn a_lone_variable_substitutes_to_its_value() {
        let bound = Expression::new(x()).subst(&x(), &Operand::Number(n(1)));
        let simplified = bound.simplify().unwrap();
        assert!(simplified.value.compare(&Operand::Number(n(1))).is_equal());
    }

    #[test]
    fn substitute_then_simplify() {
        // X + 1 with X = 1 comes out 2
        let chain = Expression::new(x()).chain(op(Operator::Add, n(1)));
        let bound = chain.subst(&x(), &Operand::Number(n(1)));
        let simplified = bound.simplify().unwrap();
        assert!(simplified.value.compare(&Operand::Number(n(2))).is_equal());
    }

    #[test]
    fn equal_variables_promote_up_the_ladder() {
        // X + X becomes X * 2
        let chain = Expression::new(x()).chain(op(Operator::Add, x()));
        let simplified = chain.simplify().unwrap();
        let expected = Expression::new(x()).chain(op(Operator::Mul, n(2)));
        assert!(simplified.compare(&expected).is_equal());

        // X * X becomes X ^ 2, X ^ X becomes X ^^ 2
        let chain = Expression::new(x()).chain(op(Operator::Mul, x()));
        let expected = Expression::new(x()).chain(op(Operator::Pow, n(2)));
        assert!(chain.simplify().unwrap().compare(&expected).is_equal());

        let chain = Expression::new(x()).chain(op(Operator::Pow, x()));
        let expected = Expression::new(x()).chain(op(Operator::Tetr, n(2)));
        assert!(chain.simplify().unwrap().compare(&expected).is_equal());
    }

    #[test]
    fn promoted_pairs_keep_collapsing_rightward() {
        // X + X * 3 promotes to X * 2 * 3 and folds to X * 6
        let chain = Expression::new(x())
            .chain(op(Operator::Add, x()))
            .chain(op(Operator::Mul, n(3)));
        let simplified = chain.simplify().unwrap();
        let expected = Expression::new(x()).chain(op(Operator::Mul, n(6)));
        assert!(simplified.compare(&expected).is_equal());
    }

    #[test]
    fn variable_identities() {
        // X - X is zero
        let chain = Expression::new(x()).chain(op(Operator::Sub, x()));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&Expression::new(n(0))).is_equal());

        // X / X is one
        let chain = Expression::new(x()).chain(op(Operator::Div, x()));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&Expression::new(n(1))).is_equal());
    }

    #[test]
    fn different_variables_never_collapse() {
        let chain = Expression::new(x()).chain(op(Operator::Add, Variable::new("Y")));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&chain).is_equal());
    }

    #[test]
    fn tetration_of_variables_stays_symbolic() {
        // tetr is not in the variable collapse set
        let chain = Expression::new(x()).chain(op(Operator::Tetr, x()));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&chain).is_equal());
    }

    #[test]
    fn variables_and_numbers_never_collapse() {
        let chain = Expression::new(x()).chain(op(Operator::Add, n(1)));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&chain).is_equal());
    }

    #[test]
    fn division_of_numbers_stays_symbolic() {
        // a quotient/remainder pair is not a chain value
        let chain = Expression::new(n(8)).chain(op(Operator::Div, n(3)));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&chain).is_equal());
    }

    #[test]
    fn negative_exponents_stay_symbolic() {
        let chain = Expression::new(n(2)).chain(op(Operator::Pow, n(-3)));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&chain).is_equal());
    }

    #[test]
    fn nested_expressions_are_opaque() {
        let inner = Expression::new(n(1)).chain(op(Operator::Add, n(2)));
        let chain = Expression::new(inner).chain(op(Operator::Mul, n(3)));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&chain).is_equal());
    }

    #[test]
    fn simplify_leaves_the_receiver_untouched() {
        let chain = Expression::new(x()).chain(op(Operator::Add, x()));
        let snapshot = chain.clone();
        let simplified = chain.simplify().unwrap();
        assert!(chain.compare(&snapshot).is_equal());
        assert_eq!(chain.compare(&simplified), Comparison::NotEqual);
    }

    #[test]
    fn full_substitution_pipeline() {
        // X + X simplifies to X * 2; with X = 1 that folds to 2
        let chain = Expression::new(x()).chain(op(Operator::Add, x()));
        let simplified = chain.simplify().unwrap();
        let bound = simplified.subst(&x(), &Operand::Number(n(1)));
        let folded = bound.simplify().unwrap();
        assert!(folded.value.compare(&Operand::Number(n(2))).is_equal());
        assert!(folded.operation.is_none());
    }

    #[test]
    fn tetration_of_numbers_collapses() {
        let chain = Expression::new(n(2)).chain(op(Operator::Tetr, n(3)));
        let simplified = chain.simplify().unwrap();
        assert!(simplified.compare(&Expression::new(n(16))).is_equal());
    }
}
