//! Sentinel results for degenerate logarithms.

use crate::compare::Comparison;

/// A non-numeric stand-in for "any value satisfying a degenerate
/// equation".
///
/// `log` and `superlog` return these when the solution set is a whole
/// family rather than a single number; `log` base one of one, for
/// instance, is solved by every exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Special {
    /// Every value solves the equation.
    Any,
    /// Every even value.
    AnyEven,
    /// Every odd value.
    AnyOdd,
    /// Every positive even nonzero value.
    PositiveEvenNonzero,
}

impl Special {
    /// Sentinels compare equal only to the identical kind.
    #[must_use]
    pub fn compare(&self, other: &Special) -> Comparison {
        if self == other {
            Comparison::Equal
        } else {
            Comparison::NotEqual
        }
    }
}
