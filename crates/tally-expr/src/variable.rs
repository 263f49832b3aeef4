//! Named symbolic placeholders.

use std::fmt;

use tally_arith::Comparison;

/// A named placeholder, comparable by symbol only.
///
/// A variable owns no value; substitution rewrites it away.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    symbol: String,
}

impl Variable {
    /// A variable named `symbol`.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }

    /// The symbol this variable goes by.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Symbol equality.
    #[must_use]
    pub fn compare(&self, other: &Variable) -> Comparison {
        if self.symbol == other.symbol {
            Comparison::Equal
        } else {
            Comparison::NotEqual
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
