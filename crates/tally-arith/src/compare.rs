//! Comparison results.

/// Outcome of comparing two values.
///
/// Numbers order against each other with `Less`/`Equal`/`Greater`.
/// Comparing values of different kinds (a number against a
/// [`Special`](crate::Special) sentinel, or two sentinels of different
/// kind) yields `NotEqual`, a "no common order" outcome that is not a
/// point on the ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// Strictly below.
    Less,
    /// The same value.
    Equal,
    /// Strictly above.
    Greater,
    /// Different kinds, or sentinels of different kinds.
    NotEqual,
}

impl Comparison {
    /// Returns true for [`Comparison::Equal`].
    #[must_use]
    pub fn is_equal(self) -> bool {
        matches!(self, Comparison::Equal)
    }
}
