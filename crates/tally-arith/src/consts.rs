//! Predefined small constants.

use crate::number::Number;
use crate::special::Special;

/// Named constants zero through ten plus negative one, built through
/// the public operations only.
///
/// These are pure derived values with no special status in the engine;
/// the table exists so callers stop counting on their fingers.
/// Construct it wherever it is handy; it is plain immutable data.
#[derive(Clone, Debug)]
pub struct Constants {
    /// 0.
    pub zero: Number,
    /// 1.
    pub one: Number,
    /// 2.
    pub two: Number,
    /// 3.
    pub three: Number,
    /// 4.
    pub four: Number,
    /// 5.
    pub five: Number,
    /// 6.
    pub six: Number,
    /// 7.
    pub seven: Number,
    /// 8.
    pub eight: Number,
    /// 9.
    pub nine: Number,
    /// 10.
    pub ten: Number,
    /// -1.
    pub neg_one: Number,
    /// The "any value" sentinel.
    pub any: Special,
    /// The "any even value" sentinel.
    pub any_even: Special,
    /// The "any odd value" sentinel.
    pub any_odd: Special,
    /// The "any positive even nonzero value" sentinel.
    pub pos_even_not_zero: Special,
}

impl Constants {
    /// Builds the table the slow way, by counting.
    #[must_use]
    pub fn new() -> Self {
        let zero = Number::new();
        let one = zero.inc();
        let two = one.inc();
        let three = one.add(&two);
        let four = two.add(&two);
        let five = two.add(&three);
        let six = three.add(&three);
        let seven = three.add(&four);
        let eight = four.add(&four);
        let nine = five.add(&four);
        let ten = five.add(&five);
        let neg_one = zero.dec();
        Self {
            zero,
            one,
            two,
            three,
            four,
            five,
            six,
            seven,
            eight,
            nine,
            ten,
            neg_one,
            any: Special::Any,
            any_even: Special::AnyEven,
            any_odd: Special::AnyOdd,
            pos_even_not_zero: Special::PositiveEvenNonzero,
        }
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::new()
    }
}
