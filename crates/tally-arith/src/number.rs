//! Signed numbers and the hyperoperation ladder.
//!
//! Every operation above increment is repeated application of the one
//! below it, differing only in its seed: `add` folds `inc` starting
//! from self, `mul` folds `add` starting from zero, `pow` folds `mul`
//! starting from one, `tetr` folds `pow` seeded with self. The
//! inverses unwind the same ladders by repeated decrement.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::compare::Comparison;
use crate::error::ArithmeticError;
use crate::magnitude::Magnitude;
use crate::sign::Sign;
use crate::special::Special;
use crate::value::Value;

/// A signed integer: a tally [`Magnitude`] paired with a [`Sign`].
///
/// Numbers are immutable; every operation returns a fresh value.
/// Negative zero (empty magnitude, negative sign) is representable and
/// deliberately never normalized away: it compares equal to positive
/// zero but stays distinguishable through [`Number::sign`].
#[derive(Clone, Debug)]
pub struct Number {
    magnitude: Magnitude,
    sign: Sign,
}

/// Quotient and remainder of an integer division.
#[derive(Clone, Debug, PartialEq)]
pub struct Division {
    /// How many whole times the denominator fits.
    pub quotient: Number,
    /// Undivided units; a magnitude-only count, never negative.
    pub remainder: Number,
}

/// Result of exponentiation or tetration.
#[derive(Clone, Debug, PartialEq)]
pub enum Power {
    /// An ordinary whole result.
    Whole(Number),
    /// `1 / (self ^ |b|)` as a quotient/remainder pair, produced by a
    /// negative exponent or tower height.
    Reciprocal(Division),
}

impl Power {
    /// The whole result, if there is one.
    #[must_use]
    pub fn as_whole(&self) -> Option<&Number> {
        match self {
            Power::Whole(n) => Some(n),
            Power::Reciprocal(_) => None,
        }
    }
}

/// Exponent and remainder produced by [`Number::log`].
#[derive(Clone, Debug, PartialEq)]
pub struct Logarithm {
    /// The exponent, or a [`Special`] sentinel in the degenerate
    /// cases.
    pub exponent: Value,
    /// `self - base ^ exponent` in the general case.
    pub remainder: Number,
}

/// Height and remainder produced by [`Number::superlog`].
#[derive(Clone, Debug, PartialEq)]
pub struct SuperLogarithm {
    /// The tower height, or a [`Special`] sentinel.
    pub height: Value,
    /// `self - (base ^^ height)` in the general case.
    pub remainder: Number,
}

impl Number {
    /// Positive zero.
    #[must_use]
    pub fn new() -> Self {
        Self { magnitude: Magnitude::zero(), sign: Sign::Positive }
    }

    /// Positive one.
    #[must_use]
    pub fn one() -> Self {
        Self::new().inc()
    }

    /// A number from an explicit magnitude and sign.
    #[must_use]
    pub fn from_parts(magnitude: Magnitude, sign: Sign) -> Self {
        Self { magnitude, sign }
    }

    /// A tally of `|n|` units under `n`'s sign.
    ///
    /// Negative zero is not reachable this way; build it with
    /// [`Number::from_parts`].
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
        Self { magnitude: Magnitude::of(n.unsigned_abs() as usize), sign }
    }

    /// The tally measuring this number's size.
    #[must_use]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// This number's sign; meaningful even at zero magnitude.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Copies `self` with the sign overridden.
    #[must_use]
    pub fn with_sign(&self, sign: Sign) -> Self {
        Self { magnitude: self.magnitude.clone(), sign }
    }

    /// The same magnitude under the opposite sign.
    #[must_use]
    pub fn negated(&self) -> Self {
        self.with_sign(self.sign.flipped())
    }

    /// The same magnitude under a positive sign.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_sign(Sign::Positive)
    }

    /// `self + 1`.
    ///
    /// A zero magnitude increments to positive one regardless of the
    /// stored sign; that rule is how negatives cross zero on the way
    /// up.
    #[must_use]
    pub fn inc(&self) -> Self {
        match self.sign {
            Sign::Negative => match self.magnitude.dec() {
                // -n steps toward zero; -1 becomes -0
                Some(smaller) => Self::from_parts(smaller, Sign::Negative),
                // -0 jumps straight to +1
                None => Self::from_parts(Magnitude::zero().inc(), Sign::Positive),
            },
            Sign::Positive => Self::from_parts(self.magnitude.inc(), Sign::Positive),
        }
    }

    /// `self - 1`.
    ///
    /// Positive zero decrements to negative one; a negative number
    /// moves further from zero.
    #[must_use]
    pub fn dec(&self) -> Self {
        match self.sign {
            Sign::Positive => match self.magnitude.dec() {
                Some(smaller) => Self::from_parts(smaller, Sign::Positive),
                None => Self::from_parts(Magnitude::zero().inc(), Sign::Negative),
            },
            Sign::Negative => Self::from_parts(self.magnitude.inc(), Sign::Negative),
        }
    }

    /// `self + b`: folds [`Number::inc`] (b non-negative) or
    /// [`Number::dec`] (b negative) once per unit of `b`'s magnitude.
    #[must_use]
    pub fn add(&self, b: &Number) -> Self {
        let mut result = self.clone();
        for _ in b.magnitude.iter() {
            result = if b.sign.is_negative() { result.dec() } else { result.inc() };
        }
        result
    }

    /// `self - b`: the mirror of [`Number::add`], with the roles of
    /// inc and dec swapped relative to `b`'s sign. Crossing zero falls
    /// out of `dec`'s `+0 -> -1` rule.
    #[must_use]
    pub fn sub(&self, b: &Number) -> Self {
        let mut result = self.clone();
        for _ in b.magnitude.iter() {
            result = if b.sign.is_negative() { result.inc() } else { result.dec() };
        }
        result
    }

    /// `self * b`: accumulates `add(self)` once per unit of `b`'s
    /// magnitude, starting from zero.
    ///
    /// The sign is the product sign even when the magnitude comes out
    /// zero, so `0 * -1` is negative zero.
    #[must_use]
    pub fn mul(&self, b: &Number) -> Self {
        let mut result = Number::new();
        for _ in b.magnitude.iter() {
            result = Number::add(&result, self);
        }
        result.with_sign(Sign::of_product(self.sign, b.sign))
    }

    /// `self ^ b`.
    ///
    /// A non-negative exponent folds `mul(self)` starting from one, so
    /// `0 ^ 0 == 1`. A negative exponent produces the reciprocal
    /// `1 / (self ^ |b|)` as a quotient/remainder pair.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when a negative exponent
    /// meets a zero base.
    pub fn pow(&self, b: &Number) -> Result<Power, ArithmeticError> {
        if b.sign.is_negative() && !b.magnitude.is_zero() {
            return match self.pow(&b.abs())? {
                Power::Whole(denominator) => {
                    Ok(Power::Reciprocal(Number::one().div(&denominator)?))
                }
                Power::Reciprocal(_) => Err(ArithmeticError::ComplexRequired),
            };
        }
        let mut result = Number::one();
        for _ in b.magnitude.iter() {
            result = Number::mul(&result, self);
        }
        Ok(Power::Whole(result))
    }

    /// `self ^^ b` (tetration).
    ///
    /// Zero height gives one; height h applies `pow(self)` h − 1
    /// times seeded with self; a negative height gives the reciprocal
    /// `1 / (self ^^ |b|)`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] for `0 ^^ -n`;
    /// [`ArithmeticError::ComplexRequired`] when a negative base turns
    /// the tower fractional before the final storey.
    pub fn tetr(&self, b: &Number) -> Result<Power, ArithmeticError> {
        if b.magnitude.is_zero() {
            return Ok(Power::Whole(Number::one()));
        }
        if b.sign.is_negative() {
            return match self.tetr(&b.abs())? {
                Power::Whole(tower) => Ok(Power::Reciprocal(Number::one().div(&tower)?)),
                Power::Reciprocal(_) => Err(ArithmeticError::ComplexRequired),
            };
        }
        let mut result = self.clone();
        let mut storeys = b.magnitude.iter().skip(1).peekable();
        while storeys.next().is_some() {
            match result.pow(self)? {
                Power::Whole(next) => result = next,
                Power::Reciprocal(division) => {
                    if storeys.peek().is_some() {
                        return Err(ArithmeticError::ComplexRequired);
                    }
                    return Ok(Power::Reciprocal(division));
                }
            }
        }
        Ok(Power::Whole(result))
    }

    /// Long division by repeated decrement.
    ///
    /// The quotient's sign follows the product rule (so `-0 / 1` is
    /// `-0`); the remainder is the count of undivided units, magnitude
    /// only.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when the denominator's
    /// magnitude is zero, whatever its sign.
    pub fn div(&self, denominator: &Number) -> Result<Division, ArithmeticError> {
        if denominator.magnitude.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let sign = Sign::of_product(self.sign, denominator.sign);
        let mut numerator = self.magnitude.clone();
        let mut quotient = Magnitude::zero();
        loop {
            let mut progress = Magnitude::zero();
            for _ in denominator.magnitude.iter() {
                match numerator.dec() {
                    Some(rest) => {
                        numerator = rest;
                        progress = progress.inc();
                    }
                    None => {
                        return Ok(Division {
                            quotient: Number::from_parts(quotient, sign),
                            remainder: Number::from_parts(progress, Sign::Positive),
                        });
                    }
                }
            }
            quotient = quotient.inc();
        }
    }

    /// Integer logarithm: the exponent such that
    /// `base ^ exponent <= self < base ^ (exponent + 1)`, plus the
    /// remainder `self - base ^ exponent`, computed by repeated
    /// division.
    ///
    /// Degenerate bases return [`Special`] sentinels where the
    /// solution set is a family: `log` base one of one is `Any`, base
    /// negative one of one is `AnyEven`, of negative one `AnyOdd`,
    /// base zero of zero `PositiveEvenNonzero`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Undefined`] when no real exponent exists;
    /// [`ArithmeticError::ComplexRequired`] when the only exponent
    /// lies off the real line (`log` base two of `-8`, base `-2` of
    /// `8`, base one of negative one).
    pub fn log(&self, base: &Number) -> Result<Logarithm, ArithmeticError> {
        let zero = Number::new();
        let one = Number::one();
        let neg_one = one.negated();

        if base.magnitude.is_zero() {
            // 0^x is 0 for positive x and 1 for x == 0
            if self.magnitude.is_zero() {
                if self.sign.is_positive() {
                    return Ok(Logarithm {
                        exponent: Value::Special(Special::PositiveEvenNonzero),
                        remainder: zero,
                    });
                }
                return Err(ArithmeticError::Undefined(
                    "no power of zero is negative zero".into(),
                ));
            }
            if self.compare(&one).is_equal() {
                return Ok(Logarithm { exponent: Value::Number(zero.clone()), remainder: zero });
            }
            return Err(ArithmeticError::Undefined(
                "powers of zero are only zero or one".into(),
            ));
        }
        if base.compare(&one).is_equal() {
            if self.compare(&one).is_equal() {
                return Ok(Logarithm { exponent: Value::Special(Special::Any), remainder: zero });
            }
            if self.compare(&neg_one).is_equal() {
                return Err(ArithmeticError::ComplexRequired);
            }
            return Err(ArithmeticError::Undefined("powers of one are only one".into()));
        }
        if base.compare(&neg_one).is_equal() {
            if self.compare(&one).is_equal() {
                return Ok(Logarithm {
                    exponent: Value::Special(Special::AnyEven),
                    remainder: zero,
                });
            }
            if self.compare(&neg_one).is_equal() {
                return Ok(Logarithm {
                    exponent: Value::Special(Special::AnyOdd),
                    remainder: zero,
                });
            }
            return Err(ArithmeticError::Undefined(
                "powers of negative one are only one or negative one".into(),
            ));
        }
        if self.magnitude.is_zero() {
            return Err(ArithmeticError::Undefined(
                "no exponent takes the base to zero".into(),
            ));
        }

        let mut quotient = self.clone();
        let mut exponent = Number::new();
        loop {
            quotient = quotient.div(base)?.quotient;
            if quotient.magnitude.is_zero() {
                let power = match base.pow(&exponent)? {
                    Power::Whole(power) => power,
                    Power::Reciprocal(_) => return Err(ArithmeticError::ComplexRequired),
                };
                if power.sign != self.sign {
                    return Err(ArithmeticError::ComplexRequired);
                }
                let remainder = self.sub(&power);
                return Ok(Logarithm { exponent: Value::Number(exponent), remainder });
            }
            exponent = exponent.inc();
        }
    }

    /// Super-logarithm: inverse tetration with respect to height,
    /// computed by repeated [`Number::log`] against a base that
    /// squares each round.
    ///
    /// Degenerate cases parallel `log`: base zero of zero is `Any`,
    /// base one of one `Any`, base negative one of one/negative one
    /// `AnyEven`/`AnyOdd`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Undefined`] when no real height exists;
    /// failures from the inner `log` propagate unchanged.
    pub fn superlog(&self, base: &Number) -> Result<SuperLogarithm, ArithmeticError> {
        let zero = Number::new();
        let one = Number::one();
        let neg_one = one.negated();

        if base.magnitude.is_zero() {
            if self.magnitude.is_zero() && self.sign.is_positive() {
                return Ok(SuperLogarithm {
                    height: Value::Special(Special::Any),
                    remainder: zero,
                });
            }
            return Err(ArithmeticError::Undefined(
                "towers of zero never reach this value".into(),
            ));
        }
        if base.compare(&one).is_equal() {
            if self.compare(&one).is_equal() {
                return Ok(SuperLogarithm { height: Value::Special(Special::Any), remainder: zero });
            }
            return Err(ArithmeticError::Undefined("towers of one are only one".into()));
        }
        if base.compare(&neg_one).is_equal() {
            if self.compare(&one).is_equal() {
                return Ok(SuperLogarithm {
                    height: Value::Special(Special::AnyEven),
                    remainder: zero,
                });
            }
            if self.compare(&neg_one).is_equal() {
                return Ok(SuperLogarithm {
                    height: Value::Special(Special::AnyOdd),
                    remainder: zero,
                });
            }
            return Err(ArithmeticError::Undefined(
                "towers of negative one are only one or negative one".into(),
            ));
        }

        let mut height = Number::one();
        let mut progress = self.clone();
        let mut working_base = base.clone();
        loop {
            let log = progress.log(&working_base)?;
            progress = match log.exponent {
                Value::Number(n) => n,
                Value::Special(_) => {
                    return Err(ArithmeticError::Undefined(
                        "super-logarithm progress left the number line".into(),
                    ))
                }
            };
            if progress.magnitude.is_zero() {
                let tower = match base.tetr(&height)? {
                    Power::Whole(tower) => tower,
                    Power::Reciprocal(_) => return Err(ArithmeticError::ComplexRequired),
                };
                let remainder = self.sub(&tower);
                return Ok(SuperLogarithm { height: Value::Number(height), remainder });
            }
            height = height.inc();
            working_base = Number::mul(&working_base, &working_base);
        }
    }

    /// Three-way comparison, sign first.
    ///
    /// Two zero magnitudes are equal whatever their signs. Otherwise a
    /// differing sign decides alone, and matching signs fall through
    /// to magnitude comparison, inverted for negatives so that
    /// `-3 < -2`.
    #[must_use]
    pub fn compare(&self, other: &Number) -> Comparison {
        if self.magnitude.is_zero() && other.magnitude.is_zero() {
            return Comparison::Equal;
        }
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Comparison::Greater,
            (Sign::Negative, Sign::Positive) => Comparison::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.compare(&other.magnitude),
            (Sign::Negative, Sign::Negative) => match self.magnitude.compare(&other.magnitude) {
                Comparison::Less => Comparison::Greater,
                Comparison::Greater => Comparison::Less,
                equal => equal,
            },
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::new()
    }
}

// Mathematical equality: 0 == -0. The representation distinction stays
// observable through `sign()`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_equal()
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.compare(other) {
            Comparison::Less => Ordering::Less,
            Comparison::Greater => Ordering::Greater,
            // NotEqual never arises between two numbers
            Comparison::Equal | Comparison::NotEqual => Ordering::Equal,
        }
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        Number::add(self, rhs)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        Number::add(&self, &rhs)
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Number {
        Number::sub(self, rhs)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        Number::sub(&self, &rhs)
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        Number::mul(self, rhs)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        Number::mul(&self, &rhs)
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.negated()
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.negated()
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Number {
    fn one() -> Self {
        Self::new().inc()
    }

    fn is_one(&self) -> bool {
        self.compare(&Self::new().inc()).is_equal()
    }
}

impl fmt::Display for Number {
    /// Counts the tally and renders it in decimal, for debugging only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude.count())
    }
}
