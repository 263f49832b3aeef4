//! Property-based tests for the tally arithmetic engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::number::Number;
    use crate::compare::Comparison;

    // Strategies stay small: every value is a tally, so cost scales
    // with the numbers themselves.
    fn small_int() -> impl Strategy<Value = i64> {
        -10i64..=10
    }

    fn small_nat() -> impl Strategy<Value = i64> {
        0i64..=10
    }

    fn non_zero_small() -> impl Strategy<Value = i64> {
        prop_oneof![(-10i64..=-1), (1i64..=10)]
    }

    fn tiny_nat() -> impl Strategy<Value = i64> {
        0i64..=3
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_int(), b in small_int()) {
            let a = Number::from_i64(a);
            let b = Number::from_i64(b);
            prop_assert!(a.add(&b).compare(&b.add(&a)).is_equal());
        }

        #[test]
        fn add_operands_exchange(a in small_int(), b in small_int(), c in small_int()) {
            let a = Number::from_i64(a);
            let b = Number::from_i64(b);
            let c = Number::from_i64(c);
            prop_assert!(a.add(&b).add(&c).compare(&a.add(&c).add(&b)).is_equal());
        }

        #[test]
        fn mul_commutative(a in small_int(), b in small_int()) {
            let a = Number::from_i64(a);
            let b = Number::from_i64(b);
            prop_assert!(a.mul(&b).compare(&b.mul(&a)).is_equal());
        }

        #[test]
        fn mul_operands_exchange(a in small_int(), b in small_int(), c in small_int()) {
            let a = Number::from_i64(a);
            let b = Number::from_i64(b);
            let c = Number::from_i64(c);
            prop_assert!(a.mul(&b).mul(&c).compare(&a.mul(&c).mul(&b)).is_equal());
        }

        #[test]
        fn mul_distributes_over_add(a in small_int(), b in small_int(), c in small_int()) {
            let a = Number::from_i64(a);
            let b = Number::from_i64(b);
            let c = Number::from_i64(c);
            let folded = a.add(&b).mul(&c);
            let spread = a.mul(&c).add(&b.mul(&c));
            prop_assert!(folded.compare(&spread).is_equal());
        }

        #[test]
        fn pow_distributes_over_mul(a in -4i64..=4, b in -4i64..=4, c in tiny_nat()) {
            let a = Number::from_i64(a);
            let b = Number::from_i64(b);
            let c = Number::from_i64(c);
            let folded = a.mul(&b).pow(&c).unwrap().as_whole().unwrap().clone();
            let spread = a
                .pow(&c)
                .unwrap()
                .as_whole()
                .unwrap()
                .mul(b.pow(&c).unwrap().as_whole().unwrap());
            prop_assert!(folded.compare(&spread).is_equal());
        }

        #[test]
        fn chained_pow_multiplies_exponents(a in 0i64..=3, b in tiny_nat(), c in tiny_nat()) {
            let a = Number::from_i64(a);
            let b = Number::from_i64(b);
            let c = Number::from_i64(c);
            let chained = a
                .pow(&b)
                .unwrap()
                .as_whole()
                .unwrap()
                .pow(&c)
                .unwrap()
                .as_whole()
                .unwrap()
                .clone();
            let inner = a.pow(&b.mul(&c)).unwrap().as_whole().unwrap().clone();
            prop_assert!(chained.compare(&inner).is_equal());
        }

        #[test]
        fn sub_inverts_add(x in small_int(), y in small_int()) {
            let x = Number::from_i64(x);
            let y = Number::from_i64(y);
            prop_assert!(x.add(&y).sub(&y).compare(&x).is_equal());
        }

        #[test]
        fn div_inverts_mul(x in non_zero_small(), y in small_int()) {
            let x = Number::from_i64(x);
            let y = Number::from_i64(y);
            let division = x.mul(&y).div(&x).unwrap();
            prop_assert!(division.quotient.compare(&y).is_equal());
            prop_assert!(division.remainder.compare(&Number::new()).is_equal());
        }

        #[test]
        fn div_by_self_is_one(x in non_zero_small()) {
            let x = Number::from_i64(x);
            let division = x.div(&x).unwrap();
            prop_assert!(division.quotient.compare(&Number::one()).is_equal());
            prop_assert!(division.remainder.compare(&Number::new()).is_equal());
        }

        #[test]
        fn peano_addition(a in small_int(), b in small_nat()) {
            // a + b is b successive increments of a
            let start = Number::from_i64(a);
            let mut expected = start.clone();
            for _ in 0..b {
                expected = expected.inc();
            }
            prop_assert!(start.add(&Number::from_i64(b)).compare(&expected).is_equal());
        }

        #[test]
        fn inc_then_dec_is_identity(x in small_int()) {
            let x = Number::from_i64(x);
            prop_assert!(x.inc().dec().compare(&x).is_equal());
            prop_assert!(x.dec().inc().compare(&x).is_equal());
        }

        #[test]
        fn compare_is_antisymmetric(a in small_int(), b in small_int()) {
            let x = Number::from_i64(a);
            let y = Number::from_i64(b);
            let forward = x.compare(&y);
            let backward = y.compare(&x);
            let flipped = match forward {
                Comparison::Less => Comparison::Greater,
                Comparison::Greater => Comparison::Less,
                other => other,
            };
            prop_assert_eq!(backward, flipped);
        }

        #[test]
        fn log_inverts_pow(base in 2i64..=4, exponent in 0i64..=4) {
            let base = Number::from_i64(base);
            let exponent = Number::from_i64(exponent);
            let power = base.pow(&exponent).unwrap().as_whole().unwrap().clone();
            let log = power.log(&base).unwrap();
            let recovered = log.exponent.as_number().unwrap();
            prop_assert!(recovered.compare(&exponent).is_equal());
            prop_assert!(log.remainder.compare(&Number::new()).is_equal());
        }
    }
}
