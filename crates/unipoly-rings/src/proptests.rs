//! Property-based tests for the coefficient domains.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::traits::{Field, OrderedRing, Ring};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn pow_matches_repeated_multiplication(a in -20i64..20i64, n in 0u32..6) {
            let mut expected = 1i64;
            for _ in 0..n {
                expected *= a;
            }
            prop_assert_eq!(Ring::pow(&a, n), expected);
        }

        #[test]
        fn pow_adds_exponents(a in -10i128..10i128, m in 0u32..8, n in 0u32..8) {
            prop_assert_eq!(Ring::pow(&a, m) * Ring::pow(&a, n), Ring::pow(&a, m + n));
        }

        #[test]
        fn mul_by_scalar_is_multiplication(a in small_int(), n in small_int()) {
            prop_assert_eq!(a.mul_by_scalar(n), a * n);
        }

        #[test]
        fn abs_times_signum_is_identity(a in small_int()) {
            prop_assert_eq!(OrderedRing::abs(&a) * i64::from(OrderedRing::signum(&a)), a);
        }

        #[test]
        fn float_inverse_round_trips_integers(a in non_zero_int()) {
            #[allow(clippy::cast_precision_loss)]
            let x = a as f64;
            let inv = Field::inv(&x).unwrap();
            prop_assert!((x * inv - 1.0).abs() < 1e-12);
            prop_assert!((Field::field_div(&x, &x) - 1.0).abs() < 1e-12);
        }
    }
}
