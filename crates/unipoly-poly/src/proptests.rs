//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::parser::ParseOptions;
    use crate::sparse::Poly;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    // Strategy for generating sparse polynomials (up to 6 terms, degree < 12)
    fn small_poly() -> impl Strategy<Value = Poly<i64>> {
        proptest::collection::vec((0u32..12, small_coeff()), 0..=6).prop_map(Poly::<i64>::from_terms)
    }

    fn has_no_zero_terms(p: &Poly<i64>) -> bool {
        p.terms().all(|t| *t.coeff != 0)
    }

    proptest! {
        // Canonical form

        #[test]
        fn arithmetic_keeps_sparse_invariant(a in small_poly(), b in small_poly(), s in small_coeff()) {
            prop_assert!(has_no_zero_terms(&a.add(&b)));
            prop_assert!(has_no_zero_terms(&a.sub(&b)));
            prop_assert!(has_no_zero_terms(&a.mul(&b)));
            prop_assert!(has_no_zero_terms(&a.scale(&s)));
            prop_assert!(has_no_zero_terms(&a.add_scalar(&s)));
            prop_assert!(has_no_zero_terms(&a.derivative()));
        }

        #[test]
        fn sub_undoes_add(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).sub(&b), a);
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // (a + b) * c = a * c + b * c
            let left = a.add(&b).mul(&c);
            let right = a.mul(&c).add(&b.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            // deg(a * b) = deg(a) + deg(b) over the integers
            prop_assume!(!a.is_zero() && !b.is_zero());
            let product = a.mul(&b);
            prop_assert_eq!(product.degree().unwrap(), a.degree().unwrap() + b.degree().unwrap());
        }

        // Calculus

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly(), s in small_coeff()) {
            prop_assert_eq!(a.add(&b).derivative(), a.derivative().add(&b.derivative()));
            prop_assert_eq!(a.scale(&s).derivative(), a.derivative().scale(&s));
        }

        #[test]
        fn derivative_of_constant_is_zero(s in small_coeff()) {
            prop_assert!(Poly::constant(s).derivative().is_zero());
        }

        #[test]
        fn product_rule(a in small_poly(), b in small_poly()) {
            let left = a.mul(&b).derivative();
            let right = a.derivative().mul(&b).add(&a.mul(&b.derivative()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn eval_is_homomorphism(a in small_poly(), b in small_poly(), x in -3i64..3i64) {
            prop_assert_eq!(a.add(&b).evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
            prop_assert_eq!(a.mul(&b).evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
        }

        #[test]
        fn dense_view_matches_coefficients(a in small_poly()) {
            prop_assume!(!a.is_zero());
            let dense = a.dense_coefficients().unwrap();
            prop_assert_eq!(dense.len() as u32, a.degree().unwrap() + 1);
            prop_assert_eq!(Poly::from_coeffs(dense), a);
        }

        // Text

        #[test]
        fn format_parses_back(a in small_poly(), b in small_poly()) {
            let p = a.mul(&b).sub(&a);
            let text = p.to_string();
            prop_assert_eq!(Poly::<i64>::parse(&text), p.clone());
            if !p.is_zero() {
                prop_assert_eq!(Poly::<i64>::parse_with(&text, &ParseOptions::strict()), Ok(p));
            }
        }

        // Equality

        #[test]
        fn equality_reflexive_and_symmetric(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a, &a);
            prop_assert_eq!(a == b, b == a);
        }

        // Interpolation

        #[test]
        fn fit_recovers_integer_polynomial(a in proptest::collection::vec(-9i64..9i64, 1..=5)) {
            #[allow(clippy::cast_precision_loss)]
            let p = Poly::from_coeffs(a.iter().map(|&c| c as f64).collect());
            let samples: Vec<f64> = (1..=a.len()).map(|x| {
                #[allow(clippy::cast_precision_loss)]
                let x = x as f64;
                p.evaluate(&x)
            }).collect();
            let fitted = Poly::optimal_fit(&samples);
            for x in 0..=a.len() + 1 {
                #[allow(clippy::cast_precision_loss)]
                let x = x as f64;
                prop_assert!((fitted.evaluate(&x) - p.evaluate(&x)).abs() < 1e-6);
            }
        }
    }
}
