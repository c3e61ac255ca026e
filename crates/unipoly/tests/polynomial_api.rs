//! End-to-end tests through the public facade.

use unipoly::prelude::*;

#[test]
fn test_parse_evaluate_scale() -> Result<(), PolyError> {
    let p = Poly::<i64>::parse_with("-312*x^2 +13x^3", &ParseOptions::strict())?;
    assert_eq!(p.to_string(), "13x^3 - 312x^2");
    assert_eq!(p.evaluate(&10), -18200);
    assert_eq!(p.scale(&2).to_string(), "26x^3 - 624x^2");
    assert_eq!(p.degree()?, 3);
    Ok(())
}

#[test]
fn test_negation_and_dense_view() -> Result<(), PolyError> {
    let q: Poly<i64> = "9x^20 + 5 - 5x^3 + 1x".parse()?;
    assert_eq!(q.to_string(), "9x^20 - 5x^3 + 1x + 5");
    assert_eq!((-&q).to_string(), "- 9x^20 + 5x^3 - 1x - 5");

    let dense = q.dense_coefficients()?;
    assert_eq!(dense.len(), 21);
    assert_eq!(&dense[..5], &[5, 1, 0, -5, 0]);
    assert_eq!(dense[20], 9);
    Ok(())
}

#[test]
fn test_duplicate_constants() {
    let r = Poly::<i64>::parse("7 - 3*x^5 + 10*x - 5");
    assert_eq!(r.to_string(), "- 3x^5 + 10x + 2");
}

#[test]
fn test_list_construction() {
    let t = Poly::from(vec![1i64, -2, 3, 4, -5, 6]);
    assert_eq!(t.to_string(), "6x^5 - 5x^4 + 4x^3 + 3x^2 - 2x + 1");
}

#[test]
fn test_alternating_series_and_derivative() {
    let s = Poly::<i64>::parse("1 - 1x + 1x^2 - 1x^3 + 1x^4");
    assert_eq!(s.to_string(), "1x^4 - 1x^3 + 1x^2 - 1x + 1");
    assert_eq!(s.derivative().to_string(), "4x^3 - 3x^2 + 2x - 1");
}

#[test]
fn test_combining_polynomials() {
    let p = Poly::<i64>::parse("-312*x^2 +13x^3");
    let q = Poly::<i64>::parse("9x^20 + 5 - 5x^3 + 1x");

    assert_ne!(p, q);
    assert_eq!((&p + &q).to_string(), "9x^20 + 8x^3 - 312x^2 + 1x + 5");
    assert_eq!((&p - &q).to_string(), "- 9x^20 + 18x^3 - 312x^2 - 1x - 5");

    let product = &p * &q;
    assert_eq!(product.degree(), Ok(23));
    assert_eq!(product.evaluate(&2), p.evaluate(&2) * q.evaluate(&2));
}

#[test]
fn test_optimal_fit_cubes() {
    let u = Poly::<f64>::optimal_fit(&[1.0, 8.0, 27.0, 64.0]);
    assert_eq!(u.to_string(), "1x^3");
    assert_eq!(u.evaluate(&1.0), 1.0);
    assert_eq!(u.evaluate(&2.0), 8.0);
    assert_eq!(u.evaluate(&3.0), 27.0);
    assert_eq!(u.evaluate(&4.0), 64.0);
}

#[test]
fn test_zero_polynomial_contracts() {
    let zero = Poly::<i64>::parse("no terms here");
    assert!(zero.is_zero());
    assert_eq!(zero.to_string(), "");
    assert_eq!(
        zero.degree(),
        Err(PolyError::UndefinedOnZero { operation: "degree" })
    );

    let err: PolyError = Poly::<i64>::parse_with("no terms here", &ParseOptions::strict())
        .unwrap_err()
        .into();
    assert!(matches!(err, PolyError::Parse(ParseError::UnexpectedToken { offset: 0, .. })));

    let options = ParseOptions {
        mode: ParseMode::Strict,
    };
    assert_eq!(
        Poly::<i64>::parse_with("  ", &options),
        Err(ParseError::NoTerms)
    );
}
