//! Evaluation, degree, dense view and differentiation.

use unipoly_rings::traits::Ring;

use crate::error::PolyError;
use crate::sparse::Poly;
use crate::term::Exponent;

impl<C: Ring> Poly<C> {
    /// Evaluates the polynomial at a point.
    ///
    /// Sums `c * x^e` over the stored terms. `x^0` is one for every `x`,
    /// so a constant term evaluates to itself at `x = 0`.
    #[must_use]
    pub fn evaluate(&self, x: &C) -> C {
        self.raw_terms()
            .fold(C::zero(), |acc, (e, c)| acc + c.clone() * x.pow(*e))
    }

    /// Returns the degree of the polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UndefinedOnZero`] for the zero polynomial.
    pub fn degree(&self) -> Result<Exponent, PolyError> {
        self.raw_terms()
            .next_back()
            .map(|(e, _)| *e)
            .ok_or(PolyError::UndefinedOnZero { operation: "degree" })
    }

    /// Returns the coefficients in ascending degree order.
    ///
    /// The result has length `degree + 1`; absent exponents are zero.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UndefinedOnZero`] for the zero polynomial.
    pub fn dense_coefficients(&self) -> Result<Vec<C>, PolyError> {
        let degree = self.degree().map_err(|_| PolyError::UndefinedOnZero {
            operation: "dense_coefficients",
        })?;

        let mut coeffs = vec![C::zero(); degree as usize + 1];
        for (e, c) in self.raw_terms() {
            coeffs[*e as usize] = c.clone();
        }
        Ok(coeffs)
    }

    /// Computes the formal derivative.
    ///
    /// Constant terms are discarded before any exponent is decremented.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::from_terms(
            self.raw_terms()
                .filter(|(e, _)| **e > 0)
                .map(|(e, c)| (e - 1, c.mul_by_scalar(i64::from(*e)))),
        )
    }

    /// Computes the n-th derivative.
    #[must_use]
    pub fn nth_derivative(&self, n: u32) -> Self {
        let mut result = self.clone();
        for _ in 0..n {
            if result.is_zero() {
                break;
            }
            result = result.derivative();
        }
        result
    }
}
