//! Interpolation through equally spaced samples.
//!
//! Builds the unique polynomial of degree below the number of samples by
//! Newton's divided-difference scheme: one new basis product per sample,
//! previously fitted samples are left untouched.

use tracing::trace;
use unipoly_rings::traits::Field;

use crate::sparse::Poly;

impl<C: Field> Poly<C> {
    /// Fits samples taken at x = 1, 2, 3, ...
    ///
    /// `samples[i]` is the value at `x = i + 1`. Returns the zero
    /// polynomial for an empty slice.
    ///
    /// # Example
    ///
    /// ```
    /// use unipoly_poly::Poly;
    ///
    /// let p = Poly::<f64>::optimal_fit(&[1.0, 8.0, 27.0, 64.0]);
    /// assert_eq!(p.evaluate(&5.0), 125.0);
    /// ```
    #[must_use]
    pub fn optimal_fit(samples: &[C]) -> Self {
        Self::optimal_fit_from(&C::one(), samples)
    }

    /// Fits samples taken at x = start, start + 1, start + 2, ...
    ///
    /// The basis after step `i` is `(x - x_0)...(x - x_i)`, which vanishes
    /// only at already fitted positions, so the divisor at the next
    /// position is never zero.
    #[must_use]
    pub fn optimal_fit_from(start: &C, samples: &[C]) -> Self {
        let mut result = Self::zero();
        let mut basis = Self::one();
        let mut x = start.clone();

        for (step, y) in samples.iter().enumerate() {
            let residual = y.clone() - result.evaluate(&x);
            let basis_value = basis.evaluate(&x);
            let coefficient = residual.field_div(&basis_value);
            trace!(step, ?residual, ?coefficient, "newton interpolation step");

            result = result.add(&basis.scale(&coefficient));
            basis = basis.mul(&Self::from_coeffs(vec![-x.clone(), C::one()]));
            x = x + C::one();
        }

        result
    }
}
