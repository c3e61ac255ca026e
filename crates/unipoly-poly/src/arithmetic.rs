//! Polynomial arithmetic.
//!
//! All operations borrow their operands and return a new polynomial. The
//! `std::ops` impls at the bottom delegate to the inherent methods. The
//! operator traits are referenced by path so that method calls inside the
//! crate always resolve to the borrowing inherent methods.

use unipoly_rings::traits::Ring;

use crate::error::PolyError;
use crate::sparse::Poly;
use crate::term::Exponent;

impl<C: Ring> Poly<C> {
    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (e, c) in other.raw_terms() {
            result.add_term(*e, c.clone());
        }
        result
    }

    /// Adds a scalar to the constant term.
    #[must_use]
    pub fn add_scalar(&self, c: &C) -> Self {
        let mut result = self.clone();
        result.add_term(0, c.clone());
        result
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.scale(&C::from_i64(-1))
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Subtracts a scalar from the constant term.
    #[must_use]
    pub fn sub_scalar(&self, c: &C) -> Self {
        self.add_scalar(&-c.clone())
    }

    /// Multiplies by a scalar.
    ///
    /// Products that come out as zero are dropped.
    #[must_use]
    pub fn scale(&self, c: &C) -> Self {
        if c.is_zero() {
            return Self::zero();
        }

        Self::from_terms(self.raw_terms().map(|(e, x)| (*e, x.clone() * c.clone())))
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// # Panics
    ///
    /// Panics if a product exponent exceeds `u32::MAX`; see
    /// [`Poly::checked_mul`].
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        unwrap_exponent(self.checked_mul(other))
    }

    /// Multiplies two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if a product exponent
    /// exceeds `u32::MAX`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, PolyError> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }

        let mut result = Self::zero();
        for (e1, c1) in self.raw_terms() {
            for (e2, c2) in other.raw_terms() {
                result.add_term(exponent_sum(*e1, *e2)?, c1.clone() * c2.clone());
            }
        }
        Ok(result)
    }

    /// Multiplies by the monomial c * x^n.
    ///
    /// # Panics
    ///
    /// Panics if a shifted exponent exceeds `u32::MAX`.
    #[must_use]
    pub fn mul_monomial(&self, c: &C, n: Exponent) -> Self {
        unwrap_exponent(self.checked_mul_monomial(c, n))
    }

    /// Multiplies by the monomial c * x^n.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if a shifted exponent
    /// exceeds `u32::MAX`.
    pub fn checked_mul_monomial(&self, c: &C, n: Exponent) -> Result<Self, PolyError> {
        if c.is_zero() {
            return Ok(Self::zero());
        }

        let mut result = Self::zero();
        for (e, x) in self.raw_terms() {
            result.add_term(exponent_sum(*e, n)?, x.clone() * c.clone());
        }
        Ok(result)
    }

    /// Shifts the polynomial by multiplying by x^n.
    ///
    /// # Panics
    ///
    /// Panics if a shifted exponent exceeds `u32::MAX`.
    #[must_use]
    pub fn shift(&self, n: Exponent) -> Self {
        unwrap_exponent(self.checked_shift(n))
    }

    /// Shifts the polynomial by multiplying by x^n.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if a shifted exponent
    /// exceeds `u32::MAX`.
    pub fn checked_shift(&self, n: Exponent) -> Result<Self, PolyError> {
        if n == 0 {
            return Ok(self.clone());
        }
        self.checked_mul_monomial(&C::one(), n)
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// # Panics
    ///
    /// Panics if the degree of the result exceeds `u32::MAX`.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        unwrap_exponent(self.checked_pow(n))
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// Intermediate products never exceed the degree of the result.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if the degree of the result
    /// exceeds `u32::MAX`.
    pub fn checked_pow(&self, n: u32) -> Result<Self, PolyError> {
        if n == 0 {
            return Ok(Self::one());
        }
        if n == 1 {
            return Ok(self.clone());
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.checked_mul(&base)?;
            }
        }

        Ok(result)
    }
}

fn exponent_sum(lhs: Exponent, rhs: Exponent) -> Result<Exponent, PolyError> {
    lhs.checked_add(rhs)
        .ok_or(PolyError::ExponentOverflow { lhs, rhs })
}

/// Infallible operator forms panic on exponent overflow instead of wrapping.
fn unwrap_exponent<C: Ring>(result: Result<Poly<C>, PolyError>) -> Poly<C> {
    match result {
        Ok(poly) => poly,
        Err(err) => panic!("{err}"),
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl<C: Ring> std::ops::$trait<&Poly<C>> for &Poly<C> {
            type Output = Poly<C>;

            fn $method(self, rhs: &Poly<C>) -> Poly<C> {
                Poly::$method(self, rhs)
            }
        }

        impl<C: Ring> std::ops::$trait for Poly<C> {
            type Output = Poly<C>;

            fn $method(self, rhs: Poly<C>) -> Poly<C> {
                Poly::$method(&self, &rhs)
            }
        }

        impl<C: Ring> std::ops::$trait<&Poly<C>> for Poly<C> {
            type Output = Poly<C>;

            fn $method(self, rhs: &Poly<C>) -> Poly<C> {
                Poly::$method(&self, rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl<C: Ring> std::ops::Neg for &Poly<C> {
    type Output = Poly<C>;

    fn neg(self) -> Poly<C> {
        Poly::neg(self)
    }
}

impl<C: Ring> std::ops::Neg for Poly<C> {
    type Output = Poly<C>;

    fn neg(self) -> Poly<C> {
        Poly::neg(&self)
    }
}
