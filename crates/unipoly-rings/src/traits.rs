//! Algebraic structure traits.
//!
//! This module defines the numeric domains a polynomial coefficient may
//! live in. Polynomials only need addition, subtraction, multiplication and
//! an exact zero test; interpolation additionally needs division.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Floating-point types only satisfy these laws approximately. They are
/// still accepted as coefficients; `is_zero` is always an exact test.
pub trait Ring:
    Clone + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is exactly the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is exactly the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds an integer into the ring.
    ///
    /// Integers outside the range of a narrower type wrap; use
    /// [`Ring::try_from_i64`] when the value comes from user input.
    fn from_i64(n: i64) -> Self;

    /// Embeds an integer into the ring, or returns `None` if it is out of
    /// range for the underlying type.
    fn try_from_i64(n: i64) -> Option<Self>;

    /// Computes `self * n` for an integer `n`.
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }
        self.clone() * Self::from_i64(n)
    }

    /// Computes self^n for non-negative n.
    ///
    /// `pow(0)` is `one()` for every element, zero included.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A ring with a notion of sign.
pub trait OrderedRing: Ring + PartialOrd {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;

    /// Returns true if the element is strictly negative.
    fn is_negative(&self) -> bool {
        self.signum() < 0
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// Dividing by zero follows the semantics of the underlying type
    /// (IEEE-754 infinities and NaN for the floating-point fields).
    fn field_div(&self, other: &Self) -> Self;
}
