//! Single polynomial terms.

use std::fmt;

/// Exponent of a term. Exponents are never negative.
pub type Exponent = u32;

/// A term `coeff * x^exponent`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Term<C> {
    /// Power of `x`.
    pub exponent: Exponent,
    /// Coefficient.
    pub coeff: C,
}

impl<C> Term<C> {
    /// Creates a new term.
    #[must_use]
    pub fn new(exponent: Exponent, coeff: C) -> Self {
        Self { exponent, coeff }
    }

    /// Returns true if the term does not depend on `x`.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.exponent == 0
    }
}

impl<C> From<(Exponent, C)> for Term<C> {
    fn from((exponent, coeff): (Exponent, C)) -> Self {
        Self::new(exponent, coeff)
    }
}

/// Renders `c`, `cx` or `cx^e`; the coefficient is printed as is.
impl<C: fmt::Display> fmt::Display for Term<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exponent {
            0 => write!(f, "{}", self.coeff),
            1 => write!(f, "{}x", self.coeff),
            e => write!(f, "{}x^{e}", self.coeff),
        }
    }
}
