//! Canonical text rendering.
//!
//! Terms are written in decreasing exponent order as `± |c|`, `± |c|x` or
//! `± |c|x^e`, separated by single spaces. The first term drops a leading
//! `+ ` but keeps `- `. The zero polynomial renders as the empty string.
//! For integer coefficients the output parses back to the same polynomial.

use std::fmt;

use unipoly_rings::traits::OrderedRing;

use crate::sparse::Poly;
use crate::term::Term;

impl<C: OrderedRing + fmt::Display> fmt::Display for Poly<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (e, c)) in self.raw_terms().rev().enumerate() {
            let magnitude = Term::new(*e, c.abs());
            let sign = if c.is_negative() { '-' } else { '+' };
            match (i, sign) {
                (0, '+') => write!(f, "{magnitude}")?,
                (0, _) => write!(f, "{sign} {magnitude}")?,
                _ => write!(f, " {sign} {magnitude}")?,
            }
        }
        Ok(())
    }
}

impl<C: OrderedRing + fmt::Display> Poly<C> {
    /// Renders the polynomial in canonical form.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}
