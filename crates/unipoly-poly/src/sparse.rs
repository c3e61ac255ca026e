//! Sparse univariate polynomials.
//!
//! This module provides the canonical sparse representation: a map from
//! exponent to coefficient in which no coefficient is ever zero.

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;

use unipoly_rings::traits::Ring;

use crate::term::{Exponent, Term};

/// A sparse univariate polynomial in `x`.
///
/// Terms are keyed by exponent, so no two terms share an exponent, and a
/// term whose coefficient becomes zero is removed immediately. Every
/// operation builds a fresh map; a published `Poly` is never mutated.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Poly<C: Ring> {
    /// Non-zero coefficients keyed by exponent.
    terms: BTreeMap<Exponent, C>,
}

impl<C: Ring> Poly<C> {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(C::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(C::one(), 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: C, n: Exponent) -> Self {
        let mut poly = Self::zero();
        poly.add_term(n, c);
        poly
    }

    /// Creates a polynomial from a coefficient list.
    ///
    /// `coeffs[i]` becomes the coefficient of x^i; zero entries are dropped.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<C>) -> Self {
        let mut poly = Self::zero();
        for (exponent, c) in (0..).zip(coeffs) {
            poly.add_term(exponent, c);
        }
        poly
    }

    /// Creates a polynomial from (exponent, coefficient) pairs.
    ///
    /// Pairs sharing an exponent are summed.
    #[must_use]
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (Exponent, C)>,
    {
        let mut poly = Self::zero();
        for (exponent, c) in terms {
            poly.add_term(exponent, c);
        }
        poly
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of stored (non-zero) terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the coefficient of x^exponent (zero when absent).
    #[must_use]
    pub fn coeff(&self, exponent: Exponent) -> C {
        self.terms.get(&exponent).cloned().unwrap_or_else(C::zero)
    }

    /// Iterates over the terms in ascending exponent order.
    pub fn terms(&self) -> Terms<'_, C> {
        Terms {
            inner: self.terms.iter(),
        }
    }

    /// Returns the term of highest exponent.
    #[must_use]
    pub fn leading_term(&self) -> Option<Term<&C>> {
        self.terms
            .iter()
            .next_back()
            .map(|(e, c)| Term::new(*e, c))
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&C> {
        self.terms.values().next_back()
    }

    /// Adds `coeff * x^exponent` in place, removing the entry if it cancels.
    ///
    /// Only called on storage that has not been handed out yet.
    pub(crate) fn add_term(&mut self, exponent: Exponent, coeff: C) {
        if coeff.is_zero() {
            return;
        }

        match self.terms.entry(exponent) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                let sum = slot.get().clone() + coeff;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    /// Raw access to the exponent map, in ascending order.
    pub(crate) fn raw_terms(&self) -> btree_map::Iter<'_, Exponent, C> {
        self.terms.iter()
    }
}

impl<C: Ring> Default for Poly<C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<C: Ring> From<Vec<C>> for Poly<C> {
    fn from(coeffs: Vec<C>) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl<C: Ring> FromIterator<Term<C>> for Poly<C> {
    fn from_iter<I: IntoIterator<Item = Term<C>>>(iter: I) -> Self {
        Self::from_terms(iter.into_iter().map(|t| (t.exponent, t.coeff)))
    }
}

/// Iterator over the terms of a [`Poly`], ascending by exponent.
#[derive(Clone, Debug)]
pub struct Terms<'a, C> {
    inner: btree_map::Iter<'a, Exponent, C>,
}

impl<'a, C> Iterator for Terms<'a, C> {
    type Item = Term<&'a C>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(e, c)| Term::new(*e, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<C> DoubleEndedIterator for Terms<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(e, c)| Term::new(*e, c))
    }
}

impl<C> ExactSizeIterator for Terms<'_, C> {}
