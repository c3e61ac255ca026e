//! # unipoly-poly
//!
//! Sparse single-variable polynomials.
//!
//! This crate provides:
//! - A canonical sparse representation (`Poly`) that never stores zero terms
//! - A parser for expressions such as `"-312*x^2 + 13x^3"`
//! - Ring arithmetic, evaluation, differentiation and a dense view
//! - Newton-style interpolation through equally spaced samples
//!
//! ## Example
//!
//! ```
//! use unipoly_poly::Poly;
//!
//! let p: Poly<i64> = "-312*x^2 + 13x^3".parse().unwrap();
//! assert_eq!(p.evaluate(&10), -18200);
//! assert_eq!(p.to_string(), "13x^3 - 312x^2");
//!
//! let cube = Poly::<f64>::optimal_fit(&[1.0, 8.0, 27.0, 64.0]);
//! assert_eq!(cube, Poly::monomial(1.0, 3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod calculus;
pub mod error;
pub mod format;
pub mod interpolate;
pub mod parser;
pub mod sparse;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::{ParseError, PolyError};
pub use parser::{ParseMode, ParseOptions};
pub use sparse::Poly;
pub use term::{Exponent, Term};
