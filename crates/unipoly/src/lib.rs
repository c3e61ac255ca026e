//! # unipoly
//!
//! Sparse single-variable polynomial algebra.
//!
//! ## Features
//!
//! - **Canonical sparse form**: only non-zero terms are stored
//! - **Parsing**: `"7 - 3*x^5 + 10x"` style expressions, permissive or strict
//! - **Arithmetic**: addition, subtraction, scaling, multiplication, powers
//! - **Calculus**: evaluation, derivatives and a dense coefficient view
//! - **Interpolation**: Newton fitting through equally spaced samples
//!
//! ## Quick Start
//!
//! ```rust
//! use unipoly::prelude::*;
//!
//! let p: Poly<i64> = Poly::parse("-312*x^2 +13x^3");
//! assert_eq!(p.to_string(), "13x^3 - 312x^2");
//! assert_eq!(p.evaluate(&10), -18200);
//! assert_eq!(p.derivative().to_string(), "39x^2 - 624x");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use unipoly_poly as poly;
pub use unipoly_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use unipoly_poly::{ParseError, ParseMode, ParseOptions, Poly, PolyError, Term};
    pub use unipoly_rings::{Field, OrderedRing, Ring};
}
