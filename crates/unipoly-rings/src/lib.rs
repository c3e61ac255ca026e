//! # unipoly-rings
//!
//! Coefficient domains for unipoly polynomials.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `OrderedRing`, `Field`
//! - Implementations for the primitive integer and floating-point types
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── OrderedRing   (i32, i64, i128, f32, f64)
//!  └── Field         (f32, f64)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod primitives;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use traits::{Field, OrderedRing, Ring};
