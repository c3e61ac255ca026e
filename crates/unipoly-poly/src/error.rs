//! Error types.

use thiserror::Error;

/// Errors produced while parsing polynomial text in strict mode.
///
/// Offsets are byte offsets into the input string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no recognizable term.
    #[error("no polynomial terms recognized in input")]
    NoTerms,

    /// A token that does not fit the term grammar.
    #[error("unexpected `{found}` at offset {offset}")]
    UnexpectedToken {
        /// Byte offset of the token.
        offset: usize,
        /// The offending token as written.
        found: String,
    },

    /// The input ended in the middle of a term.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// Two terms were not separated by `+` or `-`.
    #[error("missing `+` or `-` before term at offset {offset}")]
    MissingSign {
        /// Byte offset of the unsigned term.
        offset: usize,
    },

    /// An integer literal does not fit the coefficient or exponent type.
    #[error("integer literal `{literal}` at offset {offset} is out of range")]
    IntegerOverflow {
        /// Byte offset of the literal.
        offset: usize,
        /// The literal as written.
        literal: String,
    },
}

/// Errors produced by polynomial operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The operation has no meaning for the zero polynomial.
    #[error("{operation} is undefined for the zero polynomial")]
    UndefinedOnZero {
        /// Name of the failed operation.
        operation: &'static str,
    },

    /// An exponent sum does not fit in [`Exponent`](crate::term::Exponent).
    #[error("exponent x^{lhs} * x^{rhs} overflows")]
    ExponentOverflow {
        /// Left exponent.
        lhs: u32,
        /// Right exponent.
        rhs: u32,
    },

    /// Parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
