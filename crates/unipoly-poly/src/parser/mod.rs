//! Parser for polynomial text.
//!
//! The accepted grammar, with whitespace allowed between any two tokens:
//!
//! ```text
//! poly     := term*
//! term     := sign? INT ( "*"? "x" ( "^" INT )? )?
//! sign     := "+" | "-"
//! ```
//!
//! The coefficient literal is required, so `x^2` alone is not a term, and a
//! term must be followed by a sign, another literal or the end of input.
//! Terms that share an exponent are summed. How fragments outside the grammar are
//! treated depends on [`ParseMode`].

mod lexer;

use std::str::FromStr;

use tracing::debug;
use unipoly_rings::traits::Ring;

use crate::error::ParseError;
use crate::sparse::Poly;
use crate::term::Exponent;

use lexer::{Token, TokenKind};

/// How the parser treats text outside the term grammar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip malformed fragments up to the next `+`/`-` and keep going.
    ///
    /// Input without any recognizable term parses as the zero polynomial,
    /// and a term without a leading sign is read as positive. A term
    /// followed by anything other than a sign, a literal or the end of
    /// input is dropped with the rest of its fragment, so `2y^4 + 1` is
    /// `1`; a regex scan over the same text would pick up the stray
    /// literals `2` and `4` as constants instead.
    #[default]
    Permissive,
    /// Fail on the first malformed fragment, on a missing sign between
    /// terms, and on input without any term.
    Strict,
}

/// Parser configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treatment of malformed input.
    pub mode: ParseMode,
}

impl ParseOptions {
    /// Options that skip malformed fragments.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            mode: ParseMode::Permissive,
        }
    }

    /// Options that reject malformed input.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }
}

/// A signed term as read from the input.
#[derive(Clone, Debug, PartialEq)]
struct RawTerm<C> {
    exponent: Exponent,
    coeff: C,
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            tokens: lexer::lex(input),
            pos: 0,
            options,
        }
    }

    fn peek(&self) -> Option<TokenKind<'a>> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.input.len(), |t| t.offset)
    }

    fn unexpected(&self) -> ParseError {
        match self.tokens.get(self.pos) {
            Some(token) => ParseError::UnexpectedToken {
                offset: token.offset,
                found: token.kind.to_string(),
            },
            None => ParseError::UnexpectedEnd,
        }
    }

    fn parse_poly<C: Ring>(&mut self) -> Result<Poly<C>, ParseError> {
        let mut poly = Poly::zero();
        let mut recognized = 0usize;

        while self.pos < self.tokens.len() {
            let start = self.pos;
            match self.parse_term::<C>(recognized == 0) {
                Ok(term) => {
                    poly.add_term(term.exponent, term.coeff);
                    recognized += 1;
                }
                Err(err) => match self.options.mode {
                    ParseMode::Strict => return Err(err),
                    ParseMode::Permissive => self.skip_fragment(start, &err),
                },
            }
        }

        if recognized == 0 && self.options.mode == ParseMode::Strict {
            return Err(ParseError::NoTerms);
        }

        Ok(poly)
    }

    fn parse_term<C: Ring>(&mut self, first: bool) -> Result<RawTerm<C>, ParseError> {
        let negative = match self.peek() {
            Some(TokenKind::Plus) => {
                self.pos += 1;
                false
            }
            Some(TokenKind::Minus) => {
                self.pos += 1;
                true
            }
            _ if !first && self.options.mode == ParseMode::Strict => {
                return Err(ParseError::MissingSign {
                    offset: self.offset(),
                });
            }
            _ => false,
        };

        let literal = self.pos;
        let magnitude: i64 = self.expect_int()?;
        let signed = if negative { -magnitude } else { magnitude };
        let coeff = C::try_from_i64(signed).ok_or_else(|| self.overflow_at(literal))?;

        let has_var = match self.peek() {
            Some(TokenKind::Star) => {
                self.pos += 1;
                self.expect(TokenKind::Var)?;
                true
            }
            Some(TokenKind::Var) => {
                self.pos += 1;
                true
            }
            _ => false,
        };

        let exponent = if !has_var {
            0
        } else if self.peek() == Some(TokenKind::Caret) {
            self.pos += 1;
            self.expect_int()?
        } else {
            1
        };

        // A term ends at a sign, at the next unsigned term or at the end.
        match self.peek() {
            None | Some(TokenKind::Plus | TokenKind::Minus | TokenKind::Int(_)) => {
                Ok(RawTerm { exponent, coeff })
            }
            Some(_) => Err(self.unexpected()),
        }
    }

    /// Overflow error for the integer literal at token index `index`.
    fn overflow_at(&self, index: usize) -> ParseError {
        match self.tokens.get(index) {
            Some(token) => ParseError::IntegerOverflow {
                offset: token.offset,
                literal: token.kind.to_string(),
            },
            None => ParseError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, kind: TokenKind<'_>) -> Result<(), ParseError> {
        if self.peek() == Some(kind) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_int<T: FromStr>(&mut self) -> Result<T, ParseError> {
        let Some(Token {
            kind: TokenKind::Int(digits),
            offset,
        }) = self.tokens.get(self.pos).copied()
        else {
            return Err(self.unexpected());
        };

        let value = digits.parse().map_err(|_| ParseError::IntegerOverflow {
            offset,
            literal: digits.to_string(),
        })?;
        self.pos += 1;
        Ok(value)
    }

    /// Moves past a malformed fragment to the next sign token.
    fn skip_fragment(&mut self, start: usize, err: &ParseError) {
        self.pos = self.pos.max(start + 1);
        while let Some(kind) = self.peek() {
            if kind.is_sign() {
                break;
            }
            self.pos += 1;
        }

        let from = self.tokens[start].offset;
        let fragment = self.input[from..self.offset()].trim_end();
        debug!(offset = from, fragment, error = %err, "skipping malformed polynomial fragment");
    }
}

impl<C: Ring> Poly<C> {
    /// Parses polynomial text with the default (permissive) options.
    ///
    /// Never fails: malformed fragments are skipped and text without any
    /// term yields the zero polynomial. Use [`Poly::parse_with`] with
    /// [`ParseOptions::strict`] to reject such input instead.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut parser = Parser::new(input, ParseOptions::permissive());
        parser.parse_poly().unwrap_or_default()
    }

    /// Parses polynomial text.
    ///
    /// # Errors
    ///
    /// In [`ParseMode::Strict`], returns a [`ParseError`] describing the
    /// first fragment outside the grammar, or [`ParseError::NoTerms`] for
    /// input without terms. Permissive parsing does not fail.
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        Parser::new(input, *options).parse_poly()
    }
}

impl<C: Ring> FromStr for Poly<C> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &ParseOptions::default())
    }
}
