//! Tokenizer for polynomial text.

use std::fmt;

/// Kinds of tokens in polynomial text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind<'a> {
    Plus,
    Minus,
    Star,
    Caret,
    /// The variable `x`.
    Var,
    /// Unsigned decimal literal, kept as written.
    Int(&'a str),
    /// Any other character.
    Unknown(char),
}

impl TokenKind<'_> {
    pub(crate) fn is_sign(self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Caret => f.write_str("^"),
            TokenKind::Var => f.write_str("x"),
            TokenKind::Int(digits) => f.write_str(digits),
            TokenKind::Unknown(c) => write!(f, "{c}"),
        }
    }
}

/// A token and its byte offset in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub offset: usize,
}

/// Splits the input into tokens, dropping whitespace.
pub(crate) fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::with_capacity(input.len() / 2 + 1);
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let kind = match c {
            c if c.is_whitespace() => continue,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '^' => TokenKind::Caret,
            'x' => TokenKind::Var,
            '0'..='9' => {
                let mut end = offset + 1;
                while let Some(&(i, '0'..='9')) = chars.peek() {
                    end = i + 1;
                    chars.next();
                }
                TokenKind::Int(&input[offset..end])
            }
            other => TokenKind::Unknown(other),
        };
        tokens.push(Token { kind, offset });
    }

    tokens
}
