//! Errors raised while lexing and parsing.

use crate::lexer::TokenKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("integer literal `{literal}` is too large")]
    IntegerTooLarge { literal: String, position: usize },
    #[error("invalid escape sequence `{sequence}` in string literal")]
    InvalidEscape { sequence: String, position: usize },
}

impl LexError {
    /// Byte offset of the offending input.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::IntegerTooLarge { position, .. }
            | LexError::InvalidEscape { position, .. } => *position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unexpected token {found}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: Expected,
        position: usize,
    },
    /// An operand was required but the token stream was already exhausted.
    #[error("empty expression")]
    EmptyExpression { position: usize },
}

impl SyntaxError {
    /// Byte offset of the offending token.
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::EmptyExpression { position } => *position,
        }
    }
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    Expression,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Expression => f.write_str("an expression"),
        }
    }
}
