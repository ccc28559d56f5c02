use quill_parser::lexer::TokenKind;
use std::io;
use thiserror::Error;

/// A fatal error raised while walking the syntax tree.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),
    #[error("undefined function `{0}`")]
    UndefinedFunction(String),
    /// An operator node carries a token the evaluator has no rule for.
    #[error("invalid operator {0}")]
    InvalidOperator(TokenKind),
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
