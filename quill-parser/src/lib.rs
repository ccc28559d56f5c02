//! Lexer, syntax tree and parser for the quill language.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{LexError, SyntaxError};
