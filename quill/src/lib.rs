//! The quill language: lexing, parsing and running source text.

pub mod builtin_functions;
pub mod diagnostics;

use quill_eval::{EvalError, Interpreter};
use quill_parser::ast::Node;
use quill_parser::lexer::{tokenize, Token};
use quill_parser::parser::Parser;
use quill_parser::{LexError, SyntaxError};
use quill_value::{Host, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Any error that aborts a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Byte offset in the source, for errors raised before evaluation.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Lex(err) => Some(err.position()),
            Error::Syntax(err) => Some(err.position()),
            Error::Eval(_) => None,
        }
    }
}

/// State left behind by a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Top level variable bindings.
    pub variables: HashMap<String, Value>,
    /// Value of the last top level `return`, [`Value::None`] if there was none.
    pub return_value: Value,
}

pub fn lex(source: &str) -> Result<Vec<Token>, Error> {
    Ok(tokenize(source)?)
}

pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    Ok(Parser::new(tokens).parse_program()?)
}

/// Runs a parsed program with the default builtins.
pub fn run(program: &Node, host: &mut dyn Host) -> Result<Outcome, Error> {
    let builtin_fns = builtin_functions::default_builtin_fns();
    let mut interpreter = Interpreter::new(&builtin_fns, host);
    let frame = interpreter.interpret(program)?;

    Ok(Outcome {
        variables: frame.variables().clone(),
        return_value: frame.into_return(),
    })
}

/// Lexes, parses and runs `source`.
pub fn interpret(source: &str, host: &mut dyn Host) -> Result<Outcome, Error> {
    let program = parse(lex(source)?)?;
    run(&program, host)
}
