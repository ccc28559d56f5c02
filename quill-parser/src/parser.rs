use crate::ast::{Condition, Flow, FunctionDecl, Node};
use crate::error::{Expected, SyntaxError};
use crate::lexer::{Token, TokenKind, TokenValue};

mod expr;
mod stmt;

/// Recursive descent parser over a fully lexed token stream.
pub struct Parser {
    /// Always ends with exactly one [`TokenKind::Eof`].
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            let end = tokens.last().map(|token| token.span.end).unwrap_or(0);
            tokens.push(Token::eof(end));
        }
        Self {
            tokens,
            position: 0,
        }
    }
}

/// Parse utilities
impl Parser {
    fn current_token(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn current_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Kind of the token after the current one.
    fn peek(&self) -> TokenKind {
        self.tokens
            .get(self.position + 1)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::Eof)
    }

    /// Advances to the next token. Stays on the trailing `Eof` once reached.
    fn next(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Consumes the current token if it has the expected kind.
    fn eat(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.current_kind() == kind {
            Ok(self.next())
        } else {
            Err(self.unexpected(Expected::Token(kind)))
        }
    }

    /// Consumes a `WORD` and returns its text.
    fn eat_word(&mut self) -> Result<String, SyntaxError> {
        let token = self.eat(TokenKind::Word)?;
        Ok(token.text().unwrap_or_default().to_string())
    }

    /// Creates an unexpected token error at the current token.
    fn unexpected(&self, expected: Expected) -> SyntaxError {
        let token = self.current_token();
        SyntaxError::UnexpectedToken {
            found: token.kind,
            expected,
            position: token.span.start,
        }
    }
}
