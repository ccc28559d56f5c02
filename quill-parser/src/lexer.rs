use crate::error::LexError;
use logos::Logos;
use std::fmt;
use std::iter::Peekable;
use std::ops::Range;
use std::str::Chars;

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \n]+")]
pub enum TokenKind {
    // literals
    #[regex("[0-9]+")]
    Integer,
    #[token("\"", string_literal)]
    StringLiteral,

    // arithmetic
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Div,
    #[token("*")]
    Mul,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // language
    #[token("=")]
    Set,
    #[token("{")]
    BlockStart,
    #[token("}")]
    BlockEnd,
    #[token(",")]
    Sep,

    // words: any run of letters and numbers that does not start with an ASCII digit
    #[regex(r"[\p{L}\p{N}--[0-9]][\p{L}\p{N}]*")]
    Word,
    #[token("var")]
    SetVar,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // comparisons
    #[token("==")]
    Equals,
    #[token("<")]
    LThan,
    #[token(">")]
    GThan,

    // flow control
    #[token("if")]
    If,
    #[token("elseif")]
    ElseIf,
    #[token("else")]
    Else,
    #[token("while")]
    While,

    // functions
    #[token("func")]
    Func,
    #[token("return")]
    Return,

    /// Never matched by the lexer rules. [`Lexer`] produces it once the input is exhausted.
    Eof,
}

impl TokenKind {
    /// The name used when printing tokens and syntax errors.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Div => "DIV",
            TokenKind::Mul => "MUL",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Set => "SET",
            TokenKind::BlockStart => "BLOCK_START",
            TokenKind::BlockEnd => "BLOCK_END",
            TokenKind::Sep => "SEP",
            TokenKind::Word => "WORD",
            TokenKind::SetVar => "SETVAR",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Equals => "EQUALS",
            TokenKind::LThan => "LTHAN",
            TokenKind::GThan => "GTHAN",
            TokenKind::If => "IF",
            TokenKind::ElseIf => "ELSEIF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Func => "FUNC",
            TokenKind::Return => "RETURN",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal payload of a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Integer(i64),
    Text(String),
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Byte range of the token in the source.
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, span: Range<usize>) -> Self {
        Self { kind, value, span }
    }

    pub fn eof(position: usize) -> Self {
        Self::new(TokenKind::Eof, TokenValue::None, position..position)
    }

    /// Returns the text payload, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Integer(val) => write!(f, "{} {}", self.kind, val),
            TokenValue::Text(text) => write!(f, "{} {:?}", self.kind, text),
            TokenValue::None => write!(f, "{}", self.kind),
        }
    }
}

/// Produces [`Token`]s one at a time.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }

    /// Returns the next token. Once the input is exhausted, every call returns [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let kind = match self.inner.next() {
            Some(Ok(kind)) => kind,
            Some(Err(())) => {
                let position = self.inner.span().start;
                let ch = self.inner.source()[position..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnexpectedCharacter { ch, position });
            }
            None => return Ok(Token::eof(self.inner.source().len())),
        };

        let span = self.inner.span();
        let slice = self.inner.slice();
        let value = match kind {
            TokenKind::Integer => match slice.parse() {
                Ok(val) => TokenValue::Integer(val),
                Err(_) => {
                    return Err(LexError::IntegerTooLarge {
                        literal: slice.to_string(),
                        position: span.start,
                    })
                }
            },
            TokenKind::StringLiteral => {
                let (raw, _) = scan_string_body(&slice[1..]);
                match unescape(&raw) {
                    Ok(text) => TokenValue::Text(text),
                    Err(sequence) => {
                        return Err(LexError::InvalidEscape {
                            sequence,
                            position: span.start,
                        })
                    }
                }
            }
            _ => TokenValue::Text(slice.to_string()),
        };

        Ok(Token::new(kind, value, span))
    }
}

/// Lexes the whole `source`. The returned vector always ends with a single [`TokenKind::Eof`] token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break Ok(tokens);
        }
    }
}

/// Consumes the rest of a string literal after its opening quote.
fn string_literal(lex: &mut logos::Lexer<TokenKind>) {
    let (_, consumed) = scan_string_body(lex.remainder());
    lex.bump(consumed);
}

/// Scans a string body up to the first quote not preceded by a backslash.
/// `\"` collapses to `"`. Returns the collected text and the number of bytes consumed,
/// closing quote included. An unterminated literal runs to the end of the input.
fn scan_string_body(body: &str) -> (String, usize) {
    let mut text = String::new();
    let mut chars = body.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        match ch {
            '"' => return (text, index + 1),
            '\\' if matches!(chars.peek(), Some((_, '"'))) => {
                chars.next();
                text.push('"');
            }
            _ => text.push(ch),
        }
    }
    (text, body.len())
}

/// Decodes backslash escape sequences. Unknown escapes are kept verbatim.
/// On a malformed escape, returns the offending sequence.
fn unescape(raw: &str) -> Result<String, String> {
    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            text.push(ch);
            continue;
        }
        let escape = match chars.next() {
            Some(escape) => escape,
            None => return Err("\\".to_string()),
        };
        match escape {
            '\\' => text.push('\\'),
            '\'' => text.push('\''),
            '"' => text.push('"'),
            'a' => text.push('\u{07}'),
            'b' => text.push('\u{08}'),
            'f' => text.push('\u{0C}'),
            'n' => text.push('\n'),
            'r' => text.push('\r'),
            't' => text.push('\t'),
            'v' => text.push('\u{0B}'),
            '\n' => {} // line continuation
            'x' => text.push(hex_escape(&mut chars, 'x', 2)?),
            'u' => text.push(hex_escape(&mut chars, 'u', 4)?),
            'U' => text.push(hex_escape(&mut chars, 'U', 8)?),
            '0'..='7' => {
                let mut code = escape.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|ch| ch.to_digit(8)) {
                        Some(digit) => {
                            code = code * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                // at most 0o777, always a valid scalar value
                text.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            other => {
                text.push('\\');
                text.push(other);
            }
        }
    }
    Ok(text)
}

/// Reads exactly `len` hex digits and converts them to a `char`.
fn hex_escape(chars: &mut Peekable<Chars<'_>>, prefix: char, len: usize) -> Result<char, String> {
    let mut sequence = format!("\\{}", prefix);
    let mut code = 0u32;
    for _ in 0..len {
        match chars.peek().copied() {
            Some(ch) if ch.is_ascii_hexdigit() => {
                sequence.push(ch);
                code = code * 16 + ch.to_digit(16).unwrap_or(0);
                chars.next();
            }
            _ => return Err(sequence),
        }
    }
    char::from_u32(code).ok_or(sequence)
}
