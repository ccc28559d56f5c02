use super::*;

impl Parser {
    /* Expressions */
    /// Parses a comparison chain: `expr (('==' | '<' | '>') expr)*`.
    /// Comparisons share one precedence level and associate to the left.
    pub fn parse_logical(&mut self) -> Result<Node, SyntaxError> {
        let mut lhs = self.parse_expr()?;

        while matches!(
            self.current_kind(),
            TokenKind::Equals | TokenKind::LThan | TokenKind::GThan
        ) {
            let op = self.next().kind;
            let rhs = self.parse_expr()?;
            lhs = Node::BinOp {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    /// Parses an additive expression: `term (('+' | '-') term)*`.
    pub fn parse_expr(&mut self) -> Result<Node, SyntaxError> {
        let mut lhs = self.parse_term()?;

        while matches!(self.current_kind(), TokenKind::Plus | TokenKind::Minus) {
            let op = self.next().kind;
            let rhs = self.parse_term()?;
            lhs = Node::BinOp {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    /// Parses a multiplicative expression: `factor (('*' | '/') factor)*`.
    fn parse_term(&mut self) -> Result<Node, SyntaxError> {
        let mut lhs = self.parse_factor()?;

        while matches!(self.current_kind(), TokenKind::Mul | TokenKind::Div) {
            let op = self.next().kind;
            let rhs = self.parse_factor()?;
            lhs = Node::BinOp {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> Result<Node, SyntaxError> {
        // NOTE: prefix operators are handled here
        match self.current_kind() {
            TokenKind::Integer => {
                let token = self.next();
                match token.value {
                    TokenValue::Integer(val) => Ok(Node::Integer(val)),
                    _ => Err(SyntaxError::UnexpectedToken {
                        found: token.kind,
                        expected: Expected::Expression,
                        position: token.span.start,
                    }),
                }
            }
            TokenKind::Plus | TokenKind::Minus => {
                let op = self.next().kind;
                Ok(Node::UnaryOp {
                    op,
                    arg: Box::new(self.parse_factor()?),
                })
            }
            TokenKind::LParen => {
                self.next();
                let node = self.parse_expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(node)
            }
            _ => self.parse_primary(),
        }
    }

    /// Parses a literal, a variable or a call expression.
    fn parse_primary(&mut self) -> Result<Node, SyntaxError> {
        match self.current_kind() {
            TokenKind::True => {
                self.next();
                Ok(Node::Bool(true))
            }
            TokenKind::False => {
                self.next();
                Ok(Node::Bool(false))
            }
            TokenKind::StringLiteral => {
                let token = self.next();
                Ok(Node::String(token.text().unwrap_or_default().to_string()))
            }
            TokenKind::Word if self.peek() == TokenKind::LParen => self.parse_fn_call(),
            TokenKind::Word => Ok(Node::Variable(self.eat_word()?)),
            TokenKind::Eof => Err(SyntaxError::EmptyExpression {
                position: self.current_token().span.start,
            }),
            _ => Err(self.unexpected(Expected::Expression)),
        }
    }

    /// Parses `WORD '(' [expr (',' expr)*] ')'`.
    pub(super) fn parse_fn_call(&mut self) -> Result<Node, SyntaxError> {
        let ident = self.eat_word()?;
        self.eat(TokenKind::LParen)?;

        let mut args = Vec::new();
        if self.current_kind() != TokenKind::RParen {
            args.push(self.parse_expr()?);
            while self.current_kind() == TokenKind::Sep {
                self.next();
                args.push(self.parse_expr()?);
            }
        }
        self.eat(TokenKind::RParen)?;

        Ok(Node::FunctionCall { ident, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use insta::assert_debug_snapshot;

    fn expr(source: &str) -> Node {
        Parser::new(tokenize(source).unwrap()).parse_expr().unwrap()
    }

    fn logical(source: &str) -> Node {
        Parser::new(tokenize(source).unwrap()).parse_logical().unwrap()
    }

    fn binop(lhs: Node, op: TokenKind, rhs: Node) -> Node {
        Node::BinOp {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    #[test]
    fn test_literal() {
        assert_eq!(expr("true"), Node::Bool(true));
        assert_eq!(expr("false"), Node::Bool(false));
        assert_eq!(expr("123"), Node::Integer(123));
        assert_eq!(expr(r#""str""#), Node::String("str".to_string()));
    }

    #[test]
    fn test_binary_expr() {
        assert_debug_snapshot!(expr("1 + 2 * 3"), @r###"
        BinOp {
            lhs: Integer(
                1,
            ),
            op: Plus,
            rhs: BinOp {
                lhs: Integer(
                    2,
                ),
                op: Mul,
                rhs: Integer(
                    3,
                ),
            },
        }
        "###);
        assert_eq!(
            expr("1 + 2 - 3 / 4"),
            binop(
                binop(Node::Integer(1), TokenKind::Plus, Node::Integer(2)),
                TokenKind::Minus,
                binop(Node::Integer(3), TokenKind::Div, Node::Integer(4)),
            )
        );
        // (2 * 2) * 2
        assert_eq!(
            expr("2 * 2 * 2"),
            binop(
                binop(Node::Integer(2), TokenKind::Mul, Node::Integer(2)),
                TokenKind::Mul,
                Node::Integer(2),
            )
        );
    }

    #[test]
    fn test_parenthesized() {
        assert_eq!(
            expr("(1 + 3) - 4"),
            binop(
                binop(Node::Integer(1), TokenKind::Plus, Node::Integer(3)),
                TokenKind::Minus,
                Node::Integer(4),
            )
        );
    }

    #[test]
    fn test_unary() {
        assert_debug_snapshot!(expr("-1 + +2"), @r###"
        BinOp {
            lhs: UnaryOp {
                op: Minus,
                arg: Integer(
                    1,
                ),
            },
            op: Plus,
            rhs: UnaryOp {
                op: Plus,
                arg: Integer(
                    2,
                ),
            },
        }
        "###);
        assert_eq!(
            expr("--a"),
            Node::UnaryOp {
                op: TokenKind::Minus,
                arg: Box::new(Node::UnaryOp {
                    op: TokenKind::Minus,
                    arg: Box::new(Node::Variable("a".to_string())),
                }),
            }
        );
    }

    #[test]
    fn test_logical_is_flat() {
        // (1 == 2) < 3, comparisons bind looser than arithmetic
        assert_eq!(
            logical("1 == 2 < 3 + 1"),
            binop(
                binop(Node::Integer(1), TokenKind::Equals, Node::Integer(2)),
                TokenKind::LThan,
                binop(Node::Integer(3), TokenKind::Plus, Node::Integer(1)),
            )
        );
    }

    #[test]
    fn test_expr_stops_at_comparison() {
        let mut parser = Parser::new(tokenize("a < b").unwrap());
        assert_eq!(parser.parse_expr().unwrap(), Node::Variable("a".to_string()));
        assert_eq!(parser.current_kind(), TokenKind::LThan);
    }

    #[test]
    fn test_fn_call() {
        assert_eq!(
            expr("foo()"),
            Node::FunctionCall {
                ident: "foo".to_string(),
                args: Vec::new(),
            }
        );
        assert_debug_snapshot!(expr("foo(1, bar, baz())"), @r###"
        FunctionCall {
            ident: "foo",
            args: [
                Integer(
                    1,
                ),
                Variable(
                    "bar",
                ),
                FunctionCall {
                    ident: "baz",
                    args: [],
                },
            ],
        }
        "###);
    }

    #[test]
    fn test_comparison_not_allowed_in_parens_or_args() {
        let err = Parser::new(tokenize("(1 == 1)").unwrap())
            .parse_logical()
            .unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::UnexpectedToken {
                found: TokenKind::Equals,
                expected: Expected::Token(TokenKind::RParen),
                ..
            }
        ));
    }

    #[test]
    fn test_empty_expression() {
        let err = Parser::new(tokenize("1 +").unwrap()).parse_expr().unwrap_err();
        assert_eq!(err, SyntaxError::EmptyExpression { position: 3 });
        let err = Parser::new(tokenize("").unwrap()).parse_expr().unwrap_err();
        assert_eq!(err, SyntaxError::EmptyExpression { position: 0 });
    }
}
