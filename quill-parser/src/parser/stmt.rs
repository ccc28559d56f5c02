use super::*;

impl Parser {
    /// Parses a whole program. Empty input yields an empty [`Node::Program`].
    pub fn parse_program(&mut self) -> Result<Node, SyntaxError> {
        let body = self.parse_stmt_list(false)?;
        self.eat(TokenKind::Eof)?;
        Ok(Node::Program(body))
    }

    /// Parses statements for as long as the current token can start one.
    /// `return` only starts a statement when `allow_return` is set.
    fn parse_stmt_list(&mut self, allow_return: bool) -> Result<Vec<Node>, SyntaxError> {
        let mut body = Vec::new();
        loop {
            let stmt = match self.current_kind() {
                TokenKind::SetVar => self.parse_assignment()?,
                TokenKind::If => self.parse_flow()?,
                TokenKind::Func => self.parse_fn_declaration()?,
                TokenKind::Word => self.parse_fn_call()?,
                TokenKind::While => self.parse_while()?,
                TokenKind::Return if allow_return => self.parse_return_stmt()?,
                _ => break,
            };
            body.push(stmt);
        }
        Ok(body)
    }

    fn parse_block(&mut self, allow_return: bool) -> Result<Node, SyntaxError> {
        self.eat(TokenKind::BlockStart)?;
        let body = self.parse_stmt_list(allow_return)?;
        self.eat(TokenKind::BlockEnd)?;
        Ok(Node::Block(body))
    }

    fn parse_assignment(&mut self) -> Result<Node, SyntaxError> {
        self.eat(TokenKind::SetVar)?;
        let ident = self.eat_word()?;
        self.eat(TokenKind::Set)?;
        let value = self.parse_logical()?;
        Ok(Node::SetVariable {
            ident,
            value: Box::new(value),
        })
    }

    fn parse_flow(&mut self) -> Result<Node, SyntaxError> {
        self.eat(TokenKind::If)?;
        let predicate = self.parse_logical()?;
        let if_branch = Condition::new(predicate, self.parse_block(false)?);

        let mut elseif_branches = Vec::new();
        while self.current_kind() == TokenKind::ElseIf {
            self.next();
            // NOTE: `elseif` takes an arithmetic expression, not a comparison
            let predicate = self.parse_expr()?;
            elseif_branches.push(Condition::new(predicate, self.parse_block(false)?));
        }

        let else_branch = if self.current_kind() == TokenKind::Else {
            self.next();
            Condition::new(Node::Bool(true), self.parse_block(false)?)
        } else {
            Condition::always_void()
        };

        Ok(Node::Flow(Flow {
            if_branch,
            elseif_branches,
            else_branch,
        }))
    }

    fn parse_fn_declaration(&mut self) -> Result<Node, SyntaxError> {
        self.eat(TokenKind::Func)?;
        let ident = self.eat_word()?;

        self.eat(TokenKind::LParen)?;
        let mut params = Vec::new();
        if self.current_kind() != TokenKind::RParen {
            params.push(self.eat_word()?);
            while self.current_kind() == TokenKind::Sep {
                self.next();
                params.push(self.eat_word()?);
            }
        }
        self.eat(TokenKind::RParen)?;

        let body = self.parse_block(true)?;

        Ok(Node::FunctionDecl(FunctionDecl {
            ident,
            params,
            body: Box::new(body),
        }))
    }

    fn parse_while(&mut self) -> Result<Node, SyntaxError> {
        self.eat(TokenKind::While)?;
        let condition = self.parse_logical()?;
        let body = self.parse_block(false)?;
        Ok(Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }

    fn parse_return_stmt(&mut self) -> Result<Node, SyntaxError> {
        self.eat(TokenKind::Return)?;
        let value = self.parse_logical()?;
        Ok(Node::ReturnStatement(Box::new(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn program(source: &str) -> Result<Node, SyntaxError> {
        Parser::new(tokenize(source).unwrap()).parse_program()
    }

    #[test]
    fn test_statements_without_separators() {
        match program("var a = 1 var b = a print(b)").unwrap() {
            Node::Program(body) => assert_eq!(body.len(), 3),
            other => panic!("expected program, got {:?}", other),
        }
    }

    #[test]
    fn test_params() {
        assert!(matches!(
            program("func f(a b) { }"),
            Err(SyntaxError::UnexpectedToken {
                found: TokenKind::Word,
                expected: Expected::Token(TokenKind::RParen),
                ..
            })
        ));
        assert!(matches!(
            program("func f(1) { }"),
            Err(SyntaxError::UnexpectedToken {
                found: TokenKind::Integer,
                expected: Expected::Token(TokenKind::Word),
                ..
            })
        ));
    }

    #[test]
    fn test_unclosed_block() {
        assert!(matches!(
            program("while true { var a = 1"),
            Err(SyntaxError::UnexpectedToken {
                found: TokenKind::Eof,
                expected: Expected::Token(TokenKind::BlockEnd),
                ..
            })
        ));
    }

    #[test]
    fn test_return_takes_comparison() {
        let ast = program("func lt(a, b) { return a < b }").unwrap();
        let body = match ast {
            Node::Program(mut body) => match body.remove(0) {
                Node::FunctionDecl(decl) => decl.body,
                other => panic!("expected function, got {:?}", other),
            },
            other => panic!("expected program, got {:?}", other),
        };
        assert!(matches!(
            &*body,
            Node::Block(stmts) if matches!(&stmts[0], Node::ReturnStatement(value) if matches!(**value, Node::BinOp { op: TokenKind::LThan, .. }))
        ));
    }
}
