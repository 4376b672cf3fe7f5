use crate::ast::{BinOp, ElifBlock, Expr, Program, Stmt, Target, UnOp};
use crate::error::Error;
use crate::token::{Pos, Token, TokenKind};

/// Predictive recursive-descent parser. Two tokens of lookahead are enough to
/// tell `name = expr`, `name = list()` and `name.append(...)` apart.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // The lexer always terminates its output with Eof; keep that
        // invariant even for hand-built token vectors.
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            let pos = tokens.last().map(|t| t.pos).unwrap_or(Pos::new(1, 0));
            tokens.push(Token::new(TokenKind::Eof, pos));
        }
        Self { tokens, pos: 0 }
    }

    pub fn parse_program(mut self) -> Result<Program, Error> {
        let mut statements = Vec::new();
        loop {
            self.skip_newlines();
            match self.peek_kind() {
                TokenKind::Eof => break,
                TokenKind::Indent => {
                    return Err(Error::indentation(self.peek_pos(), "Unexpected indentation"));
                }
                _ => statements.push(self.parse_statement()?),
            }
        }
        Ok(Program { statements })
    }

    fn parse_statement(&mut self) -> Result<Stmt, Error> {
        match self.peek_kind() {
            TokenKind::Print => self.parse_print(),
            TokenKind::Break => {
                let pos = self.peek_pos();
                self.pos += 1;
                self.expect_terminator("break statement")?;
                Ok(Stmt::Break { pos })
            }
            TokenKind::Continue => {
                let pos = self.peek_pos();
                self.pos += 1;
                self.expect_terminator("continue statement")?;
                Ok(Stmt::Continue { pos })
            }
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Identifier(_) => {
                if self.peek_at(1).kind == TokenKind::Dot
                    && self.peek_at(2).kind == TokenKind::Append
                {
                    self.parse_list_append()
                } else if self.peek_at(1).kind == TokenKind::Assign
                    && self.peek_at(2).kind == TokenKind::List
                {
                    self.parse_list_decl()
                } else {
                    self.parse_assignment()
                }
            }
            TokenKind::List => Err(Error::reserved_keyword(
                self.peek_pos(),
                "'list' is a reserved keyword",
            )),
            TokenKind::Append => Err(Error::reserved_keyword(
                self.peek_pos(),
                "'append' is a reserved keyword",
            )),
            _ => Err(Error::syntax(self.peek_pos(), "Expected statement")),
        }
    }

    fn parse_print(&mut self) -> Result<Stmt, Error> {
        self.pos += 1; // 'print'
        self.expect(TokenKind::LeftParen, "Expected '(' in print statement")?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::RightParen, "Expected ')' in print statement")?;
        self.expect_terminator("print statement")?;
        Ok(Stmt::Print { value })
    }

    fn parse_list_decl(&mut self) -> Result<Stmt, Error> {
        let (name, pos) =
            self.expect_identifier("Expected identifier in list declaration statement")?;
        self.expect(TokenKind::Assign, "Expected '=' in list declaration statement")?;
        self.expect(TokenKind::List, "Expected 'list' in list declaration statement")?;
        self.expect(TokenKind::LeftParen, "Expected '(' in list declaration statement")?;
        self.expect(TokenKind::RightParen, "Expected ')' in list declaration statement")?;
        self.expect_terminator("list declaration statement")?;
        Ok(Stmt::ListDecl { name, pos })
    }

    fn parse_list_append(&mut self) -> Result<Stmt, Error> {
        let (name, pos) = self.expect_identifier("Expected identifier in list append statement")?;
        self.expect(TokenKind::Dot, "Expected '.' in list append statement")?;
        self.expect(TokenKind::Append, "Expected 'append' in list append statement")?;
        self.expect(TokenKind::LeftParen, "Expected '(' in list append statement")?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::RightParen, "Expected ')' in list append statement")?;
        self.expect_terminator("list append statement")?;
        Ok(Stmt::ListAppend { name, value, pos })
    }

    fn parse_assignment(&mut self) -> Result<Stmt, Error> {
        let target = self.parse_target()?;
        self.expect(TokenKind::Assign, "Expected '=' in assignment statement")?;
        let value = self.parse_expression()?;
        self.expect_terminator("assignment statement")?;
        Ok(Stmt::Assign { target, value })
    }

    fn parse_target(&mut self) -> Result<Target, Error> {
        let (name, pos) = self.expect_identifier("Expected identifier in location")?;
        if self.peek_kind() == &TokenKind::LeftBracket {
            self.pos += 1;
            let index = self.parse_expression()?;
            self.expect(
                TokenKind::RightBracket,
                "Expected ']' in list element location",
            )?;
            return Ok(Target::Index { name, index, pos });
        }
        Ok(Target::Name { name, pos })
    }

    fn parse_if(&mut self) -> Result<Stmt, Error> {
        self.pos += 1; // 'if'
        let cond = self.parse_expression()?;
        self.expect(TokenKind::Colon, "Expected ':' in compound statement")?;
        let then_block = self.parse_block()?;

        let mut elif_blocks = Vec::new();
        while self.peek_kind() == &TokenKind::Elif {
            self.pos += 1;
            let cond = self.parse_expression()?;
            self.expect(TokenKind::Colon, "Expected ':' in elif block")?;
            let block = self.parse_block()?;
            elif_blocks.push(ElifBlock { cond, block });
        }

        let else_block = if self.peek_kind() == &TokenKind::Else {
            self.pos += 1;
            self.expect(TokenKind::Colon, "Expected ':' in else block")?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Stmt::If {
            cond,
            then_block,
            elif_blocks,
            else_block,
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, Error> {
        self.pos += 1; // 'while'
        let cond = self.parse_expression()?;
        self.expect(TokenKind::Colon, "Expected ':' in compound statement")?;
        let body = self.parse_block()?;
        Ok(Stmt::While { cond, body })
    }

    fn parse_block(&mut self) -> Result<Vec<Stmt>, Error> {
        if self.peek_kind() != &TokenKind::Newline {
            return Err(Error::syntax(self.peek_pos(), "Expected newline in block"));
        }
        self.pos += 1;
        self.skip_newlines(); // blank lines before the body

        if self.peek_kind() != &TokenKind::Indent {
            return Err(Error::indentation(
                self.peek_pos(),
                "Expected indentation in block",
            ));
        }
        self.pos += 1;

        let mut statements = Vec::new();
        loop {
            self.skip_newlines();
            match self.peek_kind() {
                TokenKind::Dedent | TokenKind::Eof => break,
                TokenKind::Indent => {
                    return Err(Error::indentation(self.peek_pos(), "Unexpected indentation"));
                }
                _ => statements.push(self.parse_statement()?),
            }
        }
        if statements.is_empty() {
            return Err(Error::syntax(self.peek_pos(), "Expected statement in block"));
        }

        if self.peek_kind() != &TokenKind::Dedent {
            return Err(Error::syntax(
                self.peek_pos(),
                "Expected dedentation in block",
            ));
        }
        self.pos += 1;
        Ok(statements)
    }

    // Expressions, lowest precedence first. 'or' and 'and' associate to the
    // right; equality and comparison do not chain; the additive and
    // multiplicative levels associate to the left.

    fn parse_expression(&mut self) -> Result<Expr, Error> {
        let left = self.parse_join()?;
        if self.peek_kind() == &TokenKind::Or {
            let pos = self.peek_pos();
            self.pos += 1;
            let right = self.parse_expression()?;
            return Ok(Expr::Binary {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            });
        }
        Ok(left)
    }

    fn parse_join(&mut self) -> Result<Expr, Error> {
        let left = self.parse_equality()?;
        if self.peek_kind() == &TokenKind::And {
            let pos = self.peek_pos();
            self.pos += 1;
            let right = self.parse_join()?;
            return Ok(Expr::Binary {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            });
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, Error> {
        let left = self.parse_relation()?;
        let op = match self.peek_kind() {
            TokenKind::EqEq => BinOp::Eq,
            TokenKind::NotEq => BinOp::Ne,
            _ => return Ok(left),
        };
        let pos = self.peek_pos();
        self.pos += 1;
        let right = self.parse_relation()?;
        Ok(Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            pos,
        })
    }

    fn parse_relation(&mut self) -> Result<Expr, Error> {
        let left = self.parse_numexpr()?;
        let op = match self.peek_kind() {
            TokenKind::Less => BinOp::Lt,
            TokenKind::LessEq => BinOp::Le,
            TokenKind::Greater => BinOp::Gt,
            TokenKind::GreaterEq => BinOp::Ge,
            _ => return Ok(left),
        };
        let pos = self.peek_pos();
        self.pos += 1;
        let right = self.parse_numexpr()?;
        Ok(Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            pos,
        })
    }

    fn parse_numexpr(&mut self) -> Result<Expr, Error> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            let pos = self.peek_pos();
            self.pos += 1;
            let right = self.parse_term()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, Error> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::FloorDiv => BinOp::Div,
                _ => break,
            };
            let pos = self.peek_pos();
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                pos,
            };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, Error> {
        match self.peek_kind() {
            TokenKind::Not => {
                let pos = self.peek_pos();
                self.pos += 1;
                let expr = self.parse_unary()?;
                Ok(Expr::Unary {
                    op: UnOp::Not,
                    expr: Box::new(expr),
                    pos,
                })
            }
            TokenKind::Minus => {
                let pos = self.peek_pos();
                self.pos += 1;
                let expr = self.parse_unary()?;
                Ok(Expr::Unary {
                    op: UnOp::Neg,
                    expr: Box::new(expr),
                    pos,
                })
            }
            _ => self.parse_factor(),
        }
    }

    fn parse_factor(&mut self) -> Result<Expr, Error> {
        let pos = self.peek_pos();
        match self.peek_kind().clone() {
            TokenKind::LeftParen => {
                self.pos += 1;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RightParen, "Expected ')' in expression factor")?;
                Ok(expr)
            }
            TokenKind::Number(value) => {
                self.pos += 1;
                Ok(Expr::Number { value, pos })
            }
            TokenKind::Bool(value) => {
                self.pos += 1;
                Ok(Expr::Bool { value, pos })
            }
            TokenKind::Identifier(name) => {
                self.pos += 1;
                if self.peek_kind() == &TokenKind::LeftBracket {
                    self.pos += 1;
                    let index = self.parse_expression()?;
                    self.expect(
                        TokenKind::RightBracket,
                        "Expected ']' in list element location",
                    )?;
                    return Ok(Expr::Index {
                        name,
                        index: Box::new(index),
                        pos,
                    });
                }
                Ok(Expr::Name { name, pos })
            }
            _ => Err(Error::syntax(pos, "Expected factor")),
        }
    }

    // Utilities

    fn peek(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn peek_at(&self, offset: usize) -> &Token {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn peek_pos(&self) -> Pos {
        self.peek().pos
    }

    fn skip_newlines(&mut self) {
        while self.peek_kind() == &TokenKind::Newline {
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<(), Error> {
        if self.peek_kind() == &kind {
            self.pos += 1;
            return Ok(());
        }
        Err(Error::syntax(self.peek_pos(), message))
    }

    fn expect_identifier(&mut self, message: &str) -> Result<(String, Pos), Error> {
        let pos = self.peek_pos();
        match self.peek_kind().clone() {
            TokenKind::Identifier(name) => {
                self.pos += 1;
                Ok((name, pos))
            }
            _ => Err(Error::syntax(pos, message)),
        }
    }

    /// Simple statements end at a newline or at the end of input.
    fn expect_terminator(&mut self, what: &str) -> Result<(), Error> {
        match self.peek_kind() {
            TokenKind::Newline => {
                self.pos += 1;
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(Error::syntax(
                self.peek_pos(),
                format!("Expected newline at the end of {what}"),
            )),
        }
    }
}
