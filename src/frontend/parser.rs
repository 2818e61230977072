use crate::ast::{Block, Condition, Expr, Factor, MulOp, Program, RelOp, Sign, Statement, Term};
use crate::config::parser::DEFAULT_MAX_NESTING_DEPTH;
use crate::errors::{SyntaxError, SyntaxResult};
use crate::frontend::token::{Keyword, Position, Token, TokenKind};

/// Recursive-descent parser over a scanned token slice.
///
/// The cursor only moves forward and there is one token of lookahead, so
/// every production either consumes what it recognises or fails on the spot.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Position,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_NESTING_DEPTH)
    }

    pub fn with_max_depth(tokens: &'a [Token], max_depth: usize) -> Self {
        let eof = tokens.last().map(Token::end_position).unwrap_or_default();
        Self {
            tokens,
            pos: 0,
            eof,
            depth: 0,
            max_depth,
        }
    }

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn error_expected(&self, what: impl AsRef<str>) -> SyntaxError {
        SyntaxError::expected(what, self.current(), self.eof)
    }

    fn expect(&mut self, kind: TokenKind) -> SyntaxResult<&'a Token> {
        if self.current_kind() != Some(kind) {
            return Err(self.error_expected(kind.describe()));
        }
        self.advance().ok_or_else(|| self.error_expected(kind.describe()))
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> SyntaxResult<&'a Token> {
        self.expect(TokenKind::Reserved(keyword))
    }

    fn optional(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.current_kind() == Some(kind) {
            self.advance()
        } else {
            None
        }
    }

    fn optional_keyword(&mut self, keyword: Keyword) -> Option<&'a Token> {
        self.optional(TokenKind::Reserved(keyword))
    }

    fn expect_identifier(&mut self) -> SyntaxResult<String> {
        Ok(self.expect(TokenKind::Identifier)?.text.clone())
    }

    fn expect_number(&mut self) -> SyntaxResult<String> {
        Ok(self.expect(TokenKind::Number)?.text.clone())
    }

    /// Run `production` one nesting level deeper, failing once the configured
    /// limit is reached rather than growing the call stack without bound.
    fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> SyntaxResult<T>) -> SyntaxResult<T> {
        if self.depth >= self.max_depth {
            return Err(match self.current() {
                Some(token) => SyntaxError::at_token("nesting too deep", token),
                None => SyntaxError::new("nesting too deep", self.eof),
            });
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    // "const" ident "=" number { "," ident "=" number } ";"
    fn parse_const_declarations(&mut self) -> SyntaxResult<Vec<(String, String)>> {
        let mut consts = Vec::new();
        loop {
            let name = self.expect_identifier()?;
            self.expect(TokenKind::Equals)?;
            let value = self.expect_number()?;
            consts.push((name, value));
            if self.optional(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(consts)
    }

    // "var" ident { "," ident } ";"
    fn parse_var_declarations(&mut self) -> SyntaxResult<Vec<String>> {
        let mut idents = vec![self.expect_identifier()?];
        while self.optional(TokenKind::Comma).is_some() {
            idents.push(self.expect_identifier()?);
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(idents)
    }

    // { "procedure" ident ";" block ";" }
    fn parse_procedure_declarations(&mut self) -> SyntaxResult<Vec<(String, Block)>> {
        let mut procedures = Vec::new();
        while self.optional_keyword(Keyword::Procedure).is_some() {
            let name = self.expect_identifier()?;
            tracing::trace!(procedure = %name, depth = self.depth, "parsing procedure");
            self.expect(TokenKind::Semicolon)?;
            let block = self.nested(Self::block)?;
            self.expect(TokenKind::Semicolon)?;
            procedures.push((name, block));
        }
        Ok(procedures)
    }

    /**
     * block = [ "const" ident "=" number { "," ident "=" number } ";" ]
     *         [ "var" ident { "," ident } ";" ]
     *         { "procedure" ident ";" block ";" } statement ;
     */
    fn block(&mut self) -> SyntaxResult<Block> {
        let constants = match self.optional_keyword(Keyword::Const) {
            Some(_) => self.parse_const_declarations()?,
            None => Vec::new(),
        };
        let variables = match self.optional_keyword(Keyword::Var) {
            Some(_) => self.parse_var_declarations()?,
            None => Vec::new(),
        };
        let procedures = self.parse_procedure_declarations()?;
        let body = self.statement()?;
        Ok(Block::new(constants, variables, procedures, body))
    }

    fn statement(&mut self) -> SyntaxResult<Statement> {
        self.nested(Self::statement_inner)
    }

    /**
     * statement = ident ":=" expression
     *           | "call" ident
     *           | "?" ident
     *           | "!" expression
     *           | "begin" statement { ";" statement } "end"
     *           | "if" condition "then" statement
     *           | "while" condition "do" statement ;
     */
    fn statement_inner(&mut self) -> SyntaxResult<Statement> {
        match self.current_kind() {
            Some(TokenKind::Identifier) => {
                let name = self.expect_identifier()?;
                self.expect(TokenKind::Assignment)?;
                let expr = self.expression()?;
                Ok(Statement::Assign { name, expr })
            }
            Some(TokenKind::Reserved(Keyword::Call)) => {
                self.expect_keyword(Keyword::Call)?;
                let name = self.expect_identifier()?;
                Ok(Statement::Call { name })
            }
            Some(TokenKind::QuestionMark) => {
                self.expect(TokenKind::QuestionMark)?;
                let name = self.expect_identifier()?;
                Ok(Statement::Read { name })
            }
            Some(TokenKind::Bang) => {
                self.expect(TokenKind::Bang)?;
                let expr = self.expression()?;
                Ok(Statement::Write { expr })
            }
            Some(TokenKind::Reserved(Keyword::Begin)) => {
                self.expect_keyword(Keyword::Begin)?;
                let mut statements = vec![self.statement()?];
                while self.optional(TokenKind::Semicolon).is_some() {
                    statements.push(self.statement()?);
                }
                self.expect_keyword(Keyword::End)?;
                Ok(Statement::Compound { statements })
            }
            Some(TokenKind::Reserved(Keyword::If)) => {
                self.expect_keyword(Keyword::If)?;
                let cond = self.condition()?;
                self.expect_keyword(Keyword::Then)?;
                let then = Box::new(self.statement()?);
                Ok(Statement::If { cond, then })
            }
            Some(TokenKind::Reserved(Keyword::While)) => {
                self.expect_keyword(Keyword::While)?;
                let cond = self.condition()?;
                self.expect_keyword(Keyword::Do)?;
                let body = Box::new(self.statement()?);
                Ok(Statement::While { cond, body })
            }
            _ => Err(self.error_expected("statement")),
        }
    }

    /**
     * condition = "odd" expression
     *           | expression rel-op expression ;
     */
    fn condition(&mut self) -> SyntaxResult<Condition> {
        if self.optional_keyword(Keyword::Odd).is_some() {
            let expr = self.expression()?;
            return Ok(Condition::Odd { expr });
        }
        let left = self.expression()?;
        let op = match self.current_kind().and_then(RelOp::from_token_kind) {
            Some(op) => {
                self.advance();
                op
            }
            None => return Err(self.error_expected("relational operator")),
        };
        let right = self.expression()?;
        Ok(Condition::Compare { left, op, right })
    }

    /**
     * expression = [ "+" | "-" ] term { ( "+" | "-" ) term } ;
     */
    fn expression(&mut self) -> SyntaxResult<Expr> {
        let mut terms = Vec::new();
        let first_sign = if self.optional(TokenKind::Minus).is_some() {
            Sign::Negative
        } else {
            self.optional(TokenKind::Plus);
            Sign::Positive
        };
        terms.push((first_sign, self.term()?));
        loop {
            let sign = match self.current_kind() {
                Some(TokenKind::Plus) => Sign::Positive,
                Some(TokenKind::Minus) => Sign::Negative,
                _ => break,
            };
            self.advance();
            terms.push((sign, self.term()?));
        }
        Ok(Expr::new(terms))
    }

    /**
     * term = factor { ( "*" | "/" ) factor } ;
     */
    fn term(&mut self) -> SyntaxResult<Term> {
        let first = self.factor()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.current_kind() {
                Some(TokenKind::Mult) => MulOp::Mul,
                Some(TokenKind::Div) => MulOp::Div,
                _ => break,
            };
            self.advance();
            rest.push((op, self.factor()?));
        }
        Ok(Term::new(first, rest))
    }

    /**
     * factor = ident | number | "(" expression ")" ;
     */
    fn factor(&mut self) -> SyntaxResult<Factor> {
        match self.current_kind() {
            Some(TokenKind::Identifier) => Ok(Factor::Ident(self.expect_identifier()?)),
            Some(TokenKind::Number) => Ok(Factor::NumberLiteral(self.expect_number()?)),
            _ => {
                self.expect(TokenKind::ParenOpen)?;
                let expr = self.nested(Self::expression)?;
                self.expect(TokenKind::ParenClose)?;
                Ok(Factor::Parenthesized(Box::new(expr)))
            }
        }
    }

    /**
     * program = block "." ;
     */
    fn program(&mut self) -> SyntaxResult<Program> {
        let block = self.block()?;
        self.expect(TokenKind::FullStop)?;
        if let Some(token) = self.current() {
            return Err(SyntaxError::at_token("expected end of input", token));
        }
        Ok(Program::new(block))
    }

    #[tracing::instrument(skip_all, fields(token_count = self.tokens.len()))]
    pub fn parse(&mut self) -> SyntaxResult<Program> {
        self.pos = 0;
        self.depth = 0;
        let program = self.program()?;
        tracing::debug!(procedures = program.block.procedures.len(), "parsed program");
        Ok(program)
    }
}

/// Parse a complete token sequence into a [`Program`].
pub fn parse(tokens: &[Token]) -> SyntaxResult<Program> {
    Parser::new(tokens).parse()
}
