//! Parser implementation
//!
//! Recursive descent over a token sequence produced by the [`Lexer`].
//! Grammar violations surface as [`ParseError`] values that unwind to
//! [`Parser::parse`], which reports them, skips to the next statement
//! boundary, and carries on.
//!
//! ```text
//! program     → declaration* EOF ;
//! declaration → varDecl | statement ;
//! varDecl     → "var" IDENT ( "=" expression )? ";" ;
//! statement   → printStmt | block | exprStmt ;
//! block       → "{" declaration* "}" ;
//! printStmt   → "print" expression ";" ;
//! exprStmt    → expression ";" ;
//! expression  → assignment ;
//! assignment  → IDENT "=" assignment | equality ;
//! equality    → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison  → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term        → factor ( ( "-" | "+" ) factor )* ;
//! factor      → unary ( ( "/" | "*" ) factor )? ;
//! unary       → ( "!" | "-" ) unary | primary ;
//! primary     → "nil" | "true" | "false" | IDENT | NUMBER | STRING
//!             | "(" expression ")" ;
//! ```
//!
//! [`Lexer`]: crate::lexer::Lexer

use log::{debug, info, trace};

use super::ast::*;
use crate::error::{ErrorReporter, ParseError, SourceLocation};
use crate::lexer::{Literal, Token, TokenType};

type ParseResult<T> = Result<T, ParseError>;

/// Tokens that may begin a statement; recovery stops in front of them.
const SYNC_TOKENS: [TokenType; 8] = [
    TokenType::If,
    TokenType::For,
    TokenType::Var,
    TokenType::Fun,
    TokenType::Print,
    TokenType::While,
    TokenType::Class,
    TokenType::Return,
];

/// How a chain of `*` and `/` operators nests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Associativity {
    /// `2 * 3 * 4` is `2 * (3 * 4)`
    #[default]
    Right,
    /// `2 * 3 * 4` is `(2 * 3) * 4`
    Left,
}

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    pub factor_associativity: Associativity,
}

/// Parser for Pox source code
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    options: ParserOptions,
}

impl Parser {
    /// Create a new parser from tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_options(tokens, ParserOptions::default())
    }

    /// Create a new parser with explicit options
    ///
    /// A sequence that does not end in `Eof` gets one appended.
    pub fn with_options(mut tokens: Vec<Token>, options: ParserOptions) -> Self {
        let terminated = matches!(tokens.last(), Some(t) if t.token_type == TokenType::Eof);
        if !terminated {
            let location = tokens
                .last()
                .map(|t| t.location.clone())
                .unwrap_or_else(|| SourceLocation::at(1, 1));
            tokens.push(Token::eof(location));
        }

        info!("Parser created with {} tokens", tokens.len());

        Self {
            tokens,
            current: 0,
            options,
        }
    }

    /// Parse the whole token sequence into an AST
    ///
    /// Every error is handed to `reporter` once, after which parsing resumes
    /// at the next statement boundary. The returned AST holds the statements
    /// that parsed cleanly.
    pub fn parse<R: ErrorReporter + ?Sized>(mut self, reporter: &mut R) -> Ast {
        info!("Beginning parse phase");

        let mut statements = Vec::new();
        let mut errors = 0usize;

        while !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    errors += 1;
                    self.synchronize();
                    reporter.report(err);
                }
            }
        }

        info!(
            "Parse finished: {} statements, {} errors",
            statements.len(),
            errors
        );

        Ast { statements }
    }

    // ===== Declarations =====

    fn declaration(&mut self) -> ParseResult<Stmt> {
        trace!("declaration at token {}", self.current);

        if self.match_token(TokenType::Var) {
            self.var_declaration()
        } else {
            self.statement()
        }
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenType::Identifier, "expect variable name")?;

        let initializer = if self.match_token(TokenType::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenType::Semicolon, "expect ';' after variable declaration")?;

        Ok(Stmt::Var { name, initializer })
    }

    // ===== Statements =====

    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.match_token(TokenType::Print) {
            self.print_statement()
        } else if self.match_token(TokenType::LeftBrace) {
            self.block_statement()
        } else {
            self.expression_statement()
        }
    }

    fn block_statement(&mut self) -> ParseResult<Stmt> {
        let mut statements = Vec::new();

        while !self.check(TokenType::RightBrace) && !self.is_at_end() {
            statements.push(self.declaration()?);
        }

        self.consume(TokenType::RightBrace, "expect '}' after")?;

        Ok(Stmt::Block { statements })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let expression = self.expression()?;
        self.consume(TokenType::Semicolon, "expect ';' after value")?;
        Ok(Stmt::Print { expression })
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expression = self.expression()?;
        self.consume(TokenType::Semicolon, "expect ';' after expression")?;
        Ok(Stmt::Expression { expression })
    }

    // ===== Expressions =====

    fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.equality()?;

        if self.match_token(TokenType::Equal) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return match expr {
                Expr::Variable { name } => Ok(Expr::assign(name, value)),
                _ => Err(self.error_at(equals, "invalid assign target")),
            };
        }

        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        while self.match_tokens(&[TokenType::BangEqual, TokenType::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;

        while self.match_tokens(&[
            TokenType::Greater,
            TokenType::GreaterEqual,
            TokenType::Less,
            TokenType::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        while self.match_tokens(&[TokenType::Minus, TokenType::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        while self.match_tokens(&[TokenType::Slash, TokenType::Star]) {
            let operator = self.previous().clone();
            // Right associativity recurses into factor, which swallows the
            // rest of the chain; the loop then runs once.
            let right = match self.options.factor_associativity {
                Associativity::Right => self.factor()?,
                Associativity::Left => self.unary()?,
            };
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if self.match_tokens(&[TokenType::Bang, TokenType::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::unary(operator, right));
        }

        self.primary()
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if self.match_token(TokenType::Nil) {
            return Ok(Expr::literal(Literal::Nil));
        }
        if self.match_token(TokenType::True) {
            return Ok(Expr::literal(Literal::Boolean(true)));
        }
        if self.match_token(TokenType::False) {
            return Ok(Expr::literal(Literal::Boolean(false)));
        }

        if self.match_token(TokenType::Identifier) {
            return Ok(Expr::variable(self.previous().clone()));
        }

        if self.match_tokens(&[TokenType::Number, TokenType::String]) {
            let value = self.previous().literal.clone().unwrap_or(Literal::Nil);
            return Ok(Expr::literal(value));
        }

        if self.match_token(TokenType::LeftParen) {
            let expr = self.expression()?;
            self.consume(TokenType::RightParen, "expected ')' after expression")?;
            return Ok(Expr::grouping(expr));
        }

        Err(self.error("expect expression"))
    }

    // ===== Recovery =====

    /// Discard tokens until the start of what looks like the next statement
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().token_type == TokenType::Semicolon
                || SYNC_TOKENS.contains(&self.peek().token_type)
            {
                break;
            }

            self.advance();
        }

        debug!("Resynchronized at {}", self.peek().location);
    }

    fn error(&self, message: &str) -> ParseError {
        self.error_at(self.peek().clone(), message)
    }

    fn error_at(&self, token: Token, message: &str) -> ParseError {
        debug!("Parse error at {} ('{}'): {}", token.location, token.lexeme, message);
        ParseError::new(token, message)
    }

    // ===== Helper Methods =====

    fn match_token(&mut self, token_type: TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_tokens(&mut self, types: &[TokenType]) -> bool {
        for &t in types {
            if self.check(t) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn consume(&mut self, token_type: TokenType, message: &str) -> ParseResult<Token> {
        if self.check(token_type) {
            Ok(self.advance().clone())
        } else {
            Err(self.error(message))
        }
    }

    fn check(&self, token_type: TokenType) -> bool {
        if self.is_at_end() {
            false
        } else {
            self.peek().token_type == token_type
        }
    }

    /// Returns the consumed token, or `Eof` when already at the end
    fn advance(&mut self) -> &Token {
        if self.is_at_end() {
            return self.peek();
        }
        self.current += 1;
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }
}
