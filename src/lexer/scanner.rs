//! Lexer/Scanner implementation for the Pox language
//!
//! This module implements lexical analysis, converting source code into tokens.

use crate::error::{PoxError, PoxResult, SourceLocation};
use super::token::{Token, TokenType, Literal};

/// Lexer for Pox source code
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
    filename: Option<String>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str, filename: Option<&str>) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            filename: filename.map(|s| s.to_string()),
        }
    }

    /// Tokenize the source code
    ///
    /// The returned sequence always ends with exactly one `Eof` token.
    pub fn tokenize(&mut self) -> PoxResult<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;
            self.scan_token()?;
        }

        self.tokens.push(Token::eof(self.current_location()));

        Ok(std::mem::take(&mut self.tokens))
    }

    /// Scan a single token
    fn scan_token(&mut self) -> PoxResult<()> {
        let c = self.advance();

        match c {
            ' ' | '\r' | '\t' => Ok(()),
            '\n' => {
                self.newline();
                Ok(())
            }

            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),

            '!' => {
                if self.match_char('=') {
                    self.add_token(TokenType::BangEqual)
                } else {
                    self.add_token(TokenType::Bang)
                }
            }
            '=' => {
                if self.match_char('=') {
                    self.add_token(TokenType::EqualEqual)
                } else {
                    self.add_token(TokenType::Equal)
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.add_token(TokenType::LessEqual)
                } else {
                    self.add_token(TokenType::Less)
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_token(TokenType::GreaterEqual)
                } else {
                    self.add_token(TokenType::Greater)
                }
            }

            '/' => {
                if self.match_char('/') {
                    // Comment runs to end of line
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                    Ok(())
                } else {
                    self.add_token(TokenType::Slash)
                }
            }

            '"' => self.scan_string(),

            c if c.is_ascii_digit() => self.scan_number(),

            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),

            _ => Err(self.error(&format!("Unexpected character '{}'", c))),
        }
    }

    /// Scan a string literal
    fn scan_string(&mut self) -> PoxResult<()> {
        while self.peek() != '"' && !self.is_at_end() {
            if self.advance() == '\n' {
                self.newline();
            }
        }

        if self.is_at_end() {
            return Err(self.error("Unterminated string"));
        }

        // Closing quote
        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        self.add_literal(TokenType::String, Some(Literal::String(value)))
    }

    /// Scan a number literal
    fn scan_number(&mut self) -> PoxResult<()> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let value = lexeme
            .parse::<f64>()
            .map_err(|_| self.error(&format!("Invalid number literal '{}'", lexeme)))?;

        self.add_literal(TokenType::Number, Some(Literal::Number(value)))
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) -> PoxResult<()> {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let token_type = TokenType::keyword(&lexeme).unwrap_or(TokenType::Identifier);

        self.add_token(token_type)
    }

    fn add_token(&mut self, token_type: TokenType) -> PoxResult<()> {
        self.add_literal(token_type, None)
    }

    /// Add a token spanning `start..current` to the token list
    fn add_literal(&mut self, token_type: TokenType, literal: Option<Literal>) -> PoxResult<()> {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let location =
            SourceLocation::new(self.start_line, self.start_column, self.filename.clone());
        self.tokens.push(Token::new(token_type, lexeme, literal, location));
        Ok(())
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn newline(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Check if the next character matches and consume it if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            self.column += 1;
            true
        }
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.filename.clone())
    }

    /// Create an error at the start of the current token
    fn error(&self, message: &str) -> PoxError {
        PoxError::lexer_error(
            message,
            SourceLocation::new(self.start_line, self.start_column, self.filename.clone()),
        )
    }
}
