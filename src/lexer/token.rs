//! Token definitions for the Pox language
//!
//! This module defines all token types used in lexical analysis.

use crate::error::SourceLocation;
use std::fmt;

/// A token in the Pox language
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    /// Decoded value for number and string literals
    pub literal: Option<Literal>,
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token
    pub fn new(
        token_type: TokenType,
        lexeme: String,
        literal: Option<Literal>,
        location: SourceLocation,
    ) -> Self {
        Self {
            token_type,
            lexeme,
            literal,
            location,
        }
    }

    /// Create an end-of-stream token at the given location
    pub fn eof(location: SourceLocation) -> Self {
        Self::new(TokenType::Eof, String::new(), None, location)
    }
}

/// One-line summary used by the token dump
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20} {:?}", self.token_type.to_string(), self.lexeme)?;
        if let Some(ref literal) = self.literal {
            write!(f, " = {}", literal)?;
        }
        write!(f, " @ {}", self.location)
    }
}

/// Token categories in the Pox language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Single-character tokens
    LeftParen,      // (
    RightParen,     // )
    LeftBrace,      // {
    RightBrace,     // }
    Comma,          // ,
    Dot,            // .
    Minus,          // -
    Plus,           // +
    Semicolon,      // ;
    Slash,          // /
    Star,           // *

    // One or two character tokens
    Bang,           // !
    BangEqual,      // !=
    Equal,          // =
    EqualEqual,     // ==
    Greater,        // >
    GreaterEqual,   // >=
    Less,           // <
    LessEqual,      // <=

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenType {
    /// Get the keyword token type for a word, if it is reserved
    pub fn keyword(s: &str) -> Option<Self> {
        match s {
            "and" => Some(Self::And),
            "class" => Some(Self::Class),
            "else" => Some(Self::Else),
            "false" => Some(Self::False),
            "fun" => Some(Self::Fun),
            "for" => Some(Self::For),
            "if" => Some(Self::If),
            "nil" => Some(Self::Nil),
            "or" => Some(Self::Or),
            "print" => Some(Self::Print),
            "return" => Some(Self::Return),
            "super" => Some(Self::Super),
            "this" => Some(Self::This),
            "true" => Some(Self::True),
            "var" => Some(Self::Var),
            "while" => Some(Self::While),
            _ => None,
        }
    }
}

/// Decoded literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Minus => write!(f, "-"),
            Self::Plus => write!(f, "+"),
            Self::Semicolon => write!(f, ";"),
            Self::Slash => write!(f, "/"),
            Self::Star => write!(f, "*"),
            Self::Bang => write!(f, "!"),
            Self::BangEqual => write!(f, "!="),
            Self::Equal => write!(f, "="),
            Self::EqualEqual => write!(f, "=="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::LessEqual => write!(f, "<="),
            Self::Identifier => write!(f, "identifier"),
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::And => write!(f, "keyword 'and'"),
            Self::Class => write!(f, "keyword 'class'"),
            Self::Else => write!(f, "keyword 'else'"),
            Self::False => write!(f, "keyword 'false'"),
            Self::Fun => write!(f, "keyword 'fun'"),
            Self::For => write!(f, "keyword 'for'"),
            Self::If => write!(f, "keyword 'if'"),
            Self::Nil => write!(f, "keyword 'nil'"),
            Self::Or => write!(f, "keyword 'or'"),
            Self::Print => write!(f, "keyword 'print'"),
            Self::Return => write!(f, "keyword 'return'"),
            Self::Super => write!(f, "keyword 'super'"),
            Self::This => write!(f, "keyword 'this'"),
            Self::True => write!(f, "keyword 'true'"),
            Self::Var => write!(f, "keyword 'var'"),
            Self::While => write!(f, "keyword 'while'"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenType::keyword("var"), Some(TokenType::Var));
        assert_eq!(TokenType::keyword("print"), Some(TokenType::Print));
        assert_eq!(TokenType::keyword("nil"), Some(TokenType::Nil));
        assert_eq!(TokenType::keyword("fun"), Some(TokenType::Fun));
        assert_eq!(TokenType::keyword("variable"), None);
        // keywords are case sensitive
        assert_eq!(TokenType::keyword("Print"), None);
    }

    #[test]
    fn test_token_type_display() {
        assert_eq!(TokenType::BangEqual.to_string(), "!=");
        assert_eq!(TokenType::LeftBrace.to_string(), "{");
        assert_eq!(TokenType::RightBrace.to_string(), "}");
        assert_eq!(TokenType::Number.to_string(), "number");
        assert_eq!(TokenType::Print.to_string(), "keyword 'print'");
        assert_eq!(TokenType::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_token_display() {
        let location = SourceLocation::at(2, 7);
        let number = Token::new(
            TokenType::Number,
            "1.5".to_string(),
            Some(Literal::Number(1.5)),
            location.clone(),
        );
        assert_eq!(number.to_string(), format!("{:<20} \"1.5\" = 1.5 @ 2:7", "number"));

        let keyword = Token::new(TokenType::Var, "var".to_string(), None, location);
        assert_eq!(keyword.to_string(), format!("{:<20} \"var\" @ 2:7", "keyword 'var'"));
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::Number(3.0).to_string(), "3");
        assert_eq!(Literal::Number(2.5).to_string(), "2.5");
        assert_eq!(Literal::String("hi".to_string()).to_string(), "\"hi\"");
        assert_eq!(Literal::Boolean(false).to_string(), "false");
        assert_eq!(Literal::Nil.to_string(), "nil");
    }
}
