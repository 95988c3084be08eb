//! Error handling and diagnostics for the Pox language
//!
//! This module provides the error types shared by the scanner and the parser,
//! the diagnostic sink the parser reports into, and colored formatting of
//! errors with source context.

use std::fmt;

use crate::lexer::{Token, TokenType};

pub mod diagnostic;
pub mod reporter;

pub use diagnostic::Diagnostic;
pub use reporter::{ConsoleReporter, ErrorReporter};

/// Result type alias for Pox operations
pub type PoxResult<T> = Result<T, PoxError>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// A grammar violation found by the parser.
///
/// Pairs the token the parser was looking at with a description of what was
/// expected there. An `Eof` token stands for "end of input".
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        Self {
            token,
            message: message.into(),
        }
    }

    /// True when the error was raised at end of input
    pub fn is_at_end(&self) -> bool {
        self.token.token_type == TokenType::Eof
    }

    pub fn location(&self) -> &SourceLocation {
        &self.token.location
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_at_end() {
            write!(f, "[line {}] Error at end: {}", self.token.location.line, self.message)
        } else {
            write!(
                f,
                "[line {}] Error at '{}': {}",
                self.token.location.line, self.token.lexeme, self.message
            )
        }
    }
}

impl std::error::Error for ParseError {}

/// Main error type for the Pox front end
#[derive(Debug, Clone, PartialEq)]
pub enum PoxError {
    /// Lexical analysis error
    LexerError {
        message: String,
        location: SourceLocation,
    },
    /// Parsing error
    ParseError(ParseError),
}

impl PoxError {
    /// Create a new lexer error
    pub fn lexer_error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::LexerError {
            message: message.into(),
            location,
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::LexerError { .. } => "Lexer Error",
            Self::ParseError(_) => "Parse Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        match self {
            Self::LexerError { message, .. } => message,
            Self::ParseError(err) => &err.message,
        }
    }

    /// Get the source location
    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::LexerError { location, .. } => location,
            Self::ParseError(err) => err.location(),
        }
    }
}

impl From<ParseError> for PoxError {
    fn from(err: ParseError) -> Self {
        Self::ParseError(err)
    }
}

impl fmt::Display for PoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(err) if err.is_at_end() => {
                write!(f, "{}: {} at end of input", self.kind(), self.message())
            }
            Self::ParseError(err) => write!(
                f,
                "{}: {} at '{}' ({})",
                self.kind(),
                self.message(),
                err.token.lexeme,
                self.location()
            ),
            Self::LexerError { .. } => {
                write!(f, "{}: {} at {}", self.kind(), self.message(), self.location())
            }
        }
    }
}

impl std::error::Error for PoxError {}
