//! # Pox Language Front End
//!
//! Scanner and recursive-descent parser for Pox, a small dynamically-typed
//! scripting language.
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code
//! - `parser`: Parsing tokens into an Abstract Syntax Tree (AST), with
//!   statement-level error recovery
//! - `error`: Error types, the diagnostic sink, and colored diagnostics

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use error::{ConsoleReporter, ErrorReporter, ParseError, PoxError, PoxResult, SourceLocation};
pub use lexer::{Lexer, Token, TokenType};
pub use parser::{Ast, Parser, ParserOptions};

/// Version of the Pox front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan and parse a Pox program
///
/// Lexical errors abort and are returned. Parse errors go to `reporter` as
/// they occur and the statements that did parse are returned; check the
/// reporter to decide whether the program is usable.
pub fn parse_source<R: ErrorReporter + ?Sized>(
    source: &str,
    filename: Option<&str>,
    reporter: &mut R,
) -> PoxResult<Ast> {
    parse_source_with(source, filename, ParserOptions::default(), reporter)
}

/// Like [`parse_source`], with explicit parser options
pub fn parse_source_with<R: ErrorReporter + ?Sized>(
    source: &str,
    filename: Option<&str>,
    options: ParserOptions,
    reporter: &mut R,
) -> PoxResult<Ast> {
    let mut lexer = Lexer::new(source, filename);
    let tokens = lexer.tokenize()?;

    Ok(Parser::with_options(tokens, options).parse(reporter))
}
