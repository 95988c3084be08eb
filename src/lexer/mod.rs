//! Lexical analysis module
//!
//! This module handles tokenization of Pox source code.

pub mod token;
pub mod scanner;

pub use token::{Token, TokenType, Literal};
pub use scanner::Lexer;
