//! Parser module
//!
//! This module handles parsing tokens into an Abstract Syntax Tree (AST).

pub mod ast;
pub mod parser;
pub mod printer;

pub use ast::{Ast, Expr, Stmt};
pub use parser::{Associativity, Parser, ParserOptions};
