//! Abstract Syntax Tree definitions
//!
//! This module defines the AST node types for the Pox language. Every node
//! owns its children; tokens are kept where a later phase needs the name or
//! the operator's position.

use crate::lexer::{Literal, Token};

/// Root AST node representing a complete program
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ast {
    pub statements: Vec<Stmt>,
}

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Expression statement: `a = 1;`
    Expression {
        expression: Expr,
    },

    /// Print statement: `print a;`
    Print {
        expression: Expr,
    },

    /// Variable declaration: `var a = 1;`
    ///
    /// A missing initializer leaves the variable declared but uninitialized.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },

    /// Block statement: `{ ... }`
    Block {
        statements: Vec<Stmt>,
    },
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value
    Literal {
        value: Literal,
    },

    /// Variable reference
    Variable {
        name: Token,
    },

    /// Parenthesized expression
    Grouping {
        expression: Box<Expr>,
    },

    /// Unary operation: `-x`, `!x`
    Unary {
        operator: Token,
        right: Box<Expr>,
    },

    /// Binary operation
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// Assignment to a named variable
    Assign {
        name: Token,
        value: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: Literal) -> Self {
        Expr::Literal { value }
    }

    pub fn variable(name: Token) -> Self {
        Expr::Variable { name }
    }

    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping {
            expression: Box::new(expression),
        }
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }
}
