//! Prefix-form printer for the Pox AST
//!
//! Renders trees as parenthesized prefix expressions, e.g. `(+ 1 (* 2 3))`.
//! Used to inspect parser output; it is not a source formatter.

use std::fmt::{self, Display};

use super::ast::{Ast, Expr, Stmt};

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { value } => write!(f, "{}", value),
            Expr::Variable { name } => write!(f, "{}", name.lexeme),
            Expr::Grouping { expression } => write!(f, "(group {})", expression),
            Expr::Unary { operator, right } => write!(f, "({} {})", operator.lexeme, right),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme, left, right),
            Expr::Assign { name, value } => write!(f, "(= {} {})", name.lexeme, value),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression { expression } => write!(f, "(; {})", expression),
            Stmt::Print { expression } => write!(f, "(print {})", expression),
            Stmt::Var {
                name,
                initializer: Some(init),
            } => write!(f, "(var {} = {})", name.lexeme, init),
            Stmt::Var {
                name,
                initializer: None,
            } => write!(f, "(var {})", name.lexeme),
            Stmt::Block { statements } => {
                write!(f, "(block")?;
                for stmt in statements {
                    write!(f, " {}", stmt)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// One top-level statement per line
impl Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
