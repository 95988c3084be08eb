//! Diagnostic formatting for better error messages
//!
//! This module provides utilities for formatting error messages with
//! source code context.

use super::{PoxError, SourceLocation};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    error: PoxError,
    source: String,
}

impl Diagnostic {
    /// Create a diagnostic with source code context
    pub fn with_source(error: impl Into<PoxError>, source: &str) -> Self {
        Self {
            error: error.into(),
            source: source.to_string(),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(self.error.message());
        if let PoxError::ParseError(err) = &self.error {
            if err.is_at_end() {
                output.push_str(" (at end of input)");
            } else {
                output.push_str(&format!(" (at '{}')", err.token.lexeme));
            }
        }
        output.push('\n');

        let location = self.error.location();
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

        output.push_str(&self.format_source_context(location));

        output
    }

    /// Format source code context around the error location
    fn format_source_context(&self, location: &SourceLocation) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = self.source.lines().collect();

        if location.line == 0 || location.line > lines.len() {
            return output;
        }

        let line_idx = location.line - 1;
        let line_num_width = (location.line + 1).to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", location.line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        let indicator_padding =
            " ".repeat(line_num_width + 2 + location.column.saturating_sub(1));
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
