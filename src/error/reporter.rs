//! Diagnostic sinks for parse errors
//!
//! The parser never decides how errors are shown. It hands every
//! [`ParseError`] to an [`ErrorReporter`] exactly once, as it occurs.

use super::{Diagnostic, ParseError};

/// Receives parse errors one at a time
pub trait ErrorReporter {
    fn report(&mut self, error: ParseError);
}

impl ErrorReporter for Vec<ParseError> {
    fn report(&mut self, error: ParseError) {
        self.push(error);
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report(&mut self, error: ParseError) {
        (**self).report(error);
    }
}

/// Prints each error to stderr as a colored [`Diagnostic`] with the
/// offending source line
#[derive(Debug)]
pub struct ConsoleReporter {
    source: String,
    error_count: usize,
}

impl ConsoleReporter {
    pub fn with_source(source: &str) -> Self {
        Self {
            source: source.to_string(),
            error_count: 0,
        }
    }

    pub fn had_error(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Switch to new source text and forget earlier errors
    pub fn reset(&mut self, source: &str) {
        self.source.clear();
        self.source.push_str(source);
        self.error_count = 0;
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, error: ParseError) {
        self.error_count += 1;
        eprint!("{}", Diagnostic::with_source(error, &self.source));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceLocation;
    use crate::lexer::{Token, TokenType};

    fn error(message: &str) -> ParseError {
        let token = Token::new(TokenType::Eof, String::new(), None, SourceLocation::at(1, 1));
        ParseError::new(token, message)
    }

    fn report_through<R: ErrorReporter>(mut reporter: R, message: &str) {
        reporter.report(error(message));
    }

    #[test]
    fn test_vec_collects_in_order() {
        let mut errors: Vec<ParseError> = Vec::new();
        errors.report(error("first"));
        errors.report(error("second"));

        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_mutable_reference_forwards() {
        let mut errors: Vec<ParseError> = Vec::new();
        report_through(&mut errors, "forwarded");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_console_reporter_counts() {
        let mut reporter = ConsoleReporter::with_source("{ print 1;");
        assert!(!reporter.had_error());

        reporter.report(error("expect '}' after"));
        reporter.report(error("expect expression"));
        assert!(reporter.had_error());
        assert_eq!(reporter.error_count(), 2);

        reporter.reset("print 2;");
        assert!(!reporter.had_error());
        assert_eq!(reporter.source, "print 2;");

        reporter.report(error("expect ';' after value"));
        assert_eq!(reporter.error_count(), 1);
    }
}
