//! Diagnostics for malformed input.
//!
//! Parsing never fails and keeps no separate error list: malformed input is
//! embedded in the returned tree as error phrases. This module is the
//! consumer-side counterpart — walk a tree, turn each error phrase into a
//! [`SyntaxError`] with a labeled source span, ready for reporting.
//!
//! ## Examples
//!
//! ```rust
//! use php_syntax::{diagnostics, parser};
//!
//! let tree = parser::parse("<?php foo(");
//! let errors = diagnostics::collect(&tree);
//! assert_eq!(errors.len(), 1);
//! ```

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::TokenKind;
use crate::phrase::{ErrorPhrase, Phrase};

/// A syntax error derived from one error phrase in a parsed tree.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(php_syntax::syntax_error))]
pub struct SyntaxError {
    pub message: String,
    /// Span of the offending token; zero-length at end of input.
    #[label("unexpected token")]
    pub span: SourceSpan,
    /// Kind of the offending token.
    pub unexpected: TokenKind,
    /// The single kind that was expected, when one was.
    pub expected: Option<TokenKind>,
}

impl SyntaxError {
    fn from_error_phrase(error: &ErrorPhrase) -> Self {
        let message = match error.expected {
            Some(expected) => format!(
                "expected {}, found {}",
                expected.name(),
                error.unexpected.kind.name()
            ),
            None => format!("unexpected {}", error.unexpected.kind.name()),
        };

        Self {
            message,
            span: (error.unexpected.offset, error.unexpected.length).into(),
            unexpected: error.unexpected.kind,
            expected: error.expected,
        }
    }
}

/// Collect every error phrase in the tree as a [`SyntaxError`], in source
/// order. An empty result means the input parsed cleanly.
pub fn collect(root: &Phrase) -> Vec<SyntaxError> {
    root.errors()
        .into_iter()
        .map(SyntaxError::from_error_phrase)
        .collect()
}

/// 1-based line and column for a byte offset, for renderers that do not use
/// the miette report machinery.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;

    for (index, byte) in source.bytes().enumerate() {
        if index >= offset {
            break;
        }
        if byte == b'\n' {
            line += 1;
            line_start = index + 1;
        }
    }

    (line, offset - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn test_clean_parse_yields_no_errors() {
        let tree = parser::parse("<?php echo 1+2;");
        assert!(collect(&tree).is_empty());
    }

    #[test]
    fn test_missing_close_parenthesis_reported() {
        let tree = parser::parse("<?php foo(");
        let errors = collect(&tree);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].expected, Some(TokenKind::CloseParenthesis));
        assert_eq!(errors[0].unexpected, TokenKind::EndOfFile);
        assert!(errors[0].message.contains("CloseParenthesis"));
    }

    #[test]
    fn test_error_span_points_at_offending_token() {
        let source = "<?php $x = 1 @@ 2;";
        let tree = parser::parse(source);
        let errors = collect(&tree);

        assert_eq!(errors.len(), 1);
        let offset = errors[0].span.offset();
        assert_eq!(&source[offset..offset + 1], "@");
    }

    #[test]
    fn test_line_col() {
        let source = "line 1\nline 2\nline 3";

        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 7), (2, 1));
        assert_eq!(line_col(source, 10), (2, 4));
        assert_eq!(line_col(source, source.len()), (3, 7));
    }
}
