//! Tolerant PHP syntax frontend: lexer, parser, CST, diagnostics.
//!
//! This crate turns PHP source text into a full-fidelity concrete syntax
//! tree for tooling — formatters, linters, language servers — that must
//! tolerate and report malformed input rather than abort on the first
//! error. Trivia (comments, doc comments, whitespace) is preserved in the
//! tree, so concatenating the spans of its tokens reconstructs the source
//! exactly.
//!
//! ## Notes
//! - This crate is intentionally syntax-only: no name resolution, no type
//!   checking, no file I/O. State is local to each lex/parse invocation, so
//!   running parses concurrently just means independent instances.
//! - `parse` never fails: malformed input shows up as error phrases in the
//!   returned tree, extractable via [`diagnostics::collect`].
//!
//! ## Examples
//! ```rust
//! use php_syntax::{lexer, parser, phrase::PhraseKind};
//!
//! let tokens = lexer::lex("<?php echo 1+2;");
//! let rebuilt: String = tokens
//!     .iter()
//!     .map(|t| t.text("<?php echo 1+2;"))
//!     .collect();
//! assert_eq!(rebuilt, "<?php echo 1+2;");
//!
//! let tree = parser::parse("<?php echo 1+2;");
//! assert_eq!(tree.kind, PhraseKind::StatementList);
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod phrase;
pub mod token_helpers;
