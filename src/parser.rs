//! Tolerant recursive-descent parser for PHP.
//!
//! Builds a full-fidelity CST from the lexer's token stream: every token,
//! trivia included, ends up in the tree, and malformed input is recorded as
//! [`ErrorPhrase`] children rather than surfaced as errors. `parse` never
//! fails for any input text.
//!
//! ## Examples
//!
//! ```rust
//! use php_syntax::{parser, phrase::PhraseKind};
//!
//! let tree = parser::parse("<?php echo 1+2;");
//! assert_eq!(tree.kind, PhraseKind::StatementList);
//! assert!(tree.errors().is_empty());
//! ```

use crate::lexer::{self, Token, TokenKind};
use crate::phrase::{ErrorPhrase, Phrase, PhraseKind, SyntaxNode};

// NOTE: This module is split across multiple files using `include!` to keep
// all parser methods in the same Rust module (preserving privacy + call
// patterns) while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
