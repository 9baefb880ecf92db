//! Property tests for the public tokenize/parse contracts:
//! - token spans reconstruct the input exactly, for any input
//! - the mode stack is never empty
//! - the lexer is idempotent at end of input
//! - parsing never panics and the tree also reconstructs the input

use proptest::prelude::*;

use php_syntax::lexer::{self, TokenKind};
use php_syntax::parser;

fn rebuild_from_tokens(source: &str) -> String {
    lexer::lex(source)
        .iter()
        .map(|token| token.text(source))
        .collect()
}

proptest! {
    #[test]
    fn tokens_round_trip_any_text(source in ".*") {
        prop_assert_eq!(rebuild_from_tokens(&source), source);
    }

    #[test]
    fn tokens_round_trip_script_text(tail in "[\\x20-\\x7e\\n\\t]{0,80}") {
        let source = format!("<?php {tail}");
        prop_assert_eq!(rebuild_from_tokens(&source), source);
    }

    #[test]
    fn mode_stack_never_empty(tail in "[\\x20-\\x7e\\n]{0,80}") {
        let source = format!("<?php {tail}");
        for token in lexer::lex(&source) {
            prop_assert!(!token.mode_stack.is_empty());
        }
    }

    #[test]
    fn lexer_is_idempotent_at_eof(tail in "[\\x20-\\x7e\\n]{0,40}") {
        let source = format!("<?php {tail}");
        let mut lx = lexer::Lexer::new(&source);
        let mut last = lx.next_token();
        while last.kind != TokenKind::EndOfFile {
            last = lx.next_token();
        }
        let again = lx.next_token();
        prop_assert_eq!(again.kind, TokenKind::EndOfFile);
        prop_assert_eq!(again.offset, last.offset);
    }

    #[test]
    fn parse_never_panics_and_tree_round_trips(tail in "[\\x20-\\x7e\\n]{0,80}") {
        let source = format!("<?php {tail}");
        let tree = parser::parse(&source);
        let rebuilt: String = tree
            .tokens()
            .iter()
            .map(|token| token.text(&source))
            .collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn parse_tolerates_arbitrary_text(source in ".*") {
        // never panics, always yields a tree
        let tree = parser::parse(&source);
        let rebuilt: String = tree
            .tokens()
            .iter()
            .map(|token| token.text(&source))
            .collect();
        prop_assert_eq!(rebuilt, source);
    }
}
