/// Parse PHP source text into a CST.
///
/// This is the main public entrypoint for parsing. It always returns a tree
/// (root kind [`PhraseKind::StatementList`]), even for invalid input:
/// malformed constructs are embedded as error phrases and parsing continues
/// past them. The only way this aborts is an internal dispatch invariant
/// break, which signals a parser-construction bug rather than bad input.
#[tracing::instrument(skip_all, fields(source_len = text.len()))]
pub fn parse(text: &str) -> Phrase {
    Parser::new(lexer::lex(text)).parse()
}
