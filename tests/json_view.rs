//! The serialized views consumed by batch harnesses: token kinds and phrase
//! kinds render as their display names, tokens carry offset/length but not
//! the mode stack, and trees nest through `children`.

use php_syntax::{lexer, parser};

#[test]
fn token_json_shape() {
    let tokens = lexer::lex("<?php ;");
    let json = serde_json::to_value(&tokens[0]).unwrap();

    assert_eq!(json["kind"], "OpenTag");
    assert_eq!(json["offset"], 0);
    assert_eq!(json["length"], 5);
    assert!(json.get("mode_stack").is_none());
}

#[test]
fn tree_json_shape() {
    let tree = parser::parse("<?php echo 1;");
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["kind"], "StatementList");
    let children = json["children"].as_array().unwrap();
    // open tag section, interleaved whitespace, then the echo statement
    assert_eq!(children[0]["kind"], "InlineText");
    assert_eq!(children[1]["kind"], "Whitespace");
    assert_eq!(children[2]["kind"], "EchoIntrinsic");
}

#[test]
fn error_phrase_json_records_expectation() {
    let tree = parser::parse("<?php foo(");
    let json = serde_json::to_value(&tree).unwrap();
    let text = json.to_string();

    assert!(text.contains("\"Error\""));
    assert!(text.contains("\"CloseParenthesis\""));
}
