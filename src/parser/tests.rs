#[cfg(test)]
/// Parser unit tests.
///
/// These focus on tree shapes for specific syntactic forms, on both block
/// syntaxes of the control-flow statements, and on error recovery (single
/// error phrase per event, parsing continues, trees always round-trip).
mod tests {
    use super::*;

    /// Significant (non-trivia) children of a phrase.
    fn significant(phrase: &Phrase) -> Vec<&SyntaxNode> {
        phrase
            .children
            .iter()
            .filter(|child| match child {
                SyntaxNode::Token(token) => !token.is_trivia(),
                _ => true,
            })
            .collect()
    }

    fn rebuild(source: &str, tree: &Phrase) -> String {
        tree.tokens()
            .iter()
            .map(|token| token.text(source))
            .collect()
    }

    #[test]
    fn test_echo_addition_tree_shape() {
        let source = "<?php echo 1+2;";
        let tree = parse(source);

        assert_eq!(tree.kind, PhraseKind::StatementList);
        assert!(tree.errors().is_empty());

        let echo = tree.find(PhraseKind::EchoIntrinsic).expect("echo phrase");
        let additive = echo
            .find(PhraseKind::AdditiveExpression)
            .expect("additive phrase");
        let operands = significant(additive);
        assert_eq!(operands.len(), 3); // 1, +, 2
        assert_eq!(
            operands[0].as_token().map(|t| t.kind),
            Some(TokenKind::IntegerLiteral)
        );
        assert_eq!(operands[1].as_token().map(|t| t.kind), Some(TokenKind::Plus));
        assert_eq!(
            operands[2].as_token().map(|t| t.kind),
            Some(TokenKind::IntegerLiteral)
        );

        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_interpolated_string_phrase() {
        let source = "<?php $a = \"x$b\";";
        let tree = parse(source);
        assert!(tree.errors().is_empty());

        let string = tree
            .find(PhraseKind::DoubleQuotedStringLiteral)
            .expect("string phrase");
        let parts = string
            .find(PhraseKind::EncapsulatedVariableList)
            .expect("parts list");
        let children = significant(parts);
        assert_eq!(children.len(), 2);
        assert_eq!(
            children[0].as_token().map(|t| t.kind),
            Some(TokenKind::EncapsulatedAndWhitespace)
        );
        assert_eq!(
            children[1].as_phrase().map(|p| p.kind),
            Some(PhraseKind::SimpleVariable)
        );

        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_heredoc_statement() {
        let source = "<?php $s = <<<EOT\nhello\nEOT;\n";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert!(tree.find(PhraseKind::HeredocStringLiteral).is_some());
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_if_colon_form_consumes_endif() {
        let source = "<?php if ($a): echo 1; endif;";
        let tree = parse(source);
        assert!(tree.errors().is_empty());

        let if_statement = tree.find(PhraseKind::IfStatement).expect("if phrase");
        assert!(if_statement.find(PhraseKind::EchoIntrinsic).is_some());
        let endif_consumed = if_statement
            .tokens()
            .iter()
            .any(|token| token.kind == TokenKind::EndIf);
        assert!(endif_consumed);
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_if_colon_form_with_elseif_and_else() {
        let source = "<?php if ($a): echo 1; elseif ($b): echo 2; else: echo 3; endif;";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert!(tree.find(PhraseKind::ElseIfClauseList).is_some());
        assert!(tree.find(PhraseKind::ElseClause).is_some());
    }

    #[test]
    fn test_alternate_block_forms() {
        let sources = [
            "<?php while ($a): echo 1; endwhile;",
            "<?php for (;;): echo 1; endfor;",
            "<?php foreach ($a as $v): echo $v; endforeach;",
            "<?php switch ($a): case 1: echo 1; break; default: echo 2; endswitch;",
            "<?php declare(strict_types=1): echo 1; enddeclare;",
        ];

        for source in sources {
            let tree = parse(source);
            assert!(
                tree.errors().is_empty(),
                "unexpected errors for {source:?}: {:?}",
                tree.errors()
            );
            assert_eq!(rebuild(source, &tree), source);
        }
    }

    #[test]
    fn test_truncated_call_recovers_cleanly() {
        let source = "<?php foo(";
        let tree = parse(source);

        let errors = tree.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].expected, Some(TokenKind::CloseParenthesis));
        assert_eq!(errors[0].unexpected.kind, TokenKind::EndOfFile);
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_error_locality_single_error_phrase() {
        let source = "<?php $x = 1 @@ 2;";
        let tree = parse(source);

        assert_eq!(tree.errors().len(), 1, "exactly one error phrase");
        // the trailing ; is still consumed as a statement terminator
        let semicolon_consumed = tree
            .tokens()
            .iter()
            .any(|token| token.kind == TokenKind::Semicolon);
        assert!(semicolon_consumed);
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_missing_semicolon_before_close_tag_tolerated() {
        let source = "<?php echo 1 ?>";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_anonymous_function_statement_ambiguity() {
        let tree = parse("<?php function ($x) {};");
        assert!(
            tree.find(PhraseKind::AnonymousFunctionCreationExpression)
                .is_some()
        );
        assert!(tree.find(PhraseKind::FunctionDeclaration).is_none());

        let tree = parse("<?php function &($x) {};");
        assert!(
            tree.find(PhraseKind::AnonymousFunctionCreationExpression)
                .is_some()
        );

        let tree = parse("<?php function f($x) {}");
        assert!(tree.find(PhraseKind::FunctionDeclaration).is_some());
        assert!(
            tree.find(PhraseKind::AnonymousFunctionCreationExpression)
                .is_none()
        );
    }

    #[test]
    fn test_static_statement_ambiguity() {
        let tree = parse("<?php static $x = 1;");
        assert!(tree.find(PhraseKind::FunctionStaticDeclaration).is_some());

        let tree = parse("<?php static::foo();");
        assert!(tree.find(PhraseKind::ScopedCallExpression).is_some());
        assert!(tree.find(PhraseKind::FunctionStaticDeclaration).is_none());

        let tree = parse("<?php static function () {};");
        assert!(
            tree.find(PhraseKind::AnonymousFunctionCreationExpression)
                .is_some()
        );
    }

    #[test]
    fn test_goto_label_ambiguity() {
        let tree = parse("<?php a: goto a;");
        assert!(tree.find(PhraseKind::NamedLabelStatement).is_some());
        assert!(tree.find(PhraseKind::GotoStatement).is_some());
        assert!(tree.errors().is_empty());
    }

    #[test]
    fn test_precedence_multiplication_binds_tighter() {
        let tree = parse("<?php 1+2*3;");
        let additive = tree.find(PhraseKind::AdditiveExpression).expect("additive");
        let children = significant(additive);
        assert_eq!(children.len(), 3);
        assert_eq!(
            children[2].as_phrase().map(|p| p.kind),
            Some(PhraseKind::MultiplicativeExpression)
        );
    }

    #[test]
    fn test_left_associativity_groups_left() {
        let tree = parse("<?php 1-2-3;");
        let outer = tree.find(PhraseKind::AdditiveExpression).expect("additive");
        let children = significant(outer);
        assert_eq!(
            children[0].as_phrase().map(|p| p.kind),
            Some(PhraseKind::AdditiveExpression)
        );
    }

    #[test]
    fn test_right_associativity_of_assignment_and_power() {
        let tree = parse("<?php $a = $b = 1;");
        let outer = tree
            .find(PhraseKind::SimpleAssignmentExpression)
            .expect("assignment");
        let nested = significant(outer)
            .into_iter()
            .filter_map(|node| node.as_phrase())
            .any(|phrase| phrase.kind == PhraseKind::SimpleAssignmentExpression);
        assert!(nested, "assignment groups right-to-left");

        let tree = parse("<?php 2**3**4;");
        let outer = tree
            .find(PhraseKind::ExponentiationExpression)
            .expect("power");
        let children = significant(outer);
        assert_eq!(
            children[2].as_phrase().map(|p| p.kind),
            Some(PhraseKind::ExponentiationExpression)
        );
    }

    #[test]
    fn test_ternary_with_elided_middle() {
        let tree = parse("<?php $a ?: $b;");
        let ternary = tree.find(PhraseKind::TernaryExpression).expect("ternary");
        assert!(tree.errors().is_empty());
        // test, ?, :, alternative
        assert_eq!(significant(ternary).len(), 4);
    }

    #[test]
    fn test_instanceof_type_designator() {
        let tree = parse("<?php $a instanceof \\Foo\\Bar;");
        let instance_of = tree
            .find(PhraseKind::InstanceOfExpression)
            .expect("instanceof");
        assert!(
            instance_of
                .find(PhraseKind::InstanceofTypeDesignator)
                .is_some()
        );
        assert!(tree.errors().is_empty());
    }

    #[test]
    fn test_cast_expression() {
        let tree = parse("<?php $a = (int)$b;");
        assert!(tree.find(PhraseKind::CastExpression).is_some());
        assert!(tree.errors().is_empty());
    }

    #[test]
    fn test_by_ref_assignment() {
        let tree = parse("<?php $a = &$b;");
        assert!(tree.find(PhraseKind::ByRefAssignmentExpression).is_some());
        assert!(tree.errors().is_empty());
    }

    #[test]
    fn test_postfix_and_prefix_increment() {
        let tree = parse("<?php $a++; ++$a;");
        assert!(tree.find(PhraseKind::PostfixIncrementExpression).is_some());
        assert!(tree.find(PhraseKind::PrefixIncrementExpression).is_some());
        assert!(tree.errors().is_empty());
    }

    #[test]
    fn test_class_declaration_members() {
        let source = concat!(
            "<?php\n",
            "abstract class A extends B implements C, D {\n",
            "    public $x = 1, $y;\n",
            "    protected const K = 2;\n",
            "    public static function f(int $a, ...$rest): ?E {\n",
            "        return new static();\n",
            "    }\n",
            "    use T1, T2 {\n",
            "        T1::f insteadof T2;\n",
            "        T2::g as protected h;\n",
            "    }\n",
            "}\n",
        );
        let tree = parse(source);
        assert!(
            tree.errors().is_empty(),
            "unexpected errors: {:?}",
            tree.errors()
        );
        assert!(tree.find(PhraseKind::PropertyDeclaration).is_some());
        assert!(tree.find(PhraseKind::ClassConstDeclaration).is_some());
        assert!(tree.find(PhraseKind::MethodDeclaration).is_some());
        assert!(tree.find(PhraseKind::TraitPrecedence).is_some());
        assert!(tree.find(PhraseKind::TraitAlias).is_some());
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_interface_and_trait_declarations() {
        let source = "<?php interface I extends J { public function f(); } trait T { public function g() {} }";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert!(tree.find(PhraseKind::InterfaceDeclaration).is_some());
        assert!(tree.find(PhraseKind::TraitDeclaration).is_some());
    }

    #[test]
    fn test_namespace_and_use_declarations() {
        let source = "<?php namespace A\\B; use C\\D as E, F\\G; use function H\\i; use A\\{B\\C, const D};";
        let tree = parse(source);
        assert!(
            tree.errors().is_empty(),
            "unexpected errors: {:?}",
            tree.errors()
        );
        assert!(tree.find(PhraseKind::NamespaceDefinition).is_some());
        assert!(tree.find(PhraseKind::NamespaceUseGroupClauseList).is_some());
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_try_catch_finally() {
        let source = "<?php try { f(); } catch (A | B $e) { g(); } finally { h(); }";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert!(tree.find(PhraseKind::CatchClauseList).is_some());
        assert!(tree.find(PhraseKind::FinallyClause).is_some());
    }

    #[test]
    fn test_foreach_key_and_value() {
        let tree = parse("<?php foreach ($a as $k => $v) {}");
        assert!(tree.find(PhraseKind::ForeachKey).is_some());
        assert!(tree.find(PhraseKind::ForeachValue).is_some());
        assert!(tree.errors().is_empty());

        let tree = parse("<?php foreach ($a as &$v) {}");
        assert!(tree.find(PhraseKind::ForeachKey).is_none());
        assert!(tree.errors().is_empty());
    }

    #[test]
    fn test_array_creation_forms() {
        let source = "<?php $a = [1, 'k' => 2, &$b, ]; $c = array(3);";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert!(tree.find(PhraseKind::ArrayKey).is_some());
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_member_access_chains() {
        let source = "<?php $a->b->c()::$d[0]{1}::K;";
        let tree = parse(source);
        assert!(tree.find(PhraseKind::PropertyAccessExpression).is_some());
        assert!(tree.find(PhraseKind::MethodCallExpression).is_some());
        assert!(tree.find(PhraseKind::SubscriptExpression).is_some());
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_nullsafe_member_access() {
        let tree = parse("<?php $a?->b()?->c;");
        assert!(tree.find(PhraseKind::MethodCallExpression).is_some());
        assert!(tree.find(PhraseKind::PropertyAccessExpression).is_some());
        assert!(tree.errors().is_empty());
    }

    #[test]
    fn test_encapsulated_variable_forms() {
        let source = "<?php \"$a[0] $b->c {$d->e(1)} ${f} ${g[0]}\";";
        let tree = parse(source);
        assert!(
            tree.errors().is_empty(),
            "unexpected errors: {:?}",
            tree.errors()
        );
        assert!(tree.find(PhraseKind::EncapsulatedVariable).is_some());
        assert!(tree.find(PhraseKind::SubscriptExpression).is_some());
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_inline_text_round_trips() {
        let source = "leading<?php echo 1; ?>middle<?php echo 2; ?>trailing";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert!(tree.find(PhraseKind::InlineText).is_some());
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_trivia_preserved_in_tree() {
        let source = "<?php /* note */ echo 1; // eol\n";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        let has_comment = tree
            .tokens()
            .iter()
            .any(|token| token.kind == TokenKind::Comment);
        assert!(has_comment);
        assert_eq!(rebuild(source, &tree), source);
    }

    #[test]
    fn test_malformed_inputs_never_panic_and_round_trip() {
        let sources = [
            "",
            "<?php",
            "<?php }",
            "<?php class {",
            "<?php if (",
            "<?php $a = ;",
            "<?php foreach as) {}",
            "<?php function f( {",
            "<?php \"unterminated $x",
            "<?php <<<EOT\nnever closed",
            "<?php $a[1 = 2;",
            "<?php use ;",
            "<?php switch ($a) { junk }",
        ];

        for source in sources {
            let tree = parse(source);
            assert_eq!(
                rebuild(source, &tree),
                source,
                "tree must round-trip {source:?}"
            );
        }
    }

    #[test]
    fn test_yield_forms() {
        let source = "<?php function g() { yield; yield 1; yield 1 => 2; yield from h(); }";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert!(tree.find(PhraseKind::YieldExpression).is_some());
        assert!(tree.find(PhraseKind::YieldFromExpression).is_some());
    }

    #[test]
    fn test_list_isset_unset_intrinsics() {
        let source = "<?php list($a, $b) = $c; isset($a, $b); unset($a); empty($a);";
        let tree = parse(source);
        assert!(tree.find(PhraseKind::ListIntrinsic).is_some());
        assert!(tree.find(PhraseKind::IssetIntrinsic).is_some());
        assert!(tree.find(PhraseKind::UnsetIntrinsic).is_some());
        assert!(tree.find(PhraseKind::EmptyIntrinsic).is_some());
    }

    #[test]
    fn test_anonymous_class_with_arguments() {
        let source = "<?php $o = new class(1) extends A implements B { public function f() {} };";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert!(tree.find(PhraseKind::AnonymousClassDeclaration).is_some());
    }

    #[test]
    fn test_closure_use_clause() {
        let source = "<?php $f = function ($a) use (&$b, $c): int { return $a; };";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert!(tree.find(PhraseKind::AnonymousFunctionUseClause).is_some());
        assert!(tree.find(PhraseKind::ReturnType).is_some());
    }

    #[test]
    fn test_shell_command_expression() {
        let tree = parse("<?php `ls $dir`;");
        assert!(tree.find(PhraseKind::ShellCommandExpression).is_some());
        assert!(tree.errors().is_empty());
    }

    #[test]
    fn test_variable_variable_forms() {
        let source = "<?php $$a = 1; ${'b'} = 2;";
        let tree = parse(source);
        assert!(tree.errors().is_empty());
        assert_eq!(rebuild(source, &tree), source);
    }
}
