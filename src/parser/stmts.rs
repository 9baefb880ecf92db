/// Statement parsing: the statement dispatch and every control-flow
/// construct, including the alternate colon-block syntax each
/// looping/branching statement supports.
///
/// Dispatch ambiguities that need extra lookahead:
/// - `function` directly before `(` (or `&` then `(`) starts an anonymous
///   function expression statement, not a function declaration.
/// - `static` starts a function-local static declaration only when
///   `static $x` is followed by `;`, `,`, a closing tag, or `=`.
/// - A bare name directly before `:` is a goto label.
impl Parser {
    fn statement_list(&mut self, break_on: &[TokenKind]) -> Phrase {
        self.list(
            PhraseKind::StatementList,
            |parser| parser.statement(),
            is_statement_start,
            Some(break_on),
            Some(STATEMENT_LIST_RECOVER_SET),
        )
    }

    fn statement(&mut self) -> SyntaxNode {
        let token = self.peek(0).clone();

        match token.kind {
            TokenKind::Namespace => SyntaxNode::Phrase(self.namespace_definition()),
            TokenKind::Use => SyntaxNode::Phrase(self.namespace_use_declaration()),
            TokenKind::HaltCompiler => SyntaxNode::Phrase(self.halt_compiler_statement()),
            TokenKind::Const => SyntaxNode::Phrase(self.const_declaration()),
            TokenKind::Function => {
                let after = self.peek(1).kind;
                if after == TokenKind::OpenParenthesis
                    || (after == TokenKind::Ampersand
                        && self.peek(2).kind == TokenKind::OpenParenthesis)
                {
                    // anonymous function without assignment
                    SyntaxNode::Phrase(self.expression_statement())
                } else {
                    SyntaxNode::Phrase(self.function_declaration())
                }
            }
            TokenKind::Class | TokenKind::Abstract | TokenKind::Final => {
                SyntaxNode::Phrase(self.class_declaration())
            }
            TokenKind::Trait => SyntaxNode::Phrase(self.trait_declaration()),
            TokenKind::Interface => SyntaxNode::Phrase(self.interface_declaration()),
            TokenKind::OpenBrace => SyntaxNode::Phrase(self.compound_statement()),
            TokenKind::If => SyntaxNode::Phrase(self.if_statement()),
            TokenKind::While => SyntaxNode::Phrase(self.while_statement()),
            TokenKind::Do => SyntaxNode::Phrase(self.do_statement()),
            TokenKind::For => SyntaxNode::Phrase(self.for_statement()),
            TokenKind::Switch => SyntaxNode::Phrase(self.switch_statement()),
            TokenKind::Break => SyntaxNode::Phrase(self.break_statement()),
            TokenKind::Continue => SyntaxNode::Phrase(self.continue_statement()),
            TokenKind::Return => SyntaxNode::Phrase(self.return_statement()),
            TokenKind::Global => SyntaxNode::Phrase(self.global_declaration()),
            TokenKind::Static => {
                if self.peek(1).kind == TokenKind::VariableName
                    && matches!(
                        self.peek(2).kind,
                        TokenKind::Semicolon
                            | TokenKind::Comma
                            | TokenKind::CloseTag
                            | TokenKind::Equals
                    )
                {
                    SyntaxNode::Phrase(self.function_static_declaration())
                } else {
                    SyntaxNode::Phrase(self.expression_statement())
                }
            }
            TokenKind::Text | TokenKind::OpenTag | TokenKind::CloseTag => {
                SyntaxNode::Phrase(self.inline_text())
            }
            TokenKind::ForEach => SyntaxNode::Phrase(self.foreach_statement()),
            TokenKind::Declare => SyntaxNode::Phrase(self.declare_statement()),
            TokenKind::Try => SyntaxNode::Phrase(self.try_statement()),
            TokenKind::Throw => SyntaxNode::Phrase(self.throw_statement()),
            TokenKind::Goto => SyntaxNode::Phrase(self.goto_statement()),
            TokenKind::Echo | TokenKind::OpenTagEcho => SyntaxNode::Phrase(self.echo_intrinsic()),
            TokenKind::Unset => SyntaxNode::Phrase(self.unset_intrinsic()),
            TokenKind::Semicolon => SyntaxNode::Phrase(self.null_statement()),
            TokenKind::Name if self.peek(1).kind == TokenKind::Colon => {
                SyntaxNode::Phrase(self.named_label_statement())
            }
            _ => SyntaxNode::Phrase(self.expression_statement()),
        }
    }

    /// Raw text between script sections, with the surrounding tag tokens.
    fn inline_text(&mut self) -> Phrase {
        self.start(PhraseKind::InlineText, false);

        self.optional(TokenKind::CloseTag);
        self.optional(TokenKind::Text);
        self.optional(TokenKind::OpenTag);

        self.end()
    }

    fn null_statement(&mut self) -> Phrase {
        self.start(PhraseKind::NullStatement, false);
        self.next(false); // ;

        self.end()
    }

    fn compound_statement(&mut self) -> Phrase {
        self.start(PhraseKind::CompoundStatement, false);
        self.expect(TokenKind::OpenBrace);

        if is_statement_start(self.peek(0)) {
            let statements = self.statement_list(&[TokenKind::CloseBrace]);
            self.push_child(statements.into());
        }

        self.expect(TokenKind::CloseBrace);

        self.end()
    }

    fn expression_statement(&mut self) -> Phrase {
        self.start(PhraseKind::ExpressionStatement, false);

        let expression = self.expression(0);
        self.push_child(expression);
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    // ========================================================================
    // if / while / do
    // ========================================================================

    fn if_statement(&mut self) -> Phrase {
        self.start(PhraseKind::IfStatement, false);
        self.next(false); // if
        self.expect(TokenKind::OpenParenthesis);
        let condition = self.expression(0);
        self.push_child(condition);
        self.expect(TokenKind::CloseParenthesis);

        let token = self.peek(0).clone();
        let mut alternate = false;

        if token.kind == TokenKind::Colon {
            self.next(false);
            let body = self.statement_list(&[
                TokenKind::ElseIf,
                TokenKind::Else,
                TokenKind::EndIf,
            ]);
            self.push_child(body.into());
            alternate = true;
        } else if is_statement_start(&token) {
            let body = self.statement();
            self.push_child(body);
        } else {
            self.error(None);
        }

        if self.peek(0).kind == TokenKind::ElseIf {
            let clauses = self.list(
                PhraseKind::ElseIfClauseList,
                move |parser| {
                    if alternate {
                        parser.else_if_clause_alternate()
                    } else {
                        parser.else_if_clause()
                    }
                },
                is_else_if_clause_start,
                None,
                None,
            );
            self.push_child(clauses.into());
        }

        if self.peek(0).kind == TokenKind::Else {
            let clause = if alternate {
                self.else_clause_alternate()
            } else {
                self.else_clause()
            };
            self.push_child(clause.into());
        }

        if alternate {
            self.expect(TokenKind::EndIf);
            self.expect(TokenKind::Semicolon);
        }

        self.end()
    }

    fn else_if_clause(&mut self) -> SyntaxNode {
        self.start(PhraseKind::ElseIfClause, false);
        self.next(false); // elseif
        self.expect(TokenKind::OpenParenthesis);
        let condition = self.expression(0);
        self.push_child(condition);
        self.expect(TokenKind::CloseParenthesis);
        let body = self.statement();
        self.push_child(body);

        self.end_node()
    }

    fn else_if_clause_alternate(&mut self) -> SyntaxNode {
        self.start(PhraseKind::ElseIfClause, false);
        self.next(false); // elseif
        self.expect(TokenKind::OpenParenthesis);
        let condition = self.expression(0);
        self.push_child(condition);
        self.expect(TokenKind::CloseParenthesis);
        self.expect(TokenKind::Colon);
        let body =
            self.statement_list(&[TokenKind::EndIf, TokenKind::Else, TokenKind::ElseIf]);
        self.push_child(body.into());

        self.end_node()
    }

    fn else_clause(&mut self) -> Phrase {
        self.start(PhraseKind::ElseClause, false);
        self.next(false); // else
        let body = self.statement();
        self.push_child(body);

        self.end()
    }

    fn else_clause_alternate(&mut self) -> Phrase {
        self.start(PhraseKind::ElseClause, false);
        self.next(false); // else
        self.expect(TokenKind::Colon);
        let body = self.statement_list(&[TokenKind::EndIf]);
        self.push_child(body.into());

        self.end()
    }

    fn while_statement(&mut self) -> Phrase {
        self.start(PhraseKind::WhileStatement, false);
        self.next(false); // while
        self.expect(TokenKind::OpenParenthesis);
        let condition = self.expression(0);
        self.push_child(condition);
        self.expect(TokenKind::CloseParenthesis);

        let token = self.peek(0).clone();

        if token.kind == TokenKind::Colon {
            self.next(false);
            let body = self.statement_list(&[TokenKind::EndWhile]);
            self.push_child(body.into());
            self.expect(TokenKind::EndWhile);
            self.expect(TokenKind::Semicolon);
        } else if is_statement_start(&token) {
            let body = self.statement();
            self.push_child(body);
        } else {
            self.error(None);
        }

        self.end()
    }

    fn do_statement(&mut self) -> Phrase {
        self.start(PhraseKind::DoStatement, false);
        self.next(false); // do
        let body = self.statement();
        self.push_child(body);
        self.expect(TokenKind::While);
        self.expect(TokenKind::OpenParenthesis);
        let condition = self.expression(0);
        self.push_child(condition);
        self.expect(TokenKind::CloseParenthesis);
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    // ========================================================================
    // for / foreach
    // ========================================================================

    fn for_expression_group(&mut self, kind: PhraseKind, break_on: &[TokenKind]) -> Phrase {
        self.delimited_list(
            kind,
            |parser| parser.expression(0),
            is_expression_start,
            TokenKind::Comma,
            Some(break_on),
            false,
        )
    }

    fn for_statement(&mut self) -> Phrase {
        self.start(PhraseKind::ForStatement, false);
        self.next(false); // for
        self.expect(TokenKind::OpenParenthesis);

        if is_expression_start(self.peek(0)) {
            let initialiser =
                self.for_expression_group(PhraseKind::ForInitialiser, &[TokenKind::Semicolon]);
            self.push_child(initialiser.into());
        }

        self.expect(TokenKind::Semicolon);

        if is_expression_start(self.peek(0)) {
            let control =
                self.for_expression_group(PhraseKind::ForControl, &[TokenKind::Semicolon]);
            self.push_child(control.into());
        }

        self.expect(TokenKind::Semicolon);

        if is_expression_start(self.peek(0)) {
            let end_of_loop = self
                .for_expression_group(PhraseKind::ForEndOfLoop, &[TokenKind::CloseParenthesis]);
            self.push_child(end_of_loop.into());
        }

        self.expect(TokenKind::CloseParenthesis);

        let token = self.peek(0).clone();

        if token.kind == TokenKind::Colon {
            self.next(false);
            let body = self.statement_list(&[TokenKind::EndFor]);
            self.push_child(body.into());
            self.expect(TokenKind::EndFor);
            self.expect(TokenKind::Semicolon);
        } else if is_statement_start(self.peek(0)) {
            let body = self.statement();
            self.push_child(body);
        } else {
            self.error(None);
        }

        self.end()
    }

    fn foreach_statement(&mut self) -> Phrase {
        self.start(PhraseKind::ForeachStatement, false);
        self.next(false); // foreach
        self.expect(TokenKind::OpenParenthesis);
        let collection = self.foreach_collection();
        self.push_child(collection.into());
        self.expect(TokenKind::As);

        let key_or_value = if self.peek(0).kind == TokenKind::Ampersand {
            self.foreach_value()
        } else {
            self.foreach_key_or_value()
        };
        let is_key = key_or_value.kind == PhraseKind::ForeachKey;
        self.push_child(key_or_value.into());

        if is_key {
            let value = self.foreach_value();
            self.push_child(value.into());
        }

        self.expect(TokenKind::CloseParenthesis);

        let token = self.peek(0).clone();

        if token.kind == TokenKind::Colon {
            self.next(false);
            let body = self.statement_list(&[TokenKind::EndForeach]);
            self.push_child(body.into());
            self.expect(TokenKind::EndForeach);
            self.expect(TokenKind::Semicolon);
        } else if is_statement_start(&token) {
            let body = self.statement();
            self.push_child(body);
        } else {
            self.error(None);
        }

        self.end()
    }

    fn foreach_collection(&mut self) -> Phrase {
        self.start(PhraseKind::ForeachCollection, false);
        let expression = self.expression(0);
        self.push_child(expression);

        self.end()
    }

    /// Parsed as a value first; a following `=>` reclassifies it as the key.
    fn foreach_key_or_value(&mut self) -> Phrase {
        self.start(PhraseKind::ForeachValue, false);
        let expression = self.expression(0);
        self.push_child(expression);

        if self.peek(0).kind == TokenKind::FatArrow {
            self.next(false);
            self.set_top_kind(PhraseKind::ForeachKey);
        }

        self.end()
    }

    fn foreach_value(&mut self) -> Phrase {
        self.start(PhraseKind::ForeachValue, false);
        self.optional(TokenKind::Ampersand);
        let expression = self.expression(0);
        self.push_child(expression);

        self.end()
    }

    // ========================================================================
    // switch
    // ========================================================================

    fn switch_statement(&mut self) -> Phrase {
        self.start(PhraseKind::SwitchStatement, false);
        self.next(false); // switch
        self.expect(TokenKind::OpenParenthesis);
        let subject = self.expression(0);
        self.push_child(subject);
        self.expect(TokenKind::CloseParenthesis);

        let opener = self.expect_one_of(&[TokenKind::Colon, TokenKind::OpenBrace]);
        let is_alternate = opener.as_ref().is_some_and(|t| t.kind == TokenKind::Colon);
        let case_token = self.peek(0).kind;

        if case_token == TokenKind::Case || case_token == TokenKind::Default {
            let case_break_on = if is_alternate {
                TokenKind::EndSwitch
            } else {
                TokenKind::CloseBrace
            };
            let cases = self.case_statements(case_break_on);
            self.push_child(cases.into());
        }

        if is_alternate {
            self.expect(TokenKind::EndSwitch);
            self.expect(TokenKind::Semicolon);
        } else {
            self.expect(TokenKind::CloseBrace);
        }

        self.end()
    }

    fn case_statements(&mut self, break_on: TokenKind) -> Phrase {
        self.start(PhraseKind::CaseStatementList, false);
        let case_break_on = [TokenKind::Case, TokenKind::Default, break_on];

        loop {
            let token = self.peek(0).kind;

            if token == TokenKind::Case {
                let case = self.case_statement(&case_break_on);
                self.push_child(case.into());
            } else if token == TokenKind::Default {
                let default = self.default_statement(&case_break_on);
                self.push_child(default.into());
            } else if token == break_on {
                break;
            } else {
                self.error(None);
                break;
            }
        }

        self.end()
    }

    fn case_statement(&mut self, break_on: &[TokenKind]) -> Phrase {
        self.start(PhraseKind::CaseStatement, false);
        self.next(false); // case
        let expression = self.expression(0);
        self.push_child(expression);
        self.expect_one_of(&[TokenKind::Colon, TokenKind::Semicolon]);

        if is_statement_start(self.peek(0)) {
            let statements = self.statement_list(break_on);
            self.push_child(statements.into());
        }

        self.end()
    }

    fn default_statement(&mut self, break_on: &[TokenKind]) -> Phrase {
        self.start(PhraseKind::DefaultStatement, false);
        self.next(false); // default
        self.expect_one_of(&[TokenKind::Colon, TokenKind::Semicolon]);

        if is_statement_start(self.peek(0)) {
            let statements = self.statement_list(break_on);
            self.push_child(statements.into());
        }

        self.end()
    }

    // ========================================================================
    // declare
    // ========================================================================

    fn declare_statement(&mut self) -> Phrase {
        self.start(PhraseKind::DeclareStatement, false);
        self.next(false); // declare
        self.expect(TokenKind::OpenParenthesis);
        let directive = self.declare_directive();
        self.push_child(directive.into());
        self.expect(TokenKind::CloseParenthesis);

        let token = self.peek(0).clone();

        if token.kind == TokenKind::Colon {
            self.next(false);
            let body = self.statement_list(&[TokenKind::EndDeclare]);
            self.push_child(body.into());
            self.expect(TokenKind::EndDeclare);
            self.expect(TokenKind::Semicolon);
        } else if is_statement_start(&token) {
            let body = self.statement();
            self.push_child(body);
        } else if token.kind == TokenKind::Semicolon {
            self.next(false);
        } else {
            self.error(None);
        }

        self.end()
    }

    fn declare_directive(&mut self) -> Phrase {
        self.start(PhraseKind::DeclareDirective, false);
        self.expect(TokenKind::Name);
        self.expect(TokenKind::Equals);
        self.expect_one_of(&[
            TokenKind::IntegerLiteral,
            TokenKind::FloatingLiteral,
            TokenKind::StringLiteral,
        ]);

        self.end()
    }

    // ========================================================================
    // try / throw / goto / labels
    // ========================================================================

    fn try_statement(&mut self) -> Phrase {
        self.start(PhraseKind::TryStatement, false);
        self.next(false); // try
        let body = self.compound_statement();
        self.push_child(body.into());

        let token = self.peek(0).kind;

        if token == TokenKind::Catch {
            let catch_list = self.list(
                PhraseKind::CatchClauseList,
                |parser| parser.catch_clause(),
                |token| token.kind == TokenKind::Catch,
                None,
                None,
            );
            self.push_child(catch_list.into());
        } else if token != TokenKind::Finally {
            self.error(None);
        }

        if self.peek(0).kind == TokenKind::Finally {
            let finally = self.finally_clause();
            self.push_child(finally.into());
        }

        self.end()
    }

    fn catch_clause(&mut self) -> SyntaxNode {
        self.start(PhraseKind::CatchClause, false);
        self.next(false); // catch
        self.expect(TokenKind::OpenParenthesis);

        let names = self.delimited_list(
            PhraseKind::CatchNameList,
            |parser| parser.qualified_name(),
            is_qualified_name_start,
            TokenKind::Bar,
            Some(&[TokenKind::VariableName]),
            false,
        );
        self.push_child(names.into());
        self.expect(TokenKind::VariableName);
        self.expect(TokenKind::CloseParenthesis);
        let body = self.compound_statement();
        self.push_child(body.into());

        self.end_node()
    }

    fn finally_clause(&mut self) -> Phrase {
        self.start(PhraseKind::FinallyClause, false);
        self.next(false); // finally
        let body = self.compound_statement();
        self.push_child(body.into());

        self.end()
    }

    fn throw_statement(&mut self) -> Phrase {
        self.start(PhraseKind::ThrowStatement, false);
        self.next(false); // throw
        let expression = self.expression(0);
        self.push_child(expression);
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn goto_statement(&mut self) -> Phrase {
        self.start(PhraseKind::GotoStatement, false);
        self.next(false); // goto
        self.expect(TokenKind::Name);
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn named_label_statement(&mut self) -> Phrase {
        self.start(PhraseKind::NamedLabelStatement, false);
        self.next(false); // name
        self.next(false); // :

        self.end()
    }

    // ========================================================================
    // break / continue / return
    // ========================================================================

    fn break_statement(&mut self) -> Phrase {
        self.start(PhraseKind::BreakStatement, false);
        self.next(false); // break

        if is_expression_start(self.peek(0)) {
            let level = self.expression(0);
            self.push_child(level);
        }
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn continue_statement(&mut self) -> Phrase {
        self.start(PhraseKind::ContinueStatement, false);
        self.next(false); // continue

        if is_expression_start(self.peek(0)) {
            let level = self.expression(0);
            self.push_child(level);
        }
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn return_statement(&mut self) -> Phrase {
        self.start(PhraseKind::ReturnStatement, false);
        self.next(false); // return

        if is_expression_start(self.peek(0)) {
            let value = self.expression(0);
            self.push_child(value);
        }
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    // ========================================================================
    // global / static declarations
    // ========================================================================

    fn global_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::GlobalDeclaration, false);
        self.next(false); // global

        let variables = self.delimited_list(
            PhraseKind::VariableNameList,
            |parser| parser.simple_variable(),
            is_simple_variable_start,
            TokenKind::Comma,
            Some(&[TokenKind::Semicolon]),
            false,
        );
        self.push_child(variables.into());
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn function_static_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::FunctionStaticDeclaration, false);
        self.next(false); // static

        let declarations = self.delimited_list(
            PhraseKind::StaticVariableDeclarationList,
            |parser| parser.static_variable_declaration(),
            |token| token.kind == TokenKind::VariableName,
            TokenKind::Comma,
            Some(&[TokenKind::Semicolon]),
            false,
        );
        self.push_child(declarations.into());

        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn static_variable_declaration(&mut self) -> SyntaxNode {
        self.start(PhraseKind::StaticVariableDeclaration, false);
        self.expect(TokenKind::VariableName);

        if self.peek(0).kind == TokenKind::Equals {
            let initialiser = self.function_static_initialiser();
            self.push_child(initialiser.into());
        }

        self.end_node()
    }

    fn function_static_initialiser(&mut self) -> Phrase {
        self.start(PhraseKind::FunctionStaticInitialiser, false);
        self.next(false); // =
        let value = self.expression(0);
        self.push_child(value);

        self.end()
    }

    // ========================================================================
    // echo / unset
    // ========================================================================

    fn echo_intrinsic(&mut self) -> Phrase {
        self.start(PhraseKind::EchoIntrinsic, false);
        self.next(false); // echo or <?=

        let expressions = self.delimited_list(
            PhraseKind::ExpressionList,
            |parser| parser.expression(0),
            is_expression_start,
            TokenKind::Comma,
            None,
            false,
        );
        self.push_child(expressions.into());
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn unset_intrinsic(&mut self) -> Phrase {
        self.start(PhraseKind::UnsetIntrinsic, false);
        self.next(false); // unset
        self.expect(TokenKind::OpenParenthesis);

        let variables = self.variable_list(&[TokenKind::CloseParenthesis]);
        self.push_child(variables.into());
        self.expect(TokenKind::CloseParenthesis);
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn variable_list(&mut self, break_on: &[TokenKind]) -> Phrase {
        self.delimited_list(
            PhraseKind::VariableList,
            |parser| parser.variable_initial(),
            is_variable_start,
            TokenKind::Comma,
            Some(break_on),
            false,
        )
    }

    fn variable_initial(&mut self) -> SyntaxNode {
        let atom = self.variable_atom(0);

        self.variable(atom)
    }
}

fn is_statement_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Namespace
            | TokenKind::Use
            | TokenKind::HaltCompiler
            | TokenKind::Const
            | TokenKind::Function
            | TokenKind::Class
            | TokenKind::Abstract
            | TokenKind::Final
            | TokenKind::Trait
            | TokenKind::Interface
            | TokenKind::OpenBrace
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::For
            | TokenKind::Switch
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Return
            | TokenKind::Global
            | TokenKind::Static
            | TokenKind::Echo
            | TokenKind::Unset
            | TokenKind::ForEach
            | TokenKind::Declare
            | TokenKind::Try
            | TokenKind::Throw
            | TokenKind::Goto
            | TokenKind::Name
            | TokenKind::Semicolon
            | TokenKind::CloseTag
            | TokenKind::Text
            | TokenKind::OpenTag
            | TokenKind::OpenTagEcho
    ) || is_expression_start(token)
}

fn is_else_if_clause_start(token: &Token) -> bool {
    token.kind == TokenKind::ElseIf
}

fn is_simple_variable_start(token: &Token) -> bool {
    matches!(token.kind, TokenKind::VariableName | TokenKind::Dollar)
}

fn is_variable_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::VariableName
            | TokenKind::Dollar
            | TokenKind::OpenParenthesis
            | TokenKind::Array
            | TokenKind::OpenBracket
            | TokenKind::StringLiteral
            | TokenKind::Static
            | TokenKind::Name
            | TokenKind::Namespace
            | TokenKind::Backslash
    )
}
