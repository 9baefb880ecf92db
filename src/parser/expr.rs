/// Expression parsing.
///
/// The engine is precedence climbing over the static table in `core.rs`:
/// parse an atom, then while the next token is a binary operator of
/// sufficient precedence, fold a binary phrase whose right side is parsed
/// at `precedence` (+1 when left-associative, enforcing left-to-right
/// grouping). Special cases handled here:
/// - ternary `?:` with an elided middle operand
/// - `instanceof`, whose right operand is a type designator
/// - by-reference assignment (`$a = &$b`) reclassifying the assignment
/// - casts, fully tokenized by the lexer, parsed as unary prefixes
/// - postfix `++`/`--`, recognized only after an addressable variable form
impl Parser {
    fn expression(&mut self, min_precedence: u8) -> SyntaxNode {
        let mut lhs = self.expression_atom(min_precedence);

        loop {
            let op = self.peek(0).kind;
            let binary_kind = binary_phrase_kind(op);

            if binary_kind == PhraseKind::Unknown {
                break;
            }

            let (mut precedence, associativity) = precedence_associativity(op);

            if precedence < min_precedence {
                break;
            }

            if associativity == Associativity::Left {
                precedence += 1;
            }

            if binary_kind == PhraseKind::TernaryExpression {
                lhs = SyntaxNode::Phrase(self.ternary_expression(lhs));
                continue;
            }

            self.start(binary_kind, true);
            self.push_child(lhs);
            self.next(false); // operator

            if binary_kind == PhraseKind::InstanceOfExpression {
                let designator = self.type_designator(PhraseKind::InstanceofTypeDesignator);
                self.push_child(designator.into());
            } else {
                if binary_kind == PhraseKind::SimpleAssignmentExpression
                    && self.peek(0).kind == TokenKind::Ampersand
                {
                    self.next(false); // &
                    self.set_top_kind(PhraseKind::ByRefAssignmentExpression);
                }

                let rhs = self.expression(precedence);
                self.push_child(rhs);
            }

            lhs = self.end_node();
        }

        lhs
    }

    /// `test ? consequence : alternative`, or `test ?: alternative` with the
    /// middle operand elided.
    fn ternary_expression(&mut self, test: SyntaxNode) -> Phrase {
        self.start(PhraseKind::TernaryExpression, true);
        self.push_child(test);
        self.next(false); // ?

        if self.optional(TokenKind::Colon).is_some() {
            let alternative = self.expression(0);
            self.push_child(alternative);
        } else {
            let consequence = self.expression(0);
            self.push_child(consequence);
            self.expect(TokenKind::Colon);
            let alternative = self.expression(0);
            self.push_child(alternative);
        }

        self.end()
    }

    fn expression_atom(&mut self, precedence: u8) -> SyntaxNode {
        let token = self.peek(0).clone();

        match token.kind {
            TokenKind::Static => {
                if self.peek(1).kind == TokenKind::Function {
                    SyntaxNode::Phrase(self.anonymous_function_creation_expression())
                } else {
                    self.variable_or_expression(0)
                }
            }
            TokenKind::StringLiteral => {
                if is_dereference_operator(self.peek(1).kind) {
                    self.variable_or_expression(0)
                } else {
                    SyntaxNode::Token(self.next(true))
                }
            }
            TokenKind::VariableName
            | TokenKind::Dollar
            | TokenKind::Array
            | TokenKind::OpenBracket
            | TokenKind::Backslash
            | TokenKind::Name
            | TokenKind::Namespace
            | TokenKind::OpenParenthesis => self.variable_or_expression(precedence),
            TokenKind::PlusPlus => {
                SyntaxNode::Phrase(self.unary_expression(PhraseKind::PrefixIncrementExpression))
            }
            TokenKind::MinusMinus => {
                SyntaxNode::Phrase(self.unary_expression(PhraseKind::PrefixDecrementExpression))
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Exclamation | TokenKind::Tilde => {
                SyntaxNode::Phrase(self.unary_expression(PhraseKind::UnaryOpExpression))
            }
            TokenKind::AtSymbol => {
                SyntaxNode::Phrase(self.unary_expression(PhraseKind::ErrorControlExpression))
            }
            TokenKind::IntegerCast
            | TokenKind::FloatCast
            | TokenKind::StringCast
            | TokenKind::ArrayCast
            | TokenKind::ObjectCast
            | TokenKind::BooleanCast
            | TokenKind::UnsetCast => {
                SyntaxNode::Phrase(self.unary_expression(PhraseKind::CastExpression))
            }
            TokenKind::List => SyntaxNode::Phrase(self.list_intrinsic()),
            TokenKind::Clone => SyntaxNode::Phrase(self.clone_expression()),
            TokenKind::New => SyntaxNode::Phrase(self.object_creation_expression()),
            TokenKind::FloatingLiteral
            | TokenKind::IntegerLiteral
            | TokenKind::LineConstant
            | TokenKind::FileConstant
            | TokenKind::DirectoryConstant
            | TokenKind::TraitConstant
            | TokenKind::MethodConstant
            | TokenKind::FunctionConstant
            | TokenKind::NamespaceConstant
            | TokenKind::ClassConstant => SyntaxNode::Token(self.next(true)),
            TokenKind::StartHeredoc => SyntaxNode::Phrase(self.heredoc_string_literal()),
            TokenKind::DoubleQuote => SyntaxNode::Phrase(self.double_quoted_string_literal()),
            TokenKind::Backtick => SyntaxNode::Phrase(self.shell_command_expression()),
            TokenKind::Print => SyntaxNode::Phrase(self.print_intrinsic()),
            TokenKind::Yield => SyntaxNode::Phrase(self.yield_expression()),
            TokenKind::YieldFrom => SyntaxNode::Phrase(self.yield_from_expression()),
            TokenKind::Function => {
                SyntaxNode::Phrase(self.anonymous_function_creation_expression())
            }
            TokenKind::Include => {
                SyntaxNode::Phrase(self.script_inclusion(PhraseKind::IncludeExpression))
            }
            TokenKind::IncludeOnce => {
                SyntaxNode::Phrase(self.script_inclusion(PhraseKind::IncludeOnceExpression))
            }
            TokenKind::Require => {
                SyntaxNode::Phrase(self.script_inclusion(PhraseKind::RequireExpression))
            }
            TokenKind::RequireOnce => {
                SyntaxNode::Phrase(self.script_inclusion(PhraseKind::RequireOnceExpression))
            }
            TokenKind::Eval => SyntaxNode::Phrase(self.eval_intrinsic()),
            TokenKind::Empty => SyntaxNode::Phrase(self.empty_intrinsic()),
            TokenKind::Exit => SyntaxNode::Phrase(self.exit_intrinsic()),
            TokenKind::Isset => SyntaxNode::Phrase(self.isset_intrinsic()),
            _ => {
                self.start(PhraseKind::ErrorExpression, false);
                self.error(None);

                self.end_node()
            }
        }
    }

    fn unary_expression(&mut self, kind: PhraseKind) -> Phrase {
        self.start(kind, false);
        let op = self.next(false);

        match kind {
            PhraseKind::PrefixIncrementExpression | PhraseKind::PrefixDecrementExpression => {
                let atom = self.variable_atom(0);
                let operand = self.variable(atom);
                self.push_child(operand);
            }
            _ => {
                let (precedence, _) = precedence_associativity(op.kind);
                let operand = self.expression(precedence);
                self.push_child(operand);
            }
        }

        self.end()
    }

    // ========================================================================
    // Variables and dereference chains
    // ========================================================================

    fn variable_or_expression(&mut self, precedence: u8) -> SyntaxNode {
        let mut part = self.variable_atom(precedence);
        let mut is_variable =
            matches!(&part, SyntaxNode::Phrase(p) if p.kind == PhraseKind::SimpleVariable);

        if is_dereference_operator(self.peek(0).kind) {
            part = self.variable(part);
            is_variable = true;
        } else if let SyntaxNode::Phrase(phrase) = &part {
            if matches!(
                phrase.kind,
                PhraseKind::QualifiedName
                    | PhraseKind::FullyQualifiedName
                    | PhraseKind::RelativeQualifiedName
            ) {
                part = SyntaxNode::Phrase(self.constant_access_expression(part));
            }
        }

        if !is_variable {
            return part;
        }

        // check for post increment/decrement
        match self.peek(0).kind {
            TokenKind::PlusPlus => SyntaxNode::Phrase(
                self.postfix_expression(PhraseKind::PostfixIncrementExpression, part),
            ),
            TokenKind::MinusMinus => SyntaxNode::Phrase(
                self.postfix_expression(PhraseKind::PostfixDecrementExpression, part),
            ),
            _ => part,
        }
    }

    fn constant_access_expression(&mut self, qualified_name: SyntaxNode) -> Phrase {
        self.start(PhraseKind::ConstantAccessExpression, true);
        self.push_child(qualified_name);

        self.end()
    }

    fn postfix_expression(&mut self, kind: PhraseKind, operand: SyntaxNode) -> Phrase {
        self.start(kind, true);
        self.push_child(operand);
        self.next(false); // operator

        self.end()
    }

    /// Fold dereference operators onto an atom. Anything other than a
    /// simple variable that acquires no dereference is wrapped in an
    /// `ErrorVariable` phrase.
    fn variable(&mut self, mut atom: SyntaxNode) -> SyntaxNode {
        let mut count = 0;

        loop {
            count += 1;
            match self.peek(0).kind {
                TokenKind::ColonColon => {
                    atom = SyntaxNode::Phrase(self.scoped_access_expression(atom));
                    continue;
                }
                TokenKind::Arrow | TokenKind::QuestionArrow => {
                    atom = SyntaxNode::Phrase(self.property_or_method_access_expression(atom));
                    continue;
                }
                TokenKind::OpenBracket => {
                    atom =
                        SyntaxNode::Phrase(self.subscript_expression(atom, TokenKind::CloseBracket));
                    continue;
                }
                TokenKind::OpenBrace => {
                    atom =
                        SyntaxNode::Phrase(self.subscript_expression(atom, TokenKind::CloseBrace));
                    continue;
                }
                TokenKind::OpenParenthesis => {
                    atom = SyntaxNode::Phrase(self.function_call_expression(atom));
                    continue;
                }
                _ => {
                    // only simple variable atoms qualify as variables
                    if count == 1
                        && !matches!(&atom, SyntaxNode::Phrase(p) if p.kind == PhraseKind::SimpleVariable)
                    {
                        self.start(PhraseKind::ErrorVariable, true);
                        self.push_child(atom);
                        self.error(None);

                        return self.end_node();
                    }
                }
            }

            break;
        }

        atom
    }

    fn function_call_expression(&mut self, callee: SyntaxNode) -> Phrase {
        self.start(PhraseKind::FunctionCallExpression, true);
        self.push_child(callee);
        self.expect(TokenKind::OpenParenthesis);

        if is_argument_start(self.peek(0)) {
            let arguments = self.argument_list();
            self.push_child(arguments.into());
        }
        self.expect(TokenKind::CloseParenthesis);

        self.end()
    }

    /// `lhs::member`, reclassified by what the member turns out to be:
    /// a call, a static property access, or a class constant access.
    fn scoped_access_expression(&mut self, lhs: SyntaxNode) -> Phrase {
        self.start(PhraseKind::ErrorScopedAccessExpression, true);
        self.push_child(lhs);
        self.next(false); // ::

        let (member, parent_kind) = self.scoped_member_name();
        if let Some(kind) = parent_kind {
            self.set_top_kind(kind);
        }
        self.push_child(member.into());

        if self.optional(TokenKind::OpenParenthesis).is_some() {
            self.set_top_kind(PhraseKind::ScopedCallExpression);
            if is_argument_start(self.peek(0)) {
                let arguments = self.argument_list();
                self.push_child(arguments.into());
            }
            self.expect(TokenKind::CloseParenthesis);

            return self.end();
        } else if self.top_kind() == PhraseKind::ScopedCallExpression {
            // a {expr} member requires an argument list
            self.error(None);
        }

        self.end()
    }

    /// Member after `::`. Returns the member phrase and the kind the
    /// enclosing access expression should take.
    fn scoped_member_name(&mut self) -> (Phrase, Option<PhraseKind>) {
        self.start(PhraseKind::ScopedMemberName, false);
        let token = self.peek(0).clone();

        let parent_kind = match token.kind {
            TokenKind::OpenBrace => {
                let inner =
                    self.encapsulated_expression(TokenKind::OpenBrace, TokenKind::CloseBrace);
                self.push_child(inner.into());

                Some(PhraseKind::ScopedCallExpression)
            }
            TokenKind::VariableName => {
                // kept as a bare token: a static property name is not a
                // simple variable
                self.next(false);

                Some(PhraseKind::ScopedPropertyAccessExpression)
            }
            TokenKind::Dollar => {
                let variable = self.simple_variable();
                self.push_child(variable);

                Some(PhraseKind::ScopedPropertyAccessExpression)
            }
            _ => {
                if token.kind == TokenKind::Name || token.kind.is_semi_reserved() {
                    let identifier = self.identifier();
                    self.push_child(identifier.into());

                    Some(PhraseKind::ClassConstantAccessExpression)
                } else {
                    self.error(None);

                    None
                }
            }
        };

        (self.end(), parent_kind)
    }

    fn property_access_expression(&mut self, lhs: SyntaxNode) -> Phrase {
        self.start(PhraseKind::PropertyAccessExpression, true);
        self.push_child(lhs);
        self.next(false); // -> or ?->
        let member = self.member_name();
        self.push_child(member.into());

        self.end()
    }

    fn property_or_method_access_expression(&mut self, lhs: SyntaxNode) -> Phrase {
        self.start(PhraseKind::PropertyAccessExpression, true);
        self.push_child(lhs);
        self.next(false); // -> or ?->
        let member = self.member_name();
        self.push_child(member.into());

        if self.optional(TokenKind::OpenParenthesis).is_some() {
            if is_argument_start(self.peek(0)) {
                let arguments = self.argument_list();
                self.push_child(arguments.into());
            }
            self.set_top_kind(PhraseKind::MethodCallExpression);
            self.expect(TokenKind::CloseParenthesis);
        }

        self.end()
    }

    fn member_name(&mut self) -> Phrase {
        self.start(PhraseKind::MemberName, false);

        match self.peek(0).kind {
            TokenKind::Name => {
                self.next(false);
            }
            TokenKind::OpenBrace => {
                let inner =
                    self.encapsulated_expression(TokenKind::OpenBrace, TokenKind::CloseBrace);
                self.push_child(inner.into());
            }
            TokenKind::Dollar | TokenKind::VariableName => {
                let variable = self.simple_variable();
                self.push_child(variable);
            }
            _ => self.error(None),
        }

        self.end()
    }

    fn subscript_expression(&mut self, lhs: SyntaxNode, close: TokenKind) -> Phrase {
        self.start(PhraseKind::SubscriptExpression, true);
        self.push_child(lhs);
        self.next(false); // [ or {

        if is_expression_start(self.peek(0)) {
            let index = self.expression(0);
            self.push_child(index);
        }

        self.expect(close);

        self.end()
    }

    fn argument_list(&mut self) -> Phrase {
        self.delimited_list(
            PhraseKind::ArgumentExpressionList,
            |parser| parser.argument_expression(),
            is_argument_start,
            TokenKind::Comma,
            Some(&[TokenKind::CloseParenthesis]),
            false,
        )
    }

    fn argument_expression(&mut self) -> SyntaxNode {
        if self.peek(0).kind == TokenKind::Ellipsis {
            SyntaxNode::Phrase(self.variadic_unpacking())
        } else {
            self.expression(0)
        }
    }

    fn variadic_unpacking(&mut self) -> Phrase {
        self.start(PhraseKind::VariadicUnpacking, false);
        self.next(false); // ...
        let expression = self.expression(0);
        self.push_child(expression);

        self.end()
    }

    fn variable_atom(&mut self, precedence: u8) -> SyntaxNode {
        let token = self.peek(0).clone();

        match token.kind {
            TokenKind::VariableName | TokenKind::Dollar => self.simple_variable(),
            TokenKind::OpenParenthesis => SyntaxNode::Phrase(self.encapsulated_expression(
                TokenKind::OpenParenthesis,
                TokenKind::CloseParenthesis,
            )),
            TokenKind::Array => SyntaxNode::Phrase(self.long_array_creation_expression()),
            TokenKind::OpenBracket => {
                SyntaxNode::Phrase(self.short_array_creation_expression(precedence))
            }
            TokenKind::StringLiteral => SyntaxNode::Token(self.next(true)),
            TokenKind::Static => SyntaxNode::Phrase(self.relative_scope()),
            TokenKind::Name | TokenKind::Namespace | TokenKind::Backslash => self.qualified_name(),
            _ => {
                self.start(PhraseKind::ErrorVariableAtom, false);
                self.error(None);

                self.end_node()
            }
        }
    }

    /// `$name`, `$$name`, or `${expr}`.
    fn simple_variable(&mut self) -> SyntaxNode {
        self.start(PhraseKind::SimpleVariable, false);
        let token = self.expect_one_of(&[TokenKind::VariableName, TokenKind::Dollar]);

        if token.is_some_and(|t| t.kind == TokenKind::Dollar) {
            match self.peek(0).kind {
                TokenKind::OpenBrace => {
                    let inner =
                        self.encapsulated_expression(TokenKind::OpenBrace, TokenKind::CloseBrace);
                    self.push_child(inner.into());
                }
                TokenKind::Dollar | TokenKind::VariableName => {
                    let inner = self.simple_variable();
                    self.push_child(inner);
                }
                _ => self.error(None),
            }
        }

        self.end_node()
    }

    fn encapsulated_expression(&mut self, open: TokenKind, close: TokenKind) -> Phrase {
        self.start(PhraseKind::EncapsulatedExpression, false);
        self.expect(open);
        let expression = self.expression(0);
        self.push_child(expression);
        self.expect(close);

        self.end()
    }

    fn relative_scope(&mut self) -> Phrase {
        self.start(PhraseKind::RelativeScope, false);
        self.next(false);

        self.end()
    }

    // ========================================================================
    // Intrinsics
    // ========================================================================

    fn exit_intrinsic(&mut self) -> Phrase {
        self.start(PhraseKind::ExitIntrinsic, false);
        self.next(false); // exit or die

        if self.optional(TokenKind::OpenParenthesis).is_some() {
            if is_expression_start(self.peek(0)) {
                let code = self.expression(0);
                self.push_child(code);
            }
            self.expect(TokenKind::CloseParenthesis);
        }

        self.end()
    }

    fn isset_intrinsic(&mut self) -> Phrase {
        self.start(PhraseKind::IssetIntrinsic, false);
        self.next(false); // isset
        self.expect(TokenKind::OpenParenthesis);

        let variables = self.variable_list(&[TokenKind::CloseParenthesis]);
        self.push_child(variables.into());
        self.expect(TokenKind::CloseParenthesis);

        self.end()
    }

    fn empty_intrinsic(&mut self) -> Phrase {
        self.start(PhraseKind::EmptyIntrinsic, false);
        self.next(false); // keyword
        self.expect(TokenKind::OpenParenthesis);
        let subject = self.expression(0);
        self.push_child(subject);
        self.expect(TokenKind::CloseParenthesis);

        self.end()
    }

    fn eval_intrinsic(&mut self) -> Phrase {
        self.start(PhraseKind::EvalIntrinsic, false);
        self.next(false); // keyword
        self.expect(TokenKind::OpenParenthesis);
        let subject = self.expression(0);
        self.push_child(subject);
        self.expect(TokenKind::CloseParenthesis);

        self.end()
    }

    fn script_inclusion(&mut self, kind: PhraseKind) -> Phrase {
        self.start(kind, false);
        self.next(false); // keyword
        let subject = self.expression(0);
        self.push_child(subject);

        self.end()
    }

    fn print_intrinsic(&mut self) -> Phrase {
        self.start(PhraseKind::PrintIntrinsic, false);
        self.next(false); // keyword
        let subject = self.expression(0);
        self.push_child(subject);

        self.end()
    }

    fn yield_expression(&mut self) -> Phrase {
        self.start(PhraseKind::YieldExpression, false);
        self.next(false); // yield

        if !is_expression_start(self.peek(0)) {
            return self.end();
        }

        let key_or_value = self.expression(0);
        self.push_child(key_or_value);

        if self.optional(TokenKind::FatArrow).is_some() {
            let value = self.expression(0);
            self.push_child(value);
        }

        self.end()
    }

    fn yield_from_expression(&mut self) -> Phrase {
        self.start(PhraseKind::YieldFromExpression, false);
        self.next(false); // yield from
        let subject = self.expression(0);
        self.push_child(subject);

        self.end()
    }

    fn clone_expression(&mut self) -> Phrase {
        self.start(PhraseKind::CloneExpression, false);
        self.next(false); // clone
        let subject = self.expression(0);
        self.push_child(subject);

        self.end()
    }

    fn list_intrinsic(&mut self) -> Phrase {
        self.start(PhraseKind::ListIntrinsic, false);
        self.next(false); // list
        self.expect(TokenKind::OpenParenthesis);
        let elements = self.array_initialiser_list(TokenKind::CloseParenthesis);
        self.push_child(elements.into());
        self.expect(TokenKind::CloseParenthesis);

        self.end()
    }

    // ========================================================================
    // String literals with interpolation
    // ========================================================================

    fn shell_command_expression(&mut self) -> Phrase {
        self.start(PhraseKind::ShellCommandExpression, false);
        self.next(false); // `
        let parts = self.encapsulated_variable_list(TokenKind::Backtick);
        self.push_child(parts.into());
        self.expect(TokenKind::Backtick);

        self.end()
    }

    fn double_quoted_string_literal(&mut self) -> Phrase {
        self.start(PhraseKind::DoubleQuotedStringLiteral, false);
        self.next(false); // "
        let parts = self.encapsulated_variable_list(TokenKind::DoubleQuote);
        self.push_child(parts.into());
        self.expect(TokenKind::DoubleQuote);

        self.end()
    }

    fn heredoc_string_literal(&mut self) -> Phrase {
        self.start(PhraseKind::HeredocStringLiteral, false);
        self.next(false); // <<<LABEL
        let parts = self.encapsulated_variable_list(TokenKind::EndHeredoc);
        self.push_child(parts.into());
        self.expect(TokenKind::EndHeredoc);

        self.end()
    }

    fn encapsulated_variable_list(&mut self, break_on: TokenKind) -> Phrase {
        self.list(
            PhraseKind::EncapsulatedVariableList,
            |parser| parser.encapsulated_variable(),
            is_encapsulated_variable_start,
            Some(&[break_on]),
            Some(ENCAPSULATED_VARIABLE_LIST_RECOVER_SET),
        )
    }

    fn encapsulated_variable(&mut self) -> SyntaxNode {
        let token = self.peek(0).clone();

        match token.kind {
            TokenKind::EncapsulatedAndWhitespace => SyntaxNode::Token(self.next(true)),
            TokenKind::VariableName => match self.peek(1).kind {
                TokenKind::OpenBracket => SyntaxNode::Phrase(self.encapsulated_dimension()),
                TokenKind::Arrow | TokenKind::QuestionArrow => {
                    SyntaxNode::Phrase(self.encapsulated_property())
                }
                _ => self.simple_variable(),
            },
            TokenKind::DollarCurlyOpen => {
                SyntaxNode::Phrase(self.dollar_curly_open_encapsulated_variable())
            }
            TokenKind::CurlyOpen => SyntaxNode::Phrase(self.curly_open_encapsulated_variable()),
            _ => unreachable!("no encapsulated-variable production for {}", token.kind),
        }
    }

    fn curly_open_encapsulated_variable(&mut self) -> Phrase {
        self.start(PhraseKind::EncapsulatedVariable, false);
        self.next(false); // {
        let atom = self.variable_atom(0);
        let variable = self.variable(atom);
        self.push_child(variable);
        self.expect(TokenKind::CloseBrace);

        self.end()
    }

    fn dollar_curly_open_encapsulated_variable(&mut self) -> Phrase {
        self.start(PhraseKind::EncapsulatedVariable, false);
        self.next(false); // ${
        let token = self.peek(0).clone();

        if token.kind == TokenKind::VariableName {
            if self.peek(1).kind == TokenKind::OpenBracket {
                let dimension = self.dollar_curly_encapsulated_dimension();
                self.push_child(dimension.into());
            } else {
                self.start(PhraseKind::SimpleVariable, false);
                self.next(false);
                let variable = self.end();
                self.push_child(variable.into());
            }
        } else if is_expression_start(&token) {
            let expression = self.expression(0);
            self.push_child(expression);
        } else {
            self.error(None);
        }

        self.expect(TokenKind::CloseBrace);

        self.end()
    }

    fn dollar_curly_encapsulated_dimension(&mut self) -> Phrase {
        self.start(PhraseKind::SubscriptExpression, false);
        self.next(false); // VariableName
        self.next(false); // [
        let index = self.expression(0);
        self.push_child(index);
        self.expect(TokenKind::CloseBracket);

        self.end()
    }

    /// `$var[...]` inside an interpolated string; only single-token keys
    /// and a unary-minus integer are valid here.
    fn encapsulated_dimension(&mut self) -> Phrase {
        self.start(PhraseKind::SubscriptExpression, false);

        let variable = self.simple_variable();
        self.push_child(variable);
        self.next(false); // [

        match self.peek(0).kind {
            TokenKind::Name | TokenKind::IntegerLiteral => {
                self.next(false);
            }
            TokenKind::VariableName => {
                let variable = self.simple_variable();
                self.push_child(variable);
            }
            TokenKind::Minus => {
                self.start(PhraseKind::UnaryOpExpression, false);
                self.next(false); // -
                self.expect(TokenKind::IntegerLiteral);
                let negated = self.end();
                self.push_child(negated.into());
            }
            _ => self.error(None),
        }

        self.expect(TokenKind::CloseBracket);

        self.end()
    }

    fn encapsulated_property(&mut self) -> Phrase {
        self.start(PhraseKind::PropertyAccessExpression, false);
        let variable = self.simple_variable();
        self.push_child(variable);
        self.next(false); // -> or ?->
        self.expect(TokenKind::Name);

        self.end()
    }

    // ========================================================================
    // Arrays
    // ========================================================================

    fn short_array_creation_expression(&mut self, precedence: u8) -> Phrase {
        self.start(PhraseKind::ArrayCreationExpression, false);
        self.next(false); // [

        if is_array_element_start(self.peek(0))
            || (precedence == 0 && self.peek(0).kind == TokenKind::Comma)
        {
            let elements = self.array_initialiser_list(TokenKind::CloseBracket);
            self.push_child(elements.into());
        }
        self.expect(TokenKind::CloseBracket);

        self.end()
    }

    fn long_array_creation_expression(&mut self) -> Phrase {
        self.start(PhraseKind::ArrayCreationExpression, false);
        self.next(false); // array
        self.expect(TokenKind::OpenParenthesis);

        if is_array_element_start(self.peek(0)) {
            let elements = self.array_initialiser_list(TokenKind::CloseParenthesis);
            self.push_child(elements.into());
        }

        self.expect(TokenKind::CloseParenthesis);

        self.end()
    }

    /// Array initialisers admit empty elements and a trailing delimiter,
    /// so this is a hand-rolled loop rather than `delimited_list`.
    fn array_initialiser_list(&mut self, break_on: TokenKind) -> Phrase {
        self.start(PhraseKind::ArrayInitialiserList, false);
        self.recover_set_stack
            .push(vec![break_on, TokenKind::Comma]);

        loop {
            if is_array_element_start(self.peek(0)) {
                let element = self.array_element();
                self.push_child(element.into());
            }

            let token = self.peek(0).kind;

            if token == TokenKind::Comma {
                self.next(false);
            } else if token == break_on {
                break;
            } else {
                self.error(None);
                // check for a missing delimiter
                if is_array_element_start(self.peek(0)) {
                    continue;
                }

                // skip until a recover token
                self.default_sync_strategy();
                let token = self.peek(0).kind;
                if token == TokenKind::Comma || token == break_on {
                    continue;
                }

                break;
            }
        }

        self.recover_set_stack.pop();

        self.end()
    }

    fn array_element(&mut self) -> Phrase {
        self.start(PhraseKind::ArrayElement, false);

        if self.peek(0).kind == TokenKind::Ampersand {
            let value = self.array_value();
            self.push_child(value.into());

            return self.end();
        }

        let mut key_or_value = self.array_key();

        if self.optional(TokenKind::FatArrow).is_none() {
            key_or_value.kind = PhraseKind::ArrayValue;
            self.push_child(key_or_value.into());

            return self.end();
        }

        self.push_child(key_or_value.into());
        let value = self.array_value();
        self.push_child(value.into());

        self.end()
    }

    fn array_key(&mut self) -> Phrase {
        self.start(PhraseKind::ArrayKey, false);
        let expression = self.expression(0);
        self.push_child(expression);

        self.end()
    }

    fn array_value(&mut self) -> Phrase {
        self.start(PhraseKind::ArrayValue, false);
        self.optional(TokenKind::Ampersand);
        let expression = self.expression(0);
        self.push_child(expression);

        self.end()
    }

    // ========================================================================
    // Object creation and type designators
    // ========================================================================

    fn object_creation_expression(&mut self) -> Phrase {
        self.start(PhraseKind::ObjectCreationExpression, false);
        self.next(false); // new

        if self.peek(0).kind == TokenKind::Class {
            let declaration = self.anonymous_class_declaration();
            self.push_child(declaration.into());

            return self.end();
        }

        let designator = self.type_designator(PhraseKind::ClassTypeDesignator);
        self.push_child(designator.into());

        if self.optional(TokenKind::OpenParenthesis).is_some() {
            if is_argument_start(self.peek(0)) {
                let arguments = self.argument_list();
                self.push_child(arguments.into());
            }

            self.expect(TokenKind::CloseParenthesis);
        }

        self.end()
    }

    fn type_designator(&mut self, kind: PhraseKind) -> Phrase {
        self.start(kind, false);
        let mut part = self.class_type_designator_atom();

        loop {
            match self.peek(0).kind {
                TokenKind::OpenBracket => {
                    part =
                        SyntaxNode::Phrase(self.subscript_expression(part, TokenKind::CloseBracket));
                    continue;
                }
                TokenKind::OpenBrace => {
                    part =
                        SyntaxNode::Phrase(self.subscript_expression(part, TokenKind::CloseBrace));
                    continue;
                }
                TokenKind::Arrow | TokenKind::QuestionArrow => {
                    part = SyntaxNode::Phrase(self.property_access_expression(part));
                    continue;
                }
                TokenKind::ColonColon => {
                    self.start(PhraseKind::ScopedPropertyAccessExpression, false);
                    self.push_child(part);
                    self.next(false); // ::
                    let member = self.restricted_scoped_member_name();
                    self.push_child(member.into());
                    part = self.end_node();
                    continue;
                }
                _ => {}
            }

            break;
        }

        self.push_child(part);

        self.end()
    }

    /// Member after `::` in a type designator: only a static property form.
    fn restricted_scoped_member_name(&mut self) -> Phrase {
        self.start(PhraseKind::ScopedMemberName, false);

        match self.peek(0).kind {
            TokenKind::VariableName => {
                // kept as a bare token: a static property name is not a
                // simple variable
                self.next(false);
            }
            TokenKind::Dollar => {
                let variable = self.simple_variable();
                self.push_child(variable);
            }
            _ => self.error(None),
        }

        self.end()
    }

    fn class_type_designator_atom(&mut self) -> SyntaxNode {
        let token = self.peek(0).clone();

        match token.kind {
            TokenKind::Static => SyntaxNode::Phrase(self.relative_scope()),
            TokenKind::VariableName | TokenKind::Dollar => self.simple_variable(),
            TokenKind::Name | TokenKind::Namespace | TokenKind::Backslash => self.qualified_name(),
            _ => {
                self.start(PhraseKind::ErrorClassTypeDesignatorAtom, false);
                self.error(None);

                self.end_node()
            }
        }
    }

    // ========================================================================
    // Anonymous classes and functions
    // ========================================================================

    fn anonymous_class_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::AnonymousClassDeclaration, false);

        let header = self.anonymous_class_declaration_header();
        self.push_child(header.into());
        let body = self.type_declaration_body(
            PhraseKind::ClassDeclarationBody,
            is_class_member_start,
            Self::class_member_declaration_list,
        );
        self.push_child(body.into());

        self.end()
    }

    fn anonymous_class_declaration_header(&mut self) -> Phrase {
        self.start(PhraseKind::AnonymousClassDeclarationHeader, false);
        self.next(false); // class

        if self.optional(TokenKind::OpenParenthesis).is_some() {
            if is_argument_start(self.peek(0)) {
                let arguments = self.argument_list();
                self.push_child(arguments.into());
            }
            self.expect(TokenKind::CloseParenthesis);
        }

        if self.peek(0).kind == TokenKind::Extends {
            let base = self.class_base_clause();
            self.push_child(base.into());
        }

        if self.peek(0).kind == TokenKind::Implements {
            let interfaces = self.class_interface_clause();
            self.push_child(interfaces.into());
        }

        self.end()
    }

    fn anonymous_function_creation_expression(&mut self) -> Phrase {
        self.start(PhraseKind::AnonymousFunctionCreationExpression, false);

        let header = self.anonymous_function_header();
        self.push_child(header.into());
        let body = self.function_declaration_body();
        self.push_child(body.into());

        self.end()
    }

    fn anonymous_function_header(&mut self) -> Phrase {
        self.start(PhraseKind::AnonymousFunctionHeader, false);
        self.optional(TokenKind::Static);
        self.next(false); // function
        self.optional(TokenKind::Ampersand);
        self.expect(TokenKind::OpenParenthesis);

        if is_parameter_start(self.peek(0)) {
            let parameters = self.parameter_declaration_list();
            self.push_child(parameters.into());
        }

        self.expect(TokenKind::CloseParenthesis);

        if self.peek(0).kind == TokenKind::Use {
            let use_clause = self.anonymous_function_use_clause();
            self.push_child(use_clause.into());
        }

        if self.peek(0).kind == TokenKind::Colon {
            let return_type = self.return_type();
            self.push_child(return_type.into());
        }

        self.end()
    }

    fn anonymous_function_use_clause(&mut self) -> Phrase {
        self.start(PhraseKind::AnonymousFunctionUseClause, false);
        self.next(false); // use
        self.expect(TokenKind::OpenParenthesis);

        let variables = self.delimited_list(
            PhraseKind::ClosureUseList,
            |parser| parser.anonymous_function_use_variable(),
            is_anonymous_function_use_variable_start,
            TokenKind::Comma,
            Some(&[TokenKind::CloseParenthesis]),
            false,
        );
        self.push_child(variables.into());
        self.expect(TokenKind::CloseParenthesis);

        self.end()
    }

    fn anonymous_function_use_variable(&mut self) -> SyntaxNode {
        self.start(PhraseKind::AnonymousFunctionUseVariable, false);
        self.optional(TokenKind::Ampersand);
        self.expect(TokenKind::VariableName);

        self.end_node()
    }
}

fn is_dereference_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::OpenBracket
            | TokenKind::OpenBrace
            | TokenKind::Arrow
            | TokenKind::QuestionArrow
            | TokenKind::OpenParenthesis
            | TokenKind::ColonColon
    )
}

fn is_expression_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::VariableName
            | TokenKind::Dollar
            | TokenKind::Array
            | TokenKind::OpenBracket
            | TokenKind::StringLiteral
            | TokenKind::Backslash
            | TokenKind::Name
            | TokenKind::Namespace
            | TokenKind::OpenParenthesis
            | TokenKind::Static
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Exclamation
            | TokenKind::Tilde
            | TokenKind::AtSymbol
            | TokenKind::IntegerCast
            | TokenKind::FloatCast
            | TokenKind::StringCast
            | TokenKind::ArrayCast
            | TokenKind::ObjectCast
            | TokenKind::BooleanCast
            | TokenKind::UnsetCast
            | TokenKind::List
            | TokenKind::Clone
            | TokenKind::New
            | TokenKind::FloatingLiteral
            | TokenKind::IntegerLiteral
            | TokenKind::LineConstant
            | TokenKind::FileConstant
            | TokenKind::DirectoryConstant
            | TokenKind::TraitConstant
            | TokenKind::MethodConstant
            | TokenKind::FunctionConstant
            | TokenKind::NamespaceConstant
            | TokenKind::ClassConstant
            | TokenKind::StartHeredoc
            | TokenKind::DoubleQuote
            | TokenKind::Backtick
            | TokenKind::Print
            | TokenKind::Yield
            | TokenKind::YieldFrom
            | TokenKind::Function
            | TokenKind::Include
            | TokenKind::IncludeOnce
            | TokenKind::Require
            | TokenKind::RequireOnce
            | TokenKind::Eval
            | TokenKind::Empty
            | TokenKind::Isset
            | TokenKind::Exit
    )
}

fn is_argument_start(token: &Token) -> bool {
    token.kind == TokenKind::Ellipsis || is_expression_start(token)
}

fn is_array_element_start(token: &Token) -> bool {
    token.kind == TokenKind::Ampersand || is_expression_start(token)
}

fn is_encapsulated_variable_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::EncapsulatedAndWhitespace
            | TokenKind::VariableName
            | TokenKind::DollarCurlyOpen
            | TokenKind::CurlyOpen
    )
}

fn is_anonymous_function_use_variable_start(token: &Token) -> bool {
    matches!(token.kind, TokenKind::VariableName | TokenKind::Ampersand)
}
