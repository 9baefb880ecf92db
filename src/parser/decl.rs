/// Declaration parsing: constants, functions, classes, interfaces, traits,
/// class members, namespaces and use declarations.
///
/// Productions follow the grammar one function per production; phrases that
/// begin ambiguous (`ErrorClassMemberDeclaration`, `ErrorTraitAdaptation`)
/// are reclassified once the dispatching token sequence is known.
impl Parser {
    // ========================================================================
    // const
    // ========================================================================

    fn const_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::ConstDeclaration, false);
        self.next(false); // const

        let elements = self.delimited_list(
            PhraseKind::ConstElementList,
            |parser| parser.const_element(),
            is_const_element_start,
            TokenKind::Comma,
            Some(&[TokenKind::Semicolon]),
            false,
        );
        self.push_child(elements.into());

        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn const_element(&mut self) -> SyntaxNode {
        self.start(PhraseKind::ConstElement, false);

        self.expect(TokenKind::Name);
        self.expect(TokenKind::Equals);

        let value = self.expression(0);
        self.push_child(value);

        self.end_node()
    }

    // ========================================================================
    // function
    // ========================================================================

    fn function_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::FunctionDeclaration, false);

        let header = self.function_declaration_header();
        self.push_child(header.into());
        let body = self.function_declaration_body();
        self.push_child(body.into());

        self.end()
    }

    fn function_declaration_body(&mut self) -> Phrase {
        let mut body = self.compound_statement();
        body.kind = PhraseKind::FunctionDeclarationBody;

        body
    }

    fn function_declaration_header(&mut self) -> Phrase {
        self.start(PhraseKind::FunctionDeclarationHeader, false);

        self.next(false); // function
        self.optional(TokenKind::Ampersand);
        self.expect(TokenKind::Name);
        self.expect(TokenKind::OpenParenthesis);

        if is_parameter_start(self.peek(0)) {
            let parameters = self.parameter_declaration_list();
            self.push_child(parameters.into());
        }

        self.expect(TokenKind::CloseParenthesis);

        if self.peek(0).kind == TokenKind::Colon {
            let return_type = self.return_type();
            self.push_child(return_type.into());
        }

        self.end()
    }

    fn parameter_declaration_list(&mut self) -> Phrase {
        self.delimited_list(
            PhraseKind::ParameterDeclarationList,
            |parser| parser.parameter_declaration(),
            is_parameter_start,
            TokenKind::Comma,
            Some(&[TokenKind::CloseParenthesis]),
            false,
        )
    }

    fn parameter_declaration(&mut self) -> SyntaxNode {
        self.start(PhraseKind::ParameterDeclaration, false);

        if is_type_declaration_start(self.peek(0)) {
            let type_declaration = self.type_declaration();
            self.push_child(type_declaration.into());
        }

        self.optional(TokenKind::Ampersand);
        self.optional(TokenKind::Ellipsis);
        self.expect(TokenKind::VariableName);

        if self.peek(0).kind == TokenKind::Equals {
            self.next(false);
            let default = self.expression(0);
            self.push_child(default);
        }

        self.end_node()
    }

    fn type_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::TypeDeclaration, false);
        self.optional(TokenKind::Question);

        match self.peek(0).kind {
            TokenKind::Callable | TokenKind::Array => {
                self.next(false);
            }
            TokenKind::Name | TokenKind::Namespace | TokenKind::Backslash => {
                let name = self.qualified_name();
                self.push_child(name);
            }
            _ => self.error(None),
        }

        self.end()
    }

    fn return_type(&mut self) -> Phrase {
        self.start(PhraseKind::ReturnType, false);
        self.next(false); // :

        let type_declaration = self.type_declaration();
        self.push_child(type_declaration.into());

        self.end()
    }

    // ========================================================================
    // class
    // ========================================================================

    fn class_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::ClassDeclaration, false);

        let header = self.class_declaration_header();
        self.push_child(header.into());
        let body = self.type_declaration_body(
            PhraseKind::ClassDeclarationBody,
            is_class_member_start,
            Self::class_member_declaration_list,
        );
        self.push_child(body.into());

        self.end()
    }

    fn class_declaration_header(&mut self) -> Phrase {
        self.start(PhraseKind::ClassDeclarationHeader, false);

        self.optional_one_of(&[TokenKind::Abstract, TokenKind::Final]);
        self.expect(TokenKind::Class);
        self.expect(TokenKind::Name);

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

    fn class_base_clause(&mut self) -> Phrase {
        self.start(PhraseKind::ClassBaseClause, false);
        self.next(false); // extends

        let name = self.qualified_name();
        self.push_child(name);

        self.end()
    }

    fn class_interface_clause(&mut self) -> Phrase {
        self.start(PhraseKind::ClassInterfaceClause, false);
        self.next(false); // implements

        let names = self.qualified_name_list(&[TokenKind::OpenBrace]);
        self.push_child(names.into());

        self.end()
    }

    /// Shared `{ members }` body shape for class/interface/trait
    /// declarations.
    fn type_declaration_body(
        &mut self,
        kind: PhraseKind,
        element_start: fn(&Token) -> bool,
        list_fn: fn(&mut Self) -> Phrase,
    ) -> Phrase {
        self.start(kind, false);
        self.expect(TokenKind::OpenBrace);

        if element_start(self.peek(0)) {
            let members = list_fn(self);
            self.push_child(members.into());
        }

        self.expect(TokenKind::CloseBrace);

        self.end()
    }

    fn class_member_declaration_list(&mut self) -> Phrase {
        self.list(
            PhraseKind::ClassMemberDeclarationList,
            |parser| parser.class_member_declaration(),
            is_class_member_start,
            Some(&[TokenKind::CloseBrace]),
            Some(CLASS_MEMBER_DECLARATION_LIST_RECOVER_SET),
        )
    }

    fn class_member_declaration(&mut self) -> SyntaxNode {
        self.start(PhraseKind::ErrorClassMemberDeclaration, false);
        let token = self.peek(0).clone();

        match token.kind {
            TokenKind::Public
            | TokenKind::Protected
            | TokenKind::Private
            | TokenKind::Static
            | TokenKind::Abstract
            | TokenKind::Final => {
                let modifiers = self.member_modifier_list();
                let next = self.peek(0).kind;

                if next == TokenKind::VariableName {
                    self.push_child(modifiers.into());

                    return SyntaxNode::Phrase(self.property_declaration());
                } else if next == TokenKind::Function {
                    return SyntaxNode::Phrase(self.method_declaration(Some(modifiers)));
                } else if next == TokenKind::Const {
                    self.push_child(modifiers.into());

                    return SyntaxNode::Phrase(self.class_const_declaration());
                }

                self.push_child(modifiers.into());
                self.error(None);

                self.end_node()
            }
            TokenKind::Function => SyntaxNode::Phrase(self.method_declaration(None)),
            TokenKind::Var => {
                self.next(false);

                SyntaxNode::Phrase(self.property_declaration())
            }
            TokenKind::Const => SyntaxNode::Phrase(self.class_const_declaration()),
            TokenKind::Use => SyntaxNode::Phrase(self.trait_use_clause()),
            _ => unreachable!("no class-member production for {}", token.kind),
        }
    }

    fn member_modifier_list(&mut self) -> Phrase {
        self.start(PhraseKind::MemberModifierList, false);

        while self.peek(0).kind.is_member_modifier() {
            self.next(false);
        }

        self.end()
    }

    // ========================================================================
    // properties and class constants (reclassify the open member phrase)
    // ========================================================================

    fn property_declaration(&mut self) -> Phrase {
        self.set_top_kind(PhraseKind::PropertyDeclaration);

        let elements = self.delimited_list(
            PhraseKind::PropertyElementList,
            |parser| parser.property_element(),
            is_property_element_start,
            TokenKind::Comma,
            Some(&[TokenKind::Semicolon]),
            false,
        );
        self.push_child(elements.into());
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn property_element(&mut self) -> SyntaxNode {
        self.start(PhraseKind::PropertyElement, false);
        self.expect(TokenKind::VariableName);

        if self.peek(0).kind == TokenKind::Equals {
            let initialiser = self.property_initialiser();
            self.push_child(initialiser.into());
        }

        self.end_node()
    }

    fn property_initialiser(&mut self) -> Phrase {
        self.start(PhraseKind::PropertyInitialiser, false);
        self.next(false); // equals

        let value = self.expression(0);
        self.push_child(value);

        self.end()
    }

    fn class_const_declaration(&mut self) -> Phrase {
        self.set_top_kind(PhraseKind::ClassConstDeclaration);
        self.next(false); // const

        let elements = self.delimited_list(
            PhraseKind::ClassConstElementList,
            |parser| parser.class_const_element(),
            is_class_const_element_start,
            TokenKind::Comma,
            Some(&[TokenKind::Semicolon]),
            false,
        );
        self.push_child(elements.into());

        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn class_const_element(&mut self) -> SyntaxNode {
        self.start(PhraseKind::ClassConstElement, false);

        let identifier = self.identifier();
        self.push_child(identifier.into());
        self.expect(TokenKind::Equals);

        let value = self.expression(0);
        self.push_child(value);

        self.end_node()
    }

    // ========================================================================
    // methods
    // ========================================================================

    fn method_declaration(&mut self, modifiers: Option<Phrase>) -> Phrase {
        self.set_top_kind(PhraseKind::MethodDeclaration);

        let header = self.method_declaration_header(modifiers);
        self.push_child(header.into());
        let body = self.method_declaration_body();
        self.push_child(body.into());

        self.end()
    }

    fn method_declaration_header(&mut self, modifiers: Option<Phrase>) -> Phrase {
        self.start(PhraseKind::MethodDeclarationHeader, true);

        if let Some(modifiers) = modifiers {
            self.push_child(modifiers.into());
        }

        self.next(false); // function
        self.optional(TokenKind::Ampersand);
        let name = self.identifier();
        self.push_child(name.into());
        self.expect(TokenKind::OpenParenthesis);

        if is_parameter_start(self.peek(0)) {
            let parameters = self.parameter_declaration_list();
            self.push_child(parameters.into());
        }

        self.expect(TokenKind::CloseParenthesis);

        if self.peek(0).kind == TokenKind::Colon {
            let return_type = self.return_type();
            self.push_child(return_type.into());
        }

        self.end()
    }

    fn method_declaration_body(&mut self) -> Phrase {
        self.start(PhraseKind::MethodDeclarationBody, false);

        if self.peek(0).kind == TokenKind::Semicolon {
            self.next(false);
        } else {
            let body = self.compound_statement();
            self.push_child(body.into());
        }

        self.end()
    }

    /// A member name: a plain name, or any semi-reserved word used as one.
    fn identifier(&mut self) -> Phrase {
        self.start(PhraseKind::Identifier, false);

        let token = self.peek(0);
        if token.kind == TokenKind::Name || token.kind.is_semi_reserved() {
            self.next(false);
        } else {
            self.error(None);
        }

        self.end()
    }

    // ========================================================================
    // interface
    // ========================================================================

    fn interface_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::InterfaceDeclaration, false);

        let header = self.interface_declaration_header();
        self.push_child(header.into());
        let body = self.type_declaration_body(
            PhraseKind::InterfaceDeclarationBody,
            is_class_member_start,
            Self::interface_member_declarations,
        );
        self.push_child(body.into());

        self.end()
    }

    fn interface_declaration_header(&mut self) -> Phrase {
        self.start(PhraseKind::InterfaceDeclarationHeader, false);
        self.next(false); // interface
        self.expect(TokenKind::Name);

        if self.peek(0).kind == TokenKind::Extends {
            let base = self.interface_base_clause();
            self.push_child(base.into());
        }

        self.end()
    }

    fn interface_base_clause(&mut self) -> Phrase {
        self.start(PhraseKind::InterfaceBaseClause, false);
        self.next(false); // extends

        let names = self.qualified_name_list(&[TokenKind::OpenBrace]);
        self.push_child(names.into());

        self.end()
    }

    fn interface_member_declarations(&mut self) -> Phrase {
        self.list(
            PhraseKind::InterfaceMemberDeclarationList,
            |parser| parser.class_member_declaration(),
            is_class_member_start,
            Some(&[TokenKind::CloseBrace]),
            Some(CLASS_MEMBER_DECLARATION_LIST_RECOVER_SET),
        )
    }

    // ========================================================================
    // trait
    // ========================================================================

    fn trait_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::TraitDeclaration, false);

        let header = self.trait_declaration_header();
        self.push_child(header.into());
        let body = self.type_declaration_body(
            PhraseKind::TraitDeclarationBody,
            is_class_member_start,
            Self::trait_member_declarations,
        );
        self.push_child(body.into());

        self.end()
    }

    fn trait_declaration_header(&mut self) -> Phrase {
        self.start(PhraseKind::TraitDeclarationHeader, false);
        self.next(false); // trait
        self.expect(TokenKind::Name);

        self.end()
    }

    fn trait_member_declarations(&mut self) -> Phrase {
        self.list(
            PhraseKind::TraitMemberDeclarationList,
            |parser| parser.class_member_declaration(),
            is_class_member_start,
            Some(&[TokenKind::CloseBrace]),
            Some(CLASS_MEMBER_DECLARATION_LIST_RECOVER_SET),
        )
    }

    fn trait_use_clause(&mut self) -> Phrase {
        self.set_top_kind(PhraseKind::TraitUseClause);
        self.next(false); // use

        let names = self.qualified_name_list(&[TokenKind::Semicolon, TokenKind::OpenBrace]);
        self.push_child(names.into());
        let specification = self.trait_use_specification();
        self.push_child(specification.into());

        self.end()
    }

    fn trait_use_specification(&mut self) -> Phrase {
        self.start(PhraseKind::TraitUseSpecification, false);

        let token = self.expect_one_of(&[TokenKind::Semicolon, TokenKind::OpenBrace]);

        if token.is_some_and(|t| t.kind == TokenKind::OpenBrace) {
            if is_trait_adaptation_start(self.peek(0)) {
                let adaptations = self.trait_adaptation_list();
                self.push_child(adaptations.into());
            }
            self.expect(TokenKind::CloseBrace);
        }

        self.end()
    }

    fn trait_adaptation_list(&mut self) -> Phrase {
        self.list(
            PhraseKind::TraitAdaptationList,
            |parser| parser.trait_adaptation(),
            is_trait_adaptation_start,
            Some(&[TokenKind::CloseBrace]),
            None,
        )
    }

    fn trait_adaptation(&mut self) -> SyntaxNode {
        self.start(PhraseKind::ErrorTraitAdaptation, false);
        let token = self.peek(0).clone();
        let after = self.peek(1).clone();

        if token.kind == TokenKind::Namespace
            || token.kind == TokenKind::Backslash
            || (token.kind == TokenKind::Name
                && (after.kind == TokenKind::ColonColon || after.kind == TokenKind::Backslash))
        {
            let reference = self.method_reference();
            self.push_child(reference.into());

            if self.peek(0).kind == TokenKind::InsteadOf {
                self.next(false);

                return SyntaxNode::Phrase(self.trait_precedence());
            }
        } else if token.kind == TokenKind::Name || token.kind.is_semi_reserved() {
            self.start(PhraseKind::MethodReference, false);
            let identifier = self.identifier();
            self.push_child(identifier.into());
            let reference = self.end();
            self.push_child(reference.into());
        } else {
            self.error(None);

            return self.end_node();
        }

        SyntaxNode::Phrase(self.trait_alias())
    }

    fn trait_alias(&mut self) -> Phrase {
        self.set_top_kind(PhraseKind::TraitAlias);
        self.expect(TokenKind::As);

        let token = self.peek(0).clone();

        if token.kind == TokenKind::Name || token.kind.is_reserved() {
            let identifier = self.identifier();
            self.push_child(identifier.into());
        } else if token.kind.is_member_modifier() {
            self.next(false);
            let token = self.peek(0).clone();
            if token.kind == TokenKind::Name || token.kind.is_semi_reserved() {
                let identifier = self.identifier();
                self.push_child(identifier.into());
            }
        } else {
            self.error(None);
        }

        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn trait_precedence(&mut self) -> Phrase {
        self.set_top_kind(PhraseKind::TraitPrecedence);

        let names = self.qualified_name_list(&[TokenKind::Semicolon]);
        self.push_child(names.into());
        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn method_reference(&mut self) -> Phrase {
        self.start(PhraseKind::MethodReference, false);

        let name = self.qualified_name();
        self.push_child(name);
        self.expect(TokenKind::ColonColon);
        let identifier = self.identifier();
        self.push_child(identifier.into());

        self.end()
    }

    // ========================================================================
    // namespaces
    // ========================================================================

    fn namespace_definition(&mut self) -> Phrase {
        self.start(PhraseKind::NamespaceDefinition, false);
        self.next(false); // namespace

        if self.peek(0).kind == TokenKind::Name {
            let name = self.namespace_name();
            self.push_child(name.into());

            let token = self.expect_one_of(&[TokenKind::Semicolon, TokenKind::OpenBrace]);
            if !token.is_some_and(|t| t.kind == TokenKind::OpenBrace) {
                return self.end();
            }
        } else {
            self.expect(TokenKind::OpenBrace);
        }

        let statements = self.statement_list(&[TokenKind::CloseBrace]);
        self.push_child(statements.into());
        self.expect(TokenKind::CloseBrace);

        self.end()
    }

    fn namespace_name(&mut self) -> Phrase {
        self.start(PhraseKind::NamespaceName, false);
        self.expect(TokenKind::Name);

        while self.peek(0).kind == TokenKind::Backslash && self.peek(1).kind == TokenKind::Name {
            self.next(false);
            self.next(false);
        }

        self.end()
    }

    fn namespace_use_declaration(&mut self) -> Phrase {
        self.start(PhraseKind::NamespaceUseDeclaration, false);
        self.next(false); // use
        self.optional_one_of(&[TokenKind::Function, TokenKind::Const]);
        self.optional(TokenKind::Backslash);

        let namespace_name = self.namespace_name();
        let token = self.peek(0).clone();

        if token.kind == TokenKind::Backslash || token.kind == TokenKind::OpenBrace {
            self.push_child(namespace_name.into());
            self.expect(TokenKind::Backslash);
            self.expect(TokenKind::OpenBrace);

            let clauses = self.delimited_list(
                PhraseKind::NamespaceUseGroupClauseList,
                |parser| parser.namespace_use_group_clause(),
                is_namespace_use_group_clause_start,
                TokenKind::Comma,
                Some(&[TokenKind::CloseBrace]),
                false,
            );
            self.push_child(clauses.into());
            self.expect(TokenKind::CloseBrace);
            self.expect(TokenKind::Semicolon);

            return self.end();
        }

        // the first clause reuses the name already parsed
        let mut leading_name = Some(namespace_name);
        let clauses = self.delimited_list(
            PhraseKind::NamespaceUseClauseList,
            move |parser| parser.namespace_use_clause(&mut leading_name),
            is_namespace_use_clause_start,
            TokenKind::Comma,
            Some(&[TokenKind::Semicolon]),
            true,
        );
        self.push_child(clauses.into());

        self.expect(TokenKind::Semicolon);

        self.end()
    }

    fn namespace_use_clause(&mut self, leading_name: &mut Option<Phrase>) -> SyntaxNode {
        let leading = leading_name.take();
        self.start(PhraseKind::NamespaceUseClause, leading.is_some());

        match leading {
            Some(name) => self.push_child(name.into()),
            None => {
                let name = self.namespace_name();
                self.push_child(name.into());
            }
        }

        if self.peek(0).kind == TokenKind::As {
            let alias = self.namespace_aliasing_clause();
            self.push_child(alias.into());
        }

        self.end_node()
    }

    fn namespace_use_group_clause(&mut self) -> SyntaxNode {
        self.start(PhraseKind::NamespaceUseGroupClause, false);
        self.optional_one_of(&[TokenKind::Function, TokenKind::Const]);

        let name = self.namespace_name();
        self.push_child(name.into());

        if self.peek(0).kind == TokenKind::As {
            let alias = self.namespace_aliasing_clause();
            self.push_child(alias.into());
        }

        self.end_node()
    }

    fn namespace_aliasing_clause(&mut self) -> Phrase {
        self.start(PhraseKind::NamespaceAliasingClause, false);
        self.next(false); // as
        self.expect(TokenKind::Name);

        self.end()
    }

    // ========================================================================
    // qualified names
    // ========================================================================

    fn qualified_name(&mut self) -> SyntaxNode {
        self.start(PhraseKind::QualifiedName, false);
        let token = self.peek(0).clone();

        if token.kind == TokenKind::Backslash {
            self.next(false);
            self.set_top_kind(PhraseKind::FullyQualifiedName);
        } else if token.kind == TokenKind::Namespace {
            self.set_top_kind(PhraseKind::RelativeQualifiedName);
            self.next(false);
            self.expect(TokenKind::Backslash);
        }

        let name = self.namespace_name();
        self.push_child(name.into());

        self.end_node()
    }

    fn qualified_name_list(&mut self, break_on: &[TokenKind]) -> Phrase {
        self.delimited_list(
            PhraseKind::QualifiedNameList,
            |parser| parser.qualified_name(),
            is_qualified_name_start,
            TokenKind::Comma,
            Some(break_on),
            false,
        )
    }

    // ========================================================================
    // __halt_compiler
    // ========================================================================

    fn halt_compiler_statement(&mut self) -> Phrase {
        self.start(PhraseKind::HaltCompilerStatement, false);
        self.next(false); // __halt_compiler
        self.expect(TokenKind::OpenParenthesis);
        self.expect(TokenKind::CloseParenthesis);
        self.expect(TokenKind::Semicolon);

        self.end()
    }
}

fn is_const_element_start(token: &Token) -> bool {
    token.kind == TokenKind::Name
}

fn is_class_const_element_start(token: &Token) -> bool {
    token.kind == TokenKind::Name || token.kind.is_semi_reserved()
}

fn is_property_element_start(token: &Token) -> bool {
    token.kind == TokenKind::VariableName
}

fn is_class_member_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Public
            | TokenKind::Protected
            | TokenKind::Private
            | TokenKind::Static
            | TokenKind::Abstract
            | TokenKind::Final
            | TokenKind::Function
            | TokenKind::Var
            | TokenKind::Const
            | TokenKind::Use
    )
}

fn is_trait_adaptation_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Name | TokenKind::Backslash | TokenKind::Namespace
    ) || token.kind.is_semi_reserved()
}

fn is_parameter_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Ampersand | TokenKind::Ellipsis | TokenKind::VariableName
    ) || is_type_declaration_start(token)
}

fn is_type_declaration_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Backslash
            | TokenKind::Name
            | TokenKind::Namespace
            | TokenKind::Question
            | TokenKind::Array
            | TokenKind::Callable
    )
}

fn is_qualified_name_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Backslash | TokenKind::Name | TokenKind::Namespace
    )
}

fn is_namespace_use_clause_start(token: &Token) -> bool {
    token.kind == TokenKind::Name || token.kind == TokenKind::Backslash
}

fn is_namespace_use_group_clause_start(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Const | TokenKind::Function | TokenKind::Name
    )
}
