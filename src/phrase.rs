//! Concrete-syntax-tree node types.
//!
//! A [`Phrase`] is one grammar production: a closed [`PhraseKind`] plus the
//! ordered children it absorbed — tokens (trivia included), nested phrases,
//! and [`ErrorPhrase`] nodes recording recovery events. The tree is
//! full-fidelity: concatenating the spans of every token in the tree, in
//! order, reconstructs the source text exactly.
//!
//! ## Notes
//! - Nodes are built once and never mutated after the parser seals them;
//!   a phrase's kind may be reclassified during construction (e.g. a
//!   qualified name becoming a relative qualified name) but not after.
//! - Malformed input surfaces as `ErrorPhrase` children, never as a
//!   separate error list; see `crate::diagnostics` for extraction.

use serde::Serialize;

use crate::lexer::{Token, TokenKind};

macro_rules! phrase_kinds {
    ($($variant:ident),+ $(,)?) => {
        /// Kind of CST node, one per grammar production.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum PhraseKind {
            $($variant),+
        }

        impl PhraseKind {
            /// Every phrase kind, in declaration order.
            pub const ALL: &'static [PhraseKind] = &[$(PhraseKind::$variant),+];

            /// Stable display name for this kind.
            pub fn name(self) -> &'static str {
                match self {
                    $(PhraseKind::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

phrase_kinds! {
    Unknown,
    AdditiveExpression,
    AnonymousClassDeclaration,
    AnonymousClassDeclarationHeader,
    AnonymousFunctionCreationExpression,
    AnonymousFunctionHeader,
    AnonymousFunctionUseClause,
    AnonymousFunctionUseVariable,
    ArgumentExpressionList,
    ArrayCreationExpression,
    ArrayElement,
    ArrayInitialiserList,
    ArrayKey,
    ArrayValue,
    BitwiseExpression,
    BreakStatement,
    ByRefAssignmentExpression,
    CaseStatement,
    CaseStatementList,
    CastExpression,
    CatchClause,
    CatchClauseList,
    CatchNameList,
    ClassBaseClause,
    ClassConstantAccessExpression,
    ClassConstDeclaration,
    ClassConstElement,
    ClassConstElementList,
    ClassDeclaration,
    ClassDeclarationBody,
    ClassDeclarationHeader,
    ClassInterfaceClause,
    ClassMemberDeclarationList,
    ClassModifiers,
    ClassTypeDesignator,
    CloneExpression,
    ClosureUseList,
    CoalesceExpression,
    CompoundAssignmentExpression,
    CompoundStatement,
    TernaryExpression,
    ConstantAccessExpression,
    ConstDeclaration,
    ConstElement,
    ConstElementList,
    ContinueStatement,
    DeclareDirective,
    DeclareStatement,
    DefaultStatement,
    DoStatement,
    DoubleQuotedStringLiteral,
    EchoIntrinsic,
    ElseClause,
    ElseIfClause,
    ElseIfClauseList,
    EmptyIntrinsic,
    EncapsulatedExpression,
    EncapsulatedVariable,
    EncapsulatedVariableList,
    EqualityExpression,
    Error,
    ErrorClassMemberDeclaration,
    ErrorClassTypeDesignatorAtom,
    ErrorControlExpression,
    ErrorExpression,
    ErrorScopedAccessExpression,
    ErrorTraitAdaptation,
    ErrorVariable,
    ErrorVariableAtom,
    EvalIntrinsic,
    ExitIntrinsic,
    ExponentiationExpression,
    ExpressionList,
    ExpressionStatement,
    FinallyClause,
    ForControl,
    ForeachCollection,
    ForeachKey,
    ForeachStatement,
    ForeachValue,
    ForEndOfLoop,
    ForExpressionGroup,
    ForInitialiser,
    ForStatement,
    FullyQualifiedName,
    FunctionCallExpression,
    FunctionDeclaration,
    FunctionDeclarationBody,
    FunctionDeclarationHeader,
    FunctionStaticDeclaration,
    FunctionStaticInitialiser,
    GlobalDeclaration,
    GotoStatement,
    HaltCompilerStatement,
    HeredocStringLiteral,
    Identifier,
    IfStatement,
    IncludeExpression,
    IncludeOnceExpression,
    InlineText,
    InstanceOfExpression,
    InstanceofTypeDesignator,
    InterfaceBaseClause,
    InterfaceDeclaration,
    InterfaceDeclarationBody,
    InterfaceDeclarationHeader,
    InterfaceMemberDeclarationList,
    IssetIntrinsic,
    ListIntrinsic,
    LogicalExpression,
    MemberModifierList,
    MemberName,
    MethodCallExpression,
    MethodDeclaration,
    MethodDeclarationBody,
    MethodDeclarationHeader,
    MethodReference,
    MultiplicativeExpression,
    NamedLabelStatement,
    NamespaceAliasingClause,
    NamespaceDefinition,
    NamespaceName,
    NamespaceUseClause,
    NamespaceUseClauseList,
    NamespaceUseDeclaration,
    NamespaceUseGroupClause,
    NamespaceUseGroupClauseList,
    NullStatement,
    ObjectCreationExpression,
    ParameterDeclaration,
    ParameterDeclarationList,
    PostfixDecrementExpression,
    PostfixIncrementExpression,
    PrefixDecrementExpression,
    PrefixIncrementExpression,
    PrintIntrinsic,
    PropertyAccessExpression,
    PropertyDeclaration,
    PropertyElement,
    PropertyElementList,
    PropertyInitialiser,
    QualifiedName,
    QualifiedNameList,
    RelationalExpression,
    RelativeQualifiedName,
    RelativeScope,
    RequireExpression,
    RequireOnceExpression,
    ReturnStatement,
    ReturnType,
    ScopedCallExpression,
    ScopedMemberName,
    ScopedPropertyAccessExpression,
    ShellCommandExpression,
    ShiftExpression,
    SimpleAssignmentExpression,
    SimpleVariable,
    StatementList,
    StaticVariableDeclaration,
    StaticVariableDeclarationList,
    SubscriptExpression,
    SwitchStatement,
    ThrowStatement,
    TraitAdaptationList,
    TraitAlias,
    TraitDeclaration,
    TraitDeclarationBody,
    TraitDeclarationHeader,
    TraitMemberDeclarationList,
    TraitPrecedence,
    TraitUseClause,
    TraitUseSpecification,
    TryStatement,
    TypeDeclaration,
    UnaryOpExpression,
    UnsetIntrinsic,
    VariableList,
    VariableNameList,
    VariadicUnpacking,
    WhileStatement,
    YieldExpression,
    YieldFromExpression,
}

impl std::fmt::Display for PhraseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One child slot of a phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SyntaxNode {
    Token(Token),
    Phrase(Phrase),
    Error(ErrorPhrase),
}

impl SyntaxNode {
    /// The phrase inside this node, if it is one.
    pub fn as_phrase(&self) -> Option<&Phrase> {
        match self {
            SyntaxNode::Phrase(phrase) => Some(phrase),
            _ => None,
        }
    }

    /// The token inside this node, if it is one.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            SyntaxNode::Token(token) => Some(token),
            _ => None,
        }
    }
}

impl From<Token> for SyntaxNode {
    fn from(token: Token) -> Self {
        SyntaxNode::Token(token)
    }
}

impl From<Phrase> for SyntaxNode {
    fn from(phrase: Phrase) -> Self {
        SyntaxNode::Phrase(phrase)
    }
}

/// A CST node: one grammar production and its ordered children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phrase {
    pub kind: PhraseKind,
    pub children: Vec<SyntaxNode>,
}

impl Phrase {
    pub fn new(kind: PhraseKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Depth-first walk collecting every token in source order, trivia and
    /// recovery-skipped tokens included. Concatenating their spans
    /// reconstructs the parsed text.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        collect_tokens(self, &mut out);

        out
    }

    /// Depth-first walk collecting every error phrase, in source order.
    pub fn errors(&self) -> Vec<&ErrorPhrase> {
        let mut out = Vec::new();
        collect_errors(self, &mut out);

        out
    }

    /// First nested phrase of the given kind, searched depth-first. A
    /// convenience for tests and tooling.
    pub fn find(&self, kind: PhraseKind) -> Option<&Phrase> {
        if self.kind == kind {
            return Some(self);
        }

        self.children
            .iter()
            .filter_map(SyntaxNode::as_phrase)
            .find_map(|child| child.find(kind))
    }
}

/// A recovery event: the offending token, what was expected of it (when a
/// single kind was), and the tokens consumed while resynchronizing.
///
/// At most one error phrase is created per recovery event; further
/// mismatches are suppressed until a token matches again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPhrase {
    pub kind: PhraseKind,
    /// Tokens skipped while scanning for a resynchronization point.
    pub children: Vec<Token>,
    /// The token that failed to match. It is not consumed by the error
    /// phrase itself (it may well be consumed by whatever resynchronizes).
    pub unexpected: Token,
    /// The single kind that was expected, when the mismatch came from a
    /// one-token expectation rather than a set.
    pub expected: Option<TokenKind>,
}

impl ErrorPhrase {
    pub fn new(unexpected: Token, expected: Option<TokenKind>) -> Self {
        Self {
            kind: PhraseKind::Error,
            children: Vec::new(),
            unexpected,
            expected,
        }
    }
}

fn collect_tokens<'a>(phrase: &'a Phrase, out: &mut Vec<&'a Token>) {
    for child in &phrase.children {
        match child {
            SyntaxNode::Token(token) => out.push(token),
            SyntaxNode::Phrase(nested) => collect_tokens(nested, out),
            SyntaxNode::Error(error) => out.extend(error.children.iter()),
        }
    }
}

fn collect_errors<'a>(phrase: &'a Phrase, out: &mut Vec<&'a ErrorPhrase>) {
    for child in &phrase.children {
        match child {
            SyntaxNode::Token(_) => {}
            SyntaxNode::Phrase(nested) => collect_errors(nested, out),
            SyntaxNode::Error(error) => out.push(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexerMode;

    fn token(kind: TokenKind, offset: usize, length: usize) -> Token {
        Token::new(kind, offset, length, vec![LexerMode::Scripting])
    }

    #[test]
    fn test_phrase_kind_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in PhraseKind::ALL {
            assert!(seen.insert(kind.name()), "duplicate name {}", kind.name());
        }
    }

    #[test]
    fn test_token_walk_covers_error_children() {
        let mut inner = Phrase::new(PhraseKind::ExpressionStatement);
        inner.children.push(token(TokenKind::VariableName, 0, 2).into());

        let mut error = ErrorPhrase::new(token(TokenKind::Unknown, 2, 1), None);
        error.children.push(token(TokenKind::Unknown, 2, 1));
        inner.children.push(SyntaxNode::Error(error));

        let mut root = Phrase::new(PhraseKind::StatementList);
        root.children.push(inner.into());
        root.children.push(token(TokenKind::Semicolon, 3, 1).into());

        let kinds: Vec<TokenKind> = root.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::VariableName, TokenKind::Unknown, TokenKind::Semicolon]
        );
        assert_eq!(root.errors().len(), 1);
    }

    #[test]
    fn test_find_is_depth_first() {
        let mut inner = Phrase::new(PhraseKind::SimpleVariable);
        inner.children.push(token(TokenKind::VariableName, 0, 2).into());
        let mut outer = Phrase::new(PhraseKind::ExpressionStatement);
        outer.children.push(inner.into());

        assert!(outer.find(PhraseKind::SimpleVariable).is_some());
        assert!(outer.find(PhraseKind::IfStatement).is_none());
    }
}
