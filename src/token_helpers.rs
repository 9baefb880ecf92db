//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites:
//! trivia classification for the token cursor, and the reserved-word
//! classes the grammar consults when identifiers and keywords overlap
//! (member names, trait aliases, class constants).

use crate::lexer::{Token, TokenKind};

impl TokenKind {
    /// Comments, doc comments, and whitespace: preserved in the tree for
    /// round-tripping, invisible to grammar decisions.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Comment | TokenKind::DocumentComment | TokenKind::Whitespace
        )
    }

    /// Reserved words that may still appear as member names and class
    /// constants.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Include
                | TokenKind::IncludeOnce
                | TokenKind::Eval
                | TokenKind::Require
                | TokenKind::RequireOnce
                | TokenKind::Or
                | TokenKind::Xor
                | TokenKind::And
                | TokenKind::InstanceOf
                | TokenKind::New
                | TokenKind::Clone
                | TokenKind::Exit
                | TokenKind::If
                | TokenKind::ElseIf
                | TokenKind::Else
                | TokenKind::EndIf
                | TokenKind::Echo
                | TokenKind::Do
                | TokenKind::While
                | TokenKind::EndWhile
                | TokenKind::For
                | TokenKind::EndFor
                | TokenKind::ForEach
                | TokenKind::EndForeach
                | TokenKind::Declare
                | TokenKind::EndDeclare
                | TokenKind::As
                | TokenKind::Try
                | TokenKind::Catch
                | TokenKind::Finally
                | TokenKind::Throw
                | TokenKind::Use
                | TokenKind::InsteadOf
                | TokenKind::Global
                | TokenKind::Var
                | TokenKind::Unset
                | TokenKind::Isset
                | TokenKind::Empty
                | TokenKind::Continue
                | TokenKind::Goto
                | TokenKind::Function
                | TokenKind::Const
                | TokenKind::Return
                | TokenKind::Print
                | TokenKind::Yield
                | TokenKind::List
                | TokenKind::Switch
                | TokenKind::EndSwitch
                | TokenKind::Case
                | TokenKind::Default
                | TokenKind::Break
                | TokenKind::Array
                | TokenKind::Callable
                | TokenKind::Extends
                | TokenKind::Implements
                | TokenKind::Namespace
                | TokenKind::Trait
                | TokenKind::Interface
                | TokenKind::Class
                | TokenKind::ClassConstant
                | TokenKind::TraitConstant
                | TokenKind::FunctionConstant
                | TokenKind::MethodConstant
                | TokenKind::LineConstant
                | TokenKind::FileConstant
                | TokenKind::DirectoryConstant
                | TokenKind::NamespaceConstant
        )
    }

    /// Reserved words plus modifiers; the set usable as member names.
    pub fn is_semi_reserved(self) -> bool {
        self.is_member_modifier() || self.is_reserved()
    }

    /// Visibility and class-member modifiers.
    pub fn is_member_modifier(self) -> bool {
        matches!(
            self,
            TokenKind::Public
                | TokenKind::Protected
                | TokenKind::Private
                | TokenKind::Static
                | TokenKind::Abstract
                | TokenKind::Final
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.is_trivia()`.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}
