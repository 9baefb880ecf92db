/// Parser core: state, the operator-precedence table, and the static
/// resynchronization sets.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`; see the note there.
/// - Precedence/associativity values mirror the PHP operator table; ties
///   are broken by the associativity flag, with the ternary handled
///   specially in the expression loop.
const STATEMENT_LIST_RECOVER_SET: &[TokenKind] = &[
    TokenKind::Use,
    TokenKind::HaltCompiler,
    TokenKind::Const,
    TokenKind::Function,
    TokenKind::Class,
    TokenKind::Abstract,
    TokenKind::Final,
    TokenKind::Trait,
    TokenKind::Interface,
    TokenKind::OpenBrace,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Do,
    TokenKind::For,
    TokenKind::Switch,
    TokenKind::Break,
    TokenKind::Continue,
    TokenKind::Return,
    TokenKind::Global,
    TokenKind::Static,
    TokenKind::Echo,
    TokenKind::Unset,
    TokenKind::ForEach,
    TokenKind::Declare,
    TokenKind::Try,
    TokenKind::Throw,
    TokenKind::Goto,
    TokenKind::Semicolon,
    TokenKind::CloseTag,
    TokenKind::OpenTagEcho,
    TokenKind::Text,
    TokenKind::OpenTag,
];

const CLASS_MEMBER_DECLARATION_LIST_RECOVER_SET: &[TokenKind] = &[
    TokenKind::Public,
    TokenKind::Protected,
    TokenKind::Private,
    TokenKind::Static,
    TokenKind::Abstract,
    TokenKind::Final,
    TokenKind::Function,
    TokenKind::Var,
    TokenKind::Const,
    TokenKind::Use,
];

const ENCAPSULATED_VARIABLE_LIST_RECOVER_SET: &[TokenKind] = &[
    TokenKind::EncapsulatedAndWhitespace,
    TokenKind::DollarCurlyOpen,
    TokenKind::CurlyOpen,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Associativity {
    None,
    Left,
    Right,
}

/// Precedence and associativity for operator tokens; `(0, None)` for
/// everything that is not an operator. Unary operators appear here too so
/// their right-hand sides bind at the correct level.
fn precedence_associativity(kind: TokenKind) -> (u8, Associativity) {
    match kind {
        TokenKind::AsteriskAsterisk => (48, Associativity::Right),
        TokenKind::PlusPlus
        | TokenKind::MinusMinus
        | TokenKind::Tilde
        | TokenKind::IntegerCast
        | TokenKind::FloatCast
        | TokenKind::StringCast
        | TokenKind::ArrayCast
        | TokenKind::ObjectCast
        | TokenKind::BooleanCast
        | TokenKind::UnsetCast
        | TokenKind::AtSymbol => (47, Associativity::Right),
        TokenKind::InstanceOf => (46, Associativity::None),
        TokenKind::Exclamation => (45, Associativity::Right),
        TokenKind::Asterisk | TokenKind::ForwardSlash | TokenKind::Percent => {
            (44, Associativity::Left)
        }
        TokenKind::Plus | TokenKind::Minus | TokenKind::Dot => (43, Associativity::Left),
        TokenKind::LessThanLessThan | TokenKind::GreaterThanGreaterThan => {
            (42, Associativity::Left)
        }
        TokenKind::LessThan
        | TokenKind::GreaterThan
        | TokenKind::LessThanEquals
        | TokenKind::GreaterThanEquals => (41, Associativity::None),
        TokenKind::EqualsEquals
        | TokenKind::EqualsEqualsEquals
        | TokenKind::ExclamationEquals
        | TokenKind::ExclamationEqualsEquals
        | TokenKind::Spaceship => (40, Associativity::None),
        TokenKind::Ampersand => (39, Associativity::Left),
        TokenKind::Caret => (38, Associativity::Left),
        TokenKind::Bar => (37, Associativity::Left),
        TokenKind::AmpersandAmpersand => (36, Associativity::Left),
        TokenKind::BarBar => (35, Associativity::Left),
        TokenKind::QuestionQuestion => (34, Associativity::Right),
        // ?: ternary
        TokenKind::Question => (33, Associativity::Left),
        TokenKind::Equals
        | TokenKind::DotEquals
        | TokenKind::PlusEquals
        | TokenKind::MinusEquals
        | TokenKind::AsteriskEquals
        | TokenKind::ForwardslashEquals
        | TokenKind::PercentEquals
        | TokenKind::AsteriskAsteriskEquals
        | TokenKind::AmpersandEquals
        | TokenKind::BarEquals
        | TokenKind::CaretEquals
        | TokenKind::LessThanLessThanEquals
        | TokenKind::GreaterThanGreaterThanEquals => (32, Associativity::Right),
        TokenKind::And => (31, Associativity::Left),
        TokenKind::Xor => (30, Associativity::Left),
        TokenKind::Or => (29, Associativity::Left),
        _ => (0, Associativity::None),
    }
}

/// Phrase kind produced when `kind` is used as a binary operator;
/// `PhraseKind::Unknown` when it is not one.
fn binary_phrase_kind(kind: TokenKind) -> PhraseKind {
    match kind {
        TokenKind::Question => PhraseKind::TernaryExpression,
        TokenKind::Dot | TokenKind::Plus | TokenKind::Minus => PhraseKind::AdditiveExpression,
        TokenKind::Bar | TokenKind::Ampersand | TokenKind::Caret => PhraseKind::BitwiseExpression,
        TokenKind::Asterisk | TokenKind::ForwardSlash | TokenKind::Percent => {
            PhraseKind::MultiplicativeExpression
        }
        TokenKind::AsteriskAsterisk => PhraseKind::ExponentiationExpression,
        TokenKind::LessThanLessThan | TokenKind::GreaterThanGreaterThan => {
            PhraseKind::ShiftExpression
        }
        TokenKind::AmpersandAmpersand
        | TokenKind::BarBar
        | TokenKind::And
        | TokenKind::Or
        | TokenKind::Xor => PhraseKind::LogicalExpression,
        TokenKind::EqualsEqualsEquals
        | TokenKind::ExclamationEqualsEquals
        | TokenKind::EqualsEquals
        | TokenKind::ExclamationEquals => PhraseKind::EqualityExpression,
        TokenKind::LessThan
        | TokenKind::LessThanEquals
        | TokenKind::GreaterThan
        | TokenKind::GreaterThanEquals
        | TokenKind::Spaceship => PhraseKind::RelationalExpression,
        TokenKind::QuestionQuestion => PhraseKind::CoalesceExpression,
        TokenKind::Equals => PhraseKind::SimpleAssignmentExpression,
        TokenKind::PlusEquals
        | TokenKind::MinusEquals
        | TokenKind::AsteriskEquals
        | TokenKind::AsteriskAsteriskEquals
        | TokenKind::ForwardslashEquals
        | TokenKind::DotEquals
        | TokenKind::PercentEquals
        | TokenKind::AmpersandEquals
        | TokenKind::BarEquals
        | TokenKind::CaretEquals
        | TokenKind::LessThanLessThanEquals
        | TokenKind::GreaterThanGreaterThanEquals => PhraseKind::CompoundAssignmentExpression,
        TokenKind::InstanceOf => PhraseKind::InstanceOfExpression,
        _ => PhraseKind::Unknown,
    }
}

/// Parser state for one parse invocation.
///
/// ## Notes
/// - The parser owns the full token buffer up front; `peek(n)` is unbounded
///   significant-token lookahead over it.
/// - `stack` holds the phrases currently under construction; children are
///   always appended to the top. The finished root is the last phrase
///   popped.
/// - `recovering` suppresses error phrases after the first mismatch of a
///   recovery event; any successful match clears it.
struct Parser {
    tokens: Vec<Token>,
    offset: usize,
    stack: Vec<Phrase>,
    recovering: bool,
    recover_set_stack: Vec<Vec<TokenKind>>,
}

impl Parser {
    /// Create a parser over an eagerly lexed token buffer. The buffer must
    /// end with the `EndOfFile` token, which `crate::lexer::lex` guarantees.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            offset: 0,
            stack: Vec::new(),
            recovering: false,
            recover_set_stack: Vec::new(),
        }
    }

    /// Parse the whole buffer into the root statement list, then attach any
    /// trailing trivia so the tree reconstructs the source exactly.
    fn parse(mut self) -> Phrase {
        let mut statement_list = self.statement_list(&[TokenKind::EndOfFile]);
        self.hidden_into(&mut statement_list);

        statement_list
    }
}
