//! String-sublanguage scanning.
//!
//! Covers every mode the lexer can be in while inside a string-like
//! construct: double-quoted bodies, heredoc/nowdoc bodies and terminators,
//! backtick shell commands, `$var[...]` subscript offsets, and the two
//! lookahead modes entered after `${` and `->`/`?->`.
//!
//! The scanners share one shape: consume raw content up to the closing
//! delimiter or an interpolation trigger (`$` before an identifier start or
//! `{`, or `{` before `$`), emit the raw span as `EncapsulatedAndWhitespace`,
//! and leave the trigger itself for the next dispatch.

use super::tokens::{LexerMode, Token, TokenKind};
use super::{is_label_char, is_label_start, is_whitespace, Lexer};

impl<'s> Lexer<'s> {
    // ========================================================================
    // Scripting-mode entry points
    // ========================================================================

    /// Single-quoted string: find the first unescaped `'`. Reaching end of
    /// input yields a best-effort `EncapsulatedAndWhitespace` token; the
    /// parser flags the missing terminator.
    pub(super) fn scripting_single_quote(&mut self, start: usize) -> Token {
        // an optional leading \ is already consumed
        let b = self.bytes();

        self.position += 1;
        while self.position < b.len() {
            match b[self.position] {
                b'\'' => {
                    self.position += 1;

                    return self.emit(TokenKind::StringLiteral, start);
                }
                b'\\' => {
                    self.position += 1;
                    if self.position < b.len() {
                        self.position += 1;
                    }
                }
                _ => self.position += 1,
            }
        }

        self.emit(TokenKind::EncapsulatedAndWhitespace, start)
    }

    /// Double-quoted string: prescan the body. A body with no interpolation
    /// triggers is a single `StringLiteral`; otherwise emit just the opening
    /// quote, remember how far the prescan got, and switch to the
    /// `DoubleQuoted` mode.
    pub(super) fn scripting_double_quote(&mut self, start: usize) -> Token {
        // an optional leading \ is already consumed
        self.position += 1;
        let b = self.bytes();
        let mut n = self.position;

        while n < b.len() {
            let c = b[n];
            n += 1;
            match c {
                b'"' => {
                    self.position = n;

                    return self.emit(TokenKind::StringLiteral, start);
                }
                b'$' => {
                    if n < b.len() && (is_label_start(b[n]) || b[n] == b'{') {
                        n -= 1;
                        break;
                    }
                }
                b'{' => {
                    if n < b.len() && b[n] == b'$' {
                        n -= 1;
                        break;
                    }
                }
                b'\\' => {
                    if n < b.len() {
                        n += 1;
                    }
                }
                _ => {}
            }
        }

        self.double_quote_scanned = Some(n);
        let token = self.emit(TokenKind::DoubleQuote, start);
        *self.top_mode() = LexerMode::DoubleQuoted;

        token
    }

    /// Heredoc/nowdoc opener: `<<<`, optional horizontal whitespace, an
    /// optionally quoted label, a line break. Returns `None` when the text
    /// after `<<` does not form an opener (the caller falls back to a shift
    /// token).
    pub(super) fn scripting_heredoc(&mut self, start: usize) -> Option<Token> {
        // position is on the first <
        let b = self.bytes();
        let mut k = self.position;

        for _ in 0..3 {
            if k >= b.len() || b[k] != b'<' {
                return None;
            }
            k += 1;
        }

        while k < b.len() && (b[k] == b' ' || b[k] == b'\t') {
            k += 1;
        }

        let mut quote = 0u8;
        if k < b.len() && (b[k] == b'\'' || b[k] == b'"') {
            quote = b[k];
            k += 1;
        }

        let label_start = k;
        if k < b.len() && is_label_start(b[k]) {
            k += 1;
            while k < b.len() && is_label_char(b[k]) {
                k += 1;
            }
        } else {
            return None;
        }
        let label_end = k;

        if quote != 0 {
            if k < b.len() && b[k] == quote {
                k += 1;
            } else {
                return None;
            }
        }

        if k < b.len() {
            match b[k] {
                b'\r' => {
                    k += 1;
                    if k < b.len() && b[k] == b'\n' {
                        k += 1;
                    }
                }
                b'\n' => k += 1,
                _ => return None,
            }
        }

        self.position = k;
        let label = self.source[label_start..label_end].to_string();
        let token = self.emit(TokenKind::StartHeredoc, start);

        *self.top_mode() = if quote == b'\'' {
            LexerMode::NowDoc
        } else {
            LexerMode::HereDoc
        };

        // zero-body form: the terminator sits directly on the next line
        if self.heredoc_end_at(self.position, &label) {
            *self.top_mode() = LexerMode::EndHereDoc;
        }

        self.heredoc_label = Some(label);

        Some(token)
    }

    /// True when the stored terminator label starts at `n`, optionally
    /// followed by `;`, then a line break or end of input.
    pub(super) fn heredoc_end_at(&self, n: usize, label: &str) -> bool {
        let b = self.bytes();
        if label.is_empty() || n + label.len() > b.len() {
            return false;
        }
        if &b[n..n + label.len()] != label.as_bytes() {
            return false;
        }

        let mut k = n + label.len();
        if k < b.len() && b[k] == b';' {
            k += 1;
        }

        k >= b.len() || b[k] == b'\n' || b[k] == b'\r'
    }

    // ========================================================================
    // DoubleQuoted mode
    // ========================================================================

    pub(super) fn double_quoted(&mut self) -> Token {
        let start = self.position;

        match self.bytes()[self.position] {
            b'$' => {
                if let Some(token) = self.encapsulated_dollar() {
                    return token;
                }
            }
            b'{' => {
                if self.byte_at(self.position + 1) == Some(b'$') {
                    self.position += 1;
                    let token = self.emit(TokenKind::CurlyOpen, start);
                    self.mode_stack.push(LexerMode::Scripting);

                    return token;
                }
            }
            b'"' => {
                self.position += 1;
                let token = self.emit(TokenKind::DoubleQuote, start);
                *self.top_mode() = LexerMode::Scripting;

                return token;
            }
            _ => {}
        }

        self.double_quoted_any()
    }

    /// A `$` inside an interpolating body: `${` opens a var-name lookahead,
    /// `$label[` a subscript offset, `$label->prop` a property lookahead,
    /// `$label` a plain variable. Anything else is not a trigger and falls
    /// back to raw content scanning.
    pub(super) fn encapsulated_dollar(&mut self) -> Option<Token> {
        let start = self.position;
        let b = self.bytes();
        let mut k = self.position + 1;

        if k >= b.len() {
            return None;
        }

        if b[k] == b'{' {
            self.position += 2;
            let token = Token::new(TokenKind::DollarCurlyOpen, start, 2, self.snapshot());
            self.mode_stack.push(LexerMode::LookingForVarName);

            return Some(token);
        }

        if !is_label_start(b[k]) {
            return None;
        }

        k += 1;
        while k < b.len() && is_label_char(b[k]) {
            k += 1;
        }

        if k < b.len() && b[k] == b'[' {
            let snapshot = self.snapshot();
            self.position = k;
            self.mode_stack.push(LexerMode::VarOffset);

            return Some(Token::new(
                TokenKind::VariableName,
                start,
                k - start,
                snapshot,
            ));
        }

        if k < b.len() && b[k] == b'-' {
            let n = k + 1;
            if n < b.len() && b[n] == b'>' && n + 1 < b.len() && is_label_start(b[n + 1]) {
                let snapshot = self.snapshot();
                self.position = k;
                self.mode_stack.push(LexerMode::LookingForProperty);

                return Some(Token::new(
                    TokenKind::VariableName,
                    start,
                    k - start,
                    snapshot,
                ));
            }
        }

        self.position = k;

        Some(self.emit(TokenKind::VariableName, start))
    }

    /// Raw double-quoted content up to the closing quote or the next
    /// interpolation trigger. A prescan boundary recorded by
    /// `scripting_double_quote` is reused when it still lies ahead.
    pub(super) fn double_quoted_any(&mut self) -> Token {
        let start = self.position;

        if let Some(scanned) = self.double_quote_scanned.take() {
            if scanned > self.position {
                self.position = scanned;

                return self.emit(TokenKind::EncapsulatedAndWhitespace, start);
            }
        }

        let b = self.bytes();
        let mut n = self.position + 1;

        if b[self.position] == b'\\' && n + 1 < b.len() {
            n += 1;
        }

        while n < b.len() {
            let c = b[n];
            n += 1;
            match c {
                b'"' => {
                    n -= 1;
                    break;
                }
                b'$' => {
                    if n < b.len() && (is_label_start(b[n]) || b[n] == b'{') {
                        n -= 1;
                        break;
                    }
                }
                b'{' => {
                    if n < b.len() && b[n] == b'$' {
                        n -= 1;
                        break;
                    }
                }
                b'\\' => {
                    if n < b.len() {
                        n += 1;
                    }
                }
                _ => {}
            }
        }

        self.position = n;

        self.emit(TokenKind::EncapsulatedAndWhitespace, start)
    }

    // ========================================================================
    // HereDoc / NowDoc / EndHereDoc modes
    // ========================================================================

    pub(super) fn heredoc(&mut self) -> Token {
        let start = self.position;

        match self.bytes()[self.position] {
            b'$' => {
                if let Some(token) = self.encapsulated_dollar() {
                    return token;
                }
            }
            b'{' => {
                if self.byte_at(self.position + 1) == Some(b'$') {
                    self.position += 1;
                    let token = self.emit(TokenKind::CurlyOpen, start);
                    self.mode_stack.push(LexerMode::Scripting);

                    return token;
                }
            }
            _ => {}
        }

        self.heredoc_any()
    }

    /// Heredoc body content: like double-quoted content, but the closing
    /// condition is the terminator label at the start of a line, and a
    /// backslash does not escape line breaks.
    fn heredoc_any(&mut self) -> Token {
        let start = self.position;
        let label = self.heredoc_label.clone().unwrap_or_default();
        let b = self.bytes();
        let mut n = self.position;
        let mut end_found = false;

        while n < b.len() {
            let c = b[n];
            n += 1;
            match c {
                b'\r' | b'\n' => {
                    if c == b'\r' && n < b.len() && b[n] == b'\n' {
                        n += 1;
                    }

                    if self.heredoc_end_at(n, &label) {
                        // leave the line break before the label for the
                        // terminator token
                        if n >= 2 && &b[n - 2..n] == b"\r\n" {
                            n -= 2;
                        } else {
                            n -= 1;
                        }
                        end_found = true;
                        break;
                    }
                }
                b'$' => {
                    if n < b.len() && (is_label_start(b[n]) || b[n] == b'{') {
                        n -= 1;
                        break;
                    }
                }
                b'{' => {
                    if n < b.len() && b[n] == b'$' {
                        n -= 1;
                        break;
                    }
                }
                b'\\' => {
                    if n < b.len() && b[n] != b'\n' && b[n] != b'\r' {
                        n += 1;
                    }
                }
                _ => {}
            }
        }

        self.position = n;
        let token = self.emit(TokenKind::EncapsulatedAndWhitespace, start);
        if end_found {
            *self.top_mode() = LexerMode::EndHereDoc;
        }

        token
    }

    /// Nowdoc body: verbatim to the terminator label, no interpolation
    /// triggers recognized.
    pub(super) fn nowdoc(&mut self) -> Token {
        let start = self.position;
        let label = self.heredoc_label.clone().unwrap_or_default();
        let b = self.bytes();
        let mut n = self.position;

        while n < b.len() {
            let c = b[n];
            n += 1;
            if c == b'\r' || c == b'\n' {
                if c == b'\r' && n < b.len() && b[n] == b'\n' {
                    n += 1;
                }

                if self.heredoc_end_at(n, &label) {
                    if n >= 2 && &b[n - 2..n] == b"\r\n" {
                        n -= 2;
                    } else {
                        n -= 1;
                    }
                    self.position = n;
                    let token = self.emit(TokenKind::EncapsulatedAndWhitespace, start);
                    *self.top_mode() = LexerMode::EndHereDoc;

                    return token;
                }
            }
        }

        self.position = n;

        self.emit(TokenKind::EncapsulatedAndWhitespace, start)
    }

    /// Terminator: consume the line breaks left by the body scan plus the
    /// stored label, clear the label, return to scripting.
    pub(super) fn end_heredoc(&mut self) -> Token {
        let start = self.position;

        while self
            .byte_at(self.position)
            .is_some_and(|c| c == b'\r' || c == b'\n')
        {
            self.position += 1;
        }

        let label_len = self.heredoc_label.take().map_or(0, |label| label.len());
        self.position += label_len;

        let token = self.emit(TokenKind::EndHeredoc, start);
        *self.top_mode() = LexerMode::Scripting;

        token
    }

    // ========================================================================
    // Backtick mode
    // ========================================================================

    pub(super) fn backtick(&mut self) -> Token {
        let start = self.position;

        match self.bytes()[self.position] {
            b'$' => {
                if let Some(token) = self.encapsulated_dollar() {
                    return token;
                }
            }
            b'{' => {
                if self.byte_at(self.position + 1) == Some(b'$') {
                    self.position += 1;
                    let token = self.emit(TokenKind::CurlyOpen, start);
                    self.mode_stack.push(LexerMode::Scripting);

                    return token;
                }
            }
            b'`' => {
                self.position += 1;
                let token = self.emit(TokenKind::Backtick, start);
                *self.top_mode() = LexerMode::Scripting;

                return token;
            }
            _ => {}
        }

        self.backtick_any()
    }

    fn backtick_any(&mut self) -> Token {
        let start = self.position;
        let b = self.bytes();
        let mut n = self.position + 1;

        if b[self.position] == b'\\' && n < b.len() {
            n += 1;
        }

        while n < b.len() {
            let c = b[n];
            n += 1;
            match c {
                b'`' => {
                    n -= 1;
                    break;
                }
                b'$' => {
                    if n < b.len() && (is_label_start(b[n]) || b[n] == b'{') {
                        n -= 1;
                        break;
                    }
                }
                b'{' => {
                    if n < b.len() && b[n] == b'$' {
                        n -= 1;
                        break;
                    }
                }
                b'\\' => {
                    if n < b.len() {
                        n += 1;
                    }
                }
                _ => {}
            }
        }

        self.position = n;

        self.emit(TokenKind::EncapsulatedAndWhitespace, start)
    }

    // ========================================================================
    // VarOffset mode: inside [...] after an interpolated $var
    // ========================================================================

    /// Only a bare variable, an integer/identifier key, or a unary-minus
    /// integer are valid here; anything else is `Unknown` and pops the mode.
    pub(super) fn var_offset(&mut self) -> Token {
        let start = self.position;
        let b = self.bytes();

        match b[self.position] {
            b'$' if self
                .byte_at(self.position + 1)
                .is_some_and(is_label_start) =>
            {
                self.position += 2;
                while self.position < b.len() && is_label_char(b[self.position]) {
                    self.position += 1;
                }

                self.emit(TokenKind::VariableName, start)
            }
            b'[' => self.single(TokenKind::OpenBracket),
            b']' => {
                self.pop_mode();
                self.position += 1;

                self.emit(TokenKind::CloseBracket, start)
            }
            b'-' => self.single(TokenKind::Minus),
            b'0'..=b'9' => self.var_offset_numeric(),
            c if is_label_start(c) => {
                self.position += 1;
                while self.position < b.len() && is_label_char(b[self.position]) {
                    self.position += 1;
                }

                self.emit(TokenKind::Name, start)
            }
            _ => {
                let snapshot = self.snapshot();
                self.pop_mode();
                self.position += 1;

                Token::new(TokenKind::Unknown, start, 1, snapshot)
            }
        }
    }

    // ========================================================================
    // LookingForVarName mode: after ${
    // ========================================================================

    /// `${name}` and `${name[...]}` treat `name` as a simple variable name;
    /// anything else pops without consuming so the scripting mode parses a
    /// general `${expr}` expression.
    pub(super) fn looking_for_var_name(&mut self) -> Option<Token> {
        let start = self.position;
        let b = self.bytes();
        let snapshot = self.snapshot();

        if is_label_start(b[self.position]) {
            let mut k = self.position + 1;
            while k < b.len() && is_label_char(b[k]) {
                k += 1;
            }

            if k < b.len() && (b[k] == b'[' || b[k] == b'}') {
                *self.top_mode() = LexerMode::Scripting;
                self.position = k;

                return Some(Token::new(
                    TokenKind::VariableName,
                    start,
                    k - start,
                    snapshot,
                ));
            }
        }

        *self.top_mode() = LexerMode::Scripting;

        None
    }

    // ========================================================================
    // LookingForProperty mode: after -> or ?->
    // ========================================================================

    /// Expects a bare member name. On anything else the mode pops without
    /// yielding a token and the driver re-dispatches in the parent mode;
    /// the arrow then belongs to whatever that mode makes of it.
    pub(super) fn looking_for_property(&mut self) -> Option<Token> {
        let start = self.position;
        let b = self.bytes();
        let snapshot = self.snapshot();
        let c = b[self.position];

        if is_whitespace(c) {
            self.position += 1;
            while self.position < b.len() && is_whitespace(b[self.position]) {
                self.position += 1;
            }

            return Some(Token::new(
                TokenKind::Whitespace,
                start,
                self.position - start,
                snapshot,
            ));
        }

        if is_label_start(c) {
            self.position += 1;
            while self.position < b.len() && is_label_char(b[self.position]) {
                self.position += 1;
            }
            self.pop_mode();

            return Some(Token::new(
                TokenKind::Name,
                start,
                self.position - start,
                snapshot,
            ));
        }

        if c == b'-' && self.byte_at(self.position + 1) == Some(b'>') {
            self.position += 2;

            return Some(Token::new(TokenKind::Arrow, start, 2, snapshot));
        }

        if c == b'?'
            && self.byte_at(self.position + 1) == Some(b'-')
            && self.byte_at(self.position + 2) == Some(b'>')
        {
            self.position += 3;

            return Some(Token::new(TokenKind::QuestionArrow, start, 3, snapshot));
        }

        self.pop_mode();

        None
    }
}
