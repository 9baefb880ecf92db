//! Numeric literal scanning.
//!
//! `0b`/`0x` prefixes select binary/hex integer scanning; otherwise decimal
//! digits, optionally followed by `.` digits and/or an `e`/`E` exponent,
//! promote the token to `FloatingLiteral`.

use super::tokens::{Token, TokenKind};
use super::{is_hex_digit, Lexer};

impl<'s> Lexer<'s> {
    pub(super) fn scripting_numeric(&mut self) -> Token {
        let start = self.position;
        let b = self.bytes();

        if b[start] == b'0' && start + 1 < b.len() {
            let k = start + 1;
            let j = k + 1;

            if b[k] == b'b' && j < b.len() && (b[j] == b'0' || b[j] == b'1') {
                let mut j = j + 1;
                while j < b.len() && (b[j] == b'0' || b[j] == b'1') {
                    j += 1;
                }
                self.position = j;

                return self.emit(TokenKind::IntegerLiteral, start);
            }

            if b[k] == b'x' && j < b.len() && is_hex_digit(b[j]) {
                let mut j = j + 1;
                while j < b.len() && is_hex_digit(b[j]) {
                    j += 1;
                }
                self.position = j;

                return self.emit(TokenKind::IntegerLiteral, start);
            }
        }

        self.position += 1;
        while self.position < b.len() && b[self.position].is_ascii_digit() {
            self.position += 1;
        }

        match self.byte_at(self.position) {
            Some(b'.') => {
                self.position += 1;

                self.scripting_numeric_fraction_or_exponent(start, true)
            }
            Some(b'e' | b'E') => self.scripting_numeric_fraction_or_exponent(start, false),
            _ => self.emit(TokenKind::IntegerLiteral, start),
        }
    }

    /// Continue a numeric literal after a `.` (position past it) or at a
    /// candidate `e`/`E`. The exponent only counts when a digit follows the
    /// optional sign; otherwise the `e` is left for the next token.
    pub(super) fn scripting_numeric_fraction_or_exponent(
        &mut self,
        start: usize,
        has_dot: bool,
    ) -> Token {
        let b = self.bytes();

        while self.position < b.len() && b[self.position].is_ascii_digit() {
            self.position += 1;
        }

        if matches!(self.byte_at(self.position), Some(b'e' | b'E')) {
            let mut k = self.position + 1;
            if k < b.len() && (b[k] == b'+' || b[k] == b'-') {
                k += 1;
            }
            if k < b.len() && b[k].is_ascii_digit() {
                k += 1;
                while k < b.len() && b[k].is_ascii_digit() {
                    k += 1;
                }
                self.position = k;

                return self.emit(TokenKind::FloatingLiteral, start);
            }
        }

        let kind = if has_dot {
            TokenKind::FloatingLiteral
        } else {
            TokenKind::IntegerLiteral
        };

        self.emit(kind, start)
    }

    /// Numeric subscript key inside an interpolated `$var[...]`: binary,
    /// hex, or decimal integer only.
    pub(super) fn var_offset_numeric(&mut self) -> Token {
        let start = self.position;
        let b = self.bytes();

        if b[start] == b'0' {
            let k = start + 1;

            if k < b.len() && b[k] == b'b' {
                let mut j = k + 1;
                if j < b.len() && (b[j] == b'0' || b[j] == b'1') {
                    while j < b.len() && (b[j] == b'0' || b[j] == b'1') {
                        j += 1;
                    }
                    self.position = j;

                    return self.emit(TokenKind::IntegerLiteral, start);
                }
            }

            if k < b.len() && b[k] == b'x' {
                let mut j = k + 1;
                if j < b.len() && is_hex_digit(b[j]) {
                    while j < b.len() && is_hex_digit(b[j]) {
                        j += 1;
                    }
                    self.position = j;

                    return self.emit(TokenKind::IntegerLiteral, start);
                }
            }
        }

        self.position += 1;
        while self.position < b.len() && b[self.position].is_ascii_digit() {
            self.position += 1;
        }

        self.emit(TokenKind::IntegerLiteral, start)
    }
}
