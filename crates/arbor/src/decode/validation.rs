//! Grammar recognizer: the parser's walk without the tree.
//!
//! Accepts exactly the language [`parser::parse`](crate::decode::parser::parse)
//! accepts (same nesting bound, numeric conversion guard, string and escape
//! rules, trailing-content rule) but allocates nothing per value. Diagnostics
//! travel in the returned error, so concurrent parse and validate calls never
//! interfere.

use crate::decode::cursor::Cursor;
use crate::decode::{hex_val, is_high_surrogate, is_low_surrogate};
use crate::error::{ErrorCode, Result};

/// Checks that `input` is one well-formed JSON document.
pub fn validate(input: &str) -> Result<()> {
    let mut v = Validator {
        cur: Cursor::new(input),
    };
    v.check_value()?;
    v.cur.skip_whitespace();
    if !v.cur.is_eof() {
        return Err(v.cur.error(
            ErrorCode::UnexpectedContent,
            "unexpected content after JSON value",
        ));
    }
    Ok(())
}

struct Validator<'a> {
    cur: Cursor<'a>,
}

impl Validator<'_> {
    fn check_value(&mut self) -> Result<()> {
        self.cur.skip_whitespace();
        let Some(b) = self.cur.peek() else {
            return Err(self
                .cur
                .error(ErrorCode::UnexpectedChar, "unexpected end of input"));
        };
        match b {
            b'n' => self
                .cur
                .expect_literal("null", ErrorCode::InvalidValue, "invalid token: expected 'null'"),
            b't' => self
                .cur
                .expect_literal("true", ErrorCode::InvalidValue, "invalid token: expected 'true'"),
            b'f' => self.cur.expect_literal(
                "false",
                ErrorCode::InvalidValue,
                "invalid token: expected 'false'",
            ),
            b'"' => self.check_string(),
            b'[' => self.check_array(),
            b'{' => self.check_object(),
            b'-' | b'0'..=b'9' => self.check_number(),
            _ => {
                let message = match self.cur.input()[self.cur.pos()..].chars().next() {
                    Some(c) if c.is_control() => {
                        format!("unexpected character (code: {})", c as u32)
                    }
                    Some(c) => format!("unexpected character '{c}'"),
                    None => String::from("unexpected end of input"),
                };
                Err(self.cur.error(ErrorCode::InvalidValue, message))
            }
        }
    }

    fn check_number(&mut self) -> Result<()> {
        let start = self.cur.pos();

        if self.cur.peek() == Some(b'-') {
            self.cur.bump();
        }

        match self.cur.peek() {
            Some(b'0') => {
                self.cur.bump();
                if matches!(self.cur.peek(), Some(b) if b.is_ascii_digit()) {
                    return Err(self
                        .cur
                        .error(ErrorCode::InvalidNumber, "leading zeros are not allowed"));
                }
            }
            Some(b) if b.is_ascii_digit() => {
                while matches!(self.cur.peek(), Some(b) if b.is_ascii_digit()) {
                    self.cur.bump();
                }
            }
            _ => {
                return Err(self.cur.error(ErrorCode::InvalidNumber, "expected digit"));
            }
        }

        if self.cur.peek() == Some(b'.') {
            self.cur.bump();
            if !matches!(self.cur.peek(), Some(b) if b.is_ascii_digit()) {
                return Err(self
                    .cur
                    .error(ErrorCode::InvalidNumber, "expected digit after decimal point"));
            }
            while matches!(self.cur.peek(), Some(b) if b.is_ascii_digit()) {
                self.cur.bump();
            }
        }

        if matches!(self.cur.peek(), Some(b'e' | b'E')) {
            self.cur.bump();
            if matches!(self.cur.peek(), Some(b'+' | b'-')) {
                self.cur.bump();
            }
            if !matches!(self.cur.peek(), Some(b) if b.is_ascii_digit()) {
                return Err(self
                    .cur
                    .error(ErrorCode::InvalidNumber, "expected digit in exponent"));
            }
            while matches!(self.cur.peek(), Some(b) if b.is_ascii_digit()) {
                self.cur.bump();
            }
        }

        // the parser runs the same conversion, so the recognizer must apply
        // the same NaN/infinity guard to accept the same language
        let lexeme = &self.cur.input()[start..self.cur.pos()];
        match lexeme.parse::<f64>() {
            Ok(n) if n.is_nan() => Err(self
                .cur
                .error(ErrorCode::InvalidNumberNan, "number literal converts to NaN")),
            Ok(n) if n.is_infinite() => Err(self.cur.error(
                ErrorCode::InvalidNumberInfinity,
                "number literal overflows to infinity",
            )),
            Ok(_) => Ok(()),
            Err(_) => Err(self
                .cur
                .error(ErrorCode::InvalidNumber, "malformed number literal")),
        }
    }

    fn check_string(&mut self) -> Result<()> {
        if self.cur.peek() != Some(b'"') {
            return Err(self
                .cur
                .error(ErrorCode::UnexpectedChar, "expected '\"' at start of string"));
        }
        self.cur.bump();

        loop {
            let Some(b) = self.cur.peek() else {
                return Err(self
                    .cur
                    .error(ErrorCode::UnterminatedString, "unterminated string"));
            };
            match b {
                b'"' => {
                    self.cur.bump();
                    return Ok(());
                }
                b'\\' => {
                    self.cur.bump();
                    let Some(esc) = self.cur.peek() else {
                        return Err(self.cur.error(
                            ErrorCode::UnterminatedString,
                            "unexpected end of input after escape character",
                        ));
                    };
                    match esc {
                        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                            self.cur.bump();
                        }
                        b'u' => {
                            self.cur.bump();
                            self.check_unicode_escape()?;
                        }
                        _ => {
                            return Err(self
                                .cur
                                .error(ErrorCode::InvalidEscape, "invalid escape sequence"));
                        }
                    }
                }
                0x00..=0x1F => {
                    return Err(self.cur.error(
                        ErrorCode::InvalidStringChar,
                        "control character in string must be escaped",
                    ));
                }
                _ => {
                    self.cur.bump_char();
                }
            }
        }
    }

    fn check_unicode_escape(&mut self) -> Result<()> {
        let cp = self.read_hex4()?;
        if is_low_surrogate(cp) {
            return Err(self
                .cur
                .error(ErrorCode::InvalidUnicode, "unpaired low surrogate"));
        }
        if is_high_surrogate(cp) {
            if self.cur.peek() != Some(b'\\') {
                return Err(self.cur.error(
                    ErrorCode::InvalidUnicode,
                    "expected low surrogate after high surrogate",
                ));
            }
            self.cur.bump();
            if self.cur.peek() != Some(b'u') {
                return Err(self.cur.error(
                    ErrorCode::InvalidUnicode,
                    "expected low surrogate after high surrogate",
                ));
            }
            self.cur.bump();
            let low = self.read_hex4()?;
            if !is_low_surrogate(low) {
                return Err(self.cur.error(
                    ErrorCode::InvalidUnicode,
                    "expected low surrogate after high surrogate",
                ));
            }
        }
        Ok(())
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut cp = 0u32;
        for _ in 0..4 {
            let digit = self.cur.peek().and_then(hex_val);
            let Some(digit) = digit else {
                return Err(self.cur.error(
                    ErrorCode::InvalidUnicode,
                    "invalid hex digit in unicode escape",
                ));
            };
            cp = (cp << 4) | digit;
            self.cur.bump();
        }
        Ok(cp)
    }

    fn check_array(&mut self) -> Result<()> {
        self.cur.enter()?;
        self.cur.bump(); // '['
        let result = self.check_array_items();
        self.cur.leave();
        result
    }

    fn check_array_items(&mut self) -> Result<()> {
        self.cur.skip_whitespace();
        if self.cur.peek() == Some(b']') {
            self.cur.bump();
            return Ok(());
        }

        loop {
            self.check_value()?;
            self.cur.skip_whitespace();
            match self.cur.peek() {
                Some(b']') => {
                    self.cur.bump();
                    return Ok(());
                }
                Some(b',') => {
                    self.cur.bump();
                    self.cur.skip_whitespace();
                    if self.cur.peek() == Some(b']') {
                        return Err(self.cur.error(
                            ErrorCode::UnexpectedChar,
                            "trailing comma not allowed in array",
                        ));
                    }
                }
                _ => {
                    return Err(self.cur.error(
                        ErrorCode::ExpectedCommaOrBracket,
                        "expected ',' or ']' after array element",
                    ));
                }
            }
        }
    }

    fn check_object(&mut self) -> Result<()> {
        self.cur.enter()?;
        self.cur.bump(); // '{'
        let result = self.check_object_members();
        self.cur.leave();
        result
    }

    fn check_object_members(&mut self) -> Result<()> {
        self.cur.skip_whitespace();
        if self.cur.peek() == Some(b'}') {
            self.cur.bump();
            return Ok(());
        }

        loop {
            self.cur.skip_whitespace();
            if self.cur.peek() != Some(b'"') {
                return Err(self
                    .cur
                    .error(ErrorCode::ExpectedKey, "expected '\"' at start of object key"));
            }
            self.check_string()?;

            self.cur.skip_whitespace();
            if self.cur.peek() != Some(b':') {
                return Err(self
                    .cur
                    .error(ErrorCode::ExpectedColon, "expected ':' after object key"));
            }
            self.cur.bump();

            self.check_value()?;

            self.cur.skip_whitespace();
            match self.cur.peek() {
                Some(b'}') => {
                    self.cur.bump();
                    return Ok(());
                }
                Some(b',') => {
                    self.cur.bump();
                    self.cur.skip_whitespace();
                    if self.cur.peek() == Some(b'}') {
                        return Err(self.cur.error(
                            ErrorCode::UnexpectedChar,
                            "trailing comma not allowed in object",
                        ));
                    }
                }
                _ => {
                    return Err(self.cur.error(
                        ErrorCode::ExpectedCommaOrBrace,
                        "expected ',' or '}' after object value",
                    ));
                }
            }
        }
    }
}
