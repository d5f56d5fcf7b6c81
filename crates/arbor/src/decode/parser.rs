//! Recursive-descent parser producing a [`Value`] tree.

use crate::decode::cursor::Cursor;
use crate::decode::{combine_surrogates, hex_val, is_high_surrogate, is_low_surrogate, utf8_len};
use crate::error::{ErrorCode, Result};
use crate::value::{Value, insert_entry};

/// Parses a complete JSON document into a [`Value`] tree.
///
/// Exactly one value may appear at the top level; anything besides trailing
/// whitespace is an error. A failed parse returns only the diagnostic for the
/// earliest failure, never a partial tree.
pub fn parse(input: &str) -> Result<Value> {
    let mut parser = Parser {
        cur: Cursor::new(input),
    };
    let value = parser.parse_value()?;
    parser.cur.skip_whitespace();
    if !parser.cur.is_eof() {
        return Err(parser.cur.error(
            ErrorCode::UnexpectedContent,
            "unexpected content after JSON value",
        ));
    }
    Ok(value)
}

struct Parser<'a> {
    cur: Cursor<'a>,
}

impl Parser<'_> {
    fn parse_value(&mut self) -> Result<Value> {
        self.cur.skip_whitespace();
        let Some(b) = self.cur.peek() else {
            return Err(self
                .cur
                .error(ErrorCode::UnexpectedChar, "unexpected end of input"));
        };
        match b {
            b'n' => {
                self.cur
                    .expect_literal("null", ErrorCode::InvalidValue, "invalid token: expected 'null'")?;
                Ok(Value::Null)
            }
            b't' => {
                self.cur
                    .expect_literal("true", ErrorCode::InvalidValue, "invalid token: expected 'true'")?;
                Ok(Value::Bool(true))
            }
            b'f' => {
                self.cur.expect_literal(
                    "false",
                    ErrorCode::InvalidValue,
                    "invalid token: expected 'false'",
                )?;
                Ok(Value::Bool(false))
            }
            b'"' => Ok(Value::String(self.parse_string()?)),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            b'-' | b'0'..=b'9' => self.parse_number(),
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

    fn parse_number(&mut self) -> Result<Value> {
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

        let lexeme = &self.cur.input()[start..self.cur.pos()];
        match lexeme.parse::<f64>() {
            Ok(n) if n.is_nan() => Err(self
                .cur
                .error(ErrorCode::InvalidNumberNan, "number literal converts to NaN")),
            Ok(n) if n.is_infinite() => Err(self.cur.error(
                ErrorCode::InvalidNumberInfinity,
                "number literal overflows to infinity",
            )),
            Ok(n) => Ok(Value::Number(n)),
            Err(_) => Err(self
                .cur
                .error(ErrorCode::InvalidNumber, "malformed number literal")),
        }
    }

    /// Strings are decoded in two passes: the first validates escapes and
    /// control-character rules while computing the worst-case decoded size,
    /// the second writes into a buffer sized up front.
    fn parse_string(&mut self) -> Result<String> {
        if self.cur.peek() != Some(b'"') {
            return Err(self
                .cur
                .error(ErrorCode::UnexpectedChar, "expected '\"' at start of string"));
        }
        self.cur.bump();

        let start = self.cur.pos();
        let capacity = self.measure_string()?;
        let end = self.cur.pos() - 1; // closing quote already consumed

        let mut out = String::with_capacity(capacity);
        decode_into(&self.cur.input()[start..end], &mut out);
        Ok(out)
    }

    fn measure_string(&mut self) -> Result<usize> {
        let mut capacity = 0usize;
        loop {
            let Some(b) = self.cur.peek() else {
                return Err(self
                    .cur
                    .error(ErrorCode::UnterminatedString, "unterminated string"));
            };
            match b {
                b'"' => {
                    self.cur.bump();
                    return Ok(capacity);
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
                            capacity += 1;
                        }
                        b'u' => {
                            self.cur.bump();
                            capacity += self.measure_unicode_escape()?;
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
                    capacity += self.cur.bump_char();
                }
            }
        }
    }

    /// Validates one `\uXXXX` escape (the `\u` is already consumed) and
    /// returns the UTF-8 length of the resulting code point. High surrogates
    /// must be chased by a low surrogate escape.
    fn measure_unicode_escape(&mut self) -> Result<usize> {
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
            return Ok(utf8_len(combine_surrogates(cp, low)));
        }
        Ok(utf8_len(cp))
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

    fn parse_array(&mut self) -> Result<Value> {
        self.cur.enter()?;
        self.cur.bump(); // '['
        let result = self.parse_array_items();
        self.cur.leave();
        result
    }

    fn parse_array_items(&mut self) -> Result<Value> {
        let mut items = Vec::new();

        self.cur.skip_whitespace();
        if self.cur.peek() == Some(b']') {
            self.cur.bump();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.cur.skip_whitespace();
            match self.cur.peek() {
                Some(b']') => {
                    self.cur.bump();
                    return Ok(Value::Array(items));
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

    fn parse_object(&mut self) -> Result<Value> {
        self.cur.enter()?;
        self.cur.bump(); // '{'
        let result = self.parse_object_members();
        self.cur.leave();
        result
    }

    fn parse_object_members(&mut self) -> Result<Value> {
        let mut entries: Vec<(String, Value)> = Vec::new();

        self.cur.skip_whitespace();
        if self.cur.peek() == Some(b'}') {
            self.cur.bump();
            return Ok(Value::Object(entries));
        }

        loop {
            self.cur.skip_whitespace();
            if self.cur.peek() != Some(b'"') {
                return Err(self
                    .cur
                    .error(ErrorCode::ExpectedKey, "expected '\"' at start of object key"));
            }
            let key = self.parse_string()?;

            self.cur.skip_whitespace();
            if self.cur.peek() != Some(b':') {
                return Err(self
                    .cur
                    .error(ErrorCode::ExpectedColon, "expected ':' after object key"));
            }
            self.cur.bump();

            let value = self.parse_value()?;
            // duplicate keys collapse last-write-wins, position retained
            insert_entry(&mut entries, key, value);

            self.cur.skip_whitespace();
            match self.cur.peek() {
                Some(b'}') => {
                    self.cur.bump();
                    return Ok(Value::Object(entries));
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

/// Second pass over string content the first pass already vetted: raw runs
/// are copied through, escapes rewritten. Malformed sequences cannot reach
/// here, so lookups fall back to lossy defaults rather than failing.
fn decode_into(raw: &str, out: &mut String) {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            let run_end = raw[i..].find('\\').map_or(raw.len(), |off| i + off);
            out.push_str(&raw[i..run_end]);
            i = run_end;
            continue;
        }
        i += 1;
        let esc = bytes.get(i).copied().unwrap_or(b'"');
        i += 1;
        match esc {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            _ => {
                // `\uXXXX`, possibly the head of a surrogate pair
                let mut cp = read_hex4_raw(bytes, i);
                i += 4;
                if is_high_surrogate(cp) {
                    let low = read_hex4_raw(bytes, i + 2);
                    i += 6;
                    cp = combine_surrogates(cp, low);
                }
                out.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
        }
    }
}

fn read_hex4_raw(bytes: &[u8], at: usize) -> u32 {
    let mut cp = 0u32;
    for off in 0..4 {
        let digit = bytes.get(at + off).copied().and_then(hex_val).unwrap_or(0);
        cp = (cp << 4) | digit;
    }
    cp
}
