use crate::error::{Diagnostic, Error, ErrorCode};

/// Containers may nest at most this deep before parsing and validation give
/// up with [`ErrorCode::MaxNestingExceeded`].
pub const MAX_NESTING_DEPTH: usize = 32;

/// Bytes of input captured before the failure point in a diagnostic context.
const CONTEXT_BEFORE: usize = 20;
/// Total size of the diagnostic context window.
const CONTEXT_WINDOW: usize = 40;

/// Byte cursor over the input with line/column and nesting-depth tracking.
///
/// Structural JSON characters are all ASCII, so the cursor advances bytewise;
/// string contents go through [`Cursor::bump_char`] to keep columns counted
/// in characters and positions on UTF-8 boundaries.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
            depth: 0,
        }
    }

    pub(crate) fn input(&self) -> &'a str {
        self.input
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Advances one ASCII byte.
    pub(crate) fn bump(&mut self) {
        self.pos += 1;
        self.column += 1;
    }

    /// Advances one full character, counting it as a single column.
    pub(crate) fn bump_char(&mut self) -> usize {
        let len = match self.input[self.pos..].chars().next() {
            Some(c) => c.len_utf8(),
            None => 1,
        };
        self.pos += len;
        self.column += 1;
        len
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b'\n' => {
                    self.pos += 1;
                    self.line += 1;
                    self.column = 1;
                }
                b' ' | b'\t' | b'\r' => {
                    self.pos += 1;
                    self.column += 1;
                }
                _ => break,
            }
        }
    }

    /// Consumes `literal` or reports `code` without advancing.
    pub(crate) fn expect_literal(
        &mut self,
        literal: &str,
        code: ErrorCode,
        message: &str,
    ) -> Result<(), Error> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            self.column += literal.len();
            Ok(())
        } else {
            Err(self.error(code, message))
        }
    }

    /// Enters a container, enforcing the nesting bound. Every `enter` must be
    /// paired with a [`Cursor::leave`] on all exit paths.
    pub(crate) fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(
                ErrorCode::MaxNestingExceeded,
                "maximum nesting depth exceeded",
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Builds a syntax error at the current position.
    pub(crate) fn error(&self, code: ErrorCode, message: impl Into<String>) -> Error {
        Error::Syntax(Diagnostic {
            code,
            line: self.line,
            column: self.column,
            message: message.into(),
            context: self.context_snippet(),
        })
    }

    /// Window of input around the failure point, clamped to character
    /// boundaries, with ellipsis markers where truncated.
    fn context_snippet(&self) -> String {
        let mut start = self.pos.saturating_sub(CONTEXT_BEFORE);
        while start > 0 && !self.input.is_char_boundary(start) {
            start -= 1;
        }
        let mut end = (start + CONTEXT_WINDOW).min(self.input.len());
        while end < self.input.len() && !self.input.is_char_boundary(end) {
            end += 1;
        }

        let mut out = String::with_capacity(end - start + 6);
        if start > 0 {
            out.push_str("...");
        }
        out.push_str(&self.input[start..end]);
        if end < self.input.len() {
            out.push_str("...");
        }
        out
    }
}
