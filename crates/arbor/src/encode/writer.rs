use crate::encode::primitives;
use crate::options::FormatConfig;

/// Output accumulator: a growing buffer plus a cached run of indentation so
/// deep trees do not re-concatenate the indent unit on every line.
pub(crate) struct Writer<'a> {
    out: String,
    config: &'a FormatConfig,
    indent_cache: String,
}

impl<'a> Writer<'a> {
    pub(crate) fn new(config: &'a FormatConfig) -> Self {
        Self {
            out: String::new(),
            config,
            indent_cache: String::new(),
        }
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub(crate) fn push_escaped(&mut self, s: &str) {
        primitives::escape_into(&mut self.out, s);
    }

    pub(crate) fn indent(&mut self, level: usize) {
        let needed = level * self.config.indent.len();
        while self.indent_cache.len() < needed {
            self.indent_cache.push_str(&self.config.indent);
        }
        self.out.push_str(&self.indent_cache[..needed]);
    }

    pub(crate) fn newline(&mut self) {
        self.out.push_str(&self.config.line_end);
    }

    pub(crate) fn spaces(&mut self, n: usize) {
        for _ in 0..n {
            self.out.push(' ');
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }
}
