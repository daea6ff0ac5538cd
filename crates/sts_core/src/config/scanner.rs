//! Character scanner for the attribute-file reader.
//!
//! Tracks the current line so parse errors can point at it.

use super::ConfigError;

pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0, line: 1 }
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.text.len()
    }

    fn advance(&mut self, bytes: usize) {
        let consumed = &self.text[self.pos..self.pos + bytes];
        self.line += consumed.matches('\n').count();
        self.pos += bytes;
    }

    pub(crate) fn skip_whitespace(&mut self) {
        let skipped = self.rest().len() - self.rest().trim_start().len();
        self.advance(skipped);
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.advance(len);
        &rest[..len]
    }

    /// Run of alphabetic characters, possibly empty.
    pub(crate) fn scan_word(&mut self) -> &'a str {
        self.skip_whitespace();
        self.take_while(char::is_alphabetic)
    }

    /// Run of ASCII digits, possibly empty.
    pub(crate) fn scan_number(&mut self) -> &'a str {
        self.skip_whitespace();
        self.take_while(|c| c.is_ascii_digit())
    }

    /// Consume `token` verbatim, with whitespace allowed on either side.
    pub(crate) fn expect(&mut self, token: &str) -> Result<(), ConfigError> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            return Err(ConfigError::UnexpectedEof { expected: token.to_string() });
        }
        if !self.rest().starts_with(token) {
            let found: String = self.rest().chars().take(token.chars().count().max(1)).collect();
            return Err(ConfigError::Parse {
                line: self.line,
                message: format!("expected `{token}`, found `{found}`"),
            });
        }
        self.advance(token.len());
        self.skip_whitespace();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_skips_whitespace_and_counts_lines() {
        let mut s = Scanner::new("  <begin\n\n   pitch>");
        s.expect("<begin").unwrap();
        assert_eq!(s.line(), 3);
        assert_eq!(s.scan_word(), "pitch");
        s.expect(">").unwrap();
        assert!(s.at_end());
    }

    #[test]
    fn test_scan_runs() {
        let mut s = Scanner::new("120abc (3,4)");
        assert_eq!(s.scan_number(), "120");
        assert_eq!(s.scan_word(), "abc");
        assert_eq!(s.scan_word(), "");
        assert_eq!(s.peek(), Some('('));
    }

    #[test]
    fn test_expect_reports_mismatch() {
        let mut s = Scanner::new("<end");
        let err = s.expect("<begin").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { line: 1, .. }));
        assert!(matches!(Scanner::new("   ").expect(">"), Err(ConfigError::UnexpectedEof { .. })));
    }
}
