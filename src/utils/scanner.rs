//! Byte cursor shared by the date parsers.
//!
//! Both grammars are ASCII, so the scanner walks the input as bytes and only
//! decodes a `char` when it needs to report what it found.

use crate::error::ParseErrorKind;

pub(crate) type ScanResult<T> = Result<T, ParseErrorKind>;

pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Input consumed since `start`.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Consume `byte` if it is next.
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, byte: u8, expected: &'static str) -> ScanResult<()> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consume a `+` or `-` sign, returning `1` or `-1`.
    pub(crate) fn sign(&mut self) -> Option<i32> {
        if self.eat(b'+') {
            Some(1)
        } else if self.eat(b'-') {
            Some(-1)
        } else {
            None
        }
    }

    /// Read exactly `width` ASCII digits.
    pub(crate) fn fixed_digits(&mut self, width: usize, expected: &'static str) -> ScanResult<u32> {
        let (value, len) = self.digit_run(width)?;
        if len != width {
            return Err(self.unexpected(expected));
        }
        Ok(value)
    }

    /// Read between `min` and `max` ASCII digits, returning the value and digit count.
    pub(crate) fn digits(&mut self, min: usize, max: usize, expected: &'static str) -> ScanResult<(u32, usize)> {
        let (value, len) = self.digit_run(max)?;
        if len < min {
            return Err(self.unexpected(expected));
        }
        Ok((value, len))
    }

    /// Consume a run of ASCII letters.
    pub(crate) fn word(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// Consume a run of ASCII digits without interpreting them.
    pub(crate) fn digit_str(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// Skip folding whitespace and parenthesised comments, returning whether
    /// anything was skipped.
    pub(crate) fn skip_cfws(&mut self) -> ScanResult<bool> {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n') => self.pos += 1,
                Some(b'(') => self.skip_comment()?,
                _ => break,
            }
        }
        Ok(self.pos > start)
    }

    /// Require at least one whitespace/comment run.
    pub(crate) fn require_cfws(&mut self, expected: &'static str) -> ScanResult<()> {
        if self.skip_cfws()? {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn skip_comment(&mut self) -> ScanResult<()> {
        let mut depth = 0usize;
        while let Some(b) = self.peek() {
            self.pos += 1;
            match b {
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                b'\\' => {
                    // quoted-pair: the next character is literal, whatever it is
                    if let Some(c) = self.src[self.pos..].chars().next() {
                        self.pos += c.len_utf8();
                    }
                }
                _ => {}
            }
        }
        Err(ParseErrorKind::UnterminatedComment)
    }

    /// Error describing whatever sits at the cursor.
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseErrorKind {
        match self.src[self.pos..].chars().next() {
            Some(found) => ParseErrorKind::Unexpected {
                expected,
                found,
                position: self.pos,
            },
            None => ParseErrorKind::UnexpectedEnd { expected },
        }
    }

    fn digit_run(&mut self, max: usize) -> ScanResult<(u32, usize)> {
        let mut value: u32 = 0;
        let mut len = 0;
        while len < max {
            match self.peek() {
                Some(b) if b.is_ascii_digit() => {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(u32::from(b - b'0')))
                        .ok_or(ParseErrorKind::OutOfRange("number"))?;
                    self.pos += 1;
                    len += 1;
                }
                _ => break,
            }
        }
        Ok((value, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_digits() {
        let mut s = Scanner::new("2016-");
        assert_eq!(s.fixed_digits(4, "year"), Ok(2016));
        assert!(s.eat(b'-'));
        assert!(s.is_eof());
    }

    #[test]
    fn test_fixed_digits_too_short() {
        let mut s = Scanner::new("7:");
        assert_eq!(
            s.fixed_digits(2, "hour"),
            Err(ParseErrorKind::Unexpected {
                expected: "hour",
                found: ':',
                position: 1
            })
        );
    }

    #[test]
    fn test_skip_nested_comment() {
        let mut s = Scanner::new(" (a (nested) \\) comment)  GMT");
        assert_eq!(s.skip_cfws(), Ok(true));
        assert_eq!(s.word(), "GMT");
    }

    #[test]
    fn test_unterminated_comment() {
        let mut s = Scanner::new("(open");
        assert_eq!(s.skip_cfws(), Err(ParseErrorKind::UnterminatedComment));
    }

    #[test]
    fn test_unexpected_end() {
        let s = Scanner::new("");
        assert_eq!(s.unexpected("day"), ParseErrorKind::UnexpectedEnd { expected: "day" });
    }
}
