//! Character source with unlimited pushback.
//!
//! The [`CharSource`] turns any [`CharInput`] into the canonical character
//! stream the scanner works on:
//!
//! - CR, CRLF and lone CR all become a single LF
//! - NUL becomes U+FFFD, so it can never be confused with end of input
//! - end of input is `None`, and stays `None` on every later call
//!
//! Any number of characters can be pushed back with [`CharSource::unread`]
//! and are returned, most recent first, before new input is pulled. This
//! lets the scanner look ahead for `---`, `...`, `? ` and `: ` and back off
//! when they do not match.
//!
//! ```rust
//! use micro_yaml::source::{CharSource, CharsInput};
//!
//! let mut source = CharSource::new(CharsInput::new("a\r\nb".chars()));
//! assert_eq!(source.read().unwrap(), Some('a'));
//! assert_eq!(source.read().unwrap(), Some('\n'));
//! assert!(!source.match_literal("bc").unwrap());
//! assert_eq!(source.peek().unwrap(), Some('b'));
//! ```

use crate::Result;
use std::io::BufRead;

/// Supplies raw characters to a [`CharSource`].
///
/// `Ok(None)` signals end of input. An `Err` is a resource failure and is
/// propagated to the caller unchanged.
pub trait CharInput {
    fn next_char(&mut self) -> Result<Option<char>>;
}

/// Character input over any iterator of `char`, such as `str::chars`.
#[derive(Debug, Clone)]
pub struct CharsInput<I> {
    chars: I,
}

impl<I: Iterator<Item = char>> CharsInput<I> {
    pub fn new(chars: I) -> Self {
        CharsInput { chars }
    }

    pub fn into_inner(self) -> I {
        self.chars
    }
}

impl<I: Iterator<Item = char>> CharInput for CharsInput<I> {
    #[inline]
    fn next_char(&mut self) -> Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// Character input decoding UTF-8 from a buffered byte reader, one line at a time.
///
/// A byte-order mark at the very start of the stream is dropped. Invalid
/// UTF-8 is reported as an I/O error.
#[derive(Debug)]
pub struct IoInput<R> {
    reader: R,
    line: String,
    pos: usize,
    started: bool,
}

impl<R: BufRead> IoInput<R> {
    pub fn new(reader: R) -> Self {
        IoInput {
            reader,
            line: String::new(),
            pos: 0,
            started: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) -> Result<bool> {
        self.line.clear();
        self.pos = 0;
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        if !self.started {
            self.started = true;
            if self.line.starts_with('\u{FEFF}') {
                self.pos = '\u{FEFF}'.len_utf8();
            }
        }
        Ok(true)
    }
}

impl<R: BufRead> CharInput for IoInput<R> {
    fn next_char(&mut self) -> Result<Option<char>> {
        loop {
            if let Some(ch) = self.line[self.pos..].chars().next() {
                self.pos += ch.len_utf8();
                return Ok(Some(ch));
            }
            if !self.fill()? {
                return Ok(None);
            }
        }
    }
}

/// Normalized character stream with unlimited pushback.
#[derive(Debug)]
pub struct CharSource<I> {
    input: I,
    lookahead: Option<char>,
    eof: bool,
    pushback: Vec<char>,
    line: usize,
}

impl<I: CharInput> CharSource<I> {
    pub fn new(input: I) -> Self {
        CharSource {
            input,
            lookahead: None,
            eof: false,
            pushback: Vec::new(),
            line: 1,
        }
    }

    /// Current line number (1-based), counting line breaks consumed so far.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn into_inner(self) -> I {
        self.input
    }

    fn pull_raw(&mut self) -> Result<Option<char>> {
        if let Some(ch) = self.lookahead.take() {
            return Ok(Some(ch));
        }
        if self.eof {
            return Ok(None);
        }
        let ch = self.input.next_char()?;
        if ch.is_none() {
            self.eof = true;
        }
        Ok(ch)
    }

    fn pull(&mut self) -> Result<Option<char>> {
        let ch = match self.pull_raw()? {
            Some('\r') => {
                // CRLF collapses to one LF; a lone CR becomes LF
                match self.pull_raw()? {
                    Some('\n') | None => {}
                    Some(next) => self.lookahead = Some(next),
                }
                Some('\n')
            }
            Some('\0') => Some('\u{FFFD}'),
            other => other,
        };
        Ok(ch)
    }

    /// Consumes and returns the next character, or `None` at end of input.
    pub fn read(&mut self) -> Result<Option<char>> {
        let ch = match self.pushback.pop() {
            Some(ch) => Some(ch),
            None => self.pull()?,
        };
        if ch == Some('\n') {
            self.line += 1;
        }
        Ok(ch)
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Result<Option<char>> {
        if let Some(&ch) = self.pushback.last() {
            return Ok(Some(ch));
        }
        let ch = self.pull()?;
        if let Some(ch) = ch {
            self.pushback.push(ch);
        }
        Ok(ch)
    }

    /// Pushes a character back; it is returned by the next `read` or `peek`.
    pub fn unread(&mut self, ch: char) {
        if ch == '\n' {
            self.line = self.line.saturating_sub(1);
        }
        self.pushback.push(ch);
    }

    /// Consumes `text` if the stream continues with it. Otherwise the stream
    /// is left exactly as it was and `false` is returned.
    ///
    /// A `\n` at the end of `text` also matches end of input, so a marker on
    /// the last line does not need a trailing line break.
    pub fn match_literal(&mut self, text: &str) -> Result<bool> {
        for (idx, expected) in text.char_indices() {
            let next = self.peek()?;
            if next == Some(expected) {
                self.read()?;
                continue;
            }
            if next.is_none() && expected == '\n' && idx + 1 == text.len() {
                return Ok(true);
            }
            for ch in text[..idx].chars().rev() {
                self.unread(ch);
            }
            return Ok(false);
        }
        Ok(true)
    }

    /// Consumes spaces and tabs, returning how many were skipped.
    pub fn skip_blanks(&mut self) -> Result<usize> {
        let mut count = 0;
        while let Some(' ' | '\t') = self.peek()? {
            self.read()?;
            count += 1;
        }
        Ok(count)
    }

    /// Consumes the rest of the current line, leaving the line break unread.
    pub fn skip_rest_of_line(&mut self) -> Result<()> {
        loop {
            match self.peek()? {
                None | Some('\n') => return Ok(()),
                Some(_) => {
                    self.read()?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source(text: &str) -> CharSource<CharsInput<std::str::Chars<'_>>> {
        CharSource::new(CharsInput::new(text.chars()))
    }

    fn drain<I: CharInput>(source: &mut CharSource<I>) -> String {
        let mut out = String::new();
        while let Some(ch) = source.read().unwrap() {
            out.push(ch);
        }
        out
    }

    #[test]
    fn test_newline_normalization() {
        let mut src = source("a\r\nb\rc\nd\r\r\ne\r");
        assert_eq!(drain(&mut src), "a\nb\nc\nd\n\ne\n");
    }

    #[test]
    fn test_nul_is_replaced() {
        let mut src = source("a\0b");
        assert_eq!(drain(&mut src), "a\u{FFFD}b");
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut src = source("x");
        assert_eq!(src.read().unwrap(), Some('x'));
        assert_eq!(src.read().unwrap(), None);
        assert_eq!(src.peek().unwrap(), None);
        assert_eq!(src.read().unwrap(), None);
    }

    #[test]
    fn test_unread_is_lifo() {
        let mut src = source("z");
        src.unread('a');
        src.unread('b');
        src.unread('c');
        assert_eq!(drain(&mut src), "cbaz");
    }

    #[test]
    fn test_match_literal_restores_on_mismatch() {
        let mut src = source("--x");
        assert!(!src.match_literal("---\n").unwrap());
        assert_eq!(drain(&mut src), "--x");
    }

    #[test]
    fn test_match_literal_newline_matches_eof() {
        let mut src = source("...");
        assert!(src.match_literal("...\n").unwrap());
        assert_eq!(src.read().unwrap(), None);

        let mut src = source("..");
        assert!(!src.match_literal("...\n").unwrap());
        assert_eq!(drain(&mut src), "..");
    }

    #[test]
    fn test_line_tracking() {
        let mut src = source("a\nb\nc");
        assert_eq!(src.line(), 1);
        src.read().unwrap();
        src.read().unwrap();
        assert_eq!(src.line(), 2);
        src.unread('\n');
        assert_eq!(src.line(), 1);
        assert_eq!(src.peek().unwrap(), Some('\n'));
        assert_eq!(src.line(), 1);
    }

    #[test]
    fn test_skip_helpers() {
        let mut src = source(" \t x # note\nnext");
        assert_eq!(src.skip_blanks().unwrap(), 3);
        src.skip_rest_of_line().unwrap();
        assert_eq!(drain(&mut src), "\nnext");
    }

    #[test]
    fn test_io_input_decodes_utf8_and_drops_bom() {
        let bytes = "\u{FEFF}k\u{e9}y: v\u{2713}\nnext\u{FEFF}".as_bytes().to_vec();
        let mut src = CharSource::new(IoInput::new(Cursor::new(bytes)));
        assert_eq!(drain(&mut src), "k\u{e9}y: v\u{2713}\nnext\u{FEFF}");
    }

    #[test]
    fn test_io_input_invalid_utf8_is_error() {
        let mut src = CharSource::new(IoInput::new(Cursor::new(vec![b'a', 0xff, b'\n'])));
        assert!(matches!(src.read(), Err(crate::Error::Io(_))));
    }
}
