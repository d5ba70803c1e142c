//! MicroYaml scanner.
//!
//! The [`Scanner`] turns the normalized character stream of a
//! [`CharSource`](crate::source::CharSource) into [`Token`]s. It owns the
//! sub-lexers for every scalar style:
//!
//! - **Plain**: `key: value`, ended by a line break, an inline comment, or a
//!   `: ` / `? ` indicator
//! - **Single-quoted**: `'It''s'`, with `''` standing for one quote
//! - **Double-quoted**: `"a\tb"`, with backslash escapes
//! - **Block**: `|` (literal) and `>` (folded), with optional indentation
//!   and chomping indicators
//!
//! Indicators that end a scalar are only ever peeked at by the scalar
//! readers. They are consumed by the next call to [`Scanner::read_token`],
//! so key and value prefixes are recognised the same way whatever style
//! came before them.
//!
//! The scanner never fails on malformed input: every call makes progress
//! and end of input always yields [`Token::EndOfInput`]. Only I/O failures
//! of the underlying input are returned as errors.
//!
//! ```rust
//! use micro_yaml::scanner::{Scanner, Token};
//! use micro_yaml::source::CharsInput;
//!
//! let mut scanner = Scanner::new(CharsInput::new("key: 'It''s' # note".chars()));
//! assert_eq!(scanner.read_token().unwrap(), Token::Scalar("key".to_string()));
//! assert_eq!(scanner.read_token().unwrap(), Token::ValuePrefix);
//! assert_eq!(scanner.read_token().unwrap(), Token::Scalar("It's".to_string()));
//! assert_eq!(scanner.read_token().unwrap(), Token::EndOfInput);
//! ```

use crate::source::{CharInput, CharSource};
use crate::{Error, Result};
use tracing::trace;

const BEGIN_DOCUMENT: &str = "---\n";
const END_DOCUMENT: &str = "...\n";

/// A lexical token of a MicroYaml stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A key or a value in any scalar style, already decoded.
    Scalar(String),
    /// The explicit key indicator `? `.
    KeyPrefix,
    /// The value indicator `: `.
    ValuePrefix,
    /// A line containing exactly `---`.
    BeginDocument,
    /// A line containing exactly `...`.
    EndDocument,
    EndOfInput,
}

/// Block scalar trailing line break policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chomp {
    /// `-`: drop every trailing line break
    Strip,
    /// default: keep exactly one
    Clip,
    /// `+`: keep them all
    Keep,
}

/// Tokenizer over a [`CharSource`].
#[derive(Debug)]
pub struct Scanner<I> {
    source: CharSource<I>,
    diagnostic: Option<Error>,
}

impl<I: CharInput> Scanner<I> {
    pub fn new(input: I) -> Self {
        let mut source = CharSource::new(input);
        // Start as if a line break was just read, so a marker on the first
        // line is at line start.
        source.unread('\n');
        Scanner {
            source,
            diagnostic: None,
        }
    }

    /// Current line number (1-based).
    #[must_use]
    pub fn line(&self) -> usize {
        self.source.line().max(1)
    }

    /// Takes the syntax error recorded by the most recent token, if any.
    pub fn take_diagnostic(&mut self) -> Option<Error> {
        self.diagnostic.take()
    }

    pub fn into_inner(self) -> I {
        self.source.into_inner()
    }

    /// Reads the next token.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying input fails.
    pub fn read_token(&mut self) -> Result<Token> {
        let token = self.scan()?;
        trace!(line = self.line(), ?token, "token");
        Ok(token)
    }

    /// Skips ambient text up to and including the next `---` line.
    ///
    /// Returns `false` if end of input was reached first.
    pub fn skip_until_begin_document(&mut self) -> Result<bool> {
        while let Some(ch) = self.source.read()? {
            if ch == '\n' && self.match_marker(BEGIN_DOCUMENT)? {
                trace!(line = self.line(), "found document start");
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn report(&mut self, msg: &str) {
        self.diagnostic = Some(Error::syntax(self.line(), msg));
    }

    fn scan(&mut self) -> Result<Token> {
        loop {
            self.source.skip_blanks()?;
            let token = match self.source.peek()? {
                None => Token::EndOfInput,
                Some('\n') => {
                    self.source.read()?;
                    if self.match_marker(END_DOCUMENT)? {
                        Token::EndDocument
                    } else if self.match_marker(BEGIN_DOCUMENT)? {
                        Token::BeginDocument
                    } else {
                        continue;
                    }
                }
                Some('#') => {
                    self.source.skip_rest_of_line()?;
                    continue;
                }
                Some(quote @ ('\'' | '"')) => self.read_quoted(quote)?,
                Some(indicator @ ('|' | '>')) => self.read_block(indicator)?,
                Some(_) => {
                    if self.source.match_literal("? ")? {
                        Token::KeyPrefix
                    } else if self.source.match_literal(": ")? {
                        Token::ValuePrefix
                    } else {
                        self.read_plain()?
                    }
                }
            };
            return Ok(token);
        }
    }

    /// Matches a marker line at the current position (just after a line
    /// break). The line break ending the marker is left unread.
    fn match_marker(&mut self, marker: &str) -> Result<bool> {
        if !self.source.match_literal(marker)? {
            return Ok(false);
        }
        // At end of input the line break may have been implied rather than read.
        if self.source.peek()?.is_some() {
            self.source.unread('\n');
        }
        Ok(true)
    }

    fn read_quoted(&mut self, quote: char) -> Result<Token> {
        self.source.read()?;
        let double = quote == '"';
        let mut text = String::new();
        // Blanks at the end of `text`, stripped when the line is folded
        let mut trailing = 0;

        while let Some(ch) = self.source.read()? {
            match ch {
                '"' if double => break,
                '\\' if double => {
                    if let Some(escaped) = self.read_escape()? {
                        text.push(escaped);
                    }
                    trailing = 0;
                }
                '\'' if !double => {
                    if self.source.peek()? != Some('\'') {
                        break;
                    }
                    self.source.read()?;
                    text.push('\'');
                    trailing = 0;
                }
                '\n' => {
                    text.truncate(text.len() - trailing);
                    self.source.skip_blanks()?;
                    text.push(' ');
                    trailing = 1;
                }
                ' ' | '\t' => {
                    text.push(ch);
                    trailing += 1;
                }
                _ => {
                    text.push(ch);
                    trailing = 0;
                }
            }
        }

        Ok(Token::Scalar(text))
    }

    /// Decodes the escape sequence following a backslash.
    fn read_escape(&mut self) -> Result<Option<char>> {
        let Some(ch) = self.source.read()? else {
            return Ok(None);
        };
        let decoded = match ch {
            '0' => '\0',
            'a' => '\u{07}',
            'b' => '\u{08}',
            't' => '\t',
            'n' => '\n',
            'v' => '\u{0B}',
            'f' => '\u{0C}',
            'r' => '\r',
            'e' => '\u{1B}',
            'N' => '\u{85}',
            '_' => '\u{A0}',
            'L' => '\u{2028}',
            'P' => '\u{2029}',
            'x' => self.read_hex(2)?,
            'u' => self.read_hex(4)?,
            // includes an escaped line break, `\"` and `\\`
            other => other,
        };
        Ok(Some(decoded))
    }

    /// Reads up to `digits` hex digits, stopping early at a non-hex character.
    fn read_hex(&mut self, digits: usize) -> Result<char> {
        let mut value = 0u32;
        for _ in 0..digits {
            match self.source.peek()?.and_then(|ch| ch.to_digit(16)) {
                Some(digit) => {
                    value = value * 16 + digit;
                    self.source.read()?;
                }
                None => break,
            }
        }
        Ok(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn read_block(&mut self, indicator: char) -> Result<Token> {
        self.source.read()?;
        let fold = indicator == '>';

        // Header: optional indentation digit and chomping indicator
        let mut indent = 0;
        let mut chomp = Chomp::Clip;
        let mut seen_indent = false;
        let mut seen_chomp = false;
        loop {
            match self.source.peek()? {
                Some(digit @ '0'..='9') if !seen_indent => {
                    self.source.read()?;
                    indent = digit as usize - '0' as usize;
                    seen_indent = true;
                }
                Some(sign @ ('-' | '+')) if !seen_chomp => {
                    self.source.read()?;
                    chomp = if sign == '-' { Chomp::Strip } else { Chomp::Keep };
                    seen_chomp = true;
                }
                _ => break,
            }
        }

        self.source.skip_blanks()?;
        if !matches!(self.source.peek()?, None | Some('#' | '\n')) {
            self.report("Expected comment or newline.");
        }
        self.source.skip_rest_of_line()?;
        let mut at_line_start = self.source.read()?.is_some();

        let detect_indent = indent == 0;
        if detect_indent {
            indent = self.source.skip_blanks()?;
            if indent == 0 {
                if at_line_start {
                    self.source.unread('\n');
                }
                return Ok(Token::Scalar(String::new()));
            }
        }

        let mut text = String::new();
        let mut trailing = 0;
        let mut pending_break = false;
        let mut just_folded = false;
        let mut first_line = true;

        loop {
            if !(first_line && detect_indent) {
                let mut stripped = String::new();
                let mut next = self.source.peek()?;
                while stripped.len() < indent {
                    match next {
                        Some(blank @ (' ' | '\t')) => {
                            self.source.read()?;
                            stripped.push(blank);
                            next = self.source.peek()?;
                        }
                        _ => break,
                    }
                }

                // A non-blank line indented less than the block ends it
                if next != Some('\n') && stripped.len() < indent {
                    for blank in stripped.chars().rev() {
                        self.source.unread(blank);
                    }
                    if pending_break {
                        text.push('\n');
                    }
                    break;
                }
            }
            first_line = false;

            if pending_break {
                if fold && !just_folded {
                    text.push(' ');
                    trailing = 1;
                    just_folded = true;
                } else {
                    text.push('\n');
                    trailing = 0;
                }
            }

            at_line_start = false;
            while let Some(ch) = self.source.read()? {
                if ch == '\n' {
                    at_line_start = true;
                    break;
                }
                just_folded = false;
                text.push(ch);
                if ch == ' ' || ch == '\t' {
                    trailing += 1;
                } else {
                    trailing = 0;
                }
            }
            text.truncate(text.len() - trailing);
            trailing = 0;

            if !at_line_start {
                break;
            }
            pending_break = true;
        }

        match chomp {
            Chomp::Keep => {}
            Chomp::Strip | Chomp::Clip => {
                let content = text.trim_end_matches('\n').len();
                let keep = match chomp {
                    Chomp::Clip => (content + 1).min(text.len()),
                    _ => content,
                };
                text.truncate(keep);
            }
        }

        // The line that ended the block belongs to the next token
        if at_line_start {
            self.source.unread('\n');
        }

        Ok(Token::Scalar(text))
    }

    fn read_plain(&mut self) -> Result<Token> {
        let mut text = String::new();
        while let Some(ch) = self.source.read()? {
            let delimiter = match ch {
                '\n' => true,
                ' ' | '\t' => self.source.peek()? == Some('#'),
                ':' | '?' => self.source.peek()? == Some(' '),
                _ => false,
            };
            if delimiter {
                self.source.unread(ch);
                break;
            }
            text.push(ch);
        }

        let end = text.trim_end().len();
        text.truncate(end);
        Ok(Token::Scalar(text))
    }
}
