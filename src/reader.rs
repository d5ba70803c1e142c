//! MicroYaml document reader.
//!
//! [`MicroYamlReader`] assembles the scanner's tokens into key/value pairs
//! and handles document boundaries according to its [`ReaderOptions`].
//!
//! ## Iteration contract
//!
//! - [`MicroYamlReader::next_pair`] advances within the current document and
//!   returns `false` at a document boundary or end of input. With
//!   `merge_documents`, boundaries are skipped and only end of input stops it.
//! - [`MicroYamlReader::next_document`] discards what is left of the current
//!   document and moves to the next one, returning `false` at end of input.
//! - [`MicroYamlReader::last_error`] holds the syntax error, if any, met by
//!   the most recent advance. Syntax errors never stop iteration.
//!
//! The reader is forward-only. Once [`ReaderState::Exhausted`] is reached
//! it produces nothing further, and there is no way to rewind it.
//!
//! ## Examples
//!
//! ```rust
//! use micro_yaml::{MicroYamlReader, ReaderOptions};
//!
//! let text = "---\nA: 1\n...\n---\nB: 2\n...\n";
//! let mut reader = MicroYamlReader::from_str(text, ReaderOptions::default());
//!
//! let mut documents = Vec::new();
//! while reader.next_document().unwrap() {
//!     let mut pairs = Vec::new();
//!     while reader.next_pair().unwrap() {
//!         let (key, value) = reader.current().unwrap();
//!         pairs.push(format!("{}={}", key, value));
//!     }
//!     documents.push(pairs);
//! }
//! assert_eq!(documents, vec![vec!["A=1"], vec!["B=2"]]);
//! ```

use crate::scanner::{Scanner, Token};
use crate::source::{CharInput, CharsInput, IoInput};
use crate::{Error, ReaderOptions, Result};
use std::io::BufRead;
use std::str::Chars;
use tracing::{debug, trace};

/// Position of a reader in its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Nothing has been read yet.
    BeforeFirstToken,
    /// Inside a document; pairs may follow.
    InDocument,
    /// On a `---` or `...` marker.
    AtBoundary,
    /// End of input. Terminal.
    Exhausted,
}

/// An item of a whole MicroYaml stream, as produced by [`Entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Pair(String, String),
    /// Separates the pairs of two documents. Never produced when
    /// documents are merged.
    DocumentBoundary,
}

/// Streaming reader of MicroYaml key/value pairs.
#[derive(Debug)]
pub struct MicroYamlReader<I> {
    scanner: Scanner<I>,
    options: ReaderOptions,
    state: ReaderState,
    token: Token,
    current: Option<(String, String)>,
    last_error: Option<Error>,
}

impl<'a> MicroYamlReader<CharsInput<Chars<'a>>> {
    /// Creates a reader over in-memory text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &'a str, options: ReaderOptions) -> Self {
        MicroYamlReader::new(CharsInput::new(text.chars()), options)
    }
}

impl<R: BufRead> MicroYamlReader<IoInput<R>> {
    /// Creates a reader over UTF-8 bytes.
    pub fn from_reader(reader: R, options: ReaderOptions) -> Self {
        MicroYamlReader::new(IoInput::new(reader), options)
    }
}

impl<I: CharInput> MicroYamlReader<I> {
    pub fn new(input: I, options: ReaderOptions) -> Self {
        MicroYamlReader {
            scanner: Scanner::new(input),
            options,
            state: ReaderState::BeforeFirstToken,
            token: Token::EndOfInput,
            current: None,
            last_error: None,
        }
    }

    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// The pair found by the last successful [`next_pair`](Self::next_pair).
    #[must_use]
    pub fn current(&self) -> Option<(&str, &str)> {
        self.current
            .as_ref()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The syntax error met by the most recent `next_pair` or
    /// `next_document`, or `None` if that call found none.
    #[must_use]
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Gives the input back, unless `close_input` is set, in which case
    /// the input is released here.
    pub fn into_inner(self) -> Option<I> {
        let input = self.scanner.into_inner();
        if self.options.close_input {
            drop(input);
            None
        } else {
            Some(input)
        }
    }

    /// Reads the next key/value pair.
    ///
    /// Returns `false`, leaving no current pair, at the end of the current
    /// document or of the input.
    ///
    /// # Errors
    ///
    /// Only failures of the underlying input are returned as errors.
    pub fn next_pair(&mut self) -> Result<bool> {
        self.last_error = None;

        if self.state == ReaderState::BeforeFirstToken {
            self.next_document()?;
        }

        let key = loop {
            match &mut self.token {
                Token::Scalar(text) => {
                    let key = std::mem::take(text);
                    self.advance()?;
                    break key;
                }
                Token::KeyPrefix => {
                    self.advance()?;
                    if !matches!(self.token, Token::Scalar(_)) {
                        self.report("Expected scalar value.");
                    }
                }
                // `: value` with no key at all
                Token::ValuePrefix => break String::new(),
                Token::BeginDocument | Token::EndDocument if self.options.merge_documents => {
                    self.next_document()?;
                }
                Token::BeginDocument | Token::EndDocument | Token::EndOfInput => {
                    self.current = None;
                    return Ok(false);
                }
            }
        };

        if self.token != Token::ValuePrefix {
            self.report("Expected value prefix ': '.");
            self.current = Some((key, String::new()));
            return Ok(true);
        }
        self.advance()?;

        let value = match &mut self.token {
            Token::Scalar(text) => std::mem::take(text),
            _ => {
                self.report("Expected scalar.");
                self.current = Some((key, String::new()));
                return Ok(true);
            }
        };
        self.advance()?;

        self.current = Some((key, value));
        Ok(true)
    }

    /// Skips the rest of the current document and moves to the next one.
    ///
    /// On a fresh reader this positions it on the first document. Returns
    /// `false` when no further document exists.
    ///
    /// # Errors
    ///
    /// Only failures of the underlying input are returned as errors.
    pub fn next_document(&mut self) -> Result<bool> {
        self.last_error = None;
        self.current = None;

        while self.state == ReaderState::InDocument {
            self.advance()?;
        }

        let at_end_marker = self.token == Token::EndDocument;
        if self.options.ignore_text_outside_document_markers
            && (self.state == ReaderState::BeforeFirstToken || at_end_marker)
        {
            if !self.scanner.skip_until_begin_document()? {
                self.set_token(Token::EndOfInput);
                return Ok(false);
            }
            self.set_token(Token::BeginDocument);
        } else if self.state == ReaderState::BeforeFirstToken {
            self.advance()?;
        } else if at_end_marker {
            self.advance()?;
            if !matches!(self.token, Token::BeginDocument | Token::EndOfInput) {
                self.report("Unexpected text found after end document marker.");
                return Ok(false);
            }
        }

        if self.token == Token::BeginDocument {
            self.advance()?;
        }

        trace!(state = ?self.state, "next document");
        Ok(self.state != ReaderState::Exhausted)
    }

    /// Appends every remaining pair to `collection`, returning how many were added.
    ///
    /// Without `merge_documents` this stops at the end of the current document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use micro_yaml::{MicroYamlMap, MicroYamlReader, ReaderOptions};
    ///
    /// let mut reader = MicroYamlReader::from_str("a: 1\nb: 2\n", ReaderOptions::default());
    /// let mut map = MicroYamlMap::new();
    /// assert_eq!(reader.copy_to(&mut map).unwrap(), 2);
    /// assert_eq!(map.get("b"), Some("2"));
    /// ```
    pub fn copy_to<C>(&mut self, collection: &mut C) -> Result<usize>
    where
        C: Extend<(String, String)>,
    {
        let mut count = 0;
        while self.next_pair()? {
            if let Some(pair) = self.current.clone() {
                collection.extend(std::iter::once(pair));
                count += 1;
            }
        }
        Ok(count)
    }

    /// Consumes the reader, iterating over the whole stream with document
    /// boundaries made explicit.
    pub fn entries(self) -> Entries<I> {
        Entries {
            reader: self,
            done: false,
        }
    }

    fn advance(&mut self) -> Result<()> {
        if self.state == ReaderState::Exhausted {
            return Ok(());
        }
        let token = self.scanner.read_token()?;
        if let Some(err) = self.scanner.take_diagnostic() {
            self.record(err);
        }
        self.set_token(token);
        Ok(())
    }

    fn set_token(&mut self, token: Token) {
        self.state = match token {
            Token::BeginDocument | Token::EndDocument => ReaderState::AtBoundary,
            Token::EndOfInput => ReaderState::Exhausted,
            Token::Scalar(_) | Token::KeyPrefix | Token::ValuePrefix => ReaderState::InDocument,
        };
        self.token = token;
    }

    fn report(&mut self, msg: &str) {
        let err = Error::syntax(self.scanner.line(), msg);
        self.record(err);
    }

    fn record(&mut self, err: Error) {
        debug!(error = %err, "recovered from syntax error");
        self.last_error = Some(err);
    }
}

impl<I: CharInput> Iterator for MicroYamlReader<I> {
    type Item = Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_pair() {
            Ok(true) => self.current.clone().map(Ok),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

/// Iterator over every pair of a stream; see [`MicroYamlReader::entries`].
#[derive(Debug)]
pub struct Entries<I> {
    reader: MicroYamlReader<I>,
    done: bool,
}

impl<I: CharInput> Entries<I> {
    /// The syntax error met while producing the last entry, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&Error> {
        self.reader.last_error()
    }
}

impl<I: CharInput> Iterator for Entries<I> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = match self.reader.next_pair() {
            Ok(true) => match self.reader.current.clone() {
                Some((key, value)) => Ok(Some(Entry::Pair(key, value))),
                None => Ok(None),
            },
            Ok(false) if self.reader.options.merge_documents => Ok(None),
            Ok(false) => self
                .reader
                .next_document()
                .map(|more| more.then_some(Entry::DocumentBoundary)),
            Err(err) => Err(err),
        };
        match result {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
