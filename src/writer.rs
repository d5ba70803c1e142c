//! MicroYaml writer.
//!
//! [`MicroYamlWriter`] renders key/value pairs as `key: value` lines. Each
//! string is written in plain style when that reads back unchanged, and in
//! double-quoted style otherwise (see [`encode`]). Single-quoted and block
//! styles are never produced: plain and double-quoted cover every string.
//!
//! Output goes to a [`TextSink`]: [`IoSink`] for byte streams and files,
//! [`FmtSink`] for `String`s and other `fmt::Write` targets.
//!
//! ## Examples
//!
//! ```rust
//! use micro_yaml::writer::{FmtSink, MicroYamlWriter};
//! use micro_yaml::WriterOptions;
//!
//! let mut writer = MicroYamlWriter::new(FmtSink::new(String::new()), WriterOptions::new());
//! writer.write("name", "MicroYaml").unwrap();
//! writer.write("note", "colons: need quotes").unwrap();
//! let text = writer.finish().unwrap().into_inner();
//!
//! assert_eq!(text, "---\nname: MicroYaml\nnote: \"colons: need quotes\"\n...\n");
//! ```

use crate::{Error, Result, WriterOptions};
use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::io;

/// Destination for MicroYaml text.
pub trait TextSink {
    fn write_str(&mut self, s: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sink writing UTF-8 to an [`io::Write`].
#[derive(Debug)]
pub struct IoSink<W> {
    writer: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        IoSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> TextSink for IoSink<W> {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.writer.write_all(s.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink appending to a [`fmt::Write`], such as a `String`.
#[derive(Debug)]
pub struct FmtSink<W> {
    writer: W,
}

impl<W: fmt::Write> FmtSink<W> {
    pub fn new(writer: W) -> Self {
        FmtSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: fmt::Write> TextSink for FmtSink<W> {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.writer.write_str(s)?;
        Ok(())
    }
}

/// Characters that never appear in a plain scalar.
const QUOTE_TRIGGERS: &[char] = &[
    '\r', '\n', '\t', ':', '#', ',', '[', ']', '{', '}', '"', '\'',
];

#[inline]
fn needs_quotes(s: &str) -> bool {
    let (Some(first), Some(last)) = (s.chars().next(), s.chars().next_back()) else {
        return true;
    };
    first.is_whitespace()
        || last.is_whitespace()
        // block scalar and explicit key indicators, byte order mark
        || matches!(first, '|' | '>' | '?' | '\u{FEFF}')
        || s.contains("? ")
        || s.chars().any(|ch| QUOTE_TRIGGERS.contains(&ch) || ch < '\u{20}')
}

/// Encodes one key or value, plain if possible and double-quoted otherwise.
///
/// # Examples
///
/// ```rust
/// use micro_yaml::writer::encode;
///
/// assert_eq!(encode("simple value"), "simple value");
/// assert_eq!(encode(""), "\"\"");
/// assert_eq!(encode(" padded"), "\" padded\"");
/// assert_eq!(encode("a\tb\n\"c\"\\"), r#""a\tb\n\"c\"\\""#);
/// assert_eq!(encode("bell\u{7}"), r#""bell\x07""#);
/// ```
#[must_use]
pub fn encode(s: &str) -> Cow<'_, str> {
    if !needs_quotes(s) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\0' => out.push_str("\\0"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            ch if ch < '\u{20}' => {
                // Writing to a String cannot fail
                let _ = write!(out, "\\x{:02x}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    Cow::Owned(out)
}

/// Writer of MicroYaml documents.
///
/// Call [`finish`](Self::finish) to write the end marker and get the sink
/// back. A writer dropped without `finish` still writes the end marker,
/// ignoring any error, like a `BufWriter` flushing on drop.
#[derive(Debug)]
pub struct MicroYamlWriter<S: TextSink> {
    sink: Option<S>,
    options: WriterOptions,
    started: bool,
}

impl<W: io::Write> MicroYamlWriter<IoSink<W>> {
    pub fn from_writer(writer: W, options: WriterOptions) -> Self {
        MicroYamlWriter::new(IoSink::new(writer), options)
    }
}

impl<W: fmt::Write> MicroYamlWriter<FmtSink<W>> {
    pub fn from_fmt(writer: W, options: WriterOptions) -> Self {
        MicroYamlWriter::new(FmtSink::new(writer), options)
    }
}

impl<S: TextSink> MicroYamlWriter<S> {
    pub fn new(sink: S, options: WriterOptions) -> Self {
        MicroYamlWriter {
            sink: Some(sink),
            options,
            started: false,
        }
    }

    #[must_use]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    fn sink(&mut self) -> Result<&mut S> {
        self.sink
            .as_mut()
            .ok_or_else(|| Error::custom("writer already finished"))
    }

    fn start(&mut self) -> Result<()> {
        if !self.started {
            self.started = true;
            if self.options.include_document_markers {
                self.sink()?.write_str("---\n")?;
            }
        }
        Ok(())
    }

    /// Writes one `key: value` line.
    pub fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.start()?;
        let sink = self.sink()?;
        sink.write_str(&encode(key))?;
        sink.write_str(": ")?;
        sink.write_str(&encode(value))?;
        sink.write_str("\n")
    }

    pub fn write_pair<K, V>(&mut self, pair: &(K, V)) -> Result<()>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.write(pair.0.as_ref(), pair.1.as_ref())
    }

    /// Writes every pair, returning how many were written.
    pub fn write_all<T, K, V>(&mut self, pairs: T) -> Result<usize>
    where
        T: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut count = 0;
        for (key, value) in pairs {
            self.write(key.as_ref(), value.as_ref())?;
            count += 1;
        }
        Ok(count)
    }

    /// Writes the end marker, flushes, and returns the sink.
    pub fn finish(mut self) -> Result<S> {
        self.start()?;
        let mut sink = self
            .sink
            .take()
            .ok_or_else(|| Error::custom("writer already finished"))?;
        if self.options.include_document_markers {
            sink.write_str("...\n")?;
        }
        sink.flush()?;
        Ok(sink)
    }
}

impl<S: TextSink> Drop for MicroYamlWriter<S> {
    fn drop(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            if self.options.include_document_markers {
                if !self.started {
                    let _ = sink.write_str("---\n");
                }
                let _ = sink.write_str("...\n");
            }
            let _ = sink.flush();
        }
    }
}
