//! # micro_yaml
//!
//! A streaming reader and writer for MicroYaml, a strict subset of YAML made of
//! flat `key: value` string pairs.
//!
//! ## What is MicroYaml?
//!
//! MicroYaml keeps the parts of YAML that make sense for small metadata
//! blocks and configuration files: a single level of string keys and string
//! values, every scalar style, comments, and `---` / `...` document markers.
//! Nested mappings, sequences, flow collections, anchors, tags and directives
//! are not part of the format. See the [`syntax`] module for the full grammar.
//!
//! ## Key Features
//!
//! - **Every Scalar Style**: plain, single-quoted, double-quoted with escapes,
//!   and literal (`|`) or folded (`>`) blocks with chomping indicators
//! - **Embedded Metadata**: read documents out of surrounding text, such as
//!   a comment block at the top of a source file
//! - **Forgiving Reader**: syntax errors are recorded and skipped, never fatal;
//!   only I/O failures stop a read
//! - **Round-Trip Writer**: every string is written so that it reads back unchanged
//! - **Serde Integration**: [`from_str`] fills a struct of string fields, and
//!   [`MicroYamlMap`] serializes as an ordinary map
//!
//! ## Quick Start
//!
//! ```rust
//! use micro_yaml::{load_str, to_string, ReaderOptions, WriterOptions};
//!
//! let text = "\
//! ## build metadata
//! name: micro_yaml
//! summary: >
//!   Streaming reader and
//!   writer.
//! quote: 'It''s small'
//! ";
//!
//! let mut pairs: Vec<(String, String)> = Vec::new();
//! let count = load_str(text, ReaderOptions::new(), &mut pairs).unwrap();
//! assert_eq!(count, 3);
//! assert_eq!(pairs[1].1, "Streaming reader and writer.\n");
//! assert_eq!(pairs[2].1, "It's small");
//!
//! let out = to_string(pairs, WriterOptions::new()).unwrap();
//! assert_eq!(
//!     out,
//!     "---\nname: micro_yaml\nsummary: \"Streaming reader and writer.\\n\"\nquote: \"It's small\"\n...\n"
//! );
//! ```
//!
//! ### Streaming
//!
//! ```rust
//! use micro_yaml::{MicroYamlReader, ReaderOptions};
//!
//! let reader = MicroYamlReader::from_str("a: 1\nb: 2\n", ReaderOptions::new());
//! for pair in reader {
//!     let (key, value) = pair.unwrap();
//!     println!("{} = {}", key, value);
//! }
//! ```
//!
//! ### Deserializing a struct
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Package {
//!     name: String,
//!     version: String,
//! }
//!
//! let package: Package = micro_yaml::from_str("name: demo\nversion: 1.0\n").unwrap();
//! assert_eq!(package.version, "1.0");
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `trace` for every token and document
//! transition, `debug` for every recovered syntax error and file operation.
//! No subscriber is installed.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Reading and writing a document
//! - **`embedded_metadata.rs`** - Pulling metadata out of a source file comment
//! - **`custom_options.rs`** - Reader and writer options side by side
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod reader;
pub mod scanner;
pub mod source;
pub mod syntax;
pub mod writer;

pub use error::{Error, Result};
pub use map::MicroYamlMap;
pub use options::{ReaderOptions, WriterOptions};
pub use reader::{Entries, Entry, MicroYamlReader, ReaderState};
pub use source::CharInput;
pub use writer::{encode, MicroYamlWriter, TextSink};

use serde::de::value::MapDeserializer;
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Loads the pairs of a file into `collection`, returning how many were loaded.
///
/// The file is always closed before returning, whatever `close_input` says.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or is not UTF-8.
pub fn load_file<P, C>(path: P, options: ReaderOptions, collection: &mut C) -> Result<usize>
where
    P: AsRef<Path>,
    C: Extend<(String, String)>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "loading");
    let file = File::open(path)?;
    let options = options.with_close_input(false);
    MicroYamlReader::from_reader(BufReader::new(file), options).copy_to(collection)
}

/// Loads the pairs of a UTF-8 byte stream into `collection`.
///
/// # Errors
///
/// Returns an error if reading fails or the bytes are not UTF-8.
pub fn load_reader<R, C>(reader: R, options: ReaderOptions, collection: &mut C) -> Result<usize>
where
    R: io::Read,
    C: Extend<(String, String)>,
{
    MicroYamlReader::from_reader(BufReader::new(reader), options).copy_to(collection)
}

/// Loads the pairs of in-memory text into `collection`.
///
/// Without `merge_documents` only the first document is loaded.
///
/// # Examples
///
/// ```rust
/// use micro_yaml::{load_str, ReaderOptions};
///
/// let text = "---\nA: 1\n...\n---\nB: 2\n...\n";
/// let mut first = Vec::new();
/// assert_eq!(load_str(text, ReaderOptions::new(), &mut first).unwrap(), 1);
///
/// let mut all = Vec::new();
/// let merged = ReaderOptions::new().with_merge_documents(true);
/// assert_eq!(load_str(text, merged, &mut all).unwrap(), 2);
/// ```
///
/// # Errors
///
/// In-memory text cannot fail to read, so this only returns `Ok`.
pub fn load_str<C>(text: &str, options: ReaderOptions, collection: &mut C) -> Result<usize>
where
    C: Extend<(String, String)>,
{
    MicroYamlReader::from_str(text, options).copy_to(collection)
}

/// Loads the pairs of any [`CharInput`] into `collection`.
///
/// # Errors
///
/// Returns the first error reported by `input`.
pub fn load_chars<I, C>(input: I, options: ReaderOptions, collection: &mut C) -> Result<usize>
where
    I: CharInput,
    C: Extend<(String, String)>,
{
    MicroYamlReader::new(input, options).copy_to(collection)
}

/// Deserializes a `T` from the first document of `text`.
///
/// `T` sees the document as a map of strings, so it is typically a struct
/// of `String` fields, a `HashMap<String, String>` or a [`MicroYamlMap`].
///
/// # Errors
///
/// Returns an error if the pairs do not fit `T`: a missing or duplicated
/// field, or a field that is not a string.
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut pairs: Vec<(String, String)> = Vec::new();
    load_str(text, ReaderOptions::new(), &mut pairs)?;
    let deserializer: MapDeserializer<'_, _, Error> = MapDeserializer::new(pairs.into_iter());
    T::deserialize(deserializer)
}

/// Saves pairs to a file, returning how many were written.
///
/// The file is created if needed. With `append` set, the new document is
/// added after the existing content; otherwise the file is truncated.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn save_file<T, K, V, P>(pairs: T, path: P, options: WriterOptions, append: bool) -> Result<usize>
where
    T: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), append, "saving");
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    save_writer(pairs, BufWriter::new(file), options)
}

/// Saves pairs to a byte stream as UTF-8.
///
/// # Errors
///
/// Returns an error if writing or flushing fails.
pub fn save_writer<T, K, V, W>(pairs: T, writer: W, options: WriterOptions) -> Result<usize>
where
    T: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    W: io::Write,
{
    let mut writer = MicroYamlWriter::from_writer(writer, options);
    let count = writer.write_all(pairs)?;
    writer.finish()?;
    Ok(count)
}

/// Saves pairs to any [`fmt::Write`].
///
/// # Errors
///
/// Returns an error if the sink reports one.
pub fn save_fmt<T, K, V, W>(pairs: T, writer: W, options: WriterOptions) -> Result<usize>
where
    T: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    W: fmt::Write,
{
    let mut writer = MicroYamlWriter::from_fmt(writer, options);
    let count = writer.write_all(pairs)?;
    writer.finish()?;
    Ok(count)
}

/// Renders pairs as a MicroYaml string.
///
/// # Examples
///
/// ```rust
/// use micro_yaml::{to_string, WriterOptions};
///
/// let out = to_string([("path", "C:\\temp"), ("empty", "")], WriterOptions::bare()).unwrap();
/// assert_eq!(out, "path: \"C:\\\\temp\"\nempty: \"\"\n");
/// ```
///
/// # Errors
///
/// Writing to a `String` cannot fail, so this only returns `Ok`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T, K, V>(pairs: T, options: WriterOptions) -> Result<String>
where
    T: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    save_fmt(pairs, &mut out, options)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;
    use std::io::Cursor;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Header {
        title: String,
        author: String,
    }

    #[test]
    fn test_from_str_struct() {
        let header: Header = from_str("title: \"A: B\"\nauthor: 'me'\nextra: ignored\n").unwrap();
        assert_eq!(
            header,
            Header {
                title: "A: B".to_string(),
                author: "me".to_string(),
            }
        );
    }

    #[test]
    fn test_from_str_missing_field() {
        let err = from_str::<Header>("title: only\n").unwrap_err();
        assert!(matches!(err, Error::Custom(_)));
        assert!(err.to_string().contains("author"));
    }

    #[test]
    fn test_from_str_into_maps() {
        let map: HashMap<String, String> = from_str("a: 1\nb: 2\n").unwrap();
        assert_eq!(map.get("b").map(String::as_str), Some("2"));

        let ordered: MicroYamlMap = from_str("z: 1\na: 2\n").unwrap();
        assert_eq!(ordered.keys().next().map(String::as_str), Some("z"));
    }

    #[test]
    fn test_load_reader_and_chars() {
        let mut pairs = Vec::new();
        let count = load_reader(Cursor::new("k: v\r\n"), ReaderOptions::new(), &mut pairs).unwrap();
        assert_eq!(count, 1);
        assert_eq!(pairs, [("k".to_string(), "v".to_string())]);

        let mut map = MicroYamlMap::new();
        let input = source::CharsInput::new("x: y".chars());
        assert_eq!(load_chars(input, ReaderOptions::new(), &mut map).unwrap(), 1);
        assert_eq!(map.get("x"), Some("y"));
    }

    #[test]
    fn test_save_writer_counts_pairs() {
        let mut out = Vec::new();
        let count = save_writer([("a", "1"), ("b", "2")], &mut out, WriterOptions::bare()).unwrap();
        assert_eq!(count, 2);
        assert_eq!(out, b"a: 1\nb: 2\n");
    }

    #[test]
    fn test_file_round_trip_and_append() {
        let path = std::env::temp_dir().join(format!("micro_yaml_lib_{}.yaml", std::process::id()));

        save_file([("first", "1")], &path, WriterOptions::new(), false).unwrap();
        save_file([("second", "2")], &path, WriterOptions::new(), true).unwrap();

        let mut merged = Vec::new();
        let options = ReaderOptions::new().with_merge_documents(true).with_close_input(true);
        assert_eq!(load_file(&path, options, &mut merged).unwrap(), 2);

        save_file([("only", "3")], &path, WriterOptions::new(), false).unwrap();
        let mut map = MicroYamlMap::new();
        load_file(&path, ReaderOptions::new(), &mut map).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("only"), Some("3"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_file_missing() {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let result = load_file("/nonexistent/micro_yaml.yaml", ReaderOptions::new(), &mut pairs);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
