//! Configuration options for MicroYaml reading and writing.
//!
//! - [`ReaderOptions`]: how document markers and the underlying input are handled
//! - [`WriterOptions`]: whether output is bracketed by document markers
//!
//! ## Examples
//!
//! ```rust
//! use micro_yaml::{load_str, ReaderOptions};
//!
//! let source = "/*\n---\nname: demo.c\n...\n*/\nint main() {}\n";
//!
//! // Metadata embedded in a source comment
//! let options = ReaderOptions::new().with_ignore_text_outside_document_markers(true);
//! let mut pairs = Vec::new();
//! let count = load_str(source, options, &mut pairs).unwrap();
//! assert_eq!(count, 1);
//! assert_eq!(pairs[0], ("name".to_string(), "demo.c".to_string()));
//! ```

/// Configuration options for MicroYaml readers.
///
/// The options are copied into each reader when it is created, so changing
/// a caller's options afterwards never affects a read in progress.
///
/// # Examples
///
/// ```rust
/// use micro_yaml::ReaderOptions;
///
/// let options = ReaderOptions::new()
///     .with_merge_documents(true)
///     .with_ignore_text_outside_document_markers(true);
/// assert_eq!(options, ReaderOptions::embedded());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Release the underlying input when the reader is done with it instead
    /// of handing it back through `into_inner`. Default is `false`.
    pub close_input: bool,

    /// Ignore all input outside of document markers.
    ///
    /// A start marker is a line containing exactly `---`; an end marker is a
    /// line containing exactly `...`. When set, at least one start marker is
    /// required and everything before it, or between an end marker and the
    /// next start marker, is skipped. This is how metadata embedded in other
    /// text (a comment block in source code, say) is found. When unset, the
    /// start marker is optional.
    pub ignore_text_outside_document_markers: bool,

    /// Read every document in the input as if it were one.
    ///
    /// When unset, the caller moves between documents with
    /// `MicroYamlReader::next_document`.
    pub merge_documents: bool,
}

impl ReaderOptions {
    /// Creates default options (all flags off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for metadata embedded in other text: ambient text is skipped
    /// and all documents are read as one.
    #[must_use]
    pub fn embedded() -> Self {
        ReaderOptions {
            close_input: false,
            ignore_text_outside_document_markers: true,
            merge_documents: true,
        }
    }

    /// Sets whether the reader releases its input when done.
    #[must_use]
    pub fn with_close_input(mut self, close_input: bool) -> Self {
        self.close_input = close_input;
        self
    }

    /// Sets whether text outside of document markers is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use micro_yaml::ReaderOptions;
    ///
    /// let options = ReaderOptions::new().with_ignore_text_outside_document_markers(true);
    /// assert!(options.ignore_text_outside_document_markers);
    /// assert!(!options.merge_documents);
    /// ```
    #[must_use]
    pub fn with_ignore_text_outside_document_markers(mut self, ignore: bool) -> Self {
        self.ignore_text_outside_document_markers = ignore;
        self
    }

    /// Sets whether all documents are read as one.
    #[must_use]
    pub fn with_merge_documents(mut self, merge: bool) -> Self {
        self.merge_documents = merge;
        self
    }
}

/// Configuration options for MicroYaml writers.
///
/// # Examples
///
/// ```rust
/// use micro_yaml::{to_string, WriterOptions};
///
/// let pairs = [("key", "value")];
/// assert_eq!(to_string(pairs, WriterOptions::new()).unwrap(), "---\nkey: value\n...\n");
/// assert_eq!(to_string(pairs, WriterOptions::bare()).unwrap(), "key: value\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriterOptions {
    /// Bracket the output with a `---` line and a `...` line. Default is `true`.
    pub include_document_markers: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            include_document_markers: true,
        }
    }
}

impl WriterOptions {
    /// Creates default options (document markers included).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for output without document markers.
    #[must_use]
    pub fn bare() -> Self {
        WriterOptions {
            include_document_markers: false,
        }
    }

    /// Sets whether document markers are written.
    #[must_use]
    pub fn with_document_markers(mut self, include: bool) -> Self {
        self.include_document_markers = include;
        self
    }
}
