//! Error types for MicroYaml reading and writing.
//!
//! MicroYaml distinguishes two kinds of failure:
//!
//! - **Syntax errors**: a structurally required token is missing. These are
//!   never fatal. The reader substitutes an empty string for the missing
//!   piece, records the error (see [`MicroYamlReader::last_error`]) and keeps
//!   going, so malformed or truncated input degrades to partial results.
//! - **I/O errors**: the underlying input or output failed. These are the
//!   only errors returned as `Err` by the reader and the writer.
//!
//! ## Examples
//!
//! ```rust
//! use micro_yaml::{MicroYamlReader, ReaderOptions};
//!
//! let mut reader = MicroYamlReader::from_str("lonely\n", ReaderOptions::default());
//! assert!(reader.next_pair().unwrap());
//! assert_eq!(reader.current(), Some(("lonely", "")));
//!
//! let err = reader.last_error().unwrap();
//! assert!(err.to_string().contains("Expected value prefix"));
//! ```
//!
//! [`MicroYamlReader::last_error`]: crate::MicroYamlReader::last_error

use std::{fmt, io};
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing MicroYaml.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Recoverable syntax error, reported through `last_error`
    #[error("Syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error for the given (1-based) line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use micro_yaml::Error;
    ///
    /// let err = Error::syntax(3, "Expected scalar.");
    /// assert_eq!(err.to_string(), "Syntax error at line 3: Expected scalar.");
    /// ```
    pub fn syntax(line: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// The message of a syntax error, without the location prefix.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Syntax { msg, .. } => Some(msg),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_display() {
        let err = Error::syntax(12, "Expected scalar value.");
        assert_eq!(
            err.to_string(),
            "Syntax error at line 12: Expected scalar value."
        );
        assert_eq!(err.message(), Some("Expected scalar value."));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
        assert_eq!(err.message(), None);
    }
}
