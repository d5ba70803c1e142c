//! MicroYaml Format Reference
//!
//! This module documents the MicroYaml format as read and written by this
//! library. It contains no code.
//!
//! # Overview
//!
//! A MicroYaml stream is a sequence of documents. Each document is a flat
//! list of `key: value` pairs where both sides are strings:
//!
//! ```text
//! ---
//! # comment
//! name: micro_yaml
//! description: Streaming reader and writer
//! ...
//! ```
//!
//! Keys are not required to be unique. The reader reports every pair in
//! order and leaves duplicate handling to the collection it fills.
//!
//! # Lines and Characters
//!
//! - CR, CRLF and LF are all line breaks and read as LF
//! - A NUL character in the input reads as U+FFFD
//! - Byte streams are UTF-8; a leading byte-order mark is dropped
//! - Spaces and tabs between tokens are insignificant
//! - `#` at the start of a token starts a comment running to the end of
//!   the line. Inside a plain scalar, `#` starts a comment only when it
//!   follows a space or tab
//!
//! # Document Markers
//!
//! | Line  | Meaning        |
//! |-------|----------------|
//! | `---` | Start document |
//! | `...` | End document   |
//!
//! A marker is the whole line: it starts at the first column and nothing
//! but a line break (or the end of input) follows it. `--- x` and ` ---`
//! are ordinary text.
//!
//! Without markers the whole input is one document. With
//! `ignore_text_outside_document_markers`, text before the first `---`
//! and between `...` and the next `---` is skipped, so a document can be
//! embedded in a source file comment:
//!
//! ```text
//! /*
//! ---
//! Author: Jane Doe
//! ...
//! */
//! ```
//!
//! Any text other than a new `---` after a `...` line, when ambient text
//! is not being ignored, is a syntax error.
//!
//! # Pairs
//!
//! ```text
//! key: value
//! ? explicit key
//! : value
//! : value with an empty key
//! ```
//!
//! The value indicator is `:` followed by a space (or a line break);
//! the explicit key indicator is `?` followed by a space. A key with no
//! value indicator, or a value indicator with no value, reads as an empty
//! string and is reported as a syntax error.
//!
//! # Scalar Styles
//!
//! ## Plain
//!
//! ```text
//! url: http://example.com/a:b
//! ```
//!
//! Runs to the end of the line, stopping early at `: `, `? ` or ` #`.
//! Trailing whitespace is trimmed.
//!
//! ## Single-Quoted
//!
//! ```text
//! quote: 'It''s ''quoted'''
//! ```
//!
//! `''` stands for one `'`. There are no other escapes.
//!
//! ## Double-Quoted
//!
//! ```text
//! path: "C:\\temp\tdir"
//! ```
//!
//! | Escape | Character       | Escape   | Character            |
//! |--------|-----------------|----------|----------------------|
//! | `\0`   | NUL             | `\e`     | ESC (U+001B)         |
//! | `\a`   | BEL (U+0007)    | `\N`     | next line (U+0085)   |
//! | `\b`   | backspace       | `\_`     | no-break space       |
//! | `\t`   | tab             | `\L`     | line sep. (U+2028)   |
//! | `\n`   | line feed       | `\P`     | para. sep. (U+2029)  |
//! | `\v`   | vertical tab    | `\xHH`   | code point, 2 digits |
//! | `\f`   | form feed       | `\uHHHH` | code point, 4 digits |
//! | `\r`   | carriage return | `\<LF>`  | line feed, kept      |
//!
//! Any other escaped character stands for itself, so `\"` and `\\` are a
//! quote and a backslash. Hex escapes stop at the first non-hex digit.
//! Code points that are not valid characters read as U+FFFD.
//!
//! A quoted scalar may span lines. Each line break, with the blanks around
//! it, folds into a single space. An unterminated quote ends at the end of
//! input.
//!
//! ## Block Scalars
//!
//! ```text
//! literal: |
//!   Line breaks
//!   are kept.
//! folded: >-
//!   Lines are
//!   joined with spaces.
//! ```
//!
//! The header is `|` (literal) or `>` (folded), then optionally an
//! indentation digit and a chomping indicator in either order, then only
//! blanks or a comment.
//!
//! - **Indentation**: the digit gives the number of columns stripped from
//!   every line. Without it, the indentation of the first line is used.
//!   The block ends at the first non-empty line indented less
//! - **Folding**: in a folded block, a single line break between two
//!   lines becomes a space, and further breaks are kept
//! - **Chomping**: `-` drops all trailing line breaks, no indicator keeps
//!   exactly one, and `+` keeps them all
//!
//! Trailing blanks on each line are trimmed.
//!
//! # Writer Output
//!
//! The writer emits plain scalars when they read back unchanged, and
//! double-quoted scalars otherwise. A string is quoted when it:
//!
//! - is empty, or starts or ends with whitespace
//! - contains a line break, tab, control character, `:`, `#`, `,`, `[`,
//!   `]`, `{`, `}`, `"` or `'`
//! - starts with `|`, `>`, `?` or a byte order mark (U+FEFF), or contains `? `
//!
//! Inside the quotes, NUL, tab, LF, CR, `"` and `\` use their short
//! escapes and other control characters use `\xHH`.
