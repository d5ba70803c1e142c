use micro_yaml::{
    from_str, load_str, to_string, Entry, MicroYamlMap, MicroYamlReader, ReaderOptions,
    WriterOptions,
};
use serde::Deserialize;

const ALL_STYLES: &str = include_str!("fixtures/all_styles.yaml");
const EMBEDDED_DOCUMENTS: &str = include_str!("fixtures/embedded_documents.txt");

fn pair(key: &str, value: &str) -> Entry {
    Entry::Pair(key.to_string(), value.to_string())
}

fn all_styles_expected() -> Vec<Entry> {
    vec![
        pair("key", "value"),
        pair("simple1", "simple-value"),
        pair("simple2", "simple value with ' quotes \" that are preserved literally"),
        pair(
            "simple3",
            "All alphanumeric and many other @-!$*:?${};'\"[]~()_+=~`|<> literal characters are acceptable",
        ),
        pair("simple4", "A comment"),
        pair(
            "simple5",
            "A colon followed by a space delimits the value. When embedded in a simple value, the :colon must not be followed by a space.",
        ),
        pair(
            "single-quote1",
            "This is the value. 'Embedded single-quotes' are doubled up.",
        ),
        pair(
            "single-quote2",
            "In single-quoted format you may have line breaks. Line breaks in this format use line-folding meaning that they are converted to a single space character and not preserved literally.",
        ),
        pair(
            "double-quote1",
            "This a double-quote value.\nIt uses c-style escaping.",
        ),
        pair(
            "double-quote2",
            "Like single-quote values, double-quote values may have embedded line breaks. Also like single-quote values the newlines are converted into spaces and trailing spaces are stripped. To embed a literal newline, use the \n escape. To embed quotes, use the \"quote\" escape.",
        ),
        pair(
            "double-quote3",
            "You may escape the \nnewline itself thereby supporting trailing spaces and\nembedded newlines.",
        ),
        pair("double-quote4", "Hex ~ and Unicode { escapes are also supported."),
        pair(
            "literal1",
            "Values in literal block format must be indented.\n\n\nNewlines are significant and preserved.\nTrailing spaces are trimmed.\n\nIndentation beyond the amount of the first line\n is also preserved.\n",
        ),
        pair(
            "literal2",
            "A dash after the block indicator means to \"chomp\" the\nterminating newline in literal block format.",
        ),
        pair(
            "literal3",
            "A plus after the block indicator means to include the\n\nterminating newline and any subsequent blank lines.\n\n",
        ),
        // The explicit indentation is stripped from the first line as well. The
        // original C# harness expected one more leading space here and in folded2.
        pair(
            "literal4",
            "  A numeral after the block indicator indicates the\nnumber of indentation characters thereby allowing the\nfirst line of the value to have leading whitespace.",
        ),
        pair(
            "folded1",
            "In folded format, newlines are converted to spaces and trailing spaces are trimmed.\n",
        ),
        pair(
            "folded2",
            " Folded format also supports the indentation indicator and the chomping indicator.",
        ),
        pair(
            "folded3",
            "In folded format, a newline followed by a blank line\nresults in ONE embedded newline.\n",
        ),
        pair("simple key", "value"),
        pair("single quote key", "value"),
        pair("double quote key", "value"),
        pair("Literal block key", "value"),
        pair("edge1", "Trailing spaces on a simple key."),
        pair("edge2", "Trailing spaces on a double-quote key."),
        pair("edge3 ", "Preserved trailing spaces on a double-quote key."),
        pair("edge4", "Literal block followed by empty lines\n"),
        pair("edge5", "Literal block without any trailing empty lines.\n"),
        pair("edge6", "Literal block with chomping followed by empty lines"),
        pair("edge7", "Literal block with keeping followed by empty lines\n\n\n\n"),
        pair("edge8", "Folded block with trailing empty lines.\n"),
        pair("Edge9", "Folded block with chomping followed by empty lines"),
        pair("Edge10", "Folded block with keeping followed by empty lines\n\n\n"),
        pair(
            "Edge11",
            "Folded block with embedded and trailing empty lines\n\nand chomping.",
        ),
        pair("Edge12", "End of file."),
    ]
}

fn embedded_documents_expected() -> Vec<Entry> {
    vec![
        pair("Key1", "Value1"),
        pair("Key2", "A longer value written out\nin literal form.\n"),
        Entry::DocumentBoundary,
        pair("Key3", "Value3"),
        pair("Key4", "..."),
        Entry::DocumentBoundary,
        pair("Key5", "Fife"),
        Entry::DocumentBoundary,
        pair("Key6", ""),
        Entry::DocumentBoundary,
        pair("Key7", "Lucky Seven"),
        Entry::DocumentBoundary,
        pair("Key8", "Ate"),
    ]
}

/// Reads `text` with and without document merging and compares every entry,
/// failing on any recorded syntax error.
fn check_document(text: &str, expected: &[Entry], ignore_outside: bool) {
    for merge in [false, true] {
        let options = ReaderOptions::new()
            .with_merge_documents(merge)
            .with_ignore_text_outside_document_markers(ignore_outside);

        let mut entries = MicroYamlReader::from_str(text, options).entries();
        let mut actual = Vec::new();
        while let Some(entry) = entries.next() {
            let entry = entry.unwrap();
            if let Some(err) = entries.last_error() {
                panic!("unexpected error at {:?} (merge={}): {}", entry, merge, err);
            }
            actual.push(entry);
        }

        let wanted: Vec<Entry> = expected
            .iter()
            .filter(|entry| !merge || **entry != Entry::DocumentBoundary)
            .cloned()
            .collect();
        assert_eq!(actual.len(), wanted.len(), "entry count (merge={})", merge);
        for (got, want) in actual.iter().zip(&wanted) {
            assert_eq!(got, want, "merge={}", merge);
        }
    }
}

#[test]
fn test_empty_input() {
    check_document("", &[], false);
    check_document("", &[], true);
}

#[test]
fn test_all_scalar_styles() {
    check_document(ALL_STYLES, &all_styles_expected(), false);
}

#[test]
fn test_embedded_documents() {
    check_document(EMBEDDED_DOCUMENTS, &embedded_documents_expected(), true);
}

#[test]
fn test_all_scalar_styles_with_crlf() {
    let crlf = ALL_STYLES.replace('\n', "\r\n");
    check_document(&crlf, &all_styles_expected(), false);
}

#[test]
fn test_all_scalar_styles_from_bytes() {
    let reader = MicroYamlReader::from_reader(ALL_STYLES.as_bytes(), ReaderOptions::new());
    let pairs: Vec<(String, String)> = reader.map(|pair| pair.unwrap()).collect();
    assert_eq!(pairs.len(), all_styles_expected().len());
    assert_eq!(pairs[0], ("key".to_string(), "value".to_string()));
}

#[test]
fn test_fixture_survives_rewrite() {
    let mut original = Vec::new();
    load_str(ALL_STYLES, ReaderOptions::new(), &mut original).unwrap();

    let rewritten = to_string(original.clone(), WriterOptions::new()).unwrap();
    let mut reread = Vec::new();
    load_str(&rewritten, ReaderOptions::new(), &mut reread).unwrap();
    assert_eq!(original, reread);
}

#[test]
fn test_embedded_metadata_into_map() {
    let mut map = MicroYamlMap::new();
    let count = load_str(EMBEDDED_DOCUMENTS, ReaderOptions::embedded(), &mut map).unwrap();
    assert_eq!(count, 8);
    assert_eq!(map.get("Key6"), Some(""));
    assert_eq!(map.get("Key8"), Some("Ate"));
}

#[test]
fn test_file_header_comment() {
    // Metadata block at the top of a C source file
    let source = "/*\n---\nTitle: MicroYaml Unit Tests\nFilename: Program.cs\n...\n*/\n\nint main(void) { return 0; }\n";

    #[derive(Deserialize, Debug, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Header {
        title: String,
        filename: String,
    }

    let mut map = MicroYamlMap::new();
    load_str(source, ReaderOptions::embedded(), &mut map).unwrap();
    assert_eq!(map.get("Title"), Some("MicroYaml Unit Tests"));

    let header: Header = serde_json::from_value(serde_json::to_value(&map).unwrap()).unwrap();
    assert_eq!(
        header,
        Header {
            title: "MicroYaml Unit Tests".to_string(),
            filename: "Program.cs".to_string(),
        }
    );

    // Plain reading treats the comment opener as a key without a value
    let bare: Result<Header, _> = from_str(source);
    assert!(bare.is_err());
}
