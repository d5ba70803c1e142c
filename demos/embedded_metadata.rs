//! Reading MicroYaml metadata embedded in another file.
//!
//! Run with: cargo run --example embedded_metadata

use micro_yaml::{Entry, MicroYamlReader, ReaderOptions};
use std::error::Error;

const SOURCE_FILE: &str = r#"/*
---
Title: Frobnicator
Author: Jane Doe
...
---
Changed: 2024-03-01
Reason: "Faster frobbing"
...
*/

#include <stdio.h>

int main(void) {
    puts("--- not a marker ---");
    return 0;
}
"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Each document separately
    let options = ReaderOptions::new().with_ignore_text_outside_document_markers(true);
    let reader = MicroYamlReader::from_str(SOURCE_FILE, options);

    let mut document = 1;
    println!("Document {}:", document);
    for entry in reader.entries() {
        match entry? {
            Entry::Pair(key, value) => println!("  {}: {}", key, value),
            Entry::DocumentBoundary => {
                document += 1;
                println!("Document {}:", document);
            }
        }
    }

    // All documents as one
    let merged: Vec<(String, String)> =
        MicroYamlReader::from_str(SOURCE_FILE, ReaderOptions::embedded()).collect::<Result<_, _>>()?;
    println!("\nMerged: {} pairs", merged.len());

    Ok(())
}
