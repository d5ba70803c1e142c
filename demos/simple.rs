//! Basic MicroYaml reading and writing.
//!
//! Run with: cargo run --example simple

use micro_yaml::{from_str, load_str, to_string, MicroYamlMap, ReaderOptions, WriterOptions};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize, PartialEq)]
struct Release {
    name: String,
    version: String,
    notes: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let text = "\
---
name: micro_yaml
version: '0.1.0'
notes: |
  First release.
  Reads and writes flat key/value documents.
...
";

    // Read into an ordered map
    let mut map = MicroYamlMap::new();
    let count = load_str(text, ReaderOptions::new(), &mut map)?;
    println!("Read {} pairs:", count);
    for (key, value) in &map {
        println!("  {} = {:?}", key, value);
    }

    // Deserialize into a struct
    let release: Release = from_str(text)?;
    println!("\nRelease: {:?}", release);

    // Write back out
    let out = to_string(&map, WriterOptions::new())?;
    println!("\nMicroYaml output:\n{}", out);

    let release_back: Release = from_str(&out)?;
    assert_eq!(release, release_back);
    println!("✓ Round-trip successful");

    Ok(())
}
