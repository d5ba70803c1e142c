//! Customizing MicroYaml reading and writing with options.
//!
//! Run with: cargo run --example custom_options

use micro_yaml::writer::MicroYamlWriter;
use micro_yaml::{load_str, save_writer, ReaderOptions, WriterOptions};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let pairs = [
        ("name", "MyApp"),
        ("greeting", "Hello, world"),
        ("path", "C:\\apps\\my app"),
        ("empty", ""),
    ];

    // Default: bracketed by document markers
    println!("With document markers:");
    save_writer(pairs, io::stdout().lock(), WriterOptions::new())?;

    // Bare pairs, e.g. for appending to an existing document
    println!("\nWithout document markers:");
    save_writer(pairs, io::stdout().lock(), WriterOptions::bare())?;

    // Streaming writer, one pair at a time
    println!("\nStreaming:");
    let mut writer = MicroYamlWriter::from_writer(io::stdout().lock(), WriterOptions::new());
    for i in 1..=3 {
        writer.write(&format!("step{}", i), &format!("done: {}", i))?;
    }
    writer.finish()?;

    // Reader options
    let text = "---\nA: 1\n...\n---\nB: 2\n...\n";
    for (label, options) in [
        ("default", ReaderOptions::new()),
        ("merge_documents", ReaderOptions::new().with_merge_documents(true)),
    ] {
        let mut read = Vec::new();
        load_str(text, options, &mut read)?;
        println!("\n{}: {:?}", label, read);
    }

    Ok(())
}
