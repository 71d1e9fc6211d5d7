//! Build script to generate the embedded dictionary
//!
//! Normalises `data/words.txt` (lowercase, sorted, deduplicated) and writes it
//! out as a const slice. Entries with anything but ASCII letters are skipped
//! with a cargo warning.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={WORD_LIST}");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let output = Path::new(&out_dir).join("dictionary.rs");

    let content = fs::read_to_string(WORD_LIST)
        .unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));
    let words = collect_words(&content);

    write_dictionary(&output, &words)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output.display()));
}

fn collect_words(content: &str) -> BTreeSet<String> {
    let mut words = BTreeSet::new();

    for (number, line) in content.lines().enumerate() {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        if entry.chars().all(|c| c.is_ascii_alphabetic()) {
            words.insert(entry.to_ascii_lowercase());
        } else {
            println!(
                "cargo:warning={WORD_LIST}:{}: skipping '{entry}'",
                number + 1
            );
        }
    }

    words
}

fn write_dictionary(path: &Path, words: &BTreeSet<String>) -> io::Result<()> {
    let mut output = BufWriter::new(fs::File::create(path)?);

    writeln!(output, "// Generated from {WORD_LIST} by build.rs")?;
    writeln!(output)?;
    writeln!(
        output,
        "/// Default game dictionary: lowercase words, sorted and distinct"
    )?;
    writeln!(output, "pub const DICTIONARY: &[&str] = &[")?;
    for word in words {
        writeln!(output, "    \"{word}\",")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in DICTIONARY")?;
    writeln!(output, "pub const DICTIONARY_COUNT: usize = {};", words.len())?;

    output.flush()
}
