//! Build script to embed the default vocabulary
//!
//! Turns `data/vocabulary.txt` into a `VOCABULARY` const so the binary
//! needs no data files at runtime.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const SOURCE: &str = "data/vocabulary.txt";

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");

    let content =
        fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("Failed to read {SOURCE}: {e}"));
    let words = parse_words(&content);

    let out_dir = env::var_os("OUT_DIR").map_or_else(|| panic!("OUT_DIR not set"), PathBuf::from);
    let output_path = out_dir.join("vocabulary.rs");
    fs::write(&output_path, render(&words))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}

/// One word per line; `#` starts a comment line
fn parse_words(content: &str) -> Vec<&str> {
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    for (index, word) in words.iter().enumerate() {
        assert!(
            word.chars().all(|ch| ch.is_alphabetic() && ch.is_uppercase()),
            "{SOURCE}: entry {} ({word:?}) must be uppercase letters only",
            index + 1
        );
        assert!(
            !words[..index].contains(word),
            "{SOURCE}: {word:?} is listed twice"
        );
    }
    words
}

fn render(words: &[&str]) -> String {
    let count = words.len();
    let mut source = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(source, "// Generated from {SOURCE}, do not edit\n");
    let _ = writeln!(source, "/// Default word pool for puzzle rounds ({count} words)");
    let _ = writeln!(source, "pub const VOCABULARY: &[&str] = &[");
    for word in words {
        let _ = writeln!(source, "    {word:?},");
    }
    let _ = writeln!(source, "];\n");
    let _ = writeln!(source, "/// Number of words in VOCABULARY");
    let _ = writeln!(source, "pub const VOCABULARY_COUNT: usize = {count};");
    source
}
