//! Word list loading utilities
//!
//! Provides functions to load vocabularies from files or from string slices.

use std::fs;
use std::io;
use std::path::Path;

/// Load a vocabulary from a file, one word per line
///
/// Lines are trimmed and uppercased; empty lines and entries containing
/// anything but ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use gridfill::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().filter_map(normalize).collect())
}

/// Convert a string slice to a normalized vocabulary
///
/// # Examples
/// ```
/// use gridfill::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "ten"]);
/// assert_eq!(words, vec!["CAT".to_string(), "TEN".to_string()]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().copied().filter_map(normalize).collect()
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}
