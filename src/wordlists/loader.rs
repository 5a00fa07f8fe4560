//! Word list loading utilities
//!
//! Parses plain-text lists (one word per line) and reads them from disk.

use super::SourceError;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Parse words from text, one per line
///
/// Lines are trimmed and lower-cased. Blank lines, entries that are not five
/// ASCII letters, and repeats are skipped; first-seen order is kept.
///
/// # Examples
/// ```
/// use wrdl::wordlists::loader::words_from_text;
///
/// let words = words_from_text("Crane\n\nslate\ncrane\ntoolong\n");
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    dedup(content.lines().map(str::trim).filter(|line| !line.is_empty()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wrdl::wordlists::loader::words_from_slice;
/// use wrdl::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup(slice.iter().copied())
}

fn dedup<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    entries
        .filter_map(|entry| Word::new(entry).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `SourceError::Read` if the file cannot be opened or is not UTF-8.
pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Word>, SourceError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let words = words_from_text(&content);
    tracing::debug!(path = %path.display(), count = words.len(), "read word list");
    Ok(words)
}
