//! Word lists for the game
//!
//! Provides the embedded default lists, the loaded `WordLists` pair, and the
//! `WordSource` that loads them once and hands them out.

mod embedded;
mod error;
pub mod loader;
mod source;

pub use embedded::{ALLOWED, ALLOWED_COUNT, TARGETS, TARGETS_COUNT};
pub use error::{ListKind, SourceError};
pub use source::{EmbeddedProvider, FileProvider, LoadFuture, LoadStatus, WordProvider, WordSource};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// A loaded pair of word lists
///
/// `allowed` answers "may this be guessed?"; `targets` is the pool the hidden
/// word is drawn from. Both are guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct WordLists {
    allowed: FxHashSet<Word>,
    targets: Vec<Word>,
}

impl WordLists {
    /// Build the pair, rejecting empty lists
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Empty` if either list has no words.
    pub fn new(allowed: Vec<Word>, targets: Vec<Word>) -> Result<Self, SourceError> {
        if allowed.is_empty() {
            return Err(SourceError::Empty {
                list: ListKind::Allowed,
            });
        }
        if targets.is_empty() {
            return Err(SourceError::Empty {
                list: ListKind::Targets,
            });
        }

        let allowed: FxHashSet<Word> = allowed.into_iter().collect();
        let unguessable = targets.iter().filter(|w| !allowed.contains(*w)).count();
        if unguessable > 0 {
            tracing::warn!(unguessable, "some target words are missing from the allowed list");
        }

        Ok(Self { allowed, targets })
    }

    /// The lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Empty` only if the build embedded an empty list.
    pub fn embedded() -> Result<Self, SourceError> {
        Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(TARGETS),
        )
    }

    /// Case-insensitive membership test for guesses
    ///
    /// Anything that is not a five-letter word is rejected.
    #[must_use]
    pub fn is_guess_allowed(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.allowed.contains(&w))
    }

    /// Membership test for an already validated word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    /// True if `word` may be chosen as a target
    #[must_use]
    pub fn is_target(&self, word: &Word) -> bool {
        self.targets.contains(word)
    }

    /// Pick a uniformly random target using the thread-local generator
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Empty` if there are no targets.
    pub fn pick_target(&self) -> Result<Word, SourceError> {
        self.pick_target_with(&mut rand::rng())
    }

    /// Pick a uniformly random target using the given generator
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Empty` if there are no targets.
    pub fn pick_target_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, SourceError> {
        self.targets
            .choose(rng)
            .cloned()
            .ok_or(SourceError::Empty {
                list: ListKind::Targets,
            })
    }

    /// Number of words accepted as guesses
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Number of words eligible as targets
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lists(allowed: &[&str], targets: &[&str]) -> WordLists {
        WordLists::new(
            loader::words_from_slice(allowed),
            loader::words_from_slice(targets),
        )
        .unwrap()
    }

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        for &word in TARGETS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn targets_subset_of_allowed() {
        let embedded = WordLists::embedded().unwrap();
        for &target in TARGETS {
            assert!(
                embedded.is_guess_allowed(target),
                "Target '{target}' not in allowed list"
            );
        }
    }

    #[test]
    fn embedded_contains_common_words() {
        let embedded = WordLists::embedded().unwrap();
        for word in ["apple", "beach", "chair", "dance", "eagle"] {
            assert!(embedded.is_guess_allowed(word), "{word} missing");
        }
        for word in ["aaaaa", "bbbbb", "xyzzy"] {
            assert!(!embedded.is_guess_allowed(word), "{word} accepted");
        }
    }

    #[test]
    fn membership_is_case_insensitive_and_length_checked() {
        let words = lists(&["apple", "beach"], &["apple"]);
        assert!(words.is_guess_allowed("apple"));
        assert!(words.is_guess_allowed("APPLE"));
        assert!(words.is_guess_allowed("aPpLe"));
        assert!(!words.is_guess_allowed("cat"));
        assert!(!words.is_guess_allowed("elephant"));
        assert!(!words.is_guess_allowed("chair"));
    }

    #[test]
    fn target_membership() {
        let words = lists(&["apple", "beach"], &["apple"]);
        assert!(words.is_target(&Word::new("APPLE").unwrap()));
        assert!(!words.is_target(&Word::new("beach").unwrap()));
    }

    #[test]
    fn empty_lists_are_rejected() {
        let some = loader::words_from_slice(&["apple"]);
        assert_eq!(
            WordLists::new(Vec::new(), some.clone()).unwrap_err(),
            SourceError::Empty {
                list: ListKind::Allowed
            }
        );
        assert_eq!(
            WordLists::new(some, Vec::new()).unwrap_err(),
            SourceError::Empty {
                list: ListKind::Targets
            }
        );
    }

    #[test]
    fn pick_target_draws_from_targets_only() {
        let words = lists(&["apple", "beach", "chair"], &["beach", "chair"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let target = words.pick_target_with(&mut rng).unwrap();
            assert!(matches!(target.text(), "beach" | "chair"));
        }
    }

    #[test]
    fn pick_target_is_deterministic_for_a_seed() {
        let words = WordLists::embedded().unwrap();
        let first = words.pick_target_with(&mut StdRng::seed_from_u64(42)).unwrap();
        let second = words.pick_target_with(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn counts() {
        let words = lists(&["apple", "beach", "apple"], &["apple"]);
        assert_eq!(words.allowed_count(), 2);
        assert_eq!(words.target_count(), 1);
    }
}
