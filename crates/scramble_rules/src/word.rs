//! Candidate normalization and letter budgets.

use std::collections::HashMap;
use tracing::instrument;

/// Normalizes raw player input into a candidate word.
///
/// Surrounding whitespace (including newlines) is trimmed and the
/// result is lowercased.
#[instrument]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Multiset of letters available for spelling words.
///
/// Built from a root word; each occurrence of a character in the root
/// word can be consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: HashMap<char, usize>,
    remaining: usize,
}

impl LetterPool {
    /// Creates a pool holding every character of `word`.
    pub fn new(word: &str) -> Self {
        let mut counts = HashMap::new();
        let mut remaining = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            remaining += 1;
        }
        Self { counts, remaining }
    }

    /// Removes one occurrence of `ch`.
    ///
    /// Returns `false` (leaving the pool untouched) when no occurrence
    /// of `ch` is left.
    pub fn take(&mut self, ch: char) -> bool {
        match self.counts.get_mut(&ch) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of occurrences of `ch` still available.
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of letters still available.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Checks whether `word` can be spelled from this pool.
    ///
    /// Consumes letters left to right from a working copy and stops at
    /// the first letter with no occurrence left. The pool itself is not
    /// modified.
    #[instrument(skip(self))]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut working = self.clone();
        word.chars().all(|ch| working.take(ch))
    }
}

/// Number of letters in a word, as shown next to each accepted word.
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  WilKs\n"), "wilks");
        assert_eq!(normalize("\t\n "), "");
    }

    #[test]
    fn test_take_respects_multiplicity() {
        let mut pool = LetterPool::new("letter");
        assert_eq!(pool.count('t'), 2);
        assert!(pool.take('t'));
        assert!(pool.take('t'));
        assert!(!pool.take('t'));
        assert_eq!(pool.remaining(), 4);
    }

    #[test]
    fn test_can_spell_is_multiset_subset() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("wilks"));
        assert!(pool.can_spell("milk"));
        assert!(!pool.can_spell("silks"));
        assert!(!pool.can_spell("xyz"));
        // Pool is untouched by can_spell.
        assert_eq!(pool.remaining(), 8);
    }

    #[test]
    fn test_can_spell_order_independent() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("mrowklis"));
    }

    #[test]
    fn test_letter_count_counts_chars() {
        assert_eq!(letter_count("wilks"), 5);
        assert_eq!(letter_count("café"), 4);
    }
}
