//! Dictionary lookups used by the "real word" check.

use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use tracing::{debug, info, instrument};

/// Language tag used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a string is a recognized word in a language.
///
/// Implementations are injected into the validator so the dictionary
/// can be swapped for a fixed word set in tests.
pub trait SpellCheckOracle {
    /// Returns `true` if `word` is a real word in `language`.
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellCheckOracle + ?Sized> SpellCheckOracle for &T {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized_word(word, language)
    }
}

impl<T: SpellCheckOracle + ?Sized> SpellCheckOracle for Box<T> {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized_word(word, language)
    }
}

/// In-memory dictionary backed by word lists, one per language tag.
///
/// Words are stored lowercased. Lookups for a language with no list
/// always fail.
#[derive(Debug, Clone, Default)]
pub struct WordListOracle {
    languages: HashMap<String, HashSet<String>>,
}

impl WordListOracle {
    /// Creates an empty oracle that recognizes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an oracle recognizing `words` in `language`.
    pub fn with_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut oracle = Self::new();
        oracle.extend(language, words);
        oracle
    }

    /// Reads a word list with one entry per line.
    ///
    /// Entries are trimmed and lowercased. Blank lines and entries with
    /// non-alphabetic characters (possessives, hyphenations) are skipped.
    #[instrument(skip(reader))]
    pub fn from_reader<R: BufRead>(language: &str, reader: R) -> std::io::Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() || !entry.chars().all(char::is_alphabetic) {
                continue;
            }
            words.push(entry.to_lowercase());
        }
        let oracle = Self::with_words(language, words);
        info!(language, words = oracle.len(language), "Dictionary loaded");
        Ok(oracle)
    }

    /// Adds `words` to the list for `language`.
    pub fn extend<I, S>(&mut self, language: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.languages.entry(language.to_string()).or_default();
        list.extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Number of words known for `language`.
    pub fn len(&self, language: &str) -> usize {
        self.languages.get(language).map_or(0, HashSet::len)
    }

    /// Returns `true` if no words are known for `language`.
    pub fn is_empty(&self, language: &str) -> bool {
        self.len(language) == 0
    }

    /// Returns `true` if a word list exists for `language`.
    pub fn supports(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }
}

impl SpellCheckOracle for WordListOracle {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        let recognized = self
            .languages
            .get(language)
            .is_some_and(|words| words.contains(word));
        debug!(word, language, recognized, "Dictionary lookup");
        recognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_with_words_recognizes_listed_words() {
        let oracle = WordListOracle::with_words("en", ["wilks", "milk"]);
        assert!(oracle.is_recognized_word("wilks", "en"));
        assert!(oracle.is_recognized_word("milk", "en"));
        assert!(!oracle.is_recognized_word("xyz", "en"));
    }

    #[test]
    fn test_unsupported_language_recognizes_nothing() {
        let oracle = WordListOracle::with_words("en", ["milk"]);
        assert!(!oracle.is_recognized_word("milk", "fr"));
        assert!(!oracle.supports("fr"));
    }

    #[test]
    fn test_from_reader_filters_entries() {
        let text = "Milk\n\n  silk  \nworm's\nwell-known\nsilkworm\n";
        let oracle = WordListOracle::from_reader("en", Cursor::new(text)).expect("read");
        assert_eq!(oracle.len("en"), 3);
        assert!(oracle.is_recognized_word("milk", "en"));
        assert!(oracle.is_recognized_word("silk", "en"));
        assert!(!oracle.is_recognized_word("worm's", "en"));
    }

    #[test]
    fn test_reference_and_box_delegate() {
        let oracle = WordListOracle::with_words("en", ["milk"]);
        let by_ref: &dyn SpellCheckOracle = &oracle;
        assert!(by_ref.is_recognized_word("milk", "en"));
        let boxed: Box<dyn SpellCheckOracle> = Box::new(oracle);
        assert!(boxed.is_recognized_word("milk", "en"));
    }
}
