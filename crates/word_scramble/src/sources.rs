//! Root word lists and dictionaries backed by files.

use derive_more::{Display, Error};
use scramble_rules::{LoadError, RootWordSource, StaticRootWordSource, WordListOracle, parse_word_list};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Root word list shipped with the game.
pub const BUNDLED_START_WORDS: &str = include_str!("../assets/start.txt");

/// Root words read from a text file, one per line.
#[derive(Debug, Clone)]
pub struct FileRootWordSource {
    path: PathBuf,
}

impl FileRootWordSource {
    /// Creates a source reading `path` on every load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RootWordSource for FileRootWordSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_candidate_root_words(&self) -> Result<Vec<String>, LoadError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            LoadError::new(format!(
                "Could not load root words from {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let words = parse_word_list(&text);
        debug!(count = words.len(), "Root words loaded");
        Ok(words)
    }
}

/// Chooses the root word source for a configured path.
///
/// Without a path the bundled list is used.
#[instrument]
pub fn root_word_source(start_words: Option<&Path>) -> Box<dyn RootWordSource> {
    match start_words {
        Some(path) => {
            info!(path = %path.display(), "Using root words from file");
            Box::new(FileRootWordSource::new(path))
        }
        None => {
            info!("Using bundled root words");
            Box::new(StaticRootWordSource::new(BUNDLED_START_WORDS))
        }
    }
}

/// Loads the dictionary for `language` from a word list file.
///
/// # Errors
///
/// Fails when the file cannot be read or holds no usable words.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_dictionary(path: impl AsRef<Path>, language: &str) -> Result<WordListOracle, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        DictionaryError::new(format!(
            "Could not open dictionary {} (set `dictionary` in {}): {}",
            path.display(),
            crate::config::DEFAULT_CONFIG_FILE,
            e
        ))
    })?;

    let oracle = WordListOracle::from_reader(language, BufReader::new(file))
        .map_err(|e| DictionaryError::new(format!("Could not read dictionary {}: {}", path.display(), e)))?;

    if oracle.is_empty(language) {
        return Err(DictionaryError::new(format!(
            "Dictionary {} contains no words",
            path.display()
        )));
    }

    Ok(oracle)
}

/// Failure to load the dictionary.
#[derive(Debug, Clone, Display, Error)]
#[display("Dictionary error: {} at {}:{}", message, file, line)]
pub struct DictionaryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DictionaryError {
    /// Creates a new dictionary error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
