//! Word Scramble - terminal word game
//!
//! The player is shown a root word and types other words spelled from its
//! letters. The rules live in [`scramble_rules`]; this crate wires them to
//! files, configuration and the terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML game configuration with CLI overrides
//! - **Sources**: root word lists and dictionaries loaded from files
//! - **TUI**: single game screen (ratatui + crossterm)
//! - **Check**: non-interactive word checking

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod check;
mod cli;
mod config;
mod sources;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command as CliCommand, ConfigArgs};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Word sources
pub use sources::{
    BUNDLED_START_WORDS, DictionaryError, FileRootWordSource, load_dictionary, root_word_source,
};

// Crate-level exports - Checking
pub use check::{CheckLine, check_words};

// Crate-level exports - Terminal UI
pub use tui::{Alert, App, AppAction, Command, command_for, draw, run_tui};
