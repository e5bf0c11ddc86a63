//! Command-line interface for word_scramble.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Word Scramble - spell new words from the letters of a root word
#[derive(Parser, Debug)]
#[command(name = "word_scramble")]
#[command(about = "Spell new words from the letters of a root word", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to a TOML config file (defaults to word_scramble.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dictionary word list, one word per line
    #[arg(long)]
    pub dictionary: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game in the terminal
    Play {
        /// Shared configuration options
        #[command(flatten)]
        config: ConfigArgs,

        /// Root word list, one word per line (bundled list if omitted)
        #[arg(long)]
        start_words: Option<PathBuf>,

        /// Seed for picking root words, for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check words against a root word without the interactive screen
    Check {
        /// Shared configuration options
        #[command(flatten)]
        config: ConfigArgs,

        /// Root word to check against
        #[arg(short, long)]
        root: String,

        /// Print one JSON object per word
        #[arg(long)]
        json: bool,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}
