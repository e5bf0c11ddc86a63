//! Word Scramble - Unified CLI
//!
//! Interactive terminal game plus a non-interactive word checker.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use scramble_rules::{GameSession, WordValidator};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    App, Cli, CliCommand, ConfigArgs, GameConfig, check_words, load_dictionary, root_word_source,
    run_tui,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        CliCommand::Play {
            config,
            start_words,
            seed,
        } => run_play(config, start_words, seed).await,
        CliCommand::Check {
            config,
            root,
            json,
            words,
        } => run_check(config, root, json, words),
    }
}

/// Resolves the config file and applies command-line overrides.
fn resolve_config(args: &ConfigArgs) -> Result<GameConfig> {
    let mut config = GameConfig::load(args.config.as_deref())?;
    if let Some(dictionary) = &args.dictionary {
        config = config.with_dictionary(dictionary.clone());
    }
    Ok(config)
}

/// Run the interactive game
async fn run_play(
    args: ConfigArgs,
    start_words: Option<std::path::PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = resolve_config(&args)?;
    if let Some(path) = start_words {
        config = config.with_start_words(path);
    }

    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting Word Scramble");

    // Everything the session needs must load before the screen takes over.
    let oracle = load_dictionary(config.dictionary(), config.language())?;
    let source = root_word_source(config.start_words().as_deref());
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let validator = WordValidator::with_language(oracle, config.language().clone());
    let session = GameSession::start(source.as_ref(), validator, &mut rng)
        .context("Could not pick a root word")?;

    run_tui(App::new(session, source, rng)).await
}

/// Run the non-interactive checker
fn run_check(args: ConfigArgs, root: String, json: bool, words: Vec<String>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&args)?;
    let oracle = load_dictionary(config.dictionary(), config.language())?;
    let validator = WordValidator::with_language(oracle, config.language().clone());
    let mut session = GameSession::new(root, validator);

    for line in check_words(&mut session, &words) {
        if json {
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
