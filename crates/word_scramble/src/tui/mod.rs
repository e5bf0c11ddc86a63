//! Terminal UI for Word Scramble

mod app;
mod input;
mod ui;

pub use app::{Alert, App, AppAction};
pub use input::{Command, command_for};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use scramble_rules::SpellCheckOracle;
use std::io;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

/// Runs the game until the player quits.
///
/// Sets up the terminal, drives the event loop, and restores the terminal
/// on exit, including when the loop fails.
pub async fn run_tui<O: SpellCheckOracle>(app: App<O>) -> Result<()> {
    info!("Starting Word Scramble TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// The event loop: draw, poll for a key, apply it.
#[instrument(skip_all)]
async fn run_app<B: Backend, O: SpellCheckOracle>(
    terminal: &mut Terminal<B>,
    mut app: App<O>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, &app))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let command = command_for(key, app.alert().is_some());
            if app.handle_command(command)? == AppAction::Quit {
                return Ok(());
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
