//! Mafia role dealer
//!
//! Enter the roster, pick the roles, deal, and pass the screen around.

mod app;
mod config;
mod game;
mod logging;
mod tui;

use app::AppCoordinator;
use clap::Parser;
use config::{Args, Config};
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use tracing::info;
use tui::Tui;

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let config = Config::from(Args::parse());
    logging::init(config.log_file.as_deref())?;

    let mut coordinator = AppCoordinator::from_config(&config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    info!(seeded = config.seed.is_some(), "session started");

    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    // Main event loop: nothing changes between key presses, so block on input
    loop {
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind == KeyEventKind::Press {
                coordinator.handle_key(key);
            }
        }

        if coordinator.should_quit() {
            break;
        }
    }

    info!("session ended");
    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
