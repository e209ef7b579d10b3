//! Terminal UI components using ratatui

mod results;
mod setup;
mod terminal;
mod ui;

pub use terminal::Tui;
pub use ui::render;
