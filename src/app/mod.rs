//! Application state and screen flow

pub mod screen;
pub mod state;

pub use screen::{AppCoordinator, ConfirmAction, Screen, SetupCursor, SetupFocus};
pub use state::{App, Notice, NoticeKind};
