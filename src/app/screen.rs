//! Application screen state management
//!
//! Handles transitions between screens:
//! - Setup (roster + role counts)
//! - Preset picker
//! - Confirmation before clearing the roster or discarding a round
//! - Results (dealt cards, reveal one or all)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::game::{PresetCatalog, Role, SetupError};

use super::state::App;

/// Which setup panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFocus {
    Input,
    Roster,
    Roles,
}

impl SetupFocus {
    pub fn next(self) -> Self {
        match self {
            SetupFocus::Input => SetupFocus::Roster,
            SetupFocus::Roster => SetupFocus::Roles,
            SetupFocus::Roles => SetupFocus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupFocus::Input => SetupFocus::Roles,
            SetupFocus::Roster => SetupFocus::Input,
            SetupFocus::Roles => SetupFocus::Roster,
        }
    }
}

/// Focused panel and list selections on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupCursor {
    pub focus: SetupFocus,
    /// Selected roster row
    pub player: usize,
    /// Selected role row
    pub role: usize,
}

impl Default for SetupCursor {
    fn default() -> Self {
        Self {
            focus: SetupFocus::Input,
            player: 0,
            role: 0,
        }
    }
}

/// A destructive action waiting for a yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove every player, then return to setup
    ClearPlayers { cursor: SetupCursor },
    /// Discard the round, asked from the results card `selected`
    NewGame { selected: usize },
}

impl ConfirmAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            ConfirmAction::ClearPlayers { .. } => "Are you sure you want to remove all players?",
            ConfirmAction::NewGame { .. } => {
                "Start a new game? This will clear all current assignments."
            }
        }
    }
}

/// The current application screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Editing roster and roles
    Setup { cursor: SetupCursor },
    /// Preset picker over the setup screen it was opened from
    Presets { selected: usize, cursor: SetupCursor },
    /// Yes/no prompt
    Confirm { action: ConfirmAction },
    /// Dealt cards
    Results { selected: usize },
}

impl Screen {
    fn setup() -> Self {
        Screen::Setup {
            cursor: SetupCursor::default(),
        }
    }
}

/// Main application coordinator
pub struct AppCoordinator {
    /// Session state
    pub app: App,
    /// Current screen
    pub screen: Screen,
    rng: ChaCha8Rng,
}

impl AppCoordinator {
    /// Start on the setup screen
    pub fn new(app: App, rng: ChaCha8Rng) -> Self {
        Self {
            app,
            screen: Screen::setup(),
            rng,
        }
    }

    /// Build the session described by the command line
    pub fn from_config(config: &Config) -> Result<Self, SetupError> {
        let mut app = App::new(config.limits);
        if let Some(preset) = &config.preset {
            app.apply_preset(preset)?;
        }
        Ok(Self::new(app, config.rng()))
    }

    pub fn should_quit(&self) -> bool {
        self.app.should_quit
    }

    /// Dispatch a key press to the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.app.quit();
            return;
        }

        match self.screen {
            Screen::Setup { cursor } => self.setup_key(key, cursor),
            Screen::Presets { selected, cursor } => self.presets_key(key, selected, cursor),
            Screen::Confirm { action } => self.confirm_key(key, action),
            Screen::Results { selected } => self.results_key(key, selected),
        }
    }

    fn setup_key(&mut self, key: KeyEvent, cursor: SetupCursor) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.app.quit(),
            KeyCode::Tab => self.set_cursor(SetupCursor {
                focus: cursor.focus.next(),
                ..cursor
            }),
            KeyCode::BackTab => self.set_cursor(SetupCursor {
                focus: cursor.focus.prev(),
                ..cursor
            }),
            KeyCode::Char('a') if ctrl => self.assign(),
            KeyCode::Char('p') if ctrl => self.open_presets(cursor),
            // Other control chords are not text
            KeyCode::Char(_) if ctrl => {}
            _ => match cursor.focus {
                SetupFocus::Input => self.input_key(key),
                SetupFocus::Roster => self.roster_key(key, cursor),
                SetupFocus::Roles => self.roles_key(key, cursor),
            },
        }
    }

    fn input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if self.app.input.trim().is_empty() => self.assign(),
            KeyCode::Enter => {
                // Failures are already reported through the notice
                let _ = self.app.on_submit();
            }
            KeyCode::Backspace => self.app.on_backspace(),
            KeyCode::Char(c) => self.app.on_char(c),
            _ => {}
        }
    }

    fn roster_key(&mut self, key: KeyEvent, cursor: SetupCursor) {
        let len = self.app.roster().len();
        match key.code {
            KeyCode::Up => self.set_cursor(SetupCursor {
                player: cursor.player.saturating_sub(1),
                ..cursor
            }),
            KeyCode::Down => self.set_cursor(SetupCursor {
                player: (cursor.player + 1).min(len.saturating_sub(1)),
                ..cursor
            }),
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
                self.app.remove_player(cursor.player);
                let len = self.app.roster().len();
                self.set_cursor(SetupCursor {
                    player: cursor.player.min(len.saturating_sub(1)),
                    ..cursor
                });
            }
            KeyCode::Char('c') if len > 0 => {
                self.screen = Screen::Confirm {
                    action: ConfirmAction::ClearPlayers { cursor },
                };
            }
            _ => self.common_setup_key(key, cursor),
        }
    }

    fn roles_key(&mut self, key: KeyEvent, cursor: SetupCursor) {
        let last = Role::all().len() - 1;
        let selected = Role::all()[cursor.role.min(last)];
        match key.code {
            KeyCode::Up => self.set_cursor(SetupCursor {
                role: cursor.role.saturating_sub(1),
                ..cursor
            }),
            KeyCode::Down => self.set_cursor(SetupCursor {
                role: (cursor.role + 1).min(last),
                ..cursor
            }),
            KeyCode::Left | KeyCode::Char('-') => {
                self.app.change_role_count(selected, -1);
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.app.change_role_count(selected, 1);
            }
            _ => self.common_setup_key(key, cursor),
        }
    }

    /// Keys shared by the list panels
    fn common_setup_key(&mut self, key: KeyEvent, cursor: SetupCursor) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('a') => self.assign(),
            KeyCode::Char('p') => self.open_presets(cursor),
            KeyCode::Char('v') if self.app.round().is_some() => {
                self.screen = Screen::Results { selected: 0 };
            }
            _ => {}
        }
    }

    fn set_cursor(&mut self, cursor: SetupCursor) {
        self.screen = Screen::Setup { cursor };
    }

    fn open_presets(&mut self, cursor: SetupCursor) {
        self.screen = Screen::Presets {
            selected: 0,
            cursor,
        };
    }

    /// Deal roles and show the results; stays on setup if the deal is refused
    fn assign(&mut self) {
        if self.app.assign_roles(&mut self.rng).is_ok() {
            self.screen = Screen::Results { selected: 0 };
        }
    }

    fn presets_key(&mut self, key: KeyEvent, selected: usize, cursor: SetupCursor) {
        let presets = PresetCatalog::all();

        match key.code {
            KeyCode::Esc => self.set_cursor(cursor),
            KeyCode::Up => {
                self.screen = Screen::Presets {
                    selected: selected.saturating_sub(1),
                    cursor,
                }
            }
            KeyCode::Down => {
                self.screen = Screen::Presets {
                    selected: (selected + 1).min(presets.len() - 1),
                    cursor,
                }
            }
            KeyCode::Enter => {
                if self.app.apply_preset(presets[selected].id).is_ok() {
                    // The roster was replaced, so keep the row in range
                    let len = self.app.roster().len();
                    self.set_cursor(SetupCursor {
                        player: cursor.player.min(len.saturating_sub(1)),
                        ..cursor
                    });
                } else {
                    self.set_cursor(cursor);
                }
            }
            _ => {}
        }
    }

    fn confirm_key(&mut self, key: KeyEvent, action: ConfirmAction) {
        let confirmed = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
            _ => return,
        };

        match (action, confirmed) {
            (ConfirmAction::ClearPlayers { cursor }, true) => {
                self.app.clear_players();
                self.set_cursor(SetupCursor { player: 0, ..cursor });
            }
            (ConfirmAction::ClearPlayers { cursor }, false) => self.set_cursor(cursor),
            (ConfirmAction::NewGame { .. }, true) => {
                self.app.new_game();
                self.screen = Screen::setup();
            }
            (ConfirmAction::NewGame { selected }, false) => {
                self.screen = Screen::Results { selected };
            }
        }
    }

    fn results_key(&mut self, key: KeyEvent, selected: usize) {
        let len = self.app.round().map_or(0, |round| round.len());

        match key.code {
            KeyCode::Esc => self.screen = Screen::setup(),
            KeyCode::Up | KeyCode::Left => {
                self.screen = Screen::Results {
                    selected: selected.saturating_sub(1),
                }
            }
            KeyCode::Down | KeyCode::Right => {
                self.screen = Screen::Results {
                    selected: (selected + 1).min(len.saturating_sub(1)),
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Failures are already reported through the notice
                let _ = self.app.toggle_reveal(selected);
            }
            KeyCode::Char('r') => self.app.reveal_all(),
            KeyCode::Char('n') => {
                self.screen = Screen::Confirm {
                    action: ConfirmAction::NewGame { selected },
                };
            }
            _ => {}
        }
    }
}
