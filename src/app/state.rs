//! Application state management
//!
//! `App` is the whole session: limits, roster, role counts, the dealt round
//! and the last notice. The UI renders it and never mutates it directly.

use crate::game::{
    assign, Limits, PresetCatalog, Role, RoleCounts, Roster, Round, SetupError,
    SetupStatus, UniformSource,
};
use tracing::info;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A one-line message for the host, replaced by the next action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(err: &SetupError) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: err.to_string(),
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Name input line
    pub input: String,
    /// Feedback from the last action
    pub notice: Option<Notice>,
    limits: Limits,
    roster: Roster,
    roles: RoleCounts,
    round: Option<Round>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl App {
    /// Create a session with an empty roster and the starting role setup
    pub fn new(limits: Limits) -> Self {
        let mut roles = RoleCounts::starting_setup();
        for role in Role::all() {
            roles.adjust(*role, 0, limits.max_role_count);
        }
        Self {
            should_quit: false,
            input: String::new(),
            notice: None,
            limits,
            roster: Roster::new(limits.max_players),
            roles,
            round: None,
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roles(&self) -> &RoleCounts {
        &self.roles
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Summary-panel status
    pub fn status(&self) -> SetupStatus {
        SetupStatus::of(self.roster.len(), &self.roles)
    }

    /// Handle character input on the name line
    pub fn on_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Handle backspace on the name line
    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the name line: `+N` quick-adds N players, anything else is a
    /// player name. The line is cleared only on success.
    pub fn on_submit(&mut self) -> Result<(), SetupError> {
        let line = self.input.trim().to_string();
        let result = match line.strip_prefix('+') {
            Some(count) => match count.trim().parse::<usize>() {
                Ok(count) => self.quick_add(count),
                Err(_) => Err(SetupError::QuickAddOutOfRange {
                    count: 0,
                    max: self.limits.max_players,
                }),
            },
            None => self.add_player(&line),
        };
        match &result {
            Ok(()) => self.input.clear(),
            Err(err) => self.notice = Some(Notice::error(err)),
        }
        result
    }

    /// Add one player to the roster
    pub fn add_player(&mut self, name: &str) -> Result<(), SetupError> {
        match self.roster.add(name) {
            Ok(added) => {
                self.notice = Some(Notice::info(format!("Added player: {}", added)));
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error(&err));
                Err(err)
            }
        }
    }

    /// Remove a player by roster position
    pub fn remove_player(&mut self, index: usize) -> Option<String> {
        let removed = self.roster.remove_at(index)?;
        self.notice = Some(Notice::info(format!("Removed player: {}", removed)));
        Some(removed)
    }

    /// Add `count` generated players
    pub fn quick_add(&mut self, count: usize) -> Result<(), SetupError> {
        match self.roster.quick_add(count) {
            Ok(added) => {
                self.notice = Some(Notice::info(format!("Added {} players", added.len())));
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error(&err));
                Err(err)
            }
        }
    }

    /// Remove every player
    pub fn clear_players(&mut self) {
        if self.roster.is_empty() {
            return;
        }
        self.roster.clear();
        self.notice = Some(Notice::info("All players removed"));
    }

    /// Step a role count, clamped to the configured range
    pub fn change_role_count(&mut self, role: Role, delta: i32) -> u32 {
        let count = self.roles.adjust(role, delta, self.limits.max_role_count);
        self.notice = Some(Notice::info(format!("{} count: {}", role.name(), count)));
        count
    }

    /// Deal roles with `source`, replacing any previous round.
    /// On failure nothing changes except the notice.
    pub fn assign_roles<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> Result<(), SetupError> {
        let assignments = match assign(self.roster.players(), &self.roles, source) {
            Ok(assignments) => assignments,
            Err(err) => {
                self.notice = Some(Notice::error(&err));
                return Err(err);
            }
        };
        info!(players = assignments.len(), "roles assigned");
        self.round = Some(Round::new(assignments));
        self.notice = Some(Notice::success("Roles have been assigned randomly"));
        Ok(())
    }

    /// Flip one card of the current round
    pub fn toggle_reveal(&mut self, index: usize) -> Result<bool, SetupError> {
        let round = self.round.as_mut().ok_or(SetupError::AssignmentOutOfRange { index, len: 0 })?;
        match round.toggle(index) {
            Ok((assignment, true)) => {
                self.notice = Some(Notice::info(format!(
                    "{} is the {}",
                    assignment.player,
                    assignment.role.name()
                )));
                Ok(true)
            }
            Ok((assignment, false)) => {
                self.notice = Some(Notice::info(format!("Hidden role for {}", assignment.player)));
                Ok(false)
            }
            Err(err) => {
                self.notice = Some(Notice::error(&err));
                Err(err)
            }
        }
    }

    /// Reveal every card of the current round
    pub fn reveal_all(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.reveal_all();
            info!(cards = round.len(), "all roles revealed");
            self.notice = Some(Notice::info("All roles revealed"));
        }
    }

    /// Discard the current round, keeping roster and roles
    pub fn new_game(&mut self) {
        self.round = None;
        self.notice = None;
    }

    /// Replace roster and role counts with a preset
    pub fn apply_preset(&mut self, id: &str) -> Result<(), SetupError> {
        let applied = PresetCatalog::get(id).and_then(|preset| {
            let (roster, roles) = preset.build(self.limits)?;
            Ok((preset.label, roster, roles))
        });
        match applied {
            Ok((label, roster, roles)) => {
                self.roster = roster;
                self.roles = roles;
                self.round = None;
                info!(preset = label, "preset applied");
                self.notice = Some(Notice::success(format!("Applied {} preset", label)));
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error(&err));
                Err(err)
            }
        }
    }
}
