//! Setup and assignment errors
//!
//! Every variant is a recoverable validation failure shown to the host.

use super::Role;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Please add at least one player")]
    EmptyRoster,

    #[error("Please select at least one role")]
    EmptyRoleSet,

    #[error("Number of players ({players}) must match number of roles ({roles})")]
    CountMismatch { players: usize, roles: u32 },

    #[error("Player name already exists: {0}")]
    DuplicatePlayerName(String),

    #[error("Please enter a player name")]
    EmptyPlayerName,

    #[error("Maximum {max} players allowed")]
    RosterLimitExceeded { max: usize },

    #[error("{role} count {count} is out of range (0-{max})")]
    RoleCountOutOfRange { role: Role, count: u32, max: u32 },

    #[error("Please enter a number between 1 and {max}")]
    QuickAddOutOfRange { count: usize, max: usize },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("No assignment at position {index} (have {len})")]
    AssignmentOutOfRange { index: usize, len: usize },
}
