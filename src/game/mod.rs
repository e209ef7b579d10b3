//! Game logic: roles, roster, validation, assignment, reveal state, presets

pub mod engine;
pub mod error;
pub mod presets;
pub mod reveal;
pub mod roster;
pub mod validation;

pub use engine::{assign, Assignment, UniformSource};
pub use error::SetupError;
pub use presets::PresetCatalog;
pub use reveal::Round;
pub use roster::Roster;
pub use validation::SetupStatus;

use std::fmt;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Default upper bound on roster size
pub const DEFAULT_MAX_PLAYERS: usize = 20;

/// Default upper bound on any single role count
pub const DEFAULT_MAX_ROLE_COUNT: u32 = 20;

/// A role a player can be dealt. Declaration order is the expansion order
/// used before shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
pub enum Role {
    Mafia,
    Doctor,
    Cop,
    Narrator,
    Innocent,
}

impl Role {
    /// All roles in declaration order
    pub fn all() -> &'static [Role] {
        &[Role::Mafia, Role::Doctor, Role::Cop, Role::Narrator, Role::Innocent]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Role::Mafia => "Mafia",
            Role::Doctor => "Doctor",
            Role::Cop => "Cop",
            Role::Narrator => "Narrator",
            Role::Innocent => "Innocent",
        }
    }

    /// What the role does at the table
    pub fn description(&self) -> &'static str {
        match self {
            Role::Mafia => "Eliminate townspeople at night",
            Role::Doctor => "Protect someone each night",
            Role::Cop => "Investigate players each night",
            Role::Narrator => "Moderates the game",
            Role::Innocent => "Regular townspeople",
        }
    }

    /// Name with a plural suffix when `count != 1` ("2 Mafias")
    pub fn counted_name(&self, count: u32) -> String {
        if count == 1 {
            self.name().to_string()
        } else {
            format!("{}s", self.name())
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Roster and role-count bounds for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_players: usize,
    pub max_role_count: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            max_role_count: DEFAULT_MAX_ROLE_COUNT,
        }
    }
}

/// How many of each role to deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleCounts {
    counts: [u32; Role::COUNT],
}

impl RoleCounts {
    /// All counts zero
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from (role, count) pairs; unlisted roles are zero.
    /// Later pairs for the same role overwrite earlier ones.
    pub fn from_pairs(pairs: &[(Role, u32)]) -> Self {
        let mut counts = Self::empty();
        for &(role, count) in pairs {
            counts.counts[role.index()] = count;
        }
        counts
    }

    /// The setup a fresh session starts with
    pub fn starting_setup() -> Self {
        Self::from_pairs(&[
            (Role::Mafia, 1),
            (Role::Doctor, 1),
            (Role::Cop, 1),
            (Role::Narrator, 1),
            (Role::Innocent, 2),
        ])
    }

    pub fn get(&self, role: Role) -> u32 {
        self.counts[role.index()]
    }

    /// Step a count by `delta`, clamped into `0..=max`. Returns the new count.
    pub fn adjust(&mut self, role: Role, delta: i32, max: u32) -> u32 {
        let current = i64::from(self.get(role));
        let next = (current + i64::from(delta)).clamp(0, i64::from(max));
        // clamp keeps it within u32
        self.counts[role.index()] = next as u32;
        self.counts[role.index()]
    }

    /// Sum of all counts
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Every role with its count, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Role, u32)> + '_ {
        Role::iter().map(move |role| (role, self.get(role)))
    }

    /// Roles with a positive count, in declaration order
    pub fn non_zero(&self) -> Vec<(Role, u32)> {
        self.iter().filter(|(_, count)| *count > 0).collect()
    }

    /// Check every count against `max`
    pub fn check_limits(&self, max: u32) -> Result<(), SetupError> {
        match self.iter().find(|(_, count)| *count > max) {
            Some((role, count)) => Err(SetupError::RoleCountOutOfRange { role, count, max }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let roles: Vec<Role> = Role::iter().collect();
        assert_eq!(
            roles,
            vec![Role::Mafia, Role::Doctor, Role::Cop, Role::Narrator, Role::Innocent]
        );
        assert_eq!(Role::all(), roles.as_slice());
        assert_eq!(Role::all().len(), Role::COUNT);
    }

    #[test]
    fn test_counted_name() {
        assert_eq!(Role::Mafia.counted_name(1), "Mafia");
        assert_eq!(Role::Mafia.counted_name(2), "Mafias");
        assert_eq!(Role::Innocent.counted_name(0), "Innocents");
    }

    #[test]
    fn test_starting_setup() {
        let counts = RoleCounts::starting_setup();
        assert_eq!(counts.get(Role::Mafia), 1);
        assert_eq!(counts.get(Role::Innocent), 2);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_adjust_clamps() {
        let mut counts = RoleCounts::empty();
        assert_eq!(counts.adjust(Role::Cop, -1, 20), 0);
        assert_eq!(counts.adjust(Role::Cop, 3, 20), 3);
        assert_eq!(counts.adjust(Role::Cop, 50, 20), 20);
        assert_eq!(counts.adjust(Role::Cop, -25, 20), 0);
    }

    #[test]
    fn test_non_zero_skips_empty_roles() {
        let counts = RoleCounts::from_pairs(&[(Role::Mafia, 2), (Role::Innocent, 1)]);
        assert_eq!(counts.non_zero(), vec![(Role::Mafia, 2), (Role::Innocent, 1)]);
    }

    #[test]
    fn test_check_limits() {
        let counts = RoleCounts::from_pairs(&[(Role::Innocent, 6)]);
        assert!(counts.check_limits(6).is_ok());
        assert!(matches!(
            counts.check_limits(5),
            Err(SetupError::RoleCountOutOfRange { role: Role::Innocent, .. })
        ));
    }
}
