//! Setup validation
//!
//! A setup can be dealt when:
//! - The roster has at least one player
//! - At least one role is selected
//! - The role total equals the roster size

use super::{RoleCounts, SetupError};

/// Validate a setup before dealing
///
/// Checks in order:
/// 1. Roster is not empty
/// 2. Role total is not zero
/// 3. Role total equals player count
pub fn validate(player_count: usize, counts: &RoleCounts) -> Result<(), SetupError> {
    if player_count == 0 {
        return Err(SetupError::EmptyRoster);
    }

    let roles = counts.total();
    if roles == 0 {
        return Err(SetupError::EmptyRoleSet);
    }

    if usize::try_from(roles).map_or(true, |roles| roles != player_count) {
        return Err(SetupError::CountMismatch {
            players: player_count,
            roles,
        });
    }

    Ok(())
}

/// Summary-panel status for the current setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStatus {
    /// No players yet
    NeedPlayers,
    /// Fewer roles than players
    NeedMoreRoles(usize),
    /// More roles than players
    TooManyRoles(usize),
    /// Counts match; roles can be assigned
    Ready,
}

impl SetupStatus {
    /// Classify a roster size against the configured roles
    pub fn of(player_count: usize, counts: &RoleCounts) -> Self {
        let roles = counts.total() as usize;
        if player_count == 0 {
            SetupStatus::NeedPlayers
        } else if player_count > roles {
            SetupStatus::NeedMoreRoles(player_count - roles)
        } else if roles > player_count {
            SetupStatus::TooManyRoles(roles - player_count)
        } else {
            SetupStatus::Ready
        }
    }

    /// Returns true if roles can be assigned
    pub fn is_ready(&self) -> bool {
        matches!(self, SetupStatus::Ready)
    }

    /// Returns a user-friendly status line
    pub fn message(&self) -> String {
        match self {
            SetupStatus::NeedPlayers => "Add players to continue".to_string(),
            SetupStatus::NeedMoreRoles(n) => format!("Need {} more role{}", n, plural(*n)),
            SetupStatus::TooManyRoles(n) => format!("Remove {} role{}", n, plural(*n)),
            SetupStatus::Ready => "Ready to assign roles".to_string(),
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Role;
    use proptest::prelude::*;

    fn three_roles() -> RoleCounts {
        RoleCounts::from_pairs(&[(Role::Mafia, 1), (Role::Doctor, 1), (Role::Innocent, 1)])
    }

    #[test]
    fn test_matching_counts_valid() {
        assert_eq!(validate(3, &three_roles()), Ok(()));
    }

    #[test]
    fn test_empty_roster() {
        assert_eq!(validate(0, &three_roles()), Err(SetupError::EmptyRoster));
    }

    #[test]
    fn test_empty_role_set() {
        assert_eq!(validate(4, &RoleCounts::empty()), Err(SetupError::EmptyRoleSet));
    }

    #[test]
    fn test_count_mismatch() {
        let counts = RoleCounts::from_pairs(&[(Role::Mafia, 1)]);
        assert_eq!(
            validate(2, &counts),
            Err(SetupError::CountMismatch { players: 2, roles: 1 })
        );
    }

    #[test]
    fn test_validation_order() {
        // Empty roster takes precedence over an empty role set
        assert_eq!(validate(0, &RoleCounts::empty()), Err(SetupError::EmptyRoster));
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(SetupStatus::NeedPlayers.message(), "Add players to continue");
        assert_eq!(SetupStatus::NeedMoreRoles(1).message(), "Need 1 more role");
        assert_eq!(SetupStatus::NeedMoreRoles(3).message(), "Need 3 more roles");
        assert_eq!(SetupStatus::TooManyRoles(1).message(), "Remove 1 role");
        assert_eq!(SetupStatus::TooManyRoles(2).message(), "Remove 2 roles");
        assert_eq!(SetupStatus::Ready.message(), "Ready to assign roles");
    }

    #[test]
    fn test_status_classification() {
        let counts = three_roles();
        assert_eq!(SetupStatus::of(0, &counts), SetupStatus::NeedPlayers);
        assert_eq!(SetupStatus::of(5, &counts), SetupStatus::NeedMoreRoles(2));
        assert_eq!(SetupStatus::of(2, &counts), SetupStatus::TooManyRoles(1));
        assert!(SetupStatus::of(3, &counts).is_ready());
        assert_eq!(
            SetupStatus::of(2, &RoleCounts::empty()),
            SetupStatus::NeedMoreRoles(2)
        );
    }

    proptest! {
        #[test]
        fn prop_valid_iff_nonempty_and_equal(
            players in 0usize..30,
            mafia in 0u32..8,
            doctor in 0u32..8,
            innocent in 0u32..8,
        ) {
            let counts = RoleCounts::from_pairs(&[
                (Role::Mafia, mafia),
                (Role::Doctor, doctor),
                (Role::Innocent, innocent),
            ]);
            let total = (mafia + doctor + innocent) as usize;
            let expected = players > 0 && total > 0 && players == total;
            prop_assert_eq!(validate(players, &counts).is_ok(), expected);
            prop_assert_eq!(SetupStatus::of(players, &counts).is_ready(), expected);
        }
    }
}
