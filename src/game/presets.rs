//! Preset setups
//!
//! Named roster + role-count templates that replace the current setup
//! wholesale when applied.

use super::{Limits, Role, RoleCounts, Roster, SetupError};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A named, predefined setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// Lookup identifier ("classic")
    pub id: &'static str,
    /// Display label ("Classic (6 players)")
    pub label: &'static str,
    pub players: Vec<String>,
    pub roles: RoleCounts,
}

impl Preset {
    fn new(id: &'static str, label: &'static str, size: usize, roles: &[(Role, u32)]) -> Self {
        Self {
            id,
            label,
            players: (1..=size).map(|n| format!("Player {}", n)).collect(),
            roles: RoleCounts::from_pairs(roles),
        }
    }

    /// Build a roster and role counts from this preset under `limits`
    pub fn build(&self, limits: Limits) -> Result<(Roster, RoleCounts), SetupError> {
        let roster = Roster::from_names(&self.players, limits.max_players)?;
        self.roles.check_limits(limits.max_role_count)?;
        Ok((roster, self.roles))
    }
}

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset::new(
            "classic",
            "Classic (6 players)",
            6,
            &[
                (Role::Mafia, 2),
                (Role::Doctor, 1),
                (Role::Cop, 1),
                (Role::Narrator, 0),
                (Role::Innocent, 2),
            ],
        ),
        Preset::new(
            "balanced",
            "Balanced (8 players)",
            8,
            &[
                (Role::Mafia, 2),
                (Role::Doctor, 1),
                (Role::Cop, 1),
                (Role::Narrator, 1),
                (Role::Innocent, 3),
            ],
        ),
        Preset::new(
            "large",
            "Large Game (10 players)",
            10,
            &[
                (Role::Mafia, 3),
                (Role::Doctor, 1),
                (Role::Cop, 1),
                (Role::Narrator, 1),
                (Role::Innocent, 4),
            ],
        ),
    ]
});

static BY_ID: Lazy<HashMap<&'static str, usize>> =
    Lazy::new(|| PRESETS.iter().enumerate().map(|(i, p)| (p.id, i)).collect());

/// Static preset lookup
pub struct PresetCatalog;

impl PresetCatalog {
    /// All presets in display order
    pub fn all() -> &'static [Preset] {
        &PRESETS
    }

    /// Find a preset by identifier (case-insensitive)
    pub fn get(id: &str) -> Result<&'static Preset, SetupError> {
        let key = id.trim().to_lowercase();
        BY_ID
            .get(key.as_str())
            .map(|&i| &PRESETS[i])
            .ok_or_else(|| SetupError::UnknownPreset(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_preset() {
        let preset = PresetCatalog::get("classic").unwrap();
        assert_eq!(preset.players.len(), 6);
        assert_eq!(preset.players[0], "Player 1");
        assert_eq!(preset.players[5], "Player 6");
        assert_eq!(
            preset.roles,
            RoleCounts::from_pairs(&[
                (Role::Mafia, 2),
                (Role::Doctor, 1),
                (Role::Cop, 1),
                (Role::Narrator, 0),
                (Role::Innocent, 2),
            ])
        );
    }

    #[test]
    fn test_balanced_preset() {
        let preset = PresetCatalog::get("balanced").unwrap();
        assert_eq!(preset.label, "Balanced (8 players)");
        assert_eq!(preset.players.len(), 8);
        assert_eq!(preset.players[7], "Player 8");
        assert_eq!(
            preset.roles,
            RoleCounts::from_pairs(&[
                (Role::Mafia, 2),
                (Role::Doctor, 1),
                (Role::Cop, 1),
                (Role::Narrator, 1),
                (Role::Innocent, 3),
            ])
        );
    }

    #[test]
    fn test_large_preset() {
        let preset = PresetCatalog::get("large").unwrap();
        assert_eq!(preset.label, "Large Game (10 players)");
        assert_eq!(preset.players.len(), 10);
        assert_eq!(preset.players[9], "Player 10");
        assert_eq!(
            preset.roles,
            RoleCounts::from_pairs(&[
                (Role::Mafia, 3),
                (Role::Doctor, 1),
                (Role::Cop, 1),
                (Role::Narrator, 1),
                (Role::Innocent, 4),
            ])
        );
    }

    #[test]
    fn test_every_preset_is_dealable() {
        for preset in PresetCatalog::all() {
            assert_eq!(
                preset.roles.total() as usize,
                preset.players.len(),
                "{} does not balance",
                preset.id
            );
            assert!(preset.build(Limits::default()).is_ok(), "{} failed to build", preset.id);
        }
    }

    #[test]
    fn test_display_order() {
        let ids: Vec<&str> = PresetCatalog::all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["classic", "balanced", "large"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(PresetCatalog::get(" LARGE ").unwrap().id, "large");
    }

    #[test]
    fn test_unknown_preset() {
        assert_eq!(
            PresetCatalog::get("huge"),
            Err(SetupError::UnknownPreset("huge".into()))
        );
    }

    #[test]
    fn test_build_respects_limits() {
        let large = PresetCatalog::get("large").unwrap();
        let tight = Limits {
            max_players: 8,
            max_role_count: 20,
        };
        assert_eq!(
            large.build(tight),
            Err(SetupError::RosterLimitExceeded { max: 8 })
        );

        let few_mafia = Limits {
            max_players: 20,
            max_role_count: 2,
        };
        assert!(matches!(
            large.build(few_mafia),
            Err(SetupError::RoleCountOutOfRange { role: Role::Mafia, count: 3, max: 2 })
        ));
    }
}
