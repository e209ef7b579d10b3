//! Player roster
//!
//! An ordered list of unique, non-empty player names capped at
//! `max_players`. Order is display and seating order.

use super::SetupError;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<String>,
    max_players: usize,
}

impl Roster {
    /// Create an empty roster
    pub fn new(max_players: usize) -> Self {
        Self {
            players: Vec::new(),
            max_players,
        }
    }

    /// Build a roster from names, applying the same checks as `add`
    pub fn from_names<S: AsRef<str>>(names: &[S], max_players: usize) -> Result<Self, SetupError> {
        let mut roster = Self::new(max_players);
        for name in names {
            roster.add(name.as_ref())?;
        }
        Ok(roster)
    }

    /// Add a player. The name is trimmed and must be non-empty and unused.
    /// Returns the stored name.
    pub fn add(&mut self, name: &str) -> Result<&str, SetupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SetupError::EmptyPlayerName);
        }
        if self.contains(name) {
            return Err(SetupError::DuplicatePlayerName(name.to_string()));
        }
        if self.players.len() >= self.max_players {
            return Err(SetupError::RosterLimitExceeded {
                max: self.max_players,
            });
        }

        self.players.push(name.to_string());
        Ok(&self.players[self.players.len() - 1])
    }

    /// Remove the player at `index`, returning their name
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.players.len() {
            Some(self.players.remove(index))
        } else {
            None
        }
    }

    /// Remove every player
    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Add `count` generated players named "Player N", numbering from the
    /// current roster size + 1. Taken names are skipped over so exactly
    /// `count` players are added. Returns the added names.
    pub fn quick_add(&mut self, count: usize) -> Result<Vec<String>, SetupError> {
        if count < 1 || count > self.max_players {
            return Err(SetupError::QuickAddOutOfRange {
                count,
                max: self.max_players,
            });
        }
        if self.players.len() + count > self.max_players {
            return Err(SetupError::RosterLimitExceeded {
                max: self.max_players,
            });
        }

        let mut added = Vec::with_capacity(count);
        let mut number = self.players.len() + 1;
        while added.len() < count {
            let name = format!("Player {}", number);
            number += 1;
            if self.contains(&name) {
                debug!(name = %name, "quick add skipped a taken name");
                continue;
            }
            self.players.push(name.clone());
            added.push(name);
        }
        Ok(added)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_keeps_order() {
        let mut roster = Roster::new(20);
        assert_eq!(roster.add("  Alice ").unwrap(), "Alice");
        roster.add("Bob").unwrap();
        roster.add("Carol").unwrap();
        assert_eq!(roster.players(), ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut roster = Roster::new(20);
        roster.add("Alice").unwrap();
        assert_eq!(
            roster.add("Alice "),
            Err(SetupError::DuplicatePlayerName("Alice".into()))
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut roster = Roster::new(20);
        roster.add("alice").unwrap();
        assert!(roster.add("Alice").is_ok());
    }

    #[test]
    fn test_blank_rejected() {
        let mut roster = Roster::new(20);
        assert_eq!(roster.add("   "), Err(SetupError::EmptyPlayerName));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_limit_enforced() {
        let mut roster = Roster::new(20);
        for i in 0..20 {
            roster.add(&format!("P{}", i)).unwrap();
        }
        assert_eq!(roster.len(), roster.max_players());
        assert_eq!(
            roster.add("One Too Many"),
            Err(SetupError::RosterLimitExceeded { max: 20 })
        );
    }

    #[test]
    fn test_remove() {
        let mut roster = Roster::from_names(&["Alice", "Bob", "Carol"], 20).unwrap();
        assert_eq!(roster.remove_at(1), Some("Bob".to_string()));
        assert_eq!(roster.remove_at(5), None);
        assert_eq!(roster.players(), ["Alice", "Carol"]);
        assert!(!roster.contains("Bob"));
    }

    #[test]
    fn test_quick_add_numbers_from_roster_size() {
        let mut roster = Roster::from_names(&["Alice"], 20).unwrap();
        let added = roster.quick_add(2).unwrap();
        assert_eq!(added, vec!["Player 2", "Player 3"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_quick_add_skips_taken_names() {
        let mut roster = Roster::from_names(&["Player 2"], 20).unwrap();
        let added = roster.quick_add(3).unwrap();
        // "Player 2" is taken, so numbering continues past it
        assert_eq!(added, vec!["Player 3", "Player 4", "Player 5"]);
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_quick_add_bounds() {
        let mut roster = Roster::new(20);
        assert_eq!(
            roster.quick_add(0),
            Err(SetupError::QuickAddOutOfRange { count: 0, max: 20 })
        );
        assert_eq!(
            roster.quick_add(21),
            Err(SetupError::QuickAddOutOfRange { count: 21, max: 20 })
        );

        roster.quick_add(15).unwrap();
        assert_eq!(
            roster.quick_add(6),
            Err(SetupError::RosterLimitExceeded { max: 20 })
        );
        assert_eq!(roster.len(), 15);
    }

    #[test]
    fn test_from_names_rejects_duplicates() {
        assert_eq!(
            Roster::from_names(&["A", "B", "A"], 20),
            Err(SetupError::DuplicatePlayerName("A".into()))
        );
    }
}
