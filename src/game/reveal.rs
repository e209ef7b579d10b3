//! Reveal state for a dealt round
//!
//! Each assignment is either hidden or revealed. A new round starts with
//! everything hidden; the whole round is replaced on the next deal. The
//! `revealed` flag on each assignment is the only record of what is shown.

use super::{Assignment, RoleCounts, SetupError};
use std::collections::BTreeSet;

/// Snapshot of which assignments are shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedSet {
    indices: BTreeSet<usize>,
    len: usize,
}

impl RevealedSet {
    /// Collect the revealed indices of `assignments`
    pub fn of(assignments: &[Assignment]) -> Self {
        Self {
            indices: assignments
                .iter()
                .enumerate()
                .filter(|(_, a)| a.revealed)
                .map(|(i, _)| i)
                .collect(),
            len: assignments.len(),
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.indices.len()
    }

    pub fn all_revealed(&self) -> bool {
        self.indices.len() == self.len
    }
}

/// A dealt round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    assignments: Vec<Assignment>,
}

impl Round {
    /// Start a round with every assignment hidden
    pub fn new(mut assignments: Vec<Assignment>) -> Self {
        for a in &mut assignments {
            a.revealed = false;
        }
        Self { assignments }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn revealed(&self) -> RevealedSet {
        RevealedSet::of(&self.assignments)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.assignments.get(index).is_some_and(|a| a.revealed)
    }

    /// How many of each role were dealt
    pub fn role_counts(&self) -> RoleCounts {
        let mut counts = RoleCounts::empty();
        for a in &self.assignments {
            counts.adjust(a.role, 1, u32::MAX);
        }
        counts
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Assignment, SetupError> {
        let len = self.assignments.len();
        self.assignments
            .get_mut(index)
            .ok_or(SetupError::AssignmentOutOfRange { index, len })
    }

    /// Hidden -> Revealed
    pub fn reveal(&mut self, index: usize) -> Result<&Assignment, SetupError> {
        let assignment = self.get_mut(index)?;
        assignment.revealed = true;
        Ok(&*assignment)
    }

    /// Revealed -> Hidden
    pub fn hide(&mut self, index: usize) -> Result<&Assignment, SetupError> {
        let assignment = self.get_mut(index)?;
        assignment.revealed = false;
        Ok(&*assignment)
    }

    /// Flip one card. Returns the assignment and whether it is now revealed.
    pub fn toggle(&mut self, index: usize) -> Result<(&Assignment, bool), SetupError> {
        if self.is_revealed(index) {
            Ok((self.hide(index)?, false))
        } else {
            Ok((self.reveal(index)?, true))
        }
    }

    /// Reveal every card; already revealed cards are untouched
    pub fn reveal_all(&mut self) {
        for a in &mut self.assignments {
            a.revealed = true;
        }
    }
}
