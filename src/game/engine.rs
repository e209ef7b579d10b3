//! Role assignment
//!
//! Expands role counts into a flat deck of labels, shuffles it with an
//! injected uniform source and deals one label per player in roster order.

use super::validation::validate;
use super::{Role, RoleCounts, SetupError};
use rand::Rng;

/// Source of uniform random indices
pub trait UniformSource {
    /// Draw an index uniformly from `0..=upper`
    fn index_inclusive(&mut self, upper: usize) -> usize;
}

impl<R: Rng> UniformSource for R {
    fn index_inclusive(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

/// One player's dealt role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub player: String,
    pub role: Role,
    pub revealed: bool,
}

/// Expand counts into one label per slot, in role declaration order
pub fn expand(counts: &RoleCounts) -> Vec<Role> {
    counts
        .iter()
        .flat_map(|(role, count)| std::iter::repeat(role).take(count as usize))
        .collect()
}

/// Durstenfeld shuffle: for i from the last index down to 1, swap i with a
/// uniform j in `0..=i`.
pub fn shuffle<T, S: UniformSource + ?Sized>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.index_inclusive(i);
        items.swap(i, j);
    }
}

/// Deal roles to players.
///
/// Refuses with the validation error when the setup is not dealable, so the
/// result always has exactly one assignment per player.
pub fn assign<S: UniformSource + ?Sized>(
    players: &[String],
    counts: &RoleCounts,
    source: &mut S,
) -> Result<Vec<Assignment>, SetupError> {
    validate(players.len(), counts)?;

    let mut deck = expand(counts);
    shuffle(&mut deck, source);

    Ok(players
        .iter()
        .zip(deck)
        .map(|(player, role)| Assignment {
            player: player.clone(),
            role,
            revealed: false,
        })
        .collect())
}
