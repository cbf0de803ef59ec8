//! End-of-game scoring.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, PlayerMap};

/// Completed faces per player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    counts: PlayerMap<u32>,
}

impl Scoreboard {
    /// Tally face ownership in `state`.
    #[must_use]
    pub fn tally(state: &GameState) -> Self {
        Self {
            counts: state.face_counts(),
        }
    }

    /// Faces owned by `player`.
    #[must_use]
    pub fn count(&self, player: PlayerId) -> u32 {
        self.counts[player]
    }

    /// Per-player counts.
    #[must_use]
    pub fn counts(&self) -> &PlayerMap<u32> {
        &self.counts
    }

    /// Total faces owned by anyone.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, &n)| n).sum()
    }

    /// Players with the highest count. More than one on a tie.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        let Some(best) = self.counts.iter().map(|(_, &n)| n).max() else {
            return Vec::new();
        };
        self.counts
            .iter()
            .filter(|&(_, &n)| n == best)
            .map(|(p, _)| p)
            .collect()
    }
}
