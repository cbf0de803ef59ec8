//! Player identification, per-player storage and the player roster.
//!
//! ## PlayerId
//!
//! Type-safe 0-based player index. The game seats 2-4 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`. Used for the roster and for final face counts.
//!
//! ## Player
//!
//! Seat metadata: the label shown in announcements and the color used to
//! paint captured faces.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::render::Color;

/// Labels for the four seats, in turn order.
const LABELS: [&str; 4] = [
    "Player 1 (green)",
    "Player 2 (red)",
    "Player 3 (blue)",
    "Player 4 (yellow)",
];

/// Face colors for the four seats, in turn order.
const COLORS: [Color; 4] = [Color::FOREST_GREEN, Color::TOMATO, Color::NAVY, Color::GOLD];

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player seated after this one in a game of `player_count`.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_patchwall::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use rust_patchwall::core::{PlayerId, PlayerMap};
///
/// let mut faces: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// faces[PlayerId::new(1)] += 3;
/// assert_eq!(faces[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat index.
    pub id: PlayerId,
    /// Announcement label, e.g. "Player 1 (green)".
    pub label: String,
    /// Color of faces this player captures.
    pub color: Color,
}

impl Player {
    /// Standard seat metadata for `id`.
    ///
    /// Seats beyond the fourth reuse the palette cyclically.
    #[must_use]
    pub fn standard(id: PlayerId) -> Self {
        let slot = id.index() % LABELS.len();
        Self {
            id,
            label: LABELS[slot].to_string(),
            color: COLORS[slot],
        }
    }

    /// Build the standard roster for `player_count` players.
    #[must_use]
    pub fn roster(player_count: usize) -> PlayerMap<Player> {
        PlayerMap::new(player_count, Player::standard)
    }
}
