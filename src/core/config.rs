//! Game configuration.
//!
//! The host supplies a `GameConfig` at startup: how many players are seated
//! and the pixel size of the drawing surface. The player count normally comes
//! from an untrusted startup parameter, so there is a lenient constructor that
//! falls back to four players and hands back a warning for the user.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use crate::board::Surface;

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 4;

/// Player count used when the startup parameter is unusable.
pub const DEFAULT_PLAYERS: usize = 4;

/// Complete game configuration.
///
/// The player count is always in 2..=4; deserialization checks it the same
/// way [`GameConfig::try_new`] does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    player_count: usize,

    /// Drawing surface the board is projected onto.
    pub surface: Surface,
}

/// Unchecked wire form of [`GameConfig`].
#[derive(Deserialize)]
struct RawGameConfig {
    player_count: usize,
    surface: Surface,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Ok(Self::try_new(raw.player_count)?.with_surface(raw.surface))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            surface: Surface::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` players.
    ///
    /// Panics if the count is outside 2..=4; use [`GameConfig::try_new`] or
    /// [`GameConfig::from_players_param`] for untrusted input.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
            "Player count must be 2-4"
        );

        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Create a configuration, rejecting counts outside 2..=4.
    pub fn try_new(player_count: usize) -> Result<Self, ConfigError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            Ok(Self::new(player_count))
        } else {
            Err(ConfigError::InvalidPlayerCount {
                raw: Some(player_count.to_string()),
            })
        }
    }

    /// Resolve the startup `players` parameter.
    ///
    /// Anything other than an integer in 2..=4 (including a missing value)
    /// yields the default of four players together with the warning that
    /// should be shown to the user.
    ///
    /// ```
    /// use rust_patchwall::core::GameConfig;
    ///
    /// let (config, warning) = GameConfig::from_players_param(Some("3"));
    /// assert_eq!(config.player_count(), 3);
    /// assert!(warning.is_none());
    ///
    /// let (config, warning) = GameConfig::from_players_param(Some("9"));
    /// assert_eq!(config.player_count(), 4);
    /// assert!(warning.is_some());
    /// ```
    #[must_use]
    pub fn from_players_param(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        let parsed = raw.and_then(|s| s.trim().parse::<usize>().ok());

        match parsed.map(Self::try_new) {
            Some(Ok(config)) => (config, None),
            _ => {
                let err = ConfigError::InvalidPlayerCount {
                    raw: raw.map(str::to_string),
                };
                warn!(raw = ?raw, fallback = DEFAULT_PLAYERS, "{err}");
                (Self::default(), Some(err))
            }
        }
    }

    /// Number of players (2-4).
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Set the drawing surface.
    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }
}
