//! Core types: indices, players, configuration, errors, game state.
//!
//! Everything here is independent of the move rules; the `rules` module
//! drives these types, the `render` and `controller` modules read them.

pub mod config;
pub mod error;
pub mod ids;
pub mod player;
pub mod state;

pub use config::{GameConfig, DEFAULT_PLAYERS, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, TopologyError};
pub use ids::{EdgeId, FaceId, VertexId};
pub use player::{Player, PlayerId, PlayerMap};
pub use state::{
    EdgeState, FaceState, GameState, MovePhase, MoveRecord, Selection, VertexState, VertexStatus,
};
