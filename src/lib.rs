//! # rust-patchwall
//!
//! Rule engine for a 2-4 player territory game on a triangular lattice.
//!
//! Players take turns picking a vertex ("pole") and then one of the few
//! vertices it can reach along a straight lattice direction. The move raises
//! a wall along every edge of that line. Whoever closes the third wall of a
//! triangular face ("patch") takes it; the game ends when every face is
//! taken, and the player holding the most faces wins.
//!
//! ## Design Principles
//!
//! 1. **Static board, mutable state**: [`BoardTopology`] is built once and
//!    never changes. Everything that changes during play lives in
//!    [`GameState`], indexed in parallel with the board.
//!
//! 2. **Index references**: vertices, edges and faces refer to each other by
//!    [`VertexId`], [`EdgeId`] and [`FaceId`], never by pointer.
//!
//! 3. **Pluggable surfaces**: drawing, input translation and announcements
//!    are traits supplied by the host.
//!
//! ## Modules
//!
//! - `core`: IDs, players, configuration, errors, game state
//! - `board`: static topology, lattice-to-pixel geometry
//! - `rules`: move state machine, wall construction, turn resolution
//! - `render`: shape descriptions and the renderer trait
//! - `controller`: event loop glue
//!
//! ## Example
//!
//! ```
//! use rust_patchwall::{
//!     GameConfig, GameController, RecordingAnnouncer, RecordingRenderer, SurfaceOrigin,
//! };
//! use rust_patchwall::core::VertexId;
//!
//! let mut game = GameController::new(
//!     GameConfig::new(2),
//!     RecordingRenderer::new(),
//!     SurfaceOrigin::default(),
//!     RecordingAnnouncer::new(),
//! );
//!
//! game.handle_hit(Some(VertexId(0)));
//! let handled = game.handle_hit(Some(VertexId(3)));
//!
//! assert!(handled.turn.is_some());
//! assert_eq!(game.state().visible_edge_count(), 3);
//! ```

pub mod board;
pub mod controller;
pub mod core;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EdgeId, FaceId, GameConfig, GameState, MovePhase, MoveRecord, Player, PlayerId,
    PlayerMap, TopologyError, VertexId, VertexStatus,
};

pub use crate::board::{BoardTopology, Point, Surface, TopologyBuilder};

pub use crate::rules::{HitOutcome, MoveResolver, Scoreboard, TurnEngine, TurnReport, WallChain};

pub use crate::render::{compose_scene, Color, RecordingRenderer, Renderer, Shape, Style};

pub use crate::controller::{
    Announcement, Announcer, GameController, Handled, InputSource, RecordingAnnouncer,
    SurfaceOrigin,
};
