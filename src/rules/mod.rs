//! Move rules.
//!
//! - `resolver`: the two-click select/cancel/commit state machine
//! - `walls`: turning a committed move into walls and visible edges
//! - `turn`: face capture, turn rotation and game end
//! - `score`: final face counts
//!
//! Both [`MoveResolver`] and [`TurnEngine`] borrow the immutable board and
//! mutate a [`GameState`](crate::core::GameState) passed in by the caller.

pub mod resolver;
pub mod score;
pub mod turn;
pub mod walls;

pub use resolver::{HitOutcome, MoveResolver};
pub use score::Scoreboard;
pub use turn::{TurnEngine, TurnReport};
pub use walls::{build_wall_chain, WallChain};
