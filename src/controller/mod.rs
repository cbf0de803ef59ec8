//! Game controller: wires input, rules, rendering and announcements.
//!
//! ## Event handling
//!
//! Each pointer event is handled to completion before the next:
//!
//! 1. The [`InputSource`] maps device coordinates to board pixels.
//! 2. The board hit-tests the point (first vertex in creation order wins).
//! 3. The [`MoveResolver`] advances the two-click state machine.
//! 4. A committed wall goes through the [`TurnEngine`], which announces the
//!    next turn and, at the end, the final score.
//! 5. The scene is redrawn.
//!
//! Once the game is finished every event is ignored and nothing is redrawn.
//! [`GameController::reset`] discards the state and starts over.

pub mod announce;
pub mod input;

use tracing::{debug, info, instrument};

use crate::board::{BoardTopology, Point};
use crate::core::{GameConfig, GameState, Player, PlayerId, PlayerMap, VertexId};
use crate::render::{compose_scene, render, Renderer};
use crate::rules::{HitOutcome, MoveResolver, TurnEngine, TurnReport};

pub use announce::{Announcement, Announcer, RecordingAnnouncer, ScoreLine};
pub use input::{InputSource, SurfaceOrigin};

/// Result of handling one pointer event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handled {
    /// What the hit did to the move state machine.
    pub outcome: HitOutcome,
    /// Turn resolution, when the hit committed a move.
    pub turn: Option<TurnReport>,
}

impl Handled {
    fn ignored() -> Self {
        Self {
            outcome: HitOutcome::Ignored,
            turn: None,
        }
    }
}

/// Owns one game and its collaborators.
pub struct GameController<R, I, A> {
    config: GameConfig,
    topology: BoardTopology,
    roster: PlayerMap<Player>,
    state: GameState,

    renderer: R,
    input: I,
    announcer: A,
}

impl<R: Renderer, I: InputSource, A: Announcer> GameController<R, I, A> {
    /// Start a game on the standard board.
    ///
    /// Draws the board and announces the first turn.
    pub fn new(config: GameConfig, renderer: R, input: I, announcer: A) -> Self {
        Self::with_topology(config, BoardTopology::standard(), renderer, input, announcer)
    }

    /// Start a game on a custom board.
    pub fn with_topology(
        config: GameConfig,
        topology: BoardTopology,
        renderer: R,
        input: I,
        announcer: A,
    ) -> Self {
        let roster = Player::roster(config.player_count());
        let state = GameState::new(&topology, config.player_count());

        let mut controller = Self {
            config,
            topology,
            roster,
            state,
            renderer,
            input,
            announcer,
        };
        controller.start();
        controller
    }

    fn start(&mut self) {
        info!(
            players = self.config.player_count(),
            vertices = self.topology.vertex_count(),
            faces = self.topology.face_count(),
            "game started"
        );
        self.redraw();
        self.announce_turn(self.state.current_player);
    }

    /// Discard the current game and start a fresh one with the same players.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.topology, self.config.player_count());
        self.start();
    }

    // === Input ===

    /// Handle a pointer event at raw device coordinates.
    #[instrument(skip(self))]
    pub fn handle_pointer(&mut self, device: Point) -> Handled {
        if self.state.is_finished() {
            return Handled::ignored();
        }
        let local = self.input.to_board(device);
        let hit = self.topology.vertex_at(local, &self.config.surface);
        debug!(?hit, "pointer hit-tested");
        self.handle_hit(hit)
    }

    /// Handle an already hit-tested event.
    pub fn handle_hit(&mut self, hit: Option<VertexId>) -> Handled {
        if self.state.is_finished() {
            return Handled::ignored();
        }

        let outcome = MoveResolver::new(&self.topology).handle_hit(&mut self.state, hit);
        let turn = outcome
            .completed()
            .map(|chain| TurnEngine::new(&self.topology).on_move_completed(&mut self.state, chain));

        if let Some(report) = &turn {
            self.announce_turn(report.next_player);
            if let Some(scores) = &report.scoreboard {
                let message = Announcement::final_score(&self.roster, scores);
                info!(winners = ?scores.winners(), "final score");
                self.announcer.announce(&message);
            }
        }

        self.redraw();
        Handled { outcome, turn }
    }

    // === Output ===

    /// Paint the current state.
    pub fn redraw(&mut self) {
        let shapes = compose_scene(&self.topology, &self.state, &self.roster, &self.config.surface);
        render(&mut self.renderer, &shapes);
    }

    fn announce_turn(&mut self, player: PlayerId) {
        let message = Announcement::turn(&self.roster, player);
        self.announcer.announce(&message);
    }

    // === Accessors ===

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the board.
    #[must_use]
    pub fn topology(&self) -> &BoardTopology {
        &self.topology
    }

    /// Get the current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the seated players.
    #[must_use]
    pub fn roster(&self) -> &PlayerMap<Player> {
        &self.roster
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Get the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the announcer.
    #[must_use]
    pub fn announcer(&self) -> &A {
        &self.announcer
    }
}
