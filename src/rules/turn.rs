//! Turn resolution after a committed move.
//!
//! ## Order of operations
//!
//! 1. Every face not yet completed whose three edges are all visible goes to
//!    the mover. One wall may close several faces at once.
//! 2. The move is appended to the history.
//! 3. The turn passes to the next seat.
//! 4. If every face is now completed the game finishes and a scoreboard is
//!    produced. No further hits are accepted after that.

use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::score::Scoreboard;
use super::walls::WallChain;
use crate::board::BoardTopology;
use crate::core::{FaceId, GameState, MoveRecord, PlayerId};

/// What resolving a move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Player who made the move.
    pub mover: PlayerId,
    /// Faces closed by the move, in face-table order.
    pub captured: SmallVec<[FaceId; 4]>,
    /// Player whose turn it is now.
    pub next_player: PlayerId,
    /// Final scores, when this move ended the game.
    pub scoreboard: Option<Scoreboard>,
}

impl TurnReport {
    /// Did this move end the game?
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.scoreboard.is_some()
    }
}

/// Resolves face capture, turn rotation and game end.
#[derive(Clone, Copy, Debug)]
pub struct TurnEngine<'a> {
    topology: &'a BoardTopology,
}

impl<'a> TurnEngine<'a> {
    /// Create an engine over `topology`.
    #[must_use]
    pub fn new(topology: &'a BoardTopology) -> Self {
        Self { topology }
    }

    /// Resolve the turn that `chain` completed.
    #[instrument(skip(self, state, chain), fields(mover = %state.current_player))]
    pub fn on_move_completed(&self, state: &mut GameState, chain: &WallChain) -> TurnReport {
        let mover = state.current_player;

        let captured = self.capture_closed_faces(state, mover);
        if !captured.is_empty() {
            info!(%mover, faces = captured.len(), "faces captured");
        }

        state.record_move(MoveRecord {
            player: mover,
            origin: chain.origin,
            target: chain.target,
            edges: chain.edges.clone(),
            captured: captured.clone(),
        });

        let next_player = mover.next(state.player_count());
        state.current_player = next_player;

        let scoreboard = if state.all_faces_completed() {
            state.finish();
            let scores = Scoreboard::tally(state);
            info!(moves = state.history().len(), "game finished");
            Some(scores)
        } else {
            debug!(%next_player, "turn passed");
            None
        };

        TurnReport {
            mover,
            captured,
            next_player,
            scoreboard,
        }
    }

    /// Give every newly closed face to `mover`.
    fn capture_closed_faces(&self, state: &mut GameState, mover: PlayerId) -> SmallVec<[FaceId; 4]> {
        let mut captured = SmallVec::new();
        for id in self.topology.face_ids() {
            if state.face(id).completed {
                continue;
            }
            let closed = self
                .topology
                .face(id)
                .edges
                .iter()
                .all(|&edge| state.is_visible(edge));
            if closed && state.face_mut(id).claim(mover) {
                captured.push(id);
            }
        }
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VertexId;
    use crate::rules::walls::build_wall_chain;

    fn play(
        board: &BoardTopology,
        state: &mut GameState,
        origin: u16,
        target: u16,
    ) -> TurnReport {
        let line = board.line_to(VertexId(origin), VertexId(target)).unwrap();
        let chain = build_wall_chain(board, state, VertexId(origin), line);
        TurnEngine::new(board).on_move_completed(state, &chain)
    }

    #[test]
    fn test_turn_rotates() {
        let board = BoardTopology::standard();
        let mut state = GameState::new(&board, 3);

        let report = play(&board, &mut state, 0, 3);

        assert_eq!(report.mover, PlayerId::new(0));
        assert!(report.captured.is_empty());
        assert_eq!(report.next_player, PlayerId::new(1));
        assert!(!report.is_final());
        assert_eq!(state.current_player, PlayerId::new(1));
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_rotation_wraps() {
        let board = BoardTopology::standard();
        let mut state = GameState::new(&board, 2);

        play(&board, &mut state, 0, 3);
        let report = play(&board, &mut state, 0, 15);

        assert_eq!(report.mover, PlayerId::new(1));
        assert_eq!(report.next_player, PlayerId::new(0));
    }

    #[test]
    fn test_two_faces_in_one_move() {
        let board = BoardTopology::standard();
        let mut state = GameState::new(&board, 2);

        assert!(play(&board, &mut state, 15, 18).captured.is_empty());
        assert!(play(&board, &mut state, 28, 31).captured.is_empty());
        assert!(play(&board, &mut state, 28, 11).captured.is_empty());
        let report = play(&board, &mut state, 9, 29);

        assert_eq!(report.mover, PlayerId::new(1));
        assert_eq!(report.captured.as_slice(), &[FaceId(29), FaceId(39)]);
        assert_eq!(state.owner(FaceId(29)), Some(PlayerId::new(1)));
        assert_eq!(state.owner(FaceId(39)), Some(PlayerId::new(1)));
        assert_eq!(state.history()[3].captured.len(), 2);
    }

    #[test]
    fn test_owner_is_not_replaced() {
        let board = BoardTopology::standard();
        let mut state = GameState::new(&board, 2);

        play(&board, &mut state, 15, 18);
        play(&board, &mut state, 28, 31);
        play(&board, &mut state, 28, 11);
        play(&board, &mut state, 9, 29);

        // Player 0 rebuilds the same wall; nothing new closes.
        let report = play(&board, &mut state, 9, 29);
        assert!(report.captured.is_empty());
        assert_eq!(state.owner(FaceId(29)), Some(PlayerId::new(1)));
    }
}
