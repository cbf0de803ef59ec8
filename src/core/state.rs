//! Mutable per-game state layered over the static board.
//!
//! ## Vertex status
//!
//! Each vertex carries a three-state tag:
//! - `Default`: untouched
//! - `Candidate`: a legal target of the currently selected origin
//! - `Wall`: part of a built wall; absorbing, never overwritten
//!
//! ## GameState
//!
//! Indexed in parallel with [`BoardTopology`](crate::board::BoardTopology):
//! `vertices[i]` is the state of `VertexId(i)`, and so on. Also holds the
//! current player, the pending selection (at most one), the finished flag and
//! the move history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ids::{EdgeId, FaceId, VertexId};
use super::player::{PlayerId, PlayerMap};
use crate::board::BoardTopology;

/// Status tag of a vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexStatus {
    /// Untouched.
    #[default]
    Default,
    /// Legal target of the selected origin.
    Candidate,
    /// On a built wall. Absorbing.
    Wall,
}

/// Per-game state of one vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexState {
    /// Current status tag.
    pub status: VertexStatus,
    /// Is this vertex the selected move origin?
    pub pending: bool,
}

impl VertexState {
    /// Mark as a candidate unless already a wall.
    ///
    /// Returns true if the status changed.
    pub fn mark_candidate(&mut self) -> bool {
        if self.status == VertexStatus::Default {
            self.status = VertexStatus::Candidate;
            true
        } else {
            false
        }
    }

    /// Undo [`VertexState::mark_candidate`]. Walls stay walls.
    pub fn clear_candidate(&mut self) {
        if self.status == VertexStatus::Candidate {
            self.status = VertexStatus::Default;
        }
    }

    /// Make this vertex part of a wall, permanently.
    pub fn mark_wall(&mut self) {
        self.status = VertexStatus::Wall;
    }

    /// Is this vertex on a wall?
    #[must_use]
    pub fn is_wall(&self) -> bool {
        self.status == VertexStatus::Wall
    }
}

/// Per-game state of one edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeState {
    /// Has a wall been built along this edge?
    pub visible: bool,
}

/// Per-game state of one face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceState {
    /// Player who closed the face, once closed.
    pub owner: Option<PlayerId>,
    /// Have all three edges become visible?
    pub completed: bool,
}

impl FaceState {
    /// Assign the face to `player` if it has no owner yet.
    ///
    /// Returns true if ownership was assigned. An existing owner is never
    /// replaced.
    pub fn claim(&mut self, player: PlayerId) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(player);
        self.completed = true;
        true
    }
}

/// The pending move origin and the vertices it marked as candidates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The selected origin.
    pub origin: VertexId,
    /// Vertices whose status this selection changed to `Candidate`.
    pub marked: SmallVec<[VertexId; 6]>,
}

/// Phase of the two-click move state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePhase {
    /// No origin selected.
    Idle,
    /// An origin is selected and waiting for a target.
    OriginSelected(VertexId),
}

/// A completed move, kept for inspection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Player who made the move.
    pub player: PlayerId,
    /// Vertex the wall was drawn from.
    pub origin: VertexId,
    /// Vertex the wall was drawn to.
    pub target: VertexId,
    /// Edges made visible, origin end first.
    pub edges: SmallVec<[EdgeId; 3]>,
    /// Faces closed by this move.
    pub captured: SmallVec<[FaceId; 4]>,
}

/// Full mutable game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    player_count: usize,

    vertices: Vec<VertexState>,
    edges: Vec<EdgeState>,
    faces: Vec<FaceState>,

    /// Player whose turn it is.
    pub current_player: PlayerId,

    selection: Option<Selection>,
    finished: bool,
    history: Vec<MoveRecord>,
}

impl GameState {
    /// Fresh state for `topology` with `player_count` players.
    ///
    /// Player 0 moves first; every vertex is `Default`, every edge hidden,
    /// every face unowned.
    #[must_use]
    pub fn new(topology: &BoardTopology, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        Self {
            player_count,
            vertices: vec![VertexState::default(); topology.vertex_count()],
            edges: vec![EdgeState::default(); topology.edge_count()],
            faces: vec![FaceState::default(); topology.face_count()],
            current_player: PlayerId::new(0),
            selection: None,
            finished: false,
            history: Vec::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    // === Vertices ===

    /// State of a vertex.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> &VertexState {
        &self.vertices[id.index()]
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> &mut VertexState {
        &mut self.vertices[id.index()]
    }

    /// Status of a vertex.
    #[must_use]
    pub fn status(&self, id: VertexId) -> VertexStatus {
        self.vertex(id).status
    }

    /// All vertex states, indexed by `VertexId`.
    #[must_use]
    pub fn vertices(&self) -> &[VertexState] {
        &self.vertices
    }

    // === Edges ===

    /// Is a wall built along this edge?
    #[must_use]
    pub fn is_visible(&self, id: EdgeId) -> bool {
        self.edges[id.index()].visible
    }

    pub(crate) fn show_edge(&mut self, id: EdgeId) {
        self.edges[id.index()].visible = true;
    }

    /// Number of visible edges.
    #[must_use]
    pub fn visible_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.visible).count()
    }

    // === Faces ===

    /// State of a face.
    #[must_use]
    pub fn face(&self, id: FaceId) -> &FaceState {
        &self.faces[id.index()]
    }

    pub(crate) fn face_mut(&mut self, id: FaceId) -> &mut FaceState {
        &mut self.faces[id.index()]
    }

    /// Owner of a face, if closed.
    #[must_use]
    pub fn owner(&self, id: FaceId) -> Option<PlayerId> {
        self.face(id).owner
    }

    /// Number of completed faces.
    #[must_use]
    pub fn completed_face_count(&self) -> usize {
        self.faces.iter().filter(|f| f.completed).count()
    }

    /// Are all faces completed?
    #[must_use]
    pub fn all_faces_completed(&self) -> bool {
        self.faces.iter().all(|f| f.completed)
    }

    /// Completed faces per player.
    #[must_use]
    pub fn face_counts(&self) -> PlayerMap<u32> {
        let mut counts = PlayerMap::with_value(self.player_count, 0);
        for owner in self.faces.iter().filter_map(|f| f.owner) {
            counts[owner] += 1;
        }
        counts
    }

    // === Selection ===

    /// Current phase of the move state machine.
    #[must_use]
    pub fn phase(&self) -> MovePhase {
        match &self.selection {
            Some(selection) => MovePhase::OriginSelected(selection.origin),
            None => MovePhase::Idle,
        }
    }

    /// The pending selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The pending move origin, if any.
    #[must_use]
    pub fn pending_origin(&self) -> Option<VertexId> {
        self.selection.as_ref().map(|s| s.origin)
    }

    pub(crate) fn set_selection(&mut self, selection: Selection) {
        self.vertex_mut(selection.origin).pending = true;
        self.selection = Some(selection);
    }

    pub(crate) fn take_selection(&mut self) -> Option<Selection> {
        let selection = self.selection.take()?;
        self.vertex_mut(selection.origin).pending = false;
        Some(selection)
    }

    // === Progress ===

    /// Has the game ended?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }

    /// Completed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardTopology {
        BoardTopology::standard()
    }

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(&board(), 3);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.vertices().len(), 37);
        assert_eq!(state.current_player, PlayerId::new(0));
        assert_eq!(state.phase(), MovePhase::Idle);
        assert_eq!(state.visible_edge_count(), 0);
        assert_eq!(state.completed_face_count(), 0);
        assert!(!state.is_finished());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_wall_is_absorbing() {
        let mut v = VertexState::default();
        v.mark_wall();

        assert!(!v.mark_candidate());
        v.clear_candidate();
        assert_eq!(v.status, VertexStatus::Wall);
    }

    #[test]
    fn test_candidate_round_trip() {
        let mut v = VertexState::default();

        assert!(v.mark_candidate());
        assert_eq!(v.status, VertexStatus::Candidate);
        assert!(!v.mark_candidate());

        v.clear_candidate();
        assert_eq!(v.status, VertexStatus::Default);
    }

    #[test]
    fn test_face_claim_is_permanent() {
        let mut face = FaceState::default();

        assert!(face.claim(PlayerId::new(1)));
        assert!(face.completed);
        assert!(!face.claim(PlayerId::new(0)));
        assert_eq!(face.owner, Some(PlayerId::new(1)));
    }

    #[test]
    fn test_selection_sets_pending_flag() {
        let mut state = GameState::new(&board(), 2);
        let origin = VertexId::new(4);

        state.set_selection(Selection {
            origin,
            marked: SmallVec::new(),
        });
        assert!(state.vertex(origin).pending);
        assert_eq!(state.phase(), MovePhase::OriginSelected(origin));
        assert_eq!(state.pending_origin(), Some(origin));

        let taken = state.take_selection().unwrap();
        assert_eq!(taken.origin, origin);
        assert!(!state.vertex(origin).pending);
        assert_eq!(state.phase(), MovePhase::Idle);
        assert!(state.take_selection().is_none());
    }

    #[test]
    fn test_face_counts() {
        let mut state = GameState::new(&board(), 3);

        state.face_mut(FaceId(0)).claim(PlayerId::new(2));
        state.face_mut(FaceId(1)).claim(PlayerId::new(2));
        state.face_mut(FaceId(5)).claim(PlayerId::new(0));

        let counts = state.face_counts();
        assert_eq!(counts[PlayerId::new(0)], 1);
        assert_eq!(counts[PlayerId::new(1)], 0);
        assert_eq!(counts[PlayerId::new(2)], 2);
        assert_eq!(state.completed_face_count(), 3);
        assert!(!state.all_faces_completed());
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new(&board(), 2);
        state.show_edge(EdgeId(3));
        state.vertex_mut(VertexId(0)).mark_wall();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
