//! Two-click move state machine.
//!
//! ## Transitions
//!
//! | Phase            | Hit                         | Result                         |
//! |------------------|-----------------------------|--------------------------------|
//! | any              | nothing                     | ignored                        |
//! | `Idle`           | `v`                         | `v` selected, targets marked   |
//! | `OriginSelected` | the origin                  | selection cancelled            |
//! | `OriginSelected` | a far end of the origin     | move committed                 |
//! | `OriginSelected` | anything else               | ignored, selection kept        |
//!
//! Hits on an ignored vertex are not errors; the selection simply stays
//! pending until it is cancelled or completed.

use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use super::walls::{build_wall_chain, WallChain};
use crate::board::BoardTopology;
use crate::core::{GameState, MovePhase, Selection, VertexId};

/// What a single pointer hit did to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// Nothing changed.
    Ignored,
    /// `origin` became the pending origin.
    Selected {
        origin: VertexId,
        /// Every far end of `origin`, whether or not it could be marked.
        targets: SmallVec<[VertexId; 6]>,
    },
    /// The pending selection of `origin` was withdrawn.
    Cancelled { origin: VertexId },
    /// A wall was built. The turn still has to be resolved.
    Completed(WallChain),
}

impl HitOutcome {
    /// Did this hit change the game state?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, HitOutcome::Ignored)
    }

    /// The committed wall, if this hit completed a move.
    #[must_use]
    pub fn completed(&self) -> Option<&WallChain> {
        match self {
            HitOutcome::Completed(chain) => Some(chain),
            _ => None,
        }
    }
}

/// Turns vertex hits into selections and committed walls.
#[derive(Clone, Copy, Debug)]
pub struct MoveResolver<'a> {
    topology: &'a BoardTopology,
}

impl<'a> MoveResolver<'a> {
    /// Create a resolver over `topology`.
    #[must_use]
    pub fn new(topology: &'a BoardTopology) -> Self {
        Self { topology }
    }

    /// Feed one hit-test result into the state machine.
    ///
    /// A finished game ignores every hit.
    #[instrument(skip(self, state), fields(phase = ?state.phase()))]
    pub fn handle_hit(&self, state: &mut GameState, hit: Option<VertexId>) -> HitOutcome {
        if state.is_finished() {
            trace!("game finished, hit ignored");
            return HitOutcome::Ignored;
        }
        let Some(vertex) = hit else {
            return HitOutcome::Ignored;
        };

        match state.phase() {
            MovePhase::Idle => self.select(state, vertex),
            MovePhase::OriginSelected(origin) if origin == vertex => {
                Self::cancel(state);
                debug!(%origin, "selection cancelled");
                HitOutcome::Cancelled { origin }
            }
            MovePhase::OriginSelected(origin) => match self.topology.line_to(origin, vertex) {
                Some(line) => {
                    Self::cancel(state);
                    let chain = build_wall_chain(self.topology, state, origin, line);
                    debug!(%origin, target = %vertex, edges = chain.edges.len(), "move committed");
                    HitOutcome::Completed(chain)
                }
                None => {
                    trace!(%origin, %vertex, "not a target of the pending origin");
                    HitOutcome::Ignored
                }
            },
        }
    }

    /// Make `origin` the pending origin and mark its far ends.
    fn select(&self, state: &mut GameState, origin: VertexId) -> HitOutcome {
        let targets = self.topology.reachable(origin);

        let mut marked = SmallVec::new();
        for &target in &targets {
            if state.vertex_mut(target).mark_candidate() {
                marked.push(target);
            }
        }
        debug!(%origin, marked = marked.len(), "origin selected");

        state.set_selection(Selection { origin, marked });
        HitOutcome::Selected { origin, targets }
    }

    /// Drop the pending selection, reverting exactly the markers it set.
    fn cancel(state: &mut GameState) {
        if let Some(selection) = state.take_selection() {
            for vertex in selection.marked {
                state.vertex_mut(vertex).clear_candidate();
            }
        }
    }
}
