//! Wall-chain construction.
//!
//! A committed move from origin `o` to target `w` walks the directional line
//! of `o` that ends at `w`: `[o, line[0], line[1], ..., w]`. Every vertex on
//! the walk becomes `Wall` and the edge under every step becomes visible, so a
//! single move can raise several edges at once.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::board::BoardTopology;
use crate::core::{EdgeId, GameState, VertexId};

/// The walls raised by one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallChain {
    /// Vertex the wall starts at.
    pub origin: VertexId,
    /// Vertex the wall ends at.
    pub target: VertexId,
    /// Every vertex on the wall, origin first, target last.
    pub vertices: SmallVec<[VertexId; 4]>,
    /// Edge under each step, origin end first.
    pub edges: SmallVec<[EdgeId; 3]>,
}

/// Raise the wall from `origin` along `line`, one of its directional lines.
///
/// The target is the far end of `line`. Find it with
/// [`BoardTopology::line_to`].
pub fn build_wall_chain(
    topology: &BoardTopology,
    state: &mut GameState,
    origin: VertexId,
    line: &[VertexId],
) -> WallChain {
    let mut vertices = SmallVec::new();
    let mut edges = SmallVec::new();

    state.vertex_mut(origin).mark_wall();
    vertices.push(origin);

    let mut from = origin;
    for &to in line {
        state.vertex_mut(to).mark_wall();
        vertices.push(to);

        match topology.edge_between(from, to) {
            Some(edge) => {
                state.show_edge(edge);
                edges.push(edge);
                debug!(%from, %to, %edge, "wall segment raised");
            }
            None => warn!(%from, %to, "line segment has no edge"),
        }
        from = to;
    }

    WallChain {
        origin,
        target: from,
        vertices,
        edges,
    }
}
