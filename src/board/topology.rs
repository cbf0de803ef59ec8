//! Immutable board topology.
//!
//! `BoardTopology` owns the static structure of the board: where every vertex
//! sits, which vertices each edge joins, which three edges bound each face,
//! and the directional lines that define legal moves. It is built once and
//! never mutated; per-game state lives in [`GameState`](crate::core::GameState)
//! and refers back here by index.
//!
//! ## Reachability
//!
//! A vertex's directional lines are precomputed walks outward along fixed
//! lattice directions. The **reachable set** of a vertex is the last vertex of
//! each of its lines. Nothing else is a legal move target, however close.
//!
//! ```
//! use rust_patchwall::board::BoardTopology;
//! use rust_patchwall::core::VertexId;
//!
//! let board = BoardTopology::standard();
//! let reachable = board.reachable(VertexId(0));
//! assert_eq!(reachable.as_slice(), &[VertexId(3), VertexId(18), VertexId(15)]);
//! ```

use rustc_hash::FxHashSet;
use serde::Serialize;
use smallvec::SmallVec;

use super::geometry::{hits_marker, Point, Surface};
use super::layout;
use crate::core::{EdgeId, FaceId, TopologyError, VertexId};

/// An ordered walk away from a vertex in one lattice direction, nearest first.
pub type Line = SmallVec<[VertexId; 3]>;

/// Static data for one vertex.
#[derive(Clone, Debug, Serialize)]
pub struct Vertex {
    /// Position in lattice space.
    pub position: Point,
    /// Directional lines, in table order.
    pub lines: SmallVec<[Line; 6]>,
    /// Edges with this vertex as an endpoint, in edge-table order.
    pub incident: SmallVec<[EdgeId; 6]>,
}

/// Static data for one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// The two endpoints, in table order.
    pub endpoints: [VertexId; 2],
}

impl Edge {
    /// Does this edge join `p` and `q` (in either order)?
    #[must_use]
    pub fn joins(&self, p: VertexId, q: VertexId) -> bool {
        let [a, b] = self.endpoints;
        (a == p && b == q) || (a == q && b == p)
    }

    /// Is `v` one of the endpoints?
    #[must_use]
    pub fn touches(&self, v: VertexId) -> bool {
        self.endpoints.contains(&v)
    }
}

/// Static data for one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Face {
    /// The three bounding edges.
    pub edges: [EdgeId; 3],
    /// The three corners, in the order the edges first mention them.
    pub vertices: [VertexId; 3],
}

/// Immutable board structure.
#[derive(Clone, Debug, Serialize)]
pub struct BoardTopology {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl BoardTopology {
    /// The standard 37-vertex hexagonal board.
    #[must_use]
    pub fn standard() -> Self {
        let mut builder = TopologyBuilder::new();
        for &(x, y) in &layout::POSITIONS {
            builder = builder.vertex(x, y);
        }
        for &[a, b] in &layout::EDGES {
            builder = builder.edge(a, b);
        }
        for &edges in &layout::FACES {
            builder = builder.face(edges);
        }
        for (v, lines) in layout::LINES.iter().enumerate() {
            for line in lines.iter() {
                builder = builder.line(v as u16, line);
            }
        }
        builder.assemble()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Get a vertex's static data.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get an edge's static data.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Get a face's static data.
    #[must_use]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// All vertex IDs in creation order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len() as u16).map(VertexId)
    }

    /// All edge IDs in table order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len() as u16).map(EdgeId)
    }

    /// All face IDs in table order.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.faces.len() as u16).map(FaceId)
    }

    /// The far end of each directional line of `v`.
    #[must_use]
    pub fn reachable(&self, v: VertexId) -> SmallVec<[VertexId; 6]> {
        self.vertex(v)
            .lines
            .iter()
            .filter_map(|line| line.last().copied())
            .collect()
    }

    /// Is `w` the far end of one of `v`'s lines?
    #[must_use]
    pub fn is_reachable(&self, v: VertexId, w: VertexId) -> bool {
        self.line_to(v, w).is_some()
    }

    /// The line of `v` whose far end is `w`.
    #[must_use]
    pub fn line_to(&self, v: VertexId, w: VertexId) -> Option<&Line> {
        self.vertex(v)
            .lines
            .iter()
            .find(|line| line.last() == Some(&w))
    }

    /// The edge joining `p` and `q`, found through `p`'s incident edges.
    #[must_use]
    pub fn edge_between(&self, p: VertexId, q: VertexId) -> Option<EdgeId> {
        self.vertex(p)
            .incident
            .iter()
            .copied()
            .find(|&e| self.edge(e).joins(p, q))
    }

    /// Pixel position of `v` on `surface`.
    #[must_use]
    pub fn pixel_position(&self, v: VertexId, surface: &Surface) -> Point {
        surface.to_pixels(self.vertex(v).position)
    }

    /// Hit-test a board-local pixel point against the vertex markers.
    ///
    /// Vertices are tested in creation order; the first hit wins.
    #[must_use]
    pub fn vertex_at(&self, point: Point, surface: &Surface) -> Option<VertexId> {
        self.vertex_ids()
            .find(|&v| hits_marker(self.pixel_position(v, surface), point))
    }

    /// Check the structural invariants of the tables.
    ///
    /// - no edge is a loop or a duplicate
    /// - every face names three distinct edges spanning exactly three vertices
    /// - every vertex has at least one line, and each line is non-empty with
    ///   an edge under every step
    pub fn validate(&self) -> Result<(), TopologyError> {
        let mut seen = FxHashSet::default();
        for id in self.edge_ids() {
            let [a, b] = self.edge(id).endpoints;
            if a == b {
                return Err(TopologyError::LoopEdge { edge: id });
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(TopologyError::DuplicateEdge { edge: id });
            }
        }

        for id in self.face_ids() {
            let [e0, e1, e2] = self.face(id).edges;
            if e1 == e0 || e2 == e0 || e2 == e1 {
                let edge = if e1 == e0 { e0 } else { e2 };
                return Err(TopologyError::RepeatedFaceEdge { face: id, edge });
            }
            let corners = corner_union(&self.edges, &self.face(id).edges);
            if corners.len() != 3 {
                return Err(TopologyError::DegenerateFace {
                    face: id,
                    vertices: corners.len(),
                });
            }
        }

        for v in self.vertex_ids() {
            let lines = &self.vertex(v).lines;
            if lines.is_empty() || lines.iter().any(|line| line.is_empty()) {
                return Err(TopologyError::EmptyLine { vertex: v });
            }
            for line in lines {
                let mut from = v;
                for &to in line {
                    if self.edge_between(from, to).is_none() {
                        return Err(TopologyError::MissingEdge { from, to });
                    }
                    from = to;
                }
            }
        }

        Ok(())
    }
}

/// Distinct endpoints of `edges`, in first-mention order.
fn corner_union(table: &[Edge], edges: &[EdgeId; 3]) -> SmallVec<[VertexId; 6]> {
    let mut corners = SmallVec::new();
    for &e in edges {
        for v in table[e.index()].endpoints {
            if !corners.contains(&v) {
                corners.push(v);
            }
        }
    }
    corners
}

/// Builder for custom boards.
///
/// Indices are checked by [`TopologyBuilder::build`], which also runs
/// [`BoardTopology::validate`].
///
/// ```
/// use rust_patchwall::board::TopologyBuilder;
/// use rust_patchwall::core::VertexId;
///
/// // A single triangle where every corner reaches the next one.
/// let board = TopologyBuilder::new()
///     .vertex(0.0, 0.5)
///     .vertex(-0.5, -0.5)
///     .vertex(0.5, -0.5)
///     .edge(0, 1)
///     .edge(1, 2)
///     .edge(2, 0)
///     .face([0, 1, 2])
///     .line(0, &[1])
///     .line(1, &[2])
///     .line(2, &[0])
///     .build()
///     .unwrap();
///
/// assert_eq!(board.face_count(), 1);
/// assert!(board.is_reachable(VertexId(1), VertexId(2)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TopologyBuilder {
    positions: Vec<Point>,
    edges: Vec<[u16; 2]>,
    faces: Vec<[u16; 3]>,
    lines: Vec<(u16, Vec<u16>)>,
}

impl TopologyBuilder {
    /// Start an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex at lattice coordinates `(x, y)`.
    #[must_use]
    pub fn vertex(mut self, x: f64, y: f64) -> Self {
        self.positions.push(Point::new(x, y));
        self
    }

    /// Add an edge between two vertex indices.
    #[must_use]
    pub fn edge(mut self, a: u16, b: u16) -> Self {
        self.edges.push([a, b]);
        self
    }

    /// Add a face bounded by three edge indices.
    #[must_use]
    pub fn face(mut self, edges: [u16; 3]) -> Self {
        self.faces.push(edges);
        self
    }

    /// Add a directional line to vertex `v`, nearest vertex first.
    #[must_use]
    pub fn line(mut self, v: u16, steps: &[u16]) -> Self {
        self.lines.push((v, steps.to_vec()));
        self
    }

    /// Check sizes and indices, assemble the topology and validate it.
    pub fn build(self) -> Result<BoardTopology, TopologyError> {
        for (table, count) in [
            ("vertex", self.positions.len()),
            ("edge", self.edges.len()),
            ("face", self.faces.len()),
        ] {
            if count > usize::from(u16::MAX) {
                return Err(TopologyError::TableTooLarge { table, count });
            }
        }

        let count = self.positions.len();
        let vertex_in_range = |index: u16| {
            if (index as usize) < count {
                Ok(())
            } else {
                Err(TopologyError::VertexOutOfRange {
                    index: index as usize,
                    count,
                })
            }
        };

        for &[a, b] in &self.edges {
            vertex_in_range(a)?;
            vertex_in_range(b)?;
        }
        for (v, steps) in &self.lines {
            vertex_in_range(*v)?;
            for &s in steps {
                vertex_in_range(s)?;
            }
        }
        for (i, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&e| e as usize >= self.edges.len()) {
                return Err(TopologyError::EdgeOutOfRange {
                    face: FaceId(i as u16),
                    index: bad as usize,
                });
            }
        }

        let topology = self.assemble();
        topology.validate()?;
        Ok(topology)
    }

    /// Assemble without checks. Indices must be in range and every table
    /// must fit a `u16` index.
    fn assemble(self) -> BoardTopology {
        let mut vertices: Vec<Vertex> = self
            .positions
            .into_iter()
            .map(|position| Vertex {
                position,
                lines: SmallVec::new(),
                incident: SmallVec::new(),
            })
            .collect();

        let edges: Vec<Edge> = self
            .edges
            .into_iter()
            .map(|[a, b]| Edge {
                endpoints: [VertexId(a), VertexId(b)],
            })
            .collect();

        for (i, edge) in edges.iter().enumerate() {
            for v in edge.endpoints {
                vertices[v.index()].incident.push(EdgeId(i as u16));
            }
        }

        for (v, steps) in self.lines {
            vertices[v as usize]
                .lines
                .push(steps.into_iter().map(VertexId).collect());
        }

        let faces = self
            .faces
            .into_iter()
            .map(|raw| {
                let face_edges = raw.map(EdgeId);
                let corners = corner_union(&edges, &face_edges);
                let mut fixed = [VertexId(0); 3];
                for (slot, v) in fixed.iter_mut().zip(corners) {
                    *slot = v;
                }
                Face {
                    edges: face_edges,
                    vertices: fixed,
                }
            })
            .collect();

        BoardTopology {
            vertices,
            edges,
            faces,
        }
    }
}
