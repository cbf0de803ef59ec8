//! Error types.
//!
//! Gameplay itself has no failure path: illegal clicks are ignored. The only
//! errors are a bad startup parameter and malformed board tables.

use derive_more::{Display, Error};

use super::ids::{EdgeId, FaceId, VertexId};

/// Startup configuration error.
///
/// Non-fatal: callers fall back to the default player count and show the
/// display text to the user.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Player count missing, not a number, or outside 2..=4.
    #[display("Players should be from 2 to 4. Start with 4 players.")]
    InvalidPlayerCount {
        /// The raw parameter as supplied, if any.
        raw: Option<String>,
    },
}

/// Malformed static board tables.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TopologyError {
    /// A table refers to a vertex that does not exist.
    #[display("vertex index {index} out of range (board has {count} vertices)")]
    VertexOutOfRange {
        /// Offending raw index.
        index: usize,
        /// Number of vertices on the board.
        count: usize,
    },

    /// A face refers to an edge that does not exist.
    #[display("{face} refers to edge index {index} out of range")]
    EdgeOutOfRange {
        /// Face holding the bad reference.
        face: FaceId,
        /// Offending raw index.
        index: usize,
    },

    /// Two edges join the same pair of vertices.
    #[display("{edge} duplicates an earlier edge")]
    DuplicateEdge {
        /// The later of the two edges.
        edge: EdgeId,
    },

    /// An edge joins a vertex to itself.
    #[display("{edge} is a loop")]
    LoopEdge {
        /// The looping edge.
        edge: EdgeId,
    },

    /// A vertex has no directional lines, or one of its lines is empty.
    #[display("{vertex} has no directional line or an empty one")]
    EmptyLine {
        /// Vertex owning the line.
        vertex: VertexId,
    },

    /// Consecutive vertices on a line are not joined by an edge.
    #[display("line segment {from}-{to} has no edge")]
    MissingEdge {
        /// Near end of the segment.
        from: VertexId,
        /// Far end of the segment.
        to: VertexId,
    },

    /// A face names the same edge more than once.
    #[display("{face} repeats {edge}")]
    RepeatedFaceEdge {
        /// The malformed face.
        face: FaceId,
        /// The repeated edge.
        edge: EdgeId,
    },

    /// A table has more entries than a 16-bit index can address.
    #[display("{table} table has {count} entries, more than 65535")]
    TableTooLarge {
        /// Which table: vertices, edges or faces.
        table: &'static str,
        /// Number of entries supplied.
        count: usize,
    },

    /// A face's three edges do not span exactly three vertices.
    #[display("{face} spans {vertices} vertices instead of 3")]
    DegenerateFace {
        /// The malformed face.
        face: FaceId,
        /// Number of distinct endpoints found.
        vertices: usize,
    },
}
