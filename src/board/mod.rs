//! Static board structure and its projection onto the drawing surface.
//!
//! - `topology`: immutable vertex/edge/face tables and directional lines
//! - `layout`: the standard hexagonal board tables
//! - `geometry`: lattice-to-pixel projection and hit testing

pub mod geometry;
pub mod layout;
pub mod topology;

pub use geometry::{hits_marker, Point, Surface, BACKDROP_RADIUS, VERTEX_RADIUS};
pub use topology::{BoardTopology, Edge, Face, Line, TopologyBuilder, Vertex};
