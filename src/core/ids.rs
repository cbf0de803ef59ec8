//! Typed indices into the board's vertex, edge and face tables.
//!
//! Every cross-reference in the game (a line pointing at vertices, an edge
//! naming its endpoints, a face naming its edges) is one of these indices
//! rather than a pointer, so the tables can be shared and cloned freely.
//!
//! ```
//! use rust_patchwall::core::{VertexId, EdgeId};
//!
//! let v = VertexId::new(18);
//! assert_eq!(v.index(), 18);
//! assert_eq!(format!("{}", EdgeId::new(3)), "Edge(3)");
//! ```

use serde::{Deserialize, Serialize};

macro_rules! index_type {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u16);

        impl $name {
            /// Create an index from its raw value.
            #[must_use]
            pub const fn new(id: u16) -> Self {
                Self(id)
            }

            /// Position in the owning table.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u16> for $name {
            fn from(id: u16) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }
    };
}

index_type!(
    /// A lattice point ("pole").
    VertexId,
    "Vertex"
);

index_type!(
    /// A segment between two neighbouring vertices ("wall").
    EdgeId,
    "Edge"
);

index_type!(
    /// A triangular cell bounded by three edges ("patch").
    FaceId,
    "Face"
);
