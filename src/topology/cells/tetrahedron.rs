//! Tetrahedron tables.
//!
//! Vertices `[v0, v1, v2, v3]` with positive orientation: `v3` lies on the
//! side of `(v0, v1, v2)` from which that triangle appears counter-clockwise.
//! Faces are listed with outward-facing winding.

use once_cell::sync::Lazy;

use super::polyhedron::{self, DualTables};

pub(crate) const EDGES: [[usize; 2]; 6] = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];

pub(crate) static FACES: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]];

pub(crate) static DUAL: Lazy<DualTables> =
    Lazy::new(|| polyhedron::dual_tables(4, &EDGES, &FACES));
