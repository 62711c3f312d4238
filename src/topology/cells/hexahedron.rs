//! Hexahedron tables.
//!
//! Vertices `[v0..v7]`: bottom face `[0, 1, 2, 3]` counter-clockwise seen
//! from above, top face `[4, 5, 6, 7]` directly over it. Faces are listed
//! with outward-facing winding.

use once_cell::sync::Lazy;

use super::polyhedron::{self, DualTables};

pub(crate) const EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

pub(crate) static FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

pub(crate) static DUAL: Lazy<DualTables> =
    Lazy::new(|| polyhedron::dual_tables(8, &EDGES, &FACES));
