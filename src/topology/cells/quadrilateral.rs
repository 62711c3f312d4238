//! Quadrilateral tables. Vertices `[v0, v1, v2, v3]` counter-clockwise.

use super::Slot;

pub(crate) const EDGES: [[usize; 2]; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];

pub(crate) const CORNERS: [[Slot; 3]; 4] = [
    [Slot::vertex(0), Slot::edge(0), Slot::edge(3)],
    [Slot::vertex(1), Slot::edge(1), Slot::edge(0)],
    [Slot::vertex(2), Slot::edge(2), Slot::edge(1)],
    [Slot::vertex(3), Slot::edge(3), Slot::edge(2)],
];

pub(crate) const WEDGES: [[Slot; 2]; 8] = [
    [Slot::vertex(0), Slot::edge(0)],
    [Slot::vertex(0), Slot::edge(3)],
    [Slot::vertex(1), Slot::edge(1)],
    [Slot::vertex(1), Slot::edge(0)],
    [Slot::vertex(2), Slot::edge(2)],
    [Slot::vertex(2), Slot::edge(1)],
    [Slot::vertex(3), Slot::edge(3)],
    [Slot::vertex(3), Slot::edge(2)],
];
