//! Triangle tables. Vertices `[v0, v1, v2]` counter-clockwise.

use super::Slot;

pub(crate) const EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

// The edge leaving the vertex comes first.
pub(crate) const CORNERS: [[Slot; 3]; 3] = [
    [Slot::vertex(0), Slot::edge(0), Slot::edge(2)],
    [Slot::vertex(1), Slot::edge(1), Slot::edge(0)],
    [Slot::vertex(2), Slot::edge(2), Slot::edge(1)],
];

pub(crate) const WEDGES: [[Slot; 2]; 6] = [
    [Slot::vertex(0), Slot::edge(0)],
    [Slot::vertex(0), Slot::edge(2)],
    [Slot::vertex(1), Slot::edge(1)],
    [Slot::vertex(1), Slot::edge(0)],
    [Slot::vertex(2), Slot::edge(2)],
    [Slot::vertex(2), Slot::edge(1)],
];
