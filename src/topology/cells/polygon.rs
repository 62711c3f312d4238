//! Cyclic generation rules for convex polygons with `n` vertices.
//!
//! Vertices `[v0, .., v(n-1)]` are counter-clockwise. Edge `i` joins
//! `v(i)` and `v(i+1 mod n)`, so the edge *after* vertex `i` is `i` and the
//! edge *before* it is `i-1 mod n`. Triangles and quadrilaterals are the
//! `n = 3` and `n = 4` instances of these rules.

use super::Slot;

/// Local edges in cyclic order.
pub(crate) fn edges(n: usize) -> Vec<[usize; 2]> {
    (0..n).map(|i| [i, (i + 1) % n]).collect()
}

/// One corner per vertex: `[vertex i, edge after, edge before]`.
pub(crate) fn corners(n: usize) -> Vec<[Slot; 3]> {
    (0..n)
        .map(|i| [Slot::vertex(i), Slot::edge(i), Slot::edge(before(i, n))])
        .collect()
}

/// Two wedges per vertex: `(vertex, edge after)` then `(vertex, edge before)`.
pub(crate) fn wedges(n: usize) -> Vec<[Slot; 2]> {
    (0..n)
        .flat_map(|i| {
            [
                [Slot::vertex(i), Slot::edge(i)],
                [Slot::vertex(i), Slot::edge(before(i, n))],
            ]
        })
        .collect()
}

#[inline]
fn before(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}
