//! Dual tables for 3D cells, derived from their edge and face tables.
//!
//! A 3D corner is `[vertex, incident edges.., incident faces..]`, each list
//! in local table order. Wedges split each corner once per incident face and
//! once per face edge touching the vertex: `[vertex, edge after, face]` then
//! `[vertex, edge before, face]`, where after/before follow the face cycle.

use super::Slot;

/// Corner and wedge tables of one 3D shape.
#[derive(Clone, Debug)]
pub(crate) struct DualTables {
    pub(crate) corners: Vec<Vec<Slot>>,
    pub(crate) wedges: Vec<[Slot; 3]>,
}

pub(crate) fn dual_tables<F>(vertex_count: usize, edges: &[[usize; 2]], faces: &[F]) -> DualTables
where
    F: AsRef<[usize]>,
{
    let mut corners = Vec::with_capacity(vertex_count);
    let mut wedges = Vec::new();
    for v in 0..vertex_count {
        let mut corner = vec![Slot::vertex(v)];
        corner.extend(
            edges
                .iter()
                .enumerate()
                .filter(|(_, e)| e.contains(&v))
                .map(|(i, _)| Slot::edge(i)),
        );
        for (f, face) in faces.iter().enumerate() {
            let face = face.as_ref();
            let Some(k) = face.iter().position(|&w| w == v) else {
                continue;
            };
            corner.push(Slot::face(f));
            let n = face.len();
            let after = edge_index(edges, v, face[(k + 1) % n]);
            let before = edge_index(edges, face[(k + n - 1) % n], v);
            wedges.push([Slot::vertex(v), Slot::edge(after), Slot::face(f)]);
            wedges.push([Slot::vertex(v), Slot::edge(before), Slot::face(f)]);
        }
        corners.push(corner);
    }
    DualTables { corners, wedges }
}

fn edge_index(edges: &[[usize; 2]], a: usize, b: usize) -> usize {
    edges
        .iter()
        .position(|e| (e[0] == a && e[1] == b) || (e[0] == b && e[1] == a))
        .expect("face edge missing from the shape's edge table")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_list_edges_then_faces() {
        // Single triangle seen as a degenerate "solid" with one face.
        let tables = dual_tables(3, &[[0, 1], [1, 2], [2, 0]], &[[0usize, 1, 2]]);
        assert_eq!(
            tables.corners[0],
            vec![Slot::vertex(0), Slot::edge(0), Slot::edge(2), Slot::face(0)]
        );
        assert_eq!(tables.wedges.len(), 6);
        assert_eq!(
            tables.wedges[0],
            [Slot::vertex(0), Slot::edge(0), Slot::face(0)]
        );
        assert_eq!(
            tables.wedges[1],
            [Slot::vertex(0), Slot::edge(2), Slot::face(0)]
        );
    }
}
