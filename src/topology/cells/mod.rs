//! Cell entity variants: per-shape sub-entity and bound-entity generation.
//!
//! # Vertex ordering
//! Every shape assumes a canonical vertex order; violating it flips the sign
//! of the measure and the orientation of derived entities.
//!
//! - [`ShapeTag::Triangle`]: `[v0, v1, v2]` counter-clockwise.
//! - [`ShapeTag::Quadrilateral`]: `[v0, v1, v2, v3]` counter-clockwise.
//! - [`ShapeTag::Polygon`]: `[v0, .., v(n-1)]` counter-clockwise, convex.
//! - [`ShapeTag::Tetrahedron`]: `[v0, v1, v2, v3]`, positively oriented.
//! - [`ShapeTag::Hexahedron`]: bottom `[v0..v3]`, top `[v4..v7]`.
//!
//! # Protocol
//! The topology store first calls [`create_entities`] for each cell and
//! resolves the returned vertex tuples to (deduplicated) edge and face ids.
//! It then calls [`create_bound_entities`] with the resolved ids, listed per
//! dimension in the same local order `create_entities` produced them, to
//! obtain the cell's corners ([`CORNER_DIM`]) and wedges ([`WEDGE_DIM`]).
//!
//! ```rust
//! use ale_topology::topology::cells::{create_entities, create_bound_entities, CORNER_DIM};
//! use ale_topology::topology::domain::Domain;
//! use ale_topology::topology::shape::ShapeTag;
//!
//! let edges = create_entities(ShapeTag::Triangle, 1, &[10u32, 11, 12])?;
//! assert_eq!(edges.arities(), &[2, 2, 2]);
//!
//! let corners = create_bound_entities(
//!     ShapeTag::Triangle,
//!     Domain::Primal,
//!     Domain::Dual,
//!     CORNER_DIM,
//!     &[&[10, 11, 12][..], &[20, 21, 22][..]],
//! )?;
//! assert_eq!(corners.record(0), Some(&[10, 20, 22][..]));
//! # Ok::<(), ale_topology::mesh_error::MeshError>(())
//! ```

mod hexahedron;
mod polygon;
mod polyhedron;
mod quadrilateral;
mod tetrahedron;
mod triangle;

use std::borrow::Cow;

use itertools::Itertools;

use crate::data::coordinates::Coordinates;
use crate::geometry::shapes::{self, Point};
use crate::mesh_error::MeshError;
use crate::topology::domain::Domain;
use crate::topology::point::PointId;
use crate::topology::shape::ShapeTag;
use crate::topology::table::EntityTable;

/// Dual dimension of corners.
pub const CORNER_DIM: usize = 1;
/// Dual dimension of wedges.
pub const WEDGE_DIM: usize = 2;

/// Reference to the `index`-th local entity of dimension `dim` of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    pub dim: usize,
    pub index: usize,
}

impl Slot {
    pub const fn vertex(index: usize) -> Self {
        Slot { dim: 0, index }
    }

    pub const fn edge(index: usize) -> Self {
        Slot { dim: 1, index }
    }

    pub const fn face(index: usize) -> Self {
        Slot { dim: 2, index }
    }
}

/// Local edges of a shape as vertex-index pairs.
pub fn local_edges(shape: ShapeTag) -> Cow<'static, [[usize; 2]]> {
    match shape {
        ShapeTag::Triangle => Cow::Borrowed(&triangle::EDGES),
        ShapeTag::Quadrilateral => Cow::Borrowed(&quadrilateral::EDGES),
        ShapeTag::Polygon(n) => Cow::Owned(polygon::edges(n as usize)),
        ShapeTag::Tetrahedron => Cow::Borrowed(&tetrahedron::EDGES),
        ShapeTag::Hexahedron => Cow::Borrowed(&hexahedron::EDGES),
    }
}

/// Local faces of a 3D shape as outward-wound vertex-index cycles; empty
/// for 2D shapes.
pub(crate) fn local_faces(shape: ShapeTag) -> Vec<&'static [usize]> {
    match shape {
        ShapeTag::Tetrahedron => tetrahedron::FACES.iter().map(|f| &f[..]).collect(),
        ShapeTag::Hexahedron => hexahedron::FACES.iter().map(|f| &f[..]).collect(),
        _ => Vec::new(),
    }
}

/// Sub-entities of dimension `dim` of one cell, as tuples of its vertices.
///
/// 2D shapes produce their edges for `dim == 1`; 3D shapes produce edges for
/// `dim == 1` and faces for `dim == 2`. Edge `i` of a polygon joins vertex
/// `i` to vertex `i + 1 (mod n)`, so two cells sharing an edge emit the same
/// unordered vertex pair.
pub fn create_entities<P: Copy>(
    shape: ShapeTag,
    dim: usize,
    vertices: &[P],
) -> Result<EntityTable<P>, MeshError> {
    shape.check_vertex_count(vertices.len())?;
    match (shape, dim) {
        (ShapeTag::Triangle, 1) => Ok(emit_local(&triangle::EDGES, vertices)),
        (ShapeTag::Quadrilateral, 1) => Ok(emit_local(&quadrilateral::EDGES, vertices)),
        (ShapeTag::Polygon(n), 1) => Ok(emit_local(&polygon::edges(n as usize), vertices)),
        (ShapeTag::Tetrahedron, 1) => Ok(emit_local(&tetrahedron::EDGES, vertices)),
        (ShapeTag::Tetrahedron, 2) => Ok(emit_local(&tetrahedron::FACES, vertices)),
        (ShapeTag::Hexahedron, 1) => Ok(emit_local(&hexahedron::EDGES, vertices)),
        (ShapeTag::Hexahedron, 2) => Ok(emit_local(&hexahedron::FACES, vertices)),
        _ => Err(MeshError::UnsupportedDimension { shape, dim }),
    }
}

/// Corners (`dim == CORNER_DIM`) or wedges (`dim == WEDGE_DIM`) of one cell.
///
/// `ids[d]` holds the resolved ids of the cell's local entities of dimension
/// `d` (vertices, edges and, for 3D shapes, faces), in local order.
///
/// 2D corner `i` is `[v_i, e_after, e_before]`; the wedges of vertex `i` are
/// `[v_i, e_after]` then `[v_i, e_before]`. A 3D corner is `[v, incident
/// edges.., incident faces..]`; its wedges are `[v, e_after, f]` then
/// `[v, e_before, f]` for each incident face `f`, following the face cycle.
pub fn create_bound_entities<P: Copy>(
    shape: ShapeTag,
    from: Domain,
    to: Domain,
    dim: usize,
    ids: &[&[P]],
) -> Result<EntityTable<P>, MeshError> {
    if from != Domain::Primal || to != Domain::Dual {
        return Err(MeshError::UnsupportedDomain { from, to });
    }
    check_resolved_counts(shape, ids)?;
    match (shape, dim) {
        (ShapeTag::Triangle, CORNER_DIM) => Ok(emit_bound(&triangle::CORNERS, ids)),
        (ShapeTag::Triangle, WEDGE_DIM) => Ok(emit_bound(&triangle::WEDGES, ids)),
        (ShapeTag::Quadrilateral, CORNER_DIM) => Ok(emit_bound(&quadrilateral::CORNERS, ids)),
        (ShapeTag::Quadrilateral, WEDGE_DIM) => Ok(emit_bound(&quadrilateral::WEDGES, ids)),
        (ShapeTag::Polygon(n), CORNER_DIM) => {
            Ok(emit_bound(&polygon::corners(n as usize), ids))
        }
        (ShapeTag::Polygon(n), WEDGE_DIM) => Ok(emit_bound(&polygon::wedges(n as usize), ids)),
        (ShapeTag::Tetrahedron, CORNER_DIM) => Ok(emit_bound(&tetrahedron::DUAL.corners, ids)),
        (ShapeTag::Tetrahedron, WEDGE_DIM) => Ok(emit_bound(&tetrahedron::DUAL.wedges, ids)),
        (ShapeTag::Hexahedron, CORNER_DIM) => Ok(emit_bound(&hexahedron::DUAL.corners, ids)),
        (ShapeTag::Hexahedron, WEDGE_DIM) => Ok(emit_bound(&hexahedron::DUAL.wedges, ids)),
        _ => Err(MeshError::NotImplemented(format!(
            "{shape}: unknown bound entity dimension {dim}"
        ))),
    }
}

fn check_resolved_counts<P>(shape: ShapeTag, ids: &[&[P]]) -> Result<(), MeshError> {
    let levels = shape.dimension();
    if ids.len() < levels {
        return Err(MeshError::ArityMismatch {
            shape,
            expected: levels,
            found: ids.len(),
        });
    }
    shape.check_vertex_count(ids[0].len())?;
    for (d, resolved) in ids.iter().enumerate().take(levels).skip(1) {
        let expected = shape.entity_count(d).unwrap_or(0);
        if resolved.len() != expected {
            return Err(MeshError::ArityMismatch {
                shape,
                expected,
                found: resolved.len(),
            });
        }
    }
    Ok(())
}

fn emit_local<P: Copy, R: AsRef<[usize]>>(records: &[R], vertices: &[P]) -> EntityTable<P> {
    let arity = records.first().map_or(0, |r| r.as_ref().len());
    let mut table = EntityTable::with_capacity(records.len(), arity);
    let mut buf = Vec::with_capacity(arity);
    for record in records {
        buf.clear();
        buf.extend(record.as_ref().iter().map(|&i| vertices[i]));
        table.push(&buf);
    }
    table
}

fn emit_bound<P: Copy, R: AsRef<[Slot]>>(records: &[R], ids: &[&[P]]) -> EntityTable<P> {
    let arity = records.first().map_or(0, |r| r.as_ref().len());
    let mut table = EntityTable::with_capacity(records.len(), arity);
    let mut buf = Vec::with_capacity(arity);
    for record in records {
        buf.clear();
        buf.extend(record.as_ref().iter().map(|s| ids[s.dim][s.index]));
        table.push(&buf);
    }
    table
}

/// A cell: shape tag plus its vertices in canonical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    shape: ShapeTag,
    vertices: Vec<PointId>,
}

impl Cell {
    /// Fails with [`MeshError::ArityMismatch`] if the vertex count does not fit `shape`.
    pub fn new(shape: ShapeTag, vertices: Vec<PointId>) -> Result<Self, MeshError> {
        shape.check_vertex_count(vertices.len())?;
        if let Some(vertex) = vertices.iter().duplicates().next() {
            return Err(MeshError::RepeatedVertex {
                shape,
                vertex: *vertex,
            });
        }
        Ok(Self { shape, vertices })
    }

    #[inline]
    pub fn shape_tag(&self) -> ShapeTag {
        self.shape
    }

    #[inline]
    pub fn vertices(&self) -> &[PointId] {
        &self.vertices
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.shape.dimension()
    }

    pub fn create_entities(&self, dim: usize) -> Result<EntityTable<PointId>, MeshError> {
        create_entities(self.shape, dim, &self.vertices)
    }

    pub fn create_bound_entities(
        &self,
        from: Domain,
        to: Domain,
        dim: usize,
        ids: &[&[PointId]],
    ) -> Result<EntityTable<PointId>, MeshError> {
        create_bound_entities(self.shape, from, to, dim, ids)
    }

    /// Vertex positions, lifted to 3D.
    pub fn points(&self, coordinates: &Coordinates) -> Result<Vec<Point>, MeshError> {
        coordinates.gather(&self.vertices)
    }

    pub fn centroid(&self, coordinates: &Coordinates) -> Result<Point, MeshError> {
        shapes::centroid(self.shape, &self.points(coordinates)?)
    }

    /// Area (2D) or volume (3D); degenerate and inverted cells are errors.
    pub fn measure(&self, coordinates: &Coordinates, tolerance: f64) -> Result<f64, MeshError> {
        shapes::measure(self.shape, &self.points(coordinates)?, tolerance)
    }

    /// Checked area; only for 2D shapes.
    pub fn area(&self, coordinates: &Coordinates, tolerance: f64) -> Result<f64, MeshError> {
        self.measure_of_dim(2, coordinates, tolerance)
    }

    /// Checked volume; only for 3D shapes.
    pub fn volume(&self, coordinates: &Coordinates, tolerance: f64) -> Result<f64, MeshError> {
        self.measure_of_dim(3, coordinates, tolerance)
    }

    fn measure_of_dim(
        &self,
        dim: usize,
        coordinates: &Coordinates,
        tolerance: f64,
    ) -> Result<f64, MeshError> {
        if self.dimension() != dim {
            return Err(MeshError::UnsupportedDimension {
                shape: self.shape,
                dim,
            });
        }
        self.measure(coordinates, tolerance)
    }

    pub fn min_length(&self, coordinates: &Coordinates) -> Result<f64, MeshError> {
        shapes::min_length(self.shape, &self.points(coordinates)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_edges_cyclic() {
        let t = create_entities(ShapeTag::Triangle, 1, &[7u32, 8, 9]).unwrap();
        assert_eq!(t.ids(), &[7, 8, 8, 9, 9, 7]);
        assert_eq!(t.arities(), &[2, 2, 2]);
    }

    #[test]
    fn triangle_rejects_four_vertices() {
        let err = create_entities(ShapeTag::Triangle, 1, &[1u32, 2, 3, 4]).unwrap_err();
        assert!(matches!(err, MeshError::ArityMismatch { expected: 3, found: 4, .. }));
    }

    #[test]
    fn rejects_dimension_at_or_above_cell() {
        for dim in [0, 2, 3] {
            let err = create_entities(ShapeTag::Triangle, dim, &[1u32, 2, 3]).unwrap_err();
            assert!(matches!(err, MeshError::UnsupportedDimension { .. }));
        }
        assert!(create_entities(ShapeTag::Hexahedron, 3, &[0u32; 8]).is_err());
    }

    #[test]
    fn triangle_corners_and_wedges() {
        let v = [1u32, 2, 3];
        let e = [10u32, 11, 12];
        let ids: [&[u32]; 2] = [&v, &e];
        let corners =
            create_bound_entities(ShapeTag::Triangle, Domain::Primal, Domain::Dual, 1, &ids)
                .unwrap();
        assert_eq!(corners.arities(), &[3, 3, 3]);
        assert_eq!(corners.ids(), &[1, 10, 12, 2, 11, 10, 3, 12, 11]);

        let wedges =
            create_bound_entities(ShapeTag::Triangle, Domain::Primal, Domain::Dual, 2, &ids)
                .unwrap();
        assert_eq!(wedges.arities(), &[2; 6]);
        assert_eq!(wedges.ids(), &[1, 10, 1, 12, 2, 11, 2, 10, 3, 12, 3, 11]);
    }

    #[test]
    fn unknown_bound_dimension_is_not_implemented() {
        let v = [1u32, 2, 3];
        let e = [10u32, 11, 12];
        for dim in [0, 3] {
            let err =
                create_bound_entities(ShapeTag::Triangle, Domain::Primal, Domain::Dual, dim, &[
                    &v[..],
                    &e[..],
                ])
                .unwrap_err();
            assert!(matches!(err, MeshError::NotImplemented(_)));
        }
    }

    #[test]
    fn bound_entities_need_primal_to_dual() {
        let v = [1u32, 2, 3];
        let e = [10u32, 11, 12];
        let err = create_bound_entities(ShapeTag::Triangle, Domain::Dual, Domain::Primal, 1, &[
            &v[..],
            &e[..],
        ])
        .unwrap_err();
        assert!(matches!(err, MeshError::UnsupportedDomain { .. }));
    }

    #[test]
    fn bound_entities_check_resolved_counts() {
        let v = [1u32, 2, 3];
        let e = [10u32, 11];
        let err = create_bound_entities(ShapeTag::Triangle, Domain::Primal, Domain::Dual, 1, &[
            &v[..],
            &e[..],
        ])
        .unwrap_err();
        assert!(matches!(err, MeshError::ArityMismatch { expected: 3, found: 2, .. }));

        let err =
            create_bound_entities(ShapeTag::Tetrahedron, Domain::Primal, Domain::Dual, 1, &[
                &[1u32, 2, 3, 4][..],
                &[0u32; 6][..],
            ])
            .unwrap_err();
        assert!(matches!(err, MeshError::ArityMismatch { expected: 3, found: 2, .. }));
    }

    #[test]
    fn tetrahedron_corner_layout() {
        let v = [1u32, 2, 3, 4];
        let e = [10u32, 11, 12, 13, 14, 15];
        let f = [20u32, 21, 22, 23];
        let corners =
            create_bound_entities(ShapeTag::Tetrahedron, Domain::Primal, Domain::Dual, 1, &[
                &v[..],
                &e[..],
                &f[..],
            ])
            .unwrap();
        // vertex 0 touches edges 0, 2, 3 and faces 0, 1, 3
        assert_eq!(corners.record(0), Some(&[1, 10, 12, 13, 20, 21, 23][..]));
        assert_eq!(corners.len(), 4);
    }

    #[test]
    fn hexahedron_entity_counts() {
        let v: Vec<u32> = (0..8).collect();
        assert_eq!(create_entities(ShapeTag::Hexahedron, 1, &v).unwrap().len(), 12);
        let faces = create_entities(ShapeTag::Hexahedron, 2, &v).unwrap();
        assert_eq!(faces.arities(), &[4; 6]);
    }

    #[test]
    fn cell_checks_vertex_count() {
        let ids: Vec<PointId> = (1..=3).map(|i| PointId::new(i).unwrap()).collect();
        assert!(Cell::new(ShapeTag::Quadrilateral, ids.clone()).is_err());
        let cell = Cell::new(ShapeTag::Triangle, ids).unwrap();
        assert_eq!(cell.create_entities(1).unwrap().len(), 3);
    }

    #[test]
    fn cell_rejects_repeated_vertex() {
        let a = PointId::new(1).unwrap();
        let b = PointId::new(2).unwrap();
        assert_eq!(
            Cell::new(ShapeTag::Triangle, vec![a, a, b]),
            Err(MeshError::RepeatedVertex {
                shape: ShapeTag::Triangle,
                vertex: a,
            })
        );
        let c = PointId::new(3).unwrap();
        assert!(matches!(
            Cell::new(ShapeTag::Quadrilateral, vec![a, b, c, b]),
            Err(MeshError::RepeatedVertex { vertex, .. }) if vertex == b
        ));
    }

    #[test]
    fn shape_tag_is_the_construction_variant() {
        let ids: Vec<PointId> = (1..=8).map(|i| PointId::new(i).unwrap()).collect();
        for shape in [
            ShapeTag::Triangle,
            ShapeTag::Quadrilateral,
            ShapeTag::Polygon(5),
            ShapeTag::Tetrahedron,
            ShapeTag::Hexahedron,
        ] {
            let n = shape.vertex_count();
            let cell = Cell::new(shape, ids[..n].to_vec()).unwrap();
            assert_eq!(cell.shape_tag(), shape);
        }
    }
}
