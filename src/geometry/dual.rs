//! Sub-volumes of dual entities.
//!
//! A 2D wedge `(v, e)` of a cell is the triangle spanned by the vertex, the
//! midpoint of the edge and the cell centroid. A 3D wedge `(v, e, f)` is the
//! tetrahedron spanned by the vertex, the edge midpoint, the face centroid
//! and the cell centroid. A corner is the union of its wedges.
//!
//! Measures are signed. The half edge a wedge sits on is taken along the
//! cell winding (the face cycle in 3D), so a wedge is positive when the
//! centroid lies inside it and the wedges of a cell sum to its signed
//! measure exactly.

use super::vector::{Point, midpoint, signed_area_xy, signed_volume};

/// The half of edge `(vertex, other)` touching `vertex`, ordered along the
/// cell winding. `after` is true when the winding runs from `vertex` to
/// `other`.
pub fn half_edge(vertex: Point, other: Point, after: bool) -> [Point; 2] {
    let mid = midpoint(vertex, other);
    if after { [vertex, mid] } else { [mid, vertex] }
}

/// Signed area of the 2D wedge on `half` in a cell with centroid `centroid`.
pub fn wedge_area(half: [Point; 2], centroid: Point) -> f64 {
    signed_area_xy(half[0], half[1], centroid)
}

/// Signed volume of the 3D wedge on `half` of a face with centroid
/// `face_centroid`, `half` following the outward face cycle.
pub fn wedge_volume(half: [Point; 2], face_centroid: Point, centroid: Point) -> f64 {
    signed_volume(face_centroid, half[1], half[0], centroid)
}
