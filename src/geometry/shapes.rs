//! Geometric shape library: centroid, measure and length scales per shape.
//!
//! All routines take vertex positions as `[f64; 3]` in the canonical vertex
//! order of the shape (see [`crate::topology::cells`]). 2D shapes are
//! evaluated in the XY plane; a 2D mesh lifts its coordinates with `z = 0`.
//!
//! ```rust
//! use ale_topology::geometry::shapes::{centroid, measure, min_length, DEFAULT_TOLERANCE};
//! use ale_topology::topology::shape::ShapeTag;
//!
//! let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
//! assert_eq!(measure(ShapeTag::Triangle, &tri, DEFAULT_TOLERANCE)?, 0.5);
//! assert_eq!(min_length(ShapeTag::Triangle, &tri)?, 1.0);
//! let c = centroid(ShapeTag::Triangle, &tri)?;
//! assert!((c[0] - 1.0 / 3.0).abs() < 1e-15);
//! # Ok::<(), ale_topology::mesh_error::MeshError>(())
//! ```

use itertools::Itertools;

pub use super::vector::Point;
use super::vector::{add, distance, mean, scale, signed_area_xy, signed_volume};
use crate::mesh_error::MeshError;
use crate::topology::cells::{local_edges, local_faces};
use crate::topology::shape::ShapeTag;

/// Relative degeneracy tolerance: a cell is degenerate when
/// `|measure| <= tolerance * h^d` with `h` its longest edge.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Centroid of the cell.
///
/// Simplices use the vertex mean. Polygons use the area-weighted centroid of
/// the triangle fan about the vertex mean; hexahedra the volume-weighted
/// centroid of their face-centroid tetrahedra. Zero total measure is an
/// error.
pub fn centroid(shape: ShapeTag, vertices: &[Point]) -> Result<Point, MeshError> {
    shape.check_vertex_count(vertices.len())?;
    match shape {
        ShapeTag::Triangle | ShapeTag::Tetrahedron => Ok(mean(vertices)),
        ShapeTag::Quadrilateral | ShapeTag::Polygon(_) => {
            let pivot = mean(vertices);
            let mut total = 0.0;
            let mut moment = [0.0; 3];
            for (a, b) in vertices.iter().copied().circular_tuple_windows() {
                let w = signed_area_xy(pivot, a, b);
                total += w;
                moment = add(moment, scale(mean(&[pivot, a, b]), w));
            }
            weighted(shape, moment, total)
        }
        ShapeTag::Hexahedron => {
            let mut total = 0.0;
            let mut moment = [0.0; 3];
            for pts in tetrahedra(shape, vertices) {
                let w = signed_volume(pts[0], pts[1], pts[2], pts[3]);
                total += w;
                moment = add(moment, scale(mean(&pts), w));
            }
            weighted(shape, moment, total)
        }
    }
}

fn weighted(shape: ShapeTag, moment: Point, total: f64) -> Result<Point, MeshError> {
    if total == 0.0 || !total.is_finite() {
        return Err(MeshError::DegenerateGeometry {
            shape,
            measure: total,
        });
    }
    Ok(scale(moment, 1.0 / total))
}

/// Signed area (2D, positive counter-clockwise) or volume (3D).
pub fn signed_measure(shape: ShapeTag, vertices: &[Point]) -> Result<f64, MeshError> {
    shape.check_vertex_count(vertices.len())?;
    let m = match shape.dimension() {
        2 => {
            let v0 = vertices[0];
            vertices[1..]
                .iter()
                .tuple_windows()
                .map(|(&a, &b)| signed_area_xy(v0, a, b))
                .sum()
        }
        _ => tetrahedra(shape, vertices)
            .into_iter()
            .map(|[a, b, c, d]| signed_volume(a, b, c, d))
            .sum(),
    };
    Ok(m)
}

/// Positively oriented tetrahedra tiling a 3D shape.
///
/// A tetrahedron is its own tiling. Every other solid is cut into one
/// tetrahedron per face edge, spanned by the face centroid, the edge and the
/// vertex mean. This is the cut the 3D wedges use, so a cell's wedges sum to
/// its volume even when faces are not planar, and two cells sharing a face
/// cut it the same way regardless of their local numbering.
fn tetrahedra(shape: ShapeTag, vertices: &[Point]) -> Vec<[Point; 4]> {
    match shape {
        ShapeTag::Tetrahedron => vec![[vertices[0], vertices[1], vertices[2], vertices[3]]],
        _ => {
            let apex = mean(vertices);
            let mut tets = Vec::new();
            for face in local_faces(shape) {
                let cycle: Vec<Point> = face.iter().map(|&i| vertices[i]).collect();
                let face_centroid = mean(&cycle);
                tets.extend(
                    cycle
                        .iter()
                        .copied()
                        .circular_tuple_windows()
                        .map(|(a, b)| [face_centroid, b, a, apex]),
                );
            }
            tets
        }
    }
}

/// Checked measure: near-zero is [`MeshError::DegenerateGeometry`], negative
/// is [`MeshError::InvertedGeometry`].
pub fn measure(shape: ShapeTag, vertices: &[Point], tolerance: f64) -> Result<f64, MeshError> {
    let m = signed_measure(shape, vertices)?;
    let h = max_length(shape, vertices)?;
    let floor = tolerance * h.powi(shape.dimension() as i32);
    if !m.is_finite() || m.abs() <= floor {
        return Err(MeshError::DegenerateGeometry { shape, measure: m });
    }
    if m < 0.0 {
        return Err(MeshError::InvertedGeometry { shape, measure: m });
    }
    Ok(m)
}

/// Exact minimum edge length over the shape's edges.
pub fn min_length(shape: ShapeTag, vertices: &[Point]) -> Result<f64, MeshError> {
    Ok(edge_lengths(shape, vertices)?
        .into_iter()
        .fold(f64::INFINITY, f64::min))
}

/// Maximum edge length over the shape's edges.
pub fn max_length(shape: ShapeTag, vertices: &[Point]) -> Result<f64, MeshError> {
    Ok(edge_lengths(shape, vertices)?.into_iter().fold(0.0, f64::max))
}

fn edge_lengths(shape: ShapeTag, vertices: &[Point]) -> Result<Vec<f64>, MeshError> {
    shape.check_vertex_count(vertices.len())?;
    Ok(local_edges(shape)
        .iter()
        .map(|&[a, b]| distance(vertices[a], vertices[b]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn unit_cube() -> Vec<Point> {
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ]
    }

    #[test]
    fn reference_triangle() {
        let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        assert_eq!(measure(ShapeTag::Triangle, &tri, DEFAULT_TOLERANCE).unwrap(), 0.5);
        let c = centroid(ShapeTag::Triangle, &tri).unwrap();
        assert!((c[0] - 1.0 / 3.0).abs() < EPS && (c[1] - 1.0 / 3.0).abs() < EPS);
        assert_eq!(min_length(ShapeTag::Triangle, &tri).unwrap(), 1.0);
        assert!((max_length(ShapeTag::Triangle, &tri).unwrap() - 2f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
        assert!(matches!(
            measure(ShapeTag::Triangle, &tri, DEFAULT_TOLERANCE),
            Err(MeshError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn nearly_collinear_triangle_is_degenerate() {
        let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 1e-14, 0.0]];
        assert!(matches!(
            measure(ShapeTag::Triangle, &tri, DEFAULT_TOLERANCE),
            Err(MeshError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn clockwise_triangle_is_inverted() {
        let tri = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]];
        assert_eq!(signed_measure(ShapeTag::Triangle, &tri).unwrap(), -0.5);
        assert!(matches!(
            measure(ShapeTag::Triangle, &tri, DEFAULT_TOLERANCE),
            Err(MeshError::InvertedGeometry { .. })
        ));
    }

    #[test]
    fn quad_centroid_is_area_weighted() {
        let quad = [
            [0.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
            [3.0, 1.0, 0.0],
            [0.0, 2.0, 0.0],
        ];
        let area = measure(ShapeTag::Quadrilateral, &quad, DEFAULT_TOLERANCE).unwrap();
        assert!((area - 4.5).abs() < EPS);
        let c = centroid(ShapeTag::Quadrilateral, &quad).unwrap();
        assert!((c[0] - 4.0 / 3.0).abs() < EPS);
        assert!((c[1] - 7.0 / 9.0).abs() < EPS);
        assert_eq!(min_length(ShapeTag::Quadrilateral, &quad).unwrap(), 1.0);
    }

    #[test]
    fn regular_hexagon() {
        let hex: Vec<Point> = (0..6)
            .map(|k| {
                let t = std::f64::consts::PI / 3.0 * k as f64;
                [t.cos(), t.sin(), 0.0]
            })
            .collect();
        let area = measure(ShapeTag::Polygon(6), &hex, DEFAULT_TOLERANCE).unwrap();
        assert!((area - 1.5 * 3f64.sqrt()).abs() < EPS);
        let c = centroid(ShapeTag::Polygon(6), &hex).unwrap();
        assert!(c[0].abs() < EPS && c[1].abs() < EPS);
        assert!((min_length(ShapeTag::Polygon(6), &hex).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn reference_tetrahedron() {
        let tet = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ];
        let v = measure(ShapeTag::Tetrahedron, &tet, DEFAULT_TOLERANCE).unwrap();
        assert!((v - 1.0 / 6.0).abs() < EPS);
        assert_eq!(centroid(ShapeTag::Tetrahedron, &tet).unwrap(), [0.25, 0.25, 0.25]);
        assert_eq!(min_length(ShapeTag::Tetrahedron, &tet).unwrap(), 1.0);
    }

    #[test]
    fn flat_tetrahedron_is_degenerate() {
        let tet = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ];
        assert!(matches!(
            measure(ShapeTag::Tetrahedron, &tet, DEFAULT_TOLERANCE),
            Err(MeshError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn unit_cube_hexahedron() {
        let cube = unit_cube();
        let v = measure(ShapeTag::Hexahedron, &cube, DEFAULT_TOLERANCE).unwrap();
        assert!((v - 1.0).abs() < EPS);
        let c = centroid(ShapeTag::Hexahedron, &cube).unwrap();
        for x in c {
            assert!((x - 0.5).abs() < EPS);
        }
        assert_eq!(min_length(ShapeTag::Hexahedron, &cube).unwrap(), 1.0);
    }

    #[test]
    fn stretched_hexahedron() {
        let cube: Vec<Point> = unit_cube()
            .into_iter()
            .map(|p| [2.0 * p[0], 3.0 * p[1], 0.5 * p[2]])
            .collect();
        let v = measure(ShapeTag::Hexahedron, &cube, DEFAULT_TOLERANCE).unwrap();
        assert!((v - 3.0).abs() < EPS);
        assert_eq!(min_length(ShapeTag::Hexahedron, &cube).unwrap(), 0.5);
    }

    #[test]
    fn wrong_vertex_count() {
        let pts = [[0.0; 3]; 4];
        assert!(matches!(
            centroid(ShapeTag::Triangle, &pts),
            Err(MeshError::ArityMismatch { .. })
        ));
        assert!(min_length(ShapeTag::Hexahedron, &pts).is_err());
    }

    #[test]
    fn lifted_vertex_hexahedron() {
        let mut cube = unit_cube();
        cube[6] = [1.0, 1.0, 1.2];
        let v = measure(ShapeTag::Hexahedron, &cube, DEFAULT_TOLERANCE).unwrap();
        assert!((v - 1.05).abs() < EPS);
        let c = centroid(ShapeTag::Hexahedron, &cube).unwrap();
        assert!((c[0] - 0.32 / 0.63).abs() < EPS);
        assert!((c[1] - c[0]).abs() < EPS);
        assert!(c[2] > 0.5);
    }

    #[test]
    fn hexahedron_volume_ignores_local_numbering() {
        let mut cube = unit_cube();
        cube[6] = [1.1, 0.9, 1.3];
        let v = signed_measure(ShapeTag::Hexahedron, &cube).unwrap();
        // same cell, bottom face starting at another vertex
        let rotated: Vec<Point> = [1, 2, 3, 0, 5, 6, 7, 4].iter().map(|&i| cube[i]).collect();
        let w = signed_measure(ShapeTag::Hexahedron, &rotated).unwrap();
        assert!((v - w).abs() < EPS);
    }

    #[test]
    fn tetrahedra_tile_the_cube() {
        let cube = unit_cube();
        let tets = tetrahedra(ShapeTag::Hexahedron, &cube);
        assert_eq!(tets.len(), 24);
        for [a, b, c, d] in tets {
            assert!((signed_volume(a, b, c, d) - 1.0 / 24.0).abs() < EPS);
        }
    }
}
