//! Shape tags for cells.
//!
//! The tag drives dispatch for every per-shape operation: local sub-entity
//! tables, bound-entity tables and geometry. The vertex ordering each tag
//! assumes is documented in [`crate::topology::cells`].

use std::fmt;

use crate::mesh_error::MeshError;

/// Closed catalogue of supported cell shapes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ShapeTag {
    /// 2D simplex.
    Triangle,
    /// 2D tensor-product cell.
    Quadrilateral,
    /// Convex 2D polygon with `n` vertices.
    Polygon(u8),
    /// 3D simplex.
    Tetrahedron,
    /// 3D tensor-product cell.
    Hexahedron,
}

impl ShapeTag {
    /// Topological dimension of the cell.
    pub fn dimension(self) -> usize {
        match self {
            ShapeTag::Triangle | ShapeTag::Quadrilateral | ShapeTag::Polygon(_) => 2,
            ShapeTag::Tetrahedron | ShapeTag::Hexahedron => 3,
        }
    }

    /// Number of vertices a cell of this shape references.
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeTag::Triangle => 3,
            ShapeTag::Quadrilateral => 4,
            ShapeTag::Polygon(n) => n as usize,
            ShapeTag::Tetrahedron => 4,
            ShapeTag::Hexahedron => 8,
        }
    }

    /// Number of edges of this shape.
    pub fn edge_count(self) -> usize {
        match self {
            ShapeTag::Triangle | ShapeTag::Quadrilateral | ShapeTag::Polygon(_) => {
                self.vertex_count()
            }
            ShapeTag::Tetrahedron => 6,
            ShapeTag::Hexahedron => 12,
        }
    }

    /// Number of 2D faces of a 3D shape (zero for 2D shapes).
    pub fn face_count(self) -> usize {
        match self {
            ShapeTag::Tetrahedron => 4,
            ShapeTag::Hexahedron => 6,
            _ => 0,
        }
    }

    /// Number of local entities of dimension `dim` below the cell.
    pub fn entity_count(self, dim: usize) -> Option<usize> {
        match dim {
            0 => Some(self.vertex_count()),
            1 => Some(self.edge_count()),
            2 if self.dimension() == 3 => Some(self.face_count()),
            _ => None,
        }
    }

    /// Fails with [`MeshError::ArityMismatch`] unless `found` vertices fit the shape.
    pub fn check_vertex_count(self, found: usize) -> Result<(), MeshError> {
        if let ShapeTag::Polygon(n) = self {
            if n < 3 {
                return Err(MeshError::ArityMismatch {
                    shape: self,
                    expected: 3,
                    found: n as usize,
                });
            }
        }
        let expected = self.vertex_count();
        if found != expected {
            return Err(MeshError::ArityMismatch {
                shape: self,
                expected,
                found,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeTag::Triangle => f.write_str("triangle"),
            ShapeTag::Quadrilateral => f.write_str("quadrilateral"),
            ShapeTag::Polygon(n) => write!(f, "polygon({n})"),
            ShapeTag::Tetrahedron => f.write_str("tetrahedron"),
            ShapeTag::Hexahedron => f.write_str("hexahedron"),
        }
    }
}
