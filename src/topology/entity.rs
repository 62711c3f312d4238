//! Borrowed entity views handed to the numerical layer.
//!
//! A view is a handle plus a reference to the owning [`MeshTopology`]; it
//! holds no data of its own. Geometry is recomputed on every call, so after
//! moving vertices any centroid or measure a caller kept is stale.

use crate::data::tags::Tag;
use crate::geometry::vector::{Point, distance, midpoint};
use crate::mesh::MeshTopology;
use crate::mesh_error::MeshError;
use crate::topology::connectivity::Connectivity;
use crate::topology::point::PointId;
use crate::topology::shape::ShapeTag;

/// Read-only view of a vertex.
#[derive(Clone, Copy, Debug)]
pub struct VertexView<'a> {
    mesh: &'a MeshTopology,
    id: PointId,
}

impl<'a> VertexView<'a> {
    pub(crate) fn new(mesh: &'a MeshTopology, id: PointId) -> Self {
        Self { mesh, id }
    }

    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }

    /// Coordinates as stored, `dimension` components.
    pub fn coordinates(&self) -> Result<&'a [f64], MeshError> {
        self.mesh.coordinates.try_restrict(self.id)
    }

    /// Position lifted to 3D.
    pub fn point(&self) -> Result<Point, MeshError> {
        self.mesh.coordinates.point(self.id)
    }

    /// Whether the vertex lies on the mesh boundary; `false` before `init`.
    pub fn is_boundary(&self) -> bool {
        self.mesh
            .vertices
            .index(self.id)
            .and_then(|i| self.mesh.vertex_boundary.get(i).copied())
            .unwrap_or(false)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.mesh.tags.has_tag(self.id, tag)
    }

    /// Tags of this vertex, ascending.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + 'a {
        self.mesh.tags.tags(self.id)
    }

    /// Points the view at another mesh holding the same handle.
    pub fn rebind(&mut self, mesh: &'a MeshTopology) -> Result<(), MeshError> {
        if !mesh.vertices.contains(self.id) {
            return Err(MeshError::MissingPoint(self.id));
        }
        self.mesh = mesh;
        Ok(())
    }
}

/// Mutable view of a vertex: coordinate updates and tagging.
#[derive(Debug)]
pub struct VertexViewMut<'a> {
    mesh: &'a mut MeshTopology,
    id: PointId,
}

impl<'a> VertexViewMut<'a> {
    pub(crate) fn new(mesh: &'a mut MeshTopology, id: PointId) -> Self {
        Self { mesh, id }
    }

    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }

    pub fn coordinates_mut(&mut self) -> Result<&mut [f64], MeshError> {
        self.mesh.coordinates.try_restrict_mut(self.id)
    }

    /// Moves the vertex; `xyz` must have `dimension` components.
    pub fn set_coordinates(&mut self, xyz: &[f64]) -> Result<(), MeshError> {
        let slot = self.coordinates_mut()?;
        if slot.len() != xyz.len() {
            return Err(MeshError::CoordinateDimension {
                expected: slot.len(),
                found: xyz.len(),
            });
        }
        slot.copy_from_slice(xyz);
        Ok(())
    }

    /// Adds `tag`; returns `false` if the vertex already carried it.
    pub fn tag(&mut self, tag: Tag) -> bool {
        self.mesh.tags.tag(self.id, tag)
    }

    pub fn as_view(&self) -> VertexView<'_> {
        VertexView::new(&*self.mesh, self.id)
    }
}

/// Read-only view of an edge.
#[derive(Clone, Copy, Debug)]
pub struct EdgeView<'a> {
    mesh: &'a MeshTopology,
    id: PointId,
}

impl<'a> EdgeView<'a> {
    pub(crate) fn new(mesh: &'a MeshTopology, id: PointId) -> Self {
        Self { mesh, id }
    }

    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }

    /// End points in the orientation of the first cell that produced the edge.
    pub fn vertices(&self) -> Result<[PointId; 2], MeshError> {
        match self.mesh.edges.down(self.id)? {
            &[a, b] => Ok([a, b]),
            other => Err(MeshError::NotImplemented(format!(
                "edge with {} vertices",
                other.len()
            ))),
        }
    }

    fn end_points(&self) -> Result<[Point; 2], MeshError> {
        let [a, b] = self.vertices()?;
        Ok([self.mesh.coordinates.point(a)?, self.mesh.coordinates.point(b)?])
    }

    pub fn length(&self) -> Result<f64, MeshError> {
        let [a, b] = self.end_points()?;
        Ok(distance(a, b))
    }

    pub fn midpoint(&self) -> Result<Point, MeshError> {
        let [a, b] = self.end_points()?;
        Ok(midpoint(a, b))
    }

    pub fn is_boundary(&self) -> bool {
        self.mesh
            .edges
            .index(self.id)
            .and_then(|i| self.mesh.edge_boundary.get(i).copied())
            .unwrap_or(false)
    }

    /// Cells sharing this edge.
    pub fn cells(&self) -> Result<&'a [PointId], MeshError> {
        self.mesh.cells_of_edge(self.id)
    }

    pub fn rebind(&mut self, mesh: &'a MeshTopology) -> Result<(), MeshError> {
        if mesh.edges.index(self.id).is_none() {
            return Err(MeshError::MissingPoint(self.id));
        }
        self.mesh = mesh;
        Ok(())
    }
}

/// Read-only view of a cell and its derived entities.
#[derive(Clone, Copy, Debug)]
pub struct CellView<'a> {
    mesh: &'a MeshTopology,
    id: PointId,
}

impl<'a> CellView<'a> {
    pub(crate) fn new(mesh: &'a MeshTopology, id: PointId) -> Self {
        Self { mesh, id }
    }

    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }

    pub fn shape_tag(&self) -> Result<ShapeTag, MeshError> {
        Ok(self.mesh.cell_at(self.id)?.1.shape_tag())
    }

    /// Vertices in canonical order.
    pub fn vertices(&self) -> Result<&'a [PointId], MeshError> {
        Ok(self.mesh.cell_at(self.id)?.1.vertices())
    }

    /// Edges in local table order; empty before `init`.
    pub fn edges(&self) -> Result<&'a [PointId], MeshError> {
        self.row(|m| &m.cell_edges)
    }

    /// Faces in local table order (3D).
    pub fn faces(&self) -> Result<&'a [PointId], MeshError> {
        self.row(|m| &m.cell_faces)
    }

    pub fn corners(&self) -> Result<&'a [PointId], MeshError> {
        self.row(|m| &m.cell_corners)
    }

    pub fn wedges(&self) -> Result<&'a [PointId], MeshError> {
        self.row(|m| &m.cell_wedges)
    }

    fn row(
        &self,
        table: impl Fn(&'a MeshTopology) -> &'a Connectivity,
    ) -> Result<&'a [PointId], MeshError> {
        let (i, _) = self.mesh.cell_at(self.id)?;
        Ok(table(self.mesh).row(i).unwrap_or(&[]))
    }

    pub fn centroid(&self) -> Result<Point, MeshError> {
        let (_, cell) = self.mesh.cell_at(self.id)?;
        cell.centroid(&self.mesh.coordinates)
            .map_err(|e| e.in_cell(self.id))
    }

    /// Area (2D) or volume (3D), checked against the mesh tolerance.
    pub fn measure(&self) -> Result<f64, MeshError> {
        let (_, cell) = self.mesh.cell_at(self.id)?;
        cell.measure(&self.mesh.coordinates, self.mesh.config.tolerance)
            .map_err(|e| e.in_cell(self.id))
    }

    /// Area of a 2D cell.
    pub fn area(&self) -> Result<f64, MeshError> {
        let (_, cell) = self.mesh.cell_at(self.id)?;
        cell.area(&self.mesh.coordinates, self.mesh.config.tolerance)
            .map_err(|e| e.in_cell(self.id))
    }

    /// Volume of a 3D cell.
    pub fn volume(&self) -> Result<f64, MeshError> {
        let (_, cell) = self.mesh.cell_at(self.id)?;
        cell.volume(&self.mesh.coordinates, self.mesh.config.tolerance)
            .map_err(|e| e.in_cell(self.id))
    }

    /// Shortest edge length; the scale used by time step limiters.
    pub fn min_length(&self) -> Result<f64, MeshError> {
        let (_, cell) = self.mesh.cell_at(self.id)?;
        cell.min_length(&self.mesh.coordinates)
            .map_err(|e| e.in_cell(self.id))
    }
}
