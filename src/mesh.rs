//! `MeshTopology`: dimension-bound entity store for a staggered mesh.
//!
//! The store owns vertex coordinates and tags, the cells added by the caller
//! and, after [`MeshTopology::init`], every derived entity:
//!
//! - primal: vertices, edges, faces (3D only), cells;
//! - dual: corners and wedges.
//!
//! Derived entities come from the per-shape generation protocol in
//! [`crate::topology::cells`]. Edges and faces shared by neighbouring cells
//! are merged on their sorted vertex key, so each one exists exactly once.
//! Primal and dual ids are drawn from independent counters.
//!
//! ```rust
//! use ale_topology::prelude::*;
//!
//! let mut mesh = MeshTopology::new(MeshConfig::two_d())?;
//! let v: Vec<PointId> = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
//!     .iter()
//!     .map(|xy| mesh.add_vertex(xy))
//!     .collect::<Result<_, _>>()?;
//! mesh.add_cell(ShapeTag::Triangle, &[v[0], v[1], v[2]])?;
//! mesh.add_cell(ShapeTag::Triangle, &[v[0], v[2], v[3]])?;
//! mesh.init()?;
//!
//! assert_eq!(mesh.edges().len(), 5);
//! assert_eq!(mesh.corners().len(), 6);
//! assert_eq!(mesh.wedges().len(), 12);
//! mesh.validate()?;
//! # Ok::<(), MeshError>(())
//! ```

use std::collections::HashMap;

use itertools::Itertools;

use crate::config::MeshConfig;
use crate::data::coordinates::Coordinates;
use crate::data::tags::TagSet;
use crate::geometry::dual::{half_edge, wedge_area, wedge_volume};
use crate::geometry::vector::mean;
use crate::mesh_error::MeshError;
use crate::topology::cells::{CORNER_DIM, Cell, WEDGE_DIM};
use crate::topology::connectivity::{Connectivity, EntitySet};
use crate::topology::domain::Domain;
use crate::topology::entity::{CellView, EdgeView, VertexView, VertexViewMut};
use crate::topology::point::{IdAllocator, PointId};
use crate::topology::shape::ShapeTag;
use crate::topology::table::EntityTable;

/// Relative tolerance of the wedge partition check in [`MeshTopology::validate`].
pub const PARTITION_TOLERANCE: f64 = 1e-9;

/// Mesh entity store bound to one [`MeshConfig`].
#[derive(Clone, Debug)]
pub struct MeshTopology {
    pub(crate) config: MeshConfig,
    ids: [IdAllocator; Domain::COUNT],
    pub(crate) coordinates: Coordinates,
    pub(crate) tags: TagSet,
    pub(crate) vertices: EntitySet,
    pub(crate) cells: EntitySet,
    pub(crate) cell_list: Vec<Cell>,
    pub(crate) edges: EntitySet,
    edge_lookup: HashMap<[PointId; 2], PointId>,
    pub(crate) faces: EntitySet,
    pub(crate) cell_edges: Connectivity,
    pub(crate) cell_faces: Connectivity,
    pub(crate) edge_cells: Connectivity,
    pub(crate) face_cells: Connectivity,
    pub(crate) corners: EntitySet,
    pub(crate) wedges: EntitySet,
    pub(crate) cell_corners: Connectivity,
    pub(crate) cell_wedges: Connectivity,
    corner_wedges: Connectivity,
    wedge_cell: Vec<usize>,
    /// Whether the cell winding runs from the wedge's vertex along its edge.
    wedge_after: Vec<bool>,
    pub(crate) vertex_boundary: Vec<bool>,
    pub(crate) edge_boundary: Vec<bool>,
    initialized: bool,
}

/// Phase 1 output of one cell: local edges and faces as vertex tuples.
struct LocalEntities {
    edges: EntityTable<PointId>,
    faces: EntityTable<PointId>,
}

/// Phase 2 output of one cell: its corner and wedge records.
struct BoundEntities {
    corners: EntityTable<PointId>,
    wedges: EntityTable<PointId>,
}

impl MeshTopology {
    /// Empty mesh for a validated configuration.
    pub fn new(config: MeshConfig) -> Result<Self, MeshError> {
        config.validate()?;
        Ok(Self {
            config,
            ids: Default::default(),
            coordinates: Coordinates::try_new(config.dimension)?,
            tags: TagSet::new(),
            vertices: EntitySet::default(),
            cells: EntitySet::default(),
            cell_list: Vec::new(),
            edges: EntitySet::default(),
            edge_lookup: HashMap::new(),
            faces: EntitySet::default(),
            cell_edges: Connectivity::default(),
            cell_faces: Connectivity::default(),
            edge_cells: Connectivity::default(),
            face_cells: Connectivity::default(),
            corners: EntitySet::default(),
            wedges: EntitySet::default(),
            cell_corners: Connectivity::default(),
            cell_wedges: Connectivity::default(),
            corner_wedges: Connectivity::default(),
            wedge_cell: Vec::new(),
            wedge_after: Vec::new(),
            vertex_boundary: Vec::new(),
            edge_boundary: Vec::new(),
            initialized: false,
        })
    }

    #[inline]
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    #[inline]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Adds a vertex with `dimension` coordinates and returns its handle.
    pub fn add_vertex(&mut self, xyz: &[f64]) -> Result<PointId, MeshError> {
        self.ensure_building()?;
        if xyz.len() != self.config.dimension {
            return Err(MeshError::CoordinateDimension {
                expected: self.config.dimension,
                found: xyz.len(),
            });
        }
        let id = self.ids[Domain::Primal.index()].allocate()?;
        self.coordinates.try_add_point(id, xyz)?;
        self.vertices.insert(id, &[]);
        Ok(id)
    }

    /// Adds a cell of shape `shape` over existing vertices, in canonical order.
    pub fn add_cell(&mut self, shape: ShapeTag, vertices: &[PointId]) -> Result<PointId, MeshError> {
        self.ensure_building()?;
        if !self.config.supports(shape) {
            return Err(MeshError::NotImplemented(format!(
                "{shape} cells in a {}D mesh",
                self.config.dimension
            )));
        }
        if let Some(&missing) = vertices.iter().find(|&&v| !self.vertices.contains(v)) {
            return Err(MeshError::MissingPoint(missing));
        }
        let cell = Cell::new(shape, vertices.to_vec())?;
        let id = self.ids[Domain::Primal.index()].allocate()?;
        self.cells.insert(id, vertices);
        self.cell_list.push(cell);
        Ok(id)
    }

    /// Derives edges, faces, corners and wedges, then classifies the boundary.
    ///
    /// Any failure is reported with the offending cell and leaves the mesh
    /// unusable; there is no partial topology.
    pub fn init(&mut self) -> Result<(), MeshError> {
        self.ensure_building()?;
        let dim = self.config.dimension;

        let local = map_cells(&self.cell_list, self.cells.ids(), |cell| {
            let edges = cell.cell.create_entities(1)?;
            let faces = if dim == 3 {
                cell.cell.create_entities(2)?
            } else {
                EntityTable::default()
            };
            Ok(LocalEntities { edges, faces })
        })?;
        self.merge_local(local)?;
        log::debug!(
            "generated {} edges and {} faces from {} cells",
            self.edges.len(),
            self.faces.len(),
            self.cells.len()
        );

        let cell_edges = &self.cell_edges;
        let cell_faces = &self.cell_faces;
        let bound = map_cells(&self.cell_list, self.cells.ids(), |cell| {
            let (Some(edges), Some(faces)) = (cell_edges.row(cell.index), cell_faces.row(cell.index))
            else {
                return Err(MeshError::NotInitialized);
            };
            let ids = [cell.cell.vertices(), edges, faces];
            let levels = &ids[..cell.cell.dimension()];
            Ok(BoundEntities {
                corners: cell.cell.create_bound_entities(
                    Domain::Primal,
                    Domain::Dual,
                    CORNER_DIM,
                    levels,
                )?,
                wedges: cell.cell.create_bound_entities(
                    Domain::Primal,
                    Domain::Dual,
                    WEDGE_DIM,
                    levels,
                )?,
            })
        })?;
        self.merge_bound(bound)?;
        log::debug!(
            "generated {} corners and {} wedges",
            self.corners.len(),
            self.wedges.len()
        );

        self.classify_boundary()?;
        self.initialized = true;
        Ok(())
    }

    /// Serial merge of per-cell edge and face tuples into shared entities.
    fn merge_local(&mut self, local: Vec<LocalEntities>) -> Result<(), MeshError> {
        let primal = Domain::Primal.index();
        let mut face_keys: HashMap<Vec<PointId>, PointId> = HashMap::new();
        let mut row = Vec::new();
        for (generated, &cell) in local.iter().zip(self.cells.ids()) {
            row.clear();
            for record in generated.edges.records() {
                let key = edge_key(record[0], record[1]);
                let id = match self.edge_lookup.get(&key) {
                    Some(&id) => id,
                    None => {
                        let id = self.ids[primal].allocate().map_err(|e| e.in_cell(cell))?;
                        self.edges.insert(id, record);
                        self.edge_lookup.insert(key, id);
                        id
                    }
                };
                row.push(id);
            }
            self.cell_edges.push(&row);

            row.clear();
            for record in generated.faces.records() {
                let mut key = record.to_vec();
                key.sort_unstable();
                let id = match face_keys.get(&key) {
                    Some(&id) => id,
                    None => {
                        let id = self.ids[primal].allocate().map_err(|e| e.in_cell(cell))?;
                        self.faces.insert(id, record);
                        face_keys.insert(key, id);
                        id
                    }
                };
                row.push(id);
            }
            self.cell_faces.push(&row);
        }
        Ok(())
    }

    /// Assigns dual ids to each cell's corners then wedges.
    fn merge_bound(&mut self, bound: Vec<BoundEntities>) -> Result<(), MeshError> {
        let dual = Domain::Dual.index();
        let mut corner_row = Vec::new();
        let mut wedge_row = Vec::new();
        for (cell_index, (generated, &cell)) in bound.iter().zip(self.cells.ids()).enumerate() {
            log::trace!(
                "cell {cell}: {} corners, {} wedges",
                generated.corners.len(),
                generated.wedges.len()
            );
            corner_row.clear();
            for record in generated.corners.records() {
                let id = self.ids[dual].allocate().map_err(|e| e.in_cell(cell))?;
                self.corners.insert(id, record);
                corner_row.push(id);
            }
            wedge_row.clear();
            // wedges come in pairs: edge after the vertex, then edge before
            for (k, record) in generated.wedges.records().enumerate() {
                let id = self.ids[dual].allocate().map_err(|e| e.in_cell(cell))?;
                let index = self.wedges.insert(id, record);
                self.wedge_cell.push(cell_index);
                self.wedge_after.push(k % 2 == 0);
                wedge_row.push((id, index));
            }
            for &corner in &corner_row {
                let vertex = self.corners.down(corner)?[0];
                let owned: Vec<PointId> = wedge_row
                    .iter()
                    .filter(|&&(_, i)| self.wedges.down_at(i).is_some_and(|w| w[0] == vertex))
                    .map(|&(id, _)| id)
                    .collect();
                self.corner_wedges.push(&owned);
            }
            self.cell_corners.push(&corner_row);
            let ids: Vec<PointId> = wedge_row.iter().map(|&(id, _)| id).collect();
            self.cell_wedges.push(&ids);
        }
        Ok(())
    }

    /// A side (edge in 2D, face in 3D) with a single incident cell is on the
    /// boundary, and so are its vertices and edges.
    fn classify_boundary(&mut self) -> Result<(), MeshError> {
        self.edge_cells = self
            .cell_edges
            .transpose(self.cells.ids(), self.edges.index_map())?;
        self.face_cells = self
            .cell_faces
            .transpose(self.cells.ids(), self.faces.index_map())?;

        self.vertex_boundary = vec![false; self.vertices.len()];
        self.edge_boundary = vec![false; self.edges.len()];
        let (sides, side_cells) = if self.config.dimension == 2 {
            (&self.edges, &self.edge_cells)
        } else {
            (&self.faces, &self.face_cells)
        };
        let mut boundary_sides = 0;
        for (i, cells) in side_cells.rows().enumerate() {
            if cells.len() != 1 {
                continue;
            }
            boundary_sides += 1;
            let Some(side) = sides.down_at(i) else {
                continue;
            };
            for &v in side {
                if let Some(vi) = self.vertices.index(v) {
                    self.vertex_boundary[vi] = true;
                }
            }
            for (&a, &b) in side.iter().circular_tuple_windows() {
                let edge = self.edge_lookup.get(&edge_key(a, b));
                if let Some(ei) = edge.and_then(|&e| self.edges.index(e)) {
                    self.edge_boundary[ei] = true;
                }
            }
        }
        log::debug!(
            "{boundary_sides} boundary sides, {} boundary vertices",
            self.vertex_boundary.iter().filter(|&&b| b).count()
        );
        Ok(())
    }

    /// The edge joining `a` and `b`, in either orientation.
    pub fn edge_between(&self, a: PointId, b: PointId) -> Option<PointId> {
        self.edge_lookup.get(&edge_key(a, b)).copied()
    }

    fn ensure_building(&self) -> Result<(), MeshError> {
        if self.initialized {
            Err(MeshError::AlreadyInitialized)
        } else {
            Ok(())
        }
    }

    fn ensure_initialized(&self) -> Result<(), MeshError> {
        if self.initialized {
            Ok(())
        } else {
            Err(MeshError::NotInitialized)
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[PointId] {
        self.vertices.ids()
    }

    #[inline]
    pub fn edges(&self) -> &[PointId] {
        self.edges.ids()
    }

    /// Faces; empty for 2D meshes, where cells bound themselves by edges.
    #[inline]
    pub fn faces(&self) -> &[PointId] {
        self.faces.ids()
    }

    #[inline]
    pub fn cells(&self) -> &[PointId] {
        self.cells.ids()
    }

    #[inline]
    pub fn corners(&self) -> &[PointId] {
        self.corners.ids()
    }

    #[inline]
    pub fn wedges(&self) -> &[PointId] {
        self.wedges.ids()
    }

    fn entity_set(&self, domain: Domain, dim: usize) -> Option<&EntitySet> {
        match (domain, dim) {
            (Domain::Primal, 0) => Some(&self.vertices),
            (Domain::Primal, 1) => Some(&self.edges),
            (Domain::Primal, d) if d == self.config.dimension => Some(&self.cells),
            (Domain::Primal, 2) => Some(&self.faces),
            (Domain::Dual, CORNER_DIM) => Some(&self.corners),
            (Domain::Dual, WEDGE_DIM) => Some(&self.wedges),
            _ => None,
        }
    }

    /// Number of entities of dimension `dim` in `domain`.
    pub fn num_entities(&self, domain: Domain, dim: usize) -> usize {
        self.entity_set(domain, dim).map_or(0, EntitySet::len)
    }

    /// Downward connectivity of entity `id` of dimension `dim` in `domain`.
    ///
    /// Edges and faces list their vertices, cells their vertices in canonical
    /// order, corners and wedges their generated records.
    pub fn connectivity(&self, domain: Domain, dim: usize, id: PointId) -> Result<&[PointId], MeshError> {
        self.entity_set(domain, dim)
            .ok_or_else(|| {
                MeshError::NotImplemented(format!("{domain} entities of dimension {dim}"))
            })?
            .down(id)
    }

    /// Cells sharing edge `edge`: one on the boundary, two or more inside.
    pub fn cells_of_edge(&self, edge: PointId) -> Result<&[PointId], MeshError> {
        self.ensure_initialized()?;
        self.edges
            .index(edge)
            .and_then(|i| self.edge_cells.row(i))
            .ok_or(MeshError::MissingPoint(edge))
    }

    /// Cells sharing face `face` (3D meshes).
    pub fn cells_of_face(&self, face: PointId) -> Result<&[PointId], MeshError> {
        self.ensure_initialized()?;
        self.faces
            .index(face)
            .and_then(|i| self.face_cells.row(i))
            .ok_or(MeshError::MissingPoint(face))
    }

    pub fn vertex(&self, id: PointId) -> Result<VertexView<'_>, MeshError> {
        self.vertices.index(id).ok_or(MeshError::MissingPoint(id))?;
        Ok(VertexView::new(self, id))
    }

    pub fn vertex_mut(&mut self, id: PointId) -> Result<VertexViewMut<'_>, MeshError> {
        self.vertices.index(id).ok_or(MeshError::MissingPoint(id))?;
        Ok(VertexViewMut::new(self, id))
    }

    pub fn edge(&self, id: PointId) -> Result<EdgeView<'_>, MeshError> {
        self.edges.index(id).ok_or(MeshError::MissingPoint(id))?;
        Ok(EdgeView::new(self, id))
    }

    pub fn cell(&self, id: PointId) -> Result<CellView<'_>, MeshError> {
        self.cells.index(id).ok_or(MeshError::MissingPoint(id))?;
        Ok(CellView::new(self, id))
    }

    pub(crate) fn cell_at(&self, id: PointId) -> Result<(usize, &Cell), MeshError> {
        let i = self.cells.index(id).ok_or(MeshError::MissingPoint(id))?;
        Ok((i, &self.cell_list[i]))
    }

    /// Area (2D) or volume (3D) of wedge `id`.
    pub fn wedge_measure(&self, id: PointId) -> Result<f64, MeshError> {
        self.ensure_initialized()?;
        let i = self.wedges.index(id).ok_or(MeshError::MissingPoint(id))?;
        let cell_index = self.wedge_cell[i];
        let cell = &self.cell_list[cell_index];
        let cell_id = self.cells.ids()[cell_index];
        self.wedge_measure_in(i, cell).map_err(|e| e.in_cell(cell_id))
    }

    fn wedge_measure_in(&self, i: usize, cell: &Cell) -> Result<f64, MeshError> {
        let record = self.wedges.down_at(i).ok_or(MeshError::NotInitialized)?;
        let centroid = cell.centroid(&self.coordinates)?;
        let vertex = record[0];
        let other = match self.edges.down(record[1])? {
            &[a, b] if a == vertex => b,
            &[a, _] => a,
            ends => {
                return Err(MeshError::NotImplemented(format!(
                    "edge with {} vertices",
                    ends.len()
                )));
            }
        };
        let half = half_edge(
            self.coordinates.point(vertex)?,
            self.coordinates.point(other)?,
            self.wedge_after[i],
        );
        match record.get(2) {
            None => Ok(wedge_area(half, centroid)),
            Some(&face) => {
                let face_centroid = mean(&self.coordinates.gather(self.faces.down(face)?)?);
                Ok(wedge_volume(half, face_centroid, centroid))
            }
        }
    }

    /// Area (2D) or volume (3D) of corner `id`: the sum of its wedges.
    pub fn corner_measure(&self, id: PointId) -> Result<f64, MeshError> {
        self.ensure_initialized()?;
        let i = self.corners.index(id).ok_or(MeshError::MissingPoint(id))?;
        self.corner_wedges
            .row(i)
            .ok_or(MeshError::MissingPoint(id))?
            .iter()
            .map(|&w| self.wedge_measure(w))
            .sum()
    }

    /// Wedges belonging to corner `id`.
    pub fn wedges_of_corner(&self, id: PointId) -> Result<&[PointId], MeshError> {
        self.ensure_initialized()?;
        self.corners
            .index(id)
            .and_then(|i| self.corner_wedges.row(i))
            .ok_or(MeshError::MissingPoint(id))
    }

    /// Checks every cell's measure and that its wedges tile it.
    ///
    /// Fails on the first degenerate, inverted or badly partitioned cell. A
    /// wedge with non-positive measure (centroid outside it, as behind a
    /// reflex vertex) is reported as inverted.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.ensure_initialized()?;
        for (i, (cell, &id)) in self.cell_list.iter().zip(self.cells.ids()).enumerate() {
            let check = || -> Result<(), MeshError> {
                let measure = cell.measure(&self.coordinates, self.config.tolerance)?;
                let mut wedge_sum = 0.0;
                for &w in self.cell_wedges.row(i).unwrap_or(&[]) {
                    let wi = self.wedges.index(w).ok_or(MeshError::MissingPoint(w))?;
                    let w = self.wedge_measure_in(wi, cell)?;
                    if w <= 0.0 {
                        return Err(MeshError::InvertedGeometry {
                            shape: cell.shape_tag(),
                            measure: w,
                        });
                    }
                    wedge_sum += w;
                }
                if (wedge_sum - measure).abs() > PARTITION_TOLERANCE * measure {
                    return Err(MeshError::PartitionMismatch {
                        cell_measure: measure,
                        wedge_sum,
                    });
                }
                Ok(())
            };
            if let Err(e) = check() {
                log::warn!("cell {id} failed validation: {e}");
                return Err(e.in_cell(id));
            }
        }
        Ok(())
    }
}

fn edge_key(a: PointId, b: PointId) -> [PointId; 2] {
    if a <= b { [a, b] } else { [b, a] }
}

/// A cell together with its position in the store.
struct IndexedCell<'a> {
    index: usize,
    cell: &'a Cell,
}

/// Runs `f` on every cell, in parallel with the `rayon` feature, keeping
/// cell order in the output and tagging errors with the cell id.
fn map_cells<T, F>(cells: &[Cell], ids: &[PointId], f: F) -> Result<Vec<T>, MeshError>
where
    T: Send,
    F: Fn(IndexedCell<'_>) -> Result<T, MeshError> + Sync + Send,
{
    let run = |(index, (cell, &id)): (usize, (&Cell, &PointId))| {
        log::trace!("generating entities of cell {id} ({})", cell.shape_tag());
        f(IndexedCell { index, cell }).map_err(|e| e.in_cell(id))
    };
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        cells.par_iter().zip(ids.par_iter()).enumerate().map(run).collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        cells.iter().zip(ids).enumerate().map(run).collect()
    }
}
