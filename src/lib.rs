//! # ale-topology
//!
//! ale-topology is the mesh connectivity core of a staggered arbitrary
//! Lagrangian-Eulerian (ALE) hydrodynamics code. Given vertices and the cells
//! that reference them, it derives edges and faces plus the dual entities
//! (corners and wedges) a staggered scheme uses to partition cell volume.
//!
//! ## Features
//! - Triangles, quadrilaterals and convex polygons in 2D; tetrahedra and
//!   hexahedra in 3D, dispatched through the closed [`ShapeTag`] enum
//! - Per-shape sub-entity and bound-entity generation returning flat
//!   [`EntityTable`]s
//! - Centroid, area/volume with degeneracy detection and minimum edge length
//! - A [`MeshTopology`] store that merges shared edges and faces, builds
//!   corners and wedges and classifies the boundary
//! - Optional parallel per-cell generation with the `rayon` feature
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! ale-topology = "0.3"
//! # features = ["rayon"]
//! ```
//!
//! [`ShapeTag`]: topology::shape::ShapeTag
//! [`EntityTable`]: topology::table::EntityTable
//! [`MeshTopology`]: mesh::MeshTopology

pub mod config;
pub mod data;
pub mod geometry;
pub mod inputs;
pub mod mesh;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::config::MeshConfig;
    pub use crate::data::coordinates::Coordinates;
    pub use crate::data::tags::{Tag, TagSet};
    pub use crate::geometry::vector::Point;
    pub use crate::inputs::SolverInputs;
    pub use crate::mesh::MeshTopology;
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::cells::{CORNER_DIM, Cell, WEDGE_DIM};
    pub use crate::topology::domain::Domain;
    pub use crate::topology::entity::{CellView, EdgeView, VertexView, VertexViewMut};
    pub use crate::topology::point::PointId;
    pub use crate::topology::shape::ShapeTag;
    pub use crate::topology::table::EntityTable;
}
