//! Topology of a staggered mesh.
//!
//! This module provides the handles, shape tags and tables the mesh store is
//! built from. It includes:
//! - `PointId` handles and the primal/dual `Domain`s they live in
//! - the closed `ShapeTag` catalogue and per-shape generation rules
//! - flattened `EntityTable`s and CSR `Connectivity`
//! - borrowed entity views used by the numerical layer
//!
//! Most users will go through [`crate::mesh::MeshTopology`] and the views it
//! hands out; the generation functions in [`cells`] are usable on their own.

pub mod cells;
pub mod connectivity;
pub mod domain;
pub mod entity;
pub mod point;
pub mod shape;
pub mod table;

pub use cells::{CORNER_DIM, Cell, WEDGE_DIM, create_bound_entities, create_entities};
pub use domain::Domain;
pub use point::PointId;
pub use shape::ShapeTag;
pub use table::EntityTable;
