//! MeshError: unified error type for ale-topology public APIs
//!
//! Every failure during topology construction is fatal to the run: there is
//! no partial topology. Errors raised while processing a specific cell are
//! wrapped in [`MeshError::InCell`] so the offending cell is always reported.

use thiserror::Error;

use crate::topology::domain::Domain;
use crate::topology::point::PointId;
use crate::topology::shape::ShapeTag;

/// Unified error type for ale-topology operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Attempted to construct a PointId with a zero value (invalid).
    #[error("PointId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidPointId,
    /// Wrong number of vertices (or resolved sub-entities) for a shape.
    #[error("{shape}: expected {expected} entities, got {found}")]
    ArityMismatch {
        shape: ShapeTag,
        expected: usize,
        found: usize,
    },
    /// A cell lists the same vertex more than once.
    #[error("{shape}: vertex `{vertex}` appears more than once")]
    RepeatedVertex { shape: ShapeTag, vertex: PointId },
    /// Requested sub-entity dimension does not exist for this shape.
    #[error("{shape}: cannot create sub-entities of dimension {dim}")]
    UnsupportedDimension { shape: ShapeTag, dim: usize },
    /// Bound entities are only generated from the primal into the dual domain.
    #[error("no bound entities from {from:?} to {to:?}")]
    UnsupportedDomain { from: Domain, to: Domain },
    /// Capability that does not exist (shape, bound dimension, mesh dimension).
    #[error("not implemented: {0}")]
    NotImplemented(String),
    /// Configuration value outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Near-zero measure: collinear or coplanar vertices.
    #[error("{shape}: degenerate geometry (measure = {measure:e})")]
    DegenerateGeometry { shape: ShapeTag, measure: f64 },
    /// Negative measure: vertex order does not follow the canonical winding.
    #[error("{shape}: inverted geometry (measure = {measure:e})")]
    InvertedGeometry { shape: ShapeTag, measure: f64 },
    /// Wedge sub-volumes do not tile the cell.
    #[error("wedges cover {wedge_sum:e} but the cell measures {cell_measure:e}")]
    PartitionMismatch { cell_measure: f64, wedge_sum: f64 },
    /// A referenced point does not exist in the queried domain.
    #[error("point `{0}` is not part of the mesh")]
    MissingPoint(PointId),
    /// Error raised while processing one cell.
    #[error("cell {cell}: {source}")]
    InCell {
        cell: PointId,
        #[source]
        source: Box<MeshError>,
    },
    /// Coordinate slice length disagrees with the mesh dimension.
    #[error("coordinate dimension mismatch: expected {expected}, got {found}")]
    CoordinateDimension { expected: usize, found: usize },
    #[error("mesh topology already initialized")]
    AlreadyInitialized,
    #[error("mesh topology not initialized; call `init` first")]
    NotInitialized,
}

impl MeshError {
    /// Attach the identity of the cell being processed.
    pub fn in_cell(self, cell: PointId) -> Self {
        match self {
            already @ MeshError::InCell { .. } => already,
            other => MeshError::InCell {
                cell,
                source: Box::new(other),
            },
        }
    }

    /// Strip any [`MeshError::InCell`] wrapper.
    pub fn root(&self) -> &MeshError {
        match self {
            MeshError::InCell { source, .. } => source.root(),
            other => other,
        }
    }
}
