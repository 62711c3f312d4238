//! Mesh configuration.
//!
//! The dimension, domain count and degeneracy tolerance are carried by an
//! explicit [`MeshConfig`] value handed to [`MeshTopology::new`]. Nothing is
//! stored in process-wide state.
//!
//! [`MeshTopology::new`]: crate::mesh::MeshTopology::new

use crate::geometry::shapes::DEFAULT_TOLERANCE;
use crate::mesh_error::MeshError;
use crate::topology::domain::Domain;
use crate::topology::shape::ShapeTag;

/// Dimension-level configuration of a mesh.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeshConfig {
    /// Spatial and topological dimension of the cells (2 or 3).
    pub dimension: usize,
    /// Number of entity domains (primal and dual).
    pub num_domains: usize,
    /// Relative tolerance for degenerate-cell detection.
    pub tolerance: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self::two_d()
    }
}

impl MeshConfig {
    /// Configuration for a `dimension`-D mesh; only 2 and 3 are supported.
    pub fn new(dimension: usize) -> Result<Self, MeshError> {
        match dimension {
            2 => Ok(Self::two_d()),
            3 => Ok(Self::three_d()),
            d => Err(MeshError::NotImplemented(format!("{d}-dimensional meshes"))),
        }
    }

    pub fn two_d() -> Self {
        Self {
            dimension: 2,
            num_domains: Domain::COUNT,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn three_d() -> Self {
        Self {
            dimension: 3,
            num_domains: Domain::COUNT,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Whether cells of `shape` are registered for this dimension.
    pub fn supports(&self, shape: ShapeTag) -> bool {
        shape.dimension() == self.dimension
    }

    /// Rejects unsupported dimensions, domain counts and tolerances.
    pub fn validate(&self) -> Result<(), MeshError> {
        Self::new(self.dimension)?;
        if self.num_domains != Domain::COUNT {
            return Err(MeshError::NotImplemented(format!(
                "meshes with {} domains",
                self.num_domains
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MeshError::InvalidConfig(format!(
                "degeneracy tolerance {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
