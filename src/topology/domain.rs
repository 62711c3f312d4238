//! Entity domains: the primal mesh and the dual (bound) mesh.

use std::fmt;

/// Partition of the entity graph. Each domain has its own id space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Domain {
    /// Vertices, edges, faces and cells.
    Primal = 0,
    /// Corners and wedges.
    Dual = 1,
}

impl Domain {
    /// Number of domains a mesh carries.
    pub const COUNT: usize = 2;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Domain::Primal),
            1 => Some(Domain::Dual),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Primal => f.write_str("primal"),
            Domain::Dual => f.write_str("dual"),
        }
    }
}
