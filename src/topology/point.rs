//! `PointId`: a strong, zero-cost handle for mesh entities
//!
//! Every vertex, edge, face, cell, corner and wedge is referred to by an
//! opaque identifier. `PointId` wraps a nonzero `u64`; 0 is reserved as an
//! invalid or sentinel value. Ids are only unique within one
//! [`Domain`](crate::topology::domain::Domain).

use std::{fmt, num::NonZeroU64};

use crate::mesh_error::MeshError;

/// Handle of a mesh entity inside its domain.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct PointId(NonZeroU64);

impl PointId {
    /// Creates a new `PointId` from a raw `u64` value.
    ///
    /// Returns [`MeshError::InvalidPointId`] if `raw == 0`.
    ///
    /// ```rust
    /// # use ale_topology::topology::point::PointId;
    /// let p = PointId::new(1)?;
    /// assert_eq!(p.get(), 1);
    /// # Ok::<(), ale_topology::mesh_error::MeshError>(())
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, MeshError> {
        NonZeroU64::new(raw)
            .map(PointId)
            .ok_or(MeshError::InvalidPointId)
    }

    /// Returns the inner `u64` value of this `PointId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointId").field(&self.get()).finish()
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Monotonic id source for one domain.
#[derive(Clone, Debug)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub(crate) fn allocate(&mut self) -> Result<PointId, MeshError> {
        let id = PointId::new(self.next)?;
        self.next = self
            .next
            .checked_add(1)
            .ok_or(MeshError::InvalidPointId)?;
        Ok(id)
    }
}
