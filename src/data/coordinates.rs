//! Vertex coordinate storage.
//!
//! Coordinates are stored in one flat buffer with a fixed number of
//! components per point; each point maps to the offset of its slice.

use std::collections::HashMap;

use crate::geometry::vector::Point;
use crate::mesh_error::MeshError;
use crate::topology::point::PointId;

/// Coordinate storage with an attached spatial dimension.
#[derive(Clone, Debug)]
pub struct Coordinates {
    dimension: usize,
    offsets: HashMap<PointId, usize>,
    values: Vec<f64>,
}

impl Coordinates {
    /// Empty storage for points with `dimension` components (2 or 3).
    pub fn try_new(dimension: usize) -> Result<Self, MeshError> {
        if !(2..=3).contains(&dimension) {
            return Err(MeshError::NotImplemented(format!(
                "{dimension}-dimensional coordinates"
            )));
        }
        Ok(Self {
            dimension,
            offsets: HashMap::new(),
            values: Vec::new(),
        })
    }

    /// Returns the spatial dimension per point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: PointId) -> bool {
        self.offsets.contains_key(&p)
    }

    /// Adds (or overwrites) the coordinates of point `p`.
    pub fn try_add_point(&mut self, p: PointId, xyz: &[f64]) -> Result<(), MeshError> {
        self.check_len(xyz.len())?;
        match self.offsets.get(&p) {
            Some(&offset) => {
                self.values[offset..offset + self.dimension].copy_from_slice(xyz);
            }
            None => {
                self.offsets.insert(p, self.values.len());
                self.values.extend_from_slice(xyz);
            }
        }
        Ok(())
    }

    /// Read-only view of the coordinate slice for a point `p`.
    pub fn try_restrict(&self, p: PointId) -> Result<&[f64], MeshError> {
        let offset = *self.offsets.get(&p).ok_or(MeshError::MissingPoint(p))?;
        Ok(&self.values[offset..offset + self.dimension])
    }

    /// Mutable view of the coordinate slice for a point `p`.
    pub fn try_restrict_mut(&mut self, p: PointId) -> Result<&mut [f64], MeshError> {
        let offset = *self.offsets.get(&p).ok_or(MeshError::MissingPoint(p))?;
        Ok(&mut self.values[offset..offset + self.dimension])
    }

    /// Position of `p` lifted to 3D (`z = 0` in 2D).
    pub fn point(&self, p: PointId) -> Result<Point, MeshError> {
        let slice = self.try_restrict(p)?;
        let mut xyz = [0.0; 3];
        xyz[..slice.len()].copy_from_slice(slice);
        Ok(xyz)
    }

    /// Positions of several points, in order.
    pub fn gather(&self, points: &[PointId]) -> Result<Vec<Point>, MeshError> {
        points.iter().map(|&p| self.point(p)).collect()
    }

    fn check_len(&self, found: usize) -> Result<(), MeshError> {
        if found != self.dimension {
            return Err(MeshError::CoordinateDimension {
                expected: self.dimension,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(i: u64) -> PointId {
        PointId::new(i).unwrap()
    }

    #[test]
    fn add_restrict_and_lift() {
        let mut c = Coordinates::try_new(2).unwrap();
        c.try_add_point(pid(1), &[1.0, 2.0]).unwrap();
        c.try_add_point(pid(2), &[3.0, 4.0]).unwrap();
        assert_eq!(c.try_restrict(pid(2)).unwrap(), &[3.0, 4.0]);
        assert_eq!(c.point(pid(1)).unwrap(), [1.0, 2.0, 0.0]);
        c.try_restrict_mut(pid(1)).unwrap()[0] = -1.0;
        assert_eq!(c.gather(&[pid(1)]).unwrap(), vec![[-1.0, 2.0, 0.0]]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn overwrite_keeps_slot() {
        let mut c = Coordinates::try_new(3).unwrap();
        c.try_add_point(pid(5), &[0.0, 0.0, 0.0]).unwrap();
        c.try_add_point(pid(5), &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.point(pid(5)).unwrap(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn errors() {
        assert!(Coordinates::try_new(1).is_err());
        let mut c = Coordinates::try_new(2).unwrap();
        assert_eq!(
            c.try_add_point(pid(1), &[1.0, 2.0, 3.0]),
            Err(MeshError::CoordinateDimension {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(c.try_restrict(pid(9)), Err(MeshError::MissingPoint(pid(9))));
    }
}
