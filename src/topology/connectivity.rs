//! Compressed (CSR) connectivity between entity kinds.
//!
//! Rows are appended in entity order and never modified afterwards. The
//! upward relation (e.g. edge → cells) is built once by transposing the
//! downward one with a degree count and prefix sum.

use std::collections::HashMap;

use crate::mesh_error::MeshError;
use crate::topology::point::PointId;

/// Row-compressed adjacency lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connectivity {
    offsets: Vec<usize>,
    targets: Vec<PointId>,
}

impl Default for Connectivity {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            targets: Vec::new(),
        }
    }
}

impl Connectivity {
    /// Appends a row and returns its index.
    pub fn push(&mut self, row: &[PointId]) -> usize {
        self.targets.extend_from_slice(row);
        self.offsets.push(self.targets.len());
        self.offsets.len() - 2
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn row(&self, i: usize) -> Option<&[PointId]> {
        let start = *self.offsets.get(i)?;
        let end = *self.offsets.get(i + 1)?;
        Some(&self.targets[start..end])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[PointId]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.targets[w[0]..w[1]])
    }

    /// Upward relation: row `t` lists the `sources` whose rows contain target `t`.
    ///
    /// `sources[i]` names row `i`; `target_index` maps each target to its row
    /// in the result.
    pub fn transpose(
        &self,
        sources: &[PointId],
        target_index: &HashMap<PointId, usize>,
    ) -> Result<Connectivity, MeshError> {
        let n = target_index.len();
        let mut degree = vec![0usize; n];
        for row in self.rows() {
            for t in row {
                let ti = *target_index.get(t).ok_or(MeshError::MissingPoint(*t))?;
                degree[ti] += 1;
            }
        }
        let mut offsets = vec![0usize; n + 1];
        for i in 0..n {
            offsets[i + 1] = offsets[i] + degree[i];
        }
        let mut write = offsets.clone();
        let mut targets = vec![None; offsets[n]];
        for (row, &src) in self.rows().zip(sources) {
            for t in row {
                let ti = target_index[t];
                targets[write[ti]] = Some(src);
                write[ti] += 1;
            }
        }
        Ok(Connectivity {
            offsets,
            targets: targets.into_iter().flatten().collect(),
        })
    }
}

/// Ordered set of entities of one kind with their downward connectivity.
#[derive(Clone, Debug, Default)]
pub struct EntitySet {
    ids: Vec<PointId>,
    index_of: HashMap<PointId, usize>,
    down: Connectivity,
}

impl EntitySet {
    pub fn insert(&mut self, id: PointId, down: &[PointId]) -> usize {
        let i = self.down.push(down);
        self.ids.push(id);
        self.index_of.insert(id, i);
        i
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    pub fn ids(&self) -> &[PointId] {
        &self.ids
    }

    #[inline]
    pub fn index(&self, id: PointId) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    #[inline]
    pub fn index_map(&self) -> &HashMap<PointId, usize> {
        &self.index_of
    }

    #[inline]
    pub fn contains(&self, id: PointId) -> bool {
        self.index_of.contains_key(&id)
    }

    /// Downward connectivity of `id`.
    pub fn down(&self, id: PointId) -> Result<&[PointId], MeshError> {
        self.index(id)
            .and_then(|i| self.down.row(i))
            .ok_or(MeshError::MissingPoint(id))
    }

    #[inline]
    pub fn down_at(&self, i: usize) -> Option<&[PointId]> {
        self.down.row(i)
    }

    #[inline]
    pub fn connectivity(&self) -> &Connectivity {
        &self.down
    }
}
