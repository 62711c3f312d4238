//! Integer tag sets attached to mesh points.
//!
//! Tags mark boundary groups, materials or any other integer annotation a
//! solver wants to select points by. A point carries any number of tags.

use std::collections::{BTreeSet, HashMap};

use crate::topology::point::PointId;

/// Tag value.
pub type Tag = u32;

/// Per-point tag sets.
#[derive(Clone, Debug, Default)]
pub struct TagSet {
    tags: HashMap<PointId, BTreeSet<Tag>>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tag` to `point`. Returns `false` if it was already present.
    pub fn tag(&mut self, point: PointId, tag: Tag) -> bool {
        self.tags.entry(point).or_default().insert(tag)
    }

    pub fn has_tag(&self, point: PointId, tag: Tag) -> bool {
        self.tags.get(&point).is_some_and(|set| set.contains(&tag))
    }

    /// Tags of `point`, ascending.
    pub fn tags(&self, point: PointId) -> impl Iterator<Item = Tag> + '_ {
        self.tags.get(&point).into_iter().flatten().copied()
    }

    /// All points carrying `tag`, sorted.
    pub fn points_with_tag(&self, tag: Tag) -> Vec<PointId> {
        let mut points: Vec<_> = self
            .tags
            .iter()
            .filter_map(|(&p, set)| set.contains(&tag).then_some(p))
            .collect();
        points.sort_unstable();
        points
    }

    /// Removes `tag` from every point. Returns the number of points touched.
    pub fn clear_tag(&mut self, tag: Tag) -> usize {
        let mut removed = 0;
        self.tags.retain(|_, set| {
            if set.remove(&tag) {
                removed += 1;
            }
            !set.is_empty()
        });
        removed
    }
}
