//! Flattened connectivity tables returned by the generation operations.
//!
//! A table is a flat id buffer plus a parallel list of per-entity arities:
//! record `k` occupies the `arities[k]` slots following the records before
//! it. This is the exchange format between a cell variant and the topology
//! store that merges its output.

use std::slice;

/// Flattened per-entity connectivity with its arity list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityTable<P> {
    ids: Vec<P>,
    arities: Vec<usize>,
}

impl<P> Default for EntityTable<P> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            arities: Vec::new(),
        }
    }
}

impl<P: Copy> EntityTable<P> {
    /// Empty table sized for `records` entities of `arity` ids each.
    pub fn with_capacity(records: usize, arity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(records * arity),
            arities: Vec::with_capacity(records),
        }
    }

    /// Appends one entity record.
    pub fn push(&mut self, record: &[P]) {
        self.ids.extend_from_slice(record);
        self.arities.push(record.len());
    }

    /// Number of entity records.
    #[inline]
    pub fn len(&self) -> usize {
        self.arities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arities.is_empty()
    }

    /// The flattened id buffer.
    #[inline]
    pub fn ids(&self) -> &[P] {
        &self.ids
    }

    /// Per-entity slot counts, parallel to [`EntityTable::records`].
    #[inline]
    pub fn arities(&self) -> &[usize] {
        &self.arities
    }

    /// Walks the buffer one record at a time.
    pub fn records(&self) -> Records<'_, P> {
        Records {
            ids: &self.ids,
            arities: self.arities.iter(),
        }
    }

    /// The `k`-th record, if any.
    pub fn record(&self, k: usize) -> Option<&[P]> {
        self.records().nth(k)
    }

    pub fn into_parts(self) -> (Vec<P>, Vec<usize>) {
        (self.ids, self.arities)
    }
}

/// Iterator over the records of an [`EntityTable`].
#[derive(Clone, Debug)]
pub struct Records<'a, P> {
    ids: &'a [P],
    arities: slice::Iter<'a, usize>,
}

impl<'a, P> Iterator for Records<'a, P> {
    type Item = &'a [P];

    fn next(&mut self) -> Option<Self::Item> {
        let n = *self.arities.next()?;
        let (head, tail) = self.ids.split_at(n);
        self.ids = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.arities.size_hint()
    }
}

impl<P> ExactSizeIterator for Records<'_, P> {}
