//! Vertex identifiers.
//!
//! A vertex is identified solely by its position in the dense index space
//! `0..n` of the graph it belongs to. There is no identity that survives a
//! removal: removing vertex `k` shifts every vertex with a higher index down
//! by one. Callers must not keep vertex IDs across a
//! [`remove_vertex`](crate::core::GraphMut::remove_vertex).

use std::{fmt, ops::Range};

/// The position of a vertex in the dense index space of a graph.
///
/// `VertexId` converts from and into `usize`, so plain integers can be used
/// wherever an ID is expected:
///
/// ```
/// use incidence_graph::core::id::VertexId;
///
/// let v = VertexId::from(3);
/// assert_eq!(v.as_usize(), 3);
/// assert_eq!(v.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// Returns the ID this vertex gets after vertex `removed` is taken out of
    /// the graph, or `None` if this is the removed vertex itself.
    pub fn shifted_after_removal(&self, removed: VertexId) -> Option<VertexId> {
        match self.0.cmp(&removed.0) {
            std::cmp::Ordering::Less => Some(*self),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self(self.0 - 1)),
        }
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Iterator over the vertex IDs of a graph in increasing order.
#[derive(Debug, Clone)]
pub struct VertexIds {
    range: Range<usize>,
}

impl VertexIds {
    pub(crate) fn new(count: usize) -> Self {
        Self { range: 0..count }
    }
}

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for VertexIds {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(VertexId)
    }
}

impl ExactSizeIterator for VertexIds {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_after_removal() {
        let removed = VertexId::new(2);

        assert_eq!(
            VertexId::new(1).shifted_after_removal(removed),
            Some(VertexId::new(1))
        );
        assert_eq!(VertexId::new(2).shifted_after_removal(removed), None);
        assert_eq!(
            VertexId::new(5).shifted_after_removal(removed),
            Some(VertexId::new(4))
        );
    }

    #[test]
    fn vertex_ids_are_dense() {
        let ids = VertexIds::new(4).collect::<Vec<_>>();
        assert_eq!(ids, (0..4).map(VertexId::from).collect::<Vec<_>>());
        assert_eq!(VertexIds::new(0).len(), 0);
    }
}
