use std::fmt;

use super::id::VertexId;

/// An edge between two vertices of an undirected graph.
///
/// The value itself remembers the order of its endpoints, so
/// `Edge::new(0, 1) != Edge::new(1, 0)`. Graphs decide membership by the
/// [canonical key](Edge::key) instead, which treats both orders as the same
/// edge.
///
/// ```
/// use incidence_graph::core::Edge;
///
/// let e = Edge::new(2, 0);
///
/// assert_ne!(e, e.reversed());
/// assert_eq!(e.key(), e.reversed().key());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
}

impl Edge {
    pub fn new(source: impl Into<VertexId>, target: impl Into<VertexId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// Returns the order-insensitive identity of the edge.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source, self.target)
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.source == vertex || self.target == vertex
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoint opposite to `vertex`.
    ///
    /// For a self-loop, this is the vertex itself. Returns `None` if `vertex`
    /// is not an endpoint.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.target == vertex {
            Some(self.source)
        } else if self.source == vertex {
            Some(self.target)
        } else {
            None
        }
    }

    /// Maps both endpoints through the renumbering caused by removing vertex
    /// `removed`. Returns `None` if the edge touches the removed vertex.
    pub(crate) fn shifted_after_removal(&self, removed: VertexId) -> Option<Self> {
        Some(Self {
            source: self.source.shifted_after_removal(removed)?,
            target: self.target.shifted_after_removal(removed)?,
        })
    }
}

impl<S, T> From<(S, T)> for Edge
where
    S: Into<VertexId>,
    T: Into<VertexId>,
{
    fn from((source, target): (S, T)) -> Self {
        Self::new(source, target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// Canonical identity of an undirected edge: its endpoints ordered so that
/// the smaller index comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(VertexId, VertexId);

impl EdgeKey {
    pub fn new(u: VertexId, v: VertexId) -> Self {
        if u <= v {
            Self(u, v)
        } else {
            Self(v, u)
        }
    }

    pub fn lower(&self) -> VertexId {
        self.0
    }

    pub fn upper(&self) -> VertexId {
        self.1
    }

    pub fn to_edge(self) -> Edge {
        Edge {
            source: self.0,
            target: self.1,
        }
    }
}

impl From<Edge> for EdgeKey {
    fn from(edge: Edge) -> Self {
        edge.key()
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.0, self.1)
    }
}
