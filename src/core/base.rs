use std::collections::BTreeSet;

use super::{
    edge::{Edge, EdgeKey},
    error::Error,
    id::{VertexId, VertexIds},
    Result,
};

/// Base trait of every graph: the dense vertex index space.
pub trait GraphBase {
    /// Returns the number of live vertices.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex IDs in increasing order.
    fn vertex_ids(&self) -> VertexIds {
        VertexIds::new(self.vertex_count())
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.as_usize() < self.vertex_count()
    }

    /// Always `false`, the graphs in this crate are undirected.
    fn is_directed(&self) -> bool {
        false
    }
}

/// Adjacency queries.
pub trait Neighbors: GraphBase {
    /// Returns the vertices sharing an edge with `vertex`, in increasing
    /// order.
    ///
    /// This is the unchecked primitive used by the algorithms. It returns an
    /// empty set if the vertex is not in the graph; use
    /// [`Graph::adjacent`](super::Graph::adjacent) for the checked variant.
    fn neighbors(&self, vertex: VertexId) -> BTreeSet<VertexId>;
}

/// Read access to the insertion-ordered edge sequence.
pub trait EdgeSet: GraphBase {
    type EdgesIter<'a>: Iterator<Item = &'a Edge>
    where
        Self: 'a;

    fn edge_count(&self) -> usize;

    /// Returns an iterator over the edges in insertion order, which is also
    /// the order of the incidence matrix columns.
    fn edges(&self) -> Self::EdgesIter<'_>;

    /// Returns the column of the edge matching `edge` in either endpoint
    /// order, or `None` if there is no such edge.
    fn edge_column(&self, edge: &Edge) -> Option<usize> {
        let key = edge.key();
        self.edges().position(|e| e.key() == key)
    }

    /// Returns the set of canonical edge keys.
    fn edge_set(&self) -> BTreeSet<EdgeKey> {
        self.edges().map(Edge::key).collect()
    }
}

/// Structural mutation.
///
/// A failed mutation leaves the graph untouched.
pub trait GraphMut: EdgeSet {
    /// Appends a vertex at the next free index and returns it.
    fn add_vertex(&mut self) -> VertexId;

    /// Removes the vertex together with all its edges. Every vertex with a
    /// higher index is shifted down by one.
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()>;

    /// Adds the edge unless it is already present in either endpoint order.
    ///
    /// Returns `true` if the edge was added and `false` if it was already
    /// there, in which case nothing changes.
    fn add_edge(&mut self, edge: Edge) -> Result<bool>;

    /// Removes the edge, given in either endpoint order.
    fn remove_edge(&mut self, edge: &Edge) -> Result<()>;

    /// Removes all vertices and edges.
    fn clear(&mut self);
}

/// Per-edge weights.
pub trait Weighted: EdgeSet {
    fn edge_weight(&self, edge: &Edge) -> Result<f64>;

    fn set_edge_weight(&mut self, edge: &Edge, weight: f64) -> Result<()>;
}

pub(crate) fn ensure_vertex<G: GraphBase + ?Sized>(graph: &G, vertex: VertexId) -> Result<()> {
    if graph.contains_vertex(vertex) {
        Ok(())
    } else {
        Err(Error::InvalidVertex(vertex))
    }
}

pub(crate) fn ensure_edge<G: GraphBase + ?Sized>(graph: &G, edge: &Edge) -> Result<()> {
    if graph.contains_vertex(edge.source()) && graph.contains_vertex(edge.target()) {
        Ok(())
    } else {
        Err(Error::InvalidEdge(*edge))
    }
}
