use std::{
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
    slice,
};

use crate::{
    core::{
        base::ensure_edge, Edge, EdgeSet, Error, Graph, GraphBase, GraphMut, Neighbors, Result,
        VertexId,
    },
    storage::IncidenceMatrix,
};

/// Undirected graph stored as an incidence matrix.
///
/// Vertices are the dense indices `0..n`. Edges are kept in insertion order
/// and each one owns the matrix column at its position. An edge and its
/// reverse are the same edge, adding it twice is a no-op.
///
/// # Examples
///
/// ```
/// use incidence_graph::{graph::IncidenceGraph, prelude::*};
///
/// let mut graph = IncidenceGraph::new();
///
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
/// let c = graph.add_vertex();
///
/// assert_eq!(graph.add_edge(Edge::new(a, b)), Ok(true));
/// assert_eq!(graph.add_edge(Edge::new(b, a)), Ok(false));
/// graph.add_edge(Edge::new(b, c)).unwrap();
///
/// // Removing `a` shifts `b` and `c` down by one.
/// graph.remove_vertex(a).unwrap();
///
/// assert_eq!(graph.size(), 2);
/// assert!(graph.contains_edge(&Edge::new(0, 1)).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IncidenceGraph {
    edges: Vec<Edge>,
    matrix: IncidenceMatrix,
}

impl IncidenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edge_capacity),
            matrix: IncidenceMatrix::with_capacity(vertex_capacity),
        }
    }

    /// Creates a graph with `vertex_count` vertices and the given edges.
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new();

        for _ in 0..vertex_count {
            graph.add_vertex();
        }

        for edge in edges {
            graph.add_edge(edge.into())?;
        }

        Ok(graph)
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    pub fn matrix(&self) -> &IncidenceMatrix {
        &self.matrix
    }

    /// Drops every edge incident to `removed`, renumbers the endpoints above
    /// it and rebuilds the matrix with one row less.
    ///
    /// This is the only place where vertex indices are shifted.
    fn compact(&mut self, removed: VertexId) {
        let vertex_count = self.vertex_count() - 1;

        self.edges = self
            .edges
            .iter()
            .filter_map(|edge| edge.shifted_after_removal(removed))
            .collect();

        self.matrix = IncidenceMatrix::from_edges(vertex_count, &self.edges);

        tracing::trace!(
            vertex = %removed,
            vertex_count,
            edge_count = self.edges.len(),
            "incidence matrix compacted"
        );
    }
}

impl GraphBase for IncidenceGraph {
    fn vertex_count(&self) -> usize {
        self.matrix.row_count()
    }
}

impl Neighbors for IncidenceGraph {
    fn neighbors(&self, vertex: VertexId) -> BTreeSet<VertexId> {
        self.matrix
            .incident_columns(vertex)
            .filter_map(|column| self.edges[column].other(vertex))
            .collect()
    }
}

impl EdgeSet for IncidenceGraph {
    type EdgesIter<'a> = slice::Iter<'a, Edge>;

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        self.edges.iter()
    }
}

impl GraphMut for IncidenceGraph {
    fn add_vertex(&mut self) -> VertexId {
        let vertex = VertexId::from(self.vertex_count());
        self.matrix.push_row();

        tracing::trace!(%vertex, "vertex added");
        vertex
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        if !self.contains_vertex(vertex) {
            return Err(Error::VertexNotFound(vertex));
        }

        self.compact(vertex);

        tracing::trace!(%vertex, "vertex removed");
        Ok(())
    }

    fn add_edge(&mut self, edge: Edge) -> Result<bool> {
        ensure_edge(&*self, &edge)?;

        if self.edge_column(&edge).is_some() {
            return Ok(false);
        }

        self.matrix.push_column(&edge);
        self.edges.push(edge);

        tracing::trace!(%edge, "edge added");
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &Edge) -> Result<()> {
        ensure_edge(&*self, edge)?;

        let column = self.edge_column(edge).ok_or(Error::EdgeNotFound(*edge))?;

        self.edges.remove(column);
        self.matrix.remove_column(column);

        tracing::trace!(%edge, column, "edge removed");
        Ok(())
    }

    fn clear(&mut self) {
        self.edges.clear();
        self.matrix.clear();
    }
}

impl Graph for IncidenceGraph {}

/// Two graphs are equal if they have the same number of vertices and the same
/// edges, regardless of endpoint order and insertion order.
impl PartialEq for IncidenceGraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count() && self.edge_set() == other.edge_set()
    }
}

impl Eq for IncidenceGraph {}

impl Hash for IncidenceGraph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex_count().hash(state);
        self.edge_set().hash(state);
    }
}

impl fmt::Display for IncidenceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "incidence matrix:")?;
        fmt::Display::fmt(&self.matrix, f)
    }
}
