use std::collections::{BTreeSet, HashSet};

use crate::{
    algo::{cycle, ConnectedComponents, ShortestPaths},
    graph::WeightedIncidenceGraph,
    visit::{bfs, dfs, VisitResult},
};

use super::{
    base::{ensure_edge, ensure_vertex, GraphMut, Neighbors, Weighted},
    edge::Edge,
    error::{Error, Operation},
    id::VertexId,
    Result,
};

/// The complete interface of an undirected graph.
///
/// Everything beyond the capability traits is provided, so implementing
/// this trait is a one-liner for any type implementing [`GraphMut`] and
/// [`Neighbors`].
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
/// graph.add_edge(Edge::new(a, b)).unwrap();
/// graph.add_edge(Edge::new(b, c)).unwrap();
///
/// assert!(graph.is_adjacent(c, b).unwrap());
/// assert!(!graph.is_cyclic());
///
/// graph.add_edge(Edge::new(c, a)).unwrap();
/// assert!(graph.is_cyclic());
/// ```
pub trait Graph: GraphMut + Neighbors {
    /// Returns the set of live vertices.
    fn vertices(&self) -> BTreeSet<VertexId> {
        self.vertex_ids().collect()
    }

    /// Returns the number of live vertices.
    fn size(&self) -> usize {
        self.vertex_count()
    }

    /// Returns `true` if the edge is present in either endpoint order.
    ///
    /// Fails if either endpoint is not a live vertex.
    fn contains_edge(&self, edge: &Edge) -> Result<bool> {
        ensure_edge(self, edge)?;
        Ok(self.edge_column(edge).is_some())
    }

    /// Returns every vertex sharing an edge with `vertex`.
    ///
    /// Fails with [`Error::VertexNotFound`] if the vertex is not live.
    fn adjacent(&self, vertex: VertexId) -> Result<BTreeSet<VertexId>> {
        if !self.contains_vertex(vertex) {
            return Err(Error::VertexNotFound(vertex));
        }

        Ok(self.neighbors(vertex))
    }

    /// Returns `true` if an edge connects `u` and `v`.
    fn is_adjacent(&self, u: VertexId, v: VertexId) -> Result<bool> {
        ensure_vertex(self, u)?;
        ensure_vertex(self, v)?;
        Ok(self.edge_column(&Edge::new(u, v)).is_some())
    }

    fn is_cyclic(&self) -> bool {
        cycle::is_cyclic(self)
    }

    /// Always `false`, an undirected graph is never a DAG.
    fn is_dag(&self) -> bool {
        false
    }

    fn bfs_tree(&self, source: VertexId) -> Result<VisitResult> {
        bfs::bfs_tree(self, source)
    }

    fn dfs_tree(&self, source: VertexId) -> Result<VisitResult> {
        dfs::dfs_tree(self, source)
    }

    fn dfs_tree_recursive(&self, source: VertexId) -> Result<VisitResult> {
        dfs::dfs_tree_recursive(self, source)
    }

    fn dfs_forest(&self, source: VertexId) -> Result<VisitResult> {
        dfs::dfs_forest(self, source)
    }

    fn dfs_forest_ordered(&self, roots: &[VertexId]) -> Result<VisitResult> {
        dfs::dfs_forest_ordered(self, roots)
    }

    /// Not supported on undirected graphs.
    fn topological_sort(&self) -> Result<Vec<VertexId>> {
        Err(Error::Unsupported(Operation::TopologicalSort))
    }

    /// Not supported on undirected graphs, see
    /// [`connected_components`](Graph::connected_components).
    fn strongly_connected_components(&self) -> Result<HashSet<BTreeSet<VertexId>>> {
        Err(Error::Unsupported(Operation::StronglyConnectedComponents))
    }

    fn connected_components(&self) -> ConnectedComponents {
        ConnectedComponents::on(self).run()
    }
}

/// A [`Graph`] with per-edge weights and shortest path algorithms.
pub trait WeightedGraph: Graph + Weighted {
    /// Runs Dijkstra's algorithm from `source` and returns the shortest-path
    /// tree, where each edge `(predecessor, vertex)` carries the cumulative
    /// distance of `vertex` from the source.
    fn dijkstra_shortest_paths(&self, source: VertexId) -> Result<WeightedIncidenceGraph> {
        ShortestPaths::on(self).run(source)?.to_tree()
    }

    fn bellman_ford_shortest_paths(&self, _source: VertexId) -> Result<WeightedIncidenceGraph> {
        Err(Error::Unsupported(Operation::BellmanFord))
    }

    fn floyd_warshall_shortest_paths(&self) -> Result<WeightedIncidenceGraph> {
        Err(Error::Unsupported(Operation::FloydWarshall))
    }

    fn prim_mst(&self, _source: VertexId) -> Result<WeightedIncidenceGraph> {
        Err(Error::Unsupported(Operation::PrimMst))
    }

    fn kruskal_mst(&self) -> Result<WeightedIncidenceGraph> {
        Err(Error::Unsupported(Operation::KruskalMst))
    }
}
