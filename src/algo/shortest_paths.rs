//! Find [single source shortest paths] and their distances in a weighted
//! graph using [Dijkstra's algorithm].
//!
//! Edge weights must not be negative. A negative weight met during the search
//! fails with [`Error::NegativeWeight`](crate::core::Error::NegativeWeight).
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use incidence_graph::{algo::ShortestPaths, graph::WeightedIncidenceGraph, prelude::*};
//!
//! let graph = WeightedIncidenceGraph::from_edges(
//!     4,
//!     [((0, 1), 7.0), ((0, 2), 2.0), ((2, 1), 3.0), ((1, 3), 1.0)],
//! )
//! .unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&graph).run(VertexId::from(0)).unwrap();
//!
//! assert_eq!(shortest_paths.dist(VertexId::from(3)), Some(6.0));
//! assert_eq!(
//!     shortest_paths.reconstruct(VertexId::from(3)).collect::<Vec<_>>(),
//!     vec![VertexId::from(1), VertexId::from(2), VertexId::from(0)]
//! );
//! ```

use std::{cmp::Ordering, ops::Index};

use rustc_hash::FxHashMap;

use crate::{
    core::{Edge, GraphMut, Result, VertexId},
    graph::WeightedIncidenceGraph,
};

mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    vertex_count: usize,
    dist: FxHashMap<VertexId, f64>,
    pred: FxHashMap<VertexId, VertexId>,
}

impl ShortestPaths {
    /// Source vertex where the search was started.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if the vertex is not reachable.
    pub fn dist(&self, to: VertexId) -> Option<f64> {
        self.dist.get(&to).copied()
    }

    /// Returns the predecessor of the vertex on its shortest path.
    pub fn pred(&self, vertex: VertexId) -> Option<VertexId> {
        self.pred.get(&vertex).copied()
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order. The given vertex itself is not
    /// included.
    pub fn reconstruct(&self, to: VertexId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Builds the shortest-path tree.
    ///
    /// The tree has the same vertices as the searched graph and one edge
    /// `(pred, v)` for every reached vertex `v` other than the source,
    /// weighted by the distance of `v` from the source.
    pub fn to_tree(&self) -> Result<WeightedIncidenceGraph> {
        let mut tree = WeightedIncidenceGraph::with_capacity(self.vertex_count, self.pred.len());
        for _ in 0..self.vertex_count {
            tree.add_vertex();
        }

        let mut edges = self.pred.iter().collect::<Vec<_>>();
        edges.sort_unstable();

        for (&vertex, &pred) in edges {
            tree.add_edge_weighted(Edge::new(pred, vertex), self.dist[&vertex])?;
        }

        Ok(tree)
    }
}

impl Index<VertexId> for ShortestPaths {
    type Output = f64;

    fn index(&self, index: VertexId) -> &Self::Output {
        &self.dist[&index]
    }
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: VertexId,
    pred: &'a FxHashMap<VertexId, VertexId>,
}

impl Iterator for PathReconstruction<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).copied()?;
        Some(self.curr)
    }
}

/// Priority queue entry ordered by distance.
#[derive(Debug, Clone, Copy)]
struct Queued {
    dist: f64,
    vertex: VertexId,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}
