use std::{
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
};

use rustc_hash::FxHashMap;

use crate::core::{
    base::ensure_edge, Edge, EdgeKey, EdgeSet, Error, Graph, GraphBase, GraphMut, Neighbors,
    Result, VertexId, Weighted, WeightedGraph,
};

use super::IncidenceGraph;

/// Weight of a freshly added edge.
pub const DEFAULT_WEIGHT: f64 = 0.0;

/// Undirected incidence-matrix graph with a weight on every edge.
///
/// The structure lives in an inner [`IncidenceGraph`], the weights in a
/// table keyed by the canonical [`EdgeKey`] of each edge. Every mutation is
/// forwarded to the inner graph and mirrored in the table.
///
/// # Examples
///
/// ```
/// use incidence_graph::{graph::WeightedIncidenceGraph, prelude::*};
///
/// let mut graph = WeightedIncidenceGraph::new();
///
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
///
/// let ab = Edge::new(a, b);
/// graph.add_edge(ab).unwrap();
/// assert_eq!(graph.edge_weight(&ab), Ok(0.0));
///
/// graph.set_edge_weight(&ab.reversed(), 40.8).unwrap();
/// assert_eq!(graph.edge_weight(&ab), Ok(40.8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedIncidenceGraph {
    graph: IncidenceGraph,
    weights: FxHashMap<EdgeKey, f64>,
}

impl WeightedIncidenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            graph: IncidenceGraph::with_capacity(vertex_capacity, edge_capacity),
            weights: FxHashMap::default(),
        }
    }

    /// Creates a graph with `vertex_count` vertices and the given weighted
    /// edges.
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (E, f64)>,
        E: Into<Edge>,
    {
        let mut graph = Self::new();

        for _ in 0..vertex_count {
            graph.add_vertex();
        }

        for (edge, weight) in edges {
            graph.add_edge_weighted(edge.into(), weight)?;
        }

        Ok(graph)
    }

    /// Adds the edge with the given weight.
    ///
    /// Like [`add_edge`](GraphMut::add_edge), an edge that is already present
    /// is left untouched, including its weight, and `false` is returned.
    pub fn add_edge_weighted(&mut self, edge: Edge, weight: f64) -> Result<bool> {
        ensure_edge(&*self, &edge)?;
        check_weight(&edge, weight)?;

        let added = self.add_edge(edge)?;
        if added {
            self.weights.insert(edge.key(), weight);
        }

        Ok(added)
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns the underlying unweighted graph.
    pub fn as_unweighted(&self) -> &IncidenceGraph {
        &self.graph
    }

    pub fn into_unweighted(self) -> IncidenceGraph {
        self.graph
    }

    /// Returns an iterator over the edges and their weights in insertion
    /// order.
    pub fn weighted_edges(&self) -> impl Iterator<Item = (&Edge, f64)> + '_ {
        self.graph
            .edges()
            .map(|edge| (edge, self.weight_unchecked(edge)))
    }

    fn weight_unchecked(&self, edge: &Edge) -> f64 {
        self.weights
            .get(&edge.key())
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }
}

fn check_weight(edge: &Edge, weight: f64) -> Result<()> {
    if weight.is_nan() {
        Err(Error::InvalidWeight {
            edge: *edge,
            weight,
        })
    } else {
        Ok(())
    }
}

impl GraphBase for WeightedIncidenceGraph {
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

impl Neighbors for WeightedIncidenceGraph {
    fn neighbors(&self, vertex: VertexId) -> BTreeSet<VertexId> {
        self.graph.neighbors(vertex)
    }
}

impl EdgeSet for WeightedIncidenceGraph {
    type EdgesIter<'a> = <IncidenceGraph as EdgeSet>::EdgesIter<'a>;

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        self.graph.edges()
    }
}

impl GraphMut for WeightedIncidenceGraph {
    fn add_vertex(&mut self) -> VertexId {
        self.graph.add_vertex()
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        // Snapshot the weights of the surviving edges under their identity
        // after the index shift.
        let weights = self
            .graph
            .edges()
            .filter_map(|edge| {
                let shifted = edge.shifted_after_removal(vertex)?;
                Some((shifted.key(), self.weight_unchecked(edge)))
            })
            .collect::<FxHashMap<_, _>>();

        self.graph.remove_vertex(vertex)?;
        self.weights = weights;

        Ok(())
    }

    fn add_edge(&mut self, edge: Edge) -> Result<bool> {
        let added = self.graph.add_edge(edge)?;
        if added {
            self.weights.insert(edge.key(), DEFAULT_WEIGHT);
        }

        Ok(added)
    }

    fn remove_edge(&mut self, edge: &Edge) -> Result<()> {
        self.graph.remove_edge(edge)?;
        self.weights.remove(&edge.key());

        Ok(())
    }

    fn clear(&mut self) {
        self.graph.clear();
        self.weights.clear();
    }
}

impl Weighted for WeightedIncidenceGraph {
    fn edge_weight(&self, edge: &Edge) -> Result<f64> {
        ensure_edge(self, edge)?;

        self.weights
            .get(&edge.key())
            .copied()
            .ok_or(Error::EdgeNotFound(*edge))
    }

    fn set_edge_weight(&mut self, edge: &Edge, weight: f64) -> Result<()> {
        ensure_edge(&*self, edge)?;
        check_weight(edge, weight)?;

        let slot = self
            .weights
            .get_mut(&edge.key())
            .ok_or(Error::EdgeNotFound(*edge))?;
        *slot = weight;

        tracing::trace!(%edge, weight, "edge weight set");
        Ok(())
    }
}

impl Graph for WeightedIncidenceGraph {}

impl WeightedGraph for WeightedIncidenceGraph {}

/// Equal structure (see [`IncidenceGraph`]) and equal weight on every edge.
impl PartialEq for WeightedIncidenceGraph {
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph
            && self
                .weights
                .iter()
                .all(|(key, weight)| other.weights.get(key) == Some(weight))
    }
}

// Weights are never NaN.
impl Eq for WeightedIncidenceGraph {}

/// Hashes only the structure, weights do not participate.
impl Hash for WeightedIncidenceGraph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.graph.hash(state);
    }
}

impl fmt::Display for WeightedIncidenceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "weighted incidence matrix:")?;

        let edges = self.graph.edges().as_slice();
        self.graph
            .matrix()
            .fmt_with(f, |f, _, column, incident| {
                if incident {
                    write!(f, "{}", self.weight_unchecked(&edges[column]))
                } else {
                    f.write_str("-")
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::ErrorKind,
        infra::{proptest::weighted_graph_strategy, testing::check_consistency},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn e(source: usize, target: usize) -> Edge {
        Edge::new(source, target)
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn empty() {
        let graph = WeightedIncidenceGraph::new();

        assert_eq!(graph.size(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn edge_weight() {
        let mut graph = WeightedIncidenceGraph::new();
        graph.add_vertex();
        graph.add_vertex();

        assert_matches!(graph.edge_weight(&e(0, 1)), Err(Error::EdgeNotFound(_)));

        graph.add_edge(e(0, 1)).unwrap();
        graph.set_edge_weight(&e(0, 1), 40.8).unwrap();

        assert_eq!(graph.edge_weight(&e(0, 1)), Ok(40.8));
        assert_eq!(graph.edge_weight(&e(1, 0)), Ok(40.8));
    }

    #[test]
    fn edge_weight_invalid_endpoint() {
        let mut graph = WeightedIncidenceGraph::from_edges(2, [((0, 1), 1.0)]).unwrap();

        assert_eq!(
            graph.edge_weight(&e(0, 2)).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_matches!(
            graph.set_edge_weight(&e(3, 1), 2.0),
            Err(Error::InvalidEdge(_))
        );
        assert_eq!(graph.edge_weight(&e(0, 1)), Ok(1.0));
    }

    #[test]
    fn set_edge_weight_absent_or_nan() {
        let mut graph = WeightedIncidenceGraph::from_edges(3, [((0, 1), 1.0)]).unwrap();

        assert_matches!(
            graph.set_edge_weight(&e(1, 2), 2.0),
            Err(Error::EdgeNotFound(_))
        );
        assert_matches!(
            graph.set_edge_weight(&e(0, 1), f64::NAN),
            Err(Error::InvalidWeight { .. })
        );
        assert_eq!(graph.edge_weight(&e(0, 1)), Ok(1.0));
    }

    #[test]
    fn new_edge_defaults_to_zero() {
        let mut graph = WeightedIncidenceGraph::new();
        graph.add_vertex();
        graph.add_vertex();

        assert_eq!(graph.add_edge(e(1, 0)), Ok(true));
        assert_eq!(graph.edge_weight(&e(0, 1)), Ok(DEFAULT_WEIGHT));
    }

    #[test]
    fn duplicate_edge_keeps_weight() {
        let mut graph = WeightedIncidenceGraph::from_edges(2, [((0, 1), 7.5)]).unwrap();

        assert_eq!(graph.add_edge(e(1, 0)), Ok(false));
        assert_eq!(graph.add_edge_weighted(e(0, 1), 3.0), Ok(false));
        assert_eq!(graph.edge_weight(&e(0, 1)), Ok(7.5));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn readded_edge_does_not_resurrect_weight() {
        let mut graph = WeightedIncidenceGraph::from_edges(2, [((0, 1), 7.5)]).unwrap();

        graph.remove_edge(&e(1, 0)).unwrap();
        assert_eq!(graph.edge_count(), 0);

        graph.add_edge(e(0, 1)).unwrap();
        assert_eq!(graph.edge_weight(&e(0, 1)), Ok(DEFAULT_WEIGHT));
    }

    #[test]
    fn remove_vertex_carries_weights() {
        let mut graph = WeightedIncidenceGraph::from_edges(
            5,
            [
                ((0, 1), 1.0),
                ((1, 2), 2.0),
                ((2, 3), 3.0),
                ((3, 4), 4.0),
                ((4, 0), 5.0),
                ((1, 4), 6.0),
            ],
        )
        .unwrap();

        graph.remove_vertex(v(2)).unwrap();

        assert_eq!(graph.size(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge_weight(&e(0, 1)), Ok(1.0));
        assert_eq!(graph.edge_weight(&e(2, 3)), Ok(4.0));
        assert_eq!(graph.edge_weight(&e(3, 0)), Ok(5.0));
        assert_eq!(graph.edge_weight(&e(1, 3)), Ok(6.0));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_vertex_absent_keeps_weights() {
        let mut graph = WeightedIncidenceGraph::from_edges(2, [((0, 1), 2.0)]).unwrap();

        assert_matches!(graph.remove_vertex(v(2)), Err(Error::VertexNotFound(_)));
        assert_eq!(graph.edge_weight(&e(0, 1)), Ok(2.0));
    }

    #[test]
    fn equality_includes_weights() {
        let lhs = WeightedIncidenceGraph::from_edges(3, [((0, 1), 1.0), ((1, 2), 2.0)]).unwrap();
        let rhs = WeightedIncidenceGraph::from_edges(3, [((2, 1), 2.0), ((1, 0), 1.0)]).unwrap();
        let other =
            WeightedIncidenceGraph::from_edges(3, [((0, 1), 1.0), ((1, 2), 9.0)]).unwrap();

        assert_eq!(lhs, rhs);
        assert_eq!(hash_of(&lhs), hash_of(&rhs));

        assert_ne!(lhs, other);
        assert_eq!(hash_of(&lhs), hash_of(&other));
    }

    #[test]
    fn unsupported_algorithms() {
        let graph = WeightedIncidenceGraph::from_edges(2, [((0, 1), 1.0)]).unwrap();

        for result in [
            graph.bellman_ford_shortest_paths(v(0)),
            graph.floyd_warshall_shortest_paths(),
            graph.prim_mst(v(0)),
            graph.kruskal_mst(),
        ] {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::NotSupported);
        }
    }

    #[test]
    fn display() {
        let graph = WeightedIncidenceGraph::from_edges(3, [((0, 1), 1.5), ((1, 2), 2.0)]).unwrap();

        assert_eq!(
            graph.to_string(),
            "weighted incidence matrix:\n[1.5, -]\n[1.5, 2]\n[-, 2]\n"
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_remove_vertex_carries_weights(graph in weighted_graph_strategy(24, 0.3), index: usize) {
            prop_assume!(graph.size() > 0);

            let removed = v(index % graph.size());
            let expected = graph
                .weighted_edges()
                .filter_map(|(edge, weight)| Some((edge.shifted_after_removal(removed)?, weight)))
                .collect::<Vec<_>>();

            let mut graph = graph;
            graph.remove_vertex(removed).unwrap();

            prop_assert_eq!(graph.edge_count(), expected.len());
            for (edge, weight) in expected {
                prop_assert_eq!(graph.edge_weight(&edge), Ok(weight));
            }
        }
    }
}
