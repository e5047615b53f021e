use proptest::{collection::vec, prelude::*, sample::Index};

use crate::{
    core::{Edge, GraphMut},
    graph::{IncidenceGraph, WeightedIncidenceGraph},
};

/// Upper bound on the edge count for `vertex_count` vertices and the given
/// density in `[0, 1]`, self-loops included.
fn max_edges(vertex_count: usize, density: f64) -> usize {
    let possible = vertex_count * (vertex_count + 1) / 2;
    (possible as f64 * density.clamp(0.0, 1.0)).ceil() as usize
}

fn endpoints(vertex_count: usize, density: f64) -> impl Strategy<Value = Vec<(usize, usize)>> {
    vec(any::<(Index, Index)>(), 0..=max_edges(vertex_count, density)).prop_map(move |pairs| {
        pairs
            .into_iter()
            .map(|(src, dst)| (src.index(vertex_count), dst.index(vertex_count)))
            .collect()
    })
}

/// Random graphs with up to `max_vertices` vertices. Duplicate edges
/// produced by the generator are collapsed, so `density` only bounds the
/// number of edges.
pub fn graph_strategy(max_vertices: usize, density: f64) -> impl Strategy<Value = IncidenceGraph> {
    (0..=max_vertices)
        .prop_flat_map(move |vertex_count| (Just(vertex_count), endpoints(vertex_count, density)))
        .prop_map(|(vertex_count, edges)| {
            let mut graph = IncidenceGraph::with_capacity(vertex_count, edges.len());

            for _ in 0..vertex_count {
                graph.add_vertex();
            }

            for (src, dst) in edges {
                let _ = graph.add_edge(Edge::new(src, dst));
            }

            graph
        })
}

/// Like [`graph_strategy`] with a nonnegative weight on every edge.
pub fn weighted_graph_strategy(
    max_vertices: usize,
    density: f64,
) -> impl Strategy<Value = WeightedIncidenceGraph> {
    (0..=max_vertices)
        .prop_flat_map(move |vertex_count| {
            let edges = endpoints(vertex_count, density);
            let weights = vec(0.0..100.0f64, max_edges(vertex_count, density));
            (Just(vertex_count), edges, weights)
        })
        .prop_map(|(vertex_count, edges, weights)| {
            let mut graph = WeightedIncidenceGraph::with_capacity(vertex_count, edges.len());

            for _ in 0..vertex_count {
                graph.add_vertex();
            }

            for ((src, dst), weight) in edges.into_iter().zip(weights) {
                let _ = graph.add_edge_weighted(Edge::new(src, dst), weight);
            }

            graph
        })
}
