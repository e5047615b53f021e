//! Detect a [cycle] in an undirected graph.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use incidence_graph::{algo::cycle, graph::IncidenceGraph, prelude::*};
//!
//! let mut graph = IncidenceGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
//! assert!(!cycle::is_cyclic(&graph));
//!
//! graph.add_edge(Edge::new(3, 0)).unwrap();
//! assert_eq!(cycle::find_back_edge(&graph), Some(Edge::new(3, 0)));
//! ```

use crate::{
    core::{Edge, Neighbors, VertexId},
    visit::{Color, VisitResult},
};

/// Returns `true` if the graph contains a cycle. A self-loop is a cycle.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Neighbors + ?Sized,
{
    find_back_edge(graph).is_some()
}

/// Returns the first back edge found by a depth-first search seeded from
/// every white vertex in increasing index order.
///
/// The back edge is given as `(descendant, ancestor)` and closes a cycle
/// together with the tree path between its endpoints.
pub fn find_back_edge<G>(graph: &G) -> Option<Edge>
where
    G: Neighbors + ?Sized,
{
    let mut visit = VisitResult::new(graph.vertex_count());

    let edge = graph.vertex_ids().find_map(|root| {
        if visit.is_white(root) {
            explore(graph, root, &mut visit)
        } else {
            None
        }
    });

    tracing::debug!(cyclic = edge.is_some(), "cycle detection finished");
    edge
}

fn explore<G>(graph: &G, vertex: VertexId, visit: &mut VisitResult) -> Option<Edge>
where
    G: Neighbors + ?Sized,
{
    visit.set_color(vertex, Color::Gray);

    for neighbor in graph.neighbors(vertex) {
        match visit.color(neighbor) {
            Some(Color::Gray) if visit.parent(vertex) != Some(neighbor) => {
                return Some(Edge::new(vertex, neighbor));
            }
            Some(Color::White) => {
                visit.set_parent(neighbor, vertex);
                if let Some(edge) = explore(graph, neighbor, visit) {
                    return Some(edge);
                }
            }
            _ => {}
        }
    }

    visit.set_color(vertex, Color::Black);
    None
}
