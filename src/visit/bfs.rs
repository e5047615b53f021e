//! Breadth-first search.

use std::collections::VecDeque;

use crate::core::{base::ensure_vertex, Neighbors, Result, VertexId};

use super::{Color, VisitResult};

/// Runs a breadth-first search from `source`.
///
/// Records the BFS tree parent and the distance in edges from the source of
/// every reachable vertex. Unreachable vertices stay white.
pub fn bfs_tree<G>(graph: &G, source: VertexId) -> Result<VisitResult>
where
    G: Neighbors + ?Sized,
{
    ensure_vertex(graph, source)?;

    let mut visit = VisitResult::new(graph.vertex_count());
    let reached = explore(graph, source, &mut visit);

    tracing::debug!(%source, reached = reached.len(), "bfs finished");

    Ok(visit)
}

/// Explores the vertices reachable from `source`, returning them in
/// discovery order.
pub(crate) fn explore<G>(graph: &G, source: VertexId, visit: &mut VisitResult) -> Vec<VertexId>
where
    G: Neighbors + ?Sized,
{
    let mut reached = vec![source];
    let mut queue = VecDeque::new();

    visit.set_color(source, Color::Gray);
    visit.set_distance(source, 0);
    queue.push_back((source, 0));

    while let Some((vertex, distance)) = queue.pop_front() {
        for neighbor in graph.neighbors(vertex) {
            if visit.is_white(neighbor) {
                visit.set_color(neighbor, Color::Gray);
                visit.set_parent(neighbor, vertex);
                visit.set_distance(neighbor, distance + 1);
                queue.push_back((neighbor, distance + 1));
                reached.push(neighbor);
            }
        }

        visit.set_color(vertex, Color::Black);
    }

    reached
}
