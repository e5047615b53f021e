//! Depth-first search and the depth-first forest.

use std::collections::btree_set;

use crate::core::{base::ensure_vertex, Error, Neighbors, Result, VertexId};

use super::{Color, Time, VisitResult};

/// Runs an iterative depth-first search from `source`.
///
/// A vertex receives its discovery time when it is first examined on top of
/// the stack and its finish time when it is popped, after all its white
/// neighbors were explored.
pub fn dfs_tree<G>(graph: &G, source: VertexId) -> Result<VisitResult>
where
    G: Neighbors + ?Sized,
{
    ensure_vertex(graph, source)?;

    let mut visit = VisitResult::new(graph.vertex_count());
    let mut time = Time::START;
    let reached = explore(graph, source, &mut visit, &mut time);

    tracing::debug!(%source, reached = reached.len(), "dfs finished");
    Ok(visit)
}

/// Runs a recursive depth-first search from `source`.
///
/// Produces exactly the same result as [`dfs_tree`]. The recursion depth is
/// bounded by the length of the longest path explored.
pub fn dfs_tree_recursive<G>(graph: &G, source: VertexId) -> Result<VisitResult>
where
    G: Neighbors + ?Sized,
{
    ensure_vertex(graph, source)?;

    let mut visit = VisitResult::new(graph.vertex_count());
    let mut time = Time::START;
    visit_recursive(graph, source, &mut visit, &mut time);

    tracing::debug!(%source, last_time = %time, "recursive dfs finished");
    Ok(visit)
}

/// Builds the depth-first forest of the whole graph.
///
/// A tree is started from every vertex still white, in increasing index
/// order. The timestamp counter continues across trees. `source` only needs
/// to name a vertex of the graph.
pub fn dfs_forest<G>(graph: &G, source: VertexId) -> Result<VisitResult>
where
    G: Neighbors + ?Sized,
{
    if graph.vertex_count() == 0 {
        return Err(Error::EmptyGraph);
    }
    ensure_vertex(graph, source)?;

    dfs_forest_ordered(graph, &[])
}

/// Builds the depth-first forest, starting trees from `roots` in the given
/// order and then from every vertex still white in increasing index order.
///
/// Roots already reached by an earlier tree are skipped.
pub fn dfs_forest_ordered<G>(graph: &G, roots: &[VertexId]) -> Result<VisitResult>
where
    G: Neighbors + ?Sized,
{
    if graph.vertex_count() == 0 {
        return Err(Error::EmptyGraph);
    }
    for &root in roots {
        ensure_vertex(graph, root)?;
    }

    let mut visit = VisitResult::new(graph.vertex_count());
    let mut time = Time::START;
    let mut trees = 0;

    for root in roots.iter().copied().chain(graph.vertex_ids()) {
        if visit.is_white(root) {
            explore(graph, root, &mut visit, &mut time);
            trees += 1;
        }
    }

    tracing::debug!(trees, last_time = %time, "dfs forest finished");
    Ok(visit)
}

/// Explores the tree rooted at `root` iteratively, returning the reached
/// vertices in discovery order.
pub(crate) fn explore<G>(
    graph: &G,
    root: VertexId,
    visit: &mut VisitResult,
    time: &mut Time,
) -> Vec<VertexId>
where
    G: Neighbors + ?Sized,
{
    let mut reached = vec![root];

    // Each frame keeps the remaining neighbors of its vertex, so a vertex is
    // not rescanned from the beginning when it returns to the top.
    let mut stack: Vec<(VertexId, btree_set::IntoIter<VertexId>)> = Vec::new();

    visit.set_color(root, Color::Gray);
    visit.set_start_time(root, time.tick());
    stack.push((root, graph.neighbors(root).into_iter()));

    while let Some((vertex, neighbors)) = stack.last_mut() {
        let vertex = *vertex;

        match neighbors.find(|&neighbor| visit.is_white(neighbor)) {
            Some(next) => {
                visit.set_color(next, Color::Gray);
                visit.set_parent(next, vertex);
                visit.set_start_time(next, time.tick());
                stack.push((next, graph.neighbors(next).into_iter()));
                reached.push(next);
            }
            None => {
                stack.pop();
                visit.set_color(vertex, Color::Black);
                visit.set_finish_time(vertex, time.tick());
            }
        }
    }

    reached
}

fn visit_recursive<G>(graph: &G, vertex: VertexId, visit: &mut VisitResult, time: &mut Time)
where
    G: Neighbors + ?Sized,
{
    visit.set_color(vertex, Color::Gray);
    visit.set_start_time(vertex, time.tick());

    for neighbor in graph.neighbors(vertex) {
        // Checked lazily, an earlier sibling subtree may have reached it.
        if visit.is_white(neighbor) {
            visit.set_parent(neighbor, vertex);
            visit_recursive(graph, neighbor, visit, time);
        }
    }

    visit.set_color(vertex, Color::Black);
    visit.set_finish_time(vertex, time.tick());
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::{Graph, GraphBase},
        graph::IncidenceGraph,
        infra::{
            proptest::graph_strategy,
            testing::{create_complete, create_path},
        },
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn path_timestamps() {
        let graph: IncidenceGraph = create_path(3);
        let visit = dfs_tree(&graph, v(0)).unwrap();

        assert_eq!(visit.start_time(v(0)), Some(Time(1)));
        assert_eq!(visit.start_time(v(1)), Some(Time(2)));
        assert_eq!(visit.start_time(v(2)), Some(Time(3)));
        assert_eq!(visit.finish_time(v(2)), Some(Time(4)));
        assert_eq!(visit.finish_time(v(1)), Some(Time(5)));
        assert_eq!(visit.finish_time(v(0)), Some(Time(6)));
        assert_eq!(visit.parent(v(2)), Some(v(1)));
    }

    #[test]
    fn lowest_neighbor_first() {
        let graph = IncidenceGraph::from_edges(4, [(0, 3), (0, 1), (1, 2), (2, 3)]).unwrap();
        let visit = dfs_tree(&graph, v(0)).unwrap();

        assert_eq!(visit.parent(v(1)), Some(v(0)));
        assert_eq!(visit.parent(v(2)), Some(v(1)));
        assert_eq!(visit.parent(v(3)), Some(v(2)));
    }

    #[test]
    fn unreachable_stays_white() {
        let graph = IncidenceGraph::from_edges(3, [(0, 1)]).unwrap();
        let visit = dfs_tree(&graph, v(1)).unwrap();

        assert_eq!(visit.color(v(2)), Some(Color::White));
        assert_eq!(visit.start_time(v(2)), None);
        assert_eq!(visit.finish_time(v(2)), None);
    }

    #[test]
    fn recursive_matches_iterative() {
        let graph: IncidenceGraph = create_complete(5);

        assert_eq!(
            dfs_tree(&graph, v(2)).unwrap(),
            dfs_tree_recursive(&graph, v(2)).unwrap()
        );
    }

    #[test]
    fn invalid_source() {
        let graph: IncidenceGraph = create_path(2);

        assert_matches!(dfs_tree(&graph, v(5)), Err(Error::InvalidVertex(_)));
        assert_matches!(dfs_tree_recursive(&graph, v(5)), Err(Error::InvalidVertex(_)));
        assert_matches!(dfs_forest(&graph, v(5)), Err(Error::InvalidVertex(_)));
    }

    #[test]
    fn forest_on_empty_graph() {
        let graph = IncidenceGraph::new();

        assert_matches!(dfs_forest(&graph, v(0)), Err(Error::EmptyGraph));
        assert_matches!(dfs_forest_ordered(&graph, &[]), Err(Error::EmptyGraph));
    }

    #[test]
    fn forest_covers_all_vertices() {
        let graph = IncidenceGraph::from_edges(5, [(0, 1), (2, 3)]).unwrap();
        let visit = graph.dfs_forest(v(3)).unwrap();

        assert_eq!(visit.vertices_with(Color::Black).count(), 5);
        assert_eq!(visit.parent(v(0)), None);
        assert_eq!(visit.parent(v(2)), None);
        assert_eq!(visit.parent(v(4)), None);
        assert_eq!(visit.parent(v(3)), Some(v(2)));

        // The counter is shared across trees.
        assert_eq!(visit.start_time(v(2)), Some(Time(5)));
        assert_eq!(visit.finish_time(v(4)), Some(Time(10)));
    }

    #[test]
    fn forest_ordered_roots() {
        let graph = IncidenceGraph::from_edges(5, [(0, 1), (2, 3)]).unwrap();
        let visit = graph.dfs_forest_ordered(&[v(3), v(2), v(4)]).unwrap();

        assert_eq!(visit.start_time(v(3)), Some(Time(1)));
        assert_eq!(visit.parent(v(2)), Some(v(3)));
        assert_eq!(visit.start_time(v(4)), Some(Time(5)));
        assert_eq!(visit.start_time(v(0)), Some(Time(7)));
        assert_eq!(visit.vertices_with(Color::Black).count(), 5);
    }

    #[test]
    fn forest_ordered_invalid_root() {
        let graph: IncidenceGraph = create_path(3);

        assert_matches!(
            dfs_forest_ordered(&graph, &[v(0), v(3)]),
            Err(Error::InvalidVertex(_))
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_recursive_matches_iterative(graph in graph_strategy(32, 0.2), index: usize) {
            prop_assume!(graph.size() > 0);

            let source = v(index % graph.size());
            prop_assert_eq!(
                dfs_tree(&graph, source).unwrap(),
                dfs_tree_recursive(&graph, source).unwrap()
            );
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_forest_intervals_nest(graph in graph_strategy(32, 0.2)) {
            prop_assume!(graph.size() > 0);

            let visit = dfs_forest(&graph, v(0)).unwrap();

            for vertex in graph.vertex_ids() {
                let start = visit.start_time(vertex).unwrap();
                let finish = visit.finish_time(vertex).unwrap();
                prop_assert!(start < finish);

                if let Some(parent) = visit.parent(vertex) {
                    prop_assert!(visit.start_time(parent).unwrap() < start);
                    prop_assert!(finish < visit.finish_time(parent).unwrap());
                }
            }
        }
    }
}
