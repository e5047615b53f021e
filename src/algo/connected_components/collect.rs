use std::collections::BTreeSet;

use crate::{
    core::Neighbors,
    visit::{bfs, dfs, Time, VisitResult},
};

use super::{Algo, ConnectedComponents};

pub fn collect<G>(graph: &G, algo: Algo) -> ConnectedComponents
where
    G: Neighbors + ?Sized,
{
    // A single visit is shared by all traversals, so vertices already placed
    // in a component are never explored again.
    let mut visit = VisitResult::new(graph.vertex_count());
    let mut time = Time::START;
    let mut components = BTreeSet::new();

    for root in graph.vertex_ids() {
        if !visit.is_white(root) {
            continue;
        }

        let reached = match algo {
            Algo::Dfs => dfs::explore(graph, root, &mut visit, &mut time),
            Algo::Bfs => bfs::explore(graph, root, &mut visit),
        };

        components.insert(reached.into_iter().collect::<BTreeSet<_>>());
    }

    tracing::debug!(?algo, count = components.len(), "connected components found");
    ConnectedComponents { components }
}
