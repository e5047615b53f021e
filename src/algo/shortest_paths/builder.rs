use crate::core::{Neighbors, Result, VertexId, Weighted};

use super::{dijkstra::dijkstra, ShortestPaths};

pub struct ShortestPathsBuilder<'a, G: ?Sized> {
    graph: &'a G,
}

impl ShortestPaths {
    /// Starts configuring the search on the given graph.
    pub fn on<G>(graph: &G) -> ShortestPathsBuilder<'_, G>
    where
        G: Neighbors + Weighted + ?Sized,
    {
        ShortestPathsBuilder { graph }
    }
}

impl<'a, G> ShortestPathsBuilder<'a, G>
where
    G: Neighbors + Weighted + ?Sized,
{
    /// Runs the search from `source`.
    pub fn run(self, source: VertexId) -> Result<ShortestPaths> {
        dijkstra(self.graph, source)
    }
}
