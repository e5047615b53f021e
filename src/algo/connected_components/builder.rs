use crate::core::Neighbors;

use super::{algo, collect::collect, Algo, ConnectedComponents};

pub struct ConnectedComponentsBuilder<'a, G: ?Sized, A> {
    graph: &'a G,
    algo: A,
}

impl ConnectedComponents {
    /// Starts configuring the search on the given graph.
    pub fn on<G>(graph: &G) -> ConnectedComponentsBuilder<'_, G, algo::AnyAlgo>
    where
        G: Neighbors + ?Sized,
    {
        ConnectedComponentsBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, G, A> ConnectedComponentsBuilder<'a, G, A>
where
    G: Neighbors + ?Sized,
{
    /// Chooses the DFS algorithm.
    ///
    /// See [`Algo::Dfs`] for details.
    pub fn dfs(self) -> ConnectedComponentsBuilder<'a, G, algo::Dfs> {
        ConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::Dfs,
        }
    }

    /// Chooses the BFS algorithm.
    ///
    /// See [`Algo::Bfs`] for details.
    pub fn bfs(self) -> ConnectedComponentsBuilder<'a, G, algo::Bfs> {
        ConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::Bfs,
        }
    }

    /// Chooses the algorithm at runtime.
    pub fn using(self, algo: Algo) -> ConnectedComponentsBuilder<'a, G, algo::SpecificAlgo> {
        self.using_opt(Some(algo))
    }

    /// Chooses the algorithm at runtime, `None` meaning the default one.
    pub fn using_opt(
        self,
        algo: Option<Algo>,
    ) -> ConnectedComponentsBuilder<'a, G, algo::SpecificAlgo> {
        ConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgo(algo),
        }
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G, algo::AnyAlgo>
where
    G: Neighbors + ?Sized,
{
    /// Runs the search.
    pub fn run(self) -> ConnectedComponents {
        collect(self.graph, Algo::Dfs)
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G, algo::Dfs>
where
    G: Neighbors + ?Sized,
{
    /// Runs the search.
    pub fn run(self) -> ConnectedComponents {
        collect(self.graph, Algo::Dfs)
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G, algo::Bfs>
where
    G: Neighbors + ?Sized,
{
    /// Runs the search.
    pub fn run(self) -> ConnectedComponents {
        collect(self.graph, Algo::Bfs)
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G, algo::SpecificAlgo>
where
    G: Neighbors + ?Sized,
{
    /// Runs the search.
    pub fn run(self) -> ConnectedComponents {
        collect(self.graph, self.algo.0.unwrap_or(Algo::Dfs))
    }
}
