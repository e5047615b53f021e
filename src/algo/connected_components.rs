//! Find [connected] components of an undirected graph.
//!
//! See available parameters [here](ConnectedComponentsBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use incidence_graph::{algo::ConnectedComponents, graph::IncidenceGraph, prelude::*};
//!
//! let graph = IncidenceGraph::from_edges(5, [(0, 1), (1, 2), (3, 4)]).unwrap();
//!
//! let components = ConnectedComponents::on(&graph).run();
//! assert_eq!(components.len(), 2);
//! assert_eq!(
//!     components.component_of(VertexId::from(4)).unwrap().len(),
//!     2
//! );
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)

use std::collections::{btree_set, BTreeSet};

use crate::core::VertexId;

mod builder;
mod collect;

pub use builder::ConnectedComponentsBuilder;

/// Connected components of a graph.
///
/// The components partition the vertex set of the graph: every vertex is in
/// exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectedComponents {
    components: BTreeSet<BTreeSet<VertexId>>,
}

impl ConnectedComponents {
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> btree_set::Iter<'_, BTreeSet<VertexId>> {
        self.components.iter()
    }

    /// Returns the component containing `vertex`, or `None` if the vertex is
    /// not in the graph.
    pub fn component_of(&self, vertex: VertexId) -> Option<&BTreeSet<VertexId>> {
        self.components
            .iter()
            .find(|component| component.contains(&vertex))
    }

    pub fn into_sets(self) -> BTreeSet<BTreeSet<VertexId>> {
        self.components
    }
}

impl<'a> IntoIterator for &'a ConnectedComponents {
    type Item = &'a BTreeSet<VertexId>;
    type IntoIter = btree_set::Iter<'a, BTreeSet<VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Algorithm for [`ConnectedComponents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// Standard DFS algorithm for traversing the graph.
    ///
    /// # Use cases
    ///
    /// * Finding groups where elements relate to each other.
    Dfs,

    /// Standard BFS algorithm for traversing the graph.
    ///
    /// # Use cases
    ///
    /// * Same as DFS, useful when the graph has long paths.
    Bfs,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);

    #[derive(Debug)]
    pub struct Dfs;

    #[derive(Debug)]
    pub struct Bfs;
}
