//! Undirected graphs stored as an incidence matrix.
//!
//! [`IncidenceGraph`](graph::IncidenceGraph) keeps one matrix row per vertex
//! and one column per edge. [`WeightedIncidenceGraph`](graph::WeightedIncidenceGraph)
//! adds a weight to every edge and enables Dijkstra's shortest paths.
//!
//! Vertices are dense indices: removing a vertex shifts every vertex with a
//! higher index down by one.
//!
//! # Examples
//!
//! ```
//! use incidence_graph::{graph::IncidenceGraph, prelude::*};
//!
//! let mut graph = IncidenceGraph::new();
//!
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! let c = graph.add_vertex();
//!
//! graph.add_edge(Edge::new(a, b)).unwrap();
//! graph.add_edge(Edge::new(c, b)).unwrap();
//!
//! assert_eq!(graph.adjacent(b).unwrap().len(), 2);
//!
//! graph.remove_vertex(a).unwrap();
//! assert!(graph.contains_edge(&Edge::new(0, 1)).unwrap());
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    pub use crate::core::{
        Edge, EdgeSet, Graph, GraphBase, GraphMut, Neighbors, VertexId, Weighted, WeightedGraph,
    };
}
