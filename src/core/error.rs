use std::fmt;

use thiserror::Error;

use super::{edge::Edge, id::VertexId};

/// The error type of all fallible graph operations.
///
/// Every variant carries the offending vertex or edge. Use [`Error::kind`] to
/// branch on the category of the failure.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The vertex is not a live vertex of the graph.
    #[error("vertex {0} does not belong to the graph")]
    InvalidVertex(VertexId),

    /// At least one endpoint of the edge is not a live vertex of the graph.
    #[error("edge {0} has an endpoint that does not belong to the graph")]
    InvalidEdge(Edge),

    /// The weight is not a number.
    #[error("weight {weight} of edge {edge} is not a valid weight")]
    InvalidWeight { edge: Edge, weight: f64 },

    /// An edge with negative weight encountered in an algorithm that requires
    /// nonnegative weights.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: Edge, weight: f64 },

    /// The operation requires at least one vertex.
    #[error("the graph has no vertices")]
    EmptyGraph,

    /// The vertex to be removed does not exist.
    #[error("no such vertex: {0}")]
    VertexNotFound(VertexId),

    /// The edge does not exist.
    #[error("no such edge: {0}")]
    EdgeNotFound(Edge),

    /// The operation is meaningless for an undirected graph or deliberately
    /// left unimplemented.
    #[error("{0} is not supported on this graph")]
    Unsupported(Operation),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidVertex(_)
            | Error::InvalidEdge(_)
            | Error::InvalidWeight { .. }
            | Error::NegativeWeight { .. }
            | Error::EmptyGraph => ErrorKind::InvalidArgument,
            Error::VertexNotFound(_) | Error::EdgeNotFound(_) => ErrorKind::NotFound,
            Error::Unsupported(_) => ErrorKind::NotSupported,
        }
    }
}

/// Category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-domain input.
    InvalidArgument,

    /// A well-formed reference to an entity that does not currently exist.
    NotFound,

    /// An operation that this graph does not provide.
    NotSupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::NotFound => "not found",
            ErrorKind::NotSupported => "not supported",
        };
        f.write_str(kind)
    }
}

/// Operations reported by [`Error::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operation {
    TopologicalSort,
    StronglyConnectedComponents,
    BellmanFord,
    FloydWarshall,
    PrimMst,
    KruskalMst,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::TopologicalSort => "topological sort",
            Operation::StronglyConnectedComponents => "strongly connected components",
            Operation::BellmanFord => "Bellman-Ford shortest paths",
            Operation::FloydWarshall => "Floyd-Warshall shortest paths",
            Operation::PrimMst => "Prim's minimum spanning tree",
            Operation::KruskalMst => "Kruskal's minimum spanning tree",
        };
        f.write_str(name)
    }
}
