use std::collections::BTreeSet;

use thiserror::Error;

use crate::core::{Edge, EdgeKey, Graph, GraphMut, VertexId};

pub fn create_path<G>(vertex_count: usize) -> G
where
    G: GraphMut + Default,
{
    let mut graph = G::default();

    if vertex_count == 0 {
        return graph;
    }

    let mut src = graph.add_vertex();

    for _ in 1..vertex_count {
        let dst = graph.add_vertex();
        // Both endpoints were just added.
        let _ = graph.add_edge(Edge::new(src, dst));
        src = dst;
    }

    graph
}

/// Path closed by an edge from the last vertex back to the first one.
pub fn create_cycle<G>(vertex_count: usize) -> G
where
    G: GraphMut + Default,
{
    let mut graph = create_path::<G>(vertex_count);

    if vertex_count > 2 {
        let _ = graph.add_edge(Edge::new(vertex_count - 1, 0));
    }

    graph
}

pub fn create_complete<G>(vertex_count: usize) -> G
where
    G: GraphMut + Default,
{
    let mut graph = G::default();

    let vertices = (0..vertex_count)
        .map(|_| graph.add_vertex())
        .collect::<Vec<_>>();

    for &u in vertices.iter() {
        for &v in vertices.iter() {
            if v >= u {
                break;
            }

            let _ = graph.add_edge(Edge::new(u, v));
        }
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex ids iterator count ({0}) is not equal to vertex count ({1})")]
    VertexIdsVertexCountMismatch(usize, usize),
    #[error("vertices set size ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("edge {0} has an endpoint out of bounds")]
    EdgeEndpointInvalid(Edge),
    #[error("edge set size ({0}) is not equal to edge count ({1})")]
    DuplicateEdges(usize, usize),
    #[error("neighbors of {vertex} are {actual:?}, but edges imply {expected:?}")]
    NeighborsMismatch {
        vertex: VertexId,
        actual: BTreeSet<VertexId>,
        expected: BTreeSet<VertexId>,
    },
    #[error("vertex {0} is a neighbor of {1}, but not the other way around")]
    AdjacencyAsymmetric(VertexId, VertexId),
    #[error("sum of degrees ({0}) is not equal to the sum implied by the edges ({1})")]
    HandshakingLemma(usize, usize),
    #[error("edge {0} is not found by its own key")]
    EdgeLookupFailed(EdgeKey),
}

/// Cross-checks the vertex count, the edge sequence and the adjacency
/// derived from the incidence matrix against each other.
pub fn check_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: Graph,
{
    fn cmp(
        actual: usize,
        expected: usize,
        error: impl FnOnce(usize, usize) -> ConsistencyCheckError,
    ) -> Result<(), ConsistencyCheckError> {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();

    cmp(
        graph.vertex_ids().count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsVertexCountMismatch,
    )?;
    cmp(
        graph.vertices().len(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;

    let mut expected = vec![BTreeSet::new(); vertex_count];
    let mut expected_degree_sum = 0;

    for edge in graph.edges() {
        let (src, dst) = (edge.source(), edge.target());

        if !graph.contains_vertex(src) || !graph.contains_vertex(dst) {
            return Err(ConsistencyCheckError::EdgeEndpointInvalid(*edge));
        }

        if graph.edge_column(edge).is_none() {
            return Err(ConsistencyCheckError::EdgeLookupFailed(edge.key()));
        }

        expected[src.as_usize()].insert(dst);
        expected[dst.as_usize()].insert(src);
        expected_degree_sum += if edge.is_loop() { 1 } else { 2 };
    }

    cmp(
        graph.edge_set().len(),
        graph.edge_count(),
        ConsistencyCheckError::DuplicateEdges,
    )?;

    let mut degree_sum = 0;

    for (vertex, expected) in graph.vertex_ids().zip(expected) {
        let actual = graph.neighbors(vertex);

        if actual != expected {
            return Err(ConsistencyCheckError::NeighborsMismatch {
                vertex,
                actual,
                expected,
            });
        }

        for &neighbor in actual.iter() {
            if !graph.neighbors(neighbor).contains(&vertex) {
                return Err(ConsistencyCheckError::AdjacencyAsymmetric(neighbor, vertex));
            }
        }

        degree_sum += actual.len();
    }

    cmp(
        degree_sum,
        expected_degree_sum,
        ConsistencyCheckError::HandshakingLemma,
    )
}
