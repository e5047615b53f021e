use arbitrary::Arbitrary;

use crate::{
    core::{Edge, GraphBase, GraphMut, Result, VertexId, Weighted},
    graph::WeightedIncidenceGraph,
};

/// Arbitrary vertex index, mapped into the current vertex range when applied.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    /// Maps the index to a vertex of a graph with `vertex_count` vertices.
    ///
    /// An empty graph yields an invalid vertex, which exercises the error
    /// paths.
    fn vertex(self, vertex_count: usize) -> VertexId {
        VertexId::from(self.get(vertex_count).unwrap_or(vertex_count))
    }
}

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq)]
pub enum MutOp {
    AddVertex,
    RemoveVertex(Index),
    AddEdge(Index, Index),
    RemoveEdge(Index, Index),
    Clear,
}

impl MutOp {
    pub fn apply<G>(self, graph: &mut G) -> Result<()>
    where
        G: GraphMut,
    {
        let n = graph.vertex_count();

        match self {
            MutOp::AddVertex => {
                graph.add_vertex();
                Ok(())
            }
            MutOp::RemoveVertex(index) => graph.remove_vertex(index.vertex(n)),
            MutOp::AddEdge(src, dst) => graph
                .add_edge(Edge::new(src.vertex(n), dst.vertex(n)))
                .map(|_| ()),
            MutOp::RemoveEdge(src, dst) => {
                graph.remove_edge(&Edge::new(src.vertex(n), dst.vertex(n)))
            }
            MutOp::Clear => {
                graph.clear();
                Ok(())
            }
        }
    }
}

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq)]
pub enum WeightedMutOp {
    Structural(MutOp),
    AddEdgeWeighted(Index, Index, f64),
    SetEdgeWeight(Index, Index, f64),
}

impl WeightedMutOp {
    pub fn apply(self, graph: &mut WeightedIncidenceGraph) -> Result<()> {
        let n = graph.vertex_count();

        match self {
            WeightedMutOp::Structural(op) => op.apply(graph),
            WeightedMutOp::AddEdgeWeighted(src, dst, weight) => graph
                .add_edge_weighted(Edge::new(src.vertex(n), dst.vertex(n)), weight)
                .map(|_| ()),
            WeightedMutOp::SetEdgeWeight(src, dst, weight) => {
                graph.set_edge_weight(&Edge::new(src.vertex(n), dst.vertex(n)), weight)
            }
        }
    }
}

#[derive(Debug, Arbitrary)]
pub struct MutOpsSeq<Op = MutOp>(pub Vec<Op>);

impl<Op> IntoIterator for MutOpsSeq<Op> {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
