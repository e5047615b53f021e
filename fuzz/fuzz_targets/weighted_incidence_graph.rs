#![no_main]

use libfuzzer_sys::fuzz_target;

use incidence_graph::{
    graph::WeightedIncidenceGraph,
    infra::{
        arbitrary::{MutOpsSeq, WeightedMutOp},
        testing::check_consistency,
    },
    prelude::*,
};

fuzz_target!(|ops: MutOpsSeq<WeightedMutOp>| {
    let mut graph = WeightedIncidenceGraph::new();

    for op in ops {
        let before = graph.clone();

        if op.apply(&mut graph).is_err() {
            assert_eq!(graph, before, "{op:?} failed but modified the graph");
        }

        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();

        for edge in graph.edges() {
            assert!(graph.edge_weight(edge).is_ok(), "edge {edge} has no weight");
        }
    }
});
