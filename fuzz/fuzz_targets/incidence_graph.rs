#![no_main]

use libfuzzer_sys::fuzz_target;

use incidence_graph::{
    graph::IncidenceGraph,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = IncidenceGraph::new();

    for op in ops {
        let before = graph.clone();

        if op.apply(&mut graph).is_err() {
            // A failed mutation must not change anything.
            assert_eq!(graph, before, "{op:?} failed but modified the graph");
        }

        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
