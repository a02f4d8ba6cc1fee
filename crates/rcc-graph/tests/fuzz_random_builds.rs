use rcc_core::rng::RngHandle;
use rcc_graph::{
    canonical_hash, gen_attributed_graph, graph_from_bytes, graph_to_bytes, relabel,
    AttributedGraph,
};
use proptest::prelude::*;

fn check_structure(graph: &AttributedGraph) {
    assert!(graph.is_connected());
    let degree_sum: usize = graph
        .vertex_ids()
        .map(|id| graph.degree(id).unwrap())
        .sum();
    assert_eq!(degree_sum, graph.edge_count() * 2);
}

proptest! {
    #[test]
    fn random_graphs_respect_invariants(seed in any::<u64>(), vertices in 2usize..12, extra in 0usize..8) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_attributed_graph(vertices, extra, &mut rng).unwrap();
        check_structure(&graph);

        let bytes = graph_to_bytes(&graph).unwrap();
        let restored = graph_from_bytes(&bytes).unwrap();
        prop_assert_eq!(canonical_hash(&graph), canonical_hash(&restored));
    }

    #[test]
    fn relabelling_preserves_structure_counts(seed in any::<u64>(), vertices in 2usize..10, extra in 0usize..6) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_attributed_graph(vertices, extra, &mut rng).unwrap();
        let shuffled = relabel(&graph, &mut rng).unwrap();

        prop_assert_eq!(shuffled.vertex_count(), graph.vertex_count());
        prop_assert_eq!(shuffled.edge_count(), graph.edge_count());
        prop_assert_eq!(shuffled.degree_sequence(), graph.degree_sequence());
    }
}

#[test]
fn generator_rejects_empty_request() {
    let mut rng = RngHandle::from_seed(0);
    let err = gen_attributed_graph(0, 0, &mut rng).unwrap_err();
    assert_eq!(err.info().code, "empty-graph");
}
