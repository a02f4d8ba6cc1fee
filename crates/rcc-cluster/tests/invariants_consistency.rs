use proptest::prelude::*;
use rcc_cluster::invariants::{evaluate, InvariantKind, InvariantValue};
use rcc_cluster::spectral::{adjacency_rank, algebraic_connectivity};
use rcc_core::rng::RngHandle;
use rcc_graph::{gen_attributed_graph, relabel};

use fixtures::{make_graph, stable};

const CONSISTENT_KINDS: &[InvariantKind] = &[
    InvariantKind::VertexCount,
    InvariantKind::EdgeCount,
    InvariantKind::VertexDegree,
    InvariantKind::Rank,
    InvariantKind::AlgebraicConnectivity,
];

proptest! {
    #[test]
    fn relabelled_graphs_share_every_invariant(seed in any::<u64>(), vertices in 2usize..9, extra in 0usize..5) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_attributed_graph(vertices, extra, &mut rng).unwrap();
        let shuffled = relabel(&graph, &mut rng).unwrap();

        for kind in CONSISTENT_KINDS {
            let original = evaluate(*kind, &graph).unwrap();
            let relabelled = evaluate(*kind, &shuffled).unwrap();
            prop_assert_eq!(original, relabelled);
        }
    }
}

#[test]
fn counting_invariants_read_the_graph() {
    let path = make_graph(
        &[(0, "C", 0), (1, "C", 0), (2, "C", 0), (3, "C", 0)],
        &[(0, 1, stable(1)), (1, 2, stable(1)), (2, 3, stable(1))],
    );
    assert_eq!(
        evaluate(InvariantKind::VertexCount, &path).unwrap(),
        InvariantValue::Count(4)
    );
    assert_eq!(
        evaluate(InvariantKind::EdgeCount, &path).unwrap(),
        InvariantValue::Count(3)
    );
    assert_eq!(
        evaluate(InvariantKind::VertexDegree, &path).unwrap(),
        InvariantValue::Degrees(vec![1, 1, 2, 2])
    );
}

#[test]
fn degree_sequences_separate_path_from_star() {
    let path = make_graph(
        &[(0, "C", 0), (1, "C", 0), (2, "C", 0), (3, "C", 0)],
        &[(0, 1, stable(1)), (1, 2, stable(1)), (2, 3, stable(1))],
    );
    let star = make_graph(
        &[(0, "C", 0), (1, "C", 0), (2, "C", 0), (3, "C", 0)],
        &[(0, 1, stable(1)), (0, 2, stable(1)), (0, 3, stable(1))],
    );
    assert_ne!(
        evaluate(InvariantKind::VertexDegree, &path).unwrap(),
        evaluate(InvariantKind::VertexDegree, &star).unwrap()
    );
}

#[test]
fn rank_of_a_single_edge_is_two() {
    let edge = make_graph(&[(0, "C", 0), (1, "C", 0)], &[(0, 1, stable(1))]);
    assert_eq!(adjacency_rank(&edge), 2);

    let empty = make_graph(&[], &[]);
    assert_eq!(adjacency_rank(&empty), 0);
}

#[test]
fn connectivity_sentinel_for_ineligible_graphs() {
    let split = make_graph(
        &[(0, "C", 0), (1, "C", 0), (2, "C", 0), (3, "C", 0)],
        &[(0, 1, stable(1)), (2, 3, stable(1))],
    );
    assert_eq!(algebraic_connectivity(&split), 0.0);

    let lone = make_graph(&[(0, "C", 0)], &[]);
    assert_eq!(algebraic_connectivity(&lone), 0.0);
}

#[test]
fn connectivity_of_the_complete_pair_is_positive() {
    let edge = make_graph(&[(0, "C", 0), (1, "C", 0)], &[(0, 1, stable(1))]);
    // Normalized Laplacian of K_2 has spectrum {0, 2}.
    let value = algebraic_connectivity(&edge);
    assert!((value - 2.0).abs() < 1e-6);
}

#[test]
fn none_invariant_cannot_be_evaluated() {
    let edge = make_graph(&[(0, "C", 0), (1, "C", 0)], &[(0, 1, stable(1))]);
    let err = evaluate(InvariantKind::None, &edge).unwrap_err();
    assert_eq!(err.info().code, "invariant-none");
}
