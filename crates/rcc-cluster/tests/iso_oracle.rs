use proptest::prelude::*;
use rcc_cluster::are_isomorphic;
use rcc_core::rng::RngHandle;
use rcc_graph::{gen_attributed_graph, relabel};

use fixtures::{changing, make_graph, stable};

#[test]
fn element_difference_breaks_the_match() {
    let left = make_graph(&[(0, "C", 0), (1, "O", 0)], &[(0, 1, changing(1, 2))]);
    let right = make_graph(&[(0, "C", 0), (1, "N", 0)], &[(0, 1, changing(1, 2))]);
    assert!(!are_isomorphic(&left, &right));
}

#[test]
fn charge_difference_breaks_the_match() {
    let left = make_graph(&[(0, "C", 0), (1, "O", 0)], &[(0, 1, changing(1, 2))]);
    let right = make_graph(&[(0, "C", 0), (1, "O", -1)], &[(0, 1, changing(1, 2))]);
    assert!(!are_isomorphic(&left, &right));
}

#[test]
fn order_difference_breaks_the_match() {
    let left = make_graph(&[(0, "C", 0), (1, "O", 0)], &[(0, 1, changing(1, 2))]);
    let right = make_graph(&[(0, "C", 0), (1, "O", 0)], &[(0, 1, changing(2, 1))]);
    assert!(!are_isomorphic(&left, &right));
}

#[test]
fn attributes_must_agree_jointly_not_per_attribute() {
    // Element-wise a bijection exists (C->C, N->N) and charge-wise another
    // one does (0->0, 1->1), but no single mapping satisfies both: the
    // (C, 0) vertex has no image. Three independent single-matcher checks
    // would accept this pair.
    let left = make_graph(&[(0, "C", 0), (1, "N", 1)], &[]);
    let right = make_graph(&[(0, "C", 1), (1, "N", 0)], &[]);
    assert!(!are_isomorphic(&left, &right));
}

#[test]
fn identity_permutation_is_found() {
    let graph = fixtures::its_chain_change(["C", "O", "N"]);
    assert!(are_isomorphic(&graph, &graph));
}

#[test]
fn vertex_identity_is_irrelevant() {
    let left = make_graph(
        &[(0, "C", 0), (1, "O", 0), (2, "N", 0)],
        &[(0, 1, changing(1, 2)), (1, 2, stable(1))],
    );
    let right = make_graph(
        &[(7, "N", 0), (8, "O", 0), (9, "C", 0)],
        &[(9, 8, changing(1, 2)), (8, 7, stable(1))],
    );
    assert!(are_isomorphic(&left, &right));
}

#[test]
fn distinct_shapes_are_rejected() {
    let path = make_graph(
        &[(0, "C", 0), (1, "C", 0), (2, "C", 0), (3, "C", 0)],
        &[(0, 1, stable(1)), (1, 2, stable(1)), (2, 3, stable(1))],
    );
    let star = make_graph(
        &[(0, "C", 0), (1, "C", 0), (2, "C", 0), (3, "C", 0)],
        &[(0, 1, stable(1)), (0, 2, stable(1)), (0, 3, stable(1))],
    );
    assert!(!are_isomorphic(&path, &star));
}

#[test]
fn empty_graphs_are_isomorphic() {
    let left = make_graph(&[], &[]);
    let right = make_graph(&[], &[]);
    assert!(are_isomorphic(&left, &right));
}

proptest! {
    #[test]
    fn relabelled_graphs_are_always_isomorphic(seed in any::<u64>(), vertices in 1usize..8, extra in 0usize..5) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_attributed_graph(vertices, extra, &mut rng).unwrap();
        let shuffled = relabel(&graph, &mut rng).unwrap();
        prop_assert!(are_isomorphic(&graph, &shuffled));
    }

    #[test]
    fn vertex_count_mismatch_is_always_rejected(seed in any::<u64>(), vertices in 2usize..8) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_attributed_graph(vertices, 2, &mut rng).unwrap();
        let smaller = gen_attributed_graph(vertices - 1, 2, &mut rng).unwrap();
        prop_assert!(!are_isomorphic(&graph, &smaller));
    }
}
