use rcc_cluster::{expand_neighborhood, extract_reaction_center};
use rcc_graph::canonical_hash;

use fixtures::{changing, make_graph, stable, v};

#[test]
fn changing_bonds_select_their_endpoints() {
    let its = fixtures::its_single_change("C", "O");
    let center = extract_reaction_center(&its).unwrap();

    assert_eq!(center.vertex_count(), 2);
    assert_eq!(center.edge_count(), 1);
    assert!(center.contains_vertex(v(0)));
    assert!(center.contains_vertex(v(1)));
    assert!(!center.contains_vertex(v(2)));
    assert_eq!(center.vertex_attrs(v(1)).unwrap().element, "O");
}

#[test]
fn induced_closure_keeps_unchanged_bonds_between_selected_atoms() {
    // 0-1 and 1-2 change; the stable 0-2 bond joins the center anyway
    // because both endpoints are selected.
    let its = make_graph(
        &[(0, "C", 0), (1, "O", 0), (2, "N", 0), (3, "H", 0)],
        &[
            (0, 1, changing(1, 2)),
            (1, 2, changing(2, 1)),
            (0, 2, stable(1)),
            (2, 3, stable(1)),
        ],
    );
    let center = extract_reaction_center(&its).unwrap();
    assert_eq!(center.vertex_count(), 3);
    assert_eq!(center.edge_count(), 3);
    assert!(center.edge_between(v(0), v(2)).is_some());
}

#[test]
fn scalar_orders_and_zero_standard_order_never_qualify() {
    use rcc_graph::{BondOrder, EdgeAttrs};

    let its = make_graph(
        &[(0, "C", 0), (1, "C", 0), (2, "C", 0)],
        &[
            // Unequal pair but standard_order of zero: not a change.
            (0, 1, EdgeAttrs::new(BondOrder::Pair(1, 2), 0)),
            // Scalar order can never mark a change.
            (1, 2, EdgeAttrs::new(BondOrder::Scalar(2), 1)),
        ],
    );
    let center = extract_reaction_center(&its).unwrap();
    assert!(center.is_empty());
    assert_eq!(center.edge_count(), 0);
}

#[test]
fn extraction_is_idempotent() {
    let its = fixtures::its_chain_change(["C", "O", "N"]);
    let center = extract_reaction_center(&its).unwrap();
    let twice = extract_reaction_center(&center).unwrap();
    assert_eq!(canonical_hash(&center), canonical_hash(&twice));
}

#[test]
fn center_is_a_subgraph_of_its_parent() {
    let its = fixtures::its_chain_change(["C", "C", "O"]);
    let center = extract_reaction_center(&its).unwrap();

    for id in center.vertex_ids() {
        assert!(its.contains_vertex(id));
        assert_eq!(
            center.vertex_attrs(id).unwrap(),
            its.vertex_attrs(id).unwrap()
        );
    }
    for (a, b, attrs) in center.edges() {
        assert_eq!(its.edge_between(a, b), Some(attrs));
    }
}

#[test]
fn extraction_leaves_the_input_untouched() {
    let its = fixtures::its_single_change("C", "O");
    let before = canonical_hash(&its);
    let _ = extract_reaction_center(&its).unwrap();
    assert_eq!(canonical_hash(&its), before);
}

#[test]
fn neighborhood_expansion_grows_by_shells() {
    let its = make_graph(
        &[(0, "C", 0), (1, "O", 0), (2, "C", 0), (3, "C", 0)],
        &[
            (0, 1, changing(1, 2)),
            (1, 2, stable(1)),
            (2, 3, stable(1)),
        ],
    );
    let center = extract_reaction_center(&its).unwrap();
    assert_eq!(center.vertex_count(), 2);

    let zero = expand_neighborhood(&its, &center, 0).unwrap();
    assert_eq!(canonical_hash(&zero), canonical_hash(&center));

    let one = expand_neighborhood(&its, &center, 1).unwrap();
    assert_eq!(one.vertex_count(), 3);
    assert!(one.contains_vertex(v(2)));
    assert!(!one.contains_vertex(v(3)));

    let two = expand_neighborhood(&its, &center, 2).unwrap();
    assert_eq!(two.vertex_count(), 4);
    assert_eq!(two.edge_count(), its.edge_count());
}
