use rand::seq::SliceRandom;
use rand::Rng;
use rcc_core::errors::{ErrorInfo, RccError};
use rcc_core::rng::RngHandle;
use rcc_core::VertexId;

use crate::graph::{AttributedGraph, BondOrder, EdgeAttrs, VertexAttrs};

const ELEMENTS: &[&str] = &["C", "N", "O", "S", "P", "H", "Cl", "Br"];

/// Generates a random connected attributed graph with deterministic randomness.
///
/// A random spanning tree guarantees connectivity; `extra_edges` additional
/// edges are then attempted between random vertex pairs. A fraction of the
/// edges is marked as changing (unequal order pair plus non-zero
/// `standard_order`), which makes the output usable as a synthetic ITS graph.
pub fn gen_attributed_graph(
    n_vertices: usize,
    extra_edges: usize,
    rng: &mut RngHandle,
) -> Result<AttributedGraph, RccError> {
    if n_vertices == 0 {
        return Err(RccError::Rng(ErrorInfo::new(
            "empty-graph",
            "generator requires at least one vertex",
        )));
    }

    let mut graph = AttributedGraph::new();
    for idx in 0..n_vertices {
        graph.add_vertex(VertexId::from_raw(idx as u64), random_vertex_attrs(rng))?;
    }

    for idx in 1..n_vertices {
        let parent = rng.gen_range(0..idx);
        graph.add_edge(
            VertexId::from_raw(parent as u64),
            VertexId::from_raw(idx as u64),
            random_edge_attrs(rng),
        )?;
    }

    let mut attempts = 0usize;
    let mut added = 0usize;
    while added < extra_edges && attempts < extra_edges.saturating_mul(8) {
        attempts += 1;
        let a = rng.gen_range(0..n_vertices);
        let b = rng.gen_range(0..n_vertices);
        if a == b {
            continue;
        }
        let a = VertexId::from_raw(a as u64);
        let b = VertexId::from_raw(b as u64);
        if graph.edge_between(a, b).is_some() {
            continue;
        }
        graph.add_edge(a, b, random_edge_attrs(rng))?;
        added += 1;
    }

    Ok(graph)
}

/// Produces an isomorphic copy of the graph under a random vertex relabelling.
///
/// Vertex identifiers are permuted and both vertex and edge insertion order
/// are shuffled, so the copy differs from the input in everything except
/// structure and attributes.
pub fn relabel(graph: &AttributedGraph, rng: &mut RngHandle) -> Result<AttributedGraph, RccError> {
    let ids: Vec<VertexId> = graph.vertex_ids().collect();
    let mut permuted = ids.clone();
    permuted.shuffle(rng);
    let mapping: std::collections::BTreeMap<VertexId, VertexId> =
        ids.iter().copied().zip(permuted).collect();

    let mut insertion_order = ids.clone();
    insertion_order.shuffle(rng);

    let mut relabelled = AttributedGraph::new();
    for id in &insertion_order {
        relabelled.add_vertex(mapping[id], graph.vertex_attrs(*id)?.clone())?;
    }
    let mut edges: Vec<_> = graph.edges().map(|(a, b, attrs)| (a, b, *attrs)).collect();
    edges.shuffle(rng);
    for (a, b, attrs) in edges {
        relabelled.add_edge(mapping[&a], mapping[&b], attrs)?;
    }
    Ok(relabelled)
}

fn random_vertex_attrs(rng: &mut RngHandle) -> VertexAttrs {
    let element = ELEMENTS[rng.gen_range(0..ELEMENTS.len())];
    let charge = rng.gen_range(-1..=1);
    VertexAttrs::new(element, charge)
}

fn random_edge_attrs(rng: &mut RngHandle) -> EdgeAttrs {
    let educt = rng.gen_range(0..=3);
    if rng.gen_bool(0.4) {
        let mut product = rng.gen_range(0..=3);
        if product == educt {
            product = (product + 1) % 4;
        }
        EdgeAttrs::new(BondOrder::Pair(educt, product), if educt < product { 1 } else { -1 })
    } else {
        EdgeAttrs::new(BondOrder::Pair(educt, educt), 0)
    }
}
