use sha2::{Digest, Sha256};

use crate::graph::{AttributedGraph, BondOrder};

/// Computes the canonical structural hash for the provided graph.
///
/// The digest covers sorted vertex payloads and sorted canonical edge
/// payloads, so it is invariant under insertion order but not under vertex
/// relabelling. It is the content address used when persisting refined
/// reaction data.
pub fn canonical_hash(graph: &AttributedGraph) -> String {
    let mut hasher = Sha256::new();

    let mut vertices: Vec<(u64, &str, i32)> = graph
        .vertex_payloads()
        .map(|(id, attrs)| (id.as_raw(), attrs.element.as_str(), attrs.charge))
        .collect();
    vertices.sort();
    hasher.update((vertices.len() as u64).to_le_bytes());
    for (raw, element, charge) in vertices {
        hasher.update(raw.to_le_bytes());
        hasher.update((element.len() as u64).to_le_bytes());
        hasher.update(element.as_bytes());
        hasher.update(charge.to_le_bytes());
    }

    let mut edges: Vec<(u64, u64, BondOrder, i32)> = graph
        .edges()
        .map(|(a, b, attrs)| {
            let (lo, hi) = if a.as_raw() <= b.as_raw() {
                (a.as_raw(), b.as_raw())
            } else {
                (b.as_raw(), a.as_raw())
            };
            (lo, hi, attrs.order, attrs.standard_order)
        })
        .collect();
    edges.sort();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (lo, hi, order, standard_order) in edges {
        hasher.update(lo.to_le_bytes());
        hasher.update(hi.to_le_bytes());
        encode_order(order, &mut hasher);
        hasher.update(standard_order.to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}

fn encode_order(order: BondOrder, hasher: &mut Sha256) {
    match order {
        BondOrder::Scalar(value) => {
            hasher.update(b"scalar");
            hasher.update(value.to_le_bytes());
        }
        BondOrder::Pair(educt, product) => {
            hasher.update(b"pair");
            hasher.update(educt.to_le_bytes());
            hasher.update(product.to_le_bytes());
        }
    }
}
