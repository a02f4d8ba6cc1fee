use std::collections::BTreeSet;

use rcc_core::{RccError, VertexId};
use rcc_graph::AttributedGraph;

/// Extracts the reaction center of an ITS graph.
///
/// The center is the vertex-induced subgraph over all vertices incident to a
/// changing bond: an edge whose `order` pair has unequal sides and whose
/// `standard_order` is non-zero. Scalar orders never qualify. The induced
/// closure also picks up unchanged bonds between two selected atoms.
///
/// Returns a fresh graph and leaves the input untouched; a graph without
/// changing bonds yields the empty graph. Running the extraction on its own
/// output returns an identical graph.
pub fn extract_reaction_center(graph: &AttributedGraph) -> Result<AttributedGraph, RccError> {
    let selected = changing_bond_vertices(graph);
    graph.induced_subgraph(&selected)
}

/// Expands a reaction center by `hops` shells of its surrounding ITS graph.
///
/// The result is the vertex-induced subgraph of `graph` over the center's
/// vertices plus every vertex reachable within `hops` steps from them.
/// `hops = 0` reproduces the center itself.
pub fn expand_neighborhood(
    graph: &AttributedGraph,
    center: &AttributedGraph,
    hops: usize,
) -> Result<AttributedGraph, RccError> {
    let mut selected: BTreeSet<VertexId> = center.vertex_ids().collect();
    let mut frontier: Vec<VertexId> = selected.iter().copied().collect();
    for _ in 0..hops {
        let mut next = Vec::new();
        for id in frontier {
            for (neighbor, _) in graph.neighbors(id)? {
                if selected.insert(neighbor) {
                    next.push(neighbor);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    let selected: Vec<VertexId> = selected.into_iter().collect();
    graph.induced_subgraph(&selected)
}

fn changing_bond_vertices(graph: &AttributedGraph) -> Vec<VertexId> {
    let mut selected = BTreeSet::new();
    for (a, b, attrs) in graph.edges() {
        if attrs.is_changing() {
            selected.insert(a);
            selected.insert(b);
        }
    }
    selected.into_iter().collect()
}
