use rcc_core::errors::{ErrorInfo, RccError};
use rcc_graph::AttributedGraph;
use serde::{Deserialize, Serialize};

use crate::spectral;

/// The graph invariants available for coarse pre-grouping.
///
/// Every invariant is consistent (isomorphic graphs produce equal values)
/// but none is complete, so invariant equality only narrows the candidate
/// set for a full oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvariantKind {
    /// No pre-grouping.
    None,
    /// Number of vertices.
    VertexCount,
    /// Number of edges.
    EdgeCount,
    /// Degree sequence sorted ascending.
    VertexDegree,
    /// Real rank of the adjacency matrix.
    Rank,
    /// Second-smallest normalized Laplacian eigenvalue, quantized.
    AlgebraicConnectivity,
}

/// An orderable invariant value compared by plain equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InvariantValue {
    /// A counting invariant (vertex count, edge count, rank).
    Count(usize),
    /// A sorted degree sequence.
    Degrees(Vec<usize>),
    /// Algebraic connectivity in units of the 1e-6 comparison grid.
    Connectivity(i64),
}

/// Evaluates the invariant on a graph.
///
/// `InvariantKind::None` carries no value and is rejected; callers decide
/// beforehand whether grouping happens at all.
pub fn evaluate(kind: InvariantKind, graph: &AttributedGraph) -> Result<InvariantValue, RccError> {
    match kind {
        InvariantKind::None => Err(RccError::Config(ErrorInfo::new(
            "invariant-none",
            "no invariant selected to evaluate",
        ))),
        InvariantKind::VertexCount => Ok(InvariantValue::Count(graph.vertex_count())),
        InvariantKind::EdgeCount => Ok(InvariantValue::Count(graph.edge_count())),
        InvariantKind::VertexDegree => Ok(InvariantValue::Degrees(graph.degree_sequence())),
        InvariantKind::Rank => Ok(InvariantValue::Count(spectral::adjacency_rank(graph))),
        InvariantKind::AlgebraicConnectivity => Ok(InvariantValue::Connectivity(
            spectral::quantize_eigenvalue(spectral::algebraic_connectivity(graph)),
        )),
    }
}
