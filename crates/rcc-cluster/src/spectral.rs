use nalgebra::{DMatrix, SymmetricEigen};
use rcc_graph::AttributedGraph;

/// Requested absolute tolerance for eigenvalue computations.
const EIGEN_TOLERANCE: f64 = 1e-6;

/// Grid width used when an eigenvalue serves as an equality key.
const QUANTIZATION_STEP: f64 = 1e-6;

/// Builds the dense adjacency matrix in vertex insertion order.
pub(crate) fn adjacency_matrix(graph: &AttributedGraph) -> DMatrix<f64> {
    let n = graph.vertex_count();
    let index: std::collections::BTreeMap<_, _> = graph
        .vertex_ids()
        .enumerate()
        .map(|(idx, id)| (id, idx))
        .collect();
    let mut adjacency = DMatrix::<f64>::zeros(n, n);
    for (a, b, _) in graph.edges() {
        let i = index[&a];
        let j = index[&b];
        adjacency[(i, j)] = 1.0;
        adjacency[(j, i)] = 1.0;
    }
    adjacency
}

/// Returns the real rank of the adjacency matrix.
pub fn adjacency_rank(graph: &AttributedGraph) -> usize {
    if graph.is_empty() {
        return 0;
    }
    adjacency_matrix(graph).rank(EIGEN_TOLERANCE)
}

/// Returns the algebraic connectivity of the graph.
///
/// This is the second-smallest eigenvalue of the normalized Laplacian
/// `I - D^{-1/2} A D^{-1/2}`. Graphs with fewer than two vertices and
/// disconnected graphs return the sentinel `0.0`, as does a failed
/// eigendecomposition.
pub fn algebraic_connectivity(graph: &AttributedGraph) -> f64 {
    let n = graph.vertex_count();
    if n < 2 || !graph.is_connected() {
        return 0.0;
    }
    let adjacency = adjacency_matrix(graph);
    let inv_sqrt_degrees: Vec<f64> = (0..n)
        .map(|i| {
            let degree: f64 = adjacency.row(i).iter().sum();
            if degree > 0.0 {
                1.0 / degree.sqrt()
            } else {
                0.0
            }
        })
        .collect();
    let mut laplacian = DMatrix::<f64>::identity(n, n);
    for i in 0..n {
        for j in 0..n {
            if adjacency[(i, j)] > 0.0 {
                laplacian[(i, j)] -= adjacency[(i, j)] * inv_sqrt_degrees[i] * inv_sqrt_degrees[j];
            }
        }
    }
    let symmetrized = 0.5 * (&laplacian + laplacian.transpose());
    let Some(eigen) = SymmetricEigen::try_new(symmetrized, EIGEN_TOLERANCE, 0) else {
        return 0.0;
    };
    let mut eigenvalues: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    eigenvalues.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    eigenvalues.get(1).copied().unwrap_or(0.0)
}

/// Snaps an eigenvalue onto the fixed comparison grid.
pub(crate) fn quantize_eigenvalue(value: f64) -> i64 {
    (value / QUANTIZATION_STEP).round() as i64
}
