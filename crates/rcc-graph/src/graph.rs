use std::collections::BTreeMap;

use rcc_core::{
    errors::{ErrorInfo, RccError},
    VertexId,
};
use serde::{Deserialize, Serialize};

/// Attributes carried by every vertex (one atom of the overlaid reaction).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexAttrs {
    /// Chemical element symbol.
    pub element: String,
    /// Formal charge of the atom.
    pub charge: i32,
}

impl VertexAttrs {
    /// Creates vertex attributes from an element symbol and a charge.
    pub fn new(element: impl Into<String>, charge: i32) -> Self {
        Self {
            element: element.into(),
            charge,
        }
    }
}

impl Default for VertexAttrs {
    fn default() -> Self {
        Self {
            element: "C".to_string(),
            charge: 0,
        }
    }
}

/// Bond order annotation on an edge.
///
/// ITS edges conventionally carry a pair `(educt, product)` giving the bond
/// order on either side of the reaction. A scalar order appears on plain
/// molecular graphs and never marks a changing bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BondOrder {
    /// Single-sided bond order.
    Scalar(i32),
    /// Educt and product side bond orders.
    Pair(i32, i32),
}

impl BondOrder {
    /// Returns whether the educt and product sides disagree.
    pub fn sides_differ(&self) -> bool {
        match self {
            BondOrder::Scalar(_) => false,
            BondOrder::Pair(educt, product) => educt != product,
        }
    }
}

impl Default for BondOrder {
    fn default() -> Self {
        BondOrder::Scalar(0)
    }
}

/// Attributes carried by every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct EdgeAttrs {
    /// Bond order annotation.
    pub order: BondOrder,
    /// Signed bond-change indicator.
    pub standard_order: i32,
}

impl EdgeAttrs {
    /// Creates edge attributes from an order annotation and change indicator.
    pub fn new(order: BondOrder, standard_order: i32) -> Self {
        Self {
            order,
            standard_order,
        }
    }

    /// Returns whether this edge represents a changing bond.
    pub fn is_changing(&self) -> bool {
        self.order.sides_differ() && self.standard_order != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EdgeRecord {
    a: usize,
    b: usize,
    attrs: EdgeAttrs,
}

/// Undirected attributed graph addressed by stable external [`VertexId`]s.
///
/// Vertices are stored as indices internally; the external identifiers are
/// preserved verbatim across subgraph extraction so that repeated extraction
/// yields identical graphs. Iteration order for vertices and edges is
/// insertion order, which keeps every downstream computation deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributedGraph {
    ids: Vec<VertexId>,
    attrs: Vec<VertexAttrs>,
    index: BTreeMap<VertexId, usize>,
    edges: Vec<EdgeRecord>,
    adjacency: Vec<Vec<(usize, usize)>>,
}

impl AttributedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns whether the provided vertex exists.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Adds a vertex with the provided attributes.
    pub fn add_vertex(&mut self, id: VertexId, attrs: VertexAttrs) -> Result<(), RccError> {
        if self.index.contains_key(&id) {
            return Err(graph_error("duplicate-vertex", "vertex already exists")
                .with_context("vertex", id.as_raw()));
        }
        self.index.insert(id, self.ids.len());
        self.ids.push(id);
        self.attrs.push(attrs);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Adds an undirected edge between two existing vertices.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, attrs: EdgeAttrs) -> Result<(), RccError> {
        if a == b {
            return Err(graph_error("self-loop", "self loops are not representable")
                .with_context("vertex", a.as_raw()));
        }
        let idx_a = self.vertex_index(a)?;
        let idx_b = self.vertex_index(b)?;
        if self.adjacency[idx_a].iter().any(|(nbr, _)| *nbr == idx_b) {
            return Err(graph_error("duplicate-edge", "edge already exists")
                .with_context("a", a.as_raw())
                .with_context("b", b.as_raw()));
        }
        let edge_idx = self.edges.len();
        self.edges.push(EdgeRecord {
            a: idx_a,
            b: idx_b,
            attrs,
        });
        self.adjacency[idx_a].push((idx_b, edge_idx));
        self.adjacency[idx_b].push((idx_a, edge_idx));
        Ok(())
    }

    /// Returns the identifiers of all vertices in insertion order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    /// Returns the attributes of the provided vertex.
    pub fn vertex_attrs(&self, id: VertexId) -> Result<&VertexAttrs, RccError> {
        let idx = self.vertex_index(id)?;
        Ok(&self.attrs[idx])
    }

    /// Returns all edges as `(a, b, attrs)` triples in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (VertexId, VertexId, &EdgeAttrs)> + '_ {
        self.edges
            .iter()
            .map(|edge| (self.ids[edge.a], self.ids[edge.b], &edge.attrs))
    }

    /// Returns the attributes of the edge between two vertices, if present.
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&EdgeAttrs> {
        let idx_a = *self.index.get(&a)?;
        let idx_b = *self.index.get(&b)?;
        self.adjacency[idx_a]
            .iter()
            .find(|(nbr, _)| *nbr == idx_b)
            .map(|(_, edge_idx)| &self.edges[*edge_idx].attrs)
    }

    /// Returns the neighbours of a vertex together with the connecting edge
    /// attributes, in edge insertion order.
    pub fn neighbors(&self, id: VertexId) -> Result<Vec<(VertexId, &EdgeAttrs)>, RccError> {
        let idx = self.vertex_index(id)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|(nbr, edge_idx)| (self.ids[*nbr], &self.edges[*edge_idx].attrs))
            .collect())
    }

    /// Returns the degree of a vertex.
    pub fn degree(&self, id: VertexId) -> Result<usize, RccError> {
        let idx = self.vertex_index(id)?;
        Ok(self.adjacency[idx].len())
    }

    /// Returns the degree sequence sorted ascending.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self.adjacency.iter().map(Vec::len).collect();
        degrees.sort_unstable();
        degrees
    }

    /// Extracts the vertex-induced subgraph over the provided vertices.
    ///
    /// The result is a fresh graph; vertex identifiers and attributes carry
    /// over unchanged, and the parent's insertion order is preserved. Every
    /// edge whose endpoints both survive is included.
    pub fn induced_subgraph(&self, keep: &[VertexId]) -> Result<AttributedGraph, RccError> {
        let mut selected = vec![false; self.ids.len()];
        for id in keep {
            let idx = self.vertex_index(*id)?;
            selected[idx] = true;
        }
        let mut subgraph = AttributedGraph::new();
        for (idx, id) in self.ids.iter().enumerate() {
            if selected[idx] {
                subgraph.add_vertex(*id, self.attrs[idx].clone())?;
            }
        }
        for edge in &self.edges {
            if selected[edge.a] && selected[edge.b] {
                subgraph.add_edge(self.ids[edge.a], self.ids[edge.b], edge.attrs)?;
            }
        }
        Ok(subgraph)
    }

    /// Returns whether the graph is connected. Empty and single-vertex
    /// graphs count as connected.
    pub fn is_connected(&self) -> bool {
        if self.ids.len() <= 1 {
            return true;
        }
        let mut visited = vec![false; self.ids.len()];
        let mut stack = vec![0usize];
        visited[0] = true;
        let mut seen = 1usize;
        while let Some(idx) = stack.pop() {
            for (nbr, _) in &self.adjacency[idx] {
                if !visited[*nbr] {
                    visited[*nbr] = true;
                    seen += 1;
                    stack.push(*nbr);
                }
            }
        }
        seen == self.ids.len()
    }

    /// Returns the stored vertex payloads for serialization and hashing.
    pub(crate) fn vertex_payloads(&self) -> impl Iterator<Item = (VertexId, &VertexAttrs)> + '_ {
        self.ids.iter().copied().zip(self.attrs.iter())
    }

    fn vertex_index(&self, id: VertexId) -> Result<usize, RccError> {
        self.index.get(&id).copied().ok_or_else(|| {
            graph_error("unknown-vertex", "vertex does not exist").with_context("vertex", id.as_raw())
        })
    }
}

fn graph_error(code: impl Into<String>, message: impl Into<String>) -> RccError {
    RccError::Graph(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> RccError;
}

impl ContextExt for RccError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> RccError {
        match self {
            RccError::Graph(info) => RccError::Graph(info.with_context(key, value.to_string())),
            other => other,
        }
    }
}
