use std::collections::BTreeMap;

use rcc_core::VertexId;
use rcc_graph::{AttributedGraph, BondOrder, VertexAttrs};

/// Decides isomorphism of two attributed graphs under the combined matcher.
///
/// A bijection between the vertex sets must preserve adjacency in both
/// directions and satisfy all three attribute matchers at once: equal
/// `charge`, equal `element` on matched vertices, equal `order` on matched
/// edges. Checking the matchers in separate passes would accept graphs whose
/// per-attribute bijections exist but disagree, so a single search carries
/// the joint predicate.
pub fn are_isomorphic(left: &AttributedGraph, right: &AttributedGraph) -> bool {
    if left.vertex_count() != right.vertex_count() || left.edge_count() != right.edge_count() {
        return false;
    }
    if left.is_empty() {
        return true;
    }
    if left.degree_sequence() != right.degree_sequence() {
        return false;
    }

    let left_view = GraphView::build(left);
    let right_view = GraphView::build(right);
    if left_view.sorted_vertex_keys() != right_view.sorted_vertex_keys() {
        return false;
    }

    let mut search = Search {
        left: &left_view,
        right: &right_view,
        mapping: vec![usize::MAX; left_view.len()],
        used: vec![false; right_view.len()],
    };
    search.extend(0)
}

/// Index-based adjacency snapshot of an attributed graph.
struct GraphView {
    attrs: Vec<VertexAttrs>,
    degrees: Vec<usize>,
    adjacency: Vec<BTreeMap<usize, BondOrder>>,
    order: Vec<usize>,
}

impl GraphView {
    fn build(graph: &AttributedGraph) -> Self {
        let ids: Vec<VertexId> = graph.vertex_ids().collect();
        let index: BTreeMap<VertexId, usize> = ids
            .iter()
            .enumerate()
            .map(|(idx, id)| (*id, idx))
            .collect();
        let mut attrs = Vec::with_capacity(ids.len());
        let mut adjacency = vec![BTreeMap::new(); ids.len()];
        for (idx, id) in ids.iter().enumerate() {
            attrs.push(
                graph
                    .vertex_attrs(*id)
                    .cloned()
                    .unwrap_or_default(),
            );
            if let Ok(neighbors) = graph.neighbors(*id) {
                for (neighbor, edge_attrs) in neighbors {
                    adjacency[idx].insert(index[&neighbor], edge_attrs.order);
                }
            }
        }
        let degrees: Vec<usize> = adjacency.iter().map(BTreeMap::len).collect();

        // Highest degree first keeps the search tree shallow.
        let mut order: Vec<usize> = (0..ids.len()).collect();
        order.sort_by(|a, b| degrees[*b].cmp(&degrees[*a]).then(a.cmp(b)));

        Self {
            attrs,
            degrees,
            adjacency,
            order,
        }
    }

    fn len(&self) -> usize {
        self.attrs.len()
    }

    fn sorted_vertex_keys(&self) -> Vec<(String, i32, usize)> {
        let mut keys: Vec<(String, i32, usize)> = self
            .attrs
            .iter()
            .zip(&self.degrees)
            .map(|(attrs, degree)| (attrs.element.clone(), attrs.charge, *degree))
            .collect();
        keys.sort();
        keys
    }
}

struct Search<'v> {
    left: &'v GraphView,
    right: &'v GraphView,
    mapping: Vec<usize>,
    used: Vec<bool>,
}

impl Search<'_> {
    fn extend(&mut self, depth: usize) -> bool {
        if depth == self.left.order.len() {
            return true;
        }
        let v = self.left.order[depth];
        for c in 0..self.right.len() {
            if self.used[c] || !self.feasible(v, c) {
                continue;
            }
            self.mapping[v] = c;
            self.used[c] = true;
            if self.extend(depth + 1) {
                return true;
            }
            self.mapping[v] = usize::MAX;
            self.used[c] = false;
        }
        false
    }

    fn feasible(&self, v: usize, c: usize) -> bool {
        let left_attrs = &self.left.attrs[v];
        let right_attrs = &self.right.attrs[c];
        if left_attrs.charge != right_attrs.charge
            || left_attrs.element != right_attrs.element
            || self.left.degrees[v] != self.right.degrees[c]
        {
            return false;
        }
        // Both adjacency and non-adjacency must carry over to the image,
        // together with equal bond orders on matched edges.
        for (u, order) in &self.left.adjacency[v] {
            let m = self.mapping[*u];
            if m == usize::MAX {
                continue;
            }
            match self.right.adjacency[c].get(&m) {
                Some(image_order) if image_order == order => {}
                _ => return false,
            }
        }
        for (w, _) in &self.right.adjacency[c] {
            if !self.used[*w] {
                continue;
            }
            let preimage = self
                .mapping
                .iter()
                .position(|mapped| *mapped == *w);
            match preimage {
                Some(u) if self.left.adjacency[v].contains_key(&u) => {}
                _ => return false,
            }
        }
        true
    }
}
