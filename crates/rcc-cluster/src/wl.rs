use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use rcc_core::{RccError, VertexId};
use rcc_graph::{AttributedGraph, BondOrder};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::extract::extract_reaction_center;

/// Options for the per-graph WL hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WlHashOptions {
    /// Number of refinement iterations folded into the digest.
    pub iterations: usize,
    /// Whether vertex `(element, charge)` pairs seed the initial colors and
    /// edge `order` labels join the neighborhood aggregation.
    pub use_attrs: bool,
}

impl Default for WlHashOptions {
    fn default() -> Self {
        Self {
            iterations: 3,
            use_attrs: false,
        }
    }
}

/// Options for the shared-table pairwise equivalence test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WlSharedOptions {
    /// Run the reaction-center extractor on both inputs first.
    pub extract_centers: bool,
    /// Clear the shared table before seeding, discarding colors learned from
    /// earlier comparisons.
    pub reset: bool,
}

/// Refinement key interned by the [`SharedLabelTable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum WlKey {
    Initial,
    Refine { color: u64, neighborhood: Vec<u64> },
}

/// Interning table mapping refinement keys to dense integer colors.
///
/// Ids are assigned in first-seen order starting at 1, so two graphs refined
/// against the same table produce directly comparable colors. Color ids are
/// only meaningful relative to one table; comparisons across independent
/// populations must not share a table.
#[derive(Debug)]
pub struct SharedLabelTable {
    next_id: u64,
    table: HashMap<WlKey, u64>,
}

impl Default for SharedLabelTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedLabelTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            table: HashMap::new(),
        }
    }

    /// Returns the number of interned keys.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns whether the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Discards all interned keys and restarts the id sequence.
    pub fn reset(&mut self) {
        self.table.clear();
        self.next_id = 1;
    }

    fn get_or_assign(&mut self, key: WlKey) -> u64 {
        if let Some(id) = self.table.get(&key) {
            return *id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.table.insert(key, id);
        id
    }
}

/// Sorted colors and color histogram produced by one refinement round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// All vertex colors after the round, sorted ascending.
    pub sorted_colors: Vec<u64>,
    /// Count of vertices per color.
    pub histogram: BTreeMap<u64, usize>,
}

/// Color-refinement state for one graph against a shared table.
#[derive(Debug)]
pub struct WlRefinement {
    neighbors: Vec<Vec<usize>>,
    colors: Vec<u64>,
}

impl WlRefinement {
    /// Seeds every vertex with the sentinel initial color from the table.
    pub fn seed(graph: &AttributedGraph, table: &mut SharedLabelTable) -> Result<Self, RccError> {
        let order: Vec<VertexId> = graph.vertex_ids().collect();
        let index: BTreeMap<VertexId, usize> = order
            .iter()
            .enumerate()
            .map(|(idx, id)| (*id, idx))
            .collect();
        let mut neighbors = Vec::with_capacity(order.len());
        for id in &order {
            let adjacent: Vec<usize> = graph
                .neighbors(*id)?
                .into_iter()
                .map(|(neighbor, _)| index[&neighbor])
                .collect();
            neighbors.push(adjacent);
        }
        let initial = table.get_or_assign(WlKey::Initial);
        let colors = vec![initial; order.len()];
        Ok(Self { neighbors, colors })
    }

    /// Runs one refinement round against the table.
    ///
    /// New colors are committed only after every vertex has been processed,
    /// so no vertex observes a same-round color of a neighbor.
    pub fn step(&mut self, table: &mut SharedLabelTable) -> RoundSummary {
        let mut updated = Vec::with_capacity(self.colors.len());
        for (vertex, color) in self.colors.iter().enumerate() {
            let neighborhood: Vec<u64> = self.neighbors[vertex]
                .iter()
                .map(|neighbor| self.colors[*neighbor])
                .sorted()
                .collect();
            updated.push(table.get_or_assign(WlKey::Refine {
                color: *color,
                neighborhood,
            }));
        }
        self.colors = updated;
        self.summary()
    }

    /// Returns the current vertex colors in vertex insertion order.
    pub fn colors(&self) -> &[u64] {
        &self.colors
    }

    /// Returns the number of distinct colors currently in use.
    pub fn distinct_colors(&self) -> usize {
        self.colors.iter().unique().count()
    }

    fn summary(&self) -> RoundSummary {
        let sorted_colors: Vec<u64> = self.colors.iter().copied().sorted().collect();
        let mut histogram = BTreeMap::new();
        for color in &sorted_colors {
            *histogram.entry(*color).or_insert(0usize) += 1;
        }
        RoundSummary {
            sorted_colors,
            histogram,
        }
    }
}

/// Pairwise WL equivalence test with a shared label table.
///
/// Both graphs are refined in lockstep against the same table for at most
/// `|V(left)|` rounds. Diverging sorted color tuples decide non-equivalence;
/// matching histograms decide equivalence. The test is sound only in the
/// negative direction: 1-WL cannot separate certain non-isomorphic pairs
/// (e.g. two connected 3-regular graphs of equal size), and equivalence here
/// means "not separated".
pub fn wl_isomorphic(
    left: &AttributedGraph,
    right: &AttributedGraph,
    table: &mut SharedLabelTable,
    opts: &WlSharedOptions,
) -> Result<bool, RccError> {
    let extracted;
    let (left, right) = if opts.extract_centers {
        extracted = (
            extract_reaction_center(left)?,
            extract_reaction_center(right)?,
        );
        (&extracted.0, &extracted.1)
    } else {
        (left, right)
    };

    if opts.reset {
        table.reset();
    }
    let mut left_state = WlRefinement::seed(left, table)?;
    let mut right_state = WlRefinement::seed(right, table)?;

    for _ in 0..left.vertex_count() {
        let left_round = left_state.step(table);
        let right_round = right_state.step(table);
        if left_round.sorted_colors != right_round.sorted_colors {
            return Ok(false);
        }
        if left_round.histogram == right_round.histogram {
            return Ok(true);
        }
    }
    Ok(true)
}

/// Computes a canonical WL digest of a graph.
///
/// Colors start uniform (or attribute-seeded, see [`WlHashOptions`]) and are
/// refined `iterations` times; each round replaces a vertex color with a
/// digest of the old color and the sorted multiset of `(edge label, neighbor
/// color)` pairs. The graph digest folds every round's color histogram plus
/// the sorted final colors into one SHA-256 value.
///
/// Equal digests do not prove isomorphism; this is a bucketing key, and
/// callers needing exactness must confirm collisions with a complete oracle.
pub fn wl_hash(graph: &AttributedGraph, opts: &WlHashOptions) -> Result<String, RccError> {
    let order: Vec<VertexId> = graph.vertex_ids().collect();
    let index: BTreeMap<VertexId, usize> = order
        .iter()
        .enumerate()
        .map(|(idx, id)| (*id, idx))
        .collect();

    let mut neighbors: Vec<Vec<(u64, usize)>> = Vec::with_capacity(order.len());
    let mut colors: Vec<u64> = Vec::with_capacity(order.len());
    for id in &order {
        let adjacent: Vec<(u64, usize)> = graph
            .neighbors(*id)?
            .into_iter()
            .map(|(neighbor, attrs)| {
                let label = if opts.use_attrs {
                    edge_label(attrs.order)
                } else {
                    0
                };
                (label, index[&neighbor])
            })
            .collect();
        neighbors.push(adjacent);
        let attrs = graph.vertex_attrs(*id)?;
        colors.push(if opts.use_attrs {
            digest64(|hasher| {
                hasher.update(b"vertex");
                hasher.update((attrs.element.len() as u64).to_le_bytes());
                hasher.update(attrs.element.as_bytes());
                hasher.update(attrs.charge.to_le_bytes());
            })
        } else {
            digest64(|hasher| hasher.update(b"uniform"))
        });
    }

    let mut hasher = Sha256::new();
    hasher.update(b"wl-graph-hash");
    hasher.update((opts.iterations as u64).to_le_bytes());
    hasher.update([opts.use_attrs as u8]);
    update_histogram(&colors, &mut hasher);

    for _ in 0..opts.iterations {
        let mut updated = Vec::with_capacity(colors.len());
        for (vertex, color) in colors.iter().enumerate() {
            let neighborhood: Vec<(u64, u64)> = neighbors[vertex]
                .iter()
                .map(|(label, neighbor)| (*label, colors[*neighbor]))
                .sorted()
                .collect();
            updated.push(digest64(|hasher| {
                hasher.update(color.to_le_bytes());
                hasher.update((neighborhood.len() as u64).to_le_bytes());
                for (label, neighbor_color) in &neighborhood {
                    hasher.update(label.to_le_bytes());
                    hasher.update(neighbor_color.to_le_bytes());
                }
            }));
        }
        colors = updated;
        update_histogram(&colors, &mut hasher);
    }

    let final_colors: Vec<u64> = colors.into_iter().sorted().collect();
    hasher.update((final_colors.len() as u64).to_le_bytes());
    for color in &final_colors {
        hasher.update(color.to_le_bytes());
    }
    Ok(hex::encode(hasher.finalize()))
}

fn edge_label(order: BondOrder) -> u64 {
    digest64(|hasher| match order {
        BondOrder::Scalar(value) => {
            hasher.update(b"scalar");
            hasher.update(value.to_le_bytes());
        }
        BondOrder::Pair(educt, product) => {
            hasher.update(b"pair");
            hasher.update(educt.to_le_bytes());
            hasher.update(product.to_le_bytes());
        }
    })
}

fn digest64(feed: impl FnOnce(&mut Sha256)) -> u64 {
    let mut hasher = Sha256::new();
    feed(&mut hasher);
    let digest = hasher.finalize();
    u64::from_le_bytes(digest[..8].try_into().expect("digest is 32 bytes"))
}

fn update_histogram(colors: &[u64], hasher: &mut Sha256) {
    let mut histogram: BTreeMap<u64, u64> = BTreeMap::new();
    for color in colors {
        *histogram.entry(*color).or_insert(0) += 1;
    }
    hasher.update((histogram.len() as u64).to_le_bytes());
    for (color, count) in histogram {
        hasher.update(color.to_le_bytes());
        hasher.update(count.to_le_bytes());
    }
}
