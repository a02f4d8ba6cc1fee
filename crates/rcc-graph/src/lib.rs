#![deny(missing_docs)]

//! Attributed undirected graph model for overlaid reaction (ITS) graphs.
//!
//! The graph carries chemical vertex attributes (`element`, `charge`) and
//! edge attributes (`order`, `standard_order`), preserves external vertex
//! identity across subgraph extraction, and keeps every iteration order
//! deterministic.

mod generators;
mod graph;
mod hash;
mod serialization;

pub use generators::{gen_attributed_graph, relabel};
pub use graph::{AttributedGraph, BondOrder, EdgeAttrs, VertexAttrs};
pub use hash::canonical_hash;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
