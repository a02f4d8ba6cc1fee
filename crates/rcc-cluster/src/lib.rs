#![deny(missing_docs)]
#![doc = "Reaction clustering engine: reaction-center extraction, graph \
invariants, attribute-matching isomorphism and Weisfeiler-Lehman oracles, \
and the two-stage cluster pipeline that combines them."]

/// Clustering configuration value and its validation rules.
pub mod config;
/// Cluster engine orchestrating extraction, grouping and oracles.
pub mod engine;
/// Reaction-center extraction and neighborhood expansion.
pub mod extract;
/// Graph invariants used as coarse grouping keys.
pub mod invariants;
/// Attribute-matching isomorphism oracle.
pub mod iso;
/// Reaction record type carrying the ITS graph and memoized center.
pub mod reaction;
/// JSON serialisation helpers for outcomes and configurations.
#[path = "serde.rs"]
pub mod serde_io;
/// Adjacency rank and normalized Laplacian spectrum computations.
pub mod spectral;
/// Weisfeiler-Lehman hashing and shared-table refinement.
pub mod wl;

pub use config::{ClusterConfig, OracleKind};
pub use engine::{
    cluster_flat, cluster_within_buckets, group_by_invariant, run_clustering, Cluster, ClusterMap,
    ClusterOutcome, Group, GroupClusters, GroupMap,
};
pub use extract::{expand_neighborhood, extract_reaction_center};
pub use invariants::{InvariantKind, InvariantValue};
pub use iso::are_isomorphic;
pub use reaction::ReactionRecord;
pub use wl::{wl_hash, wl_isomorphic, SharedLabelTable, WlHashOptions, WlSharedOptions};
