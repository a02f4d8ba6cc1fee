#![deny(missing_docs)]
#![doc = "Core identifiers, error types and deterministic RNG helpers shared by \
the RCC reaction clustering crates."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, RccError};
pub use rng::{derive_substream_seed, RngHandle};

/// Stable external identifier for a vertex of an attributed graph.
///
/// Vertex identifiers come from the upstream reaction data (atom map numbers)
/// and survive subgraph extraction unchanged, which is what makes repeated
/// extraction idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Opaque identifier attached to a reaction record.
///
/// Upstream datasets use both numeric and textual reaction ids, so both are
/// accepted and round-trip through serialization untouched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReactionId {
    /// Numeric identifier.
    Int(i64),
    /// Textual identifier.
    Text(String),
}

impl std::fmt::Display for ReactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReactionId::Int(value) => write!(f, "{value}"),
            ReactionId::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for ReactionId {
    fn from(value: i64) -> Self {
        ReactionId::Int(value)
    }
}

impl From<&str> for ReactionId {
    fn from(value: &str) -> Self {
        ReactionId::Text(value.to_string())
    }
}
