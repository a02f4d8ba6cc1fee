use rcc_core::{RccError, ReactionId};
use rcc_graph::AttributedGraph;
use serde::{Deserialize, Serialize};

use crate::extract::extract_reaction_center;

/// A single reaction carrying its overlaid educt/product (ITS) graph.
///
/// The record is an immutable input apart from two memoized fields: the
/// extracted reaction center and, when the WL-hash oracle runs, the graph
/// digest of that center. Both are computed once and reused afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionRecord {
    /// Opaque reaction identifier from the source dataset.
    pub id: ReactionId,
    /// The ITS graph of the reaction.
    pub its: AttributedGraph,
    /// Optional class label; unused by the engine and removable via
    /// [`ReactionRecord::strip_class`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reaction_center: Option<AttributedGraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wl_digest: Option<String>,
}

impl ReactionRecord {
    /// Creates a record from an identifier and an ITS graph.
    pub fn new(id: impl Into<ReactionId>, its: AttributedGraph) -> Self {
        Self {
            id: id.into(),
            its,
            class: None,
            reaction_center: None,
            wl_digest: None,
        }
    }

    /// Attaches a class label to the record.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Removes the class label.
    pub fn strip_class(&mut self) {
        self.class = None;
    }

    /// Returns the reaction center, extracting and memoizing it on first use.
    pub fn reaction_center(&mut self) -> Result<&AttributedGraph, RccError> {
        match self.reaction_center {
            Some(ref center) => Ok(center),
            None => {
                let center = extract_reaction_center(&self.its)?;
                Ok(self.reaction_center.insert(center))
            }
        }
    }

    /// Returns the memoized reaction center, if already extracted.
    pub fn cached_center(&self) -> Option<&AttributedGraph> {
        self.reaction_center.as_ref()
    }

    /// Returns the memoized WL digest, if already computed.
    pub fn cached_wl_digest(&self) -> Option<&str> {
        self.wl_digest.as_deref()
    }

    pub(crate) fn set_wl_digest(&mut self, digest: String) {
        self.wl_digest = Some(digest);
    }

    pub(crate) fn clear_wl_digest(&mut self) {
        self.wl_digest = None;
    }
}
