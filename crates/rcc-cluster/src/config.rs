use rcc_core::errors::{ErrorInfo, RccError};
use serde::{Deserialize, Serialize};

use crate::invariants::InvariantKind;
use crate::wl::{WlHashOptions, WlSharedOptions};

/// The equivalence oracle certifying cluster membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleKind {
    /// No comparison: every reaction joins the first cluster.
    None,
    /// Complete attribute-matching isomorphism test.
    Isomorphism,
    /// WL digest equality on the reaction centers.
    WlHash(WlHashOptions),
    /// Pairwise WL refinement with a shared label table.
    WlShared(WlSharedOptions),
}

/// A named pairing of pre-grouping invariant and clustering oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Invariant used for coarse bucketing, or `None` for one-stage runs.
    pub invariant: InvariantKind,
    /// Oracle certifying equivalence inside a bucket.
    pub oracle: OracleKind,
}

impl ClusterConfig {
    /// Creates a configuration from its two components.
    pub fn new(invariant: InvariantKind, oracle: OracleKind) -> Self {
        Self { invariant, oracle }
    }

    /// Validates the combination before any clustering work begins.
    ///
    /// Rejected outright: no invariant together with no oracle (nothing to
    /// run), an invariant whose groups would never be refined by an oracle,
    /// and algebraic connectivity, whose floating-point values make an
    /// unreliable equality key even after quantization.
    pub fn validate(&self) -> Result<(), RccError> {
        match (self.invariant, self.oracle) {
            (InvariantKind::None, OracleKind::None) => Err(config_error(
                "no-op-config",
                "neither an invariant nor an oracle is selected",
            )),
            (invariant, OracleKind::None) if invariant != InvariantKind::None => Err(config_error(
                "missing-oracle",
                "invariant groups require an oracle to refine them",
            )),
            (InvariantKind::AlgebraicConnectivity, _) => Err(config_error(
                "fragile-invariant",
                "algebraic connectivity is not accepted as a grouping key",
            )),
            _ => Ok(()),
        }
    }
}

fn config_error(code: &str, message: &str) -> RccError {
    RccError::Config(ErrorInfo::new(code, message))
}
