use rcc_core::errors::{ErrorInfo, RccError};
use rcc_graph::AttributedGraph;
use serde::{Deserialize, Serialize};

use crate::config::{ClusterConfig, OracleKind};
use crate::invariants::{self, InvariantKind, InvariantValue};
use crate::iso;
use crate::reaction::ReactionRecord;
use crate::wl::{wl_hash, wl_isomorphic, SharedLabelTable, WlSharedOptions};

/// One cluster of mutually equivalent reactions.
///
/// The first member is the cluster's representative: every later member was
/// accepted by comparing its center against the representative's center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Stable key of the form `cluster_<n>`, zero-based in creation order.
    pub key: String,
    /// Member reactions in insertion order.
    pub members: Vec<ReactionRecord>,
}

/// Ordered collection of clusters keyed `cluster_0, cluster_1, ...`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterMap {
    clusters: Vec<Cluster>,
}

impl ClusterMap {
    /// Returns the clusters in creation order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Returns the number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns whether the map holds no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Looks up a cluster by key.
    pub fn get(&self, key: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|cluster| cluster.key == key)
    }

    /// Consumes the map and returns all members in cluster order.
    pub fn flatten(self) -> Vec<ReactionRecord> {
        self.clusters
            .into_iter()
            .flat_map(|cluster| cluster.members)
            .collect()
    }
}

/// One invariant bucket produced by [`group_by_invariant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Stable key of the form `group_<n>`, zero-based in creation order.
    pub key: String,
    /// The shared invariant value of every member's reaction center.
    pub invariant: InvariantValue,
    /// Member reactions in insertion order.
    pub members: Vec<ReactionRecord>,
}

/// Ordered collection of invariant buckets keyed `group_0, group_1, ...`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupMap {
    groups: Vec<Group>,
}

impl GroupMap {
    /// Returns the groups in creation order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns whether the map holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Looks up a group by key.
    pub fn get(&self, key: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.key == key)
    }
}

/// The clusters found inside one invariant bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupClusters {
    /// Key of the originating group.
    pub key: String,
    /// Clusters discovered within the group.
    pub clusters: ClusterMap,
}

/// Result of a full clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterOutcome {
    /// One-stage run without invariant bucketing.
    Flat(ClusterMap),
    /// Two-stage run: invariant buckets, each clustered independently.
    Grouped(Vec<GroupClusters>),
}

impl ClusterOutcome {
    /// Returns the total number of clusters across all groups.
    pub fn cluster_count(&self) -> usize {
        match self {
            ClusterOutcome::Flat(map) => map.len(),
            ClusterOutcome::Grouped(groups) => {
                groups.iter().map(|group| group.clusters.len()).sum()
            }
        }
    }

    /// Consumes the outcome and returns all members in output order.
    pub fn flatten(self) -> Vec<ReactionRecord> {
        match self {
            ClusterOutcome::Flat(map) => map.flatten(),
            ClusterOutcome::Grouped(groups) => groups
                .into_iter()
                .flat_map(|group| group.clusters.flatten())
                .collect(),
        }
    }
}

/// Clusters reactions by pairwise oracle equivalence of their centers.
///
/// Reactions are visited in input order. Each one is compared against the
/// representative of every existing cluster in creation order and joins the
/// first that matches, or opens a new cluster. The first reaction therefore
/// always lands in `cluster_0`, and the output never reorders the input.
pub fn cluster_flat(
    records: Vec<ReactionRecord>,
    oracle: &OracleKind,
) -> Result<ClusterMap, RccError> {
    let mut records = records;
    prepare_records(&mut records, oracle)?;

    let mut map = ClusterMap::default();
    let mut table = SharedLabelTable::new();
    for record in records {
        let joined = find_matching_cluster(&map, &record, oracle, &mut table)?;
        match joined {
            Some(idx) => map.clusters[idx].members.push(record),
            None => map.clusters.push(Cluster {
                key: format!("cluster_{}", map.clusters.len()),
                members: vec![record],
            }),
        }
    }
    Ok(map)
}

/// Partitions reactions into buckets of equal center invariant.
///
/// Same walk as [`cluster_flat`] with invariant value equality in place of an
/// oracle. `InvariantKind::None` is rejected: grouping without an invariant
/// is a configuration mistake, not an empty grouping.
pub fn group_by_invariant(
    records: Vec<ReactionRecord>,
    invariant: InvariantKind,
) -> Result<GroupMap, RccError> {
    if invariant == InvariantKind::None {
        return Err(RccError::Config(ErrorInfo::new(
            "invariant-none",
            "grouping requires an invariant",
        )));
    }

    let mut map = GroupMap::default();
    for mut record in records {
        let value = invariants::evaluate(invariant, record.reaction_center()?)?;
        match map.groups.iter_mut().find(|group| group.invariant == value) {
            Some(group) => group.members.push(record),
            None => map.groups.push(Group {
                key: format!("group_{}", map.groups.len()),
                invariant: value,
                members: vec![record],
            }),
        }
    }
    Ok(map)
}

/// Runs [`cluster_flat`] independently over every invariant bucket.
///
/// Each bucket gets its own WL label table; color ids never leak across
/// buckets because they are only meaningful relative to one population.
pub fn cluster_within_buckets(
    groups: GroupMap,
    oracle: &OracleKind,
) -> Result<Vec<GroupClusters>, RccError> {
    groups
        .groups
        .into_iter()
        .map(|group| {
            Ok(GroupClusters {
                key: group.key,
                clusters: cluster_flat(group.members, oracle)?,
            })
        })
        .collect()
}

/// Validates the configuration and dispatches the one- or two-stage path.
pub fn run_clustering(
    records: Vec<ReactionRecord>,
    config: &ClusterConfig,
) -> Result<ClusterOutcome, RccError> {
    config.validate()?;
    match config.invariant {
        InvariantKind::None => Ok(ClusterOutcome::Flat(cluster_flat(records, &config.oracle)?)),
        invariant => {
            let groups = group_by_invariant(records, invariant)?;
            Ok(ClusterOutcome::Grouped(cluster_within_buckets(
                groups,
                &config.oracle,
            )?))
        }
    }
}

fn prepare_records(records: &mut [ReactionRecord], oracle: &OracleKind) -> Result<(), RccError> {
    for record in records.iter_mut() {
        record.reaction_center()?;
        if let OracleKind::WlHash(opts) = oracle {
            record.clear_wl_digest();
            let digest = wl_hash(record.reaction_center()?, opts)?;
            record.set_wl_digest(digest);
        }
    }
    Ok(())
}

fn find_matching_cluster(
    map: &ClusterMap,
    candidate: &ReactionRecord,
    oracle: &OracleKind,
    table: &mut SharedLabelTable,
) -> Result<Option<usize>, RccError> {
    for (idx, cluster) in map.clusters.iter().enumerate() {
        let representative = &cluster.members[0];
        if oracle_matches(oracle, candidate, representative, table)? {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}

fn oracle_matches(
    oracle: &OracleKind,
    candidate: &ReactionRecord,
    representative: &ReactionRecord,
    table: &mut SharedLabelTable,
) -> Result<bool, RccError> {
    match oracle {
        OracleKind::None => Ok(true),
        OracleKind::Isomorphism => Ok(iso::are_isomorphic(
            prepared_center(candidate)?,
            prepared_center(representative)?,
        )),
        OracleKind::WlHash(_) => Ok(prepared_digest(candidate)? == prepared_digest(representative)?),
        OracleKind::WlShared(opts) => {
            // Centers are already extracted during preparation.
            let pair_opts = WlSharedOptions {
                extract_centers: false,
                reset: opts.reset,
            };
            wl_isomorphic(
                prepared_center(candidate)?,
                prepared_center(representative)?,
                table,
                &pair_opts,
            )
        }
    }
}

fn prepared_center(record: &ReactionRecord) -> Result<&AttributedGraph, RccError> {
    record.cached_center().ok_or_else(|| {
        RccError::Graph(
            ErrorInfo::new("missing-center", "reaction center was not prepared")
                .with_context("reaction", record.id.to_string()),
        )
    })
}

fn prepared_digest(record: &ReactionRecord) -> Result<&str, RccError> {
    record.cached_wl_digest().ok_or_else(|| {
        RccError::Graph(
            ErrorInfo::new("missing-digest", "WL digest was not prepared")
                .with_context("reaction", record.id.to_string()),
        )
    })
}
