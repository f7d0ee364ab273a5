//! Follow graph module: data model, bounded traversal and artifact output.
//!
//! A crawl expands from one seed account, records every account it sees as a
//! node and every follow relationship as a directed edge, and serializes the
//! result as `{nodes, links}` JSON.

mod artifact;
mod stats;
mod store;
mod traversal;
mod visited;

pub use artifact::{to_artifact, write_artifact, Artifact, ArtifactLink, ArtifactNode};
pub use stats::GraphStats;
pub use store::Graph;
pub use traversal::{CrawlResult, Crawler, TraversalOptions};
pub use visited::VisitedSet;

use serde::{Deserialize, Serialize};

/// Unique account login.
pub type Identity = String;

/// Profile counters for one account. All-zero when the profile lookup failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    pub followers_count: u64,
    pub following_count: u64,
    pub public_repos: u64,
}

/// One account in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: Identity,
    /// `None` until the account itself is expanded; neighbors that are never
    /// expanded keep `None` and serialize as zeros.
    pub metrics: Option<ProfileMetrics>,
}

impl Node {
    /// Metrics as emitted in the artifact.
    pub fn metrics_or_default(&self) -> ProfileMetrics {
        self.metrics.unwrap_or_default()
    }
}

/// `source` follows `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: Identity,
    pub target: Identity,
}
