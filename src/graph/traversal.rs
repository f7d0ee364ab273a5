//! Bounded follower/following crawl from a single seed account.

use std::collections::VecDeque;

use super::{Graph, Identity, VisitedSet};
use crate::config::CrawlConfig;
use crate::github::RelationSource;
use crate::lookup::CachedLookup;

#[derive(Debug, Clone)]
pub struct TraversalOptions {
    pub max_depth: usize,
    pub branch_limit: usize,
    pub dedup_edges: bool,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            max_depth: 2,
            branch_limit: 10,
            dedup_edges: false,
        }
    }
}

impl From<&CrawlConfig> for TraversalOptions {
    fn from(config: &CrawlConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            branch_limit: config.branch_limit,
            dedup_edges: config.dedup_edges,
        }
    }
}

/// Final state of one crawl.
#[derive(Debug)]
pub struct CrawlResult {
    pub graph: Graph,
    pub visited: VisitedSet,
}

/// Per-run traversal context. Sole writer of its graph and visited set.
pub struct Crawler<'a, S> {
    lookup: &'a CachedLookup<S>,
    options: TraversalOptions,
    graph: Graph,
    visited: VisitedSet,
}

impl<'a, S: RelationSource> Crawler<'a, S> {
    pub fn new(lookup: &'a CachedLookup<S>, options: TraversalOptions) -> Self {
        let graph = if options.dedup_edges {
            Graph::with_edge_dedup()
        } else {
            Graph::new()
        };
        Self {
            lookup,
            options,
            graph,
            visited: VisitedSet::new(),
        }
    }

    /// Crawl from `seed` and return the accumulated graph.
    ///
    /// Never fails: a lookup error only shrinks the failing account's
    /// contribution. Expansions are bounded by
    /// `sum((2 * branch_limit)^d for d in 0..=max_depth)`.
    pub async fn run(mut self, seed: &str) -> CrawlResult {
        let mut pending: VecDeque<(Identity, usize)> = VecDeque::new();
        pending.push_back((seed.to_string(), 0));

        while let Some((identity, depth)) = pending.pop_front() {
            let next = self.expand(&identity, depth).await;
            // Front-loading in reverse reproduces recursive call order: all of an
            // account's followers are fully expanded before its followed accounts.
            for child in next.into_iter().rev() {
                pending.push_front((child, depth + 1));
            }
        }

        log::info!(
            "Crawl from {} finished: {} users expanded, {} nodes, {} links",
            seed,
            self.visited.len(),
            self.graph.node_count(),
            self.graph.edge_count()
        );

        CrawlResult {
            graph: self.graph,
            visited: self.visited,
        }
    }

    /// Expand one account. Returns the neighbors to expand next, already cut
    /// down by the depth and branch limits.
    async fn expand(&mut self, identity: &str, depth: usize) -> Vec<Identity> {
        if !self.visited.insert(identity) {
            log::debug!("Skipping already processed user: {}", identity);
            return Vec::new();
        }

        log::info!("Processing user: {} (depth: {})", identity, depth);

        let metrics = self.lookup.fetch_profile(identity).await;
        self.graph.set_metrics(identity, metrics);

        let followers = self.lookup.fetch_followers(identity).await;
        let following = self.lookup.fetch_following(identity).await;

        for follower in &followers {
            self.graph.add_edge(follower, identity);
        }
        for followed in &following {
            self.graph.add_edge(identity, followed);
        }

        log::info!(
            "Added {} followers and {} following for {}",
            followers.len(),
            following.len(),
            identity
        );

        if depth >= self.options.max_depth {
            return Vec::new();
        }

        let limit = self.options.branch_limit;
        followers
            .into_iter()
            .take(limit)
            .chain(following.into_iter().take(limit))
            .collect()
    }
}
