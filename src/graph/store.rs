//! Mutable node/edge accumulator filled in by the crawler.

use std::collections::{HashMap, HashSet};

use super::{Edge, Identity, Node, ProfileMetrics};

/// Nodes keep first-insertion order so output is deterministic for a warm run.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<Identity, usize>,
    edges: Vec<Edge>,
    /// Present only when parallel identical edges should be collapsed.
    seen_edges: Option<HashSet<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph that stores each (source, target) pair at most once.
    pub fn with_edge_dedup() -> Self {
        Self {
            seen_edges: Some(HashSet::new()),
            ..Self::default()
        }
    }

    /// Create a metric-less node for `id` unless one exists. Returns true if created.
    pub fn ensure_node(&mut self, id: &str) -> bool {
        if self.index.contains_key(id) {
            return false;
        }
        self.index.insert(id.to_string(), self.nodes.len());
        self.nodes.push(Node {
            id: id.to_string(),
            metrics: None,
        });
        true
    }

    /// Set metrics for `id`, creating the node if needed. The first value wins;
    /// returns false if metrics were already present.
    pub fn set_metrics(&mut self, id: &str, metrics: ProfileMetrics) -> bool {
        self.ensure_node(id);
        let idx = self.index[id];
        let node = &mut self.nodes[idx];
        if node.metrics.is_some() {
            log::debug!("Metrics for {} already set, keeping original", id);
            return false;
        }
        node.metrics = Some(metrics);
        true
    }

    /// Record `source` follows `target`. Both endpoints are created if missing.
    /// Returns false only when deduplication dropped the edge.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        self.ensure_node(source);
        self.ensure_node(target);
        let edge = Edge {
            source: source.to_string(),
            target: target.to_string(),
        };
        if let Some(seen) = self.seen_edges.as_mut() {
            if !seen.insert(edge.clone()) {
                return false;
            }
        }
        self.edges.push(edge);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
