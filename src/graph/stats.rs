//! Run summary printed after a crawl.

use super::Artifact;

/// Counts and follower statistics over the emitted artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub node_count: usize,
    pub link_count: usize,
    pub visited_count: usize,
    pub cache_entries: usize,
    /// (min, max, rounded average) followers; `None` for an empty graph.
    pub followers: Option<(u64, u64, u64)>,
}

impl GraphStats {
    pub fn compute(artifact: &Artifact, visited_count: usize, cache_entries: usize) -> Self {
        let counts: Vec<u64> = artifact.nodes.iter().map(|n| n.followers_count).collect();

        let followers = match (counts.iter().min(), counts.iter().max()) {
            (Some(&min), Some(&max)) => {
                let sum: u64 = counts.iter().sum();
                let avg = (sum as f64 / counts.len() as f64).round() as u64;
                Some((min, max, avg))
            }
            _ => None,
        };

        Self {
            node_count: artifact.nodes.len(),
            link_count: artifact.links.len(),
            visited_count,
            cache_entries,
            followers,
        }
    }

    pub fn log_summary(&self) {
        log::info!("=== Data Collection Complete ===");
        log::info!("Total nodes (users): {}", self.node_count);
        log::info!("Total links (connections): {}", self.link_count);
        log::info!("Processed {} unique users", self.visited_count);
        log::info!("Cache entries: {}", self.cache_entries);
        if let Some((min, max, avg)) = self.followers {
            log::info!("=== Network Statistics ===");
            log::info!("Followers range: {} - {}", min, max);
            log::info!("Average followers: {}", avg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ArtifactNode;

    fn node(id: &str, followers: u64) -> ArtifactNode {
        ArtifactNode {
            id: id.to_string(),
            followers_count: followers,
            following_count: 0,
            public_repos: 0,
        }
    }

    #[test]
    fn test_stats_follower_range() {
        let artifact = Artifact {
            nodes: vec![node("a", 1), node("b", 4), node("c", 0)],
            links: vec![],
        };
        let stats = GraphStats::compute(&artifact, 2, 6);
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.visited_count, 2);
        assert_eq!(stats.cache_entries, 6);
        // 5 / 3 = 1.67 rounds to 2
        assert_eq!(stats.followers, Some((0, 4, 2)));
    }

    #[test]
    fn test_stats_empty() {
        let stats = GraphStats::compute(&Artifact::default(), 0, 0);
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.link_count, 0);
        assert!(stats.followers.is_none());
    }
}
