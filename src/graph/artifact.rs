//! `{nodes, links}` JSON artifact consumed by the visualization front end.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Graph, Identity};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactNode {
    pub id: Identity,
    pub followers_count: u64,
    pub following_count: u64,
    pub public_repos: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLink {
    pub source: Identity,
    pub target: Identity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub nodes: Vec<ArtifactNode>,
    pub links: Vec<ArtifactLink>,
}

/// Flatten the graph into artifact form. Unexpanded nodes get zero metrics.
pub fn to_artifact(graph: &Graph) -> Artifact {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            let m = node.metrics_or_default();
            ArtifactNode {
                id: node.id.clone(),
                followers_count: m.followers_count,
                following_count: m.following_count,
                public_repos: m.public_repos,
            }
        })
        .collect();

    let links = graph
        .edges()
        .iter()
        .map(|e| ArtifactLink {
            source: e.source.clone(),
            target: e.target.clone(),
        })
        .collect();

    Artifact { nodes, links }
}

/// Write the artifact as JSON, creating missing parent directories.
pub fn write_artifact(path: &Path, artifact: &Artifact, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = if pretty {
        serde_json::to_string_pretty(artifact)?
    } else {
        serde_json::to_string(artifact)?
    };
    std::fs::write(path, json)?;

    log::info!("Graph data saved to {}", path.display());
    Ok(())
}
