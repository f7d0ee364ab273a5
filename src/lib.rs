pub mod config;
pub mod error;
pub mod cache;
pub mod github;
pub mod lookup;
pub mod graph;

#[cfg(test)]
pub(crate) mod testing;

pub use config::Config;
pub use error::{FollowgraphError, Result};
pub use github::{GithubClient, RelationSource};
pub use graph::{to_artifact, write_artifact, Crawler, Graph, TraversalOptions};
pub use lookup::CachedLookup;
