//! GitHub REST API access: the external collaborator behind every lookup.

mod client;

pub use client::GithubClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::graph::{Identity, ProfileMetrics};

/// Raw, fallible source of profile and follow data.
///
/// Errors are returned as-is; converting them into defaults is the job of
/// [`crate::lookup::CachedLookup`].
#[async_trait]
pub trait RelationSource: Send + Sync {
    /// `GET /users/{identity}`
    async fn fetch_user(&self, identity: &str) -> Result<ProfileMetrics>;

    /// Accounts following `identity`, in API order.
    async fn fetch_followers(&self, identity: &str) -> Result<Vec<Identity>>;

    /// Accounts `identity` follows, in API order.
    async fn fetch_following(&self, identity: &str) -> Result<Vec<Identity>>;
}
