//! Memoized, total profile and relation lookups.
//!
//! Every operation here always returns a value: a failed request is logged
//! and replaced with zero metrics or an empty list, and that replacement is
//! cached like a real answer for the rest of the run.

use crate::cache::{LookupCache, LookupKey, LookupKind, LookupValue};
use crate::github::RelationSource;
use crate::graph::{Identity, ProfileMetrics};

/// Wraps a [`RelationSource`] with a per-run [`LookupCache`].
pub struct CachedLookup<S> {
    source: S,
    cache: LookupCache,
}

impl<S: RelationSource> CachedLookup<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: LookupCache::new(),
        }
    }

    /// Profile metrics for `identity`; zeros if the lookup fails.
    pub async fn fetch_profile(&self, identity: &str) -> ProfileMetrics {
        let key = LookupKey::new(LookupKind::Profile, identity);
        let value = self
            .cache
            .get_or_compute(key, move || async move {
                match self.source.fetch_user(identity).await {
                    Ok(metrics) => LookupValue::Profile(metrics),
                    Err(e) => {
                        log::warn!("Error fetching user info for {}: {}", identity, e);
                        LookupValue::Profile(ProfileMetrics::default())
                    }
                }
            })
            .await;

        match value {
            LookupValue::Profile(metrics) => metrics,
            LookupValue::Relations(_) => ProfileMetrics::default(),
        }
    }

    /// Accounts following `identity`; empty if the lookup fails.
    pub async fn fetch_followers(&self, identity: &str) -> Vec<Identity> {
        self.relations(LookupKind::Followers, identity).await
    }

    /// Accounts `identity` follows; empty if the lookup fails.
    pub async fn fetch_following(&self, identity: &str) -> Vec<Identity> {
        self.relations(LookupKind::Following, identity).await
    }

    async fn relations(&self, kind: LookupKind, identity: &str) -> Vec<Identity> {
        let key = LookupKey::new(kind, identity);
        let value = self
            .cache
            .get_or_compute(key, move || async move {
                let result = match kind {
                    LookupKind::Following => self.source.fetch_following(identity).await,
                    _ => self.source.fetch_followers(identity).await,
                };
                match result {
                    Ok(ids) => LookupValue::Relations(ids),
                    Err(e) => {
                        log::warn!("Error fetching {:?} for {}: {}", kind, identity, e);
                        LookupValue::Relations(Vec::new())
                    }
                }
            })
            .await;

        match value {
            LookupValue::Relations(ids) => ids,
            LookupValue::Profile(_) => Vec::new(),
        }
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
