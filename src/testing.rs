//! In-memory `RelationSource` used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::cache::LookupKind;
use crate::error::{FollowgraphError, Result};
use crate::github::RelationSource;
use crate::graph::{Identity, ProfileMetrics};

struct FakeUser {
    metrics: ProfileMetrics,
    followers: Vec<Identity>,
    following: Vec<Identity>,
}

/// Accounts without a profile answer 404; accounts without relations answer
/// with empty lists. Every call is recorded.
#[derive(Default)]
pub(crate) struct FakeSource {
    users: HashMap<Identity, FakeUser>,
    failing_profiles: HashSet<Identity>,
    failing_relations: HashSet<Identity>,
    calls: Mutex<Vec<(LookupKind, Identity)>>,
}

fn ids(list: &[&str]) -> Vec<Identity> {
    list.iter().map(|s| s.to_string()).collect()
}

impl FakeSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn user(
        mut self,
        id: &str,
        followers_count: u64,
        following_count: u64,
        public_repos: u64,
        followers: &[&str],
        following: &[&str],
    ) -> Self {
        self.users.insert(
            id.to_string(),
            FakeUser {
                metrics: ProfileMetrics {
                    followers_count,
                    following_count,
                    public_repos,
                },
                followers: ids(followers),
                following: ids(following),
            },
        );
        self
    }

    /// Account whose metrics mirror its list lengths.
    pub(crate) fn links(self, id: &str, followers: &[&str], following: &[&str]) -> Self {
        let (f, g) = (followers.len() as u64, following.len() as u64);
        self.user(id, f, g, 1, followers, following)
    }

    pub(crate) fn failing_profile(mut self, id: &str) -> Self {
        self.failing_profiles.insert(id.to_string());
        self
    }

    pub(crate) fn failing_relations(mut self, id: &str) -> Self {
        self.failing_relations.insert(id.to_string());
        self
    }

    fn record(&self, kind: LookupKind, id: &str) {
        self.calls.lock().unwrap().push((kind, id.to_string()));
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn calls_for(&self, kind: LookupKind, id: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, i)| *k == kind && i == id)
            .count()
    }

    /// Identities whose profile was requested, in request order.
    pub(crate) fn profiled(&self) -> Vec<Identity> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == LookupKind::Profile)
            .map(|(_, i)| i.clone())
            .collect()
    }

    fn relation_result(
        &self,
        id: &str,
        pick: fn(&FakeUser) -> &Vec<Identity>,
    ) -> Result<Vec<Identity>> {
        if self.failing_relations.contains(id) {
            return Err(FollowgraphError::Http(format!("simulated failure for {}", id)));
        }
        Ok(self.users.get(id).map(|u| pick(u).clone()).unwrap_or_default())
    }
}

#[async_trait]
impl RelationSource for FakeSource {
    async fn fetch_user(&self, identity: &str) -> Result<ProfileMetrics> {
        self.record(LookupKind::Profile, identity);
        if self.failing_profiles.contains(identity) {
            return Err(FollowgraphError::Api {
                status: 500,
                body: "simulated failure".to_string(),
            });
        }
        self.users
            .get(identity)
            .map(|u| u.metrics)
            .ok_or_else(|| FollowgraphError::Api {
                status: 404,
                body: "Not Found".to_string(),
            })
    }

    async fn fetch_followers(&self, identity: &str) -> Result<Vec<Identity>> {
        self.record(LookupKind::Followers, identity);
        self.relation_result(identity, |u| &u.followers)
    }

    async fn fetch_following(&self, identity: &str) -> Result<Vec<Identity>> {
        self.record(LookupKind::Following, identity);
        self.relation_result(identity, |u| &u.following)
    }
}
