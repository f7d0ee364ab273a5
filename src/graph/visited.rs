//! Set of accounts that have already been expanded during a crawl.

use std::collections::HashSet;

use super::Identity;

/// Grows monotonically for the lifetime of one crawl.
#[derive(Debug, Default)]
pub struct VisitedSet {
    inner: HashSet<Identity>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `identity` as visited. Returns `false` if it already was, so the
    /// check and the mark happen in one step.
    pub fn insert(&mut self, identity: &str) -> bool {
        if self.inner.contains(identity) {
            return false;
        }
        self.inner.insert(identity.to_string())
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.inner.contains(identity)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.inner.iter()
    }
}
