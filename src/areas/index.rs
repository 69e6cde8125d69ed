//! Commit index
//!
//! A fixed-size hash table mapping commit ids to commits, with separate
//! chaining. New commits go to the front of their bucket's chain, so a lookup
//! returns the most recently inserted commit for an id. When two commits share
//! an id the older one is shadowed: it stays reachable through parent links but
//! no longer through the index.
//!
//! ## Hash
//!
//! `h = h * 31 + byte` over the id's bytes with 32-bit wrapping arithmetic,
//! reduced modulo the bucket count.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::VecDeque;
use std::sync::Arc;

pub const DEFAULT_BUCKET_COUNT: usize = 101;

#[derive(Debug)]
pub struct CommitIndex {
    buckets: Vec<VecDeque<Arc<Commit>>>,
    len: usize,
}

impl CommitIndex {
    /// Create an index with `bucket_count` chains (at least one)
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);

        CommitIndex {
            buckets: (0..bucket_count).map(|_| VecDeque::new()).collect(),
            len: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_of(&self, id: &CommitId) -> usize {
        let hash = id
            .as_ref()
            .bytes()
            .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(byte as u32));

        hash as usize % self.buckets.len()
    }

    pub fn insert(&mut self, commit: Arc<Commit>) {
        let bucket = self.bucket_of(commit.id());
        tracing::trace!(id = %commit.id(), bucket, "indexing commit");

        self.buckets[bucket].push_front(commit);
        self.len += 1;
    }

    pub fn get(&self, id: &CommitId) -> Option<&Arc<Commit>> {
        self.buckets[self.bucket_of(id)]
            .iter()
            .find(|commit| commit.id() == id)
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.iter_mut().for_each(VecDeque::clear);
        self.len = 0;
    }

    /// Length of the chain `id` hashes to
    pub fn chain_len(&self, id: &CommitId) -> usize {
        self.buckets[self.bucket_of(id)].len()
    }
}

impl Default for CommitIndex {
    fn default() -> Self {
        CommitIndex::new(DEFAULT_BUCKET_COUNT)
    }
}
