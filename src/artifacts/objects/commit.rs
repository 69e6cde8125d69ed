//! Commit nodes
//!
//! A commit is an immutable point in history. It holds a full snapshot of the
//! tracked files and direct handles to its parents:
//! - no parents for the root commit
//! - one parent for a normal commit
//! - two parents for a merge commit, `[receiving head, incoming head]`
//!
//! Parents are shared handles rather than ids. Ids can collide, handles cannot,
//! and since a commit can only point at commits that already exist the graph is
//! acyclic by construction.

use crate::artifacts::objects::commit_id::{CommitId, CommitMessage};
use crate::artifacts::objects::snapshot::Snapshot;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

/// Human-readable timestamp layout, e.g. `Sun Jan  1 12:00:00 2023`
pub const READABLE_TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug)]
pub struct Commit {
    id: CommitId,
    message: CommitMessage,
    timestamp: DateTime<FixedOffset>,
    snapshot: Snapshot,
    parents: Vec<Arc<Commit>>,
}

impl Commit {
    pub fn new(
        message: CommitMessage,
        timestamp: DateTime<FixedOffset>,
        snapshot: Snapshot,
        parents: Vec<Arc<Commit>>,
    ) -> Self {
        Commit {
            id: CommitId::derive(&message, &timestamp),
            message,
            timestamp,
            snapshot,
            parents,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &CommitMessage {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.short()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format the timestamp like `ctime`, e.g. `Sun Jan  1 12:00:00 2023`
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format(READABLE_TIMESTAMP_FORMAT)
            .to_string()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn parents(&self) -> &[Arc<Commit>] {
        &self.parents
    }

    pub fn parent(&self) -> Option<&Arc<Commit>> {
        self.parents.first()
    }

    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}
