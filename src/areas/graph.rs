//! Commit graph
//!
//! Append-only store of every commit created in this process. Commits are
//! immutable once created; the graph never removes one. Lookups by id go
//! through the [`CommitIndex`].

use crate::areas::index::CommitIndex;
use crate::artifacts::core::clock::Clock;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::{CommitId, CommitMessage};
use crate::artifacts::objects::snapshot::Snapshot;
use crate::errors::RepositoryError;
use std::sync::Arc;

pub struct CommitGraph {
    clock: Box<dyn Clock>,
    index: CommitIndex,
    commits: Vec<Arc<Commit>>,
}

impl CommitGraph {
    pub fn new(clock: Box<dyn Clock>, bucket_count: usize) -> Self {
        CommitGraph {
            clock,
            index: CommitIndex::new(bucket_count),
            commits: Vec::new(),
        }
    }

    /// Create a commit and add it to the graph
    ///
    /// The snapshot is taken by value: callers hand over their own copy, so
    /// later changes to a branch's working list never reach a sealed commit.
    pub fn create_commit(
        &mut self,
        message: CommitMessage,
        parents: Vec<Arc<Commit>>,
        snapshot: Snapshot,
    ) -> Arc<Commit> {
        let commit = Arc::new(Commit::new(message, self.clock.now(), snapshot, parents));

        if self.index.get(commit.id()).is_some() {
            tracing::warn!(id = %commit.id(), "commit id collision, older commit is shadowed");
        }

        self.index.insert(Arc::clone(&commit));
        self.commits.push(Arc::clone(&commit));

        tracing::debug!(
            id = %commit.id(),
            parents = commit.parent_count(),
            files = commit.snapshot().len(),
            "created commit"
        );

        commit
    }

    pub fn find_commit(&self, id: &CommitId) -> Result<Arc<Commit>, RepositoryError> {
        self.index
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::CommitNotFound(id.to_string()))
    }

    /// Every commit in creation order, shadowed ones included
    pub fn commits(&self) -> &[Arc<Commit>] {
        &self.commits
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn index(&self) -> &CommitIndex {
        &self.index
    }
}

impl Drop for CommitGraph {
    // newest first, so releasing a long chain never recurses
    fn drop(&mut self) {
        self.index.clear();
        while let Some(commit) = self.commits.pop() {
            drop(commit);
        }
    }
}

impl std::fmt::Debug for CommitGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitGraph")
            .field("index", &self.index)
            .field("commits", &self.commits.len())
            .finish()
    }
}
