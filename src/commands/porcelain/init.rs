use crate::areas::graph::CommitGraph;
use crate::areas::refs::BranchRegistry;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitMessage;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::errors::Result;
use std::sync::Arc;

pub const ROOT_COMMIT_MESSAGE: &str = "Initial commit";

#[derive(Debug)]
pub struct Initialized {
    pub branch: BranchName,
    pub root: Arc<Commit>,
}

impl Repository {
    /// Start a history: a root commit with no files and no parents, and the
    /// default branch pointing at it as the current branch
    ///
    /// Calling it again discards the in-memory history and starts over. Snapshot
    /// folders already on disk are left alone.
    pub fn init(&mut self) -> Result<Initialized> {
        let branch = BranchName::try_parse(self.config().default_branch.clone())?;
        self.store().create_root()?;

        let mut graph = CommitGraph::new(self.config().clock(), self.config().index_buckets);
        let root = graph.create_commit(
            CommitMessage::try_parse(ROOT_COMMIT_MESSAGE)?,
            vec![],
            Snapshot::new(),
        );

        if self.is_initialized() {
            tracing::info!("discarding in-memory history");
        }
        self.reset(graph, BranchRegistry::new(branch.clone(), Arc::clone(&root)));

        tracing::info!(branch = %branch, root = %root.id(), "initialized repository");

        Ok(Initialized { branch, root })
    }
}
