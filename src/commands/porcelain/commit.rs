use crate::areas::repository::Repository;
use crate::areas::store::SnapshotReport;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitMessage;
use crate::errors::Result;
use std::sync::Arc;

#[derive(Debug)]
pub struct Committed {
    pub commit: Arc<Commit>,
    pub report: SnapshotReport,
}

impl Repository {
    /// Seal the current branch's working list into a new commit
    ///
    /// The new commit's only parent is the current head. Its files are copied
    /// from the working directory into the snapshot store, then the current
    /// branch moves to it.
    pub fn commit(&mut self, message: &str) -> Result<Committed> {
        let message = CommitMessage::try_parse(message)?;

        let (parent, snapshot) = {
            let current = self.refs()?.current();
            (Arc::clone(current.head()), current.working().clone())
        };

        let commit = self
            .graph_mut()
            .create_commit(message, vec![parent], snapshot);
        let report = self.store().save_snapshot(&commit, self.workspace());
        self.refs_mut()?.advance_current(Arc::clone(&commit));

        tracing::info!(
            id = %commit.id(),
            files = commit.snapshot().len(),
            skipped = report.skipped.len(),
            "committed"
        );

        Ok(Committed { commit, report })
    }
}
