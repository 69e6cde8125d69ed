use crate::areas::repository::Repository;
use crate::areas::store::SnapshotReport;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Result;
use std::sync::Arc;

#[derive(Debug)]
pub struct CheckedOut {
    pub branch: BranchName,
    pub head: Arc<Commit>,
    pub already_current: bool,
    pub report: SnapshotReport,
}

impl Repository {
    /// Switch to `target` and overwrite the working directory with the files of
    /// its head commit
    ///
    /// Files the head does not track are left untouched. Checking out the
    /// current branch restores its head again.
    pub fn checkout(&mut self, target: &str) -> Result<CheckedOut> {
        let already_current = self.refs()?.current().name().as_ref() == target;

        let branch = self.refs_mut()?.set_current(target)?;
        let branch_name = branch.name().clone();
        let head = Arc::clone(branch.head());

        let report = self.store().restore_snapshot(&head, self.workspace());

        tracing::info!(
            branch = %branch_name,
            head = %head.id(),
            restored = report.copied.len(),
            skipped = report.skipped.len(),
            "switched branch"
        );

        Ok(CheckedOut {
            branch: branch_name,
            head,
            already_current,
            report,
        })
    }
}
