use crate::areas::repository::Repository;
use crate::areas::store::SnapshotReport;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::file_merge::{MergeConflict, MergeSide, merge_file_lists};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitMessage;
use crate::artifacts::objects::file_version::FileVersion;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::errors::Result;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug)]
pub struct Merged {
    pub commit: Arc<Commit>,
    /// The branch the merge commit was attached to
    pub target: BranchName,
    pub conflicts: Vec<MergeConflict>,
    pub report: SnapshotReport,
    /// Files tracked on the target but not committed, kept in its working list
    pub carried: Vec<PathBuf>,
    /// Files brought in from the other side whose working copy is missing or
    /// differs from the merge commit. The next commit takes them from the merge
    /// commit unless re-tracked.
    pub stale: Vec<PathBuf>,
}

impl Repository {
    /// Merge the heads of `first` and `second` into a new commit on the
    /// current branch
    ///
    /// The merge commit's parents are `[head(first), head(second)]`. Its files
    /// are the union of both sides' files; a file both sides carry is taken from
    /// `first`. Committed files are copied from the stored snapshot of the head
    /// they were taken from, not from the working directory. When the current
    /// branch is one of the two sides, its working list stands in for its head,
    /// so files tracked since the last commit are merged too.
    ///
    /// The commit lands on whichever branch is current, which need not be
    /// `first` or `second`. Pending tracks of that branch stay tracked. The
    /// working directory is not touched: files taken from the other side whose
    /// working copy disagrees with the merge commit stay staged from the store
    /// until re-tracked or restored by a checkout.
    pub fn merge(&mut self, first: &str, second: &str, message: &str) -> Result<Merged> {
        let message = CommitMessage::try_parse(message)?;

        let (first_head, second_head, target, working) = {
            let refs = self.refs()?;
            (
                Arc::clone(refs.find(first)?.head()),
                Arc::clone(refs.find(second)?.head()),
                refs.current().name().clone(),
                refs.current().working().clone(),
            )
        };

        let side_files = |name: &str, head: &Arc<Commit>| -> Snapshot {
            if name == target.as_ref() {
                working.clone()
            } else {
                head.snapshot().clone()
            }
        };
        let file_merge = merge_file_lists(
            &side_files(first, &first_head),
            &side_files(second, &second_head),
        );
        for conflict in file_merge.conflicts() {
            tracing::warn!(file = %conflict.filename().display(), "merge conflict, keeping first branch");
        }

        let store = self.store();
        let snapshot = file_merge.staged_snapshot(|side, file| {
            let parent = match side {
                MergeSide::First => &first_head,
                MergeSide::Second => &second_head,
            };
            if file.source_path().is_none() && parent.snapshot().contains(file.filename()) {
                FileVersion::staged_from(
                    file.filename().to_path_buf(),
                    store.stored_file_path(parent.id(), file.filename()),
                )
            } else {
                file.clone()
            }
        });

        let commit = self.graph_mut().create_commit(
            message,
            vec![Arc::clone(&first_head), Arc::clone(&second_head)],
            snapshot,
        );
        let report = self.store().save_snapshot(&commit, self.workspace());

        let on_target = |side: MergeSide| match side {
            MergeSide::First => first == target.as_ref(),
            MergeSide::Second => second == target.as_ref(),
        };
        let from_target = file_merge
            .files()
            .iter()
            .filter(|merged| on_target(merged.side))
            .map(|merged| merged.file.filename())
            .collect::<HashSet<_>>();
        let stale = self
            .store()
            .diverging_files(&commit, self.workspace())
            .into_iter()
            .filter(|filename| !from_target.contains(filename.as_path()))
            .collect::<Vec<_>>();
        let restaged = stale
            .iter()
            .map(|filename| {
                FileVersion::staged_from(
                    filename.clone(),
                    self.store().stored_file_path(commit.id(), filename),
                )
            })
            .collect::<Vec<_>>();
        let pending = working
            .iter()
            .filter(|file| !commit.snapshot().contains(file.filename()))
            .collect::<Vec<_>>();
        let carried = pending
            .iter()
            .map(|file| file.filename().to_path_buf())
            .collect::<Vec<_>>();

        let refs = self.refs_mut()?;
        refs.advance_current(Arc::clone(&commit));
        for file in restaged {
            refs.restage(file);
        }
        // tracking puts each file in front, so go oldest first to keep the order
        for file in pending.into_iter().rev() {
            refs.track(FileVersion::clone(file));
        }

        tracing::info!(
            id = %commit.id(),
            first = %first_head.id(),
            second = %second_head.id(),
            target = %target,
            conflicts = file_merge.conflicts().len(),
            carried = carried.len(),
            stale = stale.len(),
            "merged branches"
        );

        Ok(Merged {
            commit,
            target,
            conflicts: file_merge.conflicts().to_vec(),
            report,
            carried,
            stale,
        })
    }
}
