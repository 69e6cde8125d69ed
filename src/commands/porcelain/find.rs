use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Result;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug)]
pub struct FoundCommit {
    pub commit: Arc<Commit>,
    /// The commit's snapshot folder
    pub folder: PathBuf,
    /// Files actually present in that folder
    pub stored_files: Vec<PathBuf>,
}

impl Repository {
    /// Look a commit up by its exact id
    pub fn find(&self, id: &str) -> Result<FoundCommit> {
        let id = CommitId::from_raw(id.trim());
        let commit = self.graph().find_commit(&id)?;

        Ok(FoundCommit {
            folder: self.store().commit_path(commit.id()),
            stored_files: self.store().stored_files(commit.id()),
            commit,
        })
    }
}
