//! Branch registry
//!
//! Branches are named, mutable pointers into the commit graph. Exactly one of
//! them is current. Each branch also owns its working file list: the files that
//! the next commit on that branch will snapshot. Tracking a file extends the
//! working list of the current branch; committing seals a copy of it.
//!
//! Branches are kept in creation order and are never deleted.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::file_version::FileVersion;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::errors::RepositoryError;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Branch {
    name: BranchName,
    head: Arc<Commit>,
    working: Snapshot,
}

impl Branch {
    fn new(name: BranchName, head: Arc<Commit>, working: Snapshot) -> Self {
        Branch {
            name,
            head,
            working,
        }
    }

    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn head(&self) -> &Arc<Commit> {
        &self.head
    }

    /// Files the next commit on this branch will carry
    pub fn working(&self) -> &Snapshot {
        &self.working
    }
}

#[derive(Debug)]
pub struct BranchRegistry {
    branches: Vec<Branch>,
    current: usize,
}

impl BranchRegistry {
    /// Start a registry with a single current branch pointing at `root`
    pub fn new(name: BranchName, root: Arc<Commit>) -> Self {
        let working = root.snapshot().unstaged();

        BranchRegistry {
            branches: vec![Branch::new(name, root, working)],
            current: 0,
        }
    }

    pub fn current(&self) -> &Branch {
        &self.branches[self.current]
    }

    pub fn is_current(&self, name: &BranchName) -> bool {
        self.current().name() == name
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn find(&self, name: &str) -> Result<&Branch, RepositoryError> {
        self.position(name)
            .map(|position| &self.branches[position])
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.branches
            .iter()
            .position(|branch| branch.name().as_ref() == name)
    }

    /// Register a branch at the current branch's head
    ///
    /// The new branch starts with a copy of the current working list.
    pub fn create_branch(&mut self, name: BranchName) -> Result<&Branch, RepositoryError> {
        if self.position(name.as_ref()).is_some() {
            return Err(RepositoryError::BranchAlreadyExists(name.to_string()));
        }

        let current = self.current();
        let branch = Branch::new(name, Arc::clone(current.head()), current.working().clone());
        self.branches.push(branch);

        Ok(&self.branches[self.branches.len() - 1])
    }

    /// Make `name` the current branch
    pub fn set_current(&mut self, name: &str) -> Result<&Branch, RepositoryError> {
        let position = self
            .position(name)
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()))?;
        self.current = position;

        Ok(self.current())
    }

    /// Add a file to the current branch's working list
    ///
    /// Returns false when the file was already tracked.
    pub fn track(&mut self, file: FileVersion) -> bool {
        self.branches[self.current].working.track(file)
    }

    /// Replace an entry of the current branch's working list
    ///
    /// Returns false when the file is not tracked.
    pub fn restage(&mut self, file: FileVersion) -> bool {
        self.branches[self.current].working.restage(file)
    }

    /// Move the current branch to `commit` and reset its working list to the
    /// commit's files, staged from the working directory.
    pub fn advance_current(&mut self, commit: Arc<Commit>) {
        let branch = &mut self.branches[self.current];
        branch.working = commit.snapshot().unstaged();
        branch.head = commit;
    }
}
