use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Result;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct BranchListing {
    pub name: BranchName,
    pub head: Arc<Commit>,
    pub is_current: bool,
}

impl Repository {
    /// Create a branch at the current head without switching to it
    pub fn branch(&mut self, branch_name: &str) -> Result<Arc<Commit>> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let branch = self.refs_mut()?.create_branch(branch_name)?;
        tracing::info!(branch = %branch.name(), head = %branch.head().id(), "created branch");

        Ok(Arc::clone(branch.head()))
    }

    /// All branches in creation order
    pub fn list_branches(&self) -> Result<Vec<BranchListing>> {
        let refs = self.refs()?;

        Ok(refs
            .branches()
            .iter()
            .map(|branch| BranchListing {
                name: branch.name().clone(),
                head: Arc::clone(branch.head()),
                is_current: refs.is_current(branch.name()),
            })
            .collect())
    }

    pub fn current_branch(&self) -> Result<BranchName> {
        Ok(self.refs()?.current().name().clone())
    }

    pub fn head(&self) -> Result<Arc<Commit>> {
        Ok(Arc::clone(self.refs()?.current().head()))
    }
}
