use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::dag_walk::DagWalk;
use crate::artifacts::log::rev_list::FirstParentChain;
use crate::errors::Result;
use std::sync::Arc;

impl Repository {
    /// Every commit reachable from the current head, each once
    pub fn log(&self) -> Result<DagWalk> {
        Ok(DagWalk::new(self.head()?))
    }

    /// First-parent history of `branch`, or of the current branch
    pub fn history(&self, branch: Option<&str>) -> Result<FirstParentChain> {
        let refs = self.refs()?;
        let branch = match branch {
            Some(name) => refs.find(name)?,
            None => refs.current(),
        };

        Ok(FirstParentChain::new(Arc::clone(branch.head())))
    }

    /// First-parent history of every branch, in branch creation order
    pub fn branch_graph(&self) -> Result<Vec<(BranchName, FirstParentChain)>> {
        Ok(self
            .refs()?
            .branches()
            .iter()
            .map(|branch| {
                (
                    branch.name().clone(),
                    FirstParentChain::new(Arc::clone(branch.head())),
                )
            })
            .collect())
    }
}
