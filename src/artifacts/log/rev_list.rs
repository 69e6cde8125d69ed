use crate::artifacts::objects::commit::Commit;
use std::sync::Arc;

/// First-parent history of a commit
///
/// Yields the start commit, then its first parent, and so on down to the root.
/// Second and later parents are ignored, so merged-in history is not visited.
#[derive(Debug, Clone)]
pub struct FirstParentChain {
    current: Option<Arc<Commit>>,
}

impl FirstParentChain {
    pub fn new(start: Arc<Commit>) -> Self {
        FirstParentChain {
            current: Some(start),
        }
    }
}

impl Iterator for FirstParentChain {
    type Item = Arc<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.current.take()?;
        self.current = commit.parent().cloned();

        Some(commit)
    }
}
