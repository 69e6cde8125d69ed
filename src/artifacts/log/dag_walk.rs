//! Full history walk
//!
//! Visits a commit, then each of its parents left to right, depth first. This is
//! the order a recursive walk over all parents would produce, except that every
//! commit is yielded once even when several paths lead to it. The walk keeps an
//! explicit stack, so deep histories do not grow the call stack.
//!
//! Commits are told apart by identity, not by id: two commits whose ids collide
//! are still both visited.

use crate::artifacts::objects::commit::Commit;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug)]
pub struct DagWalk {
    stack: Vec<Arc<Commit>>,
    seen: HashSet<*const Commit>,
}

impl DagWalk {
    pub fn new(start: Arc<Commit>) -> Self {
        DagWalk {
            stack: vec![start],
            seen: HashSet::new(),
        }
    }
}

impl Iterator for DagWalk {
    type Item = Arc<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(commit) = self.stack.pop() {
            if !self.seen.insert(Arc::as_ptr(&commit)) {
                continue;
            }

            // reversed so the first parent is popped first
            self.stack.extend(
                commit
                    .parents()
                    .iter()
                    .rev()
                    .filter(|parent| !self.seen.contains(&Arc::as_ptr(parent)))
                    .cloned(),
            );

            tracing::trace!(id = %commit.id(), pending = self.stack.len(), "visiting commit");
            return Some(commit);
        }

        None
    }
}
