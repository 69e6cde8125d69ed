//! Repository error kinds
//!
//! Every boundary operation on [`Repository`](crate::areas::repository::Repository)
//! returns one of these on failure. Lookup failures are recoverable and leave the
//! repository untouched. Per-file snapshot failures are not errors at this level:
//! they are collected in a [`SnapshotReport`](crate::areas::store::SnapshotReport).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("branch '{0}' not found")]
    BranchNotFound(String),

    #[error("a branch named '{0}' already exists")]
    BranchAlreadyExists(String),

    #[error("invalid branch name: '{0}'")]
    InvalidBranchName(String),

    #[error("commit '{0}' not found")]
    CommitNotFound(String),

    #[error("invalid commit message: {0}")]
    InvalidCommitMessage(String),

    #[error("invalid path '{}': {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: &'static str },

    #[error("invalid pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("repository is not initialized")]
    NotInitialized,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl RepositoryError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        RepositoryError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
