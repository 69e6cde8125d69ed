//! Commit identifiers
//!
//! Identifiers are derived from the commit message and the creation time in
//! whole seconds: `<message>-<unix seconds>`. They are not content hashes, so two
//! commits created with the same message within the same second share an id.
//!
//! The id also names the commit's folder in the snapshot store, which is why
//! messages carrying path separators are rejected before an id is derived.

use crate::errors::RepositoryError;
use chrono::{DateTime, FixedOffset};

/// Characters a commit message may not contain
const FORBIDDEN_MESSAGE_CHARS: [char; 3] = ['/', '\\', '\0'];

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Derive the identifier for a message created at `timestamp`
    pub fn derive(message: &CommitMessage, timestamp: &DateTime<FixedOffset>) -> Self {
        CommitId(format!("{}-{}", message.as_ref(), timestamp.timestamp()))
    }

    /// Wrap a raw identifier, e.g. one typed by a user for a lookup
    pub fn from_raw(id: impl Into<String>) -> Self {
        CommitId(id.into())
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, trimmed commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    pub fn try_parse(message: &str) -> Result<Self, RepositoryError> {
        let message = message.trim();

        if message.is_empty() {
            return Err(RepositoryError::InvalidCommitMessage(
                "message cannot be empty".to_string(),
            ));
        }

        if let Some(c) = message.chars().find(|c| FORBIDDEN_MESSAGE_CHARS.contains(c)) {
            return Err(RepositoryError::InvalidCommitMessage(format!(
                "message cannot contain {c:?}"
            )));
        }

        Ok(CommitMessage(message.to_string()))
    }

    /// First line of the message
    pub fn short(&self) -> &str {
        self.0.lines().next().unwrap_or("")
    }
}

impl AsRef<str> for CommitMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
