//! Repository configuration
//!
//! The binary fills this from command-line flags, each backed by an environment
//! variable (`TWIG_STORE_DIR`, `TWIG_INDEX_BUCKETS`, `TWIG_DEFAULT_BRANCH`,
//! `TWIG_COMMIT_DATE`). Library users build it directly.

use crate::areas::index::DEFAULT_BUCKET_COUNT;
use crate::artifacts::core::clock::{Clock, FixedClock, SystemClock};
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use std::path::PathBuf;

pub const DEFAULT_STORE_DIR: &str = ".store";
pub const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RepositoryConfig {
    /// Snapshot store folder, relative to the repository root
    pub store_dir: PathBuf,
    /// Number of chains in the commit index
    pub index_buckets: usize,
    /// Name of the branch created by `init`
    pub default_branch: String,
    /// Pin every commit timestamp to this instant
    #[new(default)]
    pub pinned_date: Option<DateTime<FixedOffset>>,
}

impl RepositoryConfig {
    pub fn with_pinned_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.pinned_date = Some(date);
        self
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.pinned_date {
            Some(date) => Box::new(FixedClock::new(date)),
            None => Box::new(SystemClock),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig::new(
            PathBuf::from(DEFAULT_STORE_DIR),
            DEFAULT_BUCKET_COUNT,
            DEFAULT_BRANCH.to_string(),
        )
    }
}
