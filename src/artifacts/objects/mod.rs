//! Commit graph objects
//!
//! - **FileVersion**: one tracked file, optionally staged from another location
//! - **Snapshot**: the ordered set of files a commit carries
//! - **Commit**: an immutable node with a message, a timestamp and parent links
//! - **CommitId**: the `<message>-<unix seconds>` identifier of a commit

pub mod commit;
pub mod commit_id;
pub mod file_version;
pub mod snapshot;
