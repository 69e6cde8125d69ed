//! Version-control data structures and algorithms
//!
//! - `branch`: Branch name validation
//! - `core`: Shared utilities (clocks, pager wrapper)
//! - `log`: Commit history traversal
//! - `merge`: First-wins file list merge
//! - `objects`: Commits, snapshots and tracked files

pub mod branch;
pub mod core;
pub mod log;
pub mod merge;
pub mod objects;
