//! Core repository components
//!
//! - `graph`: Append-only commit graph
//! - `index`: Hash table for commit lookup by id
//! - `refs`: Branch registry and the current branch cursor
//! - `repository`: The aggregate owning all of the above
//! - `store`: On-disk snapshot folders, one per commit
//! - `workspace`: Working directory paths

pub mod graph;
pub mod index;
pub mod refs;
pub mod repository;
pub mod store;
pub mod workspace;
