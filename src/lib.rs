//! twig: a minimal version-control engine
//!
//! Commits are full snapshots of the tracked files, copied byte for byte into
//! a per-commit folder. Commits form a graph through parent handles; branches
//! are named pointers into it. History lives in memory for the lifetime of a
//! [`Repository`](areas::repository::Repository).
//!
//! - `areas`: the repository and its components (graph, index, refs, store)
//! - `artifacts`: data types and the algorithms over them
//! - `commands`: repository operations and the interactive shell

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
