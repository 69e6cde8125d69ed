//! Merge engine
//!
//! Branches are merged at whole-file granularity: the merged snapshot is the
//! union of both heads' file lists, and files present on both sides are taken
//! from the first branch. There is no textual merge and no common ancestor.

pub mod file_merge;
