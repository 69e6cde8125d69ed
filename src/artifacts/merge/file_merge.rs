//! First-wins file list merge
//!
//! The merged list is the union of two snapshots by filename:
//! 1. every entry of the first snapshot, in its order
//! 2. every entry of the second snapshot whose name is not taken yet, in its order
//!
//! A name present on both sides is a conflict. It is always resolved the same
//! way: the first snapshot's entry is kept and the second one is dropped. The
//! contents are never compared.

use crate::artifacts::objects::file_version::FileVersion;
use crate::artifacts::objects::snapshot::Snapshot;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Which parent a merged entry was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSide {
    /// The first (receiving) branch
    First,
    /// The second (incoming) branch
    Second,
}

/// A filename present in both parents, resolved in favour of the first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConflict {
    filename: PathBuf,
}

impl MergeConflict {
    pub fn filename(&self) -> &Path {
        &self.filename
    }
}

impl std::fmt::Display for MergeConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Conflict in '{}': keeping version from first branch",
            self.filename.display()
        )
    }
}

#[derive(Debug, Clone)]
pub struct MergedFile {
    pub side: MergeSide,
    pub file: Arc<FileVersion>,
}

#[derive(Debug, Clone, Default)]
pub struct FileMerge {
    files: Vec<MergedFile>,
    conflicts: Vec<MergeConflict>,
}

impl FileMerge {
    pub fn files(&self) -> &[MergedFile] {
        &self.files
    }

    pub fn conflicts(&self) -> &[MergeConflict] {
        &self.conflicts
    }

    /// The merged entries as they are
    pub fn snapshot(&self) -> Snapshot {
        self.staged_snapshot(|_, file| file.clone())
    }

    /// The merged entries, each rebuilt by `stage` from the side it came from
    pub fn staged_snapshot(&self, stage: impl Fn(MergeSide, &FileVersion) -> FileVersion) -> Snapshot {
        self.files
            .iter()
            .map(|merged| stage(merged.side, &merged.file))
            .collect()
    }
}

pub fn merge_file_lists(first: &Snapshot, second: &Snapshot) -> FileMerge {
    let mut merge = FileMerge::default();

    merge.files.extend(first.iter().map(|file| MergedFile {
        side: MergeSide::First,
        file: Arc::clone(file),
    }));

    for file in second.iter() {
        if first.contains(file.filename()) {
            merge.conflicts.push(MergeConflict {
                filename: file.filename().to_path_buf(),
            });
        } else {
            merge.files.push(MergedFile {
                side: MergeSide::Second,
                file: Arc::clone(file),
            });
        }
    }

    merge
}
