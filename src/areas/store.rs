//! Snapshot store
//!
//! Every commit gets its own folder under the store root, named after the
//! commit id, holding a plain byte-for-byte copy of each tracked file:
//!
//! ```text
//! <repo>/.store/
//!   Initial commit-1672574400/
//!   first-1672574460/
//!     a.txt
//!     docs/guide.md
//! ```
//!
//! There is no manifest, compression or deduplication. Two commits with
//! identical files store two copies.
//!
//! ## Failure policy
//!
//! Saving and restoring work file by file. A file that cannot be read or
//! written is skipped and the rest of the snapshot proceeds. Skipped files are
//! collected in the returned [`SnapshotReport`] and logged as warnings.

use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::file_version::without_cur_dir;
use crate::errors::RepositoryError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct SkippedFile {
    pub filename: PathBuf,
    pub error: std::io::Error,
}

/// Outcome of saving or restoring one snapshot
#[derive(Debug, Default)]
pub struct SnapshotReport {
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

impl SnapshotReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, filename: &Path, error: std::io::Error, action: &'static str) {
        tracing::warn!(file = %filename.display(), %error, "skipping file during snapshot {action}");
        self.skipped.push(SkippedFile {
            filename: filename.to_path_buf(),
            error,
        });
    }
}

#[derive(Debug)]
pub struct SnapshotStore {
    /// Absolute path of the store root
    path: Box<Path>,
    /// Store root relative to the repository root
    relative_path: Box<Path>,
}

impl SnapshotStore {
    pub fn new(workspace: &Workspace, store_dir: &Path) -> Self {
        SnapshotStore {
            path: workspace.resolve(store_dir).into_boxed_path(),
            relative_path: without_cur_dir(store_dir).into_boxed_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn commit_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.as_ref())
    }

    /// Repository-relative location of a file stored for commit `id`
    pub fn stored_file_path(&self, id: &CommitId, filename: &Path) -> PathBuf {
        self.relative_path.join(id.as_ref()).join(filename)
    }

    pub fn create_root(&self) -> Result<(), RepositoryError> {
        std::fs::create_dir_all(&self.path).map_err(|e| {
            RepositoryError::io(
                format!("failed to create snapshot store at {}", self.path.display()),
                e,
            )
        })
    }

    /// Copy every file of `commit` from its source into the commit's folder
    pub fn save_snapshot(&self, commit: &Commit, workspace: &Workspace) -> SnapshotReport {
        let commit_path = self.commit_path(commit.id());
        let mut report = SnapshotReport::default();

        if let Err(error) = std::fs::create_dir_all(&commit_path) {
            tracing::warn!(folder = %commit_path.display(), %error, "failed to create snapshot folder");
        }

        for file in commit.snapshot().iter() {
            let source = workspace.resolve(file.source_path().unwrap_or(file.filename()));
            let destination = commit_path.join(file.filename());

            match copy_file(&source, &destination) {
                Ok(()) => report.copied.push(file.filename().to_path_buf()),
                Err(error) => report.skip(file.filename(), error, "save"),
            }
        }

        tracing::debug!(
            id = %commit.id(),
            copied = report.copied.len(),
            skipped = report.skipped.len(),
            "saved snapshot"
        );

        report
    }

    /// Copy every file of `commit` from the commit's folder into the workspace
    pub fn restore_snapshot(&self, commit: &Commit, workspace: &Workspace) -> SnapshotReport {
        let commit_path = self.commit_path(commit.id());
        let mut report = SnapshotReport::default();

        for file in commit.snapshot().iter() {
            let source = commit_path.join(file.filename());
            let destination = workspace.resolve(file.filename());

            match copy_file(&source, &destination) {
                Ok(()) => report.copied.push(file.filename().to_path_buf()),
                Err(error) => report.skip(file.filename(), error, "restore"),
            }
        }

        tracing::debug!(
            id = %commit.id(),
            restored = report.copied.len(),
            skipped = report.skipped.len(),
            "restored snapshot"
        );

        report
    }

    /// Files of `commit` whose working copy is missing or differs from the
    /// stored copy
    ///
    /// Files that were never stored are left out.
    pub fn diverging_files(&self, commit: &Commit, workspace: &Workspace) -> Vec<PathBuf> {
        let commit_path = self.commit_path(commit.id());

        commit
            .snapshot()
            .iter()
            .filter(|file| {
                let Ok(stored) = std::fs::read(commit_path.join(file.filename())) else {
                    return false;
                };
                !matches!(
                    std::fs::read(workspace.resolve(file.filename())),
                    Ok(working) if working == stored
                )
            })
            .map(|file| file.filename().to_path_buf())
            .collect()
    }

    /// Files present on disk in the folder of commit `id`, sorted
    pub fn stored_files(&self, id: &CommitId) -> Vec<PathBuf> {
        let commit_path = self.commit_path(id);

        let mut files = WalkDir::new(&commit_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&commit_path)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();
        files.sort();

        files
    }
}

fn copy_file(source: &Path, destination: &Path) -> std::io::Result<()> {
    // a shadowed commit id can make a merge read from the folder it writes to
    if source == destination {
        return if source.is_file() {
            Ok(())
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", source.display()),
            ))
        };
    }

    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(source, destination)?;

    Ok(())
}
