use crate::areas::repository::Repository;
use crate::artifacts::objects::file_version::FileVersion;
use crate::errors::{RepositoryError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tracked {
    Added(PathBuf),
    AlreadyTracked(PathBuf),
    /// Was staged from a merge commit, now read from the working directory again
    Restaged(PathBuf),
}

impl Repository {
    /// Add a file to the current branch's working list
    ///
    /// The file does not have to exist yet: its content is read when the next
    /// commit is saved. Tracking a file a merge left staged from the store makes
    /// the next commit read the working copy instead.
    pub fn track(&mut self, filename: impl AsRef<Path>) -> Result<Tracked> {
        let file = FileVersion::try_parse(filename.as_ref())?;
        let filename = file.filename().to_path_buf();

        if filename.starts_with(self.store().relative_path()) {
            return Err(RepositoryError::InvalidPath {
                path: filename,
                reason: "path is inside the snapshot store",
            });
        }

        if !self.workspace().is_file(&filename) {
            tracing::debug!(file = %filename.display(), "tracking a file that does not exist yet");
        }

        let refs = self.refs_mut()?;
        let staged = refs
            .current()
            .working()
            .get(&filename)
            .is_some_and(|tracked| tracked.source_path().is_some());

        if staged {
            refs.restage(file);
            tracing::info!(file = %filename.display(), "restaged file from the working directory");
            Ok(Tracked::Restaged(filename))
        } else if refs.track(file) {
            tracing::info!(file = %filename.display(), "tracked file");
            Ok(Tracked::Added(filename))
        } else {
            Ok(Tracked::AlreadyTracked(filename))
        }
    }
}
