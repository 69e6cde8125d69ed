use derive_new::new;
use std::path::{Component, Path, PathBuf};

use crate::errors::RepositoryError;

/// One tracked file within a snapshot
///
/// `filename` is relative to the repository root. It is both the working
/// directory path and the path inside a commit's snapshot folder. When
/// `source_path` is set, the content is staged from there instead of the
/// working directory.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileVersion {
    filename: PathBuf,
    #[new(default)]
    source_path: Option<PathBuf>,
}

impl FileVersion {
    /// Validate a user-supplied name and build an entry staged from the workspace
    pub fn try_parse(filename: &Path) -> Result<Self, RepositoryError> {
        if filename.as_os_str().is_empty() {
            return Err(RepositoryError::InvalidPath {
                path: filename.to_path_buf(),
                reason: "path cannot be empty",
            });
        }

        for component in filename.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => {
                    return Err(RepositoryError::InvalidPath {
                        path: filename.to_path_buf(),
                        reason: "path cannot leave the repository",
                    });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(RepositoryError::InvalidPath {
                        path: filename.to_path_buf(),
                        reason: "path must be relative to the repository root",
                    });
                }
            }
        }

        let filename = without_cur_dir(filename);

        if filename.as_os_str().is_empty() {
            return Err(RepositoryError::InvalidPath {
                path: filename,
                reason: "path cannot be empty",
            });
        }

        Ok(FileVersion::new(filename))
    }

    pub fn staged_from(filename: PathBuf, source_path: PathBuf) -> Self {
        FileVersion {
            filename,
            source_path: Some(source_path),
        }
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The same entry staged from the working directory again
    pub fn unstaged(&self) -> Self {
        FileVersion::new(self.filename.clone())
    }
}

/// Drop `.` components so `./a.txt` and `a.txt` name the same file
pub fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
