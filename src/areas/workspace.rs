use std::path::{Path, PathBuf};

/// The working directory of a repository
///
/// Tracked filenames are relative to this root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute location of a repository-relative path
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn is_file(&self, file_path: &Path) -> bool {
        self.resolve(file_path).is_file()
    }
}
