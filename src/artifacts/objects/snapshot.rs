//! Ordered file snapshots
//!
//! A snapshot is the full list of files a commit carries, keyed by filename.
//! Iteration order is the tracking order, most recently tracked first; entries
//! appended by a merge go to the back so the first parent's order is kept.
//!
//! Entries are reference counted. Cloning a snapshot into the next commit shares
//! the unchanged entries instead of copying them.

use crate::artifacts::objects::file_version::FileVersion;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    order: VecDeque<PathBuf>,
    files: HashMap<PathBuf, Arc<FileVersion>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a file at the front of the snapshot
    ///
    /// Returns false, leaving the snapshot unchanged, if the name is already present.
    pub fn track(&mut self, file: FileVersion) -> bool {
        self.insert(Arc::new(file), true)
    }

    /// Append a shared entry at the back unless its name is already present
    pub fn append(&mut self, file: Arc<FileVersion>) -> bool {
        self.insert(file, false)
    }

    fn insert(&mut self, file: Arc<FileVersion>, front: bool) -> bool {
        let filename = file.filename().to_path_buf();
        if self.files.contains_key(&filename) {
            return false;
        }

        if front {
            self.order.push_front(filename.clone());
        } else {
            self.order.push_back(filename.clone());
        }
        self.files.insert(filename, file);

        true
    }

    /// Swap the entry of the same name for `file`, keeping its position
    ///
    /// Returns false, leaving the snapshot unchanged, if the name is absent.
    pub fn restage(&mut self, file: FileVersion) -> bool {
        match self.files.get_mut(file.filename()) {
            Some(entry) => {
                *entry = Arc::new(file);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, filename: &Path) -> Option<&Arc<FileVersion>> {
        self.files.get(filename)
    }

    pub fn contains(&self, filename: &Path) -> bool {
        self.files.contains_key(filename)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<FileVersion>> {
        self.order.iter().filter_map(|filename| self.files.get(filename))
    }

    pub fn filenames(&self) -> impl Iterator<Item = &Path> {
        self.order.iter().map(PathBuf::as_path)
    }

    /// Copy of this snapshot with every entry staged from the working directory
    pub fn unstaged(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for file in self.iter() {
            match file.source_path() {
                Some(_) => snapshot.append(Arc::new(file.unstaged())),
                None => snapshot.append(Arc::clone(file)),
            };
        }

        snapshot
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left == right)
    }
}

impl Eq for Snapshot {}

impl FromIterator<FileVersion> for Snapshot {
    /// Builds a snapshot that iterates in the same order as the input
    fn from_iter<T: IntoIterator<Item = FileVersion>>(iter: T) -> Self {
        let mut snapshot = Snapshot::new();
        for file in iter {
            snapshot.append(Arc::new(file));
        }

        snapshot
    }
}
