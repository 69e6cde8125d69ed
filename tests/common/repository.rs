use crate::common::COMMIT_DATE;
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::fixture;
use std::path::PathBuf;
use twig::areas::repository::Repository;
use twig::artifacts::core::clock::{Clock, FixedClock};
use twig::config::RepositoryConfig;

/// An initialized repository in a throwaway directory
pub struct Sandbox {
    pub dir: TempDir,
    pub repository: Repository,
}

impl Sandbox {
    pub fn write(&self, name: &str, content: &str) {
        write_file(FileSpec::new(
            self.repository.path().join(name),
            content.to_string(),
        ));
    }

    pub fn read(&self, name: &str) -> String {
        read_file(&self.repository.path().join(name))
    }

    pub fn remove(&self, name: &str) {
        std::fs::remove_file(self.repository.path().join(name))
            .unwrap_or_else(|e| panic!("Failed to remove {}: {}", name, e));
    }

    pub fn stored(&self, id: &str, name: &str) -> PathBuf {
        self.repository.store().path().join(id).join(name)
    }

    /// Write, track and commit one file in a single step
    pub fn commit_file(&mut self, name: &str, content: &str, message: &str) {
        self.write(name, content);
        self.repository.track(name).expect("Failed to track file");
        self.repository.commit(message).expect("Failed to commit");
    }
}

pub fn pinned_config() -> RepositoryConfig {
    let clock = FixedClock::try_parse(COMMIT_DATE).expect("Failed to parse commit date");
    RepositoryConfig::default().with_pinned_date(clock.now())
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn sandbox(repository_dir: TempDir) -> Sandbox {
    let mut repository =
        Repository::new(repository_dir.path(), pinned_config()).expect("Failed to open repository");
    repository.init().expect("Failed to initialize repository");

    Sandbox {
        dir: repository_dir,
        repository,
    }
}
