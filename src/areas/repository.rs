use crate::areas::graph::CommitGraph;
use crate::areas::refs::BranchRegistry;
use crate::areas::store::SnapshotStore;
use crate::areas::workspace::Workspace;
use crate::config::RepositoryConfig;
use crate::errors::{RepositoryError, Result};
use std::path::Path;

/// A repository: one working directory, its snapshot store and the in-memory
/// commit graph and branch registry
///
/// Everything except the snapshot store lives only as long as this value.
/// Operations are implemented in `commands::porcelain`.
pub struct Repository {
    path: Box<Path>,
    config: RepositoryConfig,
    workspace: Workspace,
    store: SnapshotStore,
    // dropped before the graph, which then releases history newest first
    refs: Option<BranchRegistry>,
    graph: CommitGraph,
}

impl Repository {
    /// Open the repository rooted at `path`, creating the directory if needed
    ///
    /// The repository has no history until [`Repository::init`] is called.
    pub fn new(path: impl AsRef<Path>, config: RepositoryConfig) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            std::fs::create_dir_all(path).map_err(|e| {
                RepositoryError::io(format!("failed to create {}", path.display()), e)
            })?;
        }

        let path = path.canonicalize().map_err(|e| {
            RepositoryError::io(format!("failed to resolve {}", path.display()), e)
        })?;

        let workspace = Workspace::new(path.clone().into_boxed_path());
        let store = SnapshotStore::new(&workspace, &config.store_dir);
        let graph = CommitGraph::new(config.clock(), config.index_buckets);

        Ok(Repository {
            path: path.into_boxed_path(),
            config,
            workspace,
            store,
            refs: None,
            graph,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub fn graph(&self) -> &CommitGraph {
        &self.graph
    }

    pub(crate) fn graph_mut(&mut self) -> &mut CommitGraph {
        &mut self.graph
    }

    pub fn is_initialized(&self) -> bool {
        self.refs.is_some()
    }

    pub fn refs(&self) -> Result<&BranchRegistry> {
        self.refs.as_ref().ok_or(RepositoryError::NotInitialized)
    }

    pub(crate) fn refs_mut(&mut self) -> Result<&mut BranchRegistry> {
        self.refs.as_mut().ok_or(RepositoryError::NotInitialized)
    }

    /// Replace the whole history with a fresh graph and registry
    pub(crate) fn reset(&mut self, graph: CommitGraph, refs: BranchRegistry) {
        self.refs = Some(refs);
        self.graph = graph;
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.path)
            .field("config", &self.config)
            .field("graph", &self.graph)
            .field("refs", &self.refs)
            .finish()
    }
}
