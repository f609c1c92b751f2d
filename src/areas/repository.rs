use crate::areas::database::Database;
use crate::areas::history::History;
use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::error::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory marking a repository root
pub const METADATA_DIR: &str = ".minigit";

/// Repository aggregate
///
/// Owns every area of one repository. Commands load what they need at the
/// start (`rehydrate`), mutate in memory and persist once at the end.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    history: History,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// The directory is created when missing so that `init` can bootstrap a
    /// new location; nothing else is touched until a command runs.
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create directory {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;

        let metadata_path = path.join(METADATA_DIR);
        let index = Index::new(metadata_path.join("index.json").into_boxed_path());
        let database = Database::new(metadata_path.join("objects").into_boxed_path());
        let history = History::new(metadata_path.join("commits").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            history,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> Box<Path> {
        self.path.join(METADATA_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata_path().is_dir()
    }

    /// Fail with `NotInitialized` unless the metadata directory exists
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotInitialized.into())
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
