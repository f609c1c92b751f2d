//! Staging index
//!
//! The index tracks which files are staged for the next commit, together with
//! the blob capturing their content at add-time. It is the only mutable state
//! that exists before a commit.
//!
//! The index is loaded with `rehydrate`, mutated in memory and persisted with
//! `write_updates`. The new content is written next to the old file and
//! renamed over it, so locks are taken on a sidecar `index.lock` file whose
//! inode never changes: shared while reading, exclusive while writing.

use crate::artifacts::core::fs::write_atomically;
use crate::artifacts::index::VERSION;
use crate::artifacts::index::index_entry::{IndexEntry, IndexFile};
use anyhow::{Context, anyhow};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Staging area
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.minigit/index.json`)
    path: Box<Path>,
    /// Staged files mapped by path
    entries: BTreeMap<String, IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sidecar file the index lock is taken on
    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn open_lock_file(&self) -> anyhow::Result<File> {
        let lock_path = self.lock_path();

        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Unable to open index lock {}", lock_path.display()))
    }

    /// Load the index from disk
    ///
    /// A missing or empty index file yields an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut lock_file = self.open_lock_file()?;
        let _lock = file_guard::lock(&mut lock_file, file_guard::Lock::Shared, 0, 1)
            .context("Unable to lock index file for reading")?;

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        if content.trim().is_empty() {
            return Ok(());
        }

        let index_file: IndexFile =
            serde_json::from_str(&content).context("Unable to parse index file")?;
        if index_file.version != VERSION {
            return Err(anyhow!(
                "Unsupported index file version: {}",
                index_file.version
            ));
        }

        for entry in index_file.entries {
            self.entries.insert(entry.name.clone(), entry);
        }
        tracing::debug!(entries = self.entries.len(), "index loaded");

        Ok(())
    }

    /// Stage an entry, returning the entry it replaced
    pub fn add(&mut self, entry: IndexEntry) -> Option<IndexEntry> {
        let previous = self.entries.insert(entry.name.clone(), entry.clone());

        let unchanged = previous
            .as_ref()
            .is_some_and(|previous| previous.same_content(&entry));
        if !unchanged {
            self.changed = true;
        }

        previous
    }

    /// Remove every staged entry
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.changed = true;
        }
        self.entries.clear();
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn is_tracked(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Staged entries in path order
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    /// Persist the index
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let index_file = IndexFile::new(self.entries.values().cloned().collect());
        let payload =
            serde_json::to_vec_pretty(&index_file).context("Unable to serialize index")?;

        let mut lock_file = self.open_lock_file()?;
        let _lock = file_guard::lock(&mut lock_file, file_guard::Lock::Exclusive, 0, 1)
            .context("Unable to lock index file for writing")?;

        write_atomically(&self.path, &payload)?;
        self.changed = false;
        tracing::debug!(entries = self.entries.len(), "index written");

        Ok(())
    }
}
