//! Commit chain
//!
//! Commits are stored one per file as `.minigit/commits/<id>.json`. The chain
//! is the set of those files ordered by id; HEAD is the commit with the
//! greatest id. Records are created with no-clobber semantics and never
//! rewritten, so the chain only ever grows.

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::core::fs::write_new_atomically;
use crate::artifacts::objects::commit::{Commit, CommitId};
use anyhow::Context;
use regex::Regex;
use std::path::{Path, PathBuf};

/// File names of commit records: a positive id without leading zeros
const COMMIT_FILE_REGEX: &str = r"^([1-9][0-9]*)\.json$";

#[derive(Debug)]
pub struct History {
    /// Path to the commits directory (typically `.minigit/commits`)
    path: Box<Path>,
}

impl History {
    pub fn new(path: Box<Path>) -> Self {
        History { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    fn commit_path(&self, id: CommitId) -> PathBuf {
        self.path.join(format!("{id}.json"))
    }

    /// Ids of every stored commit, ascending
    pub fn ids(&self) -> anyhow::Result<Vec<CommitId>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let pattern = Regex::new(COMMIT_FILE_REGEX)?;
        let mut ids = std::fs::read_dir(&self.path)
            .with_context(|| format!("Unable to list commits in {}", self.path.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let file_name = entry.file_name();
                let captures = pattern.captures(file_name.to_str()?)?;
                captures[1].parse::<CommitId>().ok()
            })
            .collect::<Vec<_>>();
        ids.sort_unstable();

        Ok(ids)
    }

    pub fn head_id(&self) -> anyhow::Result<Option<CommitId>> {
        Ok(self.ids()?.last().copied())
    }

    pub fn head(&self) -> anyhow::Result<Option<Commit>> {
        self.head_id()?.map(|id| self.get(id)).transpose()
    }

    /// Id the next commit will receive: `max(existing ids) + 1`
    pub fn next_id(&self) -> anyhow::Result<CommitId> {
        Ok(self.head_id()?.map_or(1, |id| id + 1))
    }

    /// Load the commit with the given id
    pub fn get(&self, id: CommitId) -> anyhow::Result<Commit> {
        let commit_path = self.commit_path(id);
        if id == 0 || !commit_path.is_file() {
            return Err(RepositoryError::CommitNotFound(id.to_string()).into());
        }

        let content = std::fs::read_to_string(&commit_path)
            .with_context(|| format!("Unable to read commit {}", commit_path.display()))?;
        let commit: Commit = serde_json::from_str(&content)
            .with_context(|| format!("Unable to parse commit {}", commit_path.display()))?;

        if commit.id() != id {
            anyhow::bail!(
                "Commit record {} holds id {}",
                commit_path.display(),
                commit.id()
            );
        }

        Ok(commit)
    }

    /// Append a commit to the chain
    ///
    /// The commit must carry the next id; an existing record is never replaced.
    pub fn append(&self, commit: &Commit) -> anyhow::Result<()> {
        let next_id = self.next_id()?;
        if commit.id() != next_id {
            anyhow::bail!(
                "Commit id {} does not extend the chain (expected {})",
                commit.id(),
                next_id
            );
        }

        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Unable to create {}", self.path.display()))?;

        let payload = serde_json::to_vec_pretty(commit).context("Unable to serialize commit")?;
        write_new_atomically(&self.commit_path(commit.id()), &payload)?;
        tracing::info!(id = commit.id(), files = commit.files().len(), "commit appended");

        Ok(())
    }

    /// Commits from most recent to oldest
    ///
    /// The ids are listed when the log is created; each commit is read from
    /// disk only when the iterator reaches it. Calling `log` again starts over
    /// from the persisted state.
    pub fn log(&self) -> anyhow::Result<CommitLog<'_>> {
        Ok(CommitLog {
            history: self,
            ids: self.ids()?,
        })
    }
}

/// Lazy, most-recent-first walk over the commit chain
pub struct CommitLog<'h> {
    history: &'h History,
    /// Remaining ids, ascending; consumed from the back
    ids: Vec<CommitId>,
}

impl Iterator for CommitLog<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.pop()?;
        Some(self.history.get(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ids.len(), Some(self.ids.len()))
    }
}
