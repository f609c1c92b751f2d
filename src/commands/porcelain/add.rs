use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use std::io::Write;

/// What staging did to one path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// The path was not staged before
    Added,
    /// The path was staged with different content
    Updated,
    /// The path was already staged with the same content
    Unchanged,
}

impl std::fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            StageOutcome::Added => "added",
            StageOutcome::Updated => "updated",
            StageOutcome::Unchanged => "already staged",
        };
        write!(f, "{verb}")
    }
}

impl Repository {
    /// Stage files, capturing their current content
    ///
    /// Directories expand to every file below them. Paths that do not exist
    /// are skipped while the others are staged and persisted; the call then
    /// fails with `FileNotFound` naming every missing path. Paths outside the
    /// repository abort the call before anything is staged. Nothing is
    /// printed unless the index was persisted.
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<Vec<(String, StageOutcome)>> {
        self.ensure_initialized()?;

        let resolved = paths
            .iter()
            .map(|path| self.workspace().relative_path(path))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut index = self.index();
        index.rehydrate()?;

        let mut outcomes = Vec::new();
        let mut missing = Vec::new();

        for (user_path, path) in paths.iter().zip(resolved) {
            let files = if self.workspace().is_file(&path) {
                vec![path]
            } else if self.workspace().is_dir(&path) {
                self.workspace().list_files(Some(path.as_str()))?
            } else {
                tracing::info!(path = %user_path, "path does not exist, skipping");
                missing.push(user_path.clone());
                continue;
            };

            for file in files {
                let blob = Blob::new(self.workspace().read_file(&file)?);
                let oid = self.database().store(&blob)?;
                let entry = IndexEntry::new(file.clone(), oid, blob.size());

                let outcome = match index.add(entry.clone()) {
                    None => StageOutcome::Added,
                    Some(previous) if previous.same_content(&entry) => StageOutcome::Unchanged,
                    Some(_) => StageOutcome::Updated,
                };

                outcomes.push((file, outcome));
            }
        }

        if index.is_changed() {
            index.write_updates()?;
        }

        // only report once the index holds what we claim
        for (file, outcome) in &outcomes {
            writeln!(self.writer(), "{outcome} '{file}'")?;
        }

        if !missing.is_empty() {
            return Err(RepositoryError::FileNotFound(missing).into());
        }

        Ok(outcomes)
    }
}
