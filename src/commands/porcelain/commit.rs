use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::commit::{Commit, CommitFiles};
use std::io::Write;

impl Repository {
    /// Snapshot the staged files into a new commit and clear the index
    pub fn commit(&mut self, message: &str) -> anyhow::Result<Commit> {
        self.ensure_initialized()?;

        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;
        if index.is_empty() {
            return Err(RepositoryError::EmptyStaging.into());
        }

        let files = index
            .entries()
            .map(|entry| (entry.name.clone(), entry.oid.clone()))
            .collect::<CommitFiles>();

        let parent = self.history().head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit = Commit::new(
            self.history().next_id()?,
            parent.as_ref().map(Commit::id),
            Commit::next_timestamp(parent.as_ref()),
            message.trim().to_string(),
            files,
        );
        self.history().append(&commit)?;

        index.clear();
        index.write_updates()?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit.id(),
            commit.short_message()
        )?;
        writeln!(
            self.writer(),
            " {} file(s): {}",
            commit.files().len(),
            commit.file_names().join(", ")
        )?;

        Ok(commit)
    }
}
