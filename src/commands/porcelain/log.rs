use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, CommitId};
use std::io::Write;

const FIELD_INDENT: &str = "         ";

impl Repository {
    /// Print the history most recent first, or a single commit when `id` is given
    ///
    /// An empty history is reported, not treated as an error. Returns the ids
    /// that were printed.
    pub fn log(&self, id: Option<CommitId>) -> anyhow::Result<Vec<CommitId>> {
        self.ensure_initialized()?;

        if let Some(id) = id {
            let commit = self.history().get(id)?;
            self.show_commit(&commit)?;
            return Ok(vec![commit.id()]);
        }

        let mut shown = Vec::new();
        for commit in self.history().log()? {
            let commit = commit?;
            self.show_commit(&commit)?;
            shown.push(commit.id());
        }

        if shown.is_empty() {
            writeln!(self.writer(), "No commits yet")?;
        }

        Ok(shown)
    }

    fn show_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "commit {}", commit.id())?;
        writeln!(self.writer(), "Date:    {}", commit.readable_timestamp())?;

        let mut message_lines = commit.message().lines();
        writeln!(
            self.writer(),
            "Message: {}",
            message_lines.next().unwrap_or_default()
        )?;
        for message_line in message_lines {
            writeln!(self.writer(), "{FIELD_INDENT}{message_line}")?;
        }

        writeln!(self.writer(), "Files:   {}", commit.file_names().join(", "))?;
        writeln!(self.writer())?;

        Ok(())
    }
}
