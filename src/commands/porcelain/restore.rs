use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitId;
use crate::artifacts::restore::migration::Migration;
use std::io::Write;

impl Repository {
    /// Rewrite the working directory with the files of commit `id`
    ///
    /// Files the commit does not contain are left alone. The staging index is
    /// cleared and the history is not touched. Nothing is written when the
    /// commit is unknown, one of its objects fails verification, or a path in
    /// the working directory blocks a write.
    pub fn restore(&mut self, id: CommitId) -> anyhow::Result<Vec<String>> {
        self.ensure_initialized()?;

        let commit = self.history().get(id)?;
        let migration = Migration::plan(self, &commit)?;

        let restored = self.workspace().apply_migration(&migration)?;
        for path in &restored {
            writeln!(self.writer(), "restored '{path}'")?;
        }

        let mut index = self.index();
        index.rehydrate()?;
        index.clear();
        index.write_updates()?;

        tracing::info!(
            id = migration.commit_id(),
            files = restored.len(),
            "working directory restored"
        );
        writeln!(
            self.writer(),
            "Restored working directory to commit {}",
            commit.id()
        )?;
        writeln!(self.writer(), "Message: \"{}\"", commit.message())?;

        Ok(restored)
    }
}
