use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the metadata directory, or report the existing one
    ///
    /// Returns whether a new repository was created.
    pub fn init(&mut self) -> anyhow::Result<bool> {
        if self.is_initialized() {
            writeln!(
                self.writer(),
                "Reinitialization skipped: minigit repository already exists in {}",
                self.path().display()
            )?;
            return Ok(false);
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .minigit/objects directory")?;

        fs::create_dir_all(self.history().commits_path())
            .context("Failed to create .minigit/commits directory")?;

        {
            let mut index = self.index();
            index.clear();
            index
                .write_updates()
                .context("Failed to create .minigit/index.json file")?;
        }

        tracing::info!(path = %self.path().display(), "repository initialized");
        writeln!(
            self.writer(),
            "Initialized empty minigit repository in {}",
            self.path().display()
        )?;

        Ok(true)
    }
}
