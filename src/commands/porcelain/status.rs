use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::{FileChangeType, WorkspaceChangeType};
use crate::artifacts::status::status_info::{ChangeSet, Status, StatusInfo};
use std::io::Write;

const MODIFIED: FileChangeType = FileChangeType::Workspace(WorkspaceChangeType::Modified);
const DELETED: FileChangeType = FileChangeType::Workspace(WorkspaceChangeType::Deleted);
const UNTRACKED: FileChangeType = FileChangeType::Workspace(WorkspaceChangeType::Untracked);

fn select(changes: &ChangeSet, wanted: impl Fn(&FileChangeType) -> bool) -> ChangeSet {
    changes
        .iter()
        .filter(|(_, change)| wanted(change))
        .map(|(path, change)| (path.clone(), *change))
        .collect()
}

// Terminology:
// - staged files: files in the index, whatever their relation to HEAD
// - modified files: unstaged HEAD files whose content differs on disk
// - deleted files: unstaged HEAD files missing from the working directory
// - untracked files: files neither in HEAD nor in the index
impl Repository {
    /// Report the status; reads the index, HEAD and working directory only
    pub fn status(&self, porcelain: bool) -> anyhow::Result<StatusInfo> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        let status_info = Status::new(self).initialize(&index)?;

        if porcelain {
            self.print_porcelain_format(&status_info)?;
        } else {
            self.print_long_format(&status_info)?;
        }

        Ok(status_info)
    }

    fn print_porcelain_format(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        for (path, change) in status_info.changes() {
            let code: &str = (&change).into();
            writeln!(self.writer(), "{code} {path}")?;
        }

        Ok(())
    }

    fn print_long_format(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        match status_info.head() {
            Some(id) => writeln!(self.writer(), "HEAD: {id}")?,
            None => writeln!(self.writer(), "HEAD: none")?,
        }
        writeln!(self.writer())?;

        let changes = status_info.changes();
        let sections = [
            ("Staged:", select(&changes, |change| matches!(change, FileChangeType::Index(_)))),
            ("Modified:", select(&changes, |change| *change == MODIFIED)),
            ("Deleted:", select(&changes, |change| *change == DELETED)),
            ("Untracked:", select(&changes, |change| *change == UNTRACKED)),
        ];

        for (header, changeset) in sections {
            self.print_changeset(header, &changeset)?;
        }

        Ok(())
    }

    fn print_changeset(&self, header: &str, changeset: &ChangeSet) -> anyhow::Result<()> {
        writeln!(self.writer(), "{header}")?;

        if changeset.is_empty() {
            writeln!(self.writer(), "  (none)")?;
        }
        for (path, change) in changeset {
            writeln!(self.writer(), "{}{}", change, change.paint(path))?;
        }

        Ok(())
    }
}
