use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Compare an unstaged HEAD path against the working directory
    ///
    /// Returns `None` when the file is present with exactly the bytes HEAD
    /// recorded.
    pub fn check_head_against_workspace(
        &self,
        path: &str,
        head_oid: &ObjectId,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        if !self.repository.workspace().is_file(path) {
            return Ok(Some(WorkspaceChangeType::Deleted));
        }

        if self.is_content_changed(path, head_oid)? {
            Ok(Some(WorkspaceChangeType::Modified))
        } else {
            Ok(None)
        }
    }

    fn is_content_changed(&self, path: &str, head_oid: &ObjectId) -> anyhow::Result<bool> {
        let committed = self.repository.database().load(head_oid)?;
        let current = self.repository.workspace().read_file(path)?;

        Ok(committed.content() != &current)
    }
}
