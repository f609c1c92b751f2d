use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{CommitFiles, CommitId};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{
    FileChangeType, IndexChangeType, WorkspaceChangeType,
};
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type ChangeSet = BTreeMap<String, FileChangeType>;
pub type FileSet = BTreeSet<String>;
pub type HeadTree = CommitFiles;

/// Classification of every interesting path
///
/// A path lands in at most one category. Staged paths are reported as staged
/// whatever their relation to HEAD; only unstaged HEAD paths can be modified
/// or deleted; untracked paths are neither in HEAD nor staged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) head: Option<CommitId>,
    pub(crate) index_changeset: ChangeSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

impl StatusInfo {
    /// Classify paths given HEAD's files, the staged paths and the files on disk
    ///
    /// `inspect` compares one unstaged HEAD path with the working directory.
    pub fn classify<'a>(
        head: Option<CommitId>,
        head_tree: HeadTree,
        staged: impl IntoIterator<Item = &'a str>,
        workspace_files: impl IntoIterator<Item = String>,
        mut inspect: impl FnMut(&str, &ObjectId) -> anyhow::Result<Option<WorkspaceChangeType>>,
    ) -> anyhow::Result<Self> {
        let index_changeset = staged
            .into_iter()
            .map(|path| {
                let change = if head_tree.contains_key(path) {
                    IndexChangeType::Modified
                } else {
                    IndexChangeType::Added
                };
                (path.to_string(), FileChangeType::Index(change))
            })
            .collect::<ChangeSet>();

        let mut workspace_changeset = ChangeSet::new();
        for (path, oid) in head_tree.iter() {
            if index_changeset.contains_key(path) {
                continue;
            }
            if let Some(change) = inspect(path, oid)? {
                workspace_changeset.insert(path.clone(), FileChangeType::Workspace(change));
            }
        }

        let untracked_files = workspace_files
            .into_iter()
            .filter(|path| !head_tree.contains_key(path) && !index_changeset.contains_key(path))
            .collect::<FileSet>();

        Ok(StatusInfo {
            head,
            index_changeset,
            workspace_changeset,
            untracked_files,
        })
    }

    pub fn head(&self) -> Option<CommitId> {
        self.head
    }

    pub fn staged(&self) -> Vec<&str> {
        self.index_changeset.keys().map(String::as_str).collect()
    }

    pub fn modified(&self) -> Vec<&str> {
        self.workspace_paths(WorkspaceChangeType::Modified)
    }

    pub fn deleted(&self) -> Vec<&str> {
        self.workspace_paths(WorkspaceChangeType::Deleted)
    }

    pub fn untracked(&self) -> Vec<&str> {
        self.untracked_files.iter().map(String::as_str).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.index_changeset.is_empty()
            && self.workspace_changeset.is_empty()
            && self.untracked_files.is_empty()
    }

    /// Every reported path with its change, in path order
    pub fn changes(&self) -> ChangeSet {
        let untracked = self.untracked_files.iter().map(|path| {
            (
                path.clone(),
                FileChangeType::Workspace(WorkspaceChangeType::Untracked),
            )
        });

        self.index_changeset
            .iter()
            .chain(self.workspace_changeset.iter())
            .map(|(path, change)| (path.clone(), *change))
            .chain(untracked)
            .collect()
    }

    /// Index changes (staged paths) in path order
    pub fn index_changes(&self) -> &ChangeSet {
        &self.index_changeset
    }

    fn workspace_paths(&self, wanted: WorkspaceChangeType) -> Vec<&str> {
        self.workspace_changeset
            .iter()
            .filter(|(_, change)| **change == FileChangeType::Workspace(wanted))
            .map(|(path, _)| path.as_str())
            .collect()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Build the status report; reads the index, HEAD and working directory
    /// without modifying any of them
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let head = self.repository.history().head()?;
        let head_id = head.as_ref().map(|commit| commit.id());
        let head_tree = head
            .map(|commit| commit.files().clone())
            .unwrap_or_default();

        let workspace_files = self.repository.workspace().list_files(None)?;
        let inspector = Inspector::new(self.repository);

        let status_info = StatusInfo::classify(
            head_id,
            head_tree,
            index.entries().map(|entry| entry.name.as_str()),
            workspace_files,
            |path, oid| inspector.check_head_against_workspace(path, oid),
        )?;

        tracing::debug!(
            head = ?status_info.head,
            staged = status_info.index_changeset.len(),
            changed = status_info.workspace_changeset.len(),
            untracked = status_info.untracked_files.len(),
            "status computed"
        );

        Ok(status_info)
    }
}
