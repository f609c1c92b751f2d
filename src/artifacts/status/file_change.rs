use colored::{ColoredString, Colorize};

const LABEL_WIDTH: usize = 4;

/// Change recorded in the staging index, relative to HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndexChangeType {
    /// Staged path that HEAD does not contain
    Added,
    /// Staged path that HEAD already contains
    Modified,
}

/// Unstaged difference between the working directory and HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Untracked,
    Modified,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileChangeType {
    Index(IndexChangeType),
    Workspace(WorkspaceChangeType),
}

impl FileChangeType {
    /// Colour a path the way its category is shown in long status output
    pub fn paint(&self, path: &str) -> ColoredString {
        match self {
            FileChangeType::Index(_) => path.green(),
            FileChangeType::Workspace(WorkspaceChangeType::Untracked) => path.normal(),
            FileChangeType::Workspace(_) => path.red(),
        }
    }
}

/// Two-column porcelain code: index column, then workspace column
impl From<&FileChangeType> for &str {
    fn from(change: &FileChangeType) -> Self {
        match change {
            FileChangeType::Index(IndexChangeType::Added) => "A ",
            FileChangeType::Index(IndexChangeType::Modified) => "M ",
            FileChangeType::Workspace(WorkspaceChangeType::Modified) => " M",
            FileChangeType::Workspace(WorkspaceChangeType::Deleted) => " D",
            FileChangeType::Workspace(WorkspaceChangeType::Untracked) => "??",
        }
    }
}

impl std::fmt::Display for FileChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FileChangeType::Index(IndexChangeType::Added) => "new file:   ".green(),
            FileChangeType::Index(IndexChangeType::Modified) => "modified:   ".green(),
            FileChangeType::Workspace(WorkspaceChangeType::Modified) => "modified:   ".red(),
            FileChangeType::Workspace(WorkspaceChangeType::Deleted) => "deleted:    ".red(),
            FileChangeType::Workspace(WorkspaceChangeType::Untracked) => "".normal(),
        };
        write!(f, "{:>width$}{}", "", label, width = LABEL_WIDTH)
    }
}
