use crate::areas::workspace::Workspace;

#[derive(Debug)]
pub struct ConflictMessage {
    pub header: &'static str,
    pub footer: &'static str,
}

impl From<&ConflictType> for ConflictMessage {
    fn from(value: &ConflictType) -> Self {
        match value {
            ConflictType::DirectoryInTheWay => Self {
                header: "The following directories are where the commit has files:",
                footer: "Please move or remove them before you restore.",
            },
            ConflictType::FileInTheWay => Self {
                header: "The following files are where the commit has directories:",
                footer: "Please move or remove them before you restore.",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConflictType {
    /// A directory occupies the path of a committed file
    DirectoryInTheWay,
    /// A file occupies a directory the committed file lives in
    FileInTheWay,
}

impl ConflictType {
    /// Conflict blocking the write of `file_path`, if any, with the offending path
    pub fn detect(workspace: &Workspace, file_path: &str) -> Option<(ConflictType, String)> {
        let blocking = workspace.blocking_path(file_path)?;

        if blocking == file_path {
            Some((ConflictType::DirectoryInTheWay, blocking))
        } else {
            Some((ConflictType::FileInTheWay, blocking))
        }
    }
}
