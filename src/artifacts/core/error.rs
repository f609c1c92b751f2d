//! User-facing error taxonomy
//!
//! Every failure a command can report to the user has its own variant so that
//! callers (and tests) can tell them apart. The variants travel inside
//! `anyhow::Error` and are recovered with `downcast_ref` at the binary edge.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The current directory holds no `.minigit` metadata
    #[error("not a minigit repository (run `minigit init` first)")]
    NotInitialized,

    /// One or more paths given to `add` do not exist in the working directory
    #[error("file not found: {}", .0.join(", "))]
    FileNotFound(Vec<String>),

    /// `commit` was run with nothing staged
    #[error("nothing staged to commit (use `minigit add <file>...` first)")]
    EmptyStaging,

    /// No commit carries the requested id (as the user wrote it)
    #[error("commit {0} does not exist")]
    CommitNotFound(String),

    /// A path resolves outside the working directory (or into the metadata directory)
    #[error("path '{0}' is outside the repository")]
    OutsideRepository(String),

    /// A restore would have to replace something that is not a regular file
    #[error("restore blocked by non-file paths: {}", .0.join(", "))]
    RestoreBlocked(Vec<String>),

    /// A stored object failed verification against its id
    #[error("object {0} is corrupt")]
    CorruptObject(String),
}

impl RepositoryError {
    /// Process exit code reported by the binary for this error
    ///
    /// Code 2 is left to clap for usage errors and 1 covers everything that is
    /// not part of the taxonomy (I/O failures, damaged metadata).
    pub fn exit_code(&self) -> u8 {
        match self {
            RepositoryError::NotInitialized => 3,
            RepositoryError::FileNotFound(_) => 4,
            RepositoryError::EmptyStaging => 5,
            RepositoryError::CommitNotFound(_) => 6,
            RepositoryError::OutsideRepository(_) => 7,
            RepositoryError::RestoreBlocked(_) => 8,
            RepositoryError::CorruptObject(_) => 1,
        }
    }
}

/// Recover the taxonomy variant carried by an `anyhow::Error`, if any
pub fn repository_error(error: &anyhow::Error) -> Option<&RepositoryError> {
    error.downcast_ref::<RepositoryError>()
}
