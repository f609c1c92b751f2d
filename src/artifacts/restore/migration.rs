use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, CommitId};
use crate::artifacts::restore::conflict::{ConflictMessage, ConflictType};
use std::collections::{BTreeMap, BTreeSet};

/// Verified plan for restoring one commit
///
/// Planning loads and checks every blob of the commit and looks for paths
/// that cannot be written, so a restore either fails before touching the
/// working directory or has everything it needs to write.
#[derive(Debug)]
pub struct Migration {
    commit_id: CommitId,
    writes: BTreeMap<String, Blob>,
}

impl Migration {
    pub fn plan(repository: &Repository, commit: &Commit) -> anyhow::Result<Self> {
        let mut conflicts = BTreeMap::<ConflictType, BTreeSet<String>>::new();
        let mut writes = BTreeMap::new();

        for (path, oid) in commit.files() {
            let blob = repository.database().load(oid)?;

            if let Some((conflict, blocking)) = ConflictType::detect(repository.workspace(), path)
            {
                conflicts.entry(conflict).or_default().insert(blocking);
            }

            writes.insert(path.clone(), blob);
        }

        if !conflicts.is_empty() {
            for (conflict, paths) in &conflicts {
                let message = ConflictMessage::from(conflict);
                tracing::info!(paths = ?paths, "{} {}", message.header, message.footer);
            }

            let blocking = conflicts.into_values().flatten().collect::<BTreeSet<_>>();
            return Err(RepositoryError::RestoreBlocked(blocking.into_iter().collect()).into());
        }

        Ok(Migration {
            commit_id: commit.id(),
            writes,
        })
    }

    pub fn commit_id(&self) -> CommitId {
        self.commit_id
    }

    /// Files to write, in path order
    pub fn writes(&self) -> impl Iterator<Item = (&str, &Blob)> {
        self.writes.iter().map(|(path, blob)| (path.as_str(), blob))
    }
}
