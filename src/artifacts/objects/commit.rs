//! Commit record
//!
//! Commits are numbered snapshots of the files that were staged when they
//! were created. They contain:
//! - A sequential id (1-based)
//! - The id of the previous HEAD, if any
//! - A timestamp, strictly increasing along the chain
//! - The commit message
//! - A path to blob id mapping for every staged file
//!
//! ## Format
//!
//! On disk, `.minigit/commits/<id>.json`:
//! ```text
//! {
//!   "id": 2,
//!   "parent": 1,
//!   "timestamp": "2023-01-01T12:00:00+00:00",
//!   "message": "second",
//!   "files": { "a.txt": "<40 hex>" }
//! }
//! ```

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type CommitId = u64;

/// Snapshot of the staged files, keyed by repository-relative path
pub type CommitFiles = BTreeMap<String, ObjectId>;

/// Environment variable overriding the commit timestamp
pub const COMMIT_DATE_ENV: &str = "MINIGIT_COMMIT_DATE";

const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Resolve a commit id written by the user
///
/// Any integer is accepted; zero, negative ids and ids too large to have ever
/// been assigned name no commit.
pub fn parse_commit_id(arg: &str) -> Result<CommitId, RepositoryError> {
    arg.trim()
        .parse::<CommitId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| RepositoryError::CommitNotFound(arg.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Commit {
    id: CommitId,
    parent: Option<CommitId>,
    timestamp: DateTime<FixedOffset>,
    message: String,
    files: CommitFiles,
}

impl Commit {
    pub fn id(&self) -> CommitId {
        self.id
    }

    pub fn parent(&self) -> Option<CommitId> {
        self.parent
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &CommitFiles {
        &self.files
    }

    /// Paths recorded in this commit, in path order
    pub fn file_names(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    /// First line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Format timestamp in human-readable form, like "2023-01-01 12:00:00 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(COMMIT_DATE_FORMAT).to_string()
    }

    /// Pick the timestamp for the commit following `previous`
    ///
    /// Uses `MINIGIT_COMMIT_DATE` when set and parseable, the local clock
    /// otherwise. The result is always later than `previous`; when the clock
    /// says otherwise it is moved to one second after it.
    pub fn next_timestamp(previous: Option<&Commit>) -> DateTime<FixedOffset> {
        let now = Self::timestamp_from_env().unwrap_or_else(|| chrono::Local::now().fixed_offset());

        match previous {
            Some(previous) if now <= previous.timestamp => {
                previous.timestamp + chrono::Duration::seconds(1)
            }
            _ => now,
        }
    }

    fn timestamp_from_env() -> Option<DateTime<FixedOffset>> {
        let date_str = std::env::var(COMMIT_DATE_ENV).ok()?;

        let timestamp = DateTime::parse_from_rfc3339(&date_str)
            .or_else(|_| DateTime::parse_from_str(&date_str, COMMIT_DATE_FORMAT))
            .ok();
        if timestamp.is_none() {
            tracing::warn!(value = %date_str, "ignoring unparseable {COMMIT_DATE_ENV}");
        }

        timestamp
    }
}
