//! Index entry representation
//!
//! Each entry names a staged file and the blob holding the content captured
//! when it was added.

use crate::artifacts::index::VERSION;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct IndexEntry {
    /// File path relative to repository root, `/`-separated
    pub name: String,
    /// Blob holding the staged content
    pub oid: ObjectId,
    /// Size of the staged content in bytes
    pub size: u64,
}

impl IndexEntry {
    /// Whether both entries captured the same content
    pub fn same_content(&self, other: &IndexEntry) -> bool {
        self.oid == other.oid && self.size == other.size
    }
}

/// On-disk shape of the index file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFile {
    pub version: u32,
    pub entries: Vec<IndexEntry>,
}

impl IndexFile {
    pub fn new(entries: Vec<IndexEntry>) -> Self {
        IndexFile {
            version: VERSION,
            entries,
        }
    }
}
