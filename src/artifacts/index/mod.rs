//! Index file format
//!
//! The index (also called staging area) records the content captured for
//! every path staged since the last commit or restore.
//!
//! ## File Format
//!
//! `.minigit/index.json`, a pretty-printed JSON document:
//!
//! ```text
//! {
//!   "version": 1,
//!   "entries": [
//!     { "name": "a.txt", "oid": "<40 hex>", "size": 12 }
//!   ]
//! }
//! ```
//!
//! Entries are sorted by name.

pub mod index_entry;

/// Index file format version
pub const VERSION: u32 = 1;
