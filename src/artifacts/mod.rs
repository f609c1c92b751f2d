//! Data structures and algorithms
//!
//! - `core`: shared utilities (errors, atomic writes, pager wrapper)
//! - `index`: index entry type
//! - `objects`: blobs, object ids and commit records
//! - `restore`: planning and conflict detection for restoring a commit
//! - `status`: working tree status inspection

pub mod core;
pub mod index;
pub mod objects;
pub mod restore;
pub mod status;
