//! Object types
//!
//! File contents are stored as blobs identified by the SHA-1 hash of their
//! serialized form (`blob <size>\0<content>`). Commits are numbered records
//! mapping paths to blob ids.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
