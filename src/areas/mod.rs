//! Core repository components
//!
//! - `database`: content store for immutable file snapshots (blobs)
//! - `history`: append-only commit chain
//! - `index`: staging area for the next commit
//! - `repository`: the aggregate tying the other areas together
//! - `workspace`: working directory file system operations

pub(crate) mod database;
pub(crate) mod history;
pub(crate) mod index;
pub mod repository;
pub(crate) mod workspace;
