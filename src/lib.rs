//! minigit: a minimal local version-control engine
//!
//! A single repository tracks the working directory it lives in. Files are
//! staged into an index, snapshotted into an append-only chain of numbered
//! commits, compared against the latest commit, and restored from any commit.
//!
//! ## Layout
//!
//! - `areas`: the on-disk building blocks (object store, index, history, workspace)
//! - `artifacts`: data types and algorithms (objects, status, restore)
//! - `commands`: user-facing operations implemented on top of the areas

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::repository::Repository;
pub use artifacts::core::error::RepositoryError;
