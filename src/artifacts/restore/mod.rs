//! Restoring a commit into the working directory
//!
//! - `conflict`: paths that block a restore
//! - `migration`: the verified set of writes a restore performs

pub mod conflict;
pub mod migration;
