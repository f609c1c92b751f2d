//! Command implementations
//!
//! Every user-facing command is implemented as a method on `Repository` in
//! its own module under `porcelain`.

pub mod porcelain;
