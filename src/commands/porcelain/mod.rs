//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `status`: Show working tree status
//! - `log`: Show commit history
//! - `restore`: Rewrite the working directory from a commit

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod restore;
pub mod status;
