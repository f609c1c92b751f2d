//! Working tree status inspection
//!
//! Compares the working directory against the staging index and the HEAD
//! commit and sorts every path into one category.
//!
//! ## Components
//!
//! - `file_change`: change categories and their labels
//! - `inspector`: content comparison against HEAD
//! - `status_info`: classification and the resulting report

pub mod file_change;
pub mod inspector;
pub mod status_info;
