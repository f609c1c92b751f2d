use crate::areas::repository::METADATA_DIR;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::restore::migration::Migration;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Working directory rooted at the repository root
///
/// Paths handed out by the workspace are repository-relative strings with `/`
/// separators, the same keys used by the index and by commits.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolve a user-supplied path to a repository-relative path
    ///
    /// Relative paths are taken from the repository root. `.` and `..` are
    /// resolved lexically, so the target does not need to exist. Paths that
    /// leave the root or point into the metadata directory are rejected.
    pub fn relative_path(&self, user_path: &str) -> anyhow::Result<String> {
        let joined = self.path.join(user_path);

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::ParentDir => {
                    normalized.pop();
                }
                Component::CurDir => {}
                other => normalized.push(other.as_os_str()),
            }
        }

        let relative = normalized
            .strip_prefix(&self.path)
            .map_err(|_| RepositoryError::OutsideRepository(user_path.to_string()))?;
        if Self::is_ignored(relative) {
            return Err(RepositoryError::OutsideRepository(user_path.to_string()).into());
        }

        // built from a `&str`, so always valid UTF-8
        Self::to_key(relative)
            .ok_or_else(|| RepositoryError::OutsideRepository(user_path.to_string()).into())
    }

    /// Every file under `root` (or the whole working directory), sorted
    ///
    /// `root` is repository-relative; an empty string means the whole tree.
    /// Files whose path is not valid UTF-8 cannot be named by a key and are
    /// skipped with a warning.
    pub fn list_files(&self, root: Option<&str>) -> anyhow::Result<Vec<String>> {
        let root_path = match root {
            Some(root) if !root.is_empty() => self.path.join(root),
            _ => self.path.to_path_buf(),
        };

        if !root_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root_path);
        }

        let mut files = WalkDir::new(&root_path)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != METADATA_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(self.path.as_ref()).ok()?;
                if Self::is_ignored(relative) {
                    return None;
                }

                let key = Self::to_key(relative);
                if key.is_none() {
                    tracing::warn!(path = ?relative, "skipping file with a non UTF-8 name");
                }
                key
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    pub fn is_file(&self, file_path: &str) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn is_dir(&self, file_path: &str) -> bool {
        self.path.join(file_path).is_dir()
    }

    pub fn read_file(&self, file_path: &str) -> anyhow::Result<Bytes> {
        let content = std::fs::read(self.path.join(file_path))
            .with_context(|| format!("Failed to read file: {file_path}"))?;

        Ok(content.into())
    }

    /// Write `data` to a repository-relative path, creating parent directories
    pub fn write_file(&self, file_path: &str, data: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for: {file_path}"))?;
        }

        std::fs::write(&path, data).with_context(|| format!("Failed to write file: {file_path}"))
    }

    /// Write every file of a planned restore, in path order
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<Vec<String>> {
        migration
            .writes()
            .map(|(file_path, blob)| {
                self.write_file(file_path, blob.content())?;
                tracing::debug!(path = %file_path, size = blob.size(), "file restored");
                Ok(file_path.to_string())
            })
            .collect()
    }

    /// First ancestor of `file_path` (or the path itself) that exists but is
    /// not of the kind a restore needs: a directory where the file goes, or a
    /// file where a parent directory goes.
    pub fn blocking_path(&self, file_path: &str) -> Option<String> {
        let relative = Path::new(file_path);

        for ancestor in relative.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            let path = self.path.join(ancestor);
            if path.exists() && !path.is_dir() {
                return Self::to_key(ancestor);
            }
        }

        let path = self.path.join(relative);
        if path.exists() && !path.is_file() {
            return Some(file_path.to_string());
        }

        None
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().next().is_some_and(|component| {
            matches!(component, Component::Normal(name) if name == METADATA_DIR)
        })
    }

    fn to_key(path: &Path) -> Option<String> {
        let components = path
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;

        Some(components.join("/"))
    }
}
