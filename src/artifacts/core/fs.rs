//! Write-then-rename helpers for repository metadata
//!
//! Metadata files are first written to a temporary file in the destination
//! directory and then renamed into place, so readers never observe a
//! half-written file.

use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn stage_temp_file(path: &Path, data: &[u8]) -> anyhow::Result<NamedTempFile> {
    let dir = path
        .parent()
        .with_context(|| format!("Invalid metadata path {}", path.display()))?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Unable to create temporary file in {}", dir.display()))?;
    temp_file
        .write_all(data)
        .with_context(|| format!("Unable to write temporary file for {}", path.display()))?;
    temp_file
        .as_file()
        .sync_all()
        .with_context(|| format!("Unable to flush temporary file for {}", path.display()))?;

    Ok(temp_file)
}

/// Replace `path` with `data`, creating it when missing
pub fn write_atomically(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    stage_temp_file(path, data)?
        .persist(path)
        .with_context(|| format!("Unable to rename temporary file to {}", path.display()))?;

    Ok(())
}

/// Create `path` with `data`, failing if something is already there
pub fn write_new_atomically(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    stage_temp_file(path, data)?
        .persist_noclobber(path)
        .with_context(|| format!("Refusing to overwrite existing file {}", path.display()))?;

    Ok(())
}
