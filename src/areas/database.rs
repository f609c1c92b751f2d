//! Content store
//!
//! Blobs are stored zlib-compressed under `.minigit/objects`, addressed by the
//! SHA-1 of their serialized form. The hash is only used for addressing:
//! an existing object is reused only when its bytes match the new content
//! (otherwise it is damaged and gets rewritten), and every load is checked
//! against the id it was requested under.

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::core::fs::write_atomically;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store a blob, returning its id
    ///
    /// Storing content that is already present is a no-op once the existing
    /// object has been confirmed byte-for-byte. An existing object that cannot
    /// be read back as the same content is replaced.
    pub fn store(&self, blob: &Blob) -> anyhow::Result<ObjectId> {
        let object_id = blob.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            let serialized = blob.serialize()?;
            let existing = self.read_object(object_path.clone());
            if existing.is_ok_and(|existing| existing == serialized) {
                tracing::debug!(oid = %object_id, "object already stored");
                return Ok(object_id);
            }

            tracing::warn!(oid = %object_id, "rewriting damaged object");
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, blob.serialize()?)?;
        tracing::debug!(oid = %object_id, size = blob.size(), "object stored");

        Ok(object_id)
    }

    /// Load and verify a blob
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_path = self.path.join(object_id.to_path());
        let object_content = self.read_object(object_path)?;

        let blob = Blob::deserialize(object_content)
            .map_err(|_| RepositoryError::CorruptObject(object_id.to_string()))?;
        if blob.object_id()? != *object_id {
            return Err(RepositoryError::CorruptObject(object_id.to_string()).into());
        }

        Ok(blob)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_content = Self::compress(object_content)?;

        write_atomically(&object_path, &object_content).context(format!(
            "Unable to write object file {}",
            object_path.display()
        ))
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }
}
