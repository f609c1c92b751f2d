//! Blob object
//!
//! Blobs store file content as raw bytes, without names or metadata.
//!
//! ## Format
//!
//! On disk (before compression): `blob <size>\0<content>`

use crate::artifacts::objects::object::{Object, Packable};
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;

const BLOB_TYPE: &str = "blob";

/// Snapshot of one file's bytes
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Parse a serialized blob, checking the header against the payload
    pub fn deserialize(data: Bytes) -> anyhow::Result<Self> {
        let header_end = data
            .iter()
            .position(|&byte| byte == 0)
            .context("Missing blob header terminator")?;
        let header = std::str::from_utf8(&data[..header_end]).context("Invalid blob header")?;

        let (object_type, size) = header
            .split_once(' ')
            .with_context(|| format!("Malformed blob header: {header}"))?;
        if object_type != BLOB_TYPE {
            anyhow::bail!("Unexpected object type: {object_type}");
        }
        let size = size
            .parse::<usize>()
            .with_context(|| format!("Invalid blob size: {size}"))?;

        let content = data.slice(header_end + 1..);
        if content.len() != size {
            anyhow::bail!(
                "Blob size mismatch: header says {size}, found {}",
                content.len()
            );
        }

        Ok(Self::new(content))
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let header = format!("{} {}\0", self.object_type(), self.content.len());

        let mut blob_bytes = Vec::with_capacity(header.len() + self.content.len());
        blob_bytes.extend_from_slice(header.as_bytes());
        blob_bytes.extend_from_slice(&self.content);

        Ok(Bytes::from(blob_bytes))
    }
}

impl Object for Blob {
    fn object_type(&self) -> &'static str {
        BLOB_TYPE
    }
}
