use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::ContentDigest;

/// Source file missing, unreadable, or not valid UTF-8.
#[derive(Debug, Error)]
#[error("failed to read {}: {source}", .path.display())]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// The fully materialized input of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    path: PathBuf,
    digest: ContentDigest,
    content: String,
}

impl SourceText {
    pub fn read(path: &Path) -> Result<Self, ReadError> {
        let raw = fs::read(path).map_err(|source| ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::ingest(path, raw)
    }

    /// Validate raw bytes read from `path`. Invalid UTF-8 is a read failure.
    pub fn ingest(path: impl Into<PathBuf>, raw: Vec<u8>) -> Result<Self, ReadError> {
        let path = path.into();
        let content = match String::from_utf8(raw) {
            Ok(content) => content,
            Err(err) => {
                return Err(ReadError {
                    path,
                    source: io::Error::new(io::ErrorKind::InvalidData, err),
                })
            }
        };

        let digest = ContentDigest::from_content(content.as_bytes());

        Ok(SourceText {
            path,
            digest,
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn digest(&self) -> &ContentDigest {
        &self.digest
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lines split on `\n`, with a trailing `\r` stripped.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.content.lines()
    }
}
