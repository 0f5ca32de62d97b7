use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::format;
use crate::sink::{Sink, WriteError};
use crate::types::{ContentDigest, ResultSet};

/// Overwrites `path` with the rendered result, atomically.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&mut self, results: &ResultSet) -> Result<(), WriteError> {
        let rendered = format::render(results);
        write_atomic(&self.path, rendered.as_bytes()).map_err(|source| WriteError {
            destination: self.destination(),
            source,
        })
    }
}

/// Replace `path` with `bytes`, or leave it untouched.
///
/// Bytes go to a sibling temp file named after their digest, are synced,
/// and then renamed over the destination. On any failure the temp file is
/// removed.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let digest = ContentDigest::from_content(bytes);
    let temp_path = temp_path_for(path, &digest);

    // Stale temp file from a crashed run that produced the same bytes.
    if temp_path.exists() {
        fs::remove_file(&temp_path)?;
    }

    let result = write_synced(&temp_path, bytes).and_then(|()| fs::rename(&temp_path, path));

    if result.is_err() {
        if let Err(err) = fs::remove_file(&temp_path) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(temp = %temp_path.display(), error = %err, "failed to remove temp file");
            }
        }
    } else {
        debug!(path = %path.display(), bytes = bytes.len(), "replaced file");
    }

    result
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn temp_path_for(path: &Path, digest: &ContentDigest) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(format!(".tmp.{}", digest.short()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_a_sibling() {
        let digest = ContentDigest::from_content(b"");
        let temp = temp_path_for(Path::new("/out/counts.csv"), &digest);
        assert_eq!(temp, PathBuf::from("/out/counts.csv.tmp.e3b0c44298fc"));
    }
}
