use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::format;
use crate::pipeline::RunSummary;
use crate::sink::file::write_atomic;
use crate::sink::WriteError;
use crate::types::ContentDigest;

/// Machine-readable record of one run.
///
/// Every field except `created_at` is a pure function of the input and
/// the partition count, so two runs over the same file differ only there.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunReport {
    pub input: String,
    pub input_digest: ContentDigest,
    pub output: Option<String>,
    /// Digest of the rendered `word,count` bytes, whether or not a file was written.
    pub result_digest: ContentDigest,
    pub partitions: usize,
    pub created_at: DateTime<Utc>, // informational only
    pub total_tokens: u64,
    pub distinct_words: usize,
}

impl RunReport {
    pub fn from_summary(summary: &RunSummary, output: Option<&Path>) -> Self {
        let rendered = format::render(&summary.results);
        Self {
            input: summary.input.display().to_string(),
            input_digest: summary.input_digest.clone(),
            output: output.map(|path| path.display().to_string()),
            result_digest: ContentDigest::from_content(rendered.as_bytes()),
            partitions: summary.partitions,
            created_at: Utc::now(),
            total_tokens: summary.total_tokens,
            distinct_words: summary.distinct_words(),
        }
    }

    /// Pretty JSON with a trailing newline, replaced atomically.
    pub fn write(&self, path: &Path) -> Result<(), WriteError> {
        let to_write_error = |source: io::Error| WriteError {
            destination: path.display().to_string(),
            source,
        };

        let mut json = serde_json::to_vec_pretty(self).map_err(|err| to_write_error(err.into()))?;
        json.push(b'\n');

        write_atomic(path, &json).map_err(to_write_error)
    }
}
