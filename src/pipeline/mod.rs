pub mod config;
pub mod error;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::count::{count_partitioned, CountOverflow, WordCounter};
use crate::sink::Sink;
use crate::sort;
use crate::source::SourceText;
use crate::tokenize::{AlphanumericTokenizer, Tokenizer};
use crate::types::{ContentDigest, ResultSet};
pub use config::PipelineConfig;
pub use error::PipelineError;

/// Outcome of one successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input: PathBuf,
    pub input_digest: ContentDigest,
    pub total_tokens: u64,
    pub partitions: usize,
    pub results: ResultSet,
}

impl RunSummary {
    pub fn distinct_words(&self) -> usize {
        self.results.len()
    }
}

pub struct Pipeline<T> {
    tokenizer: T,
    config: PipelineConfig,
}

impl Default for Pipeline<AlphanumericTokenizer> {
    fn default() -> Self {
        Self {
            tokenizer: AlphanumericTokenizer,
            config: PipelineConfig::v0(),
        }
    }
}

impl<T> Pipeline<T>
where
    T: Tokenizer + Sync,
{
    pub fn new(tokenizer: T, config: PipelineConfig) -> Self {
        Self { tokenizer, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Tokenize and count every line of `source`, in partitions when configured.
    pub fn count(&self, source: &SourceText) -> Result<WordCounter, CountOverflow> {
        let lines: Vec<&str> = source.lines().collect();
        count_partitioned(&self.tokenizer, &lines, self.config.effective_partitions())
    }

    /// Read `input`, count, sort, and write the result to every sink in
    /// order. The first failure aborts the run.
    pub fn run(
        &self,
        input: &Path,
        sinks: &mut [&mut dyn Sink],
    ) -> Result<RunSummary, PipelineError> {
        // 1. Read
        let source = SourceText::read(input)?;
        debug!(
            input = %input.display(),
            bytes = source.content().len(),
            digest = %source.digest(),
            "source read"
        );

        // 2. Tokenize + count
        let partitions = self.config.effective_partitions();
        let counter = self.count(&source)?;
        let total_tokens = counter.total_tokens();
        debug!(total_tokens, distinct = counter.distinct_words(), partitions, "counted");

        // 3. Sort
        let results = sort::finalize(counter);

        debug_assert_eq!(
            results.total_count(),
            u128::from(total_tokens),
            "sum of counts must equal number of tokens"
        );

        // 4. Write
        for sink in sinks.iter_mut() {
            sink.write(&results)?;
            debug!(destination = %sink.destination(), entries = results.len(), "written");
        }

        info!(
            input = %input.display(),
            total_tokens,
            distinct_words = results.len(),
            "word count complete"
        );

        Ok(RunSummary {
            input: input.to_path_buf(),
            input_digest: source.digest().clone(),
            total_tokens,
            partitions,
            results,
        })
    }
}
