use std::collections::HashMap;

use thiserror::Error;

use crate::tokenize::Tokenizer;
use crate::types::Word;

/// Label used when the running token total, rather than one word, overflows.
pub const TOTAL_LABEL: &str = "<total>";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("count overflow for word '{word}'")]
pub struct CountOverflow {
    pub word: String,
}

/// Word → occurrence count aggregation for a single run or partition.
///
/// A failed `add`/`record`/`merge` step leaves the counted state as it was
/// before that step.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    counts: HashMap<Word, u64>,
    total_tokens: u64,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, word: Word) -> Result<(), CountOverflow> {
        self.record(word, 1)
    }

    pub fn add_line<T>(&mut self, tokenizer: &T, line: &str) -> Result<(), CountOverflow>
    where
        T: Tokenizer,
    {
        for word in tokenizer.tokens(line) {
            self.add(word)?;
        }
        Ok(())
    }

    /// Count `occurrences` of `word` at once. Zero is a no-op so that no
    /// entry ever holds a zero count.
    pub fn record(&mut self, word: Word, occurrences: u64) -> Result<(), CountOverflow> {
        if occurrences == 0 {
            return Ok(());
        }

        let total = self
            .total_tokens
            .checked_add(occurrences)
            .ok_or_else(|| CountOverflow {
                word: TOTAL_LABEL.to_string(),
            })?;

        match self.counts.get_mut(&word) {
            Some(count) => {
                *count = count.checked_add(occurrences).ok_or_else(|| CountOverflow {
                    word: word.into_string(),
                })?;
            }
            None => {
                self.counts.insert(word, occurrences);
            }
        }

        self.total_tokens = total;
        Ok(())
    }

    /// Sum another counter into this one. Order of merges does not matter.
    pub fn merge(&mut self, other: WordCounter) -> Result<(), CountOverflow> {
        for (word, count) in other.counts {
            self.record(word, count)?;
        }
        Ok(())
    }

    /// Read-only view of the current mapping.
    pub fn snapshot(&self) -> &HashMap<Word, u64> {
        &self.counts
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Hand the mapping over for sorting.
    pub fn into_counts(self) -> HashMap<Word, u64> {
        self.counts
    }
}
