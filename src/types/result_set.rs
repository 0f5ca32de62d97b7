use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::Word;

/// One distinct word and how many times it occurred. `count >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWordCount")]
pub struct WordCount {
    pub word: Word,
    pub count: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Count for word '{0}' must be at least 1")]
pub struct ZeroCount(pub String);

#[derive(Deserialize)]
struct RawWordCount {
    word: Word,
    count: u64,
}

impl TryFrom<RawWordCount> for WordCount {
    type Error = ZeroCount;

    fn try_from(raw: RawWordCount) -> Result<Self, Self::Error> {
        if raw.count == 0 {
            return Err(ZeroCount(raw.word.into_string()));
        }
        Ok(WordCount {
            word: raw.word,
            count: raw.count,
        })
    }
}

/// The final, deterministically ordered result of one run.
///
/// Entries are unique by word and strictly ascending (byte-wise).
/// Only the sorter and the output parser construct it, both of which
/// uphold that ordering, so the type carries no public constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: Vec<WordCount>,
}

impl ResultSet {
    pub(crate) fn from_sorted(entries: Vec<WordCount>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| w[0].word < w[1].word),
            "result set entries must be strictly ascending"
        );
        debug_assert!(entries.iter().all(|entry| entry.count >= 1));
        Self { entries }
    }

    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(word))
            .ok()
            .map(|idx| self.entries[idx].count)
    }

    /// Sum of all counts. Wider than a single count so parsed sets cannot overflow it.
    pub fn total_count(&self) -> u128 {
        self.entries.iter().map(|entry| u128::from(entry.count)).sum()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
