use std::collections::HashMap;

use crate::count::WordCounter;
use crate::types::{ResultSet, Word, WordCount};

/// Order an unordered word → count mapping by word, byte-wise ascending.
pub fn sort_counts(counts: HashMap<Word, u64>) -> ResultSet {
    let mut entries: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();

    // Keys are unique, so an unstable sort is still a total, reproducible order.
    entries.sort_unstable_by(|a, b| a.word.as_str().as_bytes().cmp(b.word.as_str().as_bytes()));

    ResultSet::from_sorted(entries)
}

/// Consume a finished counter into its ordered result.
pub fn finalize(counter: WordCounter) -> ResultSet {
    sort_counts(counter.into_counts())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_byte_wise_with_digits_first() {
        let mut counts = HashMap::new();
        for (word, count) in [("zebra", 1), ("apple", 3), ("10", 2), ("9", 1), ("app", 4)] {
            counts.insert(Word::new(word).unwrap(), count);
        }

        let results = sort_counts(counts);
        let words: Vec<&str> = results.iter().map(|entry| entry.word.as_str()).collect();

        assert_eq!(words, vec!["10", "9", "app", "apple", "zebra"]);
        assert_eq!(results.get("apple"), Some(3));
        assert_eq!(results.total_count(), 11);
    }

    #[test]
    fn empty_mapping_gives_empty_result() {
        assert!(sort_counts(HashMap::new()).is_empty());
    }
}
