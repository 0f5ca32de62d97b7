use std::sync::mpsc;
use std::thread;

use tracing::trace;

use crate::count::counter::{CountOverflow, WordCounter};
use crate::tokenize::Tokenizer;

/// Count `lines` split into up to `partitions` contiguous ranges, one
/// counter per range on its own scoped thread, then merge by summing.
///
/// Produces exactly the same mapping as counting the lines in order; one
/// partition (or fewer than two lines) counts on the calling thread.
pub fn count_partitioned<T>(
    tokenizer: &T,
    lines: &[&str],
    partitions: usize,
) -> Result<WordCounter, CountOverflow>
where
    T: Tokenizer + Sync,
{
    let partitions = partitions.max(1);
    if partitions == 1 || lines.len() < 2 {
        let mut counter = WordCounter::new();
        for line in lines {
            counter.add_line(tokenizer, line)?;
        }
        return Ok(counter);
    }

    let chunk_size = lines.len().div_ceil(partitions);

    thread::scope(|scope| {
        let (sender, receiver) = mpsc::channel();

        for (index, chunk) in lines.chunks(chunk_size).enumerate() {
            let sender = sender.clone();

            scope.spawn(move || {
                let mut counter = WordCounter::new();
                let result = chunk
                    .iter()
                    .try_for_each(|line| counter.add_line(tokenizer, line))
                    .map(|()| counter);
                trace!(partition = index, lines = chunk.len(), "partition counted");

                // The receiver lives until the scope ends.
                let _ = sender.send(result);
            });
        }

        drop(sender);

        receiver
            .into_iter()
            .try_fold(WordCounter::new(), |mut merged, partial| {
                merged.merge(partial?)?;
                Ok(merged)
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::AlphanumericTokenizer;

    const TEXT: &str = "To be, or not to be, that is the question:\n\
        Whether 'tis nobler in the mind to suffer\n\
        The slings and arrows of outrageous fortune,\n\
        Or to take arms against a sea of troubles\n\
        And by opposing end them. To die, to sleep;";

    #[test]
    fn partitioned_matches_sequential() {
        let lines: Vec<&str> = TEXT.lines().collect();
        let sequential = count_partitioned(&AlphanumericTokenizer, &lines, 1).unwrap();

        for partitions in [2, 3, 5, 16] {
            let partitioned =
                count_partitioned(&AlphanumericTokenizer, &lines, partitions).unwrap();
            assert_eq!(partitioned.snapshot(), sequential.snapshot(), "partitions = {partitions}");
            assert_eq!(partitioned.total_tokens(), sequential.total_tokens());
        }

        assert_eq!(sequential.get("to"), Some(6));
        assert_eq!(sequential.get("the"), Some(3));
    }

    #[test]
    fn zero_partitions_and_empty_input_are_handled() {
        let counter = count_partitioned(&AlphanumericTokenizer, &[], 0).unwrap();
        assert!(counter.is_empty());

        let counter = count_partitioned(&AlphanumericTokenizer, &["", "", ""], 4).unwrap();
        assert!(counter.is_empty());
    }
}
