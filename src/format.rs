//! The `word,count` line format shared by every sink.

use std::fmt;

use thiserror::Error;

use crate::types::{ResultSet, Word, WordCount};

pub const FIELD_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingDelimiter,
    InvalidWord(String),
    InvalidCount(String),
    OutOfOrder { previous: String, word: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingDelimiter => write!(f, "expected 'word{FIELD_DELIMITER}count'"),
            ParseErrorKind::InvalidWord(word) => write!(f, "invalid word {word:?}"),
            ParseErrorKind::InvalidCount(count) => write!(f, "invalid count {count:?}"),
            ParseErrorKind::OutOfOrder { previous, word } => {
                write!(f, "{word:?} does not sort after {previous:?}")
            }
        }
    }
}

/// One line per entry, each terminated by `\n`. Empty result, empty string.
pub fn render(results: &ResultSet) -> String {
    let mut output = String::new();
    for entry in results {
        output.push_str(&format!(
            "{}{FIELD_DELIMITER}{}\n",
            entry.word, entry.count
        ));
    }
    output
}

/// Recover a result set from rendered output, validating every invariant.
pub fn parse(input: &str) -> Result<ResultSet, ParseError> {
    let mut entries: Vec<WordCount> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let fail = |kind| ParseError { line: line_no, kind };

        let (word, count) = line
            .split_once(FIELD_DELIMITER)
            .ok_or_else(|| fail(ParseErrorKind::MissingDelimiter))?;

        let word = Word::new(word)
            .map_err(|_| fail(ParseErrorKind::InvalidWord(word.to_string())))?;

        // `u64::from_str` accepts a leading '+' and leading zeros; `render`
        // never writes either, so accepting them would break the round-trip.
        let canonical = !count.starts_with('+') && !count.starts_with('0');
        let count = match count.parse::<u64>() {
            Ok(value) if value >= 1 && canonical => value,
            _ => return Err(fail(ParseErrorKind::InvalidCount(count.to_string()))),
        };

        if let Some(previous) = entries.last() {
            if previous.word >= word {
                return Err(fail(ParseErrorKind::OutOfOrder {
                    previous: previous.word.to_string(),
                    word: word.into_string(),
                }));
            }
        }

        entries.push(WordCount { word, count });
    }

    Ok(ResultSet::from_sorted(entries))
}
