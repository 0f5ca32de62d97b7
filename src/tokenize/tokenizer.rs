use std::borrow::Cow;
use std::iter::FusedIterator;

use crate::types::Word;

pub trait Tokenizer {
    type Tokens<'a>: Iterator<Item = Word> + Clone;

    /// Lazily split one line into normalized words.
    fn tokens<'a>(&self, line: &'a str) -> Self::Tokens<'a>;

    fn count_tokens(&self, line: &str) -> usize {
        self.tokens(line).count()
    }
}

/// v0: lowercase the line, then split on every run of characters that are
/// not ASCII alphanumeric.
///
/// Lowercasing happens before splitting, so a character whose lowercase
/// form is ASCII (KELVIN SIGN → `k`) joins the word around it. Any other
/// non-ASCII character is a separator, so every produced word matches
/// `[a-z0-9]+`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphanumericTokenizer;

impl Tokenizer for AlphanumericTokenizer {
    type Tokens<'a> = Tokens<'a>;

    fn tokens<'a>(&self, line: &'a str) -> Tokens<'a> {
        let line = if line.is_ascii() {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(line.to_lowercase())
        };
        Tokens { line, pos: 0 }
    }
}

/// Restartable token stream over one line: cloning it replays the
/// remaining tokens.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: Cow<'a, str>,
    pos: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let bytes = &self.line.as_bytes()[self.pos..];
        let Some(start) = bytes.iter().position(u8::is_ascii_alphanumeric) else {
            self.pos = self.line.len();
            return None;
        };
        // ASCII bytes never occur inside a multi-byte UTF-8 sequence, so both
        // ends of the run are char boundaries.
        let len = bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_alphanumeric())
            .unwrap_or(bytes.len() - start);
        let start = self.pos + start;
        let end = start + len;

        // Non-ASCII lines are already lowercased; ASCII ones are lowered per word.
        let word = self.line[start..end].to_ascii_lowercase();
        self.pos = end;
        Some(Word::from_normalized(word))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one word per two bytes, plus a trailing one.
        (0, Some((self.line.len() - self.pos).div_ceil(2)))
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str) -> Vec<String> {
        AlphanumericTokenizer
            .tokens(line)
            .map(Word::into_string)
            .collect()
    }

    #[test]
    fn splits_and_normalizes_sample_line() {
        assert_eq!(
            collect("The quick fox. The QUICK fox!"),
            vec!["the", "quick", "fox", "the", "quick", "fox"]
        );
    }

    #[test]
    fn empty_and_separator_only_lines_yield_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("   ...,;--  \t").is_empty());
    }

    #[test]
    fn lowercases_before_splitting() {
        assert_eq!(collect("\u{212A}elvin"), vec!["kelvin"]);
        // U+0130 lowercases to `i` followed by a combining dot, which separates.
        assert_eq!(
            collect("\u{212A}elvin \u{0130}stanbul"),
            vec!["kelvin", "i", "stanbul"]
        );
    }

    #[test]
    fn underscores_and_non_ascii_letters_are_separators() {
        assert_eq!(collect("snake_case"), vec!["snake", "case"]);
        assert_eq!(collect("Café au lait"), vec!["caf", "au", "lait"]);
        assert_eq!(collect("naïve über"), vec!["na", "ve", "ber"]);
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(collect("Route 66, exit 9b"), vec!["route", "66", "exit", "9b"]);
    }

    #[test]
    fn clone_restarts_from_current_position() {
        let mut tokens = AlphanumericTokenizer.tokens("one two three");
        assert_eq!(tokens.next().unwrap().as_str(), "one");
        let replay: Vec<String> = tokens.clone().map(Word::into_string).collect();
        let rest: Vec<String> = tokens.map(Word::into_string).collect();
        assert_eq!(replay, rest);
        assert_eq!(rest, vec!["two", "three"]);
    }

    #[test]
    fn count_tokens_matches_iteration() {
        assert_eq!(AlphanumericTokenizer.count_tokens("a b  c!!d"), 4);
    }

    #[test]
    fn size_hint_upper_bound_holds() {
        for line in ["a", "a b", "a b c ", "abc", ""] {
            let tokens = AlphanumericTokenizer.tokens(line);
            let upper = tokens.size_hint().1.unwrap();
            assert!(tokens.count() <= upper, "size_hint too small for {line:?}");
        }
    }
}
