use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// A normalized word: non-empty, ASCII lowercase letters and digits only.
///
/// Ordering is byte-wise, which for this alphabet is also the
/// lexicographic order, independent of platform or locale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains characters outside [a-z0-9]: {0:?}")]
    InvalidCharacter(String),
}

impl Word {
    /// Validate an already normalized word.
    pub fn new(raw: impl Into<String>) -> Result<Self, WordError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(WordError::Empty);
        }
        if !raw.bytes().all(is_word_byte) {
            return Err(WordError::InvalidCharacter(raw));
        }
        Ok(Word(raw))
    }

    /// Tokenizer output is normalized by construction.
    pub(crate) fn from_normalized(normalized: String) -> Self {
        debug_assert!(!normalized.is_empty() && normalized.bytes().all(is_word_byte));
        Word(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of input or rendered output, `sha256:<hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDigest(String);

impl ContentDigest {
    const PREFIX: &'static str = "sha256:";

    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ContentDigest(format!("{}{hex}", Self::PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex characters, used to name temp files.
    pub fn short(&self) -> &str {
        let hex = self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0);
        &hex[..hex.len().min(12)]
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
