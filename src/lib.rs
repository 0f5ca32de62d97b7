//! Deterministic batch word-frequency counting.
//!
//! `wordcount-core` reads a UTF-8 text file, splits each line into
//! normalized words (`[a-z0-9]+`), counts every distinct word, orders the
//! result byte-wise, and writes `word,count` lines to a file (atomic
//! replace) or a stream. Identical input always produces identical
//! output, byte-for-byte, whether counted sequentially or in partitions.

pub mod cli;
pub mod count;
pub mod format;
pub mod pipeline;
pub mod report;
pub mod sink;
pub mod sort;
pub mod source;
pub mod tokenize;
pub mod types;
