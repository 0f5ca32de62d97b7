pub mod identifiers;
pub mod result_set;

pub use identifiers::{ContentDigest, Word, WordError};
pub use result_set::{ResultSet, WordCount, ZeroCount};
