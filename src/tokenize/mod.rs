pub mod tokenizer;

pub use tokenizer::{AlphanumericTokenizer, Tokenizer, Tokens};
