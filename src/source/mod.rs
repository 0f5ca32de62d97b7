pub mod source;

pub use source::{ReadError, SourceText};
