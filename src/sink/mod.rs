pub mod console;
pub mod file;

use std::io;

use thiserror::Error;

use crate::types::ResultSet;

pub use console::ConsoleSink;
pub use file::FileSink;

#[derive(Debug, Error)]
#[error("failed to write {destination}: {source}")]
pub struct WriteError {
    pub destination: String,
    #[source]
    pub source: io::Error,
}

/// A destination for the final result of a run.
///
/// `write` either fully succeeds or returns an error; a sink never reports
/// success for partially written output.
pub trait Sink {
    /// Human-readable destination name for diagnostics.
    fn destination(&self) -> String;

    fn write(&mut self, results: &ResultSet) -> Result<(), WriteError>;
}
