use std::io::{self, Write};

use crate::format;
use crate::sink::{Sink, WriteError};
use crate::types::ResultSet;

/// Writes the rendered result to a stream (stdout by default).
///
/// Output is rendered in memory and written with a single `write_all`
/// followed by a flush. A stream cannot be rolled back, so a failure part
/// way through is best-effort: it is reported as `WriteError`, never as
/// success, but bytes already emitted stay emitted.
pub struct ConsoleSink<W> {
    writer: W,
    label: String,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::with_label(io::stdout(), "<stdout>")
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_label(writer, "<stream>")
    }

    pub fn with_label(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn destination(&self) -> String {
        self.label.clone()
    }

    fn write(&mut self, results: &ResultSet) -> Result<(), WriteError> {
        let rendered = format::render(results);
        self.writer
            .write_all(rendered.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|source| WriteError {
                destination: self.label.clone(),
                source,
            })
    }
}
