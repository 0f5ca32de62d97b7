use std::io::{self, Write};

use wordcount_core::count::WordCounter;
use wordcount_core::sink::{ConsoleSink, Sink};
use wordcount_core::sort;
use wordcount_core::tokenize::AlphanumericTokenizer;
use wordcount_core::types::ResultSet;

fn sample_results() -> ResultSet {
    let mut counter = WordCounter::new();
    counter
        .add_line(&AlphanumericTokenizer, "The quick fox. The QUICK fox!")
        .unwrap();
    sort::finalize(counter)
}

/// Accepts `limit` bytes, then fails every write.
struct FailingWriter {
    accepted: Vec<u8>,
    limit: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit.saturating_sub(self.accepted.len());
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"));
        }
        let n = room.min(buf.len());
        self.accepted.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn writes_word_count_lines() {
    let mut sink = ConsoleSink::new(Vec::new());
    sink.write(&sample_results()).unwrap();

    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "fox,2\nquick,2\nthe,2\n");
}

#[test]
fn empty_result_writes_nothing() {
    let mut sink = ConsoleSink::new(Vec::new());
    sink.write(&ResultSet::default()).unwrap();

    assert!(sink.into_inner().is_empty());
}

#[test]
fn partial_stream_failure_is_reported() {
    let mut sink = ConsoleSink::with_label(
        FailingWriter {
            accepted: Vec::new(),
            limit: 8,
        },
        "<pipe>",
    );

    let err = sink.write(&sample_results()).unwrap_err();

    assert_eq!(err.destination, "<pipe>");
    assert_eq!(err.source.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(err.to_string(), "failed to write <pipe>: stream closed");
    assert_eq!(sink.into_inner().accepted, b"fox,2\nqu");
}
