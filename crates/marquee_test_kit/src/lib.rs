//! Test utilities for marquee tests
//!
//! Provides in-memory terminal sinks so tests can assert on the exact bytes
//! the progress line renders.

use std::io;
use std::sync::Mutex;

use marquee_domain::TerminalSink;

/// Sink that records every byte written to it.
///
/// # Example
/// ```ignore
/// let sink = Arc::new(RecordingSink::default());
/// let line = ProgressLine::spawn(sink.clone(), ProgressConfig::default());
/// line.update_progress("Status 1").await?;
/// assert_eq!(sink.contents(), "Status 1");
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    bytes: Mutex<Vec<u8>>,
    flushes: Mutex<usize>,
}

impl RecordingSink {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Everything written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of times the sink was flushed.
    pub fn flushes(&self) -> usize {
        *self.flushes.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Counts non-overlapping occurrences of `needle` in the contents.
    pub fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }
}

impl TerminalSink for RecordingSink {
    fn write(&self, buf: &[u8]) -> io::Result<()> {
        self.bytes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        *self.flushes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}

/// Sink whose every operation fails, like a closed terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSink;

impl TerminalSink for FailingSink {
    fn write(&self, _buf: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }

    fn flush(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }
}
