//! Terminal sink over the process error stream.
//!
//! Serializes writes so a single buffer is never split by a concurrent writer.

use std::io::{self, Stderr, Write};
use std::sync::{Arc, Mutex};

use marquee_domain::TerminalSink;

/// Thread-safe terminal sink that appends to stderr.
///
/// Generic over the writer type `E` to support testing with in-memory
/// writers.
#[derive(Debug)]
pub struct StdTerminalSink<E = Stderr> {
    stderr: Arc<Mutex<E>>,
}

impl<E> Clone for StdTerminalSink<E> {
    fn clone(&self) -> Self {
        Self { stderr: self.stderr.clone() }
    }
}

impl Default for StdTerminalSink<Stderr> {
    fn default() -> Self {
        Self { stderr: Arc::new(Mutex::new(io::stderr())) }
    }
}

impl<E> StdTerminalSink<E> {
    /// Creates a sink over a custom writer.
    pub fn with_writer(stderr: E) -> Self {
        Self { stderr: Arc::new(Mutex::new(stderr)) }
    }
}

impl<E: Write + Send> TerminalSink for StdTerminalSink<E> {
    fn write(&self, buf: &[u8]) -> io::Result<()> {
        let mut guard = self.stderr.lock().unwrap_or_else(|e| e.into_inner());
        guard.write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        let mut guard = self.stderr.lock().unwrap_or_else(|e| e.into_inner());
        guard.flush()
    }
}
