//! Writer adapter that routes existing logging output through a progress line.
//!
//! Each buffer handed to the writer becomes one ordinary write, so log lines
//! are printed above the progress line without splicing into it.

use std::{fmt, io};

use marquee_domain::Error;
use tracing_subscriber::fmt::MakeWriter;

use crate::ProgressLine;

/// Byte and string writer that forwards to
/// [`ProgressLine::write_ordinary_blocking`].
///
/// Suitable as the writer of a `tracing_subscriber` fmt layer:
///
/// ```ignore
/// let line = ProgressLine::detached(StdTerminalSink::default(), ProgressConfig::default())?;
/// tracing_subscriber::fmt().with_writer(line.writer()).init();
/// ```
#[derive(Debug, Clone)]
pub struct ProgressWriter {
    line: ProgressLine,
}

impl ProgressWriter {
    pub fn new(line: ProgressLine) -> Self {
        Self { line }
    }
}

fn into_io_error(error: Error) -> io::Error {
    match error {
        Error::ActorClosed => io::Error::new(io::ErrorKind::BrokenPipe, error),
        error => io::Error::other(error),
    }
}

impl io::Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.write_ordinary_blocking(buf).map_err(into_io_error)?;
        Ok(buf.len())
    }

    // Every write is already on the sink when it returns.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for ProgressWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.line.write_ordinary_blocking(s).map_err(|_| fmt::Error)
    }
}

impl<'a> MakeWriter<'a> for ProgressWriter {
    type Writer = ProgressWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
